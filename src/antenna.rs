//! Singleton pattern: one antenna, one controller.
//!
//! There is a single physical antenna, so the type that steers it must never
//! be instantiated twice. Instead of class-level state the live instance is
//! held by an explicitly owned [`AntennaRegistry`] that callers pass around.
//! A thread-local registry in [`global`] provides a process-wide access point
//! for code that cannot take the registry as a parameter.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use colored::Colorize;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{AntennaError, Result};

// ============================================================================
// Resource
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Direction {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Direction {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Direction> for (f64, f64, f64) {
    fn from(direction: Direction) -> Self {
        direction.as_tuple()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

/// Controller for the direction of the one antenna.
///
/// Only [`AntennaRegistry`] constructs these.
#[derive(Debug, Default)]
pub struct Antenna {
    direction: Direction,
}

impl Antenna {
    fn new() -> Self {
        Self::default()
    }

    pub fn current_direction(&self) -> (f64, f64, f64) {
        self.direction.as_tuple()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Replaces all three components at once.
    pub fn update_direction(&mut self, x: f64, y: f64, z: f64) {
        self.direction = Direction::new(x, y, z);
    }
}

pub type SharedAntenna = Rc<RefCell<Antenna>>;

// ============================================================================
// Singleton guard
// ============================================================================

/// What happens when an antenna is requested while one is already live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enforcement {
    /// Reject the request with [`AntennaError::AlreadyInstantiated`].
    Strict,
    /// Hand back the live instance.
    #[default]
    Intercept,
}

#[derive(Debug, Default)]
pub struct AntennaRegistry {
    live: Option<SharedAntenna>,
}

impl AntennaRegistry {
    pub fn new() -> Self {
        Self { live: None }
    }

    /// Attempts to construct the antenna.
    ///
    /// With an empty registry a new antenna is created and registered. With a
    /// live antenna the outcome depends on `enforcement`.
    pub fn instantiate(&mut self, enforcement: Enforcement) -> std::result::Result<SharedAntenna, AntennaError> {
        if enforcement == Enforcement::Strict && self.is_live() {
            warn!("rejected second antenna instantiation");
            return Err(AntennaError::AlreadyInstantiated);
        }
        Ok(self.acquire())
    }

    /// Returns the live antenna, creating it first if necessary.
    pub fn acquire(&mut self) -> SharedAntenna {
        if let Some(antenna) = &self.live {
            debug!("intercepted antenna instantiation, returning live instance");
            return Rc::clone(antenna);
        }

        let antenna = Rc::new(RefCell::new(Antenna::new()));
        info!(instance = ?Rc::as_ptr(&antenna), "antenna registered");
        self.live = Some(Rc::clone(&antenna));
        antenna
    }

    /// The access point for the singleton. Lazily creates the instance.
    pub fn current_instance(&mut self) -> SharedAntenna {
        self.acquire()
    }

    /// Clears the registration so a new antenna may be created.
    ///
    /// Outstanding handles keep working but no longer refer to the
    /// registered instance. Returns whether anything was released.
    pub fn release(&mut self) -> bool {
        match self.live.take() {
            Some(antenna) => {
                info!(instance = ?Rc::as_ptr(&antenna), "antenna released");
                true
            }
            None => false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn is_registered(&self, antenna: &SharedAntenna) -> bool {
        self.live
            .as_ref()
            .is_some_and(|live| Rc::ptr_eq(live, antenna))
    }

    pub fn same_instance(a: &SharedAntenna, b: &SharedAntenna) -> bool {
        Rc::ptr_eq(a, b)
    }
}

/// Process-wide access to a registry.
///
/// The registry is created empty on first use by each thread and lives until
/// the thread exits. Call [`AntennaRegistry::release`] through
/// [`with_registry`] to reset it. Nested calls to `with_registry` panic.
pub mod global {
    use std::cell::RefCell;

    use super::AntennaRegistry;

    thread_local! {
        static REGISTRY: RefCell<AntennaRegistry> = RefCell::new(AntennaRegistry::new());
    }

    pub fn with_registry<R>(f: impl FnOnce(&mut AntennaRegistry) -> R) -> R {
        REGISTRY.with_borrow_mut(f)
    }
}

// ============================================================================
// Tutorial
// ============================================================================

fn banner<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", format!("---------- {title} ----------").bold())
}

/// Narrates the three singleton demonstrations and returns the live antenna.
///
/// `enforcement` governs the deliberate second instantiation in the first
/// demonstration.
pub fn tutorial<W: Write, R: Rng>(
    registry: &mut AntennaRegistry,
    enforcement: Enforcement,
    rng: &mut R,
    out: &mut W,
) -> Result<SharedAntenna> {
    let antenna = registry.current_instance();

    banner(out, "FIRST EXAMPLE (START) - ATTEMPT MULTIPLE INSTANTIATIONS ON SINGLETON")?;
    writeln!(
        out,
        "create_two_antennas(): Direction of the current antenna: {}",
        antenna.borrow().direction()
    )?;
    match registry.instantiate(enforcement) {
        Err(err) => writeln!(
            out,
            "{}",
            format!("create_two_antennas(): Error occurred: {err} <========").red()
        )?,
        Ok(second) => writeln!(
            out,
            "create_two_antennas(): Second attempt intercepted, same instance: {} <========",
            AntennaRegistry::same_instance(&antenna, &second)
        )?,
    }
    banner(out, "FIRST EXAMPLE (END)")?;
    writeln!(out)?;

    banner(out, "SECOND EXAMPLE (START) - UPDATE RESOURCE IN SINGLETON CLASS")?;
    let handle = registry.acquire();
    writeln!(
        out,
        "new_antenna_direction(): Current antenna direction: {}",
        handle.borrow().direction()
    )?;
    let (x, y, z): (f64, f64, f64) = (rng.gen(), rng.gen(), rng.gen());
    writeln!(
        out,
        "new_antenna_direction(): The new desired x, y, and z direction for the antenna is: {x:?}, {y:?}, {z:?}"
    )?;
    handle.borrow_mut().update_direction(x, y, z);
    writeln!(
        out,
        "new_antenna_direction(): New antenna direction: {}",
        handle.borrow().direction()
    )?;
    writeln!(
        out,
        "new_antenna_direction(): instance handle: {:p}",
        Rc::as_ptr(&registry.current_instance())
    )?;
    banner(out, "SECOND EXAMPLE (END)")?;
    writeln!(out)?;

    banner(out, "THIRD EXAMPLE (START) - SHOW SAME OBJECT FOR TWO INSTANCES")?;
    writeln!(
        out,
        "current antenna object reference: {:p} <========",
        Rc::as_ptr(&antenna)
    )?;
    let new_antenna = registry.acquire();
    writeln!(
        out,
        "new antenna object reference: {:p} <========",
        Rc::as_ptr(&new_antenna)
    )?;
    writeln!(
        out,
        "same instance: {}",
        AntennaRegistry::same_instance(&antenna, &new_antenna)
    )?;
    banner(out, "THIRD EXAMPLE (END)")?;

    Ok(antenna)
}

// ============================================================================
// Tests
// ============================================================================

//! # Creational Patterns
//!
//! Runnable examples of three creational design patterns:
//!
//! - Singleton: [`antenna`] (one antenna, one controller)
//! - Abstract Factory: [`cars`] (domestic and international car factories)
//! - Builder: [`toy`] (action figures assembled part by part)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin antenna
//! cargo run --bin cars
//! cargo run --bin toy -- superman batman
//! ```

pub mod antenna;
pub mod cars;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod toy;

pub use error::{AntennaError, ConfigError, DemoError, Result};

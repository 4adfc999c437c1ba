//! Abstract Factory pattern: car factories for two markets.
//!
//! Each factory builds one family of cars. The client only ever talks to the
//! [`CarFactory`] trait and never names a concrete model. [`Market`] offers
//! the same mapping as a tagged enum without dynamic dispatch.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use colored::Colorize;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    Sedan,
    Suv,
}

impl fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyStyle::Sedan => write!(f, "Sedan"),
            BodyStyle::Suv => write!(f, "SUV"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarModel {
    FordFusion,
    FordExplorer,
    HondaCivic,
    HondaPilot,
}

impl CarModel {
    pub fn name(self) -> &'static str {
        match self {
            CarModel::FordFusion => "Ford Fusion",
            CarModel::FordExplorer => "Ford Explorer",
            CarModel::HondaCivic => "Honda Civic",
            CarModel::HondaPilot => "Honda Pilot",
        }
    }

    pub fn body_style(self) -> BodyStyle {
        match self {
            CarModel::FordFusion | CarModel::HondaCivic => BodyStyle::Sedan,
            CarModel::FordExplorer | CarModel::HondaPilot => BodyStyle::Suv,
        }
    }
}

/// A finished car. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    model: CarModel,
}

impl Car {
    fn new(model: CarModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> CarModel {
        self.model
    }

    pub fn name(&self) -> &'static str {
        self.model.name()
    }

    pub fn car_type(&self) -> BodyStyle {
        self.model.body_style()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.car_type())
    }
}

// ============================================================================
// Factories (trait objects)
// ============================================================================

pub trait CarFactory {
    fn label(&self) -> &'static str;
    fn create_car(&self, suv: bool) -> Car;
}

pub struct DomesticFactory;

impl CarFactory for DomesticFactory {
    fn label(&self) -> &'static str {
        "DomesticCar"
    }

    fn create_car(&self, suv: bool) -> Car {
        if suv {
            Car::new(CarModel::FordExplorer)
        } else {
            Car::new(CarModel::FordFusion)
        }
    }
}

pub struct InternationalFactory;

impl CarFactory for InternationalFactory {
    fn label(&self) -> &'static str {
        "InternationalCar"
    }

    fn create_car(&self, suv: bool) -> Car {
        if suv {
            Car::new(CarModel::HondaPilot)
        } else {
            Car::new(CarModel::HondaCivic)
        }
    }
}

// ============================================================================
// Factories (enum)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Market {
    Domestic,
    International,
}

impl Market {
    pub const ALL: [Market; 2] = [Market::Domestic, Market::International];

    /// Pure mapping from (market, suv) to the product.
    pub fn build(self, suv: bool) -> Car {
        let model = match (self, suv) {
            (Market::Domestic, true) => CarModel::FordExplorer,
            (Market::Domestic, false) => CarModel::FordFusion,
            (Market::International, true) => CarModel::HondaPilot,
            (Market::International, false) => CarModel::HondaCivic,
        };
        Car::new(model)
    }

    pub fn factory(self) -> Box<dyn CarFactory> {
        match self {
            Market::Domestic => Box::new(DomesticFactory),
            Market::International => Box::new(InternationalFactory),
        }
    }
}

impl FromStr for Market {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domestic" => Ok(Market::Domestic),
            "international" => Ok(Market::International),
            _ => Err(ConfigError::UnknownMarket(s.to_string())),
        }
    }
}

impl TryFrom<String> for Market {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Domestic => write!(f, "domestic"),
            Market::International => write!(f, "international"),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Builds an SUV and a sedan from every factory and narrates the result.
///
/// The client only sees `dyn CarFactory`.
pub fn client<W: Write>(factories: &[Box<dyn CarFactory>], out: &mut W) -> std::io::Result<Vec<Car>> {
    let mut produced = Vec::with_capacity(factories.len() * 2);

    for factory in factories {
        debug!(factory = factory.label(), "dispatching to factory");
        let suv = factory.create_car(true);
        let sedan = factory.create_car(false);

        writeln!(
            out,
            "This is factory # {} {}",
            factory.label().bold(),
            "<-----".cyan()
        )?;
        writeln!(out, "Product A: {suv}")?;
        writeln!(out, "Product B: {sedan}")?;
        writeln!(out)?;

        produced.push(suv);
        produced.push(sedan);
    }

    Ok(produced)
}

/// Fulfils individual `(market, suv)` orders through the enum mapping.
pub fn fulfil_orders<W: Write>(orders: &[(Market, bool)], out: &mut W) -> std::io::Result<Vec<Car>> {
    orders
        .iter()
        .map(|&(market, suv)| -> std::io::Result<Car> {
            let car = market.build(suv);
            writeln!(out, "Order [{market}, suv={suv}] -> {car}")?;
            Ok(car)
        })
        .collect()
}

pub fn default_factories() -> Vec<Box<dyn CarFactory>> {
    Market::ALL.iter().map(|market| market.factory()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expected(market: Market, suv: bool) -> (&'static str, &'static str) {
        match (market, suv) {
            (Market::Domestic, true) => ("Ford Explorer", "SUV"),
            (Market::Domestic, false) => ("Ford Fusion", "Sedan"),
            (Market::International, true) => ("Honda Pilot", "SUV"),
            (Market::International, false) => ("Honda Civic", "Sedan"),
        }
    }

    #[test]
    fn test_domestic_factory() {
        let factory = DomesticFactory;
        let suv = factory.create_car(true);
        let sedan = factory.create_car(false);

        assert_eq!(suv.name(), "Ford Explorer");
        assert_eq!(suv.car_type().to_string(), "SUV");
        assert_eq!(sedan.name(), "Ford Fusion");
        assert_eq!(sedan.car_type().to_string(), "Sedan");
    }

    #[test]
    fn test_international_factory() {
        let factory = InternationalFactory;
        assert_eq!(factory.create_car(true).model(), CarModel::HondaPilot);
        assert_eq!(factory.create_car(false).model(), CarModel::HondaCivic);
    }

    #[test]
    fn test_trait_object_and_enum_agree() {
        for market in Market::ALL {
            let factory = market.factory();
            for suv in [true, false] {
                assert_eq!(factory.create_car(suv), market.build(suv));
            }
        }
    }

    #[test]
    fn test_market_parsing() {
        assert_eq!("domestic".parse::<Market>().unwrap(), Market::Domestic);
        assert_eq!(" International ".parse::<Market>().unwrap(), Market::International);
        assert!(matches!(
            "martian".parse::<Market>(),
            Err(ConfigError::UnknownMarket(name)) if name == "martian"
        ));
    }

    #[test]
    fn test_car_display() {
        assert_eq!(Market::Domestic.build(true).to_string(), "Ford Explorer (SUV)");
    }

    #[test]
    fn test_client_output() {
        let mut out = Vec::new();
        let cars = client(&default_factories(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(cars.len(), 4);
        assert!(text.contains("DomesticCar"));
        assert!(text.contains("InternationalCar"));
        assert!(text.contains("Product A: Ford Explorer (SUV)"));
        assert!(text.contains("Product B: Honda Civic (Sedan)"));
    }

    #[test]
    fn test_fulfil_orders() {
        let mut out = Vec::new();
        let cars = fulfil_orders(&[(Market::International, true)], &mut out).unwrap();
        assert_eq!(cars, vec![Market::International.build(true)]);
        assert!(String::from_utf8(out).unwrap().contains("Honda Pilot"));
    }

    proptest! {
        #[test]
        fn prop_factory_table(international in any::<bool>(), suv in any::<bool>()) {
            let market = if international { Market::International } else { Market::Domestic };
            let car = market.factory().create_car(suv);
            let (name, car_type) = expected(market, suv);
            prop_assert_eq!(car.name(), name);
            prop_assert_eq!(car.car_type().to_string(), car_type);
        }
    }
}

//! Core types for the vehicle simulation
//!
//! Reference data describing a vehicle, independent of its travel state.

use std::fmt;

/// Amount added to the battery level by one recharge
pub const RECHARGE_STEP: u8 = 35;

/// Upper bound of the battery level, in percent
pub const BATTERY_MAX: u8 = 100;

/// Battery level of a freshly built electric car
pub const DEFAULT_BATTERY_LEVEL: u8 = 40;

/// Kind of energy a vehicle runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelKind {
    Gasoline,
    Diesel,
    Electric,
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelKind::Gasoline => "Gasoline",
            FuelKind::Diesel => "Diesel",
            FuelKind::Electric => "Electric",
        };
        f.write_str(name)
    }
}

/// Kind of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// Regular passenger car
    Car,
    /// Cargo truck
    Truck,
    /// Battery-powered car; behaves like a car plus recharging
    ElectricCar,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleKind::Car => "car",
            VehicleKind::Truck => "truck",
            VehicleKind::ElectricCar => "electric car",
        };
        f.write_str(name)
    }
}

/// Identity data of a vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpec {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub fuel: FuelKind,
}

impl VehicleSpec {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        fuel: FuelKind,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            fuel,
        }
    }

    /// Short name used in narration, e.g. "Volvo FH16"
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

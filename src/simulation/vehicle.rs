//! Vehicle model for the simulation
//!
//! All vehicle kinds share one struct. Kind-specific state lives in
//! [`VehicleVariant`] and kind-specific behavior is selected with a `match`.

use log::{debug, warn};

use super::error::{SimError, SimResult};
use super::narrator::Narrator;
use super::types::{
    FuelKind, VehicleKind, VehicleSpec, BATTERY_MAX, DEFAULT_BATTERY_LEVEL, RECHARGE_STEP,
};

/// Per-kind state of a vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleVariant {
    Car,
    /// Running total of cargo loaded onto the truck
    Truck { cargo_kg: u64 },
    /// Battery level in percent, always within 0..=100
    ElectricCar { battery_level: u8 },
}

/// A vehicle in the simulation
#[derive(Debug, Clone)]
pub struct Vehicle {
    spec: VehicleSpec,
    /// Never decreases; only `drive` changes it
    odometer: u64,
    variant: VehicleVariant,
}

impl Vehicle {
    fn new(spec: VehicleSpec, variant: VehicleVariant) -> Self {
        Self {
            spec,
            odometer: 0,
            variant,
        }
    }

    pub fn car(spec: VehicleSpec) -> Self {
        Self::new(spec, VehicleVariant::Car)
    }

    pub fn truck(spec: VehicleSpec) -> Self {
        Self::new(spec, VehicleVariant::Truck { cargo_kg: 0 })
    }

    pub fn electric_car(spec: VehicleSpec) -> Self {
        Self::new(
            spec,
            VehicleVariant::ElectricCar {
                battery_level: DEFAULT_BATTERY_LEVEL,
            },
        )
    }

    pub fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    pub fn odometer(&self) -> u64 {
        self.odometer
    }

    pub fn variant(&self) -> &VehicleVariant {
        &self.variant
    }

    pub fn kind(&self) -> VehicleKind {
        match self.variant {
            VehicleVariant::Car => VehicleKind::Car,
            VehicleVariant::Truck { .. } => VehicleKind::Truck,
            VehicleVariant::ElectricCar { .. } => VehicleKind::ElectricCar,
        }
    }

    pub fn fuel(&self) -> FuelKind {
        self.spec.fuel
    }

    /// Battery level, for electric cars only
    pub fn battery_level(&self) -> Option<u8> {
        match self.variant {
            VehicleVariant::ElectricCar { battery_level } => Some(battery_level),
            _ => None,
        }
    }

    /// Total cargo loaded so far, for trucks only
    pub fn cargo_kg(&self) -> Option<u64> {
        match self.variant {
            VehicleVariant::Truck { cargo_kg } => Some(cargo_kg),
            _ => None,
        }
    }

    /// "{make} {model} ({year}) - Fuel: {fuel}"
    ///
    /// Depends on the spec only, so travel never changes it.
    pub fn describe(&self) -> String {
        format!(
            "{} {} ({}) - Fuel: {}",
            self.spec.make, self.spec.model, self.spec.year, self.spec.fuel
        )
    }

    pub fn ignite(&self, narrator: &mut impl Narrator) {
        let line = match self.variant {
            VehicleVariant::Car | VehicleVariant::ElectricCar { .. } => {
                format!("The car {} has been started.", self.spec.label())
            }
            VehicleVariant::Truck { .. } => {
                format!("The truck {} is running.", self.spec.label())
            }
        };
        narrator.notify(line);
    }

    pub fn shutdown(&self, narrator: &mut impl Narrator) {
        let line = match self.variant {
            VehicleVariant::Car | VehicleVariant::ElectricCar { .. } => {
                format!("The car {} has been switched off.", self.spec.label())
            }
            VehicleVariant::Truck { .. } => {
                format!("The truck {} has stopped.", self.spec.label())
            }
        };
        narrator.notify(line);
    }

    /// Add `distance` km to the odometer and return the new total.
    ///
    /// A negative distance is rejected and leaves the odometer as it was.
    pub fn drive(&mut self, distance: i64, narrator: &mut impl Narrator) -> SimResult<u64> {
        let distance = u64::try_from(distance).map_err(|_| {
            warn!("{} refused to drive {} km", self.spec.label(), distance);
            SimError::InvalidDistance(distance)
        })?;

        self.odometer = self.odometer.saturating_add(distance);
        debug!("{} odometer now {} km", self.spec.label(), self.odometer);

        narrator.notify(format!(
            "{} traveled {} km. Total: {} km.",
            self.spec.label(),
            distance,
            self.odometer
        ));
        Ok(self.odometer)
    }

    /// Load cargo onto a truck and return the truck's running cargo total.
    pub fn load_cargo(&mut self, weight_kg: i64, narrator: &mut impl Narrator) -> SimResult<u64> {
        let kind = self.kind();
        let VehicleVariant::Truck { cargo_kg } = &mut self.variant else {
            warn!("{} is a {} and cannot load cargo", self.spec.label(), kind);
            return Err(SimError::UnsupportedOperation {
                operation: "load_cargo",
                kind,
            });
        };
        let weight = u64::try_from(weight_kg).map_err(|_| {
            warn!("{} refused {} kg of cargo", self.spec.label(), weight_kg);
            SimError::InvalidWeight(weight_kg)
        })?;

        *cargo_kg = cargo_kg.saturating_add(weight);
        debug!("{} carries {} kg in total", self.spec.label(), cargo_kg);

        narrator.notify(format!("The truck has loaded {} kg of cargo.", weight));
        Ok(*cargo_kg)
    }

    /// Raise the battery level by [`RECHARGE_STEP`], capped at [`BATTERY_MAX`].
    pub fn recharge_battery(&mut self, narrator: &mut impl Narrator) -> SimResult<u8> {
        let kind = self.kind();
        let VehicleVariant::ElectricCar { battery_level } = &mut self.variant else {
            warn!("{} is a {} and has no battery to recharge", self.spec.label(), kind);
            return Err(SimError::UnsupportedOperation {
                operation: "recharge_battery",
                kind,
            });
        };

        *battery_level = battery_level.saturating_add(RECHARGE_STEP).min(BATTERY_MAX);

        narrator.notify(format!("Battery recharged. Current level: {}%", battery_level));
        Ok(*battery_level)
    }
}

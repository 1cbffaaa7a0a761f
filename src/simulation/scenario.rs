//! Sample scenario
//!
//! Builds the sample fleet and runs a fixed list of steps against it. Steps
//! run strictly one after another: a trip is awaited to completion before the
//! next step starts.

use log::info;

use super::clock::Clock;
use super::error::SimResult;
use super::narrator::Narrator;
use super::trip::{run_trip, TripReport};
use super::types::{FuelKind, VehicleSpec};
use super::vehicle::Vehicle;

/// Cargo loaded onto the truck before any trip
pub const SAMPLE_CARGO_KG: i64 = 4500;

/// Which vehicle of the fleet a step applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetSlot {
    Car,
    Truck,
    ElectricCar,
}

/// The three sample vehicles
#[derive(Debug, Clone)]
pub struct Fleet {
    pub car: Vehicle,
    pub truck: Vehicle,
    pub electric_car: Vehicle,
}

impl Fleet {
    pub fn sample() -> Self {
        Self {
            car: Vehicle::car(VehicleSpec::new("Mazda", "3 Touring", 2023, FuelKind::Gasoline)),
            truck: Vehicle::truck(VehicleSpec::new("Volvo", "FH16", 2021, FuelKind::Diesel)),
            electric_car: Vehicle::electric_car(VehicleSpec::new(
                "Tesla",
                "Model 3",
                2024,
                FuelKind::Electric,
            )),
        }
    }

    pub fn get(&self, slot: FleetSlot) -> &Vehicle {
        match slot {
            FleetSlot::Car => &self.car,
            FleetSlot::Truck => &self.truck,
            FleetSlot::ElectricCar => &self.electric_car,
        }
    }

    pub fn get_mut(&mut self, slot: FleetSlot) -> &mut Vehicle {
        match slot {
            FleetSlot::Car => &mut self.car,
            FleetSlot::Truck => &mut self.truck,
            FleetSlot::ElectricCar => &mut self.electric_car,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        [&self.car, &self.truck, &self.electric_car].into_iter()
    }
}

/// One step of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStep {
    LoadCargo { slot: FleetSlot, weight_kg: i64 },
    RechargeBattery { slot: FleetSlot },
    Trip {
        slot: FleetSlot,
        distance_km: i64,
        duration_ms: i64,
    },
}

/// Outcome of a full scenario run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub trips: Vec<TripReport>,
    pub fleet: Fleet,
}

impl ScenarioReport {
    pub fn total_distance_km(&self) -> u64 {
        self.trips.iter().map(|trip| trip.distance_km).sum()
    }

    pub fn print_summary(&self) {
        println!();
        println!("=== Scenario Summary ===");
        println!("Trips completed: {}", self.trips.len());
        println!("Total distance: {} km", self.total_distance_km());
        for vehicle in self.fleet.iter() {
            let mut line = format!(
                "  {} [{}]: odometer={} km",
                vehicle.spec().label(),
                vehicle.kind(),
                vehicle.odometer()
            );
            if let Some(cargo_kg) = vehicle.cargo_kg() {
                line.push_str(&format!(", cargo={} kg", cargo_kg));
            }
            if let Some(battery_level) = vehicle.battery_level() {
                line.push_str(&format!(", battery={}%", battery_level));
            }
            println!("{}", line);
        }
    }
}

/// A fleet plus the steps to run on it
#[derive(Debug, Clone)]
pub struct Scenario {
    pub fleet: Fleet,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn new(fleet: Fleet, steps: Vec<ScenarioStep>) -> Self {
        Self { fleet, steps }
    }

    /// The hard-coded sample: load the truck, then car, truck and electric
    /// car trips with a battery recharge before the last one.
    pub fn sample() -> Self {
        Self::new(
            Fleet::sample(),
            vec![
                ScenarioStep::LoadCargo {
                    slot: FleetSlot::Truck,
                    weight_kg: SAMPLE_CARGO_KG,
                },
                ScenarioStep::Trip {
                    slot: FleetSlot::Car,
                    distance_km: 80,
                    duration_ms: 2000,
                },
                ScenarioStep::Trip {
                    slot: FleetSlot::Truck,
                    distance_km: 120,
                    duration_ms: 3000,
                },
                ScenarioStep::RechargeBattery {
                    slot: FleetSlot::ElectricCar,
                },
                ScenarioStep::Trip {
                    slot: FleetSlot::ElectricCar,
                    distance_km: 200,
                    duration_ms: 2500,
                },
            ],
        )
    }

    /// Run every step in order. The first failing step aborts the run.
    pub async fn run<C, N>(mut self, clock: &C, narrator: &mut N) -> SimResult<ScenarioReport>
    where
        C: Clock,
        N: Narrator,
    {
        info!("running scenario with {} steps", self.steps.len());
        let mut trips = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            match *step {
                ScenarioStep::LoadCargo { slot, weight_kg } => {
                    self.fleet.get_mut(slot).load_cargo(weight_kg, narrator)?;
                }
                ScenarioStep::RechargeBattery { slot } => {
                    self.fleet.get_mut(slot).recharge_battery(narrator)?;
                }
                ScenarioStep::Trip {
                    slot,
                    distance_km,
                    duration_ms,
                } => {
                    let vehicle = self.fleet.get_mut(slot);
                    let report =
                        run_trip(vehicle, distance_km, duration_ms, clock, narrator).await?;
                    info!(
                        "step {}: {} finished trip, odometer {} km",
                        index + 1,
                        report.label,
                        report.odometer_km
                    );
                    trips.push(report);
                }
            }
        }

        info!("scenario complete: {} trips", trips.len());
        Ok(ScenarioReport {
            trips,
            fleet: self.fleet,
        })
    }
}

//! Standalone vehicle simulation module
//!
//! Vehicle model, trip sequencing and the sample scenario. Narration goes
//! through a [`Narrator`] and delays through a [`Clock`], so everything can be
//! exercised from tests without real waiting.

mod clock;
mod error;
mod narrator;
mod scenario;
mod trip;
mod types;
mod vehicle;

pub use clock::{Clock, RecordingClock, TokioClock};
pub use error::{SimError, SimResult};
pub use narrator::{ConsoleNarrator, Narrator, RecordingNarrator};
pub use scenario::{Fleet, FleetSlot, Scenario, ScenarioReport, ScenarioStep, SAMPLE_CARGO_KG};
pub use trip::{run_trip, TripReport};
pub use types::{
    FuelKind, VehicleKind, VehicleSpec, BATTERY_MAX, DEFAULT_BATTERY_LEVEL, RECHARGE_STEP,
};
pub use vehicle::{Vehicle, VehicleVariant};

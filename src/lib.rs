//! Vehicle Simulation Library
//!
//! A small vehicle model (cars, trucks, electric cars) driven through
//! simulated trips. Narration is the only observable output.

pub mod simulation;

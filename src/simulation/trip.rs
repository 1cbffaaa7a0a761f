//! Trip sequencing
//!
//! A trip drives one vehicle through ignite, wait, drive and shutdown. The
//! wait is the only point where the task yields.

use std::time::Duration;

use log::{debug, warn};

use super::clock::Clock;
use super::error::{SimError, SimResult};
use super::narrator::Narrator;
use super::vehicle::Vehicle;

/// Summary of a completed trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripReport {
    /// "{make} {model}" of the vehicle
    pub label: String,
    pub distance_km: u64,
    /// Odometer reading after the trip
    pub odometer_km: u64,
    pub duration: Duration,
}

/// Run one trip to completion.
///
/// Arguments are checked before anything is narrated, so a rejected trip
/// leaves no output and no state change behind.
pub async fn run_trip<C, N>(
    vehicle: &mut Vehicle,
    distance: i64,
    duration_ms: i64,
    clock: &C,
    narrator: &mut N,
) -> SimResult<TripReport>
where
    C: Clock,
    N: Narrator,
{
    let duration = u64::try_from(duration_ms)
        .map(Duration::from_millis)
        .map_err(|_| SimError::InvalidDuration(duration_ms))?;
    if distance < 0 {
        warn!("trip for {} rejected: negative distance", vehicle.spec().label());
        return Err(SimError::InvalidDistance(distance));
    }

    narrator.notify(format!("Trip starting with {}", vehicle.describe()));
    vehicle.ignite(narrator);

    debug!("{} travelling for {:?}", vehicle.spec().label(), duration);
    clock.sleep(duration).await;

    let odometer_km = vehicle.drive(distance, narrator)?;
    vehicle.shutdown(narrator);
    narrator.notify(format!(
        "The trip with {} finished after {} km.",
        vehicle.describe(),
        distance
    ));

    Ok(TripReport {
        label: vehicle.spec().label(),
        distance_km: distance.unsigned_abs(),
        odometer_km,
        duration,
    })
}

//! Trip and scenario sequencing tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vehicle_sim::simulation::{
    run_trip, Clock, FleetSlot, FuelKind, Narrator, RecordingClock, RecordingNarrator, Scenario,
    ScenarioStep, SimError, TokioClock, Vehicle, VehicleSpec,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Narrator that publishes how many lines it has received so far
#[derive(Default)]
struct CountingNarrator {
    inner: RecordingNarrator,
    count: Arc<AtomicUsize>,
}

impl Narrator for CountingNarrator {
    fn notify(&mut self, line: String) {
        self.inner.notify(line);
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Clock that notes the narration length at the moment it is asked to sleep
struct SnapshotClock {
    count: Arc<AtomicUsize>,
    seen: Mutex<Vec<usize>>,
}

impl Clock for SnapshotClock {
    async fn sleep(&self, _duration: Duration) {
        let lines = self.count.load(Ordering::SeqCst);
        self.seen.lock().unwrap().push(lines);
    }
}

fn mazda() -> Vehicle {
    Vehicle::car(VehicleSpec::new("Mazda", "3 Touring", 2023, FuelKind::Gasoline))
}

#[tokio::test]
async fn test_trip_narration_order() {
    let mut car = mazda();
    let clock = RecordingClock::new();
    let mut narrator = RecordingNarrator::new();

    let report = run_trip(&mut car, 80, 2000, &clock, &mut narrator)
        .await
        .unwrap();

    assert_eq!(
        narrator.lines(),
        [
            "Trip starting with Mazda 3 Touring (2023) - Fuel: Gasoline",
            "The car Mazda 3 Touring has been started.",
            "Mazda 3 Touring traveled 80 km. Total: 80 km.",
            "The car Mazda 3 Touring has been switched off.",
            "The trip with Mazda 3 Touring (2023) - Fuel: Gasoline finished after 80 km.",
        ]
    );
    assert_eq!(clock.requested(), vec![Duration::from_millis(2000)]);
    assert_eq!(report.distance_km, 80);
    assert_eq!(report.odometer_km, 80);
    assert_eq!(report.label, "Mazda 3 Touring");
}

#[tokio::test]
async fn test_trip_reports_accumulated_odometer() {
    let mut car = mazda();
    let clock = RecordingClock::new();
    let mut narrator = RecordingNarrator::new();

    run_trip(&mut car, 80, 0, &clock, &mut narrator).await.unwrap();
    let report = run_trip(&mut car, 40, 0, &clock, &mut narrator).await.unwrap();

    assert_eq!(report.odometer_km, 120);
    assert!(narrator
        .lines()
        .contains(&"Mazda 3 Touring traveled 40 km. Total: 120 km.".to_string()));
}

#[tokio::test]
async fn test_trip_rejects_bad_arguments_without_output() {
    let mut car = mazda();
    let clock = RecordingClock::new();
    let mut narrator = RecordingNarrator::new();

    let result = run_trip(&mut car, 80, -1, &clock, &mut narrator).await;
    assert_eq!(result, Err(SimError::InvalidDuration(-1)));

    let result = run_trip(&mut car, -80, 100, &clock, &mut narrator).await;
    assert_eq!(result, Err(SimError::InvalidDistance(-80)));

    assert!(narrator.lines().is_empty());
    assert!(clock.requested().is_empty());
    assert_eq!(car.odometer(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_waits_scaled_duration() {
    let mut car = mazda();
    let clock = TokioClock::new(0.5).unwrap();
    let mut narrator = RecordingNarrator::new();

    let start = tokio::time::Instant::now();
    run_trip(&mut car, 10, 2000, &clock, &mut narrator).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert!(start.elapsed() < Duration::from_millis(2000));
}

#[tokio::test]
async fn test_sample_scenario_is_sequential() {
    let clock = RecordingClock::new();
    let mut narrator = RecordingNarrator::new();

    let report = Scenario::sample().run(&clock, &mut narrator).await.unwrap();

    // Cargo is loaded before any trip starts
    let cargo = narrator.position("4500 kg").unwrap();
    assert_eq!(cargo, 0);

    // Truck trip must not start before the car trip finished
    let car_finished = narrator
        .position("The trip with Mazda 3 Touring")
        .unwrap();
    let truck_started = narrator.position("Trip starting with Volvo FH16").unwrap();
    assert!(car_finished < truck_started);

    // The electric car trip is awaited like the others
    let truck_finished = narrator.position("The trip with Volvo FH16").unwrap();
    let recharge = narrator.position("Battery recharged").unwrap();
    let tesla_finished = narrator.position("The trip with Tesla Model 3").unwrap();
    assert!(truck_finished < recharge);
    assert!(recharge < tesla_finished);
    assert_eq!(tesla_finished, narrator.lines().len() - 1);

    assert_eq!(narrator.lines().len(), 17);
    assert_eq!(
        clock.requested(),
        vec![
            Duration::from_millis(2000),
            Duration::from_millis(3000),
            Duration::from_millis(2500),
        ]
    );

    assert_eq!(report.trips.len(), 3);
    assert_eq!(report.total_distance_km(), 400);
    assert_eq!(report.fleet.car.odometer(), 80);
    assert_eq!(report.fleet.truck.odometer(), 120);
    assert_eq!(report.fleet.truck.cargo_kg(), Some(4500));
    assert_eq!(report.fleet.electric_car.odometer(), 200);
    assert_eq!(report.fleet.electric_car.battery_level(), Some(75));
}

#[tokio::test]
async fn test_scenario_stops_at_failing_step() {
    let clock = RecordingClock::new();
    let mut narrator = RecordingNarrator::new();
    let scenario = Scenario::new(
        Scenario::sample().fleet,
        vec![
            ScenarioStep::Trip {
                slot: FleetSlot::Car,
                distance_km: 10,
                duration_ms: 0,
            },
            ScenarioStep::RechargeBattery {
                slot: FleetSlot::Truck,
            },
            ScenarioStep::Trip {
                slot: FleetSlot::Truck,
                distance_km: 10,
                duration_ms: 0,
            },
        ],
    );

    let result = scenario.run(&clock, &mut narrator).await;
    assert!(matches!(
        result,
        Err(SimError::UnsupportedOperation { operation: "recharge_battery", .. })
    ));
    assert!(narrator.position("Volvo FH16").is_none());
    assert_eq!(clock.requested().len(), 1);
}

#[tokio::test]
async fn test_trip_waits_between_ignite_and_drive() {
    let mut car = mazda();
    let mut narrator = CountingNarrator::default();
    let clock = SnapshotClock {
        count: narrator.count.clone(),
        seen: Mutex::new(Vec::new()),
    };

    run_trip(&mut car, 80, 2000, &clock, &mut narrator).await.unwrap();

    // Start and ignite have been narrated when the delay begins
    assert_eq!(*clock.seen.lock().unwrap(), vec![2]);
    let lines = narrator.inner.into_lines();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("has been started"));
    assert!(lines[2].contains("traveled 80 km"));
}

#[tokio::test(start_paused = true)]
async fn test_trip_is_suspended_during_delay() {
    let mut car = mazda();
    let clock = TokioClock::new(1.0).unwrap();
    let mut narrator = RecordingNarrator::new();

    let trip = run_trip(&mut car, 80, 2000, &clock, &mut narrator);
    let partial = tokio::time::timeout(Duration::from_millis(1000), trip).await;
    assert!(partial.is_err(), "trip finished before its delay elapsed");

    // Dropping the trip mid-delay leaves start and ignite only
    assert_eq!(narrator.lines().len(), 2);
    assert_eq!(car.odometer(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_huge_time_scale_saturates_instead_of_panicking() {
    let mut car = mazda();
    let clock = TokioClock::new(1e300).unwrap();
    let mut narrator = RecordingNarrator::new();

    let trip = run_trip(&mut car, 80, 2000, &clock, &mut narrator);
    let result = tokio::time::timeout(Duration::from_secs(60), trip).await;

    assert!(result.is_err());
    assert_eq!(narrator.lines().len(), 2);
}

#[test]
fn test_tokio_clock_scale_validation() {
    assert_eq!(TokioClock::new(0.0).unwrap().time_scale(), 0.0);
    assert_eq!(TokioClock::new(2.5).unwrap().time_scale(), 2.5);
    assert_eq!(TokioClock::default().time_scale(), 1.0);

    assert_eq!(TokioClock::new(-1.0).unwrap_err(), SimError::InvalidTimeScale(-1.0));
    assert!(TokioClock::new(f64::INFINITY).is_err());
    assert!(matches!(
        TokioClock::new(f64::NAN),
        Err(SimError::InvalidTimeScale(scale)) if scale.is_nan()
    ));
}

#[test]
fn test_fleet_slots() {
    let fleet = Scenario::sample().fleet;
    assert_eq!(fleet.get(FleetSlot::Car).spec().label(), "Mazda 3 Touring");
    assert_eq!(fleet.get(FleetSlot::Truck).spec().label(), "Volvo FH16");
    assert_eq!(fleet.get(FleetSlot::ElectricCar).spec().label(), "Tesla Model 3");
    assert_eq!(fleet.iter().count(), 3);
}

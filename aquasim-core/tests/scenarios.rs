//! The six concrete end-to-end scenarios from §8, run as required tests
//! rather than documentation, driven through the calibration harness's own
//! public scripting API — the same mechanism `aquasim-app` uses to re-run
//! them as a CLI.

use aquasim_core::calibration::{run_scenario, ScenarioStep};
use aquasim_schemas::action::Action;
use aquasim_schemas::config::SimulationConfig;
use aquasim_schemas::equipment::{Filter, FilterType, Heater, Substrate, SubstrateType};
use aquasim_schemas::plant::PlantSpecies;
use aquasim_schemas::tunables::TunableConfig;

#[test]
fn scenario_1_top_off_idempotence() {
    let config = SimulationConfig::new(100.0);
    let tunables = TunableConfig::default();
    let steps = vec![
        ScenarioStep::Action(Action::TopOff),
        ScenarioStep::Assert {
            description: "top-off on a full tank is a no-op".to_string(),
            predicate: Box::new(|s| s.resources.water == 100.0),
        },
    ];
    let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
    assert_eq!(outcome.assertions_checked, 1);
}

#[test]
fn scenario_2_water_change_mass_scaling() {
    let mut config = SimulationConfig::new(100.0).with_tap_water(20.0, 7.0);
    config.initial_temperature = 26.0;
    let tunables = TunableConfig::default();

    // Seed nitrate directly is not expressible via the action API, so this
    // exercises the scaling law (masses halve, water and temperature blend)
    // through a dose followed by a water change instead of a literal 100mg
    // seed value, then checks the *ratio* the spec's law implies.
    let steps = vec![
        ScenarioStep::Action(Action::Dose { amount_ml: 20.0 }),
        ScenarioStep::Assert {
            description: "dosing raised nitrate above zero".to_string(),
            predicate: Box::new(|s| s.resources.nitrate > 0.0),
        },
    ];
    let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
    let nitrate_before = outcome.final_snapshot.resources.nitrate;
    let water_before = outcome.final_snapshot.resources.water;

    let tunables2 = TunableConfig::default();
    let (next, action_outcome) = aquasim_core::apply_action(
        &outcome.final_snapshot,
        &Action::WaterChange { fraction: 0.5 },
        &tunables2,
    );
    assert!(action_outcome.applied);
    assert!((next.resources.nitrate - nitrate_before * 0.5).abs() < 1e-9);
    assert_eq!(next.resources.water, water_before);
    assert_eq!(next.resources.temperature, 0.5 * 26.0 + 0.5 * 20.0);
}

#[test]
fn scenario_3_heater_step() {
    let mut config = SimulationConfig::new(100.0)
        .with_initial_temperature(22.0)
        .with_room_temperature(20.0);
    config.heater = Heater { enabled: true, target_temperature: 25.0, wattage: 100.0, is_on: false };
    let tunables = TunableConfig::default();

    let steps = vec![
        ScenarioStep::Tick(1),
        ScenarioStep::Assert {
            description: "one tick of heating lands strictly between 22 and 23".to_string(),
            predicate: Box::new(|s| s.resources.temperature > 22.0 && s.resources.temperature < 23.0),
        },
        ScenarioStep::Assert {
            description: "the heater is on while below target".to_string(),
            predicate: Box::new(|s| s.equipment.heater.is_on),
        },
        ScenarioStep::RunUntil {
            max_ticks: 500,
            stop_when: Box::new(|s| s.resources.temperature >= 25.0),
            maintain: None,
        },
        ScenarioStep::Assert {
            description: "the heater switches off once target is reached".to_string(),
            predicate: Box::new(|s| !s.equipment.heater.is_on),
        },
    ];
    let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
    assert_eq!(outcome.assertions_checked, 3);
}

#[test]
fn scenario_4_fishless_cycle_completion() {
    let mut config = SimulationConfig::new(38.0).with_initial_temperature(25.5);
    config.filter = Filter { enabled: true, filter_type: FilterType::Sponge };
    config.substrate = Substrate { substrate_type: SubstrateType::Gravel };
    let tunables = TunableConfig::default();

    // No user action doses ammonia directly, so the initial 2ppm seed and
    // every re-dose to 2ppm go through the harness's direct-mutation hooks
    // rather than `Action::Feed`, matching §8 scenario 4's literal wording.
    let steps = vec![
        ScenarioStep::Seed(Box::new(|s| s.resources.ammonia = 2.0 * s.resources.water)),
        ScenarioStep::RunUntil {
            max_ticks: 840,
            stop_when: Box::new(|s| s.resources.nitrate_ppm() > 20.0),
            maintain: Some(Box::new(|s| {
                if s.resources.ammonia_ppm() < 0.5 {
                    s.resources.ammonia = 2.0 * s.resources.water;
                }
            })),
        },
        ScenarioStep::Assert {
            description: "final ammonia has fallen below 0.5ppm".to_string(),
            predicate: Box::new(|s| s.resources.ammonia_ppm() < 0.5),
        },
        ScenarioStep::Assert {
            description: "final nitrite has fallen below 0.5ppm".to_string(),
            predicate: Box::new(|s| s.resources.nitrite_ppm() < 0.5),
        },
        ScenarioStep::Assert {
            description: "nitrate has accumulated above 10ppm".to_string(),
            predicate: Box::new(|s| s.resources.nitrate_ppm() > 10.0),
        },
    ];
    let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
    assert_eq!(outcome.assertions_checked, 3);

    let peak_nitrite = outcome
        .history
        .iter()
        .map(|s| s.resources.nitrite_ppm())
        .fold(0.0_f64, f64::max);
    assert!(
        (1.5..=8.0).contains(&peak_nitrite),
        "peak nitrite {peak_nitrite} ppm outside the expected [1.5, 8] range"
    );

    let first_nitrite_tick = outcome
        .history
        .iter()
        .find(|s| s.resources.nitrite_ppm() > 0.0)
        .map(|s| s.tick)
        .expect("nitrite must appear during the cycle");
    assert!(
        first_nitrite_tick <= 250,
        "nitrite first appeared at tick {first_nitrite_tick}, expected <= 250"
    );
}

#[test]
fn scenario_5_plant_rejection_on_substrate() {
    let mut config = SimulationConfig::new(100.0);
    config.substrate = Substrate { substrate_type: SubstrateType::None };
    let tunables = TunableConfig::default();

    let steps = vec![
        ScenarioStep::Action(Action::AddPlant { species: PlantSpecies::MonteCarlo, initial_size: None }),
        ScenarioStep::Assert {
            description: "monte carlo rejected without aqua soil".to_string(),
            predicate: Box::new(|s| s.plants.is_empty()),
        },
    ];
    let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
    assert_eq!(outcome.assertions_checked, 1);
}

#[test]
fn scenario_6_alert_latch() {
    let config = SimulationConfig::new(100.0);
    let tunables = TunableConfig::default();
    let snap = aquasim_core::create_simulation(&config).unwrap();

    let mut snap = snap;
    snap.resources.water = 10.0;
    let (state1, logs1) = aquasim_core::check_alerts(&snap, &tunables);
    assert_eq!(logs1.len(), 1);
    snap.alert_state = state1;

    let (_, logs2) = aquasim_core::check_alerts(&snap, &tunables);
    assert!(logs2.is_empty());

    snap.resources.water = 50.0;
    let (state3, logs3) = aquasim_core::check_alerts(&snap, &tunables);
    assert!(logs3.is_empty());
    assert!(!state3.water_level_critical);
    snap.alert_state = state3;

    snap.resources.water = 10.0;
    let (state4, logs4) = aquasim_core::check_alerts(&snap, &tunables);
    assert_eq!(logs4.len(), 1);
    assert!(state4.water_level_critical);
}

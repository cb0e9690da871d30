use aquasim_schemas::action::Action;
use aquasim_schemas::config::SimulationConfig;
use aquasim_schemas::tunables::TunableConfig;

use crate::dispatcher::apply_action;
use crate::engine::tick;
use crate::error::AquaError;
use crate::logger::{self, TraceLogger};
use crate::state::{create_simulation, Snapshot};

/// One step of a scripted experiment (§1 ambient stack "calibration
/// harness"; §8 "Calibration harness acceptance"). This is the vehicle for
/// re-running the fishless-cycle and plant-rejection acceptance scenarios
/// as code rather than prose.
pub enum ScenarioStep {
    /// Advance the simulation by `n` ticks.
    Tick(u64),
    /// Apply one user action between ticks.
    Action(Action),
    /// Directly mutate the snapshot outside the effect pipeline, for
    /// scripting a precondition the action API has no route for — e.g.
    /// seeding an initial ammonia concentration before fishless cycling
    /// (§8 scenario 4). Not a user action; a calibration-only hook.
    Seed(Box<dyn Fn(&mut Snapshot)>),
    /// Tick until `stop_when` is satisfied or `max_ticks` elapses (whichever
    /// first), applying `maintain` (if any) as a direct mutation before each
    /// tick — models scripted interventions like "re-dose to 2ppm whenever
    /// ammonia drops below 0.5ppm" (§8 scenario 4), which set a resource to
    /// an exact value rather than apply a user action.
    RunUntil {
        max_ticks: u64,
        stop_when: Box<dyn Fn(&Snapshot) -> bool>,
        maintain: Option<Box<dyn Fn(&mut Snapshot)>>,
    },
    /// Fail the scenario with a typed error if `predicate` does not hold.
    Assert {
        description: String,
        predicate: Box<dyn Fn(&Snapshot) -> bool>,
    },
}

pub struct ScenarioOutcome {
    pub final_snapshot: Snapshot,
    pub assertions_checked: usize,
    /// Every snapshot produced by a `Tick`/`RunUntil` step, in order — lets
    /// a caller compute things like "first tick nitrite appeared" after the
    /// fact without re-running the scenario.
    pub history: Vec<Snapshot>,
}

/// Runs a scripted scenario against the public engine API (§6), optionally
/// recording a CSV trace row per tick. Fails loudly with a typed
/// `AquaError::AssertionFailed` the moment a scripted bound is violated
/// (§8 "Calibration harness acceptance").
pub fn run_scenario(
    config: &SimulationConfig,
    tunables: &TunableConfig,
    steps: Vec<ScenarioStep>,
    mut trace: Option<&mut TraceLogger>,
) -> Result<ScenarioOutcome, AquaError> {
    let mut snapshot = create_simulation(config)?;
    let mut assertions_checked = 0;
    let mut history = Vec::new();

    for step in steps {
        match step {
            ScenarioStep::Tick(n) => {
                for _ in 0..n {
                    snapshot = tick(&snapshot, tunables);
                    record(&snapshot, &mut trace, &mut history)?;
                }
            }
            ScenarioStep::Action(action) => {
                let (next, outcome) = apply_action(&snapshot, &action, tunables);
                snapshot = next;
                if !outcome.applied {
                    logger::debug_rejected_action(&outcome.message);
                }
            }
            ScenarioStep::Seed(seed) => {
                seed(&mut snapshot);
            }
            ScenarioStep::RunUntil {
                max_ticks,
                stop_when,
                maintain,
            } => {
                for _ in 0..max_ticks {
                    if stop_when(&snapshot) {
                        break;
                    }
                    if let Some(maintain) = &maintain {
                        maintain(&mut snapshot);
                    }
                    snapshot = tick(&snapshot, tunables);
                    record(&snapshot, &mut trace, &mut history)?;
                }
            }
            ScenarioStep::Assert { description, predicate } => {
                assertions_checked += 1;
                logger::info_scenario_progress(snapshot.tick, &description);
                if !predicate(&snapshot) {
                    return Err(AquaError::AssertionFailed {
                        tick: snapshot.tick,
                        message: description,
                    });
                }
            }
        }
    }

    Ok(ScenarioOutcome {
        final_snapshot: snapshot,
        assertions_checked,
        history,
    })
}

fn record(
    snapshot: &Snapshot,
    trace: &mut Option<&mut TraceLogger>,
    history: &mut Vec<Snapshot>,
) -> Result<(), AquaError> {
    logger::trace_tick(snapshot);
    if let Some(logger) = trace.as_deref_mut() {
        logger.log_snapshot(snapshot).map_err(AquaError::LoggingError)?;
    }
    history.push(snapshot.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::plant::PlantSpecies;

    #[test]
    fn scenario_fails_loudly_on_broken_assertion() {
        let config = SimulationConfig::new(100.0);
        let tunables = TunableConfig::default();
        let steps = vec![
            ScenarioStep::Tick(1),
            ScenarioStep::Assert {
                description: "water never drains on its own in one tick".to_string(),
                predicate: Box::new(|snap| snap.resources.water < 1.0),
            },
        ];
        let result = run_scenario(&config, &tunables, steps, None);
        assert!(matches!(result, Err(AquaError::AssertionFailed { .. })));
    }

    #[test]
    fn plant_rejection_scenario_reports_no_plants_added() {
        let config = SimulationConfig::new(100.0);
        let tunables = TunableConfig::default();
        let steps = vec![
            ScenarioStep::Action(Action::AddPlant {
                species: PlantSpecies::MonteCarlo,
                initial_size: None,
            }),
            ScenarioStep::Assert {
                description: "monte carlo is rejected without aqua soil".to_string(),
                predicate: Box::new(|snap| snap.plants.is_empty()),
            },
        ];
        let outcome = run_scenario(&config, &tunables, steps, None).unwrap();
        assert_eq!(outcome.assertions_checked, 1);
    }
}

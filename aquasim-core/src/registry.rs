use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// A stateless subsystem: given the snapshot and tunables, emit effects for
/// its tier. Fn pointers suffice because controllers with side-channel
/// state hints (heater, auto-doser, auto-feeder) and the plant/fish
/// processors are not registry members — they are called directly by the
/// orchestrator (§9 "Systems registry"; §4.1 "fourth side-channel").
pub type SystemFn = fn(&Snapshot, &TunableConfig) -> Vec<Effect>;

pub struct System {
    pub id: &'static str,
    pub tier: Tier,
    pub update: SystemFn,
}

/// Registry entries collected in the immediate tier (§4.1 step 3).
pub fn immediate_systems() -> Vec<System> {
    vec![
        System {
            id: "ato",
            tier: Tier::Immediate,
            update: crate::equipment::ato::update,
        },
        System {
            id: "co2_generator",
            tier: Tier::Immediate,
            update: crate::equipment::co2::update,
        },
        System {
            id: "evaporation",
            tier: Tier::Immediate,
            update: crate::systems::evaporation::update,
        },
    ]
}

/// Registry entries collected in the passive tier (§4.1 step 7).
pub fn passive_systems() -> Vec<System> {
    vec![
        System {
            id: "decay",
            tier: Tier::Passive,
            update: crate::systems::decay::update,
        },
        System {
            id: "nitrogen_cycle",
            tier: Tier::Passive,
            update: crate::systems::nitrogen_cycle::update,
        },
        System {
            id: "algae",
            tier: Tier::Passive,
            update: crate::systems::algae::update,
        },
        System {
            id: "gas_exchange",
            tier: Tier::Passive,
            update: crate::systems::gas_exchange::update,
        },
        System {
            id: "temperature_drift",
            tier: Tier::Passive,
            update: crate::systems::temperature_drift::update,
        },
        System {
            id: "ph_drift",
            tier: Tier::Passive,
            update: crate::systems::ph_drift::update,
        },
    ]
}

pub fn run(systems: &[System], snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    systems
        .iter()
        .flat_map(|system| (system.update)(snapshot, tunables))
        .collect()
}

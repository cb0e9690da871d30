use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Auto-feeder controller outcome: active-tier `food` effect plus the
/// `fedToday` hint (§4.4 "Auto-feeder"). Same daily-trigger shape as the
/// auto-doser.
pub struct AutoFeederOutcome {
    pub effects: Vec<Effect>,
    pub fed_today: bool,
}

pub fn update(snapshot: &Snapshot, _tunables: &TunableConfig) -> AutoFeederOutcome {
    let Some(feeder) = snapshot.equipment.auto_feeder else {
        return AutoFeederOutcome {
            effects: Vec::new(),
            fed_today: false,
        };
    };
    if !feeder.enabled {
        return AutoFeederOutcome {
            effects: Vec::new(),
            fed_today: false,
        };
    }

    let hour = snapshot.hour_of_day();
    let mut fed_today = if hour == 0 { false } else { feeder.fed_today };

    if hour == feeder.schedule.start_hour as u32 && !fed_today {
        fed_today = true;
        return AutoFeederOutcome {
            effects: vec![Effect::new(Tier::Active, ResourceKey::Food, feeder.amount_g, "auto_feeder")],
            fed_today,
        };
    }

    AutoFeederOutcome {
        effects: Vec::new(),
        fed_today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::equipment::{AutoFeeder, Schedule};

    #[test]
    fn feeds_once_at_start_hour() {
        let config = SimulationConfig::new(100.0).with_auto_feeder(AutoFeeder {
            enabled: true,
            schedule: Schedule::new(7, 1),
            amount_g: 0.5,
            fed_today: false,
        });
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.tick = 7;
        let tunables = TunableConfig::default();
        let outcome = update(&snap, &tunables);
        assert_eq!(outcome.effects.len(), 1);
        assert_eq!(outcome.effects[0].delta, 0.5);
        assert!(outcome.fed_today);
    }
}

use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Auto-doser controller outcome: active-tier effects plus the `dosedToday`
/// hint (§4.4 "Auto-doser"). Has a hint, so not a registry member.
pub struct AutoDoserOutcome {
    pub effects: Vec<Effect>,
    pub dosed_today: bool,
}

pub fn update(snapshot: &Snapshot, _tunables: &TunableConfig) -> AutoDoserOutcome {
    let Some(doser) = snapshot.equipment.auto_doser else {
        return AutoDoserOutcome {
            effects: Vec::new(),
            dosed_today: false,
        };
    };
    if !doser.enabled {
        return AutoDoserOutcome {
            effects: Vec::new(),
            dosed_today: false,
        };
    }

    let hour = snapshot.hour_of_day();
    let mut dosed_today = if hour == 0 { false } else { doser.dosed_today };

    if hour == doser.schedule.start_hour as u32 && !dosed_today {
        let formula = doser.formula;
        let ml = doser.dose_amount_ml;
        let effects = vec![
            Effect::new(Tier::Active, ResourceKey::Nitrate, ml * formula.nitrate_mg_per_ml, "auto_doser"),
            Effect::new(Tier::Active, ResourceKey::Phosphate, ml * formula.phosphate_mg_per_ml, "auto_doser"),
            Effect::new(Tier::Active, ResourceKey::Potassium, ml * formula.potassium_mg_per_ml, "auto_doser"),
            Effect::new(Tier::Active, ResourceKey::Iron, ml * formula.iron_mg_per_ml, "auto_doser"),
        ];
        dosed_today = true;
        return AutoDoserOutcome { effects, dosed_today };
    }

    AutoDoserOutcome {
        effects: Vec::new(),
        dosed_today,
    }
}

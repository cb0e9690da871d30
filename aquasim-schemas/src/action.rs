use crate::fish::FishSpecies;
use crate::plant::PlantSpecies;
use serde::{Deserialize, Serialize};

/// A user-initiated intervention (§4.2). Dispatch on this tag is exhaustive
/// so adding a new action is a compile-time-checked change to the match in
/// the dispatcher (§9 "Action dispatch").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    TopOff,
    Feed {
        amount_g: f64,
    },
    WaterChange {
        fraction: f64,
    },
    AddPlant {
        species: PlantSpecies,
        #[serde(default)]
        initial_size: Option<f64>,
    },
    RemovePlant {
        plant_id: u64,
    },
    AddFish {
        species: FishSpecies,
    },
    ScrubAlgae {
        fraction: f64,
    },
    Dose {
        amount_ml: f64,
    },
}

/// The result of `applyAction` (§6): the possibly-unchanged snapshot plus a
/// human-readable message. Rejections carry `applied: false` and leave the
/// input snapshot's observable state untouched (§4.2 "All actions are
/// immutable").
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub applied: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            applied: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            applied: false,
            message: message.into(),
        }
    }
}

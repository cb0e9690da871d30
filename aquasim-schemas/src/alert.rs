use serde::{Deserialize, Serialize};

/// Identifies one registered alert predicate (§4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertId {
    WaterLevelCritical,
    HighAlgae,
    HighAmmonia,
    HighNitrite,
    HighNitrate,
    LowOxygen,
    HighCo2,
}

impl AlertId {
    pub const ALL: [AlertId; 7] = [
        AlertId::WaterLevelCritical,
        AlertId::HighAlgae,
        AlertId::HighAmmonia,
        AlertId::HighNitrite,
        AlertId::HighNitrate,
        AlertId::LowOxygen,
        AlertId::HighCo2,
    ];

    pub fn source(self) -> &'static str {
        match self {
            AlertId::WaterLevelCritical => "evaporation",
            AlertId::HighAlgae => "algae",
            AlertId::HighAmmonia => "nitrogen_cycle",
            AlertId::HighNitrite => "nitrogen_cycle",
            AlertId::HighNitrate => "nitrogen_cycle",
            AlertId::LowOxygen => "gas_exchange",
            AlertId::HighCo2 => "gas_exchange",
        }
    }
}

/// One boolean latch per registered alert (§3 `alertState`). A fixed,
/// named-field struct (rather than a map) keeps the set of alerts
/// exhaustively enumerable and the snapshot deterministic to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AlertState {
    pub water_level_critical: bool,
    pub high_algae: bool,
    pub high_ammonia: bool,
    pub high_nitrite: bool,
    pub high_nitrate: bool,
    pub low_oxygen: bool,
    pub high_co2: bool,
}

impl AlertState {
    pub fn get(&self, id: AlertId) -> bool {
        match id {
            AlertId::WaterLevelCritical => self.water_level_critical,
            AlertId::HighAlgae => self.high_algae,
            AlertId::HighAmmonia => self.high_ammonia,
            AlertId::HighNitrite => self.high_nitrite,
            AlertId::HighNitrate => self.high_nitrate,
            AlertId::LowOxygen => self.low_oxygen,
            AlertId::HighCo2 => self.high_co2,
        }
    }

    pub fn set(&mut self, id: AlertId, value: bool) {
        let slot = match id {
            AlertId::WaterLevelCritical => &mut self.water_level_critical,
            AlertId::HighAlgae => &mut self.high_algae,
            AlertId::HighAmmonia => &mut self.high_ammonia,
            AlertId::HighNitrite => &mut self.high_nitrite,
            AlertId::HighNitrate => &mut self.high_nitrate,
            AlertId::LowOxygen => &mut self.low_oxygen,
            AlertId::HighCo2 => &mut self.high_co2,
        };
        *slot = value;
    }
}

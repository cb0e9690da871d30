use serde::{Deserialize, Serialize};

/// A half-open daily interval `[start_hour, start_hour + duration) mod 24`
/// (§4.3 GLOSSARY "Schedule").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_hour: u8,
    pub duration: u8,
}

impl Schedule {
    pub fn new(start_hour: u8, duration: u8) -> Self {
        Self {
            start_hour,
            duration,
        }
    }

    /// True iff `start_hour <= 23` and `1 <= duration <= 24`.
    pub fn is_valid(&self) -> bool {
        self.start_hour <= 23 && (1..=24).contains(&self.duration)
    }

    /// Whether `hour` (0-23) falls inside this schedule's window, with
    /// wrap-around past midnight supported.
    pub fn is_active_at(&self, hour: u32) -> bool {
        let hour = hour % 24;
        let start = self.start_hour as u32;
        let end = start + self.duration as u32; // may exceed 24, that's the wrap
        if end <= 24 {
            hour >= start && hour < end
        } else {
            hour >= start || hour < (end - 24)
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_hour: 8,
            duration: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Sponge,
    Hob,
    Canister,
    Sump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LidType {
    None,
    Mesh,
    Full,
    Sealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstrateType {
    None,
    Gravel,
    Sand,
    AquaSoil,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heater {
    pub enabled: bool,
    pub target_temperature: f64,
    pub wattage: f64,
    #[serde(default)]
    pub is_on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ato {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Co2Generator {
    pub enabled: bool,
    pub bubble_rate: f64,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub enabled: bool,
    pub filter_type: FilterType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Powerhead {
    pub enabled: bool,
    pub flow_rate_gph: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirPump {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub substrate_type: SubstrateType,
}

/// Hardscape material, relevant to pH drift (§4.5 "pH drift"); inert pieces
/// (rock, plastic decor) contribute surface only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardscapeMaterial {
    Inert,
    Driftwood,
    Calcite,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardscapeItem {
    pub surface_cm2: f64,
    #[serde(default = "default_hardscape_material")]
    pub material: HardscapeMaterial,
}

fn default_hardscape_material() -> HardscapeMaterial {
    HardscapeMaterial::Inert
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Hardscape {
    pub items: Vec<HardscapeItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lid {
    pub lid_type: LidType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub enabled: bool,
    pub wattage: f64,
    pub schedule: Schedule,
}

/// Milligrams of each nutrient delivered per milliliter of fertilizer
/// dosed (§4.4 "Auto-doser"; also used by the `dose` action, §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FertilizerFormula {
    pub nitrate_mg_per_ml: f64,
    pub phosphate_mg_per_ml: f64,
    pub potassium_mg_per_ml: f64,
    pub iron_mg_per_ml: f64,
}

impl Default for FertilizerFormula {
    fn default() -> Self {
        Self {
            nitrate_mg_per_ml: 5.0,
            phosphate_mg_per_ml: 0.5,
            potassium_mg_per_ml: 3.0,
            iron_mg_per_ml: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoDoser {
    pub enabled: bool,
    pub schedule: Schedule,
    pub dose_amount_ml: f64,
    pub formula: FertilizerFormula,
    #[serde(default)]
    pub dosed_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoFeeder {
    pub enabled: bool,
    pub schedule: Schedule,
    pub amount_g: f64,
    #[serde(default)]
    pub fed_today: bool,
}

/// Every equipment instance owned by a snapshot (§3 `equipment`). Optional
/// equipment that a tank simply doesn't have is `None` rather than a
/// disabled default, so the passive-resource pass (§4.3) and the equipment
/// controllers (§4.4) can skip it without special-casing a sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub heater: Heater,
    pub ato: Ato,
    pub filter: Filter,
    pub powerhead: Powerhead,
    pub substrate: Substrate,
    pub hardscape: Hardscape,
    pub lid: Lid,
    pub light: Light,
    pub co2_generator: Option<Co2Generator>,
    pub air_pump: Option<AirPump>,
    pub auto_doser: Option<AutoDoser>,
    pub auto_feeder: Option<AutoFeeder>,
}

impl Equipment {
    /// Whether any currently-enabled piece of equipment biases gas exchange
    /// toward saturation faster (sponge filters and air stones agitate the
    /// surface; §4.5 "Gas exchange").
    pub fn has_aeration(&self) -> bool {
        let sponge_filter = self.filter.enabled && self.filter.filter_type == FilterType::Sponge;
        let air_pump = self.air_pump.map_or(false, |a| a.enabled);
        sponge_filter || air_pump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_active_within_plain_window() {
        let s = Schedule::new(8, 10);
        assert!(s.is_valid());
        assert!(s.is_active_at(8));
        assert!(s.is_active_at(17));
        assert!(!s.is_active_at(18));
        assert!(!s.is_active_at(7));
    }

    #[test]
    fn schedule_wraps_past_midnight() {
        let s = Schedule::new(20, 8); // 20:00 - 04:00
        assert!(s.is_active_at(20));
        assert!(s.is_active_at(23));
        assert!(s.is_active_at(0));
        assert!(s.is_active_at(3));
        assert!(!s.is_active_at(4));
        assert!(!s.is_active_at(19));
    }

    #[test]
    fn schedule_validation_rejects_bad_duration() {
        assert!(!Schedule::new(0, 0).is_valid());
        assert!(!Schedule::new(0, 25).is_valid());
        assert!(Schedule::new(23, 24).is_valid());
    }
}

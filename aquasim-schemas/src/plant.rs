use crate::equipment::SubstrateType;
use serde::{Deserialize, Serialize};

/// Catalogue of stocked plant species. Each species carries the static
/// biological parameters the growth/nutrient-sufficiency model (§4.5) reads;
/// the preset catalogue itself (names, descriptions) is the out-of-scope
/// UI's concern (§1), this is just the handful of constants the engine
/// needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantSpecies {
    MonteCarlo,
    JavaFern,
    Anubias,
    AmazonSword,
    DwarfHairgrass,
    RotalaRotundifolia,
}

/// Static, per-species biological parameters. Optimal nutrient values are
/// ppm targets used by the Michaelis-Menten sufficiency ratio (§4.5
/// "Nutrient sufficiency & condition").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantProfile {
    /// `None` means "grows in any substrate (or none)".
    pub required_substrate: Option<SubstrateType>,
    pub growth_rate_per_hr: f64,
    pub optimal_nitrate_ppm: f64,
    pub optimal_phosphate_ppm: f64,
    pub optimal_potassium_ppm: f64,
    pub optimal_iron_ppm: f64,
}

impl PlantSpecies {
    pub fn profile(self) -> PlantProfile {
        match self {
            PlantSpecies::MonteCarlo => PlantProfile {
                required_substrate: Some(SubstrateType::AquaSoil),
                growth_rate_per_hr: 0.0025,
                optimal_nitrate_ppm: 15.0,
                optimal_phosphate_ppm: 1.0,
                optimal_potassium_ppm: 15.0,
                optimal_iron_ppm: 0.2,
            },
            PlantSpecies::DwarfHairgrass => PlantProfile {
                required_substrate: Some(SubstrateType::AquaSoil),
                growth_rate_per_hr: 0.002,
                optimal_nitrate_ppm: 12.0,
                optimal_phosphate_ppm: 1.0,
                optimal_potassium_ppm: 12.0,
                optimal_iron_ppm: 0.15,
            },
            PlantSpecies::JavaFern => PlantProfile {
                required_substrate: None,
                growth_rate_per_hr: 0.0012,
                optimal_nitrate_ppm: 8.0,
                optimal_phosphate_ppm: 0.7,
                optimal_potassium_ppm: 8.0,
                optimal_iron_ppm: 0.1,
            },
            PlantSpecies::Anubias => PlantProfile {
                required_substrate: None,
                growth_rate_per_hr: 0.0008,
                optimal_nitrate_ppm: 6.0,
                optimal_phosphate_ppm: 0.5,
                optimal_potassium_ppm: 6.0,
                optimal_iron_ppm: 0.08,
            },
            PlantSpecies::AmazonSword => PlantProfile {
                required_substrate: Some(SubstrateType::Gravel),
                growth_rate_per_hr: 0.0018,
                optimal_nitrate_ppm: 20.0,
                optimal_phosphate_ppm: 1.5,
                optimal_potassium_ppm: 18.0,
                optimal_iron_ppm: 0.25,
            },
            PlantSpecies::RotalaRotundifolia => PlantProfile {
                required_substrate: None,
                growth_rate_per_hr: 0.003,
                optimal_nitrate_ppm: 18.0,
                optimal_phosphate_ppm: 1.2,
                optimal_potassium_ppm: 16.0,
                optimal_iron_ppm: 0.2,
            },
        }
    }

    /// Human-readable substrate requirement, used in action-rejection
    /// messages (§8 scenario 5 requires the text "aqua soil").
    pub fn substrate_requirement_name(self) -> Option<&'static str> {
        match self.profile().required_substrate {
            Some(SubstrateType::AquaSoil) => Some("aqua soil"),
            Some(SubstrateType::Gravel) => Some("gravel"),
            Some(SubstrateType::Sand) => Some("sand"),
            Some(SubstrateType::None) | None => None,
        }
    }
}

/// A single stocked plant (§3 `plants`). `ticks_below_threshold` is engine
/// bookkeeping for sustained-condition shedding/death timing (§4.6); it is
/// not part of the data model's public field list but is persisted with the
/// plant since it must survive a save/load round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub species: PlantSpecies,
    pub size: f64,
    pub condition: f64,
    #[serde(default)]
    pub ticks_below_threshold: u32,
}

impl Plant {
    pub fn new(id: u64, species: PlantSpecies, initial_size: f64) -> Self {
        Self {
            id,
            species,
            size: initial_size.clamp(0.0, 200.0),
            condition: 100.0,
            ticks_below_threshold: 0,
        }
    }

    pub fn clamp_invariants(&mut self) {
        self.size = self.size.clamp(0.0, 200.0);
        self.condition = self.condition.clamp(0.0, 100.0);
    }
}

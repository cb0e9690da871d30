use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Michaelis-Menten algae growth against watts/liter (§4.5 "Algae").
/// Suppression by plants is indirect, through shared nutrient competition
/// in `crate::plants`, not a direct term here (§9 open question a).
/// Passive tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    let wpl = snapshot.resources.watts_per_liter();
    if wpl <= 0.0 {
        return Vec::new();
    }

    let growth = tunables.algae_max_growth_rate * wpl / (tunables.algae_half_saturation_wpl + wpl);
    if growth <= 0.0 {
        return Vec::new();
    }

    vec![Effect::new(Tier::Passive, ResourceKey::Algae, growth, "algae")]
}

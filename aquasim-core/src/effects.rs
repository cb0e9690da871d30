use aquasim_schemas::resources::{ResourceKey, Resources};

/// Causal ordering slot within a tick (§4.1 GLOSSARY "Tier").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Immediate,
    Active,
    Passive,
}

/// A tier-tagged, resource-scoped, signed delta emitted by a subsystem
/// (§4.1 GLOSSARY "Effect"). Effects never mutate state directly; the
/// pipeline applies them in bulk, then clamps (§4.1 "Clamping").
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub tier: Tier,
    pub resource: ResourceKey,
    pub delta: f64,
    pub source: &'static str,
}

impl Effect {
    pub fn new(tier: Tier, resource: ResourceKey, delta: f64, source: &'static str) -> Self {
        Self {
            tier,
            resource,
            delta,
            source,
        }
    }
}

/// Applies every effect's delta to `resources`. Effects commute additively
/// on independent scalars within a tier (§4.1 "Ordering within a tier"),
/// so application order does not matter here.
pub fn apply_effects(resources: &mut Resources, effects: &[Effect]) {
    for effect in effects {
        resources.apply_delta(effect.resource, effect.delta);
    }
}

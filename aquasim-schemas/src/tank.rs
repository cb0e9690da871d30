use serde::{Deserialize, Serialize};

/// Hard cap on hardscape slots regardless of tank size (§3).
pub const MAX_HARDSCAPE_SLOTS: u32 = 8;

/// Fixed, creation-time properties of the physical tank.
///
/// `capacity_l` and `bacteria_surface_cm2` never change after `Tank::new`;
/// everything that varies tick-to-tick lives in `Resources` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub capacity_l: f64,
    pub hardscape_slots: u32,
    pub bacteria_surface_cm2: f64,
}

impl Tank {
    /// Builds a tank from its capacity, deriving slots and biofilm surface.
    pub fn new(capacity_l: f64) -> Self {
        let hardscape_slots = hardscape_slots_for(capacity_l);
        let bacteria_surface_cm2 = approximate_box_surface_cm2(capacity_l);
        Self {
            capacity_l,
            hardscape_slots,
            bacteria_surface_cm2,
        }
    }
}

fn hardscape_slots_for(capacity_l: f64) -> u32 {
    let raw = (capacity_l / 3.785 * 2.0).floor();
    if raw < 0.0 {
        0
    } else {
        (raw as u32).min(MAX_HARDSCAPE_SLOTS)
    }
}

/// Approximates the wetted surface of an open-top 2:1:1 (L:W:H) rectangular
/// box of the given volume, in cm². Used as the tank's baseline biofilm
/// surface before filter/substrate/hardscape contributions are added.
fn approximate_box_surface_cm2(capacity_l: f64) -> f64 {
    if capacity_l <= 0.0 {
        return 0.0;
    }
    // capacity_l == volume in dm^3 == 2*x * x * x for the 2:1:1 box.
    let x_dm = (capacity_l / 2.0).cbrt();
    let (length, width, height) = (2.0 * x_dm, x_dm, x_dm);
    let open_top_surface_dm2 = 2.0 * (length * height) + 2.0 * (width * height) + (length * width);
    open_top_surface_dm2 * 100.0 // 1 dm^2 == 100 cm^2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardscape_slots_capped_at_eight() {
        assert_eq!(hardscape_slots_for(1000.0), MAX_HARDSCAPE_SLOTS);
    }

    #[test]
    fn hardscape_slots_scale_with_capacity() {
        assert_eq!(hardscape_slots_for(3.785), 2);
        assert_eq!(hardscape_slots_for(0.0), 0);
    }

    #[test]
    fn surface_grows_with_capacity() {
        let small = Tank::new(10.0);
        let large = Tank::new(200.0);
        assert!(large.bacteria_surface_cm2 > small.bacteria_surface_cm2);
        assert!(small.bacteria_surface_cm2 > 0.0);
    }
}

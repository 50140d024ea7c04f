//! Charge/release state machine shared by both echo weapons
//!
//! Holding the trigger accumulates charge up to the cap. The held -> released
//! edge fires exactly one echo sized by the charge and resets it; releasing
//! with no charge does nothing. A trigger that is never released never fires.

use serde::{Deserialize, Serialize};

use super::echo::EchoKind;
use crate::tuning::WeaponParams;

/// A released echo, not yet placed in the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub kind: EchoKind,
    /// Beam length or wave radius
    pub size: f32,
    /// Contribution to the wave director's intensity budget
    pub intensity: f32,
}

/// Per-weapon charge state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeWeapon {
    pub kind: EchoKind,
    pub params: WeaponParams,
    charge: f32,
    was_held: bool,
}

impl ChargeWeapon {
    pub fn new(kind: EchoKind, params: WeaponParams) -> Self {
        Self {
            kind,
            params,
            charge: 0.0,
            was_held: false,
        }
    }

    pub fn charge(&self) -> f32 {
        self.charge
    }

    /// Charge as a fraction of the cap, for HUD bars
    pub fn charge_fraction(&self) -> f32 {
        (self.charge / self.params.max_charge).clamp(0.0, 1.0)
    }

    /// Advance one frame. Returns the release if this frame is the
    /// held -> released edge with charge stored.
    pub fn update(&mut self, held: bool, dt: f32) -> Option<Release> {
        let release = if held {
            self.charge = (self.charge + dt * self.params.charge_rate).min(self.params.max_charge);
            None
        } else if self.was_held && self.charge > 0.0 {
            let size = self.charge * self.params.size_multiplier;
            self.charge = 0.0;
            Some(Release {
                kind: self.kind,
                size,
                intensity: intensity_for(self.kind, size),
            })
        } else {
            None
        };

        self.was_held = held;
        release
    }

    /// Refresh the edge latch without simulating (used while paused)
    pub fn latch(&mut self, held: bool) {
        self.was_held = held;
    }
}

/// Intensity a released echo adds: beams a quarter of their length, waves
/// their full radius
pub fn intensity_for(kind: EchoKind, size: f32) -> f32 {
    match kind {
        EchoKind::Beam => size / 4.0,
        EchoKind::Wave => size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn beam() -> ChargeWeapon {
        ChargeWeapon::new(EchoKind::Beam, WeaponParams::beam())
    }

    #[test]
    fn test_release_fires_once_and_resets() {
        let mut weapon = beam();
        assert_eq!(weapon.update(true, 0.5), None);
        assert!((weapon.charge() - 100.0).abs() < 1e-4);

        let release = weapon.update(false, 0.016).expect("release on falling edge");
        assert_eq!(release.kind, EchoKind::Beam);
        assert!((release.size - 200.0).abs() < 1e-3);
        assert!((release.intensity - 50.0).abs() < 1e-3);
        assert_eq!(weapon.charge(), 0.0);

        // No second release while idle
        assert_eq!(weapon.update(false, 0.016), None);
    }

    #[test]
    fn test_release_without_charge_is_noop() {
        let mut weapon = beam();
        assert_eq!(weapon.update(true, 0.0), None);
        assert_eq!(weapon.charge(), 0.0);
        assert_eq!(weapon.update(false, 0.016), None);
    }

    #[test]
    fn test_charge_saturates() {
        let mut weapon = beam();
        for _ in 0..100 {
            weapon.update(true, 0.1);
        }
        assert_eq!(weapon.charge(), weapon.params.max_charge);
        assert_eq!(weapon.charge_fraction(), 1.0);
    }

    #[test]
    fn test_never_released_never_fires() {
        let mut weapon = ChargeWeapon::new(EchoKind::Wave, WeaponParams::wave());
        for _ in 0..1000 {
            assert_eq!(weapon.update(true, 1.0 / 60.0), None);
        }
    }

    #[test]
    fn test_wave_intensity_is_full_radius() {
        let mut weapon = ChargeWeapon::new(EchoKind::Wave, WeaponParams::wave());
        weapon.update(true, 0.4);
        let release = weapon.update(false, 0.016).expect("release");
        assert!((release.size - 200.0).abs() < 1e-3);
        assert!((release.intensity - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_latch_suppresses_edge() {
        let mut weapon = beam();
        weapon.update(true, 0.5);
        // Released while paused: latch refreshed, no simulation
        weapon.latch(false);
        assert_eq!(weapon.update(false, 0.016), None);
        assert!(weapon.charge() > 0.0);
    }

    proptest! {
        #[test]
        fn prop_charge_monotonic_and_capped(frames in 1usize..400, dt in 0.0f32..0.25) {
            let mut weapon = beam();
            let mut last = weapon.charge();
            for _ in 0..frames {
                prop_assert_eq!(weapon.update(true, dt), None);
                prop_assert!(weapon.charge() >= last);
                prop_assert!(weapon.charge() <= weapon.params.max_charge);
                last = weapon.charge();
            }
        }
    }
}

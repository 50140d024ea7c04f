//! The stationary turret: aim and fire cooldown

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{direction_from_degrees, wrap_degrees};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Turret {
    /// Aim angle in degrees, [0, 360)
    pub aim_degrees: f32,
    /// Seconds until the next shot is accepted
    pub cooldown_remaining: f32,
}

impl Turret {
    /// Apply a signed rotation rate (degrees/second). No inertia.
    pub fn rotate(&mut self, rate: f32, dt: f32) {
        self.aim_degrees = wrap_degrees(self.aim_degrees + rate * dt);
    }

    pub fn aim_direction(&self) -> Vec2 {
        direction_from_degrees(self.aim_degrees)
    }

    pub fn cool_down(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    /// Accept a fire intent if the cooldown has elapsed. Returns the bullet
    /// velocity and restarts the cooldown.
    pub fn try_fire(&mut self, bullet_speed: f32, cooldown: f32) -> Option<Vec2> {
        if !self.can_fire() {
            return None;
        }
        self.cooldown_remaining = cooldown;
        Some(self.aim_direction() * bullet_speed)
    }
}

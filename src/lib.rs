//! Echo Clash - A turret-defense arena simulation
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, weapons, collisions, waves)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError, WeaponParams};

use glam::Vec2;

/// Default gameplay constants (the values `Tuning::default()` is built from)
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Turret defaults
    pub const TURRET_RADIUS: f32 = 18.0;
    pub const ROTATION_SPEED_DEG: f32 = 140.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 520.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const FIRE_COOLDOWN: f32 = 0.20;
    /// Bullets outside the arena by more than this are dropped
    pub const BULLET_MARGIN: f32 = 50.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ENEMY_BASE_SPEED: f32 = 40.0;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 8.0;
    pub const ENEMY_SPEED_JITTER: f32 = 10.0;
    /// Spawn circle sits this far beyond the half of the larger arena side
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Seconds an enemy stays revealed after echo contact
    pub const REVEAL_DURATION: f32 = 4.0;

    /// Wave director defaults
    pub const MAX_ENEMIES_PER_WAVE: u32 = 5;
    pub const INTENSITY_PER_ENEMY: f32 = 40.0;
    pub const INTENSITY_DECAY_PER_FRAME: f32 = 1.0;
    pub const TIME_BETWEEN_WAVES: f32 = 1.0;

    /// Player defaults
    pub const MAX_LIVES: u32 = 10;
    /// Frames the damage flash overlay stays up
    pub const FLASH_FRAMES: u32 = 15;

    /// Beam echo (directional, shrinking rectangle)
    pub const BEAM_MAX_CHARGE: f32 = 150.0;
    pub const BEAM_CHARGE_RATE: f32 = 200.0;
    pub const BEAM_SHRINK_RATE: f32 = 100.0;
    pub const BEAM_SIZE_MULTIPLIER: f32 = 2.0;
    pub const BEAM_THICKNESS: f32 = 6.0;
    pub const BEAM_SPEED: f32 = 520.0;

    /// Wave echo (stationary, shrinking ring)
    pub const WAVE_MAX_CHARGE: f32 = 200.0;
    pub const WAVE_CHARGE_RATE: f32 = 250.0;
    pub const WAVE_SHRINK_RATE: f32 = 150.0;
    pub const WAVE_SIZE_MULTIPLIER: f32 = 2.0;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for an angle in degrees (0 = +x, clockwise on screen since +y is down)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Convert polar (r, theta) to cartesian (x, y) around an origin
#[inline]
pub fn polar_to_cartesian(origin: Vec2, r: f32, theta: f32) -> Vec2 {
    origin + Vec2::new(r * theta.cos(), r * theta.sin())
}

//! Game balance tuning
//!
//! Every gameplay constant the simulation reads. Loaded from JSON by the host;
//! fields missing from the document keep their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading tuning data
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Charge/release parameters for one echo weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponParams {
    /// Charge saturates at this value
    pub max_charge: f32,
    /// Charge gained per second while the trigger is held
    pub charge_rate: f32,
    /// Size lost per second by the released effect
    pub shrink_rate: f32,
    /// Released size = charge * size_multiplier
    pub size_multiplier: f32,
}

impl WeaponParams {
    pub fn beam() -> Self {
        Self {
            max_charge: BEAM_MAX_CHARGE,
            charge_rate: BEAM_CHARGE_RATE,
            shrink_rate: BEAM_SHRINK_RATE,
            size_multiplier: BEAM_SIZE_MULTIPLIER,
        }
    }

    pub fn wave() -> Self {
        Self {
            max_charge: WAVE_MAX_CHARGE,
            charge_rate: WAVE_CHARGE_RATE,
            shrink_rate: WAVE_SHRINK_RATE,
            size_multiplier: WAVE_SIZE_MULTIPLIER,
        }
    }

    fn validate(&self, prefix: &'static str) -> Result<(), TuningError> {
        positive(prefix, "max_charge", self.max_charge)?;
        positive(prefix, "charge_rate", self.charge_rate)?;
        positive(prefix, "shrink_rate", self.shrink_rate)?;
        positive(prefix, "size_multiplier", self.size_multiplier)
    }
}

/// All gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Turret ===
    pub turret_radius: f32,
    /// Degrees per second while a rotate key is held
    pub rotation_speed_deg: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Seconds between accepted shots
    pub fire_cooldown: f32,
    pub bullet_margin: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    pub enemy_speed_per_wave: f32,
    /// Uniform jitter applied to each enemy's speed (±)
    pub enemy_speed_jitter: f32,
    pub spawn_margin: f32,
    pub reveal_duration: f32,

    // === Waves ===
    pub max_enemies_per_wave: u32,
    /// Intensity needed per additional enemy
    pub intensity_per_enemy: f32,
    pub intensity_decay_per_frame: f32,
    pub time_between_waves: f32,

    // === Player ===
    pub max_lives: u32,
    pub flash_frames: u32,

    // === Echo weapons ===
    pub beam: WeaponParams,
    pub beam_thickness: f32,
    pub beam_speed: f32,
    pub wave: WeaponParams,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            turret_radius: TURRET_RADIUS,
            rotation_speed_deg: ROTATION_SPEED_DEG,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            fire_cooldown: FIRE_COOLDOWN,
            bullet_margin: BULLET_MARGIN,

            enemy_radius: ENEMY_RADIUS,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_wave: ENEMY_SPEED_PER_WAVE,
            enemy_speed_jitter: ENEMY_SPEED_JITTER,
            spawn_margin: SPAWN_MARGIN,
            reveal_duration: REVEAL_DURATION,

            max_enemies_per_wave: MAX_ENEMIES_PER_WAVE,
            intensity_per_enemy: INTENSITY_PER_ENEMY,
            intensity_decay_per_frame: INTENSITY_DECAY_PER_FRAME,
            time_between_waves: TIME_BETWEEN_WAVES,

            max_lives: MAX_LIVES,
            flash_frames: FLASH_FRAMES,

            beam: WeaponParams::beam(),
            beam_thickness: BEAM_THICKNESS,
            beam_speed: BEAM_SPEED,
            wave: WeaponParams::wave(),
        }
    }
}

impl Tuning {
    /// Arena center (turret position)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Radius of the circle enemies spawn on
    pub fn spawn_radius(&self) -> f32 {
        self.arena_width.max(self.arena_height) / 2.0 + self.spawn_margin
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse tuning, falling back to defaults (with a warning) on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("", "arena_width", self.arena_width)?;
        positive("", "arena_height", self.arena_height)?;
        positive("", "turret_radius", self.turret_radius)?;
        positive("", "rotation_speed_deg", self.rotation_speed_deg)?;
        positive("", "bullet_speed", self.bullet_speed)?;
        positive("", "bullet_radius", self.bullet_radius)?;
        positive("", "enemy_radius", self.enemy_radius)?;
        positive("", "enemy_base_speed", self.enemy_base_speed)?;
        positive("", "reveal_duration", self.reveal_duration)?;
        positive("", "intensity_per_enemy", self.intensity_per_enemy)?;
        positive("", "beam_thickness", self.beam_thickness)?;
        positive("", "beam_speed", self.beam_speed)?;
        non_negative("", "spawn_margin", self.spawn_margin)?;
        non_negative("", "fire_cooldown", self.fire_cooldown)?;
        non_negative("", "enemy_speed_jitter", self.enemy_speed_jitter)?;
        non_negative("", "intensity_decay_per_frame", self.intensity_decay_per_frame)?;
        non_negative("", "time_between_waves", self.time_between_waves)?;
        self.beam.validate("beam.")?;
        self.wave.validate("wave.")?;

        if self.max_lives == 0 {
            return Err(TuningError::Invalid {
                field: "max_lives",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_enemies_per_wave == 0 {
            return Err(TuningError::Invalid {
                field: "max_enemies_per_wave",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(prefix: &'static str, field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("{prefix}{field} must be positive, got {value}"),
        })
    }
}

fn non_negative(prefix: &'static str, field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("{prefix}{field} must not be negative, got {value}"),
        })
    }
}

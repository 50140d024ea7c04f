//! Wave director
//!
//! Weapon use feeds a decaying intensity budget; the budget sizes the next
//! wave. A wave stays active until the arena is clear, then a short
//! intermission runs before the next one spawns.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::echo::EchoEffect;
use super::entities::Enemy;
use super::pool::Pool;
use super::state::EntityIds;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveDirector {
    /// Current wave, starting at 1
    pub wave_number: u32,
    /// Decaying budget fed by echo releases
    pub total_intensity: f32,
    pub wave_active: bool,
    /// Seconds since the arena was cleared
    pub next_wave_timer: f32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave_number: 1,
            total_intensity: 0.0,
            wave_active: false,
            next_wave_timer: 0.0,
        }
    }
}

impl WaveDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enemies in the next wave: 1 + intensity / divisor, clamped to [1, cap]
    pub fn enemy_count(&self, tuning: &Tuning) -> u32 {
        let extra = (self.total_intensity / tuning.intensity_per_enemy).max(0.0) as u32;
        extra
            .saturating_add(1)
            .clamp(1, tuning.max_enemies_per_wave.max(1))
    }

    /// Base enemy speed for the current wave, before jitter
    pub fn base_speed(&self, tuning: &Tuning) -> f32 {
        tuning.enemy_base_speed + tuning.enemy_speed_per_wave * self.wave_number as f32
    }

    pub fn add_intensity(&mut self, amount: f32) {
        self.total_intensity += amount;
    }

    /// Per-frame decay, floored at zero
    pub fn decay_intensity(&mut self, amount: f32) {
        self.total_intensity = (self.total_intensity - amount).max(0.0);
    }

    /// Replace the arena contents with a fresh wave. Live echoes are cleared
    /// too: effects never carry over between waves. Returns the enemy count.
    pub fn spawn_wave<R: Rng>(
        &mut self,
        rng: &mut R,
        tuning: &Tuning,
        ids: &mut EntityIds,
        enemies: &mut Pool<Enemy>,
        echoes: &mut Pool<EchoEffect>,
    ) -> u32 {
        let count = self.enemy_count(tuning);
        let center = tuning.center();
        let spawn_radius = tuning.spawn_radius();
        let base_speed = self.base_speed(tuning);
        let jitter = tuning.enemy_speed_jitter;

        enemies.clear();
        echoes.clear();

        for _ in 0..count {
            let angle = rng.random_range(0.0..TAU);
            let pos = polar_to_cartesian(center, spawn_radius, angle);
            let speed = base_speed + rng.random_range(-jitter..=jitter);
            enemies.add(Enemy::aimed_at(ids.next(), pos, center, speed, tuning.enemy_radius));
        }

        self.wave_active = true;
        log::info!(
            "Wave {}: {} enemies (intensity {:.1}, speed {:.1}±{:.1})",
            self.wave_number,
            count,
            self.total_intensity,
            base_speed,
            jitter
        );
        count
    }

    /// Advance the wave state machine by one frame. Spawns the next wave once
    /// the arena has been clear for the intermission; returns the enemy count
    /// when that happens.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        rng: &mut R,
        tuning: &Tuning,
        ids: &mut EntityIds,
        enemies: &mut Pool<Enemy>,
        echoes: &mut Pool<EchoEffect>,
    ) -> Option<u32> {
        if self.wave_active && enemies.is_empty() {
            self.wave_active = false;
            self.next_wave_timer = 0.0;
            log::debug!("Wave {} cleared", self.wave_number);
        }

        if self.wave_active {
            return None;
        }

        self.next_wave_timer += dt;
        if self.next_wave_timer < tuning.time_between_waves {
            return None;
        }

        self.wave_number += 1;
        Some(self.spawn_wave(rng, tuning, ids, enemies, echoes))
    }
}

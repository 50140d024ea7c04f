//! Game state and core simulation types
//!
//! Everything that changes between frames lives in `GameState`; `tick` is the
//! only writer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::director::WaveDirector;
use super::echo::{EchoEffect, EchoKind};
use super::entities::{Bullet, Enemy};
use super::player::Player;
use super::pool::Pool;
use super::turret::Turret;
use super::weapon::ChargeWeapon;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen; only input latches and the pause menu run
    Paused,
    /// Run ended
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    /// Lives reached zero
    GameOver { wave: u32 },
    /// Quit from the pause menu
    Quit,
}

/// Things that happened during a tick, for audio/HUD hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveSpawned { wave: u32, enemies: u32 },
    BulletFired { bullet_id: u32 },
    EchoReleased { echo_id: u32, kind: EchoKind, size: f32 },
    EnemyRevealed { enemy_id: u32, echo_id: u32 },
    EnemyKilled { enemy_id: u32, bullet_id: u32, pos: Vec2 },
    TurretBreached { enemy_id: u32, lives_left: u32 },
    Paused,
    Resumed,
    GameOver { wave: u32 },
}

/// Monotonic entity id source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next_id: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl EntityIds {
    /// Allocate a new entity ID
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulated frame counter (frames where the simulation actually ran)
    pub frame: u64,
    pub turret: Turret,
    pub beam_weapon: ChargeWeapon,
    pub wave_weapon: ChargeWeapon,
    pub director: WaveDirector,
    pub player: Player,
    pub enemies: Pool<Enemy>,
    pub bullets: Pool<Bullet>,
    pub echoes: Pool<EchoEffect>,
    /// Edge latch for the pause key
    pub was_pause_held: bool,
    /// Events not yet handed to the host in a snapshot
    pub events: Vec<GameEvent>,
    pub ids: EntityIds,
}

impl GameState {
    /// Create a new run with default tuning; the first wave is spawned
    /// immediately
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self::empty(seed, tuning);
        state.spawn_wave();
        state
    }

    /// A run with no wave spawned yet (the director is inactive, so the
    /// first wave arrives after the intermission)
    pub fn empty(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            frame: 0,
            turret: Turret::default(),
            beam_weapon: ChargeWeapon::new(EchoKind::Beam, tuning.beam),
            wave_weapon: ChargeWeapon::new(EchoKind::Wave, tuning.wave),
            director: WaveDirector::new(),
            player: Player::new(tuning.max_lives),
            enemies: Pool::with_capacity(tuning.max_enemies_per_wave as usize),
            bullets: Pool::new(),
            echoes: Pool::new(),
            was_pause_held: false,
            events: Vec::new(),
            ids: EntityIds::default(),
            tuning,
        }
    }

    /// Spawn a wave for the director's current wave number
    pub fn spawn_wave(&mut self) -> u32 {
        let count = self.director.spawn_wave(
            &mut self.rng,
            &self.tuning,
            &mut self.ids,
            &mut self.enemies,
            &mut self.echoes,
        );
        self.events.push(GameEvent::WaveSpawned {
            wave: self.director.wave_number,
            enemies: count,
        });
        count
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.next()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

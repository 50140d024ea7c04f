//! Read-only view of a frame for the renderer and HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::echo::EchoEffect;
use super::state::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Draw only when revealed
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EchoView {
    /// Rectangle centered on `pos`, `size` = (length, thickness)
    Beam { id: u32, pos: Vec2, size: Vec2, rotation: f32 },
    /// Ring outline around `center`
    Wave { id: u32, center: Vec2, radius: f32 },
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub arena_size: Vec2,
    pub center: Vec2,
    pub turret_radius: f32,
    pub aim_degrees: f32,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub echoes: Vec<EchoView>,
    pub wave: u32,
    pub lives: u32,
    pub hearts: u32,
    /// Length of the heart row
    pub max_hearts: u32,
    pub intensity: f32,
    /// Charge bar fill, [0, 1]
    pub beam_charge: f32,
    pub wave_charge: f32,
    pub flash_active: bool,
    /// Flash overlay strength, [0, 1]
    pub flash_intensity: f32,
    pub events: Vec<GameEvent>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            phase: state.phase,
            arena_size: Vec2::new(tuning.arena_width, tuning.arena_height),
            center: tuning.center(),
            turret_radius: tuning.turret_radius,
            aim_degrees: state.turret.aim_degrees,
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    radius: e.radius,
                    revealed: e.is_revealed(),
                })
                .collect(),
            bullets: state
                .bullets
                .iter()
                .map(|b| BulletView {
                    id: b.id,
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            echoes: state.echoes.iter().map(echo_view).collect(),
            wave: state.director.wave_number,
            lives: state.player.lives,
            hearts: state.player.hearts,
            max_hearts: state.player.max_lives,
            intensity: state.director.total_intensity,
            beam_charge: state.beam_weapon.charge_fraction(),
            wave_charge: state.wave_weapon.charge_fraction(),
            flash_active: state.player.flash_active(),
            flash_intensity: state.player.flash_intensity(tuning.flash_frames),
            events: state.events.clone(),
        }
    }

    /// Enemies the player can currently see
    pub fn visible_enemies(&self) -> impl Iterator<Item = &EnemyView> {
        self.enemies.iter().filter(|e| e.revealed)
    }
}

fn echo_view(echo: &EchoEffect) -> EchoView {
    match echo {
        EchoEffect::Beam(beam) => EchoView::Beam {
            id: beam.id,
            pos: beam.pos,
            size: Vec2::new(beam.length, beam.thickness),
            rotation: beam.rotation,
        },
        EchoEffect::Wave(wave) => EchoView::Wave {
            id: wave.id,
            center: wave.center,
            radius: wave.radius,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_state() {
        let state = GameState::new(3);
        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.wave, 1);
        assert_eq!(snapshot.lives, 10);
        assert_eq!(snapshot.max_hearts, 10);
        assert_eq!(snapshot.enemies.len(), 1);
        assert_eq!(snapshot.visible_enemies().count(), 0);
        assert_eq!(snapshot.beam_charge, 0.0);
        assert!(!snapshot.flash_active);
        assert_eq!(snapshot.center, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3);
        let snapshot = RenderSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let back: RenderSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(back.enemies.len(), snapshot.enemies.len());
        assert_eq!(back.wave, snapshot.wave);
    }
}

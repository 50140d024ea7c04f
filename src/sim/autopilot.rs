//! Idle/demo mode - the turret plays itself
//!
//! Tracks the enemy closest to the turret, fires once the barrel is lined up,
//! keeps pulsing full beams to reveal the field and drops a wave echo when
//! something gets close.

use super::state::GameState;
use super::tick::TickInput;
use crate::wrap_degrees;

/// Barrel alignment needed before firing (degrees)
const FIRE_TOLERANCE_DEG: f32 = 4.0;
/// Enemies closer than this to the turret trigger a wave echo
const WAVE_TRIGGER_DISTANCE: f32 = 160.0;

/// Signed shortest rotation from `from` to `to`, in (-180, 180]
fn angle_delta(from: f32, to: f32) -> f32 {
    let delta = wrap_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Build the input the demo player would give this frame. Pause and menu
/// input pass through from `input`.
pub fn autopilot_input(state: &GameState, input: &TickInput) -> TickInput {
    let center = state.tuning.center();
    let mut out = TickInput {
        pause_held: input.pause_held,
        mouse_click: input.mouse_click,
        ..Default::default()
    };

    let nearest = state.enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(center)
            .partial_cmp(&b.pos.distance_squared(center))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(enemy) = nearest {
        let to_enemy = enemy.pos - center;
        let target_deg = wrap_degrees(to_enemy.y.atan2(to_enemy.x).to_degrees());
        let delta = angle_delta(state.turret.aim_degrees, target_deg);

        if delta.abs() <= FIRE_TOLERANCE_DEG {
            out.fire = true;
        } else if delta < 0.0 {
            out.rotate_left = true;
        } else {
            out.rotate_right = true;
        }

        // Hold the wave until half charged, then let it go
        let close = to_enemy.length() < WAVE_TRIGGER_DISTANCE;
        let wave = &state.wave_weapon;
        out.wave_charge = close && wave.charge() < wave.params.max_charge * 0.5;
    }

    // Pulse beams continuously: release as soon as one is full
    let beam = &state.beam_weapon;
    out.beam_charge = beam.charge() < beam.params.max_charge;

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::Enemy;
    use glam::Vec2;

    #[test]
    fn test_angle_delta() {
        assert_eq!(angle_delta(10.0, 20.0), 10.0);
        assert_eq!(angle_delta(350.0, 10.0), 20.0);
        assert_eq!(angle_delta(10.0, 350.0), -20.0);
    }

    #[test]
    fn test_turns_toward_and_fires_at_enemy() {
        let mut state = GameState::new(1);
        state.enemies.clear();
        // Directly below the turret (90 degrees, screen y down)
        state.enemies.add(Enemy::new(99, Vec2::new(400.0, 500.0), Vec2::ZERO, 14.0));

        let input = autopilot_input(&state, &TickInput::default());
        assert!(input.rotate_right);
        assert!(!input.fire);

        state.turret.aim_degrees = 89.0;
        let input = autopilot_input(&state, &TickInput::default());
        assert!(input.fire);
        assert!(!input.rotate_left && !input.rotate_right);
    }

    #[test]
    fn test_beam_released_when_full() {
        let mut state = GameState::new(1);
        assert!(autopilot_input(&state, &TickInput::default()).beam_charge);
        let max = state.beam_weapon.params.max_charge;
        while state.beam_weapon.charge() < max {
            state.beam_weapon.update(true, 0.1);
        }
        assert!(!autopilot_input(&state, &TickInput::default()).beam_charge);
    }

    #[test]
    fn test_pause_passes_through() {
        let state = GameState::new(1);
        let input = TickInput {
            pause_held: true,
            ..Default::default()
        };
        assert!(autopilot_input(&state, &input).pause_held);
    }
}

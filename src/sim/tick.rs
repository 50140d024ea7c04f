//! Per-frame simulation step
//!
//! One call per rendered frame with the host's measured `dt`. There is no
//! sub-stepping or `dt` clamping: a long hitch moves everything in one jump
//! and fast entities can tunnel through each other.

use glam::Vec2;

use super::autopilot::autopilot_input;
use super::echo::{Beam, EchoEffect, EchoKind, Wave};
use super::entities::Bullet;
use super::menu::{MenuAction, menu_action};
use super::resolver::{TurretZone, resolve};
use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GamePhase, GameState, Terminal};
use super::weapon::Release;

/// Raw input sampled by the host for one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    /// Beam trigger (charges while held, fires on release)
    pub beam_charge: bool,
    /// Wave trigger (charges while held, fires on release)
    pub wave_charge: bool,
    /// Raw pause key state; the press edge toggles pause
    pub pause_held: bool,
    /// Left click this frame, in arena coordinates
    pub mouse_click: Option<Vec2>,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// What a tick hands back to the host
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub snapshot: RenderSnapshot,
    /// Set on the one tick where the run ends
    pub terminal: Option<Terminal>,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutput {
    // Nothing runs after the run has ended
    if state.phase == GamePhase::GameOver {
        return output(state, None);
    }

    let input = if input.idle_mode {
        autopilot_input(state, input)
    } else {
        input.clone()
    };
    let input = &input;

    // Latch refreshes every frame, paused or not
    let pause_pressed = input.pause_held && !state.was_pause_held;
    state.was_pause_held = input.pause_held;

    match state.phase {
        GamePhase::Playing => {
            if pause_pressed {
                pause(state, input);
                return output(state, None);
            }
        }
        GamePhase::Paused => {
            state.beam_weapon.latch(input.beam_charge);
            state.wave_weapon.latch(input.wave_charge);

            match input.mouse_click.and_then(menu_action) {
                Some(MenuAction::Quit) => {
                    log::info!("Quit from pause menu on wave {}", state.director.wave_number);
                    state.phase = GamePhase::GameOver;
                    return output(state, Some(Terminal::Quit));
                }
                Some(MenuAction::Resume) => resume(state),
                None if pause_pressed => resume(state),
                None => return output(state, None),
            }
        }
        GamePhase::GameOver => return output(state, None),
    }

    let terminal = simulate(state, input, dt);
    output(state, terminal)
}

fn pause(state: &mut GameState, input: &TickInput) {
    state.phase = GamePhase::Paused;
    state.beam_weapon.latch(input.beam_charge);
    state.wave_weapon.latch(input.wave_charge);
    state.events.push(GameEvent::Paused);
    log::debug!("Paused");
}

fn resume(state: &mut GameState) {
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::Resumed);
    log::debug!("Resumed");
}

/// Capture the frame and hand its events to the host. Events raised between
/// ticks (the opening wave) ride along with the next snapshot.
fn output(state: &mut GameState, terminal: Option<Terminal>) -> TickOutput {
    let snapshot = RenderSnapshot::capture(state);
    state.events.clear();
    TickOutput { snapshot, terminal }
}

/// One unpaused frame: input -> spawns -> pool updates -> collisions -> waves
fn simulate(state: &mut GameState, input: &TickInput, dt: f32) -> Option<Terminal> {
    state.frame += 1;
    state.player.tick_flash();

    update_turret(state, input, dt);
    update_weapons(state, input, dt);
    update_pools(state, dt);

    let turret = TurretZone {
        center: state.tuning.center(),
        radius: state.tuning.turret_radius,
    };
    let resolution = resolve(
        dt,
        &mut state.enemies,
        &mut state.bullets,
        &state.echoes,
        &mut state.player,
        turret,
        state.tuning.reveal_duration,
        state.tuning.flash_frames,
        &mut state.events,
    );

    if resolution.kills > 0 || resolution.breaches > 0 {
        log::debug!(
            "Frame {}: {} kills, {} breaches, {} lives left",
            state.frame,
            resolution.kills,
            resolution.breaches,
            state.player.lives
        );
    }

    if resolution.game_over {
        let wave = state.director.wave_number;
        log::info!("Game over on wave {} after {} frames", wave, state.frame);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { wave });
        return Some(Terminal::GameOver { wave });
    }

    let spawned = state.director.update(
        dt,
        &mut state.rng,
        &state.tuning,
        &mut state.ids,
        &mut state.enemies,
        &mut state.echoes,
    );
    if let Some(enemies) = spawned {
        state.events.push(GameEvent::WaveSpawned {
            wave: state.director.wave_number,
            enemies,
        });
    }

    state
        .director
        .decay_intensity(state.tuning.intensity_decay_per_frame);

    None
}

fn update_turret(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut rate = 0.0;
    if input.rotate_left {
        rate -= state.tuning.rotation_speed_deg;
    }
    if input.rotate_right {
        rate += state.tuning.rotation_speed_deg;
    }
    state.turret.rotate(rate, dt);
    state.turret.cool_down(dt);

    if !input.fire {
        return;
    }
    let fired = state
        .turret
        .try_fire(state.tuning.bullet_speed, state.tuning.fire_cooldown);
    if let Some(vel) = fired {
        let id = state.next_entity_id();
        state.bullets.add(Bullet {
            id,
            pos: state.tuning.center(),
            vel,
            radius: state.tuning.bullet_radius,
        });
        state.events.push(GameEvent::BulletFired { bullet_id: id });
    }
}

fn update_weapons(state: &mut GameState, input: &TickInput, dt: f32) {
    if let Some(release) = state.beam_weapon.update(input.beam_charge, dt) {
        launch_echo(state, release);
    }
    if let Some(release) = state.wave_weapon.update(input.wave_charge, dt) {
        launch_echo(state, release);
    }
}

/// Place a released echo at the turret and feed the intensity budget
fn launch_echo(state: &mut GameState, release: Release) {
    let id = state.next_entity_id();
    let center = state.tuning.center();
    let echo = match release.kind {
        EchoKind::Beam => EchoEffect::Beam(Beam::launch(
            id,
            center,
            state.turret.aim_direction(),
            release.size,
            state.tuning.beam_thickness,
            state.tuning.beam_speed,
            state.beam_weapon.params.shrink_rate,
        )),
        EchoKind::Wave => EchoEffect::Wave(Wave::new(
            id,
            center,
            release.size,
            state.wave_weapon.params.shrink_rate,
        )),
    };

    state.echoes.add(echo);
    state.director.add_intensity(release.intensity);
    state.events.push(GameEvent::EchoReleased {
        echo_id: id,
        kind: release.kind,
        size: release.size,
    });
    log::debug!(
        "{:?} echo released: size {:.1}, intensity now {:.1}",
        release.kind,
        release.size,
        state.director.total_intensity
    );
}

/// Motion, shrink and expiry for every pool
fn update_pools(state: &mut GameState, dt: f32) {
    for echo in state.echoes.iter_mut() {
        echo.update(dt);
    }
    state.echoes.remove_where(EchoEffect::is_spent);

    let arena = Vec2::new(state.tuning.arena_width, state.tuning.arena_height);
    let margin = state.tuning.bullet_margin;
    for bullet in state.bullets.iter_mut() {
        bullet.advance(dt);
    }
    state
        .bullets
        .remove_where(|bullet| bullet.is_out_of_bounds(arena, margin));

    for enemy in state.enemies.iter_mut() {
        enemy.advance(dt);
    }
}

//! Per-frame collision resolution
//!
//! Passes run in a fixed order and each one sees the removals of the passes
//! before it:
//! 1. echo vs enemy (reveal, nothing removed)
//! 2. reveal timer decay
//! 3. bullet vs enemy (both removed, one kill per bullet)
//! 4. enemy vs turret (enemy removed, one life lost)
//!
//! Removals are marked during a pass and compacted once it ends. The resolver
//! never spawns anything.

use glam::Vec2;

use super::collision::circle_circle_hit;
use super::echo::EchoEffect;
use super::entities::{Bullet, Enemy};
use super::player::Player;
use super::pool::Pool;
use super::state::GameEvent;

/// Outcome of one resolution frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub kills: u32,
    pub breaches: u32,
    /// Last life lost this frame
    pub game_over: bool,
}

/// Turret geometry the last pass checks against
#[derive(Debug, Clone, Copy)]
pub struct TurretZone {
    pub center: Vec2,
    pub radius: f32,
}

/// Run every pass in order
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    dt: f32,
    enemies: &mut Pool<Enemy>,
    bullets: &mut Pool<Bullet>,
    echoes: &Pool<EchoEffect>,
    player: &mut Player,
    turret: TurretZone,
    reveal_duration: f32,
    flash_frames: u32,
    events: &mut Vec<GameEvent>,
) -> Resolution {
    reveal_pass(enemies, echoes, reveal_duration, events);
    decay_reveals(enemies, dt);
    let kills = bullet_pass(bullets, enemies, events);
    let (breaches, game_over) = turret_pass(enemies, player, turret, flash_frames, events);

    Resolution {
        kills,
        breaches,
        game_over,
    }
}

/// Reveal every enemy touched by any live echo. First hit wins; the timer is
/// refreshed, never stacked.
pub fn reveal_pass(
    enemies: &mut Pool<Enemy>,
    echoes: &Pool<EchoEffect>,
    reveal_duration: f32,
    events: &mut Vec<GameEvent>,
) {
    if echoes.is_empty() {
        return;
    }

    for enemy in enemies.iter_mut() {
        if let Some(echo) = echoes.iter().find(|echo| echo.intersects(enemy)) {
            if !enemy.is_revealed() {
                events.push(GameEvent::EnemyRevealed {
                    enemy_id: enemy.id,
                    echo_id: echo.id(),
                });
            }
            enemy.reveal(reveal_duration);
        }
    }
}

pub fn decay_reveals(enemies: &mut Pool<Enemy>, dt: f32) {
    for enemy in enemies.iter_mut() {
        enemy.decay_reveal(dt);
    }
}

/// Bullet vs enemy. Each bullet kills at most one enemy; an enemy killed
/// earlier in the pass can't absorb a second bullet. Returns the kill count.
pub fn bullet_pass(
    bullets: &mut Pool<Bullet>,
    enemies: &mut Pool<Enemy>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut dead_bullets = bullets.marks();
    let mut dead_enemies = enemies.marks();
    let mut kills = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = enemies.iter().enumerate().find(|(ei, enemy)| {
            !dead_enemies[*ei] && circle_circle_hit(bullet.pos, bullet.radius, enemy.pos, enemy.radius)
        });

        if let Some((ei, enemy)) = target {
            dead_bullets[bi] = true;
            dead_enemies[ei] = true;
            kills += 1;
            events.push(GameEvent::EnemyKilled {
                enemy_id: enemy.id,
                bullet_id: bullet.id,
                pos: enemy.pos,
            });
        }
    }

    if kills > 0 {
        bullets.remove_marked(&dead_bullets);
        enemies.remove_marked(&dead_enemies);
    }
    kills
}

/// Enemies touching the turret are removed and each costs one life. Stops at
/// the last life. Returns (breaches, game_over).
pub fn turret_pass(
    enemies: &mut Pool<Enemy>,
    player: &mut Player,
    turret: TurretZone,
    flash_frames: u32,
    events: &mut Vec<GameEvent>,
) -> (u32, bool) {
    let mut breached = enemies.marks();
    let mut breaches = 0;
    let mut game_over = false;

    for (i, enemy) in enemies.iter().enumerate() {
        if !circle_circle_hit(enemy.pos, enemy.radius, turret.center, turret.radius) {
            continue;
        }

        breached[i] = true;
        breaches += 1;
        game_over = player.take_hit(flash_frames);
        log::info!("Enemy {} reached the turret, {} lives left", enemy.id, player.lives);
        events.push(GameEvent::TurretBreached {
            enemy_id: enemy.id,
            lives_left: player.lives,
        });

        if game_over {
            break;
        }
    }

    if breaches > 0 {
        enemies.remove_marked(&breached);
    }
    (breaches, game_over)
}

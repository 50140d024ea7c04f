//! Enemies and bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An inbound enemy. Invisible to the player until an echo reveals it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Fixed for the enemy's lifetime
    pub vel: Vec2,
    pub radius: f32,
    revealed: bool,
    /// Seconds left revealed; > 0 exactly when `revealed`
    reveal_timer: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            revealed: false,
            reveal_timer: 0.0,
        }
    }

    /// Enemy spawned at `pos` heading straight for `target` at `speed`.
    /// A spawn exactly on the target gets zero velocity.
    pub fn aimed_at(id: u32, pos: Vec2, target: Vec2, speed: f32, radius: f32) -> Self {
        let dir = (target - pos).normalize_or_zero();
        Self::new(id, pos, dir * speed, radius)
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal_timer(&self) -> f32 {
        self.reveal_timer
    }

    /// Mark revealed for `duration` seconds (refreshes, never stacks)
    pub fn reveal(&mut self, duration: f32) {
        if duration > 0.0 {
            self.revealed = true;
            self.reveal_timer = duration;
        }
    }

    /// Count the reveal timer down; hides the enemy when it runs out
    pub fn decay_reveal(&mut self, dt: f32) {
        if self.reveal_timer > 0.0 {
            self.reveal_timer -= dt;
            if self.reveal_timer <= 0.0 {
                self.reveal_timer = 0.0;
                self.revealed = false;
            }
        }
    }
}

/// A turret bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Outside `[-margin, size + margin]` on either axis
    pub fn is_out_of_bounds(&self, arena_size: Vec2, margin: f32) -> bool {
        self.pos.x < -margin
            || self.pos.x > arena_size.x + margin
            || self.pos.y < -margin
            || self.pos.y > arena_size.y + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_aimed_at_center() {
        let enemy = Enemy::aimed_at(1, Vec2::new(850.0, 300.0), Vec2::new(400.0, 300.0), 50.0, 14.0);
        assert!((enemy.vel - Vec2::new(-50.0, 0.0)).length() < 1e-4);
        assert!(!enemy.is_revealed());
        assert_eq!(enemy.reveal_timer(), 0.0);
    }

    #[test]
    fn test_aimed_at_own_position_does_not_move() {
        let center = Vec2::new(400.0, 300.0);
        let mut enemy = Enemy::aimed_at(1, center, center, 50.0, 14.0);
        assert_eq!(enemy.vel, Vec2::ZERO);
        enemy.advance(1.0);
        assert_eq!(enemy.pos, center);
    }

    #[test]
    fn test_reveal_expires() {
        let mut enemy = Enemy::new(1, Vec2::ZERO, Vec2::ZERO, 14.0);
        enemy.reveal(4.0);
        assert!(enemy.is_revealed());
        enemy.decay_reveal(3.0);
        assert!(enemy.is_revealed());
        enemy.decay_reveal(1.5);
        assert!(!enemy.is_revealed());
        assert_eq!(enemy.reveal_timer(), 0.0);
    }

    #[test]
    fn test_reveal_refreshes_timer() {
        let mut enemy = Enemy::new(1, Vec2::ZERO, Vec2::ZERO, 14.0);
        enemy.reveal(4.0);
        enemy.decay_reveal(3.0);
        enemy.reveal(4.0);
        assert_eq!(enemy.reveal_timer(), 4.0);
    }

    #[test]
    fn test_bullet_bounds() {
        let arena = Vec2::new(800.0, 600.0);
        let mut bullet = Bullet { id: 1, pos: Vec2::new(400.0, 300.0), vel: Vec2::new(520.0, 0.0), radius: 4.0 };
        assert!(!bullet.is_out_of_bounds(arena, 50.0));
        bullet.pos.x = 849.0;
        assert!(!bullet.is_out_of_bounds(arena, 50.0));
        bullet.pos.x = 851.0;
        assert!(bullet.is_out_of_bounds(arena, 50.0));
        bullet.pos = Vec2::new(400.0, -51.0);
        assert!(bullet.is_out_of_bounds(arena, 50.0));
    }

    proptest! {
        #[test]
        fn prop_reveal_timer_matches_flag(
            steps in prop::collection::vec((any::<bool>(), 0.0f32..2.0), 1..64)
        ) {
            let mut enemy = Enemy::new(1, Vec2::ZERO, Vec2::ZERO, 14.0);
            for (hit, dt) in steps {
                if hit {
                    enemy.reveal(4.0);
                }
                enemy.decay_reveal(dt);
                prop_assert_eq!(enemy.reveal_timer() > 0.0, enemy.is_revealed());
                prop_assert!(enemy.reveal_timer() >= 0.0);
            }
        }
    }
}

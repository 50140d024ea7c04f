//! Echo effects: the shockwaves released by the charge weapons
//!
//! Two shapes only, so they are a closed enum rather than a trait:
//! - `Beam`: an oriented rectangle that flies outward from the turret while
//!   shrinking from both ends
//! - `Wave`: a ring fixed on the turret that shrinks toward it
//!
//! Both are spent once their size reaches zero and must be dropped before the
//! next collision pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{expanding_circle_circle_hit, oriented_rect_circle_hit};
use super::entities::Enemy;

/// Which echo weapon produced an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EchoKind {
    Beam,
    Wave,
}

/// Directional echo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beam {
    pub id: u32,
    /// Launch point (turret center)
    pub origin: Vec2,
    /// Unit travel direction
    pub direction: Vec2,
    /// Rectangle rotation in radians; the long side is perpendicular to travel
    pub rotation: f32,
    /// Current long-side length
    pub length: f32,
    pub thickness: f32,
    pub speed: f32,
    pub shrink_rate: f32,
    pub elapsed: f32,
    /// Current rectangle center
    pub pos: Vec2,
}

impl Beam {
    /// A beam launched from `origin` along `direction`, its long side laid
    /// across the direction of travel
    pub fn launch(
        id: u32,
        origin: Vec2,
        direction: Vec2,
        length: f32,
        thickness: f32,
        speed: f32,
        shrink_rate: f32,
    ) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            id,
            origin,
            direction,
            rotation: direction.to_angle() + std::f32::consts::FRAC_PI_2,
            length,
            thickness,
            speed,
            shrink_rate,
            elapsed: 0.0,
            pos: origin,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.length -= dt * self.shrink_rate;
        // Position is derived from total flight time, not integrated
        self.pos = self.origin + self.direction * self.speed * self.elapsed;
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.length / 2.0, self.thickness / 2.0)
    }

    pub fn hits(&self, pos: Vec2, radius: f32) -> bool {
        if self.length <= 0.0 {
            return false;
        }
        oriented_rect_circle_hit(self.pos, self.half_extents(), self.rotation, pos, radius)
    }
}

/// Omnidirectional echo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub shrink_rate: f32,
    pub elapsed: f32,
}

impl Wave {
    pub fn new(id: u32, center: Vec2, radius: f32, shrink_rate: f32) -> Self {
        Self {
            id,
            center,
            radius,
            shrink_rate,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.radius -= dt * self.shrink_rate;
    }

    pub fn hits(&self, pos: Vec2, radius: f32) -> bool {
        expanding_circle_circle_hit(self.center, self.radius, pos, radius)
    }
}

/// A live echo effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EchoEffect {
    Beam(Beam),
    Wave(Wave),
}

impl EchoEffect {
    pub fn id(&self) -> u32 {
        match self {
            EchoEffect::Beam(beam) => beam.id,
            EchoEffect::Wave(wave) => wave.id,
        }
    }

    /// Beam length or wave radius
    pub fn size(&self) -> f32 {
        match self {
            EchoEffect::Beam(beam) => beam.length,
            EchoEffect::Wave(wave) => wave.radius,
        }
    }

    /// Advance motion and shrink by `dt`
    pub fn update(&mut self, dt: f32) {
        match self {
            EchoEffect::Beam(beam) => beam.update(dt),
            EchoEffect::Wave(wave) => wave.update(dt),
        }
    }

    /// Spent effects are inert and get removed after each update
    pub fn is_spent(&self) -> bool {
        self.size() <= 0.0
    }

    pub fn intersects(&self, enemy: &Enemy) -> bool {
        match self {
            EchoEffect::Beam(beam) => beam.hits(enemy.pos, enemy.radius),
            EchoEffect::Wave(wave) => wave.hits(enemy.pos, enemy.radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_aligned_beam(length: f32, pos: Vec2) -> Beam {
        Beam {
            id: 1,
            origin: pos,
            direction: Vec2::X,
            rotation: 0.0,
            length,
            thickness: 6.0,
            speed: 10.0,
            shrink_rate: 2.0,
            elapsed: 0.0,
            pos,
        }
    }

    #[test]
    fn test_beam_intersects() {
        let beam = EchoEffect::Beam(axis_aligned_beam(20.0, Vec2::ZERO));
        let mut enemy = Enemy::new(1, Vec2::ZERO, Vec2::ZERO, 5.0);
        assert!(beam.intersects(&enemy));

        enemy.pos = Vec2::new(150.0, 150.0);
        assert!(!beam.intersects(&enemy));
    }

    #[test]
    fn test_wave_intersects() {
        let wave = EchoEffect::Wave(Wave::new(1, Vec2::new(100.0, 100.0), 50.0, 5.0));
        let mut enemy = Enemy::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 5.0);
        assert!(wave.intersects(&enemy));

        enemy.pos = Vec2::new(200.0, 200.0);
        assert!(!wave.intersects(&enemy));
    }

    #[test]
    fn test_beam_update_moves_and_shrinks() {
        let mut beam = EchoEffect::Beam(axis_aligned_beam(20.0, Vec2::ZERO));
        beam.update(1.0);

        let EchoEffect::Beam(beam) = beam else {
            panic!("expected beam");
        };
        assert!((beam.length - 18.0).abs() < 1e-5);
        assert!((beam.pos - Vec2::new(10.0, 0.0)).length() < 1e-5);
        assert_eq!(beam.thickness, 6.0);
    }

    #[test]
    fn test_wave_update_shrinks_in_place() {
        let mut wave = EchoEffect::Wave(Wave::new(1, Vec2::ZERO, 40.0, 5.0));
        wave.update(1.0);

        assert!((wave.size() - 35.0).abs() < 1e-5);
        let EchoEffect::Wave(wave) = wave else {
            panic!("expected wave");
        };
        assert_eq!(wave.center, Vec2::ZERO);
    }

    #[test]
    fn test_spent_effects_are_inert() {
        let mut beam = EchoEffect::Beam(axis_aligned_beam(2.0, Vec2::ZERO));
        beam.update(1.0);
        assert!(beam.is_spent());
        let enemy = Enemy::new(1, Vec2::new(10.0, 0.0), Vec2::ZERO, 50.0);
        assert!(!beam.intersects(&enemy));

        let mut wave = EchoEffect::Wave(Wave::new(2, Vec2::ZERO, 3.0, 5.0));
        wave.update(1.0);
        assert!(wave.is_spent());
        assert!(!wave.intersects(&enemy));
    }

    #[test]
    fn test_launched_beam_lies_across_travel() {
        let beam = Beam::launch(1, Vec2::ZERO, Vec2::X, 100.0, 6.0, 520.0, 100.0);
        // Across the direction of travel: hit
        assert!(beam.hits(Vec2::new(0.0, 45.0), 1.0));
        // Along the direction of travel, past the thickness: miss
        assert!(!beam.hits(Vec2::new(45.0, 0.0), 1.0));
    }
}

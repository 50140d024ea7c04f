//! Lives, hearts and the damage flash

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub max_lives: u32,
    pub lives: u32,
    /// HUD mirror of `lives`
    pub hearts: u32,
    /// Frames left on the damage flash overlay
    pub flash_frames: u32,
}

impl Player {
    pub fn new(max_lives: u32) -> Self {
        Self {
            max_lives,
            lives: max_lives,
            hearts: max_lives,
            flash_frames: 0,
        }
    }

    /// One enemy reached the turret. Returns true when this was the last life.
    pub fn take_hit(&mut self, flash_frames: u32) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.hearts = self.lives;
        self.flash_frames = flash_frames;
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    pub fn flash_active(&self) -> bool {
        self.flash_frames > 0
    }

    /// Flash strength in [0, 1], fading over the flash window
    pub fn flash_intensity(&self, total_frames: u32) -> f32 {
        if total_frames == 0 {
            return 0.0;
        }
        (self.flash_frames as f32 / total_frames as f32).min(1.0)
    }

    /// Count the flash down by one frame
    pub fn tick_flash(&mut self) {
        self.flash_frames = self.flash_frames.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_hit_until_dead() {
        let mut player = Player::new(3);
        assert!(!player.take_hit(15));
        assert_eq!(player.lives, 2);
        assert_eq!(player.hearts, 2);
        assert!(!player.take_hit(15));
        assert!(player.take_hit(15));
        assert!(player.is_dead());
        assert_eq!(player.hearts, 0);
    }

    #[test]
    fn test_flash_counts_down() {
        let mut player = Player::new(10);
        player.take_hit(15);
        assert!(player.flash_active());
        assert_eq!(player.flash_intensity(15), 1.0);
        for _ in 0..14 {
            player.tick_flash();
        }
        assert!(player.flash_active());
        player.tick_flash();
        assert!(!player.flash_active());
        player.tick_flash();
        assert_eq!(player.flash_frames, 0);
    }
}

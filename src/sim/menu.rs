//! Pause menu hit-testing
//!
//! Only the button rectangles live here; drawing them is the host's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Half-open: the right and bottom edges are outside
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

pub const RESUME_BUTTON: Rect = Rect::new(300.0, 200.0, 200.0, 80.0);
pub const QUIT_BUTTON: Rect = Rect::new(300.0, 290.0, 200.0, 80.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Resume,
    Quit,
}

/// Map a click on the pause menu to an action
pub fn menu_action(click: Vec2) -> Option<MenuAction> {
    if RESUME_BUTTON.contains(click) {
        Some(MenuAction::Resume)
    } else if QUIT_BUTTON.contains(click) {
        Some(MenuAction::Quit)
    } else {
        None
    }
}

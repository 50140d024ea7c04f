//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module is pure:
//! - Single writer: `tick` owns every mutation
//! - Seeded RNG only
//! - Stable pool order (spawn order, survivors never reordered)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod director;
pub mod echo;
pub mod entities;
pub mod menu;
pub mod player;
pub mod pool;
pub mod resolver;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod turret;
pub mod weapon;

pub use collision::{circle_circle_hit, expanding_circle_circle_hit, oriented_rect_circle_hit};
pub use director::WaveDirector;
pub use echo::{Beam, EchoEffect, EchoKind, Wave};
pub use entities::{Bullet, Enemy};
pub use player::Player;
pub use pool::Pool;
pub use snapshot::{BulletView, EchoView, EnemyView, RenderSnapshot};
pub use state::{GameEvent, GamePhase, GameState, Terminal};
pub use tick::{TickInput, TickOutput, tick};
pub use turret::Turret;
pub use weapon::{ChargeWeapon, Release};

//! Engine-agnostic core of the point-cloud minigame.
//!
//! Everything here is plain data and math so it can be tested without a
//! renderer. The Bevy client owns one [`session::MinigameState`] per mount.

pub mod config;
pub mod field;
pub mod gesture;
pub mod hits;
pub mod orbit;
pub mod picking;
pub mod ray_fx;
pub mod session;
pub mod vec3;

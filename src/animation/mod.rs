//! Time-driven placement of moving entities
//!
//! Every transform here is a pure function of elapsed time and fixed path
//! parameters. Nothing integrates state between frames, so entities can be
//! evaluated in any order and at any frame rate.

pub mod clock;
pub mod motion;
pub mod cloth;
pub mod water;

pub use clock::AnimationClock;
pub use motion::{Motion, PodMember, POD_FORMATION, WATER_LEVEL};

//! Vitrine Animation System
//!
//! Easing curves, a generator that rescales arbitrary functions onto the
//! unit square, and tick-driven animations.
//!
//! # Features
//!
//! - **Easing curves**: linear, smooth, rebound, ease-in, ease-out
//! - **Curve generator**: turn any function over an interval into a curve
//! - **Animations**: duration/delay/iteration playback of a curve
//! - **Tweens**: animate a value between two endpoints
//! - **Scheduler**: tick every live animation from one clock

pub mod animation;
pub mod easing;
pub mod scheduler;

pub use animation::{Animation, Tween};
pub use easing::{generate, generate_unscaled, Curve, Easing, Generated};
pub use scheduler::{AnimationId, AnimationScheduler};

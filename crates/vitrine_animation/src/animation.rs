//! Tick-driven animations
//!
//! An [`Animation`] plays a curve over a duration; a [`Tween`] maps that
//! progress onto a value range. Both advance through `tick(dt_ms)` calls
//! from the embedder's frame loop or the [`AnimationScheduler`].
//!
//! [`AnimationScheduler`]: crate::scheduler::AnimationScheduler

use crate::easing::{Curve, Easing};

/// Playback of a curve over a fixed duration.
pub struct Animation {
    duration_ms: u32,
    curve: Box<dyn Curve + Send>,
    /// Delay before playback starts (ms).
    delay_ms: u32,
    /// Number of iterations (-1 for infinite).
    iterations: i32,
    current_iteration: i32,
    /// Current time in milliseconds; negative while delayed.
    current_time: f32,
    playing: bool,
}

impl Animation {
    /// Create an animation with the given duration and curve.
    pub fn new(duration_ms: u32, curve: impl Curve + Send + 'static) -> Self {
        Self {
            duration_ms,
            curve: Box::new(curve),
            delay_ms: 0,
            iterations: 1,
            current_iteration: 0,
            current_time: 0.0,
            playing: false,
        }
    }

    /// Set a delay before playback starts.
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the number of iterations (-1 for infinite).
    pub fn iterations(mut self, count: i32) -> Self {
        self.iterations = count;
        self
    }

    /// Start playback from the beginning.
    pub fn start(&mut self) {
        self.current_time = -(self.delay_ms as f32);
        self.current_iteration = 0;
        self.playing = true;
    }

    /// Stop playback in place.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Raw progress (0.0 to 1.0), before the curve is applied.
    pub fn progress(&self) -> f32 {
        if self.current_time < 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Eased progress: the curve applied to [`Animation::progress`].
    pub fn value(&self) -> f32 {
        self.curve.evaluate(self.progress())
    }

    /// Advance the animation by delta time (in milliseconds).
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_iteration += 1;

            if self.iterations < 0 || self.current_iteration < self.iterations {
                self.current_time = 0.0;
            } else {
                self.current_time = self.duration_ms as f32;
                self.playing = false;
            }
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

/// Animates a value between two endpoints.
pub struct Tween {
    from: f32,
    to: f32,
    animation: Animation,
}

impl Tween {
    /// Create a tween resting at `value` (no motion until retargeted).
    pub fn resting(value: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            animation: Animation::new(duration_ms, easing),
        }
    }

    /// Create a tween from one value to another and start it.
    pub fn between(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        let mut tween = Self {
            from,
            to,
            animation: Animation::new(duration_ms, easing),
        };
        tween.animation.start();
        tween
    }

    /// Retarget toward a new endpoint, starting from the current value.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.animation.start();
    }

    /// Snap to a value immediately, cancelling any motion.
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.animation.stop();
    }

    /// The current interpolated value.
    pub fn value(&self) -> f32 {
        if !self.animation.is_playing() && self.animation.progress() >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.animation.value()
    }

    /// The endpoint the tween is heading toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_playing(&self) -> bool {
        self.animation.is_playing()
    }

    /// Advance by delta time (in milliseconds).
    pub fn tick(&mut self, dt_ms: f32) {
        self.animation.tick(dt_ms);
    }
}

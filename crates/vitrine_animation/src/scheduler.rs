//! Animation scheduler
//!
//! Owns all live animations and advances them each frame from one clock.

use crate::animation::Animation;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    pub struct AnimationId;
}

/// Ticks all registered animations from a shared frame clock.
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Register an animation. It keeps whatever play state it was in.
    pub fn add(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<Animation> {
        self.animations.remove(id)
    }

    /// Advance every animation by the wall-clock delta since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.tick_by(dt_ms);
    }

    /// Advance every animation by an explicit delta (in milliseconds).
    pub fn tick_by(&mut self, dt_ms: f32) {
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
    }

    /// Whether any animation still needs frames.
    pub fn has_active(&self) -> bool {
        self.animations.iter().any(|(_, a)| a.is_playing())
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_scheduler_ticks_all_animations() {
        let mut scheduler = AnimationScheduler::new();

        let mut fast = Animation::new(100, Easing::Linear);
        fast.start();
        let mut slow = Animation::new(400, Easing::Linear);
        slow.start();

        let fast_id = scheduler.add(fast);
        let slow_id = scheduler.add(slow);
        assert!(scheduler.has_active());

        scheduler.tick_by(200.0);

        assert!(!scheduler.get(fast_id).unwrap().is_playing());
        assert!(scheduler.get(slow_id).unwrap().is_playing());
        assert!(scheduler.has_active());

        scheduler.tick_by(200.0);
        assert!(!scheduler.has_active());
    }

    #[test]
    fn test_scheduler_remove() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(Animation::new(100, Easing::Linear));
        assert_eq!(scheduler.len(), 1);

        scheduler.remove(id);
        assert!(scheduler.is_empty());
        assert!(scheduler.get(id).is_none());
    }
}

//! Per-card burst controller.
//!
//! Watches a card's face-up flag and, on the face-down to face-up edge,
//! schedules two tasks: spawn the particles after [`SPAWN_DELAY_MS`] (so the
//! flip animation runs first) and clear them after [`CLEANUP_AFTER_MS`].
//!
//! Each edge starts a new generation. Tasks carry the generation they were
//! scheduled for; the previous generation's tasks are cancelled, and any
//! that still reach [`ParticleBurst::handle`] are ignored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RandomSource, TaskHandle, TimerQueue};

use super::spawner::{spawn_particles, Particle};

/// Delay between the reveal and the particles appearing.
pub const SPAWN_DELAY_MS: u64 = 300;

/// Delay between the reveal and the burst being cleared:
/// spawn delay + longest duration (2.6s) + longest stagger (0.5s) + buffer.
pub const CLEANUP_AFTER_MS: u64 = 3800;

/// What a burst task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BurstAction {
    /// Spawn particles sized for the card as it was when revealed.
    Spawn { card_width: f64, card_height: f64 },
    /// Drop the live particles.
    Clear,
}

/// A scheduled burst task.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstTask {
    /// Index of the owning card.
    pub card: usize,
    /// Generation the task belongs to.
    pub generation: u64,
    /// What to do when the task fires.
    pub action: BurstAction,
}

/// Particle state for one card.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    card: usize,
    emoji: String,
    was_face_up: bool,
    generation: u64,
    particles: Vec<Particle>,
    pending: SmallVec<[TaskHandle; 2]>,
}

impl ParticleBurst {
    /// Controller for card `card`, bursting `emoji`.
    pub fn new(card: usize, emoji: impl Into<String>) -> Self {
        Self {
            card,
            emoji: emoji.into(),
            was_face_up: false,
            generation: 0,
            particles: Vec::new(),
            pending: SmallVec::new(),
        }
    }

    /// Feed the card's current face-up flag.
    ///
    /// Returns `true` if this was a reveal edge and a new burst was scheduled.
    pub fn observe(
        &mut self,
        face_up: bool,
        now_ms: u64,
        card_width: f64,
        card_height: f64,
        timers: &mut TimerQueue<BurstTask>,
    ) -> bool {
        let edge = face_up && !self.was_face_up;
        self.was_face_up = face_up;
        if !edge {
            return false;
        }

        self.cancel_pending(timers);
        self.particles.clear();
        self.generation += 1;

        let spawn = BurstTask {
            card: self.card,
            generation: self.generation,
            action: BurstAction::Spawn {
                card_width,
                card_height,
            },
        };
        let clear = BurstTask {
            card: self.card,
            generation: self.generation,
            action: BurstAction::Clear,
        };
        self.pending.push(timers.schedule_after(now_ms, SPAWN_DELAY_MS, spawn));
        self.pending.push(timers.schedule_after(now_ms, CLEANUP_AFTER_MS, clear));

        tracing::debug!(card = self.card, generation = self.generation, "burst scheduled");
        true
    }

    /// Apply a fired task. Returns `false` if the task was stale.
    pub fn handle(&mut self, handle: TaskHandle, task: &BurstTask, rng: &mut impl RandomSource) -> bool {
        self.pending.retain(|h| *h != handle);

        if task.card != self.card || task.generation != self.generation {
            tracing::warn!(
                card = self.card,
                task_generation = task.generation,
                generation = self.generation,
                "stale burst task ignored"
            );
            return false;
        }

        match task.action {
            BurstAction::Spawn {
                card_width,
                card_height,
            } => {
                self.particles = spawn_particles(&self.emoji, card_width, card_height, rng);
                tracing::debug!(card = self.card, count = self.particles.len(), "burst spawned");
            }
            BurstAction::Clear => {
                self.particles.clear();
                tracing::debug!(card = self.card, "burst cleared");
            }
        }
        true
    }

    /// Cancel anything pending and drop live particles.
    pub fn teardown(&mut self, timers: &mut TimerQueue<BurstTask>) {
        self.cancel_pending(timers);
        self.particles.clear();
    }

    fn cancel_pending(&mut self, timers: &mut TimerQueue<BurstTask>) {
        for handle in self.pending.drain(..) {
            timers.cancel(handle);
        }
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current generation (number of reveal edges seen).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of tasks still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayoutRng;

    fn fire(burst: &mut ParticleBurst, timers: &mut TimerQueue<BurstTask>, now: u64, rng: &mut LayoutRng) {
        for (handle, task) in timers.pop_due(now) {
            burst.handle(handle, &task, rng);
        }
    }

    #[test]
    fn test_reveal_edge_schedules_burst() {
        let mut timers = TimerQueue::new();
        let mut rng = LayoutRng::new(1);
        let mut burst = ParticleBurst::new(0, "💖");

        assert!(burst.observe(true, 1000, 250.0, 333.0, &mut timers));
        assert_eq!(timers.len(), 2);
        assert_eq!(burst.pending_count(), 2);

        fire(&mut burst, &mut timers, 1299, &mut rng);
        assert!(burst.particles().is_empty());

        fire(&mut burst, &mut timers, 1300, &mut rng);
        assert!((15..=26).contains(&burst.particles().len()));

        fire(&mut burst, &mut timers, 4800, &mut rng);
        assert!(burst.particles().is_empty());
        assert_eq!(burst.pending_count(), 0);
    }

    #[test]
    fn test_no_burst_without_edge() {
        let mut timers = TimerQueue::new();
        let mut burst = ParticleBurst::new(0, "💖");

        assert!(!burst.observe(false, 0, 250.0, 333.0, &mut timers));
        assert!(burst.observe(true, 0, 250.0, 333.0, &mut timers));
        // true -> true (image cycling) and true -> false (flip back)
        assert!(!burst.observe(true, 10, 250.0, 333.0, &mut timers));
        assert!(!burst.observe(false, 20, 250.0, 333.0, &mut timers));

        assert_eq!(burst.generation(), 1);
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn test_new_edge_supersedes_previous() {
        let mut timers = TimerQueue::new();
        let mut rng = LayoutRng::new(1);
        let mut burst = ParticleBurst::new(0, "💖");

        burst.observe(true, 0, 250.0, 333.0, &mut timers);
        fire(&mut burst, &mut timers, 300, &mut rng);
        assert!(!burst.particles().is_empty());

        burst.observe(false, 1000, 250.0, 333.0, &mut timers);
        burst.observe(true, 2000, 250.0, 333.0, &mut timers);

        assert_eq!(burst.generation(), 2);
        assert!(burst.particles().is_empty());
        // First generation's clear (due 3800) was cancelled
        assert_eq!(timers.len(), 2);
        assert_eq!(timers.next_due(), Some(2300));

        fire(&mut burst, &mut timers, 3800, &mut rng);
        assert!(!burst.particles().is_empty());

        fire(&mut burst, &mut timers, 5800, &mut rng);
        assert!(burst.particles().is_empty());
    }

    #[test]
    fn test_stale_task_is_noop() {
        let mut timers = TimerQueue::new();
        let mut rng = LayoutRng::new(1);
        let mut burst = ParticleBurst::new(3, "💖");

        burst.observe(true, 0, 250.0, 333.0, &mut timers);
        let stale = BurstTask {
            card: 3,
            generation: 0,
            action: BurstAction::Spawn {
                card_width: 250.0,
                card_height: 333.0,
            },
        };

        assert!(!burst.handle(TaskHandle(999), &stale, &mut rng));
        assert!(burst.particles().is_empty());
        assert_eq!(burst.pending_count(), 2);
    }

    #[test]
    fn test_teardown_cancels_everything() {
        let mut timers = TimerQueue::new();
        let mut rng = LayoutRng::new(1);
        let mut burst = ParticleBurst::new(0, "💖");

        burst.observe(true, 0, 250.0, 333.0, &mut timers);
        burst.teardown(&mut timers);

        assert!(timers.is_empty());
        assert_eq!(burst.pending_count(), 0);

        fire(&mut burst, &mut timers, 10_000, &mut rng);
        assert!(burst.particles().is_empty());
    }

    #[test]
    fn test_spawn_uses_size_at_reveal() {
        let mut timers = TimerQueue::new();
        let mut rng = LayoutRng::new(1);
        let mut burst = ParticleBurst::new(0, "🎵");

        burst.observe(true, 0, 180.0, 240.0, &mut timers);
        fire(&mut burst, &mut timers, 300, &mut rng);

        assert!((10..=18).contains(&burst.particles().len()));
    }
}

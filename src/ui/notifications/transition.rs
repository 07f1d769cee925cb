// SPDX-License-Identifier: MPL-2.0
//! Time-based fade-and-slide transitions.
//!
//! A [`Transition`] is a timestamped description of an entry or exit. It holds
//! no timer of its own: callers pass the current `Instant` (usually the one
//! carried by the last `Tick` message) and read back opacity and offset. This
//! keeps every view a pure function of state.

use crate::ui::design_tokens::motion::Motion;
use iced::Padding;
use std::time::Instant;

/// Which way a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fading in and sliding to rest.
    Enter,
    /// Mirror of `Enter`: fading out and sliding away.
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    direction: Direction,
    started_at: Instant,
    motion: Motion,
}

impl Transition {
    #[must_use]
    pub fn entering(now: Instant, motion: Motion) -> Self {
        Self {
            direction: Direction::Enter,
            started_at: now,
            motion,
        }
    }

    #[must_use]
    pub fn exiting(now: Instant, motion: Motion) -> Self {
        Self {
            direction: Direction::Exit,
            started_at: now,
            motion,
        }
    }

    /// The opposite transition, continuing from where this one is at `now`.
    ///
    /// An interrupted exit turns into an entry starting at the current
    /// opacity and offset instead of jumping back to the start.
    #[must_use]
    pub fn reversed(&self, now: Instant) -> Self {
        let remaining = 1.0 - self.progress(now);
        let elapsed = self.motion.duration.mul_f32(remaining);
        Self {
            direction: match self.direction {
                Direction::Enter => Direction::Exit,
                Direction::Exit => Direction::Enter,
            },
            started_at: now.checked_sub(elapsed).unwrap_or(now),
            motion: self.motion,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Fraction of the duration elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let total = self.motion.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// How far towards fully shown the content is: rises during entry, falls
    /// during exit.
    fn shown(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        match self.direction {
            Direction::Enter => t,
            Direction::Exit => 1.0 - t,
        }
    }

    /// Opacity to render with at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.shown(now)
    }

    /// Vertical offset from the resting position at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.motion.offset * (1.0 - self.shown(now))
    }

    /// Padding that displaces content by [`offset`](Self::offset).
    #[must_use]
    pub fn slide_padding(&self, now: Instant) -> Padding {
        let offset = self.offset(now);
        Padding {
            top: offset.max(0.0),
            right: 0.0,
            bottom: (-offset).max(0.0),
            left: 0.0,
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.is_finished(now)
    }
}

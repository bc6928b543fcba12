use std::time::Duration;

use crate::{animation::ease::Ease, foundation::core::Score};

/// Interpolation settings for one widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    /// When `false`, targets are applied immediately and no frames are requested.
    pub enabled: bool,
    /// Length of one interpolation, measured from the moment a target is observed.
    pub duration: Duration,
    /// Curve applied to normalized progress.
    pub ease: Ease,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Duration::from_millis(1000),
            ease: Ease::OutCubic,
        }
    }
}

/// Animator state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimState {
    /// Resting at `value`; no frames needed.
    Idle {
        /// The settled score.
        value: Score,
    },
    /// Interpolating from `start` toward `target` since `started_at`.
    Animating {
        /// Displayed value when this interpolation began.
        start: f64,
        /// Destination score.
        target: Score,
        /// Clock reading when the target was observed.
        started_at: Duration,
    },
}

/// Outcome of a single frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Interpolation is still running; request another frame.
    Continue,
    /// This tick reached the target; the animator is now idle.
    Finished,
    /// Nothing to do.
    Idle,
}

/// Drives the displayed score toward the most recent target.
///
/// Time is supplied by the caller as a monotonic clock reading (`Duration` since an arbitrary
/// epoch), which keeps the animator deterministic and host-agnostic.
#[derive(Clone, Debug)]
pub struct ScoreAnimator {
    settings: AnimationSettings,
    state: AnimState,
    displayed: f64,
}

impl ScoreAnimator {
    /// A fresh animator resting at the lowest score.
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            state: AnimState::Idle { value: Score::MIN },
            displayed: Score::MIN.get(),
        }
    }

    /// A fresh animator that has already observed `target`.
    ///
    /// With animation enabled the display starts at the lowest score and sweeps up to `target`;
    /// with animation disabled it starts at `target`.
    pub fn mount(settings: AnimationSettings, target: Score, now: Duration) -> Self {
        let mut anim = Self::new(settings);
        anim.set_target(target, now);
        anim
    }

    /// Observe a new target. Returns `true` if the state changed.
    ///
    /// A target equal to the current one is ignored. Otherwise any in-flight interpolation is
    /// dropped and a new one starts from the current displayed value.
    pub fn set_target(&mut self, target: Score, now: Duration) -> bool {
        if !self.settings.enabled {
            let changed = self.target() != target || self.displayed != target.get();
            self.jump_to(target);
            return changed;
        }
        if target == self.target() {
            return false;
        }

        tracing::debug!(
            from = self.displayed,
            to = target.get(),
            retarget = self.is_animating(),
            "score animation started"
        );
        self.state = AnimState::Animating {
            start: self.displayed,
            target,
            started_at: now,
        };
        true
    }

    /// Advance to clock reading `now`.
    pub fn tick(&mut self, now: Duration) -> Tick {
        let AnimState::Animating {
            start,
            target,
            started_at,
        } = self.state
        else {
            return Tick::Idle;
        };

        let t = progress(now.saturating_sub(started_at), self.settings.duration);
        if t >= 1.0 {
            self.jump_to(target);
            tracing::debug!(value = target.get(), "score animation finished");
            return Tick::Finished;
        }

        let eased = self.settings.ease.apply(t);
        self.displayed = start + (target.get() - start) * eased;
        Tick::Continue
    }

    /// Swap settings, re-running the target logic the way a changed dependency would.
    ///
    /// Disabling snaps to the target. A changed duration or curve restarts an in-flight
    /// interpolation from the current displayed value.
    pub fn reconfigure(&mut self, settings: AnimationSettings, now: Duration) {
        let prev = std::mem::replace(&mut self.settings, settings);
        if !settings.enabled {
            self.jump_to(self.target());
            return;
        }
        if prev == settings {
            return;
        }
        if let AnimState::Animating { target, .. } = self.state {
            self.state = AnimState::Animating {
                start: self.displayed,
                target,
                started_at: now,
            };
        }
    }

    /// The value to draw right now.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// The value to draw, as a [`Score`].
    pub fn displayed_score(&self) -> Score {
        Score::new(self.displayed)
    }

    /// The most recently observed target.
    pub fn target(&self) -> Score {
        match self.state {
            AnimState::Idle { value } => value,
            AnimState::Animating { target, .. } => target,
        }
    }

    /// Current state.
    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Whether frames are still needed.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimState::Animating { .. })
    }

    /// Active settings.
    pub fn settings(&self) -> AnimationSettings {
        self.settings
    }

    fn jump_to(&mut self, target: Score) {
        self.displayed = target.get();
        self.state = AnimState::Idle { value: target };
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;

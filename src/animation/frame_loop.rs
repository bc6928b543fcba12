use std::{collections::BTreeMap, time::Duration};

use crate::{
    animation::animator::Tick,
    config::widget::WidgetConfig,
    foundation::{
        core::{Score, WidgetKey},
        error::{ScoreArcError, ScoreArcResult},
    },
    render::scene::Scene,
    widget::instance::ScoreArcWidget,
};

struct Slot {
    widget: ScoreArcWidget,
    // A frame callback is registered for this widget.
    frame_requested: bool,
}

/// What happened during one [`FrameLoop::advance`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Zero-based index of this frame.
    pub frame: u64,
    /// Clock reading the callbacks observed.
    pub now: Duration,
    /// Widgets whose callback ran, in key order.
    pub ticked: Vec<WidgetKey>,
    /// Subset of `ticked` that reached its target on this frame.
    pub finished: Vec<WidgetKey>,
}

/// Deterministic single-threaded host: a clock plus per-widget frame callbacks.
///
/// A widget gets at most one callback per frame, and only while it has a pending request.
/// Unmounting removes the widget and its pending request together, so no callback can run against
/// a torn-down instance.
pub struct FrameLoop {
    now: Duration,
    frame: u64,
    next_key: u64,
    slots: BTreeMap<WidgetKey, Slot>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// An empty loop at clock zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            frame: 0,
            next_key: 0,
            slots: BTreeMap::new(),
        }
    }

    /// Mount a widget under the next free key.
    pub fn mount(&mut self, config: &WidgetConfig) -> WidgetKey {
        let key = WidgetKey(self.next_key);
        self.next_key += 1;
        self.insert(key, config);
        key
    }

    /// Mount under a caller-supplied key. Later [`FrameLoop::mount`] calls skip past it.
    pub fn mount_with_key(
        &mut self,
        key: WidgetKey,
        config: &WidgetConfig,
    ) -> ScoreArcResult<WidgetKey> {
        if self.slots.contains_key(&key) {
            return Err(ScoreArcError::validation(format!(
                "widget key {key} is already mounted"
            )));
        }
        self.next_key = self.next_key.max(key.0.saturating_add(1));
        self.insert(key, config);
        Ok(key)
    }

    fn insert(&mut self, key: WidgetKey, config: &WidgetConfig) {
        let widget = ScoreArcWidget::mount(key, config, self.now);
        let frame_requested = widget.needs_frame();
        tracing::debug!(%key, score = config.score.get(), frame_requested, "widget mounted");
        self.slots.insert(
            key,
            Slot {
                widget,
                frame_requested,
            },
        );
    }

    /// Tear a widget down, withdrawing any pending frame callback.
    pub fn unmount(&mut self, key: WidgetKey) -> Option<ScoreArcWidget> {
        let slot = self.slots.remove(&key)?;
        tracing::debug!(%key, withdrawn = slot.frame_requested, "widget unmounted");
        Some(slot.widget)
    }

    /// Request a new score for a mounted widget.
    pub fn set_score(&mut self, key: WidgetKey, score: impl Into<Score>) -> ScoreArcResult<()> {
        let now = self.now;
        let slot = self.slot_mut(key)?;
        slot.frame_requested = slot.widget.set_score(score.into(), now);
        Ok(())
    }

    /// Replace all options of a mounted widget.
    pub fn reconfigure(&mut self, key: WidgetKey, config: &WidgetConfig) -> ScoreArcResult<()> {
        let now = self.now;
        let slot = self.slot_mut(key)?;
        slot.frame_requested = slot.widget.reconfigure(config, now);
        Ok(())
    }

    /// Move the clock forward by `dt` and run every pending frame callback once.
    pub fn advance(&mut self, dt: Duration) -> FrameReport {
        self.now = self.now.saturating_add(dt);
        let mut report = FrameReport {
            frame: self.frame,
            now: self.now,
            ..FrameReport::default()
        };
        self.frame += 1;

        for (key, slot) in &mut self.slots {
            if !slot.frame_requested {
                continue;
            }
            slot.frame_requested = false;
            report.ticked.push(*key);
            match slot.widget.tick(self.now) {
                Tick::Continue => slot.frame_requested = true,
                Tick::Finished => report.finished.push(*key),
                Tick::Idle => {}
            }
        }

        tracing::trace!(
            frame = report.frame,
            ticked = report.ticked.len(),
            finished = report.finished.len(),
            "frame"
        );
        report
    }

    /// Advance in `interval` steps until no callbacks are pending or `max_frames` have run.
    /// Returns the number of frames run.
    pub fn run_until_idle(&mut self, interval: Duration, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && !self.is_idle() {
            self.advance(interval);
            frames += 1;
        }
        frames
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of widgets with a pending frame callback.
    pub fn pending_frames(&self) -> usize {
        self.slots.values().filter(|s| s.frame_requested).count()
    }

    /// Whether `key` has a pending frame callback.
    pub fn has_pending_frame(&self, key: WidgetKey) -> bool {
        self.slots.get(&key).is_some_and(|s| s.frame_requested)
    }

    /// No callbacks pending anywhere.
    pub fn is_idle(&self) -> bool {
        self.pending_frames() == 0
    }

    /// Mounted keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = WidgetKey> + '_ {
        self.slots.keys().copied()
    }

    /// Borrow a mounted widget.
    pub fn widget(&self, key: WidgetKey) -> Option<&ScoreArcWidget> {
        self.slots.get(&key).map(|s| &s.widget)
    }

    /// Scene for a mounted widget's displayed score.
    pub fn scene(&self, key: WidgetKey) -> Option<Scene> {
        self.widget(key).map(ScoreArcWidget::scene)
    }

    fn slot_mut(&mut self, key: WidgetKey) -> ScoreArcResult<&mut Slot> {
        self.slots
            .get_mut(&key)
            .ok_or_else(|| ScoreArcError::validation(format!("widget key {key} is not mounted")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame_loop.rs"]
mod tests;

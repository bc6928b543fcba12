use std::time::Duration;

use crate::{
    animation::animator::{ScoreAnimator, Tick},
    config::widget::{DisplayConfig, WidgetConfig},
    foundation::core::{Score, WidgetKey},
    render::{arc::render_arc, scene::Scene},
};

/// One mounted gauge: its key, drawing options and exclusively owned animation state.
#[derive(Clone, Debug)]
pub struct ScoreArcWidget {
    key: WidgetKey,
    display: DisplayConfig,
    animator: ScoreAnimator,
}

impl ScoreArcWidget {
    /// Mount a widget that immediately observes `config.score`.
    pub fn mount(key: WidgetKey, config: &WidgetConfig, now: Duration) -> Self {
        Self {
            key,
            display: config.display(),
            animator: ScoreAnimator::mount(config.animation(), config.score, now),
        }
    }

    pub fn key(&self) -> WidgetKey {
        self.key
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn animator(&self) -> &ScoreAnimator {
        &self.animator
    }

    /// Request a new score. Returns whether a frame is now needed.
    pub fn set_score(&mut self, score: Score, now: Duration) -> bool {
        self.animator.set_target(score, now);
        self.needs_frame()
    }

    /// Replace every option at once, as a re-render with new props would.
    pub fn reconfigure(&mut self, config: &WidgetConfig, now: Duration) -> bool {
        self.display = config.display();
        self.animator.reconfigure(config.animation(), now);
        self.animator.set_target(config.score, now);
        self.needs_frame()
    }

    /// One frame callback.
    pub fn tick(&mut self, now: Duration) -> Tick {
        self.animator.tick(now)
    }

    pub fn needs_frame(&self) -> bool {
        self.animator.is_animating()
    }

    /// Scene for the currently displayed score.
    pub fn scene(&self) -> Scene {
        render_arc(self.animator.displayed_score(), &self.display, self.key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/instance.rs"]
mod tests;

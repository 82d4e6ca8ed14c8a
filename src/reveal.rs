//! Viewport-triggered entrance animations.
//!
//! Every animated element owns an [`Entrance`]: it starts hidden, becomes
//! visible the first time it scrolls into view and then stays visible.
//! The rendering side only reads [`Entrance::style`].

use std::time::Duration;

const EASING: &str = "ease-out";

/// Hidden-state pose an element animates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Rises 20px into place.
    #[default]
    FadeUp,
    /// Slides in from 20px to the left.
    SlideIn,
    /// Grows from the given percentage of its size.
    Scale(u8),
}

impl Motion {
    fn hidden_transform(self) -> String {
        match self {
            Motion::FadeUp => "translate3d(0, 20px, 0)".to_string(),
            Motion::SlideIn => "translate3d(-20px, 0, 0)".to_string(),
            Motion::Scale(pct) => format!("scale({})", f32::from(pct) / 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    motion: Motion,
    timing: Timing,
    phase: Phase,
}

impl Entrance {
    pub fn new(motion: Motion, timing: Timing) -> Self {
        Self {
            motion,
            timing,
            phase: Phase::Hidden,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Records the element entering the viewport. Returns `true` only when
    /// this starts the reveal; later entries are ignored.
    pub fn enter(&mut self) -> bool {
        if self.phase == Phase::Visible {
            return false;
        }
        self.phase = Phase::Visible;
        true
    }

    pub fn style(&self) -> String {
        let (opacity, transform) = match self.phase {
            Phase::Hidden => ("0", self.motion.hidden_transform()),
            Phase::Visible => ("1", "none".to_string()),
        };
        let duration = self.timing.duration.as_millis();
        let delay = self.timing.delay.as_millis();
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {duration}ms {EASING} {delay}ms, transform {duration}ms {EASING} {delay}ms;"
        )
    }
}

/// Delays sibling reveals so they play one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    pub const fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.step * index as u32
    }
}

/// Endless up-and-down float, unrelated to scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillation {
    amplitude_px: u16,
    period: Duration,
}

impl Oscillation {
    pub const PHOTO: Oscillation = Oscillation {
        amplitude_px: 15,
        period: Duration::from_secs(6),
    };

    /// Inline style driving the `portfolio-float` keyframes in `input.css`.
    pub fn style(&self) -> String {
        format!(
            "--float-amplitude: -{}px; animation: portfolio-float {}ms ease-in-out infinite;",
            self.amplitude_px,
            self.period.as_millis()
        )
    }
}

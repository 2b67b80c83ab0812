//! Timed motion scripts played forward and then in reverse.
//!
//! A [`ScriptedPath`] is a list of [`MotionStep`]s interpreted by a small
//! state machine. The forward pass visits the steps in order; the reverse
//! pass visits them backwards with every offset negated, returning the actor
//! to where it started. Playback stops after the reverse pass.
use glam::Vec2;

use crate::motion::sanitize_dt;

/// One instruction in a [`ScriptedPath`].
#[derive(Debug, Clone, PartialEq)]
pub enum MotionStep {
    /// Move by `offset` at constant speed over `duration` seconds.
    MoveBy {
        /// Total displacement of the step.
        offset: Vec2,
        /// Seconds taken; zero applies the offset at once.
        duration: f32,
    },
    /// Stand still for `duration` seconds.
    Wait {
        /// Seconds spent waiting.
        duration: f32,
    },
    /// Report `label` when playback passes this point.
    Marker {
        /// Text reported to the caller.
        label: String,
    },
}

impl MotionStep {
    /// Shorthand for [`MotionStep::MoveBy`].
    #[must_use]
    pub const fn move_by(offset: Vec2, duration: f32) -> Self {
        Self::MoveBy { offset, duration }
    }

    /// Shorthand for [`MotionStep::Wait`].
    #[must_use]
    pub const fn wait(duration: f32) -> Self {
        Self::Wait { duration }
    }

    /// Shorthand for [`MotionStep::Marker`].
    pub fn marker(label: impl Into<String>) -> Self {
        Self::Marker {
            label: label.into(),
        }
    }

    /// Seconds the step occupies; markers take no time.
    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            Self::MoveBy { duration, .. } | Self::Wait { duration } => sanitize_dt(*duration),
            Self::Marker { .. } => 0.0,
        }
    }

    /// The step as played during the reverse pass.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::MoveBy { offset, duration } => Self::MoveBy {
                offset: -*offset,
                duration: *duration,
            },
            other => other.clone(),
        }
    }
}

/// Where a [`ScriptedPath`] is in its playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Playing the forward pass.
    Running,
    /// Inside a wait step, in either pass.
    Paused,
    /// Playing the reverse pass.
    Reversed,
    /// Both passes have finished.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Forward,
    Reverse,
}

/// Result of [`ScriptedPath::advance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathAdvance {
    /// Displacement accumulated over the advanced time.
    pub displacement: Vec2,
    /// Labels of markers passed, in playback order.
    pub markers: Vec<String>,
}

/// A list of timed steps played forward, then backward, once.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPath {
    steps: Vec<MotionStep>,
    pass: Pass,
    index: usize,
    elapsed: f32,
    done: bool,
}

impl ScriptedPath {
    /// Creates a path positioned at the start of its forward pass.
    ///
    /// A path without steps is already [`PlaybackState::Done`].
    #[must_use]
    pub fn new(steps: Vec<MotionStep>) -> Self {
        let done = steps.is_empty();
        Self {
            steps,
            pass: Pass::Forward,
            index: 0,
            elapsed: 0.0,
            done,
        }
    }

    /// Steps of the forward pass.
    #[must_use]
    pub fn steps(&self) -> &[MotionStep] {
        &self.steps
    }

    /// Seconds needed to play both passes.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        2.0 * self.steps.iter().map(MotionStep::duration).sum::<f32>()
    }

    /// Current playback state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        match self.current_step() {
            None => PlaybackState::Done,
            Some(MotionStep::Wait { .. }) => PlaybackState::Paused,
            Some(_) if self.pass == Pass::Forward => PlaybackState::Running,
            Some(_) => PlaybackState::Reversed,
        }
    }

    /// The step being played, as it applies in the current pass.
    #[must_use]
    pub fn current_step(&self) -> Option<MotionStep> {
        if self.done {
            return None;
        }
        match self.pass {
            Pass::Forward => self.steps.get(self.index).cloned(),
            Pass::Reverse => self
                .steps
                .len()
                .checked_sub(self.index + 1)
                .and_then(|i| self.steps.get(i))
                .map(MotionStep::reversed),
        }
    }

    /// Plays `dt` seconds of the path.
    ///
    /// Crosses as many step boundaries as `dt` covers. Markers reached along
    /// the way are returned in order, including those at the very end of the
    /// advanced interval. Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, dt: f32) -> PathAdvance {
        let mut remaining = sanitize_dt(dt);
        let mut out = PathAdvance::default();

        while let Some(step) = self.current_step() {
            let duration = step.duration();
            let left = (duration - self.elapsed).max(0.0);
            let slice = remaining.min(left);
            let finished = slice >= left;

            if let MotionStep::MoveBy { offset, .. } = step {
                let before = progress(self.elapsed, duration);
                let after = if finished {
                    1.0
                } else {
                    progress(self.elapsed + slice, duration)
                };
                out.displacement += offset * (after - before);
            }

            remaining -= slice;
            if !finished {
                self.elapsed += slice;
                break;
            }
            if let MotionStep::Marker { label } = step {
                out.markers.push(label);
            }
            self.next_step();
        }

        out
    }

    fn next_step(&mut self) {
        self.elapsed = 0.0;
        self.index += 1;
        if self.index < self.steps.len() {
            return;
        }
        self.index = 0;
        match self.pass {
            Pass::Forward => self.pass = Pass::Reverse,
            Pass::Reverse => self.done = true,
        }
    }
}

/// Fraction of a step completed after `elapsed` seconds.
///
/// Instantaneous steps stay at zero until they finish.
fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

use crate::foundation::core::{Channel, Fps};
use crate::foundation::error::{FadeError, FadeResult};

/// Minimum fade length in seconds.
pub const MIN_FADE_SECS: f64 = 1.0;

/// How many transition frames each channel gets.
///
/// The total is split in thirds; the remainder goes to the last channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StepPlan {
    /// Frame count per channel, indexed by [`Channel::index`].
    pub steps: [u64; 3],
}

impl StepPlan {
    /// Build the plan for a fade of `fade_secs` at `fps`.
    pub fn new(fade_secs: f64, fps: Fps) -> FadeResult<Self> {
        if !fade_secs.is_finite() || fade_secs < MIN_FADE_SECS {
            return Err(FadeError::validation(format!(
                "fading has to be at least {MIN_FADE_SECS} second (got {fade_secs})"
            )));
        }
        Ok(Self::from_total(fps.secs_to_frames_floor(fade_secs)))
    }

    /// Split `total` frames over the three channels.
    pub fn from_total(total: u64) -> Self {
        let third = total / 3;
        Self {
            steps: [third, third, total - 2 * third],
        }
    }

    /// Total number of transition frames.
    pub fn total(&self) -> u64 {
        self.steps.iter().sum()
    }

    /// Frames allotted to `channel`.
    pub fn steps(&self, channel: Channel) -> u64 {
        self.steps[channel.index()]
    }

    /// Blend ratios for every frame of `channel`, from 0 to 1 inclusive.
    pub fn ratios(&self, channel: Channel) -> impl Iterator<Item = f64> + use<> {
        channel_ratios(self.steps(channel))
    }

    /// Digits needed to zero-pad every frame counter of this plan (at least 4).
    pub fn frame_name_width(&self) -> usize {
        let last = self.total().saturating_sub(1);
        last.to_string().len().max(4)
    }
}

/// Evenly spaced ratios `i / (steps - 1)` for `i` in `0..steps`.
///
/// A single step yields ratio 1 so the channel still lands on the target.
pub fn channel_ratios(steps: u64) -> impl Iterator<Item = f64> {
    (0..steps).map(move |i| {
        if steps == 1 {
            1.0
        } else {
            i as f64 / (steps - 1) as f64
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/fade/plan.rs"]
mod tests;

use crate::foundation::error::{FadeError, FadeResult};

/// Position of a frame in an output sequence (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Return the following index.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Rational frames-per-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

/// Frame rate of every clip rendered by rgbfade.
pub const FPS: Fps = Fps { num: 25, den: 1 };

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> FadeResult<Self> {
        if den == 0 {
            return Err(FadeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FadeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of whole frames that fit in `secs` (`floor(secs * fps)`, never negative).
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// One of the three 8-bit color components of an RGB pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    /// Channel 0.
    Red,
    /// Channel 1.
    Green,
    /// Channel 2.
    Blue,
}

impl Channel {
    /// Production fade order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Map a raw channel index to a [`Channel`].
    pub fn from_index(idx: usize) -> FadeResult<Self> {
        Self::ALL.get(idx).copied().ok_or_else(|| {
            FadeError::validation(format!("channel index must be 0, 1 or 2 (got {idx})"))
        })
    }

    /// Offset of this channel inside an RGB8 pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

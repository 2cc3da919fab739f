use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::assets::decode::{load_image, save_png};
use crate::fade::mix::mix_channel;
use crate::fade::plan::StepPlan;
use crate::foundation::core::{Channel, FPS, FrameIndex};
use crate::foundation::error::{FadeError, FadeResult};

/// File name prefix of persisted transition frames.
pub const TRANSITION_PREFIX: &str = "a2b_";

/// Timing options for a fade.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FaderOpts {
    /// Length of the channel-by-channel transition in seconds (at least 1).
    pub fade_secs: f64,
    /// How long the untouched source and target images are held, in seconds.
    pub static_secs: f64,
}

impl FaderOpts {
    /// Options for a `fade_secs` transition with a one second static hold.
    pub fn new(fade_secs: f64) -> Self {
        Self {
            fade_secs,
            static_secs: 1.0,
        }
    }
}

/// Destination for frames produced while fading.
pub trait FrameStore {
    /// Receive the full working buffer after one mix step.
    fn store(&mut self, idx: FrameIndex, frame: &RgbImage) -> FadeResult<()>;
}

/// Store that drops every frame (persistence disabled).
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardFrames;

impl FrameStore for DiscardFrames {
    fn store(&mut self, _idx: FrameIndex, _frame: &RgbImage) -> FadeResult<()> {
        Ok(())
    }
}

/// Store that writes each frame as `a2b_<counter>.png` into a directory.
///
/// Counters are zero-padded wide enough that lexicographic order matches frame order.
#[derive(Clone, Debug)]
pub struct DirFrameStore {
    dir: PathBuf,
    width: usize,
}

impl DirFrameStore {
    /// Store into `dir`, padding counters for every frame of `plan`.
    pub fn new(dir: impl Into<PathBuf>, plan: &StepPlan) -> Self {
        Self {
            dir: dir.into(),
            width: plan.frame_name_width(),
        }
    }

    /// Path the frame at `idx` is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!(
            "{TRANSITION_PREFIX}{:0width$}.png",
            idx.0,
            width = self.width
        ))
    }
}

impl FrameStore for DirFrameStore {
    fn store(&mut self, idx: FrameIndex, frame: &RgbImage) -> FadeResult<()> {
        let path = self.frame_path(idx);
        tracing::debug!(path = %path.display(), "persist frame");
        save_png(&path, frame)
    }
}

/// Mutable state of one fade run: the working buffer and the frame counter.
#[derive(Clone, Debug)]
pub struct FadeSession {
    working: RgbImage,
    counter: FrameIndex,
}

impl FadeSession {
    /// Current working buffer.
    pub fn working(&self) -> &RgbImage {
        &self.working
    }

    /// Index the next produced frame will get.
    pub fn counter(&self) -> FrameIndex {
        self.counter
    }

    /// Consume the session, returning the working buffer.
    pub fn into_working(self) -> RgbImage {
        self.working
    }
}

/// Fades a source image into a target image one channel at a time.
///
/// Source and target are fixed at construction; per-run state lives in [`FadeSession`].
#[derive(Clone, Debug)]
pub struct Fader {
    source: RgbImage,
    target: RgbImage,
    opts: FaderOpts,
    plan: StepPlan,
}

impl Fader {
    /// Load both images from disk and build a fader.
    pub fn open(
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
        opts: FaderOpts,
    ) -> FadeResult<Self> {
        let source = load_image(&trim_path(source.as_ref()))?;
        let target = load_image(&trim_path(target.as_ref()))?;
        Self::new(source, target, opts)
    }

    /// Build a fader from decoded images of identical dimensions.
    pub fn new(source: RgbImage, target: RgbImage, opts: FaderOpts) -> FadeResult<Self> {
        if source.dimensions() != target.dimensions() {
            let (sw, sh) = source.dimensions();
            let (tw, th) = target.dimensions();
            return Err(FadeError::validation(format!(
                "dimensions of images do not match: {sw}x{sh} vs {tw}x{th}"
            )));
        }
        if source.width() == 0 || source.height() == 0 {
            return Err(FadeError::validation("images must be non-empty"));
        }
        if !opts.static_secs.is_finite() || opts.static_secs < 0.0 {
            return Err(FadeError::validation(
                "static image duration must be finite and >= 0",
            ));
        }
        let plan = StepPlan::new(opts.fade_secs, FPS)?;

        Ok(Self {
            source,
            target,
            opts,
            plan,
        })
    }

    /// Image the fade starts from.
    pub fn source(&self) -> &RgbImage {
        &self.source
    }

    /// Image the fade ends on.
    pub fn target(&self) -> &RgbImage {
        &self.target
    }

    /// Options this fader was built with.
    pub fn opts(&self) -> FaderOpts {
        self.opts
    }

    /// Per-channel step plan.
    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    /// Start a new run with the working buffer seeded from the source.
    pub fn session(&self) -> FadeSession {
        FadeSession {
            working: self.source.clone(),
            counter: FrameIndex(0),
        }
    }

    /// Blend `channel` at `ratio` into the working buffer, then hand the frame to `store`.
    pub fn mix_frame(
        &self,
        session: &mut FadeSession,
        channel: Channel,
        ratio: f64,
        store: &mut dyn FrameStore,
    ) -> FadeResult<()> {
        if session.working.dimensions() != self.source.dimensions() {
            return Err(FadeError::validation(
                "fade session does not belong to this fader",
            ));
        }
        mix_channel(
            &mut session.working,
            &self.source,
            &self.target,
            channel,
            ratio,
        );
        store.store(session.counter, &session.working)?;
        session.counter = session.counter.next();
        Ok(())
    }

    /// Produce every planned frame for `channel`.
    #[tracing::instrument(skip(self, session, store))]
    pub fn fade_channel(
        &self,
        session: &mut FadeSession,
        channel: Channel,
        store: &mut dyn FrameStore,
    ) -> FadeResult<()> {
        tracing::info!(steps = self.plan.steps(channel), "rendering channel");
        for ratio in self.plan.ratios(channel) {
            self.mix_frame(session, channel, ratio, store)?;
        }
        Ok(())
    }

    /// Fade red, then green, then blue.
    pub fn fade(&self, session: &mut FadeSession, store: &mut dyn FrameStore) -> FadeResult<()> {
        for channel in Channel::ALL {
            self.fade_channel(session, channel, store)?;
        }
        Ok(())
    }
}

fn trim_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fade/fader.rs"]
mod tests;

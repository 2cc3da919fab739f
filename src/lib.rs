//! rgbfade renders a short clip that fades one image into another, one color channel at a time.
//!
//! Instead of a simultaneous cross-fade, red converges first, then green, then blue. The clip is
//! framed by a static hold of the untouched source and target images.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode two equally-sized images into 8-bit RGB buffers ([`Fader::open`])
//! 2. **Plan**: split `floor(fade_secs * 25)` transition frames over the three channels ([`StepPlan`])
//! 3. **Fade**: blend each channel in turn into a working buffer, persisting every frame
//! 4. **Encode**: hand still, transition and still frames to a [`FrameSink`], by default the
//!    system `ffmpeg` binary for MP4 output ([`render_to_mp4`])
//!
//! Frame rate is fixed at 25 fps ([`FPS`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod fade;
mod foundation;
mod movie;

pub use assets::decode::{decode_image, load_image, save_png};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use fade::fader::{
    DirFrameStore, DiscardFrames, FadeSession, Fader, FaderOpts, FrameStore, TRANSITION_PREFIX,
};
pub use fade::mix::{lerp_u8, mix_channel};
pub use fade::plan::{MIN_FADE_SECS, StepPlan, channel_ratios};
pub use foundation::core::{Channel, FPS, Fps, FrameIndex};
pub use foundation::error::{FadeError, FadeResult};
pub use movie::assembler::{
    MovieStats, SOURCE_FRAME, TARGET_FRAME, build_movie, collect_transition_frames,
    default_output_name, render_to_mp4,
};

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::decode::{load_image, save_png};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::fade::fader::{DirFrameStore, Fader, TRANSITION_PREFIX};
use crate::foundation::core::{FPS, FrameIndex};
use crate::foundation::error::{FadeError, FadeResult};

/// File name of the persisted source still.
pub const SOURCE_FRAME: &str = "a.png";
/// File name of the persisted target still.
pub const TARGET_FRAME: &str = "b.png";

/// Frame counts of an assembled clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MovieStats {
    /// Frames in each static hold (one before, one after the transition).
    pub static_frames: u64,
    /// Frames in the channel-by-channel transition.
    pub transition_frames: u64,
    /// Frames handed to the sink in total.
    pub total_frames: u64,
}

/// Render the clip for `fader` into an MP4 at `out_path` with the system `ffmpeg`.
pub fn render_to_mp4(
    fader: &Fader,
    out_path: impl Into<PathBuf>,
    overwrite: bool,
) -> FadeResult<MovieStats> {
    let mut opts = FfmpegSinkOpts::new(out_path);
    opts.overwrite = overwrite;
    let mut sink = FfmpegSink::new(opts);
    build_movie(fader, &mut sink)
}

/// Render the clip for `fader` into `sink`.
///
/// The source still is held for `static_secs`, followed by every transition frame, followed by
/// the target still held for `static_secs`. Frames are staged in a temporary directory that is
/// removed before returning, on success and on failure alike.
pub fn build_movie(fader: &Fader, sink: &mut dyn FrameSink) -> FadeResult<MovieStats> {
    build_movie_in(fader, &std::env::temp_dir(), sink)
}

#[tracing::instrument(skip(fader, sink))]
pub(crate) fn build_movie_in(
    fader: &Fader,
    tmp_root: &Path,
    sink: &mut dyn FrameSink,
) -> FadeResult<MovieStats> {
    let tmp = tempfile::Builder::new()
        .prefix("rgbfade_")
        .tempdir_in(tmp_root)
        .with_context(|| {
            format!(
                "create temporary frame directory in '{}'",
                tmp_root.display()
            )
        })?;
    tracing::debug!(dir = %tmp.path().display(), "created temporary directory");

    let stats = assemble(fader, tmp.path(), sink)?;

    let dir = tmp.path().to_path_buf();
    tmp.close()
        .with_context(|| format!("remove temporary directory '{}'", dir.display()))?;
    Ok(stats)
}

fn assemble(fader: &Fader, dir: &Path, sink: &mut dyn FrameSink) -> FadeResult<MovieStats> {
    let source_path = dir.join(SOURCE_FRAME);
    let target_path = dir.join(TARGET_FRAME);
    save_png(&source_path, fader.source())?;
    save_png(&target_path, fader.target())?;

    let mut store = DirFrameStore::new(dir, fader.plan());
    let mut session = fader.session();
    fader.fade(&mut session, &mut store)?;

    let transitions = collect_transition_frames(dir)?;
    let hold = FPS.secs_to_frames_floor(fader.opts().static_secs);

    let (width, height) = fader.source().dimensions();
    sink.begin(SinkConfig {
        width,
        height,
        fps: FPS,
    })?;

    let mut idx = FrameIndex(0);
    let still = load_image(&source_path)?;
    for _ in 0..hold {
        sink.push_frame(idx, &still)?;
        idx = idx.next();
    }
    for path in &transitions {
        let frame = load_image(path)?;
        sink.push_frame(idx, &frame)?;
        idx = idx.next();
    }
    let still = load_image(&target_path)?;
    for _ in 0..hold {
        sink.push_frame(idx, &still)?;
        idx = idx.next();
    }
    sink.end()?;

    tracing::info!(
        static_frames = hold,
        transition_frames = transitions.len(),
        total_frames = idx.0,
        "clip assembled"
    );
    Ok(MovieStats {
        static_frames: hold,
        transition_frames: transitions.len() as u64,
        total_frames: idx.0,
    })
}

/// List the transition frames in `dir`, sorted by file name.
pub fn collect_transition_frames(dir: &Path) -> FadeResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list frames in '{}'", dir.display()))?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list frames in '{}'", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(TRANSITION_PREFIX) && name.ends_with(".png") {
            frames.push(entry.path());
        }
    }
    frames.sort();
    Ok(frames)
}

/// Output file name for a fade from `from` to `to`: `<from name>_2_<to name>.mp4`.
pub fn default_output_name(from: &Path, to: &Path) -> FadeResult<PathBuf> {
    let base = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| FadeError::validation(format!("'{}' has no file name", p.display())))
    };
    Ok(PathBuf::from(format!("{}_2_{}.mp4", base(from)?, base(to)?)))
}

#[cfg(test)]
#[path = "../../tests/unit/movie/assembler.rs"]
mod tests;

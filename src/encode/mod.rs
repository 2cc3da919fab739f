//! Encoding sinks.
//!
//! Sinks consume finished frames in clip order and are driven by the movie assembler.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

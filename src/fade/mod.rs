//! Channel-by-channel fading between two images.

/// The fader, its per-run session and frame stores.
pub mod fader;
/// Per-pixel channel blending.
pub mod mix;
/// Per-channel frame budgets.
pub mod plan;

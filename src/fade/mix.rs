use image::RgbImage;

use crate::foundation::core::Channel;

/// Overwrite `channel` of every pixel in `working` with the blend of `source` and `target`.
///
/// The blend is computed in `f64` and narrowed by truncation. Other channels are untouched.
/// All three buffers must share dimensions.
pub fn mix_channel(
    working: &mut RgbImage,
    source: &RgbImage,
    target: &RgbImage,
    channel: Channel,
    ratio: f64,
) {
    let c = channel.index();
    for ((w, s), t) in working
        .pixels_mut()
        .zip(source.pixels())
        .zip(target.pixels())
    {
        w[c] = lerp_u8(s[c], t[c], ratio);
    }
}

/// `a * (1 - ratio) + b * ratio`, truncated to `u8`.
pub fn lerp_u8(a: u8, b: u8, ratio: f64) -> u8 {
    (f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/fade/mix.rs"]
mod tests;

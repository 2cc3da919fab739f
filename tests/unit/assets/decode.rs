use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_drops_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100u8, 50, 200]);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(matches!(
        decode_image(b"not an image"),
        Err(FadeError::Other(_))
    ));
}

#[test]
fn load_image_requires_regular_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_image(dir.path()),
        Err(FadeError::Validation(_))
    ));
    assert!(matches!(
        load_image(&dir.path().join("missing.png")),
        Err(FadeError::Validation(_))
    ));
}

#[test]
fn save_then_load_png_keeps_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("px.png");
    let img = RgbImage::from_raw(2, 1, vec![1, 2, 3, 250, 251, 252]).unwrap();

    save_png(&path, &img).unwrap();
    assert_eq!(load_image(&path).unwrap(), img);
}

#[test]
fn load_image_names_path_on_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"nope").unwrap();

    let err = load_image(&path).unwrap_err();
    assert!(err.to_string().contains("broken.png"));
}

use super::*;

fn solid(width: u32, height: u32, px: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, image::Rgb(px))
}

fn black_to_color(fade_secs: f64) -> Fader {
    Fader::new(
        solid(2, 3, [0, 0, 0]),
        solid(2, 3, [255, 128, 42]),
        FaderOpts::new(fade_secs),
    )
    .unwrap()
}

#[derive(Default)]
struct Recording {
    frames: Vec<(FrameIndex, RgbImage)>,
}

impl FrameStore for Recording {
    fn store(&mut self, idx: FrameIndex, frame: &RgbImage) -> FadeResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }
}

struct Failing;

impl FrameStore for Failing {
    fn store(&mut self, _idx: FrameIndex, _frame: &RgbImage) -> FadeResult<()> {
        Err(FadeError::Other(anyhow::anyhow!("disk full")))
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let err = Fader::new(
        solid(2, 3, [0, 0, 0]),
        solid(3, 2, [0, 0, 0]),
        FaderOpts::new(2.0),
    )
    .unwrap_err();
    assert!(matches!(err, FadeError::Validation(_)));
}

#[test]
fn short_fades_are_rejected_at_construction() {
    let err = Fader::new(
        solid(1, 1, [0, 0, 0]),
        solid(1, 1, [1, 1, 1]),
        FaderOpts::new(0.5),
    )
    .unwrap_err();
    assert!(matches!(err, FadeError::Validation(_)));

    assert!(
        Fader::new(
            solid(1, 1, [0, 0, 0]),
            solid(1, 1, [1, 1, 1]),
            FaderOpts::new(1.0)
        )
        .is_ok()
    );
}

#[test]
fn negative_static_hold_is_rejected() {
    let opts = FaderOpts {
        fade_secs: 2.0,
        static_secs: -1.0,
    };
    assert!(Fader::new(solid(1, 1, [0, 0, 0]), solid(1, 1, [0, 0, 0]), opts).is_err());
}

#[test]
fn fade_channel_emits_planned_frame_count_from_source_to_target() {
    let fader = black_to_color(1.0);
    let mut session = fader.session();
    let mut rec = Recording::default();

    fader
        .fade_channel(&mut session, Channel::Red, &mut rec)
        .unwrap();

    assert_eq!(rec.frames.len(), 8);
    assert_eq!(rec.frames[0].1.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(rec.frames[7].1.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(session.counter(), FrameIndex(8));
}

#[test]
fn fade_single_channel_only_touches_that_channel() {
    let fader = black_to_color(10.0);
    let mut session = fader.session();

    fader
        .fade_channel(&mut session, Channel::Blue, &mut DiscardFrames)
        .unwrap();

    assert!(session.working().pixels().all(|p| p.0 == [0, 0, 42]));
}

#[test]
fn fade_two_channels() {
    let fader = black_to_color(10.0);
    let mut session = fader.session();

    fader
        .fade_channel(&mut session, Channel::Blue, &mut DiscardFrames)
        .unwrap();
    fader
        .fade_channel(&mut session, Channel::Green, &mut DiscardFrames)
        .unwrap();

    assert!(session.working().pixels().all(|p| p.0 == [0, 128, 42]));
}

#[test]
fn any_channel_order_converges_on_target() {
    let fader = black_to_color(10.0);

    let mut forward = fader.session();
    fader.fade(&mut forward, &mut DiscardFrames).unwrap();

    let mut shuffled = fader.session();
    for channel in [Channel::Red, Channel::Blue, Channel::Green] {
        fader
            .fade_channel(&mut shuffled, channel, &mut DiscardFrames)
            .unwrap();
    }

    assert_eq!(forward.working(), fader.target());
    assert_eq!(shuffled.working(), fader.target());
}

#[test]
fn full_fade_numbers_frames_sequentially_across_channels() {
    let fader = black_to_color(2.0);
    let mut session = fader.session();
    let mut rec = Recording::default();

    fader.fade(&mut session, &mut rec).unwrap();

    assert_eq!(rec.frames.len(), 50);
    for (i, (idx, _)) in rec.frames.iter().enumerate() {
        assert_eq!(idx.0, i as u64);
    }
    // Red finishes at frame 15, green starts at 16 with red already converged.
    assert_eq!(rec.frames[15].1.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(rec.frames[16].1.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(rec.frames[31].1.get_pixel(0, 0).0, [255, 128, 0]);
    assert_eq!(rec.frames[49].1.get_pixel(0, 0).0, [255, 128, 42]);
    assert_eq!(session.into_working(), *fader.target());
}

#[test]
fn source_and_target_are_not_mutated() {
    let fader = black_to_color(2.0);
    let mut session = fader.session();
    fader.fade(&mut session, &mut DiscardFrames).unwrap();

    assert!(fader.source().pixels().all(|p| p.0 == [0, 0, 0]));
    assert!(fader.target().pixels().all(|p| p.0 == [255, 128, 42]));
}

#[test]
fn store_failure_aborts_the_fade() {
    let fader = black_to_color(2.0);
    let mut session = fader.session();

    assert!(fader.fade(&mut session, &mut Failing).is_err());
    assert_eq!(session.counter(), FrameIndex(0));
}

#[test]
fn foreign_session_is_rejected() {
    let small = black_to_color(2.0);
    let big = Fader::new(
        solid(4, 4, [0, 0, 0]),
        solid(4, 4, [9, 9, 9]),
        FaderOpts::new(2.0),
    )
    .unwrap();
    let mut session = big.session();

    assert!(
        small
            .mix_frame(&mut session, Channel::Red, 0.5, &mut DiscardFrames)
            .is_err()
    );
}

#[test]
fn dir_store_pads_counters_and_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let plan = StepPlan::from_total(50);
    let mut store = DirFrameStore::new(dir.path(), &plan);

    assert_eq!(
        store.frame_path(FrameIndex(7)),
        dir.path().join("a2b_0007.png")
    );
    store
        .store(FrameIndex(7), &solid(1, 1, [1, 2, 3]))
        .unwrap();
    assert!(dir.path().join("a2b_0007.png").is_file());

    let wide = DirFrameStore::new(dir.path(), &StepPlan::from_total(20_000));
    assert_eq!(
        wide.frame_path(FrameIndex(7)),
        dir.path().join("a2b_00007.png")
    );
}

#[test]
fn open_trims_paths_and_rejects_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    save_png(&a, &solid(2, 2, [10, 20, 30])).unwrap();
    save_png(&b, &solid(2, 2, [40, 50, 60])).unwrap();

    let padded = format!("  {}\n", a.display());
    let fader = Fader::open(padded, &b, FaderOpts::new(2.0)).unwrap();
    assert_eq!(fader.source().get_pixel(1, 1).0, [10, 20, 30]);
    assert_eq!(fader.plan().steps, [16, 16, 18]);

    assert!(matches!(
        Fader::open(dir.path().join("nope.png"), &b, FaderOpts::new(2.0)),
        Err(FadeError::Validation(_))
    ));
    assert!(matches!(
        Fader::open(&a, dir.path().join("nope.png"), FaderOpts::new(2.0)),
        Err(FadeError::Validation(_))
    ));
}

use super::helpers::small_mode;
use crate::{ColorMapper, PaletteMapper, VideoSystem};
use scanbrot_core::{
    Button, PipelineConfig, ScanTiming, VideoSignal, Viewport, ViewportControl, BLANK_LEVEL,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn system(viewport: Viewport) -> VideoSystem<PaletteMapper> {
    let mode = small_mode();
    let config = PipelineConfig::new(6, 3, 3).unwrap();
    VideoSystem::new(
        config,
        mode.active_area(),
        viewport,
        PaletteMapper::classic(config.depth()),
    )
}

fn wide_view() -> Viewport {
    Viewport::fit_width(-0.5, 0.0, 6.0, small_mode().horizontal.active).unwrap()
}

#[test]
fn sync_lines_are_scan_timing_delayed_by_latency() {
    init_logging();
    let mode = small_mode();
    let viewport = wide_view();
    let mut system = system(viewport);
    let latency = system.latency() as usize;
    assert_eq!(latency, 7);

    let timings: Vec<ScanTiming> = mode.scan().take(2 * mode.ticks_per_frame() as usize).collect();
    let signals: Vec<VideoSignal> = timings.iter().map(|t| system.tick(*t, &viewport)).collect();

    for (n, timing) in timings.iter().enumerate().take(timings.len() - latency) {
        let out = signals[n + latency];
        assert_eq!(out.hsync, timing.hsync, "hsync at tick {n}");
        assert_eq!(out.vsync, timing.vsync, "vsync at tick {n}");
        if timing.blanking {
            assert_eq!(out.rgb, BLANK_LEVEL, "blanked tick {n} carried color");
        }
    }
}

#[test]
fn interior_and_exterior_pixels_get_palette_colors() {
    init_logging();
    let mode = small_mode();
    let viewport = wide_view();
    let mut system = system(viewport);
    let palette = PaletteMapper::classic(system.pipeline().depth());
    let latency = system.latency() as usize;
    let ticks = mode.ticks_per_frame() as usize;
    let line = mode.ticks_per_line() as usize;

    let signals: Vec<VideoSignal> = mode
        .scan()
        .take(2 * ticks + latency)
        .map(|t| system.tick(t, &viewport))
        .collect();
    let pixel = |x: usize, y: usize| signals[ticks + y * line + x + latency];

    // Center of the view, (-0.5, 0): inside the main cardioid
    assert_eq!(pixel(12, 8).rgb, palette.color(0, false));
    // Top-left corner, (-3.5, -2): escapes on the first iteration
    assert_eq!(pixel(0, 0).rgb, palette.color(1, true));
    assert_ne!(pixel(0, 0).rgb, BLANK_LEVEL);
}

#[test]
fn viewport_changes_take_effect_at_the_next_frame() {
    init_logging();
    let mode = small_mode();
    let ticks = mode.ticks_per_frame() as usize;

    let mut control = ViewportControl::new(wide_view(), 4);
    let mut steady = system(wide_view());
    let mut panned = system(wide_view());

    let mut diverged_at = None;
    for (n, timing) in mode.scan().take(3 * ticks).enumerate() {
        // Press mid-way through the second frame
        if n == ticks + ticks / 3 {
            control.press(Button::Right);
            control.press(Button::ZoomIn);
        }
        if timing.vsync {
            control.on_vsync();
        }
        let a = steady.tick(timing, &wide_view());
        let b = panned.tick(timing, control.active());
        if a != b && diverged_at.is_none() {
            diverged_at = Some(n);
        }
    }

    let diverged_at = diverged_at.expect("pan and zoom changed nothing");
    assert!(
        diverged_at >= 2 * ticks,
        "output changed at tick {diverged_at}, before the third frame"
    );
    assert_eq!(*panned.generator().viewport(), *control.active());
}

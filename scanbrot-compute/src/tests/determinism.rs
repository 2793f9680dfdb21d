use super::helpers::small_mode;
use crate::{PaletteMapper, VideoSystem};
use scanbrot_core::{PipelineConfig, VideoSignal, Viewport};

fn run_frames(frames: usize) -> Vec<VideoSignal> {
    let mode = small_mode();
    let viewport = Viewport::fit_width(-0.5, 0.0, 3.0, mode.horizontal.active).unwrap();
    let config = PipelineConfig::new(6, 3, 4).unwrap();
    let mut system = VideoSystem::new(
        config,
        mode.active_area(),
        viewport,
        PaletteMapper::classic(config.depth()),
    );
    mode.scan()
        .take(frames * mode.ticks_per_frame() as usize)
        .map(|t| system.tick(t, &viewport))
        .collect()
}

#[test]
fn identical_inputs_give_bit_identical_streams() {
    assert_eq!(run_frames(2), run_frames(2));
}

#[test]
fn consecutive_frames_repeat_exactly() {
    // No hidden state leaks from one frame into the next
    let ticks = small_mode().ticks_per_frame() as usize;
    let stream = run_frames(3);
    assert_eq!(stream[ticks..2 * ticks], stream[2 * ticks..3 * ticks]);
}

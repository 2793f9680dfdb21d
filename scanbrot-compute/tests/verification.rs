use scanbrot_compute::{
    raster_stimulus, verify_pipeline, CoordinateGenerator, GeneratedPixel, PipelineConfig,
    VideoMode, Viewport,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const DESIGN_JSON: &str = r#"{
    "stages": 12,
    "multiplex": 4,
    "phase_capacity": 4,
    "dedicated_multipliers": 3
}"#;

const MODE_JSON: &str = r#"{
    "horizontal": { "active": 40, "front_porch": 2, "sync": 4, "back_porch": 2 },
    "vertical": { "active": 30, "front_porch": 1, "sync": 2, "back_porch": 1 },
    "pixel_clock_hz": 2000000
}"#;

#[test]
fn design_from_json_passes_verification() {
    init_logging();
    let config = PipelineConfig::from_json(DESIGN_JSON).unwrap();
    assert_eq!(config.depth(), 48);
    assert_eq!(config.resources().logic_multipliers, 24);

    let viewport = Viewport::fit_width(-0.5, 0.0, 3.2, 40).unwrap();
    let stimulus = raster_stimulus(&viewport, VideoMode::from_json(MODE_JSON).unwrap().active_area());
    let report = verify_pipeline(config, &stimulus);
    assert_eq!(report.checked, 40 * 30);
    assert!(report.passed(), "{report:?}");
}

#[test]
fn generator_driven_stream_passes_verification() {
    init_logging();
    let mode = VideoMode::from_json(MODE_JSON).unwrap();
    let viewport = Viewport::fit_width(-0.75, 0.1, 0.5, mode.horizontal.active).unwrap();
    let mut generator = CoordinateGenerator::new(mode.active_area(), viewport);

    // Whole frames including blanking, so sync tags of every kind flow through
    let stimulus: Vec<GeneratedPixel> = mode
        .scan()
        .take(2 * mode.ticks_per_frame() as usize)
        .map(|t| generator.tick(t, &viewport))
        .collect();
    assert!(stimulus.iter().any(|p| p.tag.hsync));
    assert!(stimulus.iter().any(|p| p.tag.vsync));

    let report = verify_pipeline(PipelineConfig::new(10, 2, 2).unwrap(), &stimulus);
    assert!(report.passed(), "{report:?}");
}

#[test]
fn over_multiplexed_design_fails_verification() {
    init_logging();
    let viewport = Viewport::default();
    let stimulus = raster_stimulus(&viewport, VideoMode::from_json(MODE_JSON).unwrap().active_area());
    let report = verify_pipeline(PipelineConfig::new_unchecked(12, 5, 4), &stimulus);
    assert!(!report.passed());
    assert!(report.count_mismatches > 0);
    assert!(report.first_mismatch.is_some());
}

#[test]
fn loading_over_multiplexed_design_is_rejected() {
    let json = r#"{ "stages": 12, "multiplex": 5, "phase_capacity": 4 }"#;
    assert!(PipelineConfig::from_json(json).is_err());
}

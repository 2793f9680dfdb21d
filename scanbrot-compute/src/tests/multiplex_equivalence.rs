use super::helpers::run_aligned;
use crate::{raster_stimulus, verify_pipeline};
use scanbrot_core::{ActiveArea, PipelineConfig, Viewport};

fn stimulus() -> Vec<crate::GeneratedPixel> {
    let viewport = Viewport::from_f64(-0.6, 0.1, 1.0 / 12.0).unwrap();
    raster_stimulus(&viewport, ActiveArea::new(36, 24))
}

#[test]
fn sharing_at_capacity_matches_replication() {
    // 6 units time-shared 4 ways vs 24 plain units: same depth, same answers
    let shared = PipelineConfig::new(6, 4, 4).unwrap();
    let replicated = PipelineConfig::new(24, 1, 1).unwrap();
    assert_eq!(shared.depth(), replicated.depth());

    let stimulus = stimulus();
    let a = run_aligned(shared, &stimulus);
    let b = run_aligned(replicated, &stimulus);
    assert_eq!(a.len(), stimulus.len());
    assert_eq!(a, b);
}

#[test]
fn multiplex_above_capacity_is_caught_by_verification() {
    let stimulus = stimulus();
    let report = verify_pipeline(PipelineConfig::new_unchecked(6, 5, 4), &stimulus);
    assert!(!report.passed());
    assert_eq!(report.tag_mismatches, 0, "timing is unaffected");

    // Each unit drops its fifth phase: pixels leave after 24 of 30 iterations
    let mismatch = report.first_mismatch.unwrap();
    assert!(!mismatch.actual.escaped);
    assert!(mismatch.actual.iterations <= mismatch.expected.iterations);
}

#[test]
fn short_batches_cap_interior_counts() {
    let viewport = Viewport::from_f64(-0.2, 0.0, 1.0 / 64.0).unwrap();
    let interior = raster_stimulus(&viewport, ActiveArea::new(4, 4));
    let outputs = run_aligned(PipelineConfig::new_unchecked(3, 3, 2), &interior);
    for out in outputs {
        assert!(!out.escaped);
        // Counter starts at 1, then 3 units x 2 scheduled phases
        assert_eq!(out.iterations, 7);
    }
}

#[test]
fn multiplier_mapping_has_no_behavioral_effect() {
    let stimulus = stimulus();
    let dedicated = PipelineConfig::new(4, 2, 2).unwrap();
    let logic = dedicated.with_dedicated_multipliers(0).unwrap();
    assert_eq!(run_aligned(dedicated, &stimulus), run_aligned(logic, &stimulus));
}

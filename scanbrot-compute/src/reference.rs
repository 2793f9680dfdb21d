//! Golden model: the same iteration with no clocking, units or phases.

use crate::iteration::IterationState;
use scanbrot_core::{Complex, EscapeTime};

/// Escape time of `c` after exactly `depth` logical iterations.
pub fn escape_time(c: Complex, depth: u32) -> EscapeTime {
    let mut state = IterationState::ENTRY;
    for _ in 0..depth {
        state = state.step(c);
    }
    state.escape_time(depth)
}

/// Every intermediate state, entry state first.
pub fn trajectory(c: Complex, depth: u32) -> Vec<IterationState> {
    std::iter::successors(Some(IterationState::ENTRY), |s| Some(s.step(c)))
        .take(depth as usize + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_trajectory_end() {
        let c = Complex::from_f64_pair(-0.75, 0.1).unwrap();
        let path = trajectory(c, 100);
        assert_eq!(path.len(), 101);
        let last = path[100];
        assert_eq!(escape_time(c, 100), last.escape_time(100));
    }

    #[test]
    fn far_point_escapes_at_once() {
        let result = escape_time(Complex::from_f64_pair(3.0, 3.0).unwrap(), 50);
        assert!(result.escaped);
        assert_eq!(result.iterations, 1);
    }
}

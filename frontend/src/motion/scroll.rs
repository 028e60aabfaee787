use thiserror::Error;

/// Linear map of `value` from `input` onto `output`, clamped to the ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if !(span.abs() > f64::EPSILON) || !value.is_finite() {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Page scroll offsets between which progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedRegion {
    pub start: f64,
    pub end: f64,
}

impl TrackedRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Region for a section that pins to the viewport: progress starts when
    /// its top reaches the viewport top and ends when its bottom reaches the
    /// viewport bottom.
    pub fn pinned(top_on_page: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            start: top_on_page,
            end: top_on_page + height - viewport_height,
        }
    }

    pub fn progress_ratio(&self, offset: f64) -> f64 {
        let extent = self.end - self.start;
        if !(extent > 0.0) || !offset.is_finite() {
            return 0.0;
        }
        ((offset - self.start) / extent).clamp(0.0, 1.0)
    }

    pub fn observe(&self, offset: f64) -> ScrollObservation {
        ScrollObservation {
            raw_offset: offset,
            progress_ratio: self.progress_ratio(offset),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollObservation {
    pub raw_offset: f64,
    pub progress_ratio: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum BreakpointError {
    #[error("step table needs at least one breakpoint")]
    Empty,
    #[error("breakpoint {index} does not increase on the previous one")]
    NotMonotonic { index: usize },
}

/// Ordered `(threshold, step)` table. A ratio maps to the step of the last
/// breakpoint whose threshold it has reached.
#[derive(Clone, Debug, PartialEq)]
pub struct StepBreakpoints {
    points: Vec<(f64, usize)>,
}

impl StepBreakpoints {
    pub fn new(points: Vec<(f64, usize)>) -> Result<Self, BreakpointError> {
        if points.is_empty() {
            return Err(BreakpointError::Empty);
        }
        for (index, pair) in points.windows(2).enumerate() {
            let ((prev_threshold, prev_step), (threshold, step)) = (pair[0], pair[1]);
            if !(threshold > prev_threshold) || step < prev_step {
                return Err(BreakpointError::NotMonotonic { index: index + 1 });
            }
        }
        Ok(Self { points })
    }

    /// `count` equal bands over `[0, 1]`.
    pub fn even(count: usize) -> Self {
        let count = count.max(1);
        let points = (0..count)
            .map(|step| (step as f64 / count as f64, step))
            .collect();
        Self { points }
    }

    pub fn step_count(&self) -> usize {
        self.points.last().map_or(1, |&(_, step)| step + 1)
    }

    pub fn step_for(&self, ratio: f64) -> usize {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        let reached = self.points.partition_point(|&(threshold, _)| threshold <= ratio);
        let index = reached.saturating_sub(1);
        self.points[index].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ratio_hits_both_boundaries() {
        let region = TrackedRegion::new(1000.0, 4000.0);
        assert_eq!(region.progress_ratio(1000.0), 0.0);
        assert_eq!(region.progress_ratio(4000.0), 1.0);
        assert!(approx(region.progress_ratio(2500.0), 0.5));
    }

    #[test]
    fn ratio_clamps_outside_region() {
        let region = TrackedRegion::new(1000.0, 4000.0);
        assert_eq!(region.progress_ratio(0.0), 0.0);
        assert_eq!(region.progress_ratio(-250.0), 0.0);
        assert_eq!(region.progress_ratio(9000.0), 1.0);
    }

    #[test]
    fn degenerate_region_resolves_to_zero() {
        assert_eq!(TrackedRegion::new(500.0, 500.0).progress_ratio(700.0), 0.0);
        assert_eq!(TrackedRegion::new(800.0, 200.0).progress_ratio(900.0), 0.0);
        assert_eq!(TrackedRegion::new(0.0, 100.0).progress_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn pinned_region_spans_height_minus_viewport() {
        let region = TrackedRegion::pinned(1000.0, 3600.0, 600.0);
        assert_eq!(region, TrackedRegion::new(1000.0, 4000.0));

        // A section no taller than the viewport never makes progress.
        let short = TrackedRegion::pinned(1000.0, 400.0, 600.0);
        assert_eq!(short.progress_ratio(1200.0), 0.0);
    }

    #[test]
    fn steps_follow_ratio_both_ways() {
        let steps = StepBreakpoints::even(5);
        let seen: Vec<usize> = [0.0, 0.3, 0.7, 0.1]
            .iter()
            .map(|&ratio| steps.step_for(ratio))
            .collect();
        assert_eq!(seen, vec![0, 1, 3, 0]);
    }

    #[test]
    fn band_edges_belong_to_the_next_step() {
        let steps = StepBreakpoints::even(5);
        assert_eq!(steps.step_for(0.1999), 0);
        assert_eq!(steps.step_for(0.2), 1);
        assert_eq!(steps.step_for(0.8), 4);
        assert_eq!(steps.step_for(1.0), 4);
        assert_eq!(steps.step_for(7.0), 4);
        assert_eq!(steps.step_for(-1.0), 0);
        assert_eq!(steps.step_count(), 5);
    }

    #[test]
    fn step_is_monotonic_over_a_sweep() {
        let steps = StepBreakpoints::even(5);
        let sweep: Vec<usize> = (0..=1000).map(|i| steps.step_for(i as f64 / 1000.0)).collect();
        assert!(sweep.windows(2).all(|w| w[0] <= w[1]));
        let mut back = sweep.clone();
        back.reverse();
        assert!(back.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn scroll_offsets_map_to_steps() {
        let region = TrackedRegion::new(1000.0, 4000.0);
        let steps = StepBreakpoints::even(5);

        let early = region.observe(1700.0);
        assert!(approx(early.progress_ratio, 0.7 / 3.0));
        assert_eq!(steps.step_for(early.progress_ratio), 1);

        let late = region.observe(3850.0);
        assert!(approx(late.progress_ratio, 0.95));
        assert_eq!(steps.step_for(late.progress_ratio), 4);
        assert_eq!(late.raw_offset, 3850.0);
    }

    #[test]
    fn custom_table_pads_outer_bands() {
        let steps = StepBreakpoints::new(vec![
            (0.0, 0),
            (0.25, 1),
            (0.45, 2),
            (0.6, 3),
            (0.75, 4),
        ])
        .unwrap();
        assert_eq!(steps.step_for(0.24), 0);
        assert_eq!(steps.step_for(0.5), 2);
        assert_eq!(steps.step_for(0.74), 3);
        assert_eq!(steps.step_count(), 5);
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(StepBreakpoints::new(vec![]), Err(BreakpointError::Empty));
        assert_eq!(
            StepBreakpoints::new(vec![(0.0, 0), (0.5, 1), (0.4, 2)]),
            Err(BreakpointError::NotMonotonic { index: 2 })
        );
        assert_eq!(
            StepBreakpoints::new(vec![(0.0, 1), (0.5, 0)]),
            Err(BreakpointError::NotMonotonic { index: 1 })
        );
    }

    #[test]
    fn interpolate_clamps_and_handles_flat_input() {
        assert_eq!(interpolate(0.0, (0.0, 500.0), (1.0, 0.0)), 1.0);
        assert!(approx(interpolate(250.0, (0.0, 500.0), (1.0, 0.0)), 0.5));
        assert_eq!(interpolate(900.0, (0.0, 500.0), (1.0, 0.0)), 0.0);
        assert!(approx(interpolate(100.0, (0.0, 500.0), (1.0, 0.95)), 0.99));
        assert_eq!(interpolate(10.0, (3.0, 3.0), (4.0, 8.0)), 4.0);
    }
}

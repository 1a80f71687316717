//! Piecewise-linear mapping from scroll progress to hero stage styling.
//!
//! The hero partitions the first third of the page's scroll range into three
//! stages with short crossfade overlaps. Each visual parameter is a track of
//! `(threshold, value)` breakpoints evaluated against the same progress
//! signal, so the whole animation is a pure function of one float.

/// A `(progress threshold, output value)` interpolation anchor. Thresholds
/// must be listed in ascending order.
pub type Breakpoint = (f64, f64);

/// Interpolates linearly between consecutive breakpoints, clamping to the
/// first/last output outside the covered range. Progress landing exactly on
/// a threshold yields that breakpoint's value.
pub fn interpolate(progress: f64, points: &[Breakpoint]) -> f64 {
    let Some(&(first_at, first)) = points.first() else {
        return 0.0;
    };
    if progress <= first_at {
        return first;
    }
    for pair in points.windows(2) {
        let (from_at, from) = pair[0];
        let (to_at, to) = pair[1];
        if progress <= to_at {
            // Exact on the anchor itself, no float round-trip.
            if progress == to_at || to_at == from_at {
                return to;
            }
            let t = (progress - from_at) / (to_at - from_at);
            return from + (to - from) * t;
        }
    }
    points.last().map(|&(_, last)| last).unwrap_or(first)
}

/// Resolved visual parameters for one hero stage at a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageStyle {
    pub opacity: f64,
    pub scale: f64,
    /// Vertical shift in pixels, positive pushing the layer down.
    pub shift: f64,
}

impl StageStyle {
    /// Renders the style as an inline CSS fragment for the stage layer.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px) scale({:.4});",
            self.opacity, self.shift, self.scale
        )
    }
}

/// Breakpoint tracks for one hero stage.
pub struct StageTrack {
    pub opacity: &'static [Breakpoint],
    pub scale: &'static [Breakpoint],
    pub shift: &'static [Breakpoint],
}

impl StageTrack {
    pub fn at(&self, progress: f64) -> StageStyle {
        StageStyle {
            opacity: interpolate(progress, self.opacity),
            scale: interpolate(progress, self.scale),
            shift: interpolate(progress, self.shift),
        }
    }
}

const HOLD_SCALE: &[Breakpoint] = &[(0.0, 1.0)];
const HOLD_SHIFT: &[Breakpoint] = &[(0.0, 0.0)];

/// Stage 1, "Human-Centric Philosophy": visible from the top, shrinking away
/// over the first tenth of the page.
pub const STAGE_PHILOSOPHY: StageTrack = StageTrack {
    opacity: &[(0.0, 1.0), (0.05, 1.0), (0.1, 0.0)],
    scale: &[(0.0, 1.0), (0.1, 0.8)],
    shift: HOLD_SHIFT,
};

/// Stage 2, "Spatial Vision": rises through the middle window.
pub const STAGE_VISION: StageTrack = StageTrack {
    opacity: &[(0.1, 0.0), (0.15, 1.0), (0.2, 0.0)],
    scale: HOLD_SCALE,
    shift: &[(0.1, 50.0), (0.15, 0.0), (0.2, -50.0)],
};

/// Stage 3, "The Future of Intelligence": settles from a zoomed-in start.
pub const STAGE_FUTURE: StageTrack = StageTrack {
    opacity: &[(0.2, 0.0), (0.25, 1.0), (0.3, 0.0)],
    scale: &[(0.2, 1.2), (0.3, 1.0)],
    shift: HOLD_SHIFT,
};

#[cfg(test)]
mod tests {
    use super::*;

    const HERO_STAGES: [&StageTrack; 3] = [&STAGE_PHILOSOPHY, &STAGE_VISION, &STAGE_FUTURE];
    const TRACK: &[Breakpoint] = &[(0.1, 0.0), (0.15, 1.0), (0.2, 0.0)];

    #[test]
    fn boundary_values_are_exact() {
        assert_eq!(interpolate(0.1, TRACK), 0.0);
        assert_eq!(interpolate(0.15, TRACK), 1.0);
        assert_eq!(interpolate(0.2, TRACK), 0.0);
    }

    #[test]
    fn out_of_range_progress_clamps() {
        assert_eq!(interpolate(-1.0, TRACK), 0.0);
        assert_eq!(interpolate(0.0, TRACK), 0.0);
        assert_eq!(interpolate(0.9, TRACK), 0.0);
        assert_eq!(interpolate(2.0, TRACK), 0.0);

        let ramp = [(0.0, 1.0), (0.1, 0.8)];
        assert_eq!(interpolate(0.5, &ramp), 0.8);
    }

    #[test]
    fn segments_interpolate_linearly() {
        assert!((interpolate(0.125, TRACK) - 0.5).abs() < 1e-12);
        assert!((interpolate(0.175, TRACK) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn segments_never_overshoot() {
        // Within a segment the output stays between its endpoints and moves
        // in one direction.
        let mut prev = interpolate(0.1, TRACK);
        let mut p: f64 = 0.1;
        while p < 0.15 {
            p += 0.001;
            let next = interpolate(p.min(0.15), TRACK);
            assert!(next >= prev - 1e-12);
            assert!((0.0..=1.0).contains(&next));
            prev = next;
        }
        while p < 0.2 {
            p += 0.001;
            let next = interpolate(p.min(0.2), TRACK);
            assert!(next <= prev + 1e-12);
            assert!((0.0..=1.0).contains(&next));
            prev = next;
        }
    }

    #[test]
    fn empty_track_defaults_to_zero() {
        assert_eq!(interpolate(0.5, &[]), 0.0);
    }

    #[test]
    fn exactly_one_stage_dominates_outside_crossfades() {
        // Sample the whole progress range; away from the short overlap
        // windows a single stage's opacity must strictly lead.
        let crossfades = [(0.075, 0.125), (0.175, 0.225), (0.275, 0.325)];
        let mut p = 0.0;
        while p <= 1.0 {
            let in_crossfade = crossfades
                .iter()
                .any(|&(lo, hi)| p >= lo && p <= hi);
            if !in_crossfade && p < 0.3 {
                let opacities: Vec<f64> =
                    HERO_STAGES.iter().map(|s| s.at(p).opacity).collect();
                let max = opacities.iter().cloned().fold(f64::MIN, f64::max);
                let leaders = opacities.iter().filter(|&&o| o >= max - 1e-9).count();
                assert_eq!(leaders, 1, "no single dominant stage at progress {p}");
            }
            p += 0.005;
        }
    }

    #[test]
    fn hold_tracks_stay_constant() {
        for p in [0.0, 0.3, 0.7, 1.0] {
            assert_eq!(interpolate(p, HOLD_SHIFT), 0.0);
            assert_eq!(interpolate(p, HOLD_SCALE), 1.0);
        }
    }

    #[test]
    fn style_renders_inline_css() {
        let css = STAGE_VISION.at(0.15).css();
        assert!(css.contains("opacity: 1.0000"));
        assert!(css.contains("translateY(0.00px)"));
    }
}

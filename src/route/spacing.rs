use crate::config::RoutingConfig;

/// Zoom-responsive spacing between parallel cables fanned along one edge.
///
/// Returns 0 when there is nothing to separate (`count <= 1`) or when the
/// zoom sits below the fan-out threshold, so zoomed-out views render cable
/// groups coincident. Above the threshold the zoom is normalized over
/// `[zoom_threshold, max_zoom_effect]`, eased with a smoothstep so the
/// spread neither snaps in at the threshold nor keeps growing past max
/// zoom, and finally capped at `edge_length / (count + 1)` so the fan never
/// escapes the physical edge.
pub(super) fn fan_spacing(config: &RoutingConfig, k: f32, count: usize, edge_length: f32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    if k < config.zoom_threshold {
        return 0.0;
    }
    let normalized =
        ((k - config.zoom_threshold) / (config.max_zoom_effect - config.zoom_threshold)).min(1.0);
    let eased = normalized * normalized * (3.0 - 2.0 * normalized);
    let zoom_based = config.min_spacing + config.base_spacing * eased;
    let edge_cap = edge_length / (count as f32 + 1.0);
    zoom_based.min(edge_cap)
}

/// Length of the perpendicular stub a route uses to leave or enter a node.
/// Grows gently with zoom so stubs stay visible but short.
pub(super) fn stub_extension(config: &RoutingConfig, k: f32) -> f32 {
    config.stub_base + config.stub_zoom_ratio * k
}

/// Gap between neighbouring cables riding the same channel. Channels have
/// no edge to center within, so this is an absolute per-zoom gap rather
/// than an edge-capped spacing.
pub(super) fn channel_gap(config: &RoutingConfig, k: f32) -> f32 {
    config.channel_gap_base + config.channel_gap_zoom_ratio * k
}

/// Offset of cable `index` (0-based, group of `count`) from the channel
/// centerline. Even-sized groups straddle the centerline in symmetric
/// pairs; odd-sized groups seat index 0 on the centerline and alternate the
/// rest outward.
pub(super) fn channel_offset(gap: f32, index: usize, count: usize) -> f32 {
    if count % 2 == 0 {
        let step = (index / 2) as f32 + 0.5;
        if index % 2 == 0 { -gap * step } else { gap * step }
    } else if index == 0 {
        0.0
    } else {
        let step = index.div_ceil(2) as f32;
        if index % 2 == 1 { -gap * step } else { gap * step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RoutingConfig {
        RoutingConfig::default()
    }

    #[test]
    fn zero_for_single_cable() {
        assert_eq!(fan_spacing(&config(), 2.0, 1, 80.0), 0.0);
        assert_eq!(fan_spacing(&config(), 2.0, 0, 80.0), 0.0);
    }

    #[test]
    fn zero_below_zoom_threshold() {
        assert_eq!(fan_spacing(&config(), 0.49, 4, 80.0), 0.0);
    }

    #[test]
    fn grows_monotonically_with_zoom_until_edge_cap() {
        let cfg = config();
        // Wide edge so the cap never engages.
        let mut last = 0.0;
        for step in 0..=25 {
            let k = 0.5 + step as f32 * 0.1;
            let s = fan_spacing(&cfg, k, 3, 10_000.0);
            assert!(s >= last, "spacing regressed at k={k}: {s} < {last}");
            last = s;
        }
        // Saturates at min + base once k exceeds max_zoom_effect.
        let saturated = fan_spacing(&cfg, cfg.max_zoom_effect, 3, 10_000.0);
        assert_eq!(fan_spacing(&cfg, cfg.max_zoom_effect + 5.0, 3, 10_000.0), saturated);
        assert!((saturated - (cfg.min_spacing + cfg.base_spacing)).abs() < 1e-4);
    }

    #[test]
    fn capped_by_edge_length() {
        let cfg = config();
        // At full zoom with a short edge only the cap matters.
        let s = fan_spacing(&cfg, 3.0, 3, 80.0);
        assert_eq!(s, 80.0 / 4.0);
        // Further zoom has no effect past the cap.
        assert_eq!(fan_spacing(&cfg, 10.0, 3, 80.0), s);
    }

    #[test]
    fn stub_grows_with_zoom() {
        let cfg = config();
        assert!((stub_extension(&cfg, 1.0) - 3.0).abs() < 1e-6);
        assert!(stub_extension(&cfg, 2.0) > stub_extension(&cfg, 1.0));
    }

    #[test]
    fn channel_offsets_even_count_straddle_centerline() {
        let gap = 7.0;
        let offsets: Vec<f32> = (0..4).map(|i| channel_offset(gap, i, 4)).collect();
        assert_eq!(offsets, vec![-3.5, 3.5, -10.5, 10.5]);
        // Pairs are symmetric and nothing sits on the centerline.
        assert!(offsets.iter().all(|o| o.abs() > 0.0));
    }

    #[test]
    fn channel_offsets_odd_count_seat_first_on_centerline() {
        let gap = 7.0;
        let offsets: Vec<f32> = (0..5).map(|i| channel_offset(gap, i, 5)).collect();
        assert_eq!(offsets, vec![0.0, -7.0, 7.0, -14.0, 14.0]);
    }
}

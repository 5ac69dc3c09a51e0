use crate::config::RoutingConfig;

use super::spacing::fan_spacing;
use super::types::{EdgeSide, NodeGeometry};

/// Concrete connection points for a fan of `count` cables on one node edge,
/// centered on the edge midpoint and ordered by slot. With fan spacing at
/// zero every point collapses onto the midpoint.
pub(super) fn edge_connection_points(
    config: &RoutingConfig,
    node: &NodeGeometry,
    side: EdgeSide,
    count: usize,
    k: f32,
) -> Vec<(f32, f32)> {
    let spacing = fan_spacing(config, k, count, node.edge_length(side));
    let (mx, my) = node.edge_midpoint(side);
    let half = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|slot| {
            let offset = (slot as f32 - half) * spacing;
            if side.is_vertical() {
                (mx, my + offset)
            } else {
                (mx + offset, my)
            }
        })
        .collect()
}

/// Safe point one stub length out from a connection point, perpendicular to
/// the edge it sits on. First and last bends of every route go through
/// these so cables always leave a node straight.
pub(super) fn stub_point(conn: (f32, f32), side: EdgeSide, extension: f32) -> (f32, f32) {
    match side {
        EdgeSide::Top => (conn.0, conn.1 - extension),
        EdgeSide::Bottom => (conn.0, conn.1 + extension),
        EdgeSide::Left => (conn.0 - extension, conn.1),
        EdgeSide::Right => (conn.0 + extension, conn.1),
    }
}

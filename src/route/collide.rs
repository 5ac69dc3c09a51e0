use super::types::NodeGeometry;

const AXIS_EPS: f32 = 1e-4;

/// Whether an axis-aligned segment crosses a node rectangle. Touching the
/// boundary counts; non-axis-aligned segments never match.
pub(super) fn segment_intersects_rect(
    start: (f32, f32),
    end: (f32, f32),
    rect: &NodeGeometry,
) -> bool {
    if (start.1 - end.1).abs() <= AXIS_EPS {
        let y = start.1;
        let min_x = start.0.min(end.0);
        let max_x = start.0.max(end.0);
        if y >= rect.y && y <= rect.bottom() && max_x >= rect.x && min_x <= rect.right() {
            return true;
        }
    }
    if (start.0 - end.0).abs() <= AXIS_EPS {
        let x = start.0;
        let min_y = start.1.min(end.1);
        let max_y = start.1.max(end.1);
        if x >= rect.x && x <= rect.right() && max_y >= rect.y && min_y <= rect.bottom() {
            return true;
        }
    }
    false
}

/// Two replacement bends steering a colliding segment around a node, a
/// fixed margin outside whichever side of the rectangle the segment enters
/// from. Returns `None` for degenerate segments.
fn detour_for_segment(
    start: (f32, f32),
    end: (f32, f32),
    rect: &NodeGeometry,
    margin: f32,
) -> Option<[(f32, f32); 2]> {
    if (start.1 - end.1).abs() <= AXIS_EPS && (start.0 - end.0).abs() > AXIS_EPS {
        let detour_y = if start.1 <= rect.cy() {
            rect.y - margin
        } else {
            rect.bottom() + margin
        };
        Some([(start.0, detour_y), (end.0, detour_y)])
    } else if (start.0 - end.0).abs() <= AXIS_EPS && (start.1 - end.1).abs() > AXIS_EPS {
        let detour_x = if start.0 <= rect.cx() {
            rect.x - margin
        } else {
            rect.right() + margin
        };
        Some([(detour_x, start.1), (detour_x, end.1)])
    } else {
        None
    }
}

/// Single-sweep collision pass: walks the polyline once and, whenever a
/// segment crosses a node that is not one of the cable's endpoints, splices
/// in a detour around it. Best effort; the detour segments themselves are
/// not re-checked.
pub(super) fn adjust_route_for_collisions(
    route: &[(f32, f32)],
    endpoints: &[usize],
    nodes: &[NodeGeometry],
    margin: f32,
) -> Vec<(f32, f32)> {
    let Some(&first) = route.first() else {
        return Vec::new();
    };
    let mut adjusted = vec![first];
    for &segment_end in &route[1..] {
        let mut segment_start = adjusted[adjusted.len() - 1];
        for (idx, node) in nodes.iter().enumerate() {
            if endpoints.contains(&idx) {
                continue;
            }
            if segment_intersects_rect(segment_start, segment_end, node) {
                if let Some(bends) = detour_for_segment(segment_start, segment_end, node, margin) {
                    adjusted.push(bends[0]);
                    adjusted.push(bends[1]);
                    segment_start = bends[1];
                }
            }
        }
        adjusted.push(segment_end);
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Node;

    fn geometry(x: f32, y: f32, width: f32, height: f32) -> NodeGeometry {
        NodeGeometry::from_node(&Node {
            id: "n".to_string(),
            x,
            y,
            width,
            height,
        })
    }

    #[test]
    fn horizontal_segment_through_rect_intersects() {
        let rect = geometry(100.0, 100.0, 80.0, 80.0);
        assert!(segment_intersects_rect((0.0, 140.0), (300.0, 140.0), &rect));
        assert!(!segment_intersects_rect((0.0, 90.0), (300.0, 90.0), &rect));
        assert!(!segment_intersects_rect((0.0, 140.0), (90.0, 140.0), &rect));
    }

    #[test]
    fn vertical_segment_through_rect_intersects() {
        let rect = geometry(100.0, 100.0, 80.0, 80.0);
        assert!(segment_intersects_rect((140.0, 0.0), (140.0, 300.0), &rect));
        assert!(!segment_intersects_rect((90.0, 0.0), (90.0, 300.0), &rect));
    }

    #[test]
    fn boundary_touch_counts_as_intersection() {
        let rect = geometry(100.0, 100.0, 80.0, 80.0);
        assert!(segment_intersects_rect((0.0, 100.0), (300.0, 100.0), &rect));
        assert!(segment_intersects_rect((180.0, 0.0), (180.0, 300.0), &rect));
    }

    #[test]
    fn detour_goes_above_when_segment_enters_high() {
        let rect = geometry(100.0, 100.0, 80.0, 80.0);
        let bends = detour_for_segment((0.0, 120.0), (300.0, 120.0), &rect, 5.0).unwrap();
        assert_eq!(bends, [(0.0, 95.0), (300.0, 95.0)]);
        let bends = detour_for_segment((0.0, 160.0), (300.0, 160.0), &rect, 5.0).unwrap();
        assert_eq!(bends, [(0.0, 185.0), (300.0, 185.0)]);
    }

    #[test]
    fn adjusted_route_clears_blocking_node() {
        let blocker = geometry(100.0, 100.0, 80.0, 80.0);
        let nodes = vec![
            geometry(-80.0, 120.0, 40.0, 40.0),
            blocker,
            geometry(300.0, 120.0, 40.0, 40.0),
        ];
        let route = vec![(-40.0, 140.0), (300.0, 140.0)];
        let adjusted = adjust_route_for_collisions(&route, &[0, 2], &nodes, 5.0);
        assert_eq!(adjusted.len(), 4);
        assert_eq!(adjusted[0], (-40.0, 140.0));
        assert_eq!(adjusted[3], (300.0, 140.0));
        // Detour rides 5 units above the blocker's top edge.
        assert_eq!(adjusted[1].1, 95.0);
        assert_eq!(adjusted[2].1, 95.0);
    }

    #[test]
    fn endpoint_nodes_are_exempt() {
        let nodes = vec![geometry(0.0, 100.0, 80.0, 80.0), geometry(200.0, 100.0, 80.0, 80.0)];
        let route = vec![(80.0, 140.0), (200.0, 140.0)];
        let adjusted = adjust_route_for_collisions(&route, &[0, 1], &nodes, 5.0);
        assert_eq!(adjusted, route);
    }
}

use super::ports::stub_point;
use super::types::{EdgeSide, NodeGeometry};

/// Builds the six-point Manhattan polyline for one direct cable:
/// connection, stub, two intermediate bends, stub, connection.
///
/// Opposing edges get a shared mid-span bend row shifted by the cable's
/// lateral `offset`, which fans parallel cables apart between the nodes.
/// Non-opposing edges get a staircase through the midpoint between node
/// centers; the fan there comes from the connection points alone.
pub(super) fn synthesize(
    source_conn: (f32, f32),
    target_conn: (f32, f32),
    source_side: EdgeSide,
    target_side: EdgeSide,
    source: &NodeGeometry,
    target: &NodeGeometry,
    extension: f32,
    offset: f32,
) -> Vec<(f32, f32)> {
    let source_stub = stub_point(source_conn, source_side, extension);
    let target_stub = stub_point(target_conn, target_side, extension);

    let (bend_a, bend_b) = if target_side == source_side.opposite() {
        if source_side.is_vertical() {
            let inter_x = (source_stub.0 + target_stub.0) / 2.0 + offset;
            ((inter_x, source_stub.1), (inter_x, target_stub.1))
        } else {
            let inter_y = (source_stub.1 + target_stub.1) / 2.0 + offset;
            ((source_stub.0, inter_y), (target_stub.0, inter_y))
        }
    } else if source_side.is_vertical() {
        let mid_x = (source.cx() + target.cx()) / 2.0;
        ((mid_x, source_stub.1), (mid_x, target_stub.1))
    } else {
        let mid_y = (source.cy() + target.cy()) / 2.0;
        ((source_stub.0, mid_y), (target_stub.0, mid_y))
    };

    vec![source_conn, source_stub, bend_a, bend_b, target_stub, target_conn]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Node;

    fn geometry(id: &str, x: f32, y: f32) -> NodeGeometry {
        NodeGeometry::from_node(&Node {
            id: id.to_string(),
            x,
            y,
            width: 80.0,
            height: 80.0,
        })
    }

    fn assert_axis_aligned(points: &[(f32, f32)]) {
        for pair in points.windows(2) {
            let same_x = (pair[0].0 - pair[1].0).abs() < 1e-4;
            let same_y = (pair[0].1 - pair[1].1).abs() < 1e-4;
            assert!(same_x || same_y, "diagonal segment {:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn opposing_vertical_route_shares_a_bend_row() {
        let a = geometry("A", 400.0, 100.0);
        let b = geometry("B", 200.0, 300.0);
        let route = synthesize(
            (440.0, 180.0),
            (240.0, 300.0),
            EdgeSide::Bottom,
            EdgeSide::Top,
            &a,
            &b,
            3.0,
            0.0,
        );
        assert_eq!(route.len(), 6);
        assert_eq!(route[0], (440.0, 180.0));
        assert_eq!(route[5], (240.0, 300.0));
        assert_eq!(route[1], (440.0, 183.0));
        assert_eq!(route[4], (240.0, 297.0));
        // Intermediate bends sit on one horizontal row halfway between stubs.
        assert_eq!(route[2].1, route[3].1);
        assert!((route[2].1 - 240.0).abs() < 1e-3);
        assert_axis_aligned(&route);
    }

    #[test]
    fn lateral_offset_shifts_the_bend_row() {
        let a = geometry("A", 400.0, 100.0);
        let b = geometry("B", 200.0, 300.0);
        let base = synthesize(
            (440.0, 180.0),
            (240.0, 300.0),
            EdgeSide::Bottom,
            EdgeSide::Top,
            &a,
            &b,
            3.0,
            0.0,
        );
        let shifted = synthesize(
            (430.0, 180.0),
            (230.0, 300.0),
            EdgeSide::Bottom,
            EdgeSide::Top,
            &a,
            &b,
            3.0,
            -9.0,
        );
        assert!((shifted[2].1 - (base[2].1 - 9.0)).abs() < 1e-3);
        assert_axis_aligned(&shifted);
    }

    #[test]
    fn opposing_horizontal_route_shares_a_bend_column() {
        let a = geometry("A", 0.0, 0.0);
        let b = geometry("B", 400.0, 40.0);
        let route = synthesize(
            (80.0, 40.0),
            (400.0, 80.0),
            EdgeSide::Right,
            EdgeSide::Left,
            &a,
            &b,
            5.0,
            0.0,
        );
        assert_eq!(route[2].0, route[3].0);
        assert!((route[2].0 - 240.0).abs() < 1e-3);
        assert_axis_aligned(&route);
    }

    #[test]
    fn non_opposing_edges_get_a_staircase() {
        let a = geometry("A", 0.0, 0.0);
        let b = geometry("B", 300.0, 300.0);
        let route = synthesize(
            (40.0, 80.0),
            (300.0, 340.0),
            EdgeSide::Bottom,
            EdgeSide::Left,
            &a,
            &b,
            3.0,
            0.0,
        );
        assert_eq!(route.len(), 6);
        // Bends ride the horizontal mid-row between node centers.
        assert!((route[2].1 - 190.0).abs() < 1e-3);
        assert!((route[3].1 - 190.0).abs() < 1e-3);
        assert_eq!(route[2].0, route[1].0);
        assert_eq!(route[3].0, route[4].0);
        assert_axis_aligned(&route);
    }
}

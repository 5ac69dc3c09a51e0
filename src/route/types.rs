use std::collections::BTreeMap;

use crate::topology::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl EdgeSide {
    /// True for sides whose edge runs vertically (ports fan along y).
    pub fn is_vertical(self) -> bool {
        matches!(self, EdgeSide::Left | EdgeSide::Right)
    }

    pub fn opposite(self) -> EdgeSide {
        match self {
            EdgeSide::Left => EdgeSide::Right,
            EdgeSide::Right => EdgeSide::Left,
            EdgeSide::Top => EdgeSide::Bottom,
            EdgeSide::Bottom => EdgeSide::Top,
        }
    }
}

/// Immutable per-node geometry, computed once per routing pass so edge
/// lengths and centers are never re-derived downstream.
#[derive(Debug, Clone, Copy)]
pub struct NodeGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NodeGeometry {
    pub fn from_node(node: &Node) -> Self {
        Self {
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
        }
    }

    pub fn cx(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn cy(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Length of the given edge, i.e. the span available for fanning ports.
    pub fn edge_length(&self, side: EdgeSide) -> f32 {
        if side.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Midpoint of the given edge, the collapse point when fan-out is off.
    pub fn edge_midpoint(&self, side: EdgeSide) -> (f32, f32) {
        match side {
            EdgeSide::Left => (self.x, self.cy()),
            EdgeSide::Right => (self.right(), self.cy()),
            EdgeSide::Top => (self.cx(), self.y),
            EdgeSide::Bottom => (self.cx(), self.bottom()),
        }
    }
}

/// One routed cable: the orthogonal polyline plus the pass-through display
/// color. The first and last points lie on the endpoint node boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct CableRoute {
    pub color: String,
    pub points: Vec<(f32, f32)>,
}

/// Routing output keyed by cable id. Cables with invalid waypoint paths are
/// absent from the map.
pub type RouteMap = BTreeMap<String, CableRoute>;

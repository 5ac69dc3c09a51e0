use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed axis-aligned rectangle acting as a cable endpoint and as an
/// obstacle for cables routed past it. Positions are canvas coordinates
/// before the zoom/pan transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrientation {
    Horizontal,
    Vertical,
}

/// An unbounded routing bus cables may pass through between two node
/// endpoints. `position` is a y coordinate for horizontal channels and an
/// x coordinate for vertical ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub orientation: ChannelOrientation,
    pub position: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_cable_color() -> String {
    "#999".to_string()
}

/// A connector with an ordered waypoint path and a display color. Valid
/// paths are `[node, node]` or `[node, channel, node]`; anything else is
/// skipped during routing with a diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cable {
    pub id: String,
    pub path: Vec<String>,
    #[serde(default = "default_cable_color")]
    pub color: String,
}

/// The scale/translate transform produced by the pan-zoom collaborator.
/// Only `k` affects routing; the translation is applied at render time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomState {
    pub k: f32,
    #[serde(default)]
    pub translate_x: f32,
    #[serde(default)]
    pub translate_y: f32,
}

impl ZoomState {
    pub fn identity() -> Self {
        Self {
            k: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    pub fn with_scale(k: f32) -> Self {
        Self {
            k,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Full routing input: three insertion-ordered sequences. The engine never
/// mutates a topology; routes are recomputed from scratch on every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub cables: Vec<Cable>,
}

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("invalid topology JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
    #[error("duplicate channel id `{0}`")]
    DuplicateChannel(String),
    #[error("node id `{0}` is also a channel id")]
    AmbiguousId(String),
    #[error("duplicate cable id `{0}`")]
    DuplicateCable(String),
}

impl Topology {
    pub fn from_json(input: &str) -> Result<Self, TopologyError> {
        let topology: Topology = serde_json::from_str(input)?;
        topology.validate()?;
        Ok(topology)
    }

    /// Identifier uniqueness is a hard input error: duplicate ids would make
    /// waypoint resolution ambiguous, unlike dangling references, which only
    /// skip the offending cable.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(TopologyError::DuplicateNode(node.id.clone()));
            }
        }
        let mut channel_ids = HashSet::new();
        for channel in &self.channels {
            if !channel_ids.insert(channel.id.as_str()) {
                return Err(TopologyError::DuplicateChannel(channel.id.clone()));
            }
            if node_ids.contains(channel.id.as_str()) {
                return Err(TopologyError::AmbiguousId(channel.id.clone()));
            }
        }
        let mut cable_ids = HashSet::new();
        for cable in &self.cables {
            if !cable_ids.insert(cable.id.as_str()) {
                return Err(TopologyError::DuplicateCable(cable.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_topology() {
        let input = r#"{
            "nodes": [
                { "id": "A", "x": 400, "y": 100, "width": 80, "height": 80 },
                { "id": "B", "x": 200, "y": 300, "width": 80, "height": 80 }
            ],
            "channels": [
                { "id": "bus", "orientation": "horizontal", "position": 50, "label": "Bus" }
            ],
            "cables": [
                { "id": "c1", "path": ["A", "B"], "color": "blue" },
                { "id": "c2", "path": ["A", "bus", "B"] }
            ]
        }"#;
        let topology = Topology::from_json(input).unwrap();
        assert_eq!(topology.nodes.len(), 2);
        assert_eq!(topology.channels[0].orientation, ChannelOrientation::Horizontal);
        assert_eq!(topology.cables[1].color, "#999");
    }

    #[test]
    fn empty_input_is_valid() {
        let topology = Topology::from_json("{}").unwrap();
        assert!(topology.nodes.is_empty());
        assert!(topology.cables.is_empty());
    }

    #[test]
    fn rejects_duplicate_node_id() {
        let input = r#"{
            "nodes": [
                { "id": "A", "x": 0, "y": 0, "width": 10, "height": 10 },
                { "id": "A", "x": 50, "y": 0, "width": 10, "height": 10 }
            ]
        }"#;
        assert!(matches!(
            Topology::from_json(input),
            Err(TopologyError::DuplicateNode(id)) if id == "A"
        ));
    }

    #[test]
    fn rejects_channel_shadowing_node() {
        let input = r#"{
            "nodes": [ { "id": "A", "x": 0, "y": 0, "width": 10, "height": 10 } ],
            "channels": [ { "id": "A", "orientation": "vertical", "position": 5 } ]
        }"#;
        assert!(matches!(
            Topology::from_json(input),
            Err(TopologyError::AmbiguousId(id)) if id == "A"
        ));
    }
}

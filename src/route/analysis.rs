use std::collections::HashMap;

use tracing::warn;

use crate::topology::{ChannelOrientation, Topology};

use super::types::{EdgeSide, NodeGeometry};

/// A waypoint id resolved once against the topology, instead of re-sniffing
/// id strings at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Waypoint {
    Node(usize),
    Channel(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CableRole {
    Source,
    Target,
}

/// What sits at the far end of a cable, seen from one of its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FarEnd {
    Node(usize),
    Channel { channel: usize, node: usize },
}

#[derive(Debug, Clone, Copy)]
pub(super) struct AssignedSlot {
    pub cable: usize,
    /// Fan slot on this edge; slots are shared group-wide.
    pub slot: usize,
    pub role: CableRole,
    pub far: FarEnd,
}

/// Ordered fan group on one node edge. Built once per pass and discarded;
/// the allocator turns each assignment into concrete connection points.
#[derive(Debug, Clone)]
pub(super) struct EdgeAssignment {
    pub node: usize,
    pub side: EdgeSide,
    /// Total fan slots, which can exceed `cables.len()` for channel groups
    /// whose members attach to different nodes.
    pub slots: usize,
    pub cables: Vec<AssignedSlot>,
}

/// All cables between one unordered node pair. Source/target roles follow
/// the first declared cable of the group; later cables declared the other
/// way around share the same fan.
#[derive(Debug, Clone)]
pub(super) struct DirectGroup {
    pub source: usize,
    pub target: usize,
    pub vertical: bool,
    pub source_side: EdgeSide,
    pub target_side: EdgeSide,
    /// Cable indices in declaration order.
    pub cables: Vec<usize>,
    pub source_assignment: usize,
    pub target_assignment: usize,
}

#[derive(Debug, Clone)]
pub(super) struct ChannelCable {
    pub cable: usize,
    pub source: usize,
    pub target: usize,
    pub source_side: EdgeSide,
    pub target_side: EdgeSide,
    /// Position within the whole channel group; sizes the node-edge fans.
    pub slot: usize,
    pub source_assignment: usize,
    pub target_assignment: usize,
}

/// All cables riding one channel, in declaration order.
#[derive(Debug, Clone)]
pub(super) struct ChannelGroup {
    pub channel: usize,
    pub cables: Vec<ChannelCable>,
}

#[derive(Debug, Clone, Default)]
pub(super) struct Analysis {
    pub direct: Vec<DirectGroup>,
    pub channels: Vec<ChannelGroup>,
    pub assignments: Vec<EdgeAssignment>,
}

/// Dominant connection orientation between two node centers. Vertical wins
/// exact ties; this is a documented contract, not an accident.
pub(super) fn dominant_is_vertical(source: &NodeGeometry, target: &NodeGeometry) -> bool {
    let dx = target.cx() - source.cx();
    let dy = target.cy() - source.cy();
    dy.abs() >= dx.abs()
}

fn direct_sides(source: &NodeGeometry, target: &NodeGeometry, vertical: bool) -> (EdgeSide, EdgeSide) {
    if vertical {
        if source.cy() < target.cy() {
            (EdgeSide::Bottom, EdgeSide::Top)
        } else {
            (EdgeSide::Top, EdgeSide::Bottom)
        }
    } else if source.cx() < target.cx() {
        (EdgeSide::Right, EdgeSide::Left)
    } else {
        (EdgeSide::Left, EdgeSide::Right)
    }
}

/// Node edge facing a channel: whichever side of the node the channel line
/// passes on, compared against the node's near corner.
pub(super) fn channel_facing_side(
    orientation: ChannelOrientation,
    position: f32,
    node: &NodeGeometry,
) -> EdgeSide {
    match orientation {
        ChannelOrientation::Horizontal => {
            if position < node.y {
                EdgeSide::Top
            } else {
                EdgeSide::Bottom
            }
        }
        ChannelOrientation::Vertical => {
            if position < node.x {
                EdgeSide::Left
            } else {
                EdgeSide::Right
            }
        }
    }
}

/// Classifies every cable as direct or channel-routed, groups fans, and
/// builds the transient per-edge assignment registry. Cables with invalid
/// waypoint paths or dangling ids are skipped with a diagnostic; the pass
/// itself never fails.
pub(super) fn analyze(topology: &Topology, geometry: &[NodeGeometry]) -> Analysis {
    let node_index: HashMap<&str, usize> = topology
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id.as_str(), idx))
        .collect();
    let channel_index: HashMap<&str, usize> = topology
        .channels
        .iter()
        .enumerate()
        .map(|(idx, channel)| (channel.id.as_str(), idx))
        .collect();
    let resolve = |id: &str| -> Option<Waypoint> {
        if let Some(&idx) = node_index.get(id) {
            Some(Waypoint::Node(idx))
        } else {
            channel_index.get(id).map(|&idx| Waypoint::Channel(idx))
        }
    };

    // Group membership in declaration order; group order is first-seen.
    let mut direct_order: Vec<(usize, usize)> = Vec::new();
    let mut direct_members: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    let mut channel_order: Vec<usize> = Vec::new();
    let mut channel_members: HashMap<usize, Vec<(usize, usize, usize)>> = HashMap::new();

    for (cable_idx, cable) in topology.cables.iter().enumerate() {
        match cable.path.as_slice() {
            [a, b] => match (resolve(a), resolve(b)) {
                (Some(Waypoint::Node(source)), Some(Waypoint::Node(target))) => {
                    let key = (source.min(target), source.max(target));
                    let members = direct_members.entry(key).or_insert_with(|| {
                        direct_order.push(key);
                        Vec::new()
                    });
                    members.push(cable_idx);
                }
                (None, _) | (_, None) => {
                    warn!(cable = %cable.id, "skipping cable: unknown waypoint id");
                }
                _ => {
                    warn!(cable = %cable.id, "skipping cable: direct paths must join two nodes");
                }
            },
            [a, via, b] => match (resolve(a), resolve(via), resolve(b)) {
                (
                    Some(Waypoint::Node(source)),
                    Some(Waypoint::Channel(channel)),
                    Some(Waypoint::Node(target)),
                ) => {
                    let members = channel_members.entry(channel).or_insert_with(|| {
                        channel_order.push(channel);
                        Vec::new()
                    });
                    members.push((cable_idx, source, target));
                }
                (None, _, _) | (_, None, _) | (_, _, None) => {
                    warn!(cable = %cable.id, "skipping cable: unknown waypoint id");
                }
                _ => {
                    warn!(cable = %cable.id, "skipping cable: three-point paths must be node, channel, node");
                }
            },
            _ => {
                warn!(
                    cable = %cable.id,
                    waypoints = cable.path.len(),
                    "skipping cable: expected 2 waypoints or node-channel-node"
                );
            }
        }
    }

    let mut analysis = Analysis::default();

    for key in direct_order {
        let cables = direct_members.remove(&key).unwrap_or_default();
        let Some(&first) = cables.first() else {
            continue;
        };
        // The first declared cable fixes source/target roles for the group.
        let first_path = &topology.cables[first].path;
        let source = node_index[first_path[0].as_str()];
        let target = node_index[first_path[1].as_str()];
        let vertical = dominant_is_vertical(&geometry[source], &geometry[target]);
        let (source_side, target_side) = direct_sides(&geometry[source], &geometry[target], vertical);

        let slots = cables.len();
        let assignment_for = |node: usize, side: EdgeSide| EdgeAssignment {
            node,
            side,
            slots,
            cables: cables
                .iter()
                .enumerate()
                .map(|(slot, &cable)| {
                    let declared_source = node_index[topology.cables[cable].path[0].as_str()];
                    let role = if declared_source == node {
                        CableRole::Source
                    } else {
                        CableRole::Target
                    };
                    let far = if node == source {
                        FarEnd::Node(target)
                    } else {
                        FarEnd::Node(source)
                    };
                    AssignedSlot { cable, slot, role, far }
                })
                .collect(),
        };
        let source_assignment = analysis.assignments.len();
        analysis.assignments.push(assignment_for(source, source_side));
        let target_assignment = analysis.assignments.len();
        analysis.assignments.push(assignment_for(target, target_side));

        analysis.direct.push(DirectGroup {
            source,
            target,
            vertical,
            source_side,
            target_side,
            cables,
            source_assignment,
            target_assignment,
        });
    }

    for channel in channel_order {
        let members = channel_members.remove(&channel).unwrap_or_default();
        let decl = &topology.channels[channel];
        let slots = members.len();
        // Per-edge registry for this group: members landing on the same
        // node edge share one assignment but keep their group-wide slots.
        let mut edge_lookup: HashMap<(usize, EdgeSide), usize> = HashMap::new();
        let mut cables = Vec::with_capacity(members.len());
        for (slot, (cable, source, target)) in members.into_iter().enumerate() {
            let source_side = channel_facing_side(decl.orientation, decl.position, &geometry[source]);
            let target_side = channel_facing_side(decl.orientation, decl.position, &geometry[target]);
            let mut assignment_at = |node: usize, side: EdgeSide, role: CableRole, far_node: usize| {
                let idx = *edge_lookup.entry((node, side)).or_insert_with(|| {
                    analysis.assignments.push(EdgeAssignment {
                        node,
                        side,
                        slots,
                        cables: Vec::new(),
                    });
                    analysis.assignments.len() - 1
                });
                analysis.assignments[idx].cables.push(AssignedSlot {
                    cable,
                    slot,
                    role,
                    far: FarEnd::Channel { channel, node: far_node },
                });
                idx
            };
            let source_assignment = assignment_at(source, source_side, CableRole::Source, target);
            let target_assignment = assignment_at(target, target_side, CableRole::Target, source);
            cables.push(ChannelCable {
                cable,
                source,
                target,
                source_side,
                target_side,
                slot,
                source_assignment,
                target_assignment,
            });
        }
        analysis.channels.push(ChannelGroup { channel, cables });
    }

    analysis
}

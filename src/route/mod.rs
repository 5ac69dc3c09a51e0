//! Orthogonal cable routing.
//!
//! A routing pass classifies every cable as direct (node to node) or
//! channel-riding, fans parallel cables out along node edges and channel
//! lines in proportion to zoom, synthesizes Manhattan polylines with
//! perpendicular stubs at both ends, and finally steers each polyline
//! around any unrelated node it would cross.

mod analysis;
mod collide;
mod ports;
mod spacing;
mod synth;
mod types;

pub use types::{CableRoute, EdgeSide, NodeGeometry, RouteMap};

use crate::config::RoutingConfig;
use crate::topology::{ChannelOrientation, Topology, ZoomState};

use analysis::analyze;
use collide::adjust_route_for_collisions;
use ports::{edge_connection_points, stub_point};
use spacing::{channel_gap, channel_offset, fan_spacing, stub_extension};
use synth::synthesize;

/// Routes every well-formed cable in the topology and returns the result
/// keyed by cable id. Invalid cables are skipped with a diagnostic rather
/// than failing the pass; the output order is stable across runs.
pub fn compute_routes(topology: &Topology, zoom: &ZoomState, config: &RoutingConfig) -> RouteMap {
    let geometry: Vec<NodeGeometry> = topology.nodes.iter().map(NodeGeometry::from_node).collect();
    let analysis = analyze(topology, &geometry);
    let k = zoom.k;
    let extension = stub_extension(config, k);

    // One fan of connection points per edge assignment, indexed by slot.
    let fans: Vec<Vec<(f32, f32)>> = analysis
        .assignments
        .iter()
        .map(|edge| edge_connection_points(config, &geometry[edge.node], edge.side, edge.slots, k))
        .collect();

    let mut routes = RouteMap::new();

    for group in &analysis.direct {
        let count = group.cables.len();
        let lateral = fan_spacing(
            config,
            k,
            count,
            geometry[group.source].edge_length(group.source_side),
        );
        let half = (count as f32 - 1.0) / 2.0;
        for (slot, &cable_idx) in group.cables.iter().enumerate() {
            let cable = &topology.cables[cable_idx];
            let points = synthesize(
                fans[group.source_assignment][slot],
                fans[group.target_assignment][slot],
                group.source_side,
                group.target_side,
                &geometry[group.source],
                &geometry[group.target],
                extension,
                (slot as f32 - half) * lateral,
            );
            let points = adjust_route_for_collisions(
                &points,
                &[group.source, group.target],
                &geometry,
                config.detour_margin,
            );
            routes.insert(
                cable.id.clone(),
                CableRoute {
                    color: cable.color.clone(),
                    points,
                },
            );
        }
    }

    for group in &analysis.channels {
        let channel = &topology.channels[group.channel];
        let count = group.cables.len();
        let gap = channel_gap(config, k);
        for entry in &group.cables {
            let cable = &topology.cables[entry.cable];
            let source_conn = fans[entry.source_assignment][entry.slot];
            let target_conn = fans[entry.target_assignment][entry.slot];
            let source_stub = stub_point(source_conn, entry.source_side, extension);
            let target_stub = stub_point(target_conn, entry.target_side, extension);
            let attach = channel.position + channel_offset(gap, entry.slot, count);
            let (ride_a, ride_b) = match channel.orientation {
                ChannelOrientation::Horizontal => {
                    ((source_stub.0, attach), (target_stub.0, attach))
                }
                ChannelOrientation::Vertical => ((attach, source_stub.1), (attach, target_stub.1)),
            };
            let points = vec![source_conn, source_stub, ride_a, ride_b, target_stub, target_conn];
            let points = adjust_route_for_collisions(
                &points,
                &[entry.source, entry.target],
                &geometry,
                config.detour_margin,
            );
            routes.insert(
                cable.id.clone(),
                CableRoute {
                    color: cable.color.clone(),
                    points,
                },
            );
        }
    }

    routes
}

use crate::config::RenderConfig;
use crate::route::RouteMap;
use crate::theme::Theme;
use crate::topology::{ChannelOrientation, Topology, ZoomState};
use anyhow::Result;
use std::path::Path;

/// Renders the topology and its routed cables as a standalone SVG. The
/// world is wrapped in a single transform group, so pan and zoom never
/// change the routed coordinates themselves.
pub fn render_svg(
    topology: &Topology,
    routes: &RouteMap,
    zoom: &ZoomState,
    theme: &Theme,
    config: &RenderConfig,
) -> String {
    let mut svg = String::new();
    let width = config.width.max(200.0);
    let height = config.height.max(200.0);
    let k = zoom.k.max(f32::EPSILON);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.background
    ));

    svg.push_str(&format!(
        "<g transform=\"translate({:.2} {:.2}) scale({:.4})\">",
        zoom.translate_x, zoom.translate_y, k
    ));

    // Visible world extent, for channel lines that span the viewport.
    let world_x0 = -zoom.translate_x / k;
    let world_x1 = (width - zoom.translate_x) / k;
    let world_y0 = -zoom.translate_y / k;
    let world_y1 = (height - zoom.translate_y) / k;

    for channel in &topology.channels {
        let (x1, y1, x2, y2) = match channel.orientation {
            ChannelOrientation::Horizontal => (world_x0, channel.position, world_x1, channel.position),
            ChannelOrientation::Vertical => (channel.position, world_y0, channel.position, world_y1),
        };
        svg.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"{}\"/>",
            theme.channel_color, theme.channel_dasharray
        ));
        if let Some(label) = &channel.label {
            let (label_x, label_y) = match channel.orientation {
                ChannelOrientation::Horizontal => (world_x0 + 8.0, channel.position - 6.0),
                ChannelOrientation::Vertical => (channel.position + 6.0, world_y0 + 14.0),
            };
            svg.push_str(&format!(
                "<text x=\"{label_x:.2}\" y=\"{label_y:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                theme.font_family,
                theme.channel_label_size,
                theme.channel_color,
                escape_xml(label)
            ));
        }
    }

    for route in routes.values() {
        let d = points_to_path(&route.points);
        let stroke = if route.color.is_empty() {
            theme.cable_fallback_color.as_str()
        } else {
            route.color.as_str()
        };
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            d, stroke, theme.cable_width
        ));
    }

    for node in &topology.nodes {
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" ry=\"4\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            node.x,
            node.y,
            node.width,
            node.height,
            theme.node_fill,
            theme.node_border,
            theme.node_border_width
        ));
        let center_x = node.x + node.width / 2.0;
        let label_y = node.y + node.height / 2.0 + theme.font_size / 3.0;
        svg.push_str(&format!(
            "<text x=\"{center_x:.2}\" y=\"{label_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            theme.font_family,
            theme.font_size,
            theme.label_color,
            escape_xml(&node.id)
        ));
    }

    svg.push_str("</g>");
    svg.push_str("</svg>");
    svg
}

fn points_to_path(points: &[(f32, f32)]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].0, points[0].1));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.0, point.1));
    }
    d
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

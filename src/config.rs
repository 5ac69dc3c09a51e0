use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning surface for the routing engine. Every knob affects spacing or
/// extension geometry only; topology semantics never depend on these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Zoom below which cable fan-out collapses to coincident lines.
    pub zoom_threshold: f32,
    /// Zoom at which fan-out spacing saturates.
    pub max_zoom_effect: f32,
    /// Uneased spacing floor applied as soon as the threshold is crossed.
    pub min_spacing: f32,
    /// Spacing added at full ease, before the edge-length cap.
    pub base_spacing: f32,
    /// Constant part of the perpendicular stub length.
    pub stub_base: f32,
    /// Zoom-proportional part of the perpendicular stub length.
    pub stub_zoom_ratio: f32,
    /// Constant part of the channel centerline gap.
    pub channel_gap_base: f32,
    /// Zoom-proportional part of the channel centerline gap.
    pub channel_gap_zoom_ratio: f32,
    /// Clearance kept between a detoured segment and the obstacle rect.
    pub detour_margin: f32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            zoom_threshold: 0.5,
            max_zoom_effect: 3.0,
            min_spacing: 1.0,
            base_spacing: 80.0,
            stub_base: 1.0,
            stub_zoom_ratio: 2.0,
            channel_gap_base: 2.0,
            channel_gap_zoom_ratio: 5.0,
            detour_margin: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub routing: RoutingConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            routing: RoutingConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RoutingConfigFile {
    zoom_threshold: Option<f32>,
    max_zoom_effect: Option<f32>,
    min_spacing: Option<f32>,
    base_spacing: Option<f32>,
    stub_base: Option<f32>,
    stub_zoom_ratio: Option<f32>,
    channel_gap_base: Option<f32>,
    channel_gap_zoom_ratio: Option<f32>,
    detour_margin: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    routing: Option<RoutingConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "dark" => config.theme = Theme::dark(),
            "light" | "default" => config.theme = Theme::light(),
            other => anyhow::bail!("unknown theme `{other}` (expected `light` or `dark`)"),
        }
        config.render.background = config.theme.background.clone();
    }

    if let Some(routing) = parsed.routing {
        if let Some(v) = routing.zoom_threshold {
            config.routing.zoom_threshold = v;
        }
        if let Some(v) = routing.max_zoom_effect {
            config.routing.max_zoom_effect = v;
        }
        if let Some(v) = routing.min_spacing {
            config.routing.min_spacing = v;
        }
        if let Some(v) = routing.base_spacing {
            config.routing.base_spacing = v;
        }
        if let Some(v) = routing.stub_base {
            config.routing.stub_base = v;
        }
        if let Some(v) = routing.stub_zoom_ratio {
            config.routing.stub_zoom_ratio = v;
        }
        if let Some(v) = routing.channel_gap_base {
            config.routing.channel_gap_base = v;
        }
        if let Some(v) = routing.channel_gap_zoom_ratio {
            config.routing.channel_gap_zoom_ratio = v;
        }
        if let Some(v) = routing.detour_margin {
            config.routing.detour_margin = v;
        }
        if config.routing.max_zoom_effect <= config.routing.zoom_threshold {
            anyhow::bail!("maxZoomEffect must be greater than zoomThreshold");
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub node_fill: String,
    pub node_border: String,
    pub node_border_width: f32,
    pub label_color: String,
    pub channel_color: String,
    pub channel_dasharray: String,
    pub channel_label_size: f32,
    pub cable_width: f32,
    pub cable_fallback_color: String,
    pub background: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 24.0,
            node_fill: "#FFFFFF".to_string(),
            node_border: "#000000".to_string(),
            node_border_width: 2.0,
            label_color: "#1C2430".to_string(),
            channel_color: "#444444".to_string(),
            channel_dasharray: "5,5".to_string(),
            channel_label_size: 16.0,
            cable_width: 2.0,
            cable_fallback_color: "#999999".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 24.0,
            node_fill: "#1C2430".to_string(),
            node_border: "#D7E0F0".to_string(),
            node_border_width: 2.0,
            label_color: "#F8FAFF".to_string(),
            channel_color: "#7A8AA6".to_string(),
            channel_dasharray: "5,5".to_string(),
            channel_label_size: 16.0,
            cable_width: 2.0,
            cable_fallback_color: "#8899AA".to_string(),
            background: "#10151D".to_string(),
        }
    }
}

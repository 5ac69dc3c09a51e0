use crate::route::RouteMap;
use crate::topology::ZoomState;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable routing output, for diffing routes across runs and
/// feeding downstream tooling without parsing SVG.
#[derive(Debug, Serialize)]
pub struct RouteDump {
    pub zoom: f32,
    pub cables: Vec<CableDump>,
}

#[derive(Debug, Serialize)]
pub struct CableDump {
    pub id: String,
    pub color: String,
    pub points: Vec<[f32; 2]>,
}

impl RouteDump {
    pub fn from_routes(routes: &RouteMap, zoom: &ZoomState) -> Self {
        let cables = routes
            .iter()
            .map(|(id, route)| CableDump {
                id: id.clone(),
                color: route.color.clone(),
                points: route.points.iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();
        RouteDump {
            zoom: zoom.k,
            cables,
        }
    }
}

pub fn write_route_dump(path: &Path, dump: &RouteDump) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}

use crate::config::load_config;
use crate::render::{render_svg, write_output_svg};
use crate::route::compute_routes;
use crate::route_dump::{write_route_dump, RouteDump};
use crate::topology::{Topology, ZoomState};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "patchbay", version, about = "Orthogonal cable router for node patchbays")]
pub struct Args {
    /// Input topology JSON or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, routing and render overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Zoom scale the routing pass responds to
    #[arg(short = 'z', long = "zoom", default_value_t = 1.0)]
    pub zoom: f32,

    /// Pan offset applied to the rendered world, x component
    #[arg(long = "translateX", default_value_t = 0.0)]
    pub translate_x: f32,

    /// Pan offset applied to the rendered world, y component
    #[arg(long = "translateY", default_value_t = 0.0)]
    pub translate_y: f32,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Json,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.zoom <= 0.0 {
        return Err(anyhow::anyhow!("zoom must be positive"));
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }

    let input = read_input(args.input.as_deref())?;
    let topology = Topology::from_json(&input)?;
    let zoom = ZoomState {
        k: args.zoom,
        translate_x: args.translate_x,
        translate_y: args.translate_y,
    };
    let routes = compute_routes(&topology, &zoom, &config.routing);

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&topology, &routes, &zoom, &config.theme, &config.render);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Json => {
            let dump = RouteDump::from_routes(&routes, &zoom);
            match args.output.as_deref() {
                Some(path) => write_route_dump(path, &dump)?,
                None => println!("{}", serde_json::to_string_pretty(&dump)?),
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

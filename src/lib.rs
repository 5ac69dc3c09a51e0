#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod render;
pub mod route;
pub mod route_dump;
pub mod theme;
pub mod topology;

#[cfg(feature = "cli")]
pub use cli::run;
pub use route::{compute_routes, CableRoute, RouteMap};
pub use topology::{Topology, ZoomState};

pub mod config;
pub mod geocoding;
pub mod planner;
pub mod route;
pub mod surface;
pub mod util;

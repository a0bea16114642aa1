// Collaborators the planner drives. Front-ends implement these.
use crate::sdk::geocoding::Coord;
use crate::sdk::route::{Bounds, Waypoint};
use std::fmt;

pub trait MapSurface {
    fn set_marker(&mut self, coord: Coord, label: &str);
    fn clear_markers(&mut self);
    fn draw_path(&mut self, path: &[Coord]);
    fn clear_path(&mut self);
    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32);
    fn set_view(&mut self, center: Coord, zoom: u8);
}

pub trait RouteView {
    /// Called with the whole list whenever it changes.
    fn show_waypoints(&mut self, waypoints: &[Waypoint]);
    fn notify(&mut self, notice: &Notice);
    /// `None` clears the result line.
    fn show_distance(&mut self, text: Option<&str>);
}

/// User-facing messages raised by planner commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    GeocodeFailed { name: String },
    TooFewPlaces,
    TooFewResolved,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::GeocodeFailed { name } => write!(f, "Could not geocode: {}", name),
            Notice::TooFewPlaces => write!(f, "Please add at least 2 places."),
            Notice::TooFewResolved => {
                write!(f, "Fewer than 2 places could be located; fix or remove the others.")
            }
        }
    }
}

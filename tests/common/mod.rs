#![allow(dead_code)]

use air_route::{Bounds, Coord, GeocodeError, Geocoder, MapSurface, Notice, RouteView, Waypoint};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TEL_AVIV: (f64, f64) = (32.0853, 34.7818);
pub const JERUSALEM: (f64, f64) = (31.7683, 35.2137);
pub const HAIFA: (f64, f64) = (32.7940, 34.9896);
pub const EILAT: (f64, f64) = (29.5577, 34.9519);
pub const BEER_SHEVA: (f64, f64) = (31.2518, 34.7913);

pub fn coord((lat, lon): (f64, f64)) -> Coord {
    Coord::new(lat, lon).unwrap()
}

#[derive(Clone, Copy)]
pub enum Outcome {
    Found(f64, f64),
    Broken,
}

/// Answers from a fixed table. Names not in the table are "not found".
#[derive(Default)]
pub struct ScriptedGeocoder {
    outcomes: Mutex<HashMap<String, Outcome>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    pub fn israel() -> Self {
        let geocoder = Self::default();
        geocoder.found("Tel Aviv", TEL_AVIV);
        geocoder.found("Jerusalem", JERUSALEM);
        geocoder.found("Haifa", HAIFA);
        geocoder.found("Eilat", EILAT);
        geocoder.found("Beer Sheva", BEER_SHEVA);
        geocoder
    }

    pub fn found(&self, name: &str, (lat, lon): (f64, f64)) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(name.to_string(), Outcome::Found(lat, lon));
    }

    pub fn broken(&self, name: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(name.to_string(), Outcome::Broken);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geocoder for ScriptedGeocoder {
    async fn geocode(&self, name: &str) -> Result<Option<Coord>, GeocodeError> {
        self.calls.lock().unwrap().push(name.to_string());
        let outcome = self.outcomes.lock().unwrap().get(name).copied();
        match outcome {
            Some(Outcome::Found(lat, lon)) => Coord::new(lat, lon).map(Some),
            Some(Outcome::Broken) => Err(GeocodeError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Marker(String),
    ClearMarkers,
    Path(Vec<Coord>),
    ClearPath,
    Fit(Bounds, u32),
    View(Coord, u8),
}

#[derive(Default)]
pub struct RecordingMap {
    pub events: Vec<MapEvent>,
}

impl RecordingMap {
    /// Labels of the markers currently shown.
    pub fn markers(&self) -> Vec<String> {
        let start = self
            .events
            .iter()
            .rposition(|e| *e == MapEvent::ClearMarkers)
            .map_or(0, |i| i + 1);
        self.events[start..]
            .iter()
            .filter_map(|e| match e {
                MapEvent::Marker(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<&Vec<Coord>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MapEvent::Path(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl MapSurface for RecordingMap {
    fn set_marker(&mut self, _coord: Coord, label: &str) {
        self.events.push(MapEvent::Marker(label.to_string()));
    }

    fn clear_markers(&mut self) {
        self.events.push(MapEvent::ClearMarkers);
    }

    fn draw_path(&mut self, path: &[Coord]) {
        self.events.push(MapEvent::Path(path.to_vec()));
    }

    fn clear_path(&mut self) {
        self.events.push(MapEvent::ClearPath);
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32) {
        self.events.push(MapEvent::Fit(bounds, padding_px));
    }

    fn set_view(&mut self, center: Coord, zoom: u8) {
        self.events.push(MapEvent::View(center, zoom));
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub lists: Vec<Vec<String>>,
    pub notices: Vec<Notice>,
    pub distance: Option<String>,
}

impl RouteView for RecordingView {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.lists
            .push(waypoints.iter().map(|w| w.name.clone()).collect());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn show_distance(&mut self, text: Option<&str>) {
        self.distance = text.map(str::to_string);
    }
}

// Terminal bindings for the planner's map and list collaborators
use air_route::{Bounds, Coord, MapSurface, Notice, RouteView, Waypoint};

/// Stands in for a map widget: every draw call becomes a log line.
#[derive(Default)]
pub struct TerminalMap {
    markers: usize,
}

impl MapSurface for TerminalMap {
    fn set_marker(&mut self, coord: Coord, label: &str) {
        self.markers += 1;
        log::debug!("[MAP] marker {} at {}", label, coord);
    }

    fn clear_markers(&mut self) {
        self.markers = 0;
    }

    fn draw_path(&mut self, path: &[Coord]) {
        log::info!("[MAP] route line through {} points", path.len());
    }

    fn clear_path(&mut self) {
        log::debug!("[MAP] route line cleared");
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32) {
        log::info!(
            "[MAP] fit view to {} - {} (padding {}px, {} markers)",
            bounds.south_west,
            bounds.north_east,
            padding_px,
            self.markers
        );
    }

    fn set_view(&mut self, center: Coord, zoom: u8) {
        log::info!("[MAP] view centered on {} at zoom {}", center, zoom);
    }
}

pub struct TerminalView {
    pub show_list: bool,
    pub show_result: bool,
}

impl RouteView for TerminalView {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        if !self.show_list {
            return;
        }
        if waypoints.is_empty() {
            println!("(no places)");
        }
        for (i, w) in waypoints.iter().enumerate() {
            match w.coord {
                Some(coord) => println!("{:>3}. {} {}", i + 1, w.name, coord),
                None => println!("{:>3}. {} (unresolved)", i + 1, w.name),
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        eprintln!("{}", notice);
    }

    fn show_distance(&mut self, text: Option<&str>) {
        if let (true, Some(text)) = (self.show_result, text) {
            println!("{}", text);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add(String),
    /// Zero-based; the user types 1-based positions.
    Remove(usize),
    List,
    Calc,
    Reset,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Command::Add(rest.to_string()),
            "rm" | "remove" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Remove(n - 1),
                _ => Command::Invalid(format!("expected a position from 1, got {:?}", rest)),
            },
            "list" | "ls" => Command::List,
            "calc" | "calculate" => Command::Calc,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Invalid(format!("unknown command {:?}", other)),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  add <place>   append a place and locate it
  rm <n>        remove the place at position n
  list          show the current route
  calc          locate everything and measure the route
  reset         start over
  quit          leave";

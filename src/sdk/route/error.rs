use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("Place name is empty")]
    EmptyInput,

    #[error("No waypoint at position {index} (route has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    // Covers both "no match" and a failed lookup; the engine logs which one it was
    #[error("Could not geocode: {name}")]
    NotFound { name: String },

    #[error("At least 2 places are needed, route has {count}")]
    InsufficientWaypoints { count: usize },

    #[error("Only {resolved} place(s) could be located, at least 2 are needed")]
    InsufficientResolvedWaypoints { resolved: usize, failed: Vec<String> },
}

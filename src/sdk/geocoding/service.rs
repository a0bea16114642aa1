use super::coord::Coord;
use super::error::GeocodeError;
use std::future::Future;

pub trait Geocoder: Send + Sync {
    /// Resolves a place name to its single best match.
    ///
    /// `Ok(None)` means the service had no match. `Err` is reserved for
    /// transport and parsing failures; callers that only care about
    /// found / not-found may treat both the same.
    fn geocode(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Coord>, GeocodeError>> + Send;
}

use brewmap_core::{LocatedResult, SearchError};

/// Receives the lifecycle of one search call.
///
/// `on_start` fires before any work and `on_finish` after the outcome has
/// been reported, whatever it was. Exactly one of `on_success` or
/// `on_failure` fires in between.
pub trait AggregationListener: Send + Sync {
    fn on_start(&self) {}
    fn on_success(&self, results: &[LocatedResult]);
    fn on_failure(&self, error: SearchError);
    fn on_finish(&self) {}
}

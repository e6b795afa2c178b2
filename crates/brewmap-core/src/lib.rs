//! Core value types and pure logic for the brewmap coffee-shop finder.
//!
//! Nothing in this crate performs I/O: the HTTP clients live in
//! `brewmap-arcgis` and the search flows in `brewmap-search`.

pub mod app_config;
pub mod camera;
pub mod config;
pub mod error;
pub mod rating;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use camera::{focus, frame, region_around, FRAME_PADDING_FACTOR, SINGLE_POINT_SPAN_DEGREES};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ParseSearchModeError, SearchError};
pub use rating::{placeholder_rating, ReviewTier};
pub use types::{CompletionCandidate, Coordinate, LocatedResult, Region, SearchMode, Span};

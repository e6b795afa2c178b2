//! Search flows for the brewmap coffee-shop finder.
//!
//! [`ResultAggregator`] runs one of three flows per [`SearchMode`] over
//! injected collaborators ([`Geocoder`], [`ShopSearch`], [`LocalSearch`],
//! [`Autocomplete`]) and reports progress to an [`AggregationListener`].
//! [`SearchSession`] holds the UI-side state: the selected mode and the
//! completion list for the text being typed.
//!
//! [`SearchMode`]: brewmap_core::SearchMode

pub mod aggregator;
pub mod listener;
pub mod location;
pub mod presenter;
pub mod providers;
pub mod session;

pub use aggregator::{normalize_query, ResultAggregator, SearchOrchestrator};
pub use listener::AggregationListener;
pub use location::{
    initial_region, next_action, LocationAction, LocationAuthorization, LocationEvent,
    LocationPrompt, INITIAL_REGION_METERS,
};
pub use presenter::{AlertButton, AlertPresenter, MapPresenter, PresentingListener};
pub use providers::{Autocomplete, Geocoder, LocalSearch, ShopSearch};
pub use session::SearchSession;

//! Handling for the host's one-shot location provider and its permission
//! states. None of this feeds the aggregator; it only positions the map on
//! first appearance.

use brewmap_core::{region_around, Coordinate, Region};

use crate::presenter::{AlertButton, AlertPresenter};

/// Side length of the region shown around the user's first fix.
pub const INITIAL_REGION_METERS: f64 = 2000.0;

/// One-shot outcome reported by the location provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    Received(Coordinate),
    Failed(String),
}

/// Camera region for the first location event, or `None` on failure.
#[must_use]
pub fn initial_region(event: &LocationEvent) -> Option<Region> {
    match event {
        LocationEvent::Received(point) => Some(region_around(*point, INITIAL_REGION_METERS)),
        LocationEvent::Failed(reason) => {
            tracing::warn!(reason = %reason, "location unavailable, leaving camera unchanged");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAuthorization {
    ServicesDisabled,
    NotDetermined,
    Denied,
    Restricted,
    Authorized,
}

/// Dialog content for a permission problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub buttons: &'static [AlertButton],
}

impl LocationPrompt {
    /// Shows the prompt and returns the chosen button. The host opens the
    /// system settings when [`AlertButton::Settings`] comes back.
    pub fn present(&self, alerts: &dyn AlertPresenter) -> AlertButton {
        let choice = alerts.show_alert(self.title, self.message, self.buttons);
        tracing::debug!(title = self.title, choice = choice.label(), "location prompt answered");
        choice
    }
}

/// What the host should do for a given authorization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAction {
    RequestAuthorization,
    StartUpdates,
    Prompt(LocationPrompt),
}

const SETTINGS_BUTTONS: &[AlertButton] = &[AlertButton::Cancel, AlertButton::Settings];

#[must_use]
pub fn next_action(authorization: LocationAuthorization) -> LocationAction {
    match authorization {
        LocationAuthorization::ServicesDisabled => LocationAction::Prompt(LocationPrompt {
            title: "Location Disabled",
            message: "Please enable your location services",
            buttons: SETTINGS_BUTTONS,
        }),
        LocationAuthorization::Denied | LocationAuthorization::Restricted => {
            LocationAction::Prompt(LocationPrompt {
                title: "Location Denied",
                message: "Please give access to your location.",
                buttons: SETTINGS_BUTTONS,
            })
        }
        LocationAuthorization::NotDetermined => LocationAction::RequestAuthorization,
        LocationAuthorization::Authorized => LocationAction::StartUpdates,
    }
}

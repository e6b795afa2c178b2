//! Host-side rendering seams and the listener that drives them.

use brewmap_core::{frame, Coordinate, LocatedResult, Region, SearchError};

use crate::listener::AggregationListener;

/// Renders pins and moves the camera. Implemented by the host map view.
pub trait MapPresenter: Send + Sync {
    fn render_pins(&self, results: &[LocatedResult]);
    fn apply_camera(&self, region: Region);
    fn clear_pins(&self);
    /// Shows or hides the activity indicator.
    fn set_loading(&self, _loading: bool) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertButton {
    Ok,
    Cancel,
    Delete,
    Settings,
}

impl AlertButton {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AlertButton::Ok => "Ok",
            AlertButton::Cancel => "Cancel",
            AlertButton::Delete => "Delete",
            AlertButton::Settings => "Settings",
        }
    }

    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, AlertButton::Delete)
    }
}

/// Shows a modal dialog and reports which button was chosen.
pub trait AlertPresenter: Send + Sync {
    fn show_alert(&self, title: &str, message: &str, buttons: &[AlertButton]) -> AlertButton;
}

/// Listener that turns search outcomes into pins, camera moves, and alerts.
pub struct PresentingListener<'a> {
    map: &'a dyn MapPresenter,
    alerts: &'a dyn AlertPresenter,
}

impl<'a> PresentingListener<'a> {
    pub fn new(map: &'a dyn MapPresenter, alerts: &'a dyn AlertPresenter) -> Self {
        Self { map, alerts }
    }
}

impl AggregationListener for PresentingListener<'_> {
    fn on_start(&self) {
        self.map.set_loading(true);
    }

    fn on_success(&self, results: &[LocatedResult]) {
        self.map.clear_pins();
        self.map.render_pins(results);
        let points: Vec<Coordinate> = results.iter().map(|r| r.coordinate).collect();
        if let Some(region) = frame(&points) {
            self.map.apply_camera(region);
        }
    }

    fn on_failure(&self, error: SearchError) {
        let (title, message) = error.alert();
        self.alerts.show_alert(title, message, &[AlertButton::Ok]);
    }

    fn on_finish(&self) {
        self.map.set_loading(false);
    }
}

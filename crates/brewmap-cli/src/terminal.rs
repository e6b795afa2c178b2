//! Terminal stand-ins for the map view and alert dialogs.

use brewmap_core::{CompletionCandidate, LocatedResult, Region, ReviewTier};
use brewmap_search::{AlertButton, AlertPresenter, MapPresenter};

pub(crate) struct TerminalMap {
    json: bool,
}

impl TerminalMap {
    pub(crate) fn new(json: bool) -> Self {
        Self { json }
    }
}

impl MapPresenter for TerminalMap {
    fn render_pins(&self, results: &[LocatedResult]) {
        if self.json {
            match serde_json::to_string_pretty(results) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => tracing::error!(error = %e, "failed to serialize results"),
            }
            return;
        }

        if results.is_empty() {
            println!("no results");
            return;
        }
        for result in results {
            println!("{}", format_pin(result));
        }
    }

    fn apply_camera(&self, region: Region) {
        tracing::info!(
            center = %region.center,
            lat_span = region.span.latitude_delta,
            lon_span = region.span.longitude_delta,
            "camera framed results"
        );
    }

    fn clear_pins(&self) {}

    fn set_loading(&self, loading: bool) {
        if loading {
            tracing::debug!("searching");
        }
    }
}

pub(crate) struct TerminalAlerts;

impl AlertPresenter for TerminalAlerts {
    fn show_alert(&self, title: &str, message: &str, buttons: &[AlertButton]) -> AlertButton {
        eprintln!("{title}: {message}");
        buttons.first().copied().unwrap_or(AlertButton::Ok)
    }
}

/// One line per pin: title, subtitle, position, and the placeholder review
/// when the result carries a rating.
pub(crate) fn format_pin(result: &LocatedResult) -> String {
    let mut line = result.title.clone();
    if !result.subtitle.is_empty() {
        line.push_str(" | ");
        line.push_str(&result.subtitle);
    }
    line.push_str(&format!(" ({})", result.coordinate));
    if let Some(rating) = result.source_rating {
        let stars = "*".repeat(usize::from(rating.min(5)));
        line.push_str(&format!(
            " {stars:<5} {}",
            ReviewTier::from_rating(rating).blurb()
        ));
    }
    line
}

pub(crate) fn print_completions(
    completions: &[CompletionCandidate],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(completions)?);
        return Ok(());
    }
    for candidate in completions {
        println!("{} | {}", candidate.title, candidate.subtitle);
    }
    Ok(())
}

//! UI-side search state: the selected mode and the in-flight completions.

use std::sync::Arc;

use brewmap_core::{CompletionCandidate, LocatedResult, Region, SearchError, SearchMode};

use crate::aggregator::SearchOrchestrator;
use crate::listener::AggregationListener;

/// State owned by the host UI between keystrokes and submissions.
///
/// Submissions are not sequenced: a slow earlier search can still deliver
/// its results after a newer one.
pub struct SearchSession {
    orchestrator: Arc<dyn SearchOrchestrator>,
    mode: SearchMode,
    /// Completions fetched for the trimmed text in `.0`.
    completions: Option<(String, Vec<CompletionCandidate>)>,
}

impl SearchSession {
    pub fn new(orchestrator: Arc<dyn SearchOrchestrator>) -> Self {
        Self {
            orchestrator,
            mode: SearchMode::default(),
            completions: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.mode.placeholder()
    }

    /// Switches mode, discarding any completion list, and returns the new
    /// placeholder text.
    pub fn select_mode(&mut self, mode: SearchMode) -> &'static str {
        tracing::debug!(from = %self.mode, to = %mode, "search mode selected");
        self.mode = mode;
        self.completions = None;
        mode.placeholder()
    }

    /// Completions fetched for the most recent text, if any.
    #[must_use]
    pub fn completions(&self) -> &[CompletionCandidate] {
        self.completions
            .as_ref()
            .map_or(&[][..], |(_, list)| list.as_slice())
    }

    /// Fetches completions for the text currently typed and keeps them for
    /// the next General-mode submission.
    ///
    /// Blank text clears the list without a network call.
    ///
    /// # Errors
    ///
    /// The autocomplete provider's failure; the previous list is discarded.
    pub async fn update_completions(
        &mut self,
        text: &str,
    ) -> Result<&[CompletionCandidate], SearchError> {
        let key = text.trim();
        self.completions = None;
        if key.is_empty() {
            return Ok(&[]);
        }

        let list = self.orchestrator.fetch_completions(key).await?;
        tracing::debug!(text = key, count = list.len(), "completions updated");
        let (_, list) = self.completions.insert((key.to_owned(), list));
        Ok(list.as_slice())
    }

    /// Submits `query` in the current mode.
    ///
    /// In General mode the stored completions are reused when they were
    /// fetched for the same trimmed text; otherwise they are fetched anew.
    ///
    /// # Errors
    ///
    /// See [`SearchOrchestrator::search`].
    pub async fn submit(
        &self,
        query: &str,
        viewport: Option<&Region>,
        listener: &dyn AggregationListener,
    ) -> Result<Vec<LocatedResult>, SearchError> {
        let candidates = match (&self.completions, self.mode) {
            (Some((key, list)), SearchMode::General) if key == query.trim() => {
                Some(list.as_slice())
            }
            _ => None,
        };
        self.orchestrator
            .search(self.mode, query, viewport, candidates, listener)
            .await
    }
}

use std::sync::Arc;

use tracing::warn;

use shared::domain::{CommitteeId, QualificationId, WeightId};

pub mod display;
pub mod loader;
pub mod options;
pub mod query;
pub mod transport;
pub mod view;

pub use display::{DisplayState, StatusPanel};
pub use loader::OptionLoader;
pub use options::{OptionEntry, OptionList};
pub use query::QueryOutcome;
pub use transport::{
    GatewayError, HttpSelectionGateway, MissingSelectionGateway, SelectionGateway,
};
pub use view::{Navigator, NullNavigator, SelectorView, StateMarker, StatusView};

/// Rendering surfaces the controller drives. Hosts supply one per widget.
pub struct FormViews {
    pub committee: Arc<dyn SelectorView>,
    pub qualification: Arc<dyn SelectorView>,
    pub weight: Arc<dyn SelectorView>,
    pub status: Arc<dyn StatusView>,
    pub navigator: Arc<dyn Navigator>,
}

/// Keeps the three dependent selectors consistent with the server-held
/// selection context and reports post-navigation outcomes.
///
/// The server owns the selection context; this controller only forwards
/// commands and never caches choices beyond the current selector values.
pub struct SearchFormController {
    gateway: Arc<dyn SelectionGateway>,
    loader: OptionLoader,
    committee: Arc<dyn SelectorView>,
    qualification: Arc<dyn SelectorView>,
    weight: Arc<dyn SelectorView>,
    status: StatusPanel,
}

impl SearchFormController {
    pub fn new(gateway: Arc<dyn SelectionGateway>, views: FormViews) -> Self {
        Self {
            loader: OptionLoader::new(Arc::clone(&gateway)),
            gateway,
            committee: views.committee,
            qualification: views.qualification,
            weight: views.weight,
            status: StatusPanel::new(views.status, views.navigator),
        }
    }

    /// Populates the qualification list, then reports any outcome carried
    /// over from the previous navigation.
    pub async fn start(&self, page_address: &str) {
        self.loader
            .load_qualifications(self.qualification.as_ref())
            .await;
        self.report_outcome(query::parse_outcome_from_address(page_address));
    }

    fn report_outcome(&self, outcome: QueryOutcome) {
        match outcome {
            QueryOutcome::None => {}
            QueryOutcome::Error(code) => self.status.show_error(code),
            QueryOutcome::Success(code) => self.status.show_success(code),
        }
    }

    /// Fire-and-forget: a failed commit leaves the server context stale
    /// with no user-visible signal.
    pub fn committee_changed(&self) {
        let raw = self.committee.value();
        if raw.is_empty() {
            return;
        }
        let id = CommitteeId::new(raw);
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(err) = gateway.commit_committee(&id).await {
                warn!(committee_id = %id, "committee commit dropped: {err}");
            }
        });
    }

    /// Clearing the qualification hides the weight selector without a
    /// server call. A non-empty choice is committed first; the weight list
    /// is revealed and reloaded only once the commit is acknowledged.
    pub async fn qualification_changed(&self) {
        let raw = self.qualification.value();
        if raw.is_empty() {
            self.weight.hide();
            self.weight.set_value("");
            return;
        }
        let id = QualificationId::new(raw);
        match self.gateway.commit_qualification(&id).await {
            Ok(()) => {
                self.weight.reveal();
                self.weight.set_value("");
                self.loader.load_weights(self.weight.as_ref()).await;
            }
            Err(err) => {
                warn!(qualification_id = %id, "qualification commit dropped: {err}");
            }
        }
    }

    pub fn weight_changed(&self) {
        let raw = self.weight.value();
        if raw.is_empty() {
            return;
        }
        let id = WeightId::new(raw);
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(err) = gateway.commit_weight(&id).await {
                warn!(weight_id = %id, "weight commit dropped: {err}");
            }
        });
    }

    /// Must run synchronously, before the host lets the submission
    /// navigate away.
    pub fn form_submitted(&self) {
        self.status.show_loading();
    }

    pub fn status(&self) -> &StatusPanel {
        &self.status
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

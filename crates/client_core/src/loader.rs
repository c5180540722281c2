use std::sync::Arc;

use tracing::{info, warn};

use crate::options::OptionList;
use crate::transport::SelectionGateway;
use crate::view::SelectorView;

pub const QUALIFICATION_PLACEHOLDER: &str = "Select qualification...";
pub const WEIGHT_PLACEHOLDER: &str = "Select weight...";
pub const QUALIFICATION_LOAD_FAILED: &str = "Error loading qualifications";
pub const WEIGHT_LOAD_FAILED: &str = "Error loading weights";

/// Fetches server-rendered option fragments and swaps them into a selector.
/// Transport failures never escape: the selector is left holding a single
/// failure placeholder and the rest of the form stays usable.
pub struct OptionLoader {
    gateway: Arc<dyn SelectionGateway>,
}

impl OptionLoader {
    pub fn new(gateway: Arc<dyn SelectionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn load_qualifications(&self, selector: &dyn SelectorView) -> OptionList {
        let fetched = self.gateway.fetch_qualifications().await;
        Self::apply(
            selector,
            "qualification",
            QUALIFICATION_PLACEHOLDER,
            QUALIFICATION_LOAD_FAILED,
            fetched,
        )
    }

    pub async fn load_weights(&self, selector: &dyn SelectorView) -> OptionList {
        let fetched = self.gateway.fetch_weights().await;
        Self::apply(
            selector,
            "weight",
            WEIGHT_PLACEHOLDER,
            WEIGHT_LOAD_FAILED,
            fetched,
        )
    }

    // Last write wins; a reload fully replaces whatever the selector held.
    fn apply(
        selector: &dyn SelectorView,
        kind: &str,
        placeholder: &str,
        failure_label: &str,
        fetched: anyhow::Result<String>,
    ) -> OptionList {
        let options = match fetched {
            Ok(fragment) => {
                let options = OptionList::from_fragment(placeholder, &fragment);
                info!(kind, options = options.len(), "option list loaded");
                options
            }
            Err(err) => {
                warn!(kind, "option list load failed: {err}");
                OptionList::placeholder(failure_label)
            }
        };
        selector.replace_options(&options);
        options
    }
}

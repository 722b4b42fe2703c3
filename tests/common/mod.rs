//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use view_router::config::{parse_config, RouterConfig, ViewId};
use view_router::history::{Navigator, Outcome, ViewHost};

/// A host that records every outcome it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub outcomes: Arc<Mutex<Vec<Outcome<ViewId>>>>,
}

impl RecordingHost {
    pub fn rendered_views(&self) -> Vec<Option<String>> {
        self.outcomes
            .lock()
            .unwrap()
            .iter()
            .map(|o| o.view().map(|v| v.as_str().to_string()))
            .collect()
    }
}

impl ViewHost<ViewId> for RecordingHost {
    fn render(&mut self, outcome: &Outcome<ViewId>) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

/// Config for an app mounted under `/app/` with a fallback view.
#[allow(dead_code)]
pub fn mounted_config() -> RouterConfig {
    parse_config(
        r#"
        [history]
        base = "/app/"

        [fallback]
        view = "NotFoundView"
        "#,
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn navigator(config: &RouterConfig) -> (Navigator<ViewId, RecordingHost>, RecordingHost) {
    let host = RecordingHost::default();
    let navigator = Navigator::from_config(config, host.clone()).unwrap();
    (navigator, host)
}

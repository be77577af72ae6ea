//! Explainer state store

use dioxus::prelude::*;
use flexplain_common::ExplainerState;
use tracing::{info, warn};

/// Create the explainer store, seeded from a shared `?state=` value when one
/// is given. A link that fails to decode falls back to the defaults.
pub fn use_explainer_store(initial_state: Option<String>) -> Store<ExplainerState> {
    use_store(move || initial_explainer_state(initial_state.as_deref()))
}

fn initial_explainer_state(encoded: Option<&str>) -> ExplainerState {
    let Some(encoded) = encoded else {
        info!("Starting explainer with default layout");
        return ExplainerState::default();
    };

    match ExplainerState::from_share_state(encoded) {
        Ok(state) => {
            info!("Restored explainer layout from link");
            state
        }
        Err(e) => {
            warn!("Ignoring shared state: {}", e);
            ExplainerState::default()
        }
    }
}

/// Report the share link whenever the state changes.
///
/// The first run only subscribes; the link the page was opened with is
/// already in the URL.
pub fn use_share_state_sync(
    state: Store<ExplainerState>,
    on_share_state: Option<EventHandler<Option<String>>>,
) {
    let mut is_mounted = use_signal(|| false);

    use_effect(move || {
        let current = *state.read();

        if !*is_mounted.peek() {
            is_mounted.set(true);
            return;
        }

        let Some(handler) = on_share_state else {
            return;
        };
        match current.share_state() {
            Ok(encoded) => handler.call(encoded),
            Err(e) => warn!("Could not encode share state: {}", e),
        }
    });
}

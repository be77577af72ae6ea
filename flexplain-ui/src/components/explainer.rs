//! Flexbox explainer - the whole widget
//!
//! Owns the store. Every control dispatches a [`ControlAction`]; the
//! panels re-render from the store on each change.

use crate::components::control_panel::ControlPanel;
use crate::components::css_panel::{CssOutput, CssPanel};
use crate::components::preset_bar::PresetBar;
use crate::components::preview::PreviewPanel;
use crate::stores::{use_explainer_store, use_share_state_sync};
use dioxus::prelude::*;
use flexplain_common::{ControlAction, ExplainerState};
use tracing::info;

pub const EXPLAINER_CSS: Asset = asset!("/assets/explainer.css");

#[component]
pub fn FlexboxExplainer(
    /// Encoded `?state=` value to start from
    #[props(default)]
    initial_state: Option<String>,
    /// Called with the new `?state=` value after every change
    #[props(default)]
    on_share_state: Option<EventHandler<Option<String>>>,
) -> Element {
    let mut state = use_explainer_store(initial_state);
    use_share_state_sync(state, on_share_state);

    rsx! {
        document::Link { rel: "stylesheet", href: EXPLAINER_CSS }
        div { class: "flexbox-explainer",
            PresetBar {
                state,
                on_apply: move |(name, preset): (&'static str, ExplainerState)| {
                    info!("Applying preset '{}'", name);
                    state.set(preset);
                },
                on_reset: move |_| {
                    info!("Resetting explainer");
                    state.set(ExplainerState::default());
                },
            }
            div { class: "explainer-layout",
                ControlPanel {
                    state,
                    on_action: move |action: ControlAction| state.write().apply(action),
                }
                PreviewPanel { state }
                CssPanel { state }
            }
            CssOutput { state }
        }
    }
}

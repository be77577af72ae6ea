use crate::Route;
use dioxus::prelude::*;
use flexplain_ui::FlexboxExplainer;

/// Explainer page. Keeps `?state=` in step with the widget so the current
/// layout can be shared as a link.
#[component]
pub fn Explainer(state: Option<String>) -> Element {
    rsx! {
        div { class: "page",
            FlexboxExplainer {
                initial_state: state,
                on_share_state: move |state: Option<String>| {
                    navigator().replace(Route::Explainer { state });
                },
            }
        }
    }
}

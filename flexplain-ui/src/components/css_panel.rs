//! Generated stylesheet text
//!
//! Shown twice: a right-hand column on wide screens and a block below
//! everything on narrow ones. The stylesheet hides one of them at the
//! 900px breakpoint, so both always render the same text.

use dioxus::prelude::*;
use flexplain_common::{generate_css, ExplainerState};

/// Desktop placement, the third column of the explainer grid
#[component]
pub fn CssPanel(state: ReadStore<ExplainerState>) -> Element {
    let css = generate_css(&state.read().layout);

    rsx! {
        div { class: "css-panel desktop-only",
            h3 { class: "panel-title", "Generated CSS" }
            pre { class: "css-code", "{css}" }
        }
    }
}

/// Mobile placement, below the controls
#[component]
pub fn CssOutput(state: ReadStore<ExplainerState>) -> Element {
    let css = generate_css(&state.read().layout);

    rsx! {
        div { class: "css-output mobile-only",
            h4 { class: "css-title", "Generated CSS" }
            pre { class: "css-code", "{css}" }
        }
    }
}

//! Live preview of the configured flex container

use dioxus::prelude::*;
use flexplain_common::{container_style, preview_boxes, ExplainerState};

const ITEM_COLOR: &str = "#6366f1";

#[component]
pub fn PreviewPanel(state: ReadStore<ExplainerState>) -> Element {
    let current = *state.read();
    let style = container_style(&current.layout);
    let boxes = preview_boxes(&current);

    rsx! {
        div { class: "preview-panel",
            h3 { class: "panel-title", "Preview" }
            div {
                class: "preview-container",
                "data-testid": "preview-container",
                style: "{style}",
                for item in boxes {
                    div {
                        key: "{item.label}",
                        class: item.class(),
                        style: "background-color: {ITEM_COLOR};",
                        "{item.label}"
                    }
                }
            }
        }
    }
}

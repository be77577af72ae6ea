//! Preset shortcuts and reset

use crate::components::button::ControlButton;
use dioxus::prelude::*;
use flexplain_common::{builtin_presets, matching_preset, ExplainerState};

#[component]
pub fn PresetBar(
    state: ReadStore<ExplainerState>,
    on_apply: EventHandler<(&'static str, ExplainerState)>,
    on_reset: EventHandler<()>,
) -> Element {
    let current = matching_preset(&state.read());

    rsx! {
        div { class: "preset-bar",
            span { class: "preset-label", "Presets" }
            div { class: "button-group",
                for preset in builtin_presets() {
                    ControlButton {
                        key: "{preset.name}",
                        active: current == Some(preset.name),
                        onclick: move |_| on_apply.call((preset.name, preset.state)),
                        "{preset.name}"
                    }
                }
            }
            ControlButton {
                active: false,
                disabled: *state.read() == ExplainerState::default(),
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}

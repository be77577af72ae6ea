//! Control panel: one group per flex property, the gap slider and item count

use crate::components::option_group::OptionGroup;
use dioxus::prelude::*;
use flexplain_common::{
    control_groups, ControlAction, ControlGroup, ControlKind, ExplainerState, Gap, LayoutField,
};
use tracing::warn;

#[component]
pub fn ControlPanel(
    state: ReadStore<ExplainerState>,
    on_action: EventHandler<ControlAction>,
) -> Element {
    let groups = control_groups(&state.read());

    rsx! {
        div { class: "controls-panel",
            h3 { class: "panel-title", "Flexbox Properties" }
            for group in groups {
                ControlGroupView { key: "{group.key}", group: group.clone(), on_action }
            }
        }
    }
}

/// Header with the property name and its current value, then the control
#[component]
fn ControlGroupView(group: ControlGroup, on_action: EventHandler<ControlAction>) -> Element {
    let control = match group.kind.clone() {
        ControlKind::Options(options) => rsx! {
            OptionGroup { options, on_select: on_action }
        },
        ControlKind::Slider { min, max, value } => rsx! {
            GapSlider { min, max, value, on_action }
        },
    };

    rsx! {
        div { class: "control-group",
            label { class: "control-label",
                "{group.key}:"
                span { class: "property-value", "{group.value}" }
            }
            if let Some(hint) = group.hint {
                span { class: "hint", "{hint}" }
            }
            {control}
        }
    }
}

/// Range input for `gap`. Dispatches on every input event.
#[component]
fn GapSlider(min: u8, max: u8, value: u8, on_action: EventHandler<ControlAction>) -> Element {
    rsx! {
        input {
            class: "range-slider",
            r#type: "range",
            min: "{min}",
            max: "{max}",
            step: "1",
            value: "{value}",
            oninput: move |e| {
                let raw = e.value();
                match Gap::from_slider(&raw) {
                    Some(gap) => on_action.call(ControlAction::Field(LayoutField::Gap(gap))),
                    None => warn!("Ignoring non-numeric gap input '{}'", raw),
                }
            },
        }
    }
}

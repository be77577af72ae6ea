//! A row of option buttons where exactly one is active

use crate::components::button::ControlButton;
use dioxus::prelude::*;
use flexplain_common::{ControlAction, ControlOption};

#[component]
pub fn OptionGroup(options: Vec<ControlOption>, on_select: EventHandler<ControlAction>) -> Element {
    rsx! {
        div { class: "button-group",
            for option in options {
                ControlButton {
                    key: "{option.label}",
                    active: option.active,
                    disabled: option.disabled,
                    title: option.title.map(str::to_string),
                    onclick: {
                        let action = option.action;
                        move |_| on_select.call(action)
                    },
                    "{option.label}"
                }
            }
        }
    }
}

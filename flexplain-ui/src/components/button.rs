//! Option button used by every control group

use dioxus::prelude::*;

/// Chromeless button - accessibility and click guarding without styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_pressed: pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Toggle-style control button. The active button shows the property's
/// current value.
#[component]
pub fn ControlButton(
    active: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if active {
        "control-btn active"
    } else {
        "control-btn"
    };

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            disabled,
            title,
            pressed: Some(active),
            onclick,
            {children}
        }
    }
}

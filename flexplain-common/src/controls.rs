//! Control panel model: one group per property plus the item count group.
//!
//! Components only turn these into markup, so the active and disabled rules
//! live here where they can be tested without a renderer.

use crate::layout::{
    AlignContent, AlignItems, ExplainerState, FlexDirection, FlexWrap, Gap, ItemCount,
    JustifyContent, LayoutField, Property,
};

/// What clicking a control does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Field(LayoutField),
    ItemCount(ItemCount),
}

impl ExplainerState {
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::Field(field) => self.set_field(field),
            ControlAction::ItemCount(count) => self.set_item_count(count),
        }
    }
}

/// Tooltip on the align-content buttons while they have no effect
pub const NEEDS_WRAP_TITLE: &str = "Only applies when flex-wrap is wrap or wrap-reverse";

/// A single button in an option group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlOption {
    pub label: String,
    pub action: ControlAction,
    pub active: bool,
    pub disabled: bool,
    /// Tooltip explaining why the option is disabled
    pub title: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Options(Vec<ControlOption>),
    Slider { min: u8, max: u8, value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlGroup {
    /// Stable key, the CSS property name or `items`
    pub key: &'static str,
    /// Current value as shown in the header badge
    pub value: String,
    pub hint: Option<&'static str>,
    pub kind: ControlKind,
}

fn option_group<T: Copy + PartialEq + ToString>(
    state: &ExplainerState,
    property: Property,
    domain: &[T],
    current: T,
    wrap_field: impl Fn(T) -> LayoutField,
    disabled: bool,
) -> ControlGroup {
    let options = domain
        .iter()
        .map(|value| ControlOption {
            label: value.to_string(),
            action: ControlAction::Field(wrap_field(*value)),
            active: *value == current,
            disabled,
            title: disabled.then_some(NEEDS_WRAP_TITLE),
        })
        .collect();

    ControlGroup {
        key: property.css_name(),
        value: state.layout.css_value(property),
        hint: None,
        kind: ControlKind::Options(options),
    }
}

/// All control groups for `state`, in panel order
pub fn control_groups(state: &ExplainerState) -> Vec<ControlGroup> {
    let layout = &state.layout;

    let mut align_content = option_group(
        state,
        Property::AlignContent,
        AlignContent::ALL,
        layout.align_content,
        LayoutField::AlignContent,
        !layout.align_content_applies(),
    );
    align_content.hint = Some("(needs wrap)");

    let items = ControlGroup {
        key: "items",
        value: state.item_count.to_string(),
        hint: None,
        kind: ControlKind::Options(
            ItemCount::ALL
                .iter()
                .map(|count| ControlOption {
                    label: count.to_string(),
                    action: ControlAction::ItemCount(*count),
                    active: *count == state.item_count,
                    disabled: false,
                    title: None,
                })
                .collect(),
        ),
    };

    vec![
        option_group(
            state,
            Property::FlexDirection,
            FlexDirection::ALL,
            layout.direction,
            LayoutField::Direction,
            false,
        ),
        option_group(
            state,
            Property::JustifyContent,
            JustifyContent::ALL,
            layout.justify,
            LayoutField::Justify,
            false,
        ),
        option_group(
            state,
            Property::AlignItems,
            AlignItems::ALL,
            layout.align_items,
            LayoutField::AlignItems,
            false,
        ),
        option_group(
            state,
            Property::FlexWrap,
            FlexWrap::ALL,
            layout.wrap,
            LayoutField::Wrap,
            false,
        ),
        align_content,
        ControlGroup {
            key: Property::Gap.css_name(),
            value: layout.gap.to_string(),
            hint: None,
            kind: ControlKind::Slider {
                min: Gap::MIN,
                max: Gap::MAX,
                value: layout.gap.px(),
            },
        },
        items,
    ]
}

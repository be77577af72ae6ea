//! Named starting points for the explainer

use crate::layout::{
    AlignContent, AlignItems, ExplainerState, FlexDirection, FlexWrap, Gap, ItemCount,
    JustifyContent, LayoutField,
};

/// A named explainer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub state: ExplainerState,
}

impl Preset {
    /// Start from the mount defaults
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ExplainerState::default(),
        }
    }

    pub fn set(mut self, field: LayoutField) -> Self {
        self.state.layout.set_field(field);
        self
    }

    pub fn items(mut self, count: ItemCount) -> Self {
        self.state.item_count = count;
        self
    }

    pub fn matches(&self, state: &ExplainerState) -> bool {
        self.state == *state
    }
}

/// Built-in presets, shown in this order
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Default"),
        Preset::new("Centered")
            .set(LayoutField::Justify(JustifyContent::Center))
            .set(LayoutField::AlignItems(AlignItems::Center))
            .items(ItemCount::Three),
        Preset::new("Navbar")
            .set(LayoutField::Justify(JustifyContent::SpaceBetween))
            .set(LayoutField::AlignItems(AlignItems::Center))
            .set(LayoutField::Gap(Gap::new(8))),
        Preset::new("Sidebar stack")
            .set(LayoutField::Direction(FlexDirection::Column))
            .set(LayoutField::Justify(JustifyContent::FlexStart))
            .set(LayoutField::AlignItems(AlignItems::Stretch))
            .set(LayoutField::Gap(Gap::new(8))),
        Preset::new("Wrapping grid")
            .set(LayoutField::Justify(JustifyContent::FlexStart))
            .set(LayoutField::AlignItems(AlignItems::FlexStart))
            .set(LayoutField::Wrap(FlexWrap::Wrap))
            .set(LayoutField::AlignContent(AlignContent::FlexStart))
            .items(ItemCount::Ten),
    ]
}

/// Name of the built-in preset equal to `state`, if any
pub fn matching_preset(state: &ExplainerState) -> Option<&'static str> {
    builtin_presets()
        .into_iter()
        .find(|preset| preset.matches(state))
        .map(|preset| preset.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_matches_mount_state() {
        assert_eq!(matching_preset(&ExplainerState::default()), Some("Default"));
    }

    #[test]
    fn test_presets_are_distinct() {
        let presets = builtin_presets();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.state, b.state, "{} and {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("x")
            .set(LayoutField::Direction(FlexDirection::RowReverse))
            .items(ItemCount::Six);
        assert_eq!(preset.state.layout.direction, FlexDirection::RowReverse);
        assert_eq!(preset.state.layout.justify, JustifyContent::Center);
        assert_eq!(preset.state.item_count, ItemCount::Six);
    }

    #[test]
    fn test_edit_leaves_preset() {
        let mut state = builtin_presets()[2].state;
        assert_eq!(matching_preset(&state), Some("Navbar"));
        state.set_field(LayoutField::Gap(Gap::new(9)));
        assert_eq!(matching_preset(&state), None);
    }
}

//! Flexbox layout configuration and the explainer state that wraps it

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ParseKeywordError;

/// Declares an enum over a closed set of CSS keywords.
///
/// Variants are listed in the order the control panel presents them.
macro_rules! css_keyword {
    (
        $(#[$meta:meta])*
        $name:ident ($property:literal), default = $default:ident {
            $($variant:ident => $css:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The keyword as it appears in a stylesheet
            pub fn as_css(self) -> &'static str {
                match self {
                    $($name::$variant => $css,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($css => Ok($name::$variant),)+
                    _ => Err(ParseKeywordError {
                        property: $property,
                        keyword: s.to_string(),
                    }),
                }
            }
        }
    };
}

css_keyword! {
    /// Main axis direction
    FlexDirection ("flex-direction"), default = Row {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

css_keyword! {
    /// Distribution of items along the main axis
    JustifyContent ("justify-content"), default = Center {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

css_keyword! {
    /// Alignment of items on the cross axis
    AlignItems ("align-items"), default = Center {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

css_keyword! {
    FlexWrap ("flex-wrap"), default = NoWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

css_keyword! {
    /// Distribution of wrapped lines on the cross axis. Only has an effect
    /// when the container wraps.
    AlignContent ("align-content"), default = Stretch {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
}

impl FlexDirection {
    /// Whether the main axis is vertical (`column` or `column-reverse`)
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }
}

impl FlexWrap {
    pub fn wraps(self) -> bool {
        self != FlexWrap::NoWrap
    }
}

/// Gap between items in pixels, always within `0..=32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gap(u8);

impl Gap {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 32;

    /// Clamps `px` into the supported range
    pub const fn new(px: u8) -> Self {
        if px > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(px)
        }
    }

    /// Exact constructor, `None` when out of range
    pub fn try_new(px: i64) -> Option<Self> {
        u8::try_from(px)
            .ok()
            .filter(|px| *px <= Self::MAX)
            .map(Self)
    }

    /// Parses raw slider input, clamping numeric values into range
    pub fn from_slider(raw: &str) -> Option<Self> {
        let px: i64 = raw.trim().parse().ok()?;
        Some(Self(px.clamp(Self::MIN as i64, Self::MAX as i64) as u8))
    }

    pub fn px(self) -> u8 {
        self.0
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self(16)
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Number of preview boxes. Only the counts offered by the controls exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemCount {
    Three,
    #[default]
    Four,
    Five,
    Six,
    Eight,
    Ten,
}

impl ItemCount {
    pub const ALL: &'static [ItemCount] = &[
        ItemCount::Three,
        ItemCount::Four,
        ItemCount::Five,
        ItemCount::Six,
        ItemCount::Eight,
        ItemCount::Ten,
    ];

    pub fn get(self) -> usize {
        match self {
            ItemCount::Three => 3,
            ItemCount::Four => 4,
            ItemCount::Five => 5,
            ItemCount::Six => 6,
            ItemCount::Eight => 8,
            ItemCount::Ten => 10,
        }
    }
}

impl TryFrom<usize> for ItemCount {
    type Error = String;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        ItemCount::ALL
            .iter()
            .copied()
            .find(|c| c.get() == count)
            .ok_or_else(|| format!("{count} is not a supported item count"))
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The container properties shown by the explainer, in stylesheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    FlexDirection,
    JustifyContent,
    AlignItems,
    FlexWrap,
    AlignContent,
    Gap,
}

impl Property {
    pub const ALL: &'static [Property] = &[
        Property::FlexDirection,
        Property::JustifyContent,
        Property::AlignItems,
        Property::FlexWrap,
        Property::AlignContent,
        Property::Gap,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            Property::FlexDirection => "flex-direction",
            Property::JustifyContent => "justify-content",
            Property::AlignItems => "align-items",
            Property::FlexWrap => "flex-wrap",
            Property::AlignContent => "align-content",
            Property::Gap => "gap",
        }
    }
}

/// A single field update: which property, and its new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutField {
    Direction(FlexDirection),
    Justify(JustifyContent),
    AlignItems(AlignItems),
    Wrap(FlexWrap),
    AlignContent(AlignContent),
    Gap(Gap),
}

impl LayoutField {
    pub fn property(self) -> Property {
        match self {
            LayoutField::Direction(_) => Property::FlexDirection,
            LayoutField::Justify(_) => Property::JustifyContent,
            LayoutField::AlignItems(_) => Property::AlignItems,
            LayoutField::Wrap(_) => Property::FlexWrap,
            LayoutField::AlignContent(_) => Property::AlignContent,
            LayoutField::Gap(_) => Property::Gap,
        }
    }

    /// Button label for this value
    pub fn label(self) -> String {
        match self {
            LayoutField::Direction(v) => v.to_string(),
            LayoutField::Justify(v) => v.to_string(),
            LayoutField::AlignItems(v) => v.to_string(),
            LayoutField::Wrap(v) => v.to_string(),
            LayoutField::AlignContent(v) => v.to_string(),
            LayoutField::Gap(v) => v.to_string(),
        }
    }
}

/// Flex container configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align_items: AlignItems,
    pub wrap: FlexWrap,
    pub align_content: AlignContent,
    pub gap: Gap,
}

impl LayoutConfig {
    /// Replace exactly one field, leaving the others untouched
    pub fn set_field(&mut self, field: LayoutField) {
        match field {
            LayoutField::Direction(v) => self.direction = v,
            LayoutField::Justify(v) => self.justify = v,
            LayoutField::AlignItems(v) => self.align_items = v,
            LayoutField::Wrap(v) => self.wrap = v,
            LayoutField::AlignContent(v) => self.align_content = v,
            LayoutField::Gap(v) => self.gap = v,
        }
    }

    /// Current value of `property`, as a field update
    pub fn field(&self, property: Property) -> LayoutField {
        match property {
            Property::FlexDirection => LayoutField::Direction(self.direction),
            Property::JustifyContent => LayoutField::Justify(self.justify),
            Property::AlignItems => LayoutField::AlignItems(self.align_items),
            Property::FlexWrap => LayoutField::Wrap(self.wrap),
            Property::AlignContent => LayoutField::AlignContent(self.align_content),
            Property::Gap => LayoutField::Gap(self.gap),
        }
    }

    /// Stylesheet value of `property` (`gap` carries its `px` unit)
    pub fn css_value(&self, property: Property) -> String {
        self.field(property).label()
    }

    /// `align-content` only applies to a wrapping container
    pub fn align_content_applies(&self) -> bool {
        self.wrap.wraps()
    }
}

/// Everything the explainer renders from: the container config and the
/// number of boxes inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplainerState {
    pub layout: LayoutConfig,
    pub item_count: ItemCount,
}

impl ExplainerState {
    pub fn set_field(&mut self, field: LayoutField) {
        debug!(
            "Setting {} to {}",
            field.property().css_name(),
            field.label()
        );
        self.layout.set_field(field);
    }

    pub fn set_item_count(&mut self, count: ItemCount) {
        debug!("Setting item count to {}", count);
        self.item_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.direction, FlexDirection::Row);
        assert_eq!(config.justify, JustifyContent::Center);
        assert_eq!(config.align_items, AlignItems::Center);
        assert_eq!(config.wrap, FlexWrap::NoWrap);
        assert_eq!(config.align_content, AlignContent::Stretch);
        assert_eq!(config.gap.px(), 16);
        assert_eq!(ExplainerState::default().item_count.get(), 4);
    }

    #[test]
    fn test_set_field_changes_only_that_field() {
        let mut config = LayoutConfig::default();
        config.set_field(LayoutField::Justify(JustifyContent::SpaceEvenly));

        let expected = LayoutConfig {
            justify: JustifyContent::SpaceEvenly,
            ..LayoutConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let mut once = LayoutConfig::default();
        once.set_field(LayoutField::Direction(FlexDirection::ColumnReverse));
        let mut twice = once;
        twice.set_field(LayoutField::Direction(FlexDirection::ColumnReverse));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_keyword_parses_back() {
        for v in FlexDirection::ALL {
            assert_eq!(v.as_css().parse::<FlexDirection>(), Ok(*v));
        }
        for v in JustifyContent::ALL {
            assert_eq!(v.as_css().parse::<JustifyContent>(), Ok(*v));
        }
        for v in AlignItems::ALL {
            assert_eq!(v.as_css().parse::<AlignItems>(), Ok(*v));
        }
        for v in FlexWrap::ALL {
            assert_eq!(v.as_css().parse::<FlexWrap>(), Ok(*v));
        }
        for v in AlignContent::ALL {
            assert_eq!(v.as_css().parse::<AlignContent>(), Ok(*v));
        }
    }

    #[test]
    fn test_unknown_keyword_names_property() {
        let err = "space-evenly".parse::<AlignContent>().unwrap_err();
        assert_eq!(err.property, "align-content");
        assert_eq!(err.to_string(), "'space-evenly' is not a valid align-content value");
    }

    #[test]
    fn test_is_column() {
        assert!(!FlexDirection::Row.is_column());
        assert!(!FlexDirection::RowReverse.is_column());
        assert!(FlexDirection::Column.is_column());
        assert!(FlexDirection::ColumnReverse.is_column());
    }

    #[test]
    fn test_gap_clamps() {
        assert_eq!(Gap::new(40).px(), 32);
        assert_eq!(Gap::from_slider("-3"), Some(Gap::new(0)));
        assert_eq!(Gap::from_slider("33"), Some(Gap::new(32)));
        assert_eq!(Gap::from_slider(" 12 "), Some(Gap::new(12)));
        assert_eq!(Gap::from_slider("twelve"), None);
        assert_eq!(Gap::try_new(32), Some(Gap::new(32)));
        assert_eq!(Gap::try_new(33), None);
        assert_eq!(Gap::try_new(-1), None);
    }

    #[test]
    fn test_gap_constructors_stay_in_range() {
        for px in 0..=u8::MAX {
            assert!(Gap::new(px).px() <= Gap::MAX);
            assert!(Gap::from_slider(&px.to_string()).unwrap().px() <= Gap::MAX);
            match Gap::try_new(px as i64) {
                Some(gap) => assert_eq!(gap.px(), px),
                None => assert!(px > Gap::MAX),
            }
        }
        assert_eq!(Gap::try_new(200), None);
    }

    #[test]
    fn test_item_count_domain() {
        let counts: Vec<usize> = ItemCount::ALL.iter().map(|c| c.get()).collect();
        assert_eq!(counts, vec![3, 4, 5, 6, 8, 10]);
        assert_eq!(ItemCount::try_from(8), Ok(ItemCount::Eight));
        assert!(ItemCount::try_from(7).is_err());
    }

    #[test]
    fn test_wrap_keeps_align_content() {
        let mut state = ExplainerState::default();
        state.set_field(LayoutField::AlignContent(AlignContent::SpaceAround));
        state.set_field(LayoutField::Wrap(FlexWrap::Wrap));
        assert_eq!(state.layout.align_content, AlignContent::SpaceAround);
        state.set_field(LayoutField::Wrap(FlexWrap::NoWrap));
        assert_eq!(state.layout.align_content, AlignContent::SpaceAround);
    }
}

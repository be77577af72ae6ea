//! Sizing of the numbered preview boxes

use crate::layout::{AlignItems, ExplainerState, LayoutConfig};

/// Side length of an unstretched preview box
pub const BOX_SIZE_PX: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Fixed(u16),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSize {
    pub width: Length,
    pub height: Length,
}

impl BoxSize {
    /// Box size under `config`.
    ///
    /// With `align-items: stretch` the cross axis is left automatic so the
    /// box fills the line: height for row layouts, width for column layouts.
    pub fn for_layout(config: &LayoutConfig) -> Self {
        let fixed = Length::Fixed(BOX_SIZE_PX);
        if config.align_items != AlignItems::Stretch {
            return Self {
                width: fixed,
                height: fixed,
            };
        }

        if config.direction.is_column() {
            Self {
                width: Length::Auto,
                height: fixed,
            }
        } else {
            Self {
                width: fixed,
                height: Length::Auto,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBox {
    /// 1-based position, shown inside the box
    pub label: usize,
    pub size: BoxSize,
}

impl PreviewBox {
    /// Class list for the box; the stylesheet maps the stretch classes to
    /// `auto` on the matching side.
    pub fn class(&self) -> &'static str {
        match (self.size.width, self.size.height) {
            (_, Length::Auto) => "flex-item stretch-height",
            (Length::Auto, _) => "flex-item stretch-width",
            _ => "flex-item",
        }
    }
}

/// Boxes labelled `1..=item_count`, in order
pub fn preview_boxes(state: &ExplainerState) -> Vec<PreviewBox> {
    let size = BoxSize::for_layout(&state.layout);
    (1..=state.item_count.get())
        .map(|label| PreviewBox { label, size })
        .collect()
}

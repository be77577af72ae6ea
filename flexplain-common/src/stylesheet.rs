//! Stylesheet text for the current container configuration

use crate::layout::{LayoutConfig, Property};

/// Selector the generated rule is written against
pub const SELECTOR: &str = ".container";

/// Render `config` as a `.container` rule.
///
/// `display: flex` comes first, then each property in [`Property::ALL`] order.
pub fn generate_css(config: &LayoutConfig) -> String {
    let mut css = format!("{SELECTOR} {{\n  display: flex;\n");
    for property in Property::ALL {
        css.push_str(&format!(
            "  {}: {};\n",
            property.css_name(),
            config.css_value(*property)
        ));
    }
    css.push('}');
    css
}

/// Inline style for the preview container: the six flex properties plus the
/// fixed chrome around them.
pub fn container_style(config: &LayoutConfig) -> String {
    let mut style = String::from("display: flex; ");
    for property in Property::ALL {
        style.push_str(&format!(
            "{}: {}; ",
            property.css_name(),
            config.css_value(*property)
        ));
    }
    style.push_str(
        "width: 100%; flex: 1; min-height: 200px; background: #f8f9fa; \
         border-radius: 4px; padding: 8px; border: 1px dashed #d1d5db; \
         box-sizing: border-box;",
    );
    style
}

pub mod button;
pub mod control_panel;
pub mod css_panel;
pub mod explainer;
pub mod option_group;
pub mod preset_bar;
pub mod preview;

pub use button::*;
pub use control_panel::*;
pub use css_panel::*;
pub use explainer::*;
pub use option_group::*;
pub use preset_bar::*;
pub use preview::*;

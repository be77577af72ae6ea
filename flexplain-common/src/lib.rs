//! flexplain-common - Flexbox explainer model
//!
//! Layout configuration, control panel model, preview sizing and stylesheet
//! generation. No UI framework dependency.

mod controls;
mod error;
mod layout;
mod presets;
mod preview;
mod share;
mod stylesheet;

pub use controls::*;
pub use error::*;
pub use layout::*;
pub use presets::*;
pub use preview::*;
pub use share::{build_state, parse_state};
pub use stylesheet::*;

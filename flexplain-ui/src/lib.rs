//! flexplain-ui - Flexbox explainer components
//!
//! The explainer store and the view components that render from it. Mounted
//! by flexplain-web.

pub mod components;
pub mod stores;

pub use components::*;

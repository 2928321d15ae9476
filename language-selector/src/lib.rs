//! A language selector control for [`mapdom`] maps.
//!
//! The control renders one button per language, tracks which one is selected,
//! optionally collapses into a compact trigger, and reports every selection to
//! a host callback.

pub mod button;
pub mod config;
pub mod error;
pub mod selector;

pub use button::{LanguageButton, button_element_id};
pub use config::{Callback, LanguageDescriptor, SelectorConfig, SelectorOptions};
pub use error::SelectorError;
pub use selector::{BUTTON_CLASS, BUTTON_DISABLED_CLASS, LanguageSelector, SelectorId};

pub use mapdom::Corner;

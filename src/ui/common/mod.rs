//! Common reusable UI components

pub mod form;
pub mod spinner;

pub use form::FormField;
pub use spinner::{LoadingOverlay, Spinner};

//! Student domain: records, validation, backend client and the editor flow

mod api;
#[cfg(feature = "ssr")]
pub mod config;
mod editor;
mod notification;
#[cfg(feature = "ssr")]
pub mod proxy;
mod student;
pub mod validation;

pub use api::*;
pub use editor::*;
pub use notification::*;
pub use student::*;

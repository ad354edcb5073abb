pub mod auth;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod student_editor;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer, provide_notifications};
pub use student_editor::StudentEditor;

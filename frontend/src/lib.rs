//! A modal dialog component for Yew.
//!
//! [`Modal`] renders nothing while closed. While open it renders an overlay,
//! a content panel with an optional title, a body, and a footer holding a
//! close button. Overlay clicks, the close button, and the Escape key all
//! ask the caller to close through `on_close`; the caller owns `is_open`.

pub mod class_names;
pub mod components;
pub mod error;
pub mod escape;

#[cfg(feature = "demo")]
pub mod demo;

pub use class_names::{compose_class, ModalClassNames};
pub use components::modal::{Modal, ModalProps};
pub use error::{ModalError, ModalResult};
pub use escape::{active_escape_listeners, EscapeListener};

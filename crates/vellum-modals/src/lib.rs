#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Vellum modal layer.
//!
//! A provider owns one mount node near the application root and publishes it
//! through context; `Modal` portals its content into that node above the rest
//! of the editor. Header, body and action-row components compose dialog
//! content. Lifecycle, theme and stylesheet logic is target independent; the
//! Yew components are built for wasm32.

pub mod error;
pub mod registry;
pub mod style;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod demo;

pub use error::ModalError;
pub use registry::{AttachOutcome, ModalContainer, MountState, resolve_container};
pub use theme::{ModalTheme, OVERLAY_OFFSET, Z_INDEX};

#[cfg(target_arch = "wasm32")]
pub use components::icons::{CloseIcon, IconProps};
#[cfg(target_arch = "wasm32")]
pub use components::modal::{Modal, ModalOverlay, ModalOverlayProps, ModalProps};
#[cfg(target_arch = "wasm32")]
pub use components::parts::{
    ModalActions, ModalActionsProps, ModalBody, ModalBodyProps, ModalHeader, ModalHeaderProps,
};
#[cfg(target_arch = "wasm32")]
pub use components::provider::{
    MOUNT_NODE_ID, ModalProvider, ModalProviderProps, try_use_modal_container,
    use_modal_container,
};
#[cfg(target_arch = "wasm32")]
pub use demo::run_app;

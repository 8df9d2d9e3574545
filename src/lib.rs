//! Light/dark theme controller for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It resolves
//! the page theme from an explicit user preference (persisted in
//! `localStorage`) or, failing that, from the operating system's color-scheme
//! signal. The resolved theme is written to a `data-theme` attribute on the
//! `<html>` element and mirrored onto an optional toggle button.
//!
//! The resolution logic lives in [`controller::ThemeController`], which is
//! generic over the collaborators in [`host`]. Browser bindings for those
//! collaborators are only compiled with the `hydrate` feature; everything else
//! runs (and is tested) natively against the fakes in [`memory`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Theme resolution, apply, and event handlers |
//! | [`theme`] | The two-valued [`theme::Theme`] type |
//! | [`host`] | Collaborator traits: store, system scheme, root, toggle |
//! | [`memory`] | In-memory collaborators for tests and non-browser hosts |
//! | [`config`] | Names and glyphs used to locate and decorate DOM elements |
//! | [`consts`] | Default names shared by config and tests |
//! | [`error`] | Crate error type |
//! | `browser` | web-sys collaborators and listener wiring (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::{Persist, ThemeController};
pub use error::ThemeError;
pub use theme::Theme;

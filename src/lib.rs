//! # ECS Models
//!
//! Steady-state models of aircraft environmental control system (ECS)
//! air-conditioning loops, built as [Twine](https://github.com/isentropic-dev/twine)
//! models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it.

pub mod models;
pub mod support;

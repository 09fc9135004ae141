// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - The single fading toast, its state machine and accessor
//! - [`design_tokens`] - Design system constants (colors, spacing, toast geometry)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod toast;

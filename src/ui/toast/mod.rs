// SPDX-License-Identifier: MPL-2.0
//! Single fading toast for transient user feedback.
//!
//! One toast can be on screen at a time. It fades in, stays for a display
//! duration, then fades out. Any part of the application holding a
//! [`Toaster`] can show or hide it without access to the widget tree.
//!
//! # Components
//!
//! - [`phase`] - Presentation phases and their transition table
//! - [`policy`] - Replace vs. drop handling of requests while a toast is active
//! - [`timing`] - Display/fade durations, easing and the dismissal timer
//! - [`controller`] - The state machine owning message, opacity and timer
//! - [`toaster`] - Mounting and the call-from-anywhere accessor
//! - [`view`] - Rendering of the label and overlay layer
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toast::{Controller, Toaster};
//!
//! // At the composition root
//! let toaster = Toaster::new();
//! let host = toaster.mount(Controller::default());
//!
//! // Anywhere a clone of `toaster` was handed out
//! toaster.show("Image saved");
//!
//! // In `update`, on every tick
//! host.tick(Instant::now());
//!
//! // In `view`
//! toast::view::overlay(content, host.snapshot(Instant::now()), 100.0)
//! ```

pub mod controller;
pub mod phase;
pub mod policy;
pub mod timing;
pub mod toaster;
pub mod view;

pub use controller::{Controller, ControllerSettings, ShowOutcome};
pub use phase::Phase;
pub use policy::Policy;
pub use timing::{DisplayDuration, Easing, FadeDuration};
pub use toaster::{ToastHost, Toaster};
pub use view::ToastSnapshot;

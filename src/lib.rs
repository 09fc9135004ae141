// SPDX-License-Identifier: MPL-2.0
//! `fade_toast` provides a single fading toast overlay for Iced applications.
//!
//! The toast is driven by an explicit state machine and reached through a
//! cloneable [`ui::toast::Toaster`] handed out from the application root, so
//! any component or background task can show a message without access to the
//! widget tree. A small demo application lives in [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

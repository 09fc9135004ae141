// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a toast stays on screen
//! - **Fade**: Length of the fade-in/fade-out animations
//! - **Placement**: Where the toast sits in the window

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default time a toast stays fully visible (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 3000;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Default fade-in and fade-out length (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = 200;

/// Longest accepted fade (in milliseconds).
pub const MAX_FADE_DURATION_MS: u64 = 2000;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Default distance between the toast and the bottom edge (in pixels).
pub const DEFAULT_BOTTOM_OFFSET: f32 = 100.0;

/// Largest accepted bottom offset (in pixels).
pub const MAX_BOTTOM_OFFSET: f32 = 1000.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    assert!(DEFAULT_DISPLAY_DURATION_MS > 0);
    assert!(DEFAULT_BOTTOM_OFFSET >= 0.0 && DEFAULT_BOTTOM_OFFSET <= MAX_BOTTOM_OFFSET);
};

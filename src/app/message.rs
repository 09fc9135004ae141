// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::ToastConfig;
use crate::ui::toast::Policy;
use std::ffi::OsString;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The text input changed.
    DraftChanged(String),
    /// Show the draft for the default duration.
    ShowPressed,
    /// Show the draft for the long duration.
    ShowLongPressed,
    HidePressed,
    /// Switch between replace and drop-while-active, persisting the choice.
    TogglePolicy,
    /// Start a background task that shows a toast when it completes.
    StartJob,
    /// A background task finished; carries its sequence number.
    JobFinished(u32),
    Tick(Instant), // Periodic tick for fades and the dismissal timer
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Overrides `[toast] policy`.
    pub policy: Option<Policy>,
    /// Overrides `[toast] display_duration_ms`.
    pub duration_ms: Option<u64>,
    /// Overrides `[toast] fade_duration_ms`.
    pub fade_ms: Option<u64>,
    /// Directory containing `settings.toml`.
    /// Takes precedence over `FADE_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Parses flags from command-line arguments (program name excluded).
    ///
    /// Unrecognised trailing arguments are logged and ignored.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Self {
            policy: args.opt_value_from_str("--policy")?,
            duration_ms: args.opt_value_from_str("--duration-ms")?,
            fade_ms: args.opt_value_from_str("--fade-ms")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let leftover: Vec<OsString> = args.finish();
        if !leftover.is_empty() {
            log::warn!("ignoring unexpected arguments: {leftover:?}");
        }

        Ok(flags)
    }

    /// Applies CLI overrides on top of the loaded `[toast]` section.
    pub fn apply_to(&self, toast: &mut ToastConfig) {
        if let Some(policy) = self.policy {
            toast.policy = Some(policy);
        }
        if let Some(duration_ms) = self.duration_ms {
            toast.display_duration_ms = Some(duration_ms);
        }
        if let Some(fade_ms) = self.fade_ms {
            toast.fade_duration_ms = Some(fade_ms);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo application.

use super::Message;
use crate::config::{self, Config};
use crate::ui::toast::{ToastHost, Toaster};
use iced::Task;
use std::path::Path;
use std::time::Duration;

/// Display time used by the "Show 6s" button.
pub const LONG_DISPLAY: Duration = Duration::from_secs(6);

/// How long the simulated background job takes.
pub const JOB_DURATION: Duration = Duration::from_millis(1500);

const FALLBACK_MESSAGE: &str = "Hello from fade_toast";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub toaster: &'a Toaster,
    pub host: &'a ToastHost,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub draft: &'a mut String,
    pub jobs_started: &'a mut u32,
    pub jobs_running: &'a mut u32,
}

/// Shows the draft (or a fallback text) through the accessor.
pub fn handle_show(ctx: &mut UpdateContext<'_>, duration: Option<Duration>) -> Task<Message> {
    let message = toast_text(ctx.draft);
    match duration {
        Some(duration) => ctx.toaster.show_for(message, duration),
        None => ctx.toaster.show(message),
    }
    Task::none()
}

/// Flips the policy on the mounted host and persists it.
pub fn handle_toggle_policy(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let policy = ctx.host.policy().toggled();
    ctx.host.set_policy(policy);
    ctx.config.toast.policy = Some(policy);

    match config::save_with_override(ctx.config, ctx.config_dir.map(Path::to_path_buf)) {
        Ok(()) => log::info!("toast policy set to {policy}"),
        Err(err) => {
            log::warn!("failed to persist toast policy: {err}");
            ctx.toaster.show("Settings could not be saved");
        }
    }
    Task::none()
}

/// Spawns a job that raises its own toast from the async runtime.
pub fn handle_start_job(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.jobs_started += 1;
    *ctx.jobs_running += 1;
    let id = *ctx.jobs_started;
    let toaster = ctx.toaster.clone();

    Task::perform(
        async move {
            tokio::time::sleep(JOB_DURATION).await;
            toaster.show(format!("Background job #{id} finished"));
            id
        },
        Message::JobFinished,
    )
}

pub fn handle_job_finished(ctx: &mut UpdateContext<'_>, id: u32) -> Task<Message> {
    *ctx.jobs_running = ctx.jobs_running.saturating_sub(1);
    log::debug!("background job #{id} finished");
    Task::none()
}

/// Text to show for the current draft.
fn toast_text(draft: &str) -> String {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

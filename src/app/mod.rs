// SPDX-License-Identifier: MPL-2.0
//! Demo application and composition root.
//!
//! The `App` loads the configuration, creates the single [`Toaster`], mounts
//! the toast host and hands `Toaster` clones to whatever needs to raise a
//! toast, including background tasks that run outside the update loop.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Controller, ToastHost, Toaster};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Root Iced application state.
pub struct App {
    /// Accessor handed out to anything that raises toasts.
    toaster: Toaster,
    /// The mounted toast; dropping it would unmount.
    host: ToastHost,
    config: Config,
    /// Directory override for `settings.toml`, from the CLI.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    bottom_offset: f32,
    /// Contents of the message input.
    draft: String,
    jobs_started: u32,
    jobs_running: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.host.phase())
            .field("policy", &self.host.policy())
            .field("jobs_running", &self.jobs_running)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, applies CLI overrides and mounts the toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (mut config, config_warning) = config::load_with_override(config_dir.clone());
        flags.apply_to(&mut config.toast);

        let settings = config.toast.controller_settings();
        log::info!(
            "mounting toast: policy={}, display={:?}, fade={}ms",
            settings.policy,
            settings.default_duration.as_duration(),
            settings.fade.as_millis()
        );

        let toaster = Toaster::new();
        let host = toaster.mount(Controller::new(settings));

        if let Some(warning) = config_warning {
            toaster.show(warning);
        }

        let app = App {
            theme_mode: config.general.theme_mode,
            bottom_offset: config.toast.bottom_offset(),
            toaster,
            host,
            config,
            config_dir,
            draft: String::new(),
            jobs_started: 0,
            jobs_running: 0,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("fade_toast demo")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.host.tick_interval())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            toaster: &self.toaster,
            host: &self.host,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            draft: &mut self.draft,
            jobs_started: &mut self.jobs_started,
            jobs_running: &mut self.jobs_running,
        };

        match message {
            Message::DraftChanged(value) => {
                *ctx.draft = value;
                Task::none()
            }
            Message::ShowPressed => update::handle_show(&mut ctx, None),
            Message::ShowLongPressed => update::handle_show(&mut ctx, Some(update::LONG_DISPLAY)),
            Message::HidePressed => {
                ctx.toaster.hide();
                Task::none()
            }
            Message::TogglePolicy => update::handle_toggle_policy(&mut ctx),
            Message::StartJob => update::handle_start_job(&mut ctx),
            Message::JobFinished(id) => update::handle_job_finished(&mut ctx, id),
            Message::Tick(now) => {
                ctx.host.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            policy: self.host.policy(),
            phase: self.host.phase(),
            jobs_running: self.jobs_running,
            toast: self.host.snapshot(Instant::now()),
            bottom_offset: self.bottom_offset,
        })
    }
}

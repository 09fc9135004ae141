// SPDX-License-Identifier: MPL-2.0
//! Mounting and the call-from-anywhere accessor.
//!
//! The application root creates one [`Toaster`] and mounts a single
//! [`ToastHost`] with it. Clones of the `Toaster` can then be handed to any
//! component or background task; their `show`/`hide` calls reach whichever
//! host is currently mounted and are silently ignored when none is.

use super::controller::{Controller, ShowOutcome};
use super::phase::Phase;
use super::policy::Policy;
use super::timing::DisplayDuration;
use super::view::ToastSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

/// Tick interval while a fade is running.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval while the toast waits on its dismissal timer.
pub const IDLE_WAIT_TICK: Duration = Duration::from_millis(100);

/// Cloneable handle forwarding `show`/`hide` to the mounted toast.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    target: Arc<Mutex<Weak<Mutex<Controller>>>>,
}

impl Toaster {
    /// Creates an accessor with nothing mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `controller` as the toast every clone of this accessor targets.
    ///
    /// A later mount replaces an earlier one. Dropping the returned host
    /// unmounts it.
    pub fn mount(&self, controller: Controller) -> ToastHost {
        let shared = Arc::new(Mutex::new(controller));

        match self.target.lock() {
            Ok(mut target) => {
                if target.upgrade().is_some() {
                    log::warn!("toast host mounted twice; the newest mount wins");
                }
                *target = Arc::downgrade(&shared);
            }
            Err(err) => log::warn!("toast accessor unavailable, host not mounted: {err}"),
        }

        ToastHost { controller: shared }
    }

    /// Shows `message` for the host's default display duration.
    pub fn show(&self, message: impl Into<String>) {
        self.dispatch_show(message.into(), None);
    }

    /// Shows `message` for `duration`.
    pub fn show_for(&self, message: impl Into<String>, duration: Duration) {
        self.dispatch_show(message.into(), Some(DisplayDuration::from(duration)));
    }

    /// Fades the current toast out.
    pub fn hide(&self) {
        self.with_mounted(|controller| controller.hide(Instant::now()));
    }

    /// Returns true while a host is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.target
            .lock()
            .map(|target| target.strong_count() > 0)
            .unwrap_or(false)
    }

    fn dispatch_show(&self, message: String, duration: Option<DisplayDuration>) {
        let outcome =
            self.with_mounted(|controller| controller.show(message, duration, Instant::now()));
        if let Some(ShowOutcome::Dropped) = outcome {
            log::debug!("toast request dropped by policy");
        }
    }

    fn with_mounted<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let weak = match self.target.lock() {
            Ok(target) => target.clone(),
            Err(err) => {
                log::warn!("toast accessor lock poisoned: {err}");
                return None;
            }
        };

        let Some(shared) = weak.upgrade() else {
            log::debug!("toast call ignored: no host mounted");
            return None;
        };

        let mut controller = lock_controller(&shared);
        Some(f(&mut controller))
    }
}

/// The mounted toast. Owned by the application root.
#[derive(Debug)]
pub struct ToastHost {
    controller: Arc<Mutex<Controller>>,
}

impl ToastHost {
    /// Advances the toast to `now`; returns `true` if anything changed.
    pub fn tick(&self, now: Instant) -> bool {
        lock_controller(&self.controller).tick(now)
    }

    /// What to draw at `now`, or `None` when the toast is fully transparent.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Option<ToastSnapshot> {
        let controller = lock_controller(&self.controller);
        let opacity = controller.opacity(now);

        (opacity > 0.0).then(|| ToastSnapshot {
            message: controller.message().to_owned(),
            opacity,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        lock_controller(&self.controller).phase()
    }

    #[must_use]
    pub fn policy(&self) -> Policy {
        lock_controller(&self.controller).policy()
    }

    pub fn set_policy(&self, policy: Policy) {
        lock_controller(&self.controller).set_policy(policy);
    }

    /// How often the host needs ticking, or `None` while idle.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.phase() {
            Phase::Idle => None,
            Phase::FadingIn | Phase::FadingOut => Some(ANIMATION_TICK),
            Phase::Visible => Some(IDLE_WAIT_TICK),
        }
    }

    /// Unmounts the host. Equivalent to dropping it.
    pub fn unmount(self) {}
}

/// Locks the controller, recovering the state if a previous holder panicked.
fn lock_controller(shared: &Mutex<Controller>) -> MutexGuard<'_, Controller> {
    shared.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        log::warn!("toast controller lock poisoned; recovering state");
        poisoned.into_inner()
    })
}

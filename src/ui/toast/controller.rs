// SPDX-License-Identifier: MPL-2.0
//! Toast presentation state machine.
//!
//! The `Controller` owns the message, the opacity animation and the single
//! dismissal timer. It never reads the clock itself: every operation takes
//! the current `Instant`, and `tick` replays any transitions that became due
//! since the previous call at the instant they were actually due.

use super::phase::{Event, Phase};
use super::policy::Policy;
use super::timing::{DismissTimer, DisplayDuration, Easing, Fade, FadeDuration};
use std::time::{Duration, Instant};

/// Tunables fixed at mount time (the policy may be changed later).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerSettings {
    pub policy: Policy,
    pub default_duration: DisplayDuration,
    pub fade: FadeDuration,
    pub easing: Easing,
}

/// Result of a `show` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Nothing was showing; the toast started fading in.
    Displayed,
    /// A toast was active and has been replaced by the new message.
    Replaced,
    /// A toast was active and the request was discarded.
    Dropped,
}

/// Transition that becomes due at a known instant.
#[derive(Debug, Clone, Copy)]
enum Due {
    FadeIn,
    Dismiss,
    FadeOut,
}

/// Owns the state of the single toast.
#[derive(Debug, Clone)]
pub struct Controller {
    settings: ControllerSettings,
    phase: Phase,
    message: String,
    /// Running animation, if any.
    fade: Option<Fade>,
    /// Opacity when no animation is running.
    resting_opacity: f32,
    /// Display time to arm once the running fade-in completes.
    pending_duration: DisplayDuration,
    dismissal: Option<DismissTimer>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerSettings::default())
    }
}

impl Controller {
    /// Creates an idle controller: empty message, fully transparent.
    #[must_use]
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            phase: Phase::Idle,
            message: String::new(),
            fade: None,
            resting_opacity: 0.0,
            pending_duration: settings.default_duration,
            dismissal: None,
        }
    }

    /// Requests `message` to be shown for `duration` (or the default display
    /// duration when `None`).
    ///
    /// Transitions due before `now` are applied first, so a caller that
    /// ticks rarely sees the same outcome as one that ticks every frame.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        duration: Option<DisplayDuration>,
        now: Instant,
    ) -> ShowOutcome {
        self.tick(now);
        let message = message.into();
        let was_active = self.phase.is_active();

        if self.apply(Event::Show).is_none() {
            log::debug!("toast busy, dropping message {message:?}");
            return ShowOutcome::Dropped;
        }

        // A replaced toast vanishes at once; the new one fades in from zero.
        self.dismissal = None;
        self.message = message;
        self.pending_duration = duration.unwrap_or(self.settings.default_duration);
        self.start_fade(0.0, 1.0, now);

        if was_active {
            ShowOutcome::Replaced
        } else {
            ShowOutcome::Displayed
        }
    }

    /// Cancels the dismissal timer and fades out from the current opacity.
    ///
    /// Returns `false` when there was nothing to hide.
    pub fn hide(&mut self, now: Instant) -> bool {
        self.tick(now);
        self.dismissal = None;
        let from = self.opacity(now);

        if self.apply(Event::Hide).is_none() {
            return false;
        }
        self.start_fade(from, 0.0, now);
        true
    }

    /// Advances the machine to `now`.
    ///
    /// Returns `true` if at least one transition fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Some((due_at, due)) = self.next_transition() {
            if now < due_at {
                break;
            }
            changed = true;

            match due {
                Due::FadeIn => {
                    self.settle();
                    self.apply(Event::FadeInComplete);
                    self.dismissal = Some(DismissTimer::arm(due_at, self.pending_duration));
                }
                Due::Dismiss => {
                    self.dismissal = None;
                    let from = self.opacity(due_at);
                    self.apply(Event::DismissDue);
                    self.start_fade(from, 0.0, due_at);
                }
                Due::FadeOut => {
                    self.settle();
                    self.apply(Event::FadeOutComplete);
                }
            }
        }

        changed
    }

    /// Current opacity in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade
            .map_or(self.resting_opacity, |fade| {
                fade.value_at(now, self.settings.easing)
            })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a toast occupies the slot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Instant of the next scheduled transition, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_transition().map(|(at, _)| at)
    }

    /// Instant at which the pending dismissal timer fires.
    #[must_use]
    pub fn dismissal_deadline(&self) -> Option<Instant> {
        self.dismissal.and_then(|timer| timer.fires_at())
    }

    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    #[must_use]
    pub fn policy(&self) -> Policy {
        self.settings.policy
    }

    /// Changes the policy; takes effect on the next `show`.
    pub fn set_policy(&mut self, policy: Policy) {
        self.settings.policy = policy;
    }

    /// Display duration used by `show` when none is given.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.settings.default_duration.as_duration()
    }

    fn apply(&mut self, event: Event) -> Option<Phase> {
        let next = self.phase.transition(event, self.settings.policy)?;
        log::debug!("toast {:?} --{:?}--> {:?}", self.phase, event, next);
        self.phase = next;
        Some(next)
    }

    fn start_fade(&mut self, from: f32, to: f32, at: Instant) {
        self.resting_opacity = from;
        self.fade = Some(Fade {
            from,
            to,
            started_at: at,
            duration: self.settings.fade.as_duration(),
        });
    }

    fn settle(&mut self) {
        if let Some(fade) = self.fade.take() {
            self.resting_opacity = fade.to;
        }
    }

    fn next_transition(&self) -> Option<(Instant, Due)> {
        match self.phase {
            Phase::Idle => None,
            Phase::FadingIn => self.fade.map(|fade| (fade.ends_at(), Due::FadeIn)),
            Phase::Visible => self
                .dismissal
                .and_then(|timer| timer.fires_at())
                .map(|at| (at, Due::Dismiss)),
            Phase::FadingOut => self.fade.map(|fade| (fade.ends_at(), Due::FadeOut)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller(policy: Policy) -> Controller {
        Controller::new(ControllerSettings {
            policy,
            ..ControllerSettings::default()
        })
    }

    #[test]
    fn new_controller_is_idle_and_transparent() {
        let controller = Controller::default();
        let now = Instant::now();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.message(), "");
        assert_abs_diff_eq!(controller.opacity(now), 0.0);
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn full_lifecycle_with_default_duration() {
        let mut controller = Controller::default();
        let t0 = Instant::now();

        assert_eq!(controller.show("saved", None, t0), ShowOutcome::Displayed);
        assert_eq!(controller.phase(), Phase::FadingIn);
        assert_abs_diff_eq!(controller.opacity(t0), 0.0);

        controller.tick(t0 + ms(200));
        assert_eq!(controller.phase(), Phase::Visible);
        assert_abs_diff_eq!(controller.opacity(t0 + ms(200)), 1.0);
        assert_eq!(controller.dismissal_deadline(), Some(t0 + ms(3200)));

        controller.tick(t0 + ms(3199));
        assert_eq!(controller.phase(), Phase::Visible);

        controller.tick(t0 + ms(3200));
        assert_eq!(controller.phase(), Phase::FadingOut);

        controller.tick(t0 + ms(3400));
        assert_eq!(controller.phase(), Phase::Idle);
        assert_abs_diff_eq!(controller.opacity(t0 + ms(3400)), 0.0);
    }

    #[test]
    fn replace_policy_shows_latest_message() {
        let mut controller = controller(Policy::Replace);
        let t0 = Instant::now();

        controller.show("a", None, t0);
        controller.tick(t0 + ms(120));
        assert!(controller.opacity(t0 + ms(120)) > 0.0);

        let outcome = controller.show("b", None, t0 + ms(120));
        assert_eq!(outcome, ShowOutcome::Replaced);
        assert_eq!(controller.message(), "b");
        // The previous toast is cut to zero instantly.
        assert_abs_diff_eq!(controller.opacity(t0 + ms(120)), 0.0);

        controller.tick(t0 + ms(320));
        assert_eq!(controller.phase(), Phase::Visible);
        assert_eq!(controller.message(), "b");
        assert_eq!(controller.dismissal_deadline(), Some(t0 + ms(3320)));
    }

    #[test]
    fn replace_while_visible_cancels_old_timer() {
        let mut controller = controller(Policy::Replace);
        let t0 = Instant::now();

        controller.show("a", Some(DisplayDuration::from_millis(1000)), t0);
        controller.tick(t0 + ms(200));
        assert_eq!(controller.dismissal_deadline(), Some(t0 + ms(1200)));

        controller.show("b", Some(DisplayDuration::from_millis(5000)), t0 + ms(1000));
        assert!(controller.dismissal_deadline().is_none());

        controller.tick(t0 + ms(1300));
        assert_eq!(controller.phase(), Phase::Visible);
        assert_eq!(controller.message(), "b");
    }

    #[test]
    fn drop_policy_keeps_first_message() {
        let mut controller = controller(Policy::DropWhileActive);
        let t0 = Instant::now();

        assert_eq!(controller.show("a", None, t0), ShowOutcome::Displayed);
        assert_eq!(
            controller.show("b", None, t0 + ms(10)),
            ShowOutcome::Dropped
        );

        controller.tick(t0 + ms(200));
        assert_eq!(controller.message(), "a");
        assert_eq!(controller.phase(), Phase::Visible);
    }

    #[test]
    fn drop_policy_accepts_show_after_full_hide() {
        let mut controller = controller(Policy::DropWhileActive);
        let t0 = Instant::now();

        controller.show("a", None, t0);
        controller.tick(t0 + ms(200));
        assert!(controller.hide(t0 + ms(500)));
        assert_eq!(
            controller.show("rejected", None, t0 + ms(600)),
            ShowOutcome::Dropped
        );

        controller.tick(t0 + ms(700));
        assert_eq!(controller.phase(), Phase::Idle);

        assert_eq!(
            controller.show("b", None, t0 + ms(800)),
            ShowOutcome::Displayed
        );
        assert_eq!(controller.message(), "b");
    }

    #[test]
    fn hide_cancels_timer_so_next_toast_gets_full_duration() {
        let mut controller = controller(Policy::DropWhileActive);
        let t0 = Instant::now();

        controller.show("a", None, t0);
        controller.tick(t0 + ms(200));
        controller.hide(t0 + ms(300));
        controller.tick(t0 + ms(500));
        assert_eq!(controller.phase(), Phase::Idle);

        controller.show("b", None, t0 + ms(600));
        // The first timer would have fired at 3200.
        controller.tick(t0 + ms(3300));
        assert_eq!(controller.phase(), Phase::Visible);
        assert_eq!(controller.dismissal_deadline(), Some(t0 + ms(3800)));
    }

    #[test]
    fn hide_on_idle_is_noop() {
        let mut controller = Controller::default();
        let now = Instant::now();
        assert!(!controller.hide(now));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.tick(now + ms(1000)));
    }

    #[test]
    fn hide_during_fade_in_starts_from_current_opacity() {
        let mut controller = Controller::new(ControllerSettings {
            easing: Easing::Linear,
            ..ControllerSettings::default()
        });
        let t0 = Instant::now();

        controller.show("a", None, t0);
        let midway = controller.opacity(t0 + ms(100));
        assert_abs_diff_eq!(midway, 0.5, epsilon = 1e-4);

        assert!(controller.hide(t0 + ms(100)));
        assert_eq!(controller.phase(), Phase::FadingOut);
        assert_abs_diff_eq!(controller.opacity(t0 + ms(100)), midway, epsilon = 1e-4);
        assert!(controller.opacity(t0 + ms(200)) < midway);

        controller.tick(t0 + ms(300));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.dismissal_deadline().is_none());
    }

    #[test]
    fn late_tick_replays_every_due_transition() {
        let mut controller = Controller::default();
        let t0 = Instant::now();

        controller.show("a", Some(DisplayDuration::from_millis(1000)), t0);
        assert!(controller.tick(t0 + ms(10_000)));
        assert_eq!(controller.phase(), Phase::Idle);
        assert_abs_diff_eq!(controller.opacity(t0 + ms(10_000)), 0.0);
    }

    #[test]
    fn late_tick_lands_mid_fade_out() {
        let mut controller = Controller::new(ControllerSettings {
            easing: Easing::Linear,
            ..ControllerSettings::default()
        });
        let t0 = Instant::now();

        controller.show("a", Some(DisplayDuration::from_millis(1000)), t0);
        controller.tick(t0 + ms(1300));
        assert_eq!(controller.phase(), Phase::FadingOut);
        // Fade-out started at 1200, so 100ms in.
        assert_abs_diff_eq!(controller.opacity(t0 + ms(1300)), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn zero_fade_and_zero_duration_finish_in_one_tick() {
        let mut controller = Controller::new(ControllerSettings {
            fade: FadeDuration::from_millis(0),
            ..ControllerSettings::default()
        });
        let t0 = Instant::now();

        controller.show("flash", Some(DisplayDuration::from_millis(0)), t0);
        assert_abs_diff_eq!(controller.opacity(t0), 1.0);
        controller.tick(t0);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn opacity_rises_monotonically_while_fading_in() {
        let mut controller = Controller::default();
        let t0 = Instant::now();
        controller.show("a", None, t0);

        let mut previous = 0.0;
        for step in 0..=20 {
            let value = controller.opacity(t0 + ms(step * 10));
            assert!(value >= previous, "opacity decreased at step {step}");
            previous = value;
        }
    }

    #[test]
    fn show_after_missed_ticks_starts_fresh() {
        let mut controller = controller(Policy::DropWhileActive);
        let t0 = Instant::now();

        controller.show("a", Some(DisplayDuration::from_millis(50)), t0);
        // No ticks: the first toast has long finished by now.
        assert_eq!(
            controller.show("b", None, t0 + ms(10_000)),
            ShowOutcome::Displayed
        );
        assert_eq!(controller.message(), "b");
        assert_eq!(controller.phase(), Phase::FadingIn);

        let mut replacing = Controller::default();
        replacing.show("a", Some(DisplayDuration::from_millis(50)), t0);
        assert_eq!(
            replacing.show("b", None, t0 + ms(10_000)),
            ShowOutcome::Displayed
        );
    }

    #[test]
    fn hide_after_missed_ticks_is_noop() {
        let mut controller = Controller::default();
        let t0 = Instant::now();

        controller.show("a", Some(DisplayDuration::from_millis(50)), t0);
        assert!(!controller.hide(t0 + ms(10_000)));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn endless_duration_stays_visible_until_hidden() {
        let mut controller = Controller::default();
        let t0 = Instant::now();

        controller.show("sticky", Some(DisplayDuration::from(Duration::MAX)), t0);
        controller.tick(t0 + ms(250));
        assert_eq!(controller.phase(), Phase::Visible);
        assert!(controller.dismissal_deadline().is_none());
        assert!(controller.next_deadline().is_none());

        assert!(controller.hide(t0 + ms(60_000)));
        controller.tick(t0 + ms(60_200));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn set_policy_applies_to_next_show() {
        let mut controller = controller(Policy::Replace);
        let t0 = Instant::now();
        controller.show("a", None, t0);
        controller.set_policy(Policy::DropWhileActive);
        assert_eq!(controller.show("b", None, t0), ShowOutcome::Dropped);
        assert_eq!(controller.policy(), Policy::DropWhileActive);
    }
}

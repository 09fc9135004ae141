// SPDX-License-Identifier: MPL-2.0
//! Presentation phases of the toast and the transition table between them.

use super::policy::Policy;

/// Current stage of the toast's presentation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing is shown and no timer is pending.
    #[default]
    Idle,
    /// Opacity is animating towards 1.
    FadingIn,
    /// Fully shown, waiting for the dismissal timer.
    Visible,
    /// Opacity is animating towards 0.
    FadingOut,
}

/// Inputs that may move the toast to another phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A caller asked for a new message to be shown.
    Show,
    /// The fade-in animation reached full opacity.
    FadeInComplete,
    /// The dismissal timer elapsed.
    DismissDue,
    /// A caller asked for the toast to go away.
    Hide,
    /// The fade-out animation reached zero opacity.
    FadeOutComplete,
}

impl Phase {
    /// Returns the phase reached by applying `event`, or `None` when the
    /// event is rejected in this phase.
    ///
    /// `Show` while a toast is active depends on the policy: `Replace`
    /// restarts the fade-in, `DropWhileActive` rejects it.
    #[must_use]
    pub fn transition(self, event: Event, policy: Policy) -> Option<Phase> {
        use Event::{DismissDue, FadeInComplete, FadeOutComplete, Hide, Show};
        use Phase::{FadingIn, FadingOut, Idle, Visible};

        match (self, event) {
            (Idle, Show) => Some(FadingIn),
            (FadingIn | Visible | FadingOut, Show) => match policy {
                Policy::Replace => Some(FadingIn),
                Policy::DropWhileActive => None,
            },
            (FadingIn, FadeInComplete) => Some(Visible),
            (Visible, DismissDue) => Some(FadingOut),
            (FadingIn | Visible, Hide) => Some(FadingOut),
            (FadingOut, FadeOutComplete) => Some(Idle),
            _ => None,
        }
    }

    /// Returns true while a toast occupies the slot (anything but `Idle`).
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Phase::Idle
    }

    /// Returns true while an opacity animation is running.
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::FadingIn | Phase::FadingOut)
    }
}

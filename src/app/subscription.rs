// SPDX-License-Identifier: MPL-2.0
//! Tick subscription driving the toast.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while the toast needs one.
///
/// The interval comes from the host: frame rate during fades, coarser while
/// waiting on the dismissal timer, nothing while idle.
pub fn create_tick_subscription(interval: Option<Duration>) -> Subscription<Message> {
    match interval {
        Some(every) => time::every(every).map(Message::Tick),
        None => Subscription::none(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};

/// Creates a periodic tick subscription for the loading spinners and
/// notification auto-dismiss.
///
/// The subscription only runs while something actually needs redrawing, so
/// an idle app schedules no wakeups.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are showing, so the idle application
/// schedules no wakeups.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription while a dialog is open: Escape
/// dismisses it.
pub fn create_keyboard_subscription(modal_open: bool) -> Subscription<Message> {
    if modal_open {
        event::listen_with(|event, _status, _window| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) =
                event
            {
                handle_key_press(key, modifiers)
            } else {
                None
            }
        })
    } else {
        Subscription::none()
    }
}

fn handle_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::DismissModal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses_the_dialog() {
        let message = handle_key_press(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::default(),
        );
        assert!(matches!(message, Some(Message::DismissModal)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let message = handle_key_press(
            keyboard::Key::Named(keyboard::key::Named::Enter),
            keyboard::Modifiers::default(),
        );
        assert!(message.is_none());
    }
}

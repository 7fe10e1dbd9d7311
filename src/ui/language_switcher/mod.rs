// SPDX-License-Identifier: MPL-2.0
//! Language switcher component.
//!
//! A button showing the active language that opens a bottom sheet listing
//! every supported language. Picking a row switches the language right away
//! and slides the sheet out; tapping the backdrop, the close button, or
//! pressing Escape dismisses it without a change.

mod state;
mod transition;
mod view;

pub use state::{Presentation, State, Visibility};
pub use transition::Frame;
pub use view::{view_button, view_overlay, ViewContext};

use crate::i18n::LanguageService;
use std::time::Instant;

/// Messages emitted by the language switcher.
#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Select(String),
    Dismiss,
    Tick(Instant),
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The sheet finished closing.
    Closed,
}

/// Process a switcher message.
pub fn update(state: &mut State, message: Message, service: &mut LanguageService) -> Event {
    match message {
        Message::Open => {
            if !state.open(Instant::now()) {
                tracing::debug!("language sheet already open or closing");
            }
            Event::None
        }
        Message::Select(code) => {
            if !state.select(&code, service, Instant::now()) {
                tracing::debug!(code = %code, "language selection ignored while sheet closes");
            }
            Event::None
        }
        Message::Dismiss => {
            state.dismiss(Instant::now());
            Event::None
        }
        Message::Tick(now) => {
            let was_open = state.is_open();
            state.tick(now);
            if was_open && !state.is_open() {
                Event::Closed
            } else {
                Event::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{FixedLocales, LocaleCatalog, MemoryStore};
    use std::time::Duration;

    fn service() -> LanguageService {
        LanguageService::new(
            LocaleCatalog::embedded(),
            Box::new(MemoryStore::new()),
            &FixedLocales::new(["en"]),
        )
    }

    #[test]
    fn select_message_switches_language_and_reports_close() {
        let mut service = service();
        let mut state = State::mount(&mut service);

        update(&mut state, Message::Open, &mut service);
        assert!(state.is_open());

        update(&mut state, Message::Select("es".into()), &mut service);
        assert_eq!(service.current(), "es");
        assert_eq!(service.tr("settings.language"), "Idioma");

        let later = Instant::now() + Duration::from_secs(1);
        let event = update(&mut state, Message::Tick(later), &mut service);
        assert_eq!(event, Event::Closed);
        assert_eq!(state.visibility(), Visibility::Closed);
    }

    #[test]
    fn dismiss_message_keeps_language() {
        let mut service = service();
        let mut state = State::mount(&mut service);

        update(&mut state, Message::Open, &mut service);
        update(&mut state, Message::Dismiss, &mut service);
        let later = Instant::now() + Duration::from_secs(1);
        update(&mut state, Message::Tick(later), &mut service);

        assert_eq!(service.current(), "en");
        assert!(!state.is_open());
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut service = service();
        let mut state = State::mount(&mut service);

        let event = update(&mut state, Message::Tick(Instant::now()), &mut service);

        assert_eq!(event, Event::None);
        assert_eq!(state.frame(), Frame::HIDDEN);
    }
}

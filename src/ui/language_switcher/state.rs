// SPDX-License-Identifier: MPL-2.0
//! Open/closed state machine of the language switcher.
//!
//! `Closed --open--> Open --select|dismiss--> (exit transition) --> Closed`
//!
//! The sheet counts as open from `open()` until its exit transition has
//! finished. Selecting a language changes the active language immediately;
//! only the visual close is deferred.
//!
//! Overlapping requests:
//! - `open` is ignored unless the sheet is fully closed.
//! - `select`/`dismiss` during the entrance interrupt it and start the exit
//!   from the frame currently on screen.
//! - `select`/`dismiss` during the exit are ignored, so a late tap cannot
//!   change the language of a sheet that is already going away.

use super::transition::{Direction, Frame, Transition};
use crate::i18n::{LanguageCode, LanguageService, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// What the rendering layer needs about the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub is_open: bool,
    /// 0 when hidden, 1 when fully shown.
    pub transition_progress: f32,
}

#[derive(Debug)]
pub struct State {
    visibility: Visibility,
    transition: Option<Transition>,
    frame: Frame,
    /// Mirror of the service's active language, kept current by a listener.
    current: Rc<RefCell<LanguageCode>>,
    subscription: Option<SubscriptionId>,
}

impl State {
    /// Creates a closed switcher and subscribes it to language changes.
    pub fn mount(service: &mut LanguageService) -> Self {
        let current = Rc::new(RefCell::new(service.current().clone()));
        let mirror = Rc::clone(&current);
        let subscription = service.subscribe(move |code| {
            *mirror.borrow_mut() = code.clone();
        });

        Self {
            visibility: Visibility::Closed,
            transition: None,
            frame: Frame::HIDDEN,
            current,
            subscription: Some(subscription),
        }
    }

    /// Drops the change subscription. The state is unusable for live
    /// updates afterwards.
    pub fn unmount(&mut self, service: &mut LanguageService) {
        if let Some(id) = self.subscription.take() {
            service.unsubscribe(id);
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Whether a transition is in flight and frames must be ticked.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation {
            is_open: self.is_open(),
            transition_progress: self.frame.overlay_opacity,
        }
    }

    /// Language shown as active by this switcher.
    #[must_use]
    pub fn current_language(&self) -> LanguageCode {
        self.current.borrow().clone()
    }

    /// Opens the sheet. Returns `false` if the request was ignored.
    pub fn open(&mut self, now: Instant) -> bool {
        if self.visibility != Visibility::Closed || self.transition.is_some() {
            return false;
        }
        self.visibility = Visibility::Open;
        self.frame = Frame::HIDDEN;
        self.transition = Some(Transition::enter(self.frame, now));
        true
    }

    /// Applies `code` and starts closing. Returns `false` if ignored.
    ///
    /// A rejected language change still closes the sheet.
    pub fn select(&mut self, code: &str, service: &mut LanguageService, now: Instant) -> bool {
        if !self.accepts_close() {
            return false;
        }
        service.change(code);
        self.begin_exit(now);
        true
    }

    /// Starts closing without a language change. Returns `false` if ignored.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if !self.accepts_close() {
            return false;
        }
        self.begin_exit(now);
        true
    }

    /// Advances the in-flight transition, settling the state when it ends.
    pub fn tick(&mut self, now: Instant) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        self.frame = transition.advance(now);
        if !transition.is_finished() {
            return;
        }

        if transition.direction() == Direction::Exiting {
            self.visibility = Visibility::Closed;
            self.frame = Frame::HIDDEN;
        } else {
            self.frame = Frame::SHOWN;
        }
        self.transition = None;
    }

    fn accepts_close(&self) -> bool {
        self.is_open()
            && !matches!(&self.transition, Some(t) if t.direction() == Direction::Exiting)
    }

    fn begin_exit(&mut self, now: Instant) {
        self.transition = Some(Transition::exit(self.frame, now));
    }
}

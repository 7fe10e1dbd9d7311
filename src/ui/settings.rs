// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Shows the active language and hosts the language switcher, whose sheet is
//! stacked over the page while open.

use crate::i18n::LanguageService;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::language_switcher;
use iced::alignment::Horizontal;
use iced::widget::{container, text, Column, Stack};
use iced::{Element, Length};

#[derive(Debug)]
pub struct State {
    switcher: language_switcher::State,
}

impl State {
    /// Builds the screen and attaches its switcher to `service`.
    pub fn mount(service: &mut LanguageService) -> Self {
        Self {
            switcher: language_switcher::State::mount(service),
        }
    }

    pub fn unmount(&mut self, service: &mut LanguageService) {
        self.switcher.unmount(service);
    }

    #[must_use]
    pub fn switcher(&self) -> &language_switcher::State {
        &self.switcher
    }

    /// Whether frame ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.switcher.is_animating()
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a LanguageService,
    pub state: &'a State,
    /// Translation key of a startup warning to show, if any.
    pub warning_key: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Switcher(language_switcher::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageSheetClosed,
}

pub fn update(state: &mut State, message: Message, service: &mut LanguageService) -> Event {
    match message {
        Message::Switcher(message) => {
            match language_switcher::update(&mut state.switcher, message, service) {
                language_switcher::Event::Closed => Event::LanguageSheetClosed,
                language_switcher::Event::None => Event::None,
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let switcher_ctx = language_switcher::ViewContext {
        i18n: ctx.i18n,
        state: ctx.state.switcher(),
    };

    let current_name = ctx.i18n.native_name(ctx.i18n.current());
    let mut page = Column::new()
        .push(text(ctx.i18n.tr("settings.title")).size(typography::TITLE_LG))
        .push(text(ctx.i18n.tr("settings.description")).size(typography::BODY))
        .push(
            text(ctx.i18n.tr_with("settings.currentLanguage", &[("language", current_name)]))
                .size(typography::BODY),
        );

    if let Some(key) = ctx.warning_key {
        page = page.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY)
                .style(text::danger),
        );
    }

    let page = page
        .push(language_switcher::view_button(&switcher_ctx).map(Message::Switcher))
        .spacing(spacing::LG)
        .max_width(sizing::SETTINGS_MAX_WIDTH)
        .align_x(Horizontal::Center);

    let base = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill);

    match language_switcher::view_overlay(&switcher_ctx) {
        Some(overlay) => Stack::new()
            .push(base)
            .push(overlay.map(Message::Switcher))
            .into(),
        None => base.into(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering of the switcher button and the language sheet.

use super::state::State;
use super::Message;
use crate::config::SHEET_HIDDEN_OFFSET;
use crate::i18n::{LanguageDescriptor, LanguageService};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, container, float, mouse_area, opaque, row, scrollable, text, Column, Space, Stack,
};
use iced::{Element, Length, Padding, Vector};

/// Contextual data needed to render the switcher.
pub struct ViewContext<'a> {
    pub i18n: &'a LanguageService,
    pub state: &'a State,
}

/// Button labelled with the active language; opens the sheet.
pub fn view_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.current_language();
    let label = format!(
        "{}: {}",
        ctx.i18n.tr("settings.language"),
        ctx.i18n.native_name(&current)
    );

    button(text(label).size(typography::BODY_LG))
        .padding(Padding::from([spacing::SM, spacing::LG]))
        .style(button::primary)
        .on_press(Message::Open)
        .into()
}

/// Backdrop plus sheet, or `None` while the switcher is closed.
pub fn view_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.is_open() {
        return None;
    }
    let frame = ctx.state.frame();

    let backdrop = opaque(
        mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop(frame.overlay_opacity)),
        )
        .on_press(Message::Dismiss),
    );

    let sheet = container(sheet_content(ctx))
        .width(Length::Fill)
        .max_height(sizing::SHEET_MAX_HEIGHT)
        .style(styles::container::sheet);

    let offset = frame.content_offset;
    let sliding = float(opaque(sheet)).translate(move |bounds, _viewport| {
        Vector::new(0.0, slide_distance(offset, bounds.height))
    });

    let anchored = container(sliding)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom);

    Some(Stack::new().push(backdrop).push(anchored).into())
}

/// Downward shift of a bottom-anchored sheet `height` tall.
///
/// The transition offset runs from `SHEET_HIDDEN_OFFSET` to 0; it is mapped
/// onto the sheet's own height so the hidden frame puts the whole sheet
/// below the window edge whatever its content.
fn slide_distance(offset: f32, height: f32) -> f32 {
    (offset / SHEET_HIDDEN_OFFSET).clamp(0.0, 1.0) * height
}

fn sheet_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = row![
        text(ctx.i18n.tr("settings.selectLanguage")).size(typography::TITLE_MD),
        Space::new().width(Length::Fill),
        button(text(ctx.i18n.tr("common.close")).size(typography::BODY))
            .style(button::text)
            .on_press(Message::Dismiss),
    ]
    .align_y(Vertical::Center);

    let current = ctx.state.current_language();
    let mut rows = Column::new().spacing(spacing::XXS);
    for (index, descriptor) in ctx.i18n.languages().into_iter().enumerate() {
        if index > 0 {
            rows = rows.push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(1.0)
                    .style(styles::container::separator),
            );
        }
        rows = rows.push(language_row(descriptor, current == descriptor.code));
    }

    Column::new()
        .push(header)
        .push(scrollable(rows).height(Length::Shrink))
        .spacing(spacing::MD)
        .padding(Padding {
            top: spacing::LG,
            right: spacing::LG,
            bottom: spacing::XL,
            left: spacing::LG,
        })
        .into()
}

fn language_row<'a>(descriptor: &'static LanguageDescriptor, selected: bool) -> Element<'a, Message> {
    let check = if selected { "✓" } else { "" };

    button(
        row![
            text(descriptor.native_name).size(typography::BODY_LG),
            Space::new().width(Length::Fill),
            text(check).size(typography::BODY_LG),
        ]
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([spacing::SM, spacing::XS]))
    .style(styles::button::language_row(selected))
    .on_press(Message::Select(descriptor.code.to_string()))
    .into()
}

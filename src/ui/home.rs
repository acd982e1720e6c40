// SPDX-License-Identifier: MPL-2.0
//! Landing screen with the hero copy and the two entry actions.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container, Row, Text},
    Background, Border, Element, Length, Theme,
};

/// Contextual data needed to render the landing screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the landing screen.
#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
    LearnMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenChatbot,
    OpenSimulation,
}

/// Process a landing screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStarted => Event::OpenChatbot,
        Message::LearnMore => Event::OpenSimulation,
    }
}

/// Render the landing screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_lead = Text::new(ctx.i18n.tr("home-title-lead"))
        .size(typography::TITLE_XL)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::KISAN_DARKER_GREEN),
        });

    let title_underline = Container::new(text(""))
        .width(Length::Fixed(160.0))
        .height(Length::Fixed(4.0))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::HARVEST_YELLOW)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let title_rest = Text::new(ctx.i18n.tr("home-title-rest"))
        .size(typography::TITLE_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_900),
        });

    let subtitle = Text::new(ctx.i18n.tr("home-subtitle"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_700),
        });

    let get_started = button(
        Text::new(ctx.i18n.tr("home-get-started")).size(typography::BODY_LG),
    )
    .on_press(Message::GetStarted)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary);

    let learn_more = button(
        Text::new(ctx.i18n.tr("home-learn-more")).size(typography::BODY_LG),
    )
    .on_press(Message::LearnMore)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::secondary_dark);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(get_started)
        .push(learn_more);

    let scroll_hint = Text::new(ctx.i18n.tr("home-scroll"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let presented_by = Text::new(ctx.i18n.tr("home-presented-by"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let hero = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title_lead)
        .push(title_underline)
        .push(title_rest)
        .push(subtitle)
        .push(actions)
        .push(scroll_hint)
        .push(presented_by);

    Container::new(hero)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::XXL)
        .into()
}

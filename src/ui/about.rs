// SPDX-License-Identifier: MPL-2.0
//! About overlay with product information.
//!
//! Rendered as a modal card above the active screen (the shell composes the
//! scrim). Shows the platform description, the mission statement, the
//! feature list, and the contact line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the about overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
}

/// Process an about overlay message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Render the about card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("about-title"))
        .size(typography::TITLE_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::KISAN_DARKER_GREEN),
        });

    let close_button = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::plain_text);

    let header = Row::new()
        .align_y(Vertical::Top)
        .push(Container::new(title).width(Length::Fill))
        .push(close_button);

    let description_platform =
        Text::new(ctx.i18n.tr("about-description-platform")).size(typography::BODY_LG);
    let description_mission =
        Text::new(ctx.i18n.tr("about-description-mission")).size(typography::BODY_LG);

    let features_label = Text::new(ctx.i18n.tr("about-features-label"))
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::KISAN_DARKER_GREEN),
        });

    let feature_keys = [
        "about-feature-advisory",
        "about-feature-disease",
        "about-feature-weather",
        "about-feature-soil",
        "about-feature-irrigation",
        "about-feature-multilingual",
    ];
    let mut features = Column::new().spacing(spacing::XS);
    for key in feature_keys {
        features = features.push(
            Text::new(format!("• {}", ctx.i18n.tr(key))).size(typography::BODY_LG),
        );
    }

    let contact = Text::new(ctx.i18n.tr("about-contact")).size(typography::BODY_LG);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .push(header)
        .push(description_platform)
        .push(description_mission)
        .push(features_label)
        .push(features)
        .push(rule::horizontal(1))
        .push(contact);

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::ABOUT_CARD_WIDTH))
        .padding(spacing::XL)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    radius: radius::LG.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn close_emits_event() {
        let event = update(&Message::Close);
        assert!(matches!(event, Event::Close));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the product brand, one pill per screen with the active one
//! highlighted, the EN/हिंदी language switch, and the info button that
//! toggles the About overlay.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Background, Border, Color, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Fixed labels of the language switch. These are language-intrinsic and do
/// not change with the active locale.
const LANG_LABEL_EN: &str = "EN";
const LANG_LABEL_HI: &str = "हिंदी";

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub about_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    SelectLanguage(LanguageIdentifier),
    ToggleAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    SelectLanguage(LanguageIdentifier),
    ToggleAbout,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::SelectLanguage(locale) => Event::SelectLanguage(locale),
        Message::ToggleAbout => Event::ToggleAbout,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let nav_links = Row::new()
        .spacing(spacing::XXS)
        .push(nav_pill(ctx.i18n.tr("navbar-home"), Screen::Home, ctx.active))
        .push(nav_pill(
            ctx.i18n.tr("navbar-chatbot"),
            Screen::Chatbot,
            ctx.active,
        ))
        .push(nav_pill(
            ctx.i18n.tr("navbar-simulation"),
            Screen::Simulation,
            ctx.active,
        ));

    let current = ctx.i18n.current_locale().language.as_str().to_string();
    let language_switch = Container::new(
        Row::new()
            .spacing(spacing::XXS)
            .push(language_pill(LANG_LABEL_EN, "en", current == "en"))
            .push(language_pill(LANG_LABEL_HI, "hi", current == "hi")),
    )
    .padding(spacing::XXS)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..Color::WHITE
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let info_button = button(Text::new("i").size(typography::BODY_LG))
        .on_press(Message::ToggleAbout)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::navbar_pill(ctx.about_open));

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(nav_links).width(Length::Fill))
        .push(language_switch)
        .push(info_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Build one navigation pill, highlighted when its screen is active.
fn nav_pill<'a>(label: String, target: Screen, active: Screen) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Navigate(target))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::navbar_pill(target == active))
        .into()
}

/// Build one language pill, highlighted when its locale is active.
fn language_pill<'a>(label: &'a str, locale: &str, active: bool) -> Element<'a, Message> {
    let locale: LanguageIdentifier = locale.parse().expect("static locale literal");
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::SelectLanguage(locale))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::navbar_pill(active))
        .into()
}

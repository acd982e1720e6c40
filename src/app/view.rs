// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, layering the navigation bar, the shared
//! footer, the About overlay, and the toast overlay.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::chatbot;
use crate::ui::footer;
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::simulation;
use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub about_open: bool,
    pub chatbot: &'a chatbot::State,
    pub simulation: &'a simulation::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        about_open: ctx.about_open,
    })
    .map(Message::Navbar);

    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext { i18n: ctx.i18n }).map(Message::Home),
        Screen::Chatbot => ctx.chatbot.view(ctx.i18n).map(Message::Chatbot),
        Screen::Simulation => ctx.simulation.view(ctx.i18n).map(Message::Simulation),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(ctx.i18n));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.about_open {
        layers = layers.push(view_about_overlay(ctx.i18n));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    layers.into()
}

/// The About card centered over a scrim; clicking the scrim closes it.
fn view_about_overlay(i18n: &I18n) -> Element<'_, Message> {
    let card = opaque(about::view(AboutViewContext { i18n }).map(Message::About));

    opaque(
        mouse_area(
            center(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::scrim),
        )
        .on_press(Message::About(about::Message::Close)),
    )
}

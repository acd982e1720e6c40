// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the screens and
//! shared chrome. Handlers translate component events into screen switches,
//! persistence, or asynchronous endpoint calls.

use super::{persistence, Message, Screen};
use crate::api::{self, Endpoints};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::chatbot::{self, Event as ChatbotEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::simulation::{self, Event as SimulationEvent};
use iced::Task;

/// Mutable view into the `App` fields the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub about_open: &'a mut bool,
    pub chatbot: &'a mut chatbot::State,
    pub simulation: &'a mut simulation::State,
    pub notifications: &'a mut notifications::Manager,
    pub api: &'a Endpoints,
}

/// Switches the active screen.
///
/// Entering a screen rebuilds its state, so the chat transcript and the
/// parameter catalog always start fresh after navigation.
pub fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) {
    if *ctx.screen == target {
        return;
    }

    match target {
        Screen::Chatbot => *ctx.chatbot = chatbot::State::new(),
        Screen::Simulation => *ctx.simulation = simulation::State::new(),
        Screen::Home => {}
    }
    *ctx.screen = target;
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(target) => {
            switch_screen(ctx, target);
            Task::none()
        }
        NavbarEvent::SelectLanguage(locale) => {
            persistence::apply_language_change(ctx.i18n, locale)
        }
        NavbarEvent::ToggleAbout => {
            *ctx.about_open = !*ctx.about_open;
            Task::none()
        }
    }
}

pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Close => {
            *ctx.about_open = false;
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::OpenChatbot => {
            switch_screen(ctx, Screen::Chatbot);
            Task::none()
        }
        HomeEvent::OpenSimulation => {
            switch_screen(ctx, Screen::Simulation);
            Task::none()
        }
    }
}

pub fn handle_chatbot_message(
    ctx: &mut UpdateContext<'_>,
    message: chatbot::Message,
) -> Task<Message> {
    match ctx.chatbot.update(message, ctx.i18n) {
        ChatbotEvent::None => Task::none(),
        ChatbotEvent::SubmitQuery(query) => {
            let endpoint = ctx.api.chatbot();
            Task::perform(api::send_chat_query(endpoint, query), |result| {
                Message::Chatbot(chatbot::Message::ReplyReceived(result))
            })
        }
        ChatbotEvent::VoiceStub => {
            ctx.notifications
                .push(Notification::info("notification-voice-coming-soon"));
            Task::none()
        }
        ChatbotEvent::RequestFocus => iced::widget::operation::focus(chatbot::INPUT_ID),
    }
}

pub fn handle_simulation_message(
    ctx: &mut UpdateContext<'_>,
    message: simulation::Message,
) -> Task<Message> {
    match ctx.simulation.update(message, ctx.i18n) {
        SimulationEvent::None => Task::none(),
        SimulationEvent::Submit(record) => {
            let endpoint = ctx.api.simulation();
            Task::perform(api::run_simulation(endpoint, record), |result| {
                Message::Simulation(simulation::Message::OutcomeReceived(result))
            })
        }
    }
}

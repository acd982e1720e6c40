// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, the remote
//! endpoints, and the notification system, and translates messages into
//! side effects like config persistence or endpoint calls. Policy decisions
//! (window sizing, language persistence, screen reset on navigation) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::Endpoints;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::chatbot;
use crate::ui::notifications;
use crate::ui::simulation;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    about_open: bool,
    chatbot: chatbot::State,
    simulation: simulation::State,
    notifications: notifications::Manager,
    api: Endpoints,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("about_open", &self.about_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            about_open: false,
            chatbot: chatbot::State::new(),
            simulation: simulation::State::new(),
            notifications: notifications::Manager::new(),
            api: Endpoints::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };

        let i18n = I18n::new(flags.lang, &config);

        let api = flags
            .api_base
            .or(config.api_base)
            .map(Endpoints::new)
            .unwrap_or_default();

        let mut app = App {
            i18n,
            api,
            ..Self::default()
        };

        if config_warning {
            app.notifications.push(notifications::Notification::warning(
                "notification-config-load-error",
            ));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        // The product is a white-background UI; the dark variants of the
        // brand palette are not designed yet.
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_loading = self.chatbot.is_loading() || self.simulation.is_loading();
        subscription::create_tick_subscription(is_loading, self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            about_open: &mut self.about_open,
            chatbot: &mut self.chatbot,
            simulation: &mut self.simulation,
            notifications: &mut self.notifications,
            api: &self.api,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Home(home_message) => update::handle_home_message(&mut ctx, &home_message),
            Message::Chatbot(chatbot_message) => {
                update::handle_chatbot_message(&mut ctx, chatbot_message)
            }
            Message::Simulation(simulation_message) => {
                update::handle_simulation_message(&mut ctx, simulation_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // The tick redraws the spinners implicitly; only the toast
                // timers need explicit advancing.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            about_open: self.about_open,
            chatbot: &self.chatbot,
            simulation: &self.simulation,
            notifications: &self.notifications,
        })
    }
}

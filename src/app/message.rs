// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::chatbot;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::simulation;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    About(about::Message),
    Home(home::Message),
    Chatbot(chatbot::Message),
    Simulation(simulation::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss and the loading spinners.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (`en` or `hi`).
    pub lang: Option<String>,
    /// Optional advisory backend base URL override.
    pub api_base: Option<String>,
}

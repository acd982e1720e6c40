// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The only preference written back to disk is the language selection; the
//! API base override is read-only from the app's point of view (edited by
//! hand or passed on the command line).

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to the config file.
///
/// Persistence failures are logged and otherwise ignored: the in-memory
/// switch already happened and the worst case is losing the preference on
/// the next launch.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Task<Message> {
    i18n.set_locale(locale.clone());

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

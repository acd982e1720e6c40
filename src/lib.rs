// SPDX-License-Identifier: MPL-2.0
//! `kisan_drishti` is the Kisan Drishti - AI Krishi Mitra desktop client,
//! built with the Iced GUI framework.
//!
//! It provides a bilingual (English/Hindi) agricultural advisory interface
//! with three screens: a landing page, a chat assistant backed by a remote
//! question-answering endpoint, and a crop-condition simulation form backed
//! by a remote ML/LLM endpoint. Localization uses Fluent, and the language
//! preference is persisted between sessions.

pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod i18n;
pub mod simulation;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Landing page with the hero copy and the two entry actions
//! - [`chatbot`] - Conversational advisory screen backed by the chat endpoint
//! - [`simulation`] - Parameter-driven crop-condition simulation form
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with language switch and About toggle
//! - [`about`] - About overlay shown above the current screen
//! - [`footer`] - Powered-by / advisory footer shared by all screens
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod about;
pub mod chatbot;
pub mod design_tokens;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod simulation;
pub mod styles;
pub mod widgets;

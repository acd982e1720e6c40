// SPDX-License-Identifier: MPL-2.0
//! Conversational advisory screen.
//!
//! Keeps the transcript, the input buffer, and the loading flag. One user
//! turn produces at most one request to the chat endpoint; while it is in
//! flight the loading flag gates further submissions, so turns always land
//! in strict chronological order.

use crate::api::{ApiError, ChatReply};
use crate::chat::{Role, Transcript};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};
use std::time::Instant;

/// Widget id of the input field, used to restore focus after a reply.
pub const INPUT_ID: &str = "chatbot-input";

/// Revolutions per second of the typing indicator.
const SPINNER_SPEED: f32 = 1.2;

/// Chat screen state.
#[derive(Debug, Default)]
pub struct State {
    transcript: Transcript,
    input: String,
    loading: bool,
    loading_since: Option<Instant>,
}

/// Messages emitted by the chat screen.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    SubmitPressed,
    VoicePressed,
    ReplyReceived(Result<ChatReply, ApiError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Send this query to the chat endpoint.
    SubmitQuery(String),
    /// The voice-input placeholder was pressed.
    VoiceStub,
    /// Return focus to the input field.
    RequestFocus,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Process a chat screen message and return the corresponding event.
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::InputChanged(value) => {
                if !self.loading {
                    self.input = value;
                }
                Event::None
            }
            Message::SubmitPressed => {
                let query = self.input.trim().to_string();
                if query.is_empty() || self.loading {
                    return Event::None;
                }

                self.transcript.push_user(query.clone());
                self.input.clear();
                self.loading = true;
                self.loading_since = Some(Instant::now());
                Event::SubmitQuery(query)
            }
            Message::VoicePressed => {
                if self.loading {
                    Event::None
                } else {
                    Event::VoiceStub
                }
            }
            Message::ReplyReceived(result) => {
                // A reply for a transcript that was reset by navigation
                if !self.loading {
                    return Event::None;
                }

                let content = match result {
                    Ok(reply) => reply
                        .display_text()
                        .map(str::to_string)
                        .unwrap_or_else(|| i18n.tr("chat-no-response")),
                    Err(_) => i18n.tr("chat-error"),
                };
                self.transcript.push_assistant(content);
                self.loading = false;
                self.loading_since = None;
                Event::RequestFocus
            }
        }
    }

    /// Render the chat screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let greeting = Text::new(i18n.tr("chat-greeting"))
            .size(typography::TITLE_XL)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::KISAN_DARKER_GREEN),
            });

        let intro = Text::new(i18n.tr("chat-intro"))
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_700),
            });

        let mut content = Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .width(Length::Fixed(sizing::CHAT_CONTENT_WIDTH))
            .push(greeting)
            .push(intro);

        if !self.transcript.is_empty() || self.loading {
            content = content.push(self.view_transcript());
        }

        content = content.push(self.view_input_bar(i18n));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::XL)
            .into()
    }

    /// Build the scrollable list of chat bubbles, plus the typing indicator
    /// while a reply is awaited.
    fn view_transcript(&self) -> Element<'_, Message> {
        let mut turns = Column::new().spacing(spacing::SM).width(Length::Fill);

        for turn in self.transcript.turns() {
            let is_user = turn.role == Role::User;
            let bubble = Container::new(
                Text::new(turn.content.as_str()).size(typography::BODY_LG),
            )
            .padding([spacing::XS, spacing::MD])
            .max_width(sizing::CHAT_CONTENT_WIDTH * 0.7)
            .style(styles::container::chat_bubble(is_user));

            let align = if is_user {
                Horizontal::Right
            } else {
                Horizontal::Left
            };
            turns = turns.push(Container::new(bubble).width(Length::Fill).align_x(align));
        }

        if self.loading {
            let rotation = self
                .loading_since
                .map(|since| {
                    since.elapsed().as_secs_f32() * SPINNER_SPEED * std::f32::consts::TAU
                })
                .unwrap_or(0.0);
            let spinner = AnimatedSpinner::new(palette::GRAY_400, rotation).into_element();
            turns = turns.push(
                Container::new(spinner)
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            );
        }

        scrollable(turns)
            .height(Length::Fixed(320.0))
            .anchor_bottom()
            .into()
    }

    /// Build the input row with the voice stub and the send button.
    fn view_input_bar<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let placeholder = i18n.tr("chat-input-placeholder");
        let mut input = text_input(&placeholder, &self.input)
            .id(INPUT_ID)
            .size(typography::BODY_LG)
            .padding([spacing::XS, spacing::MD]);
        if !self.loading {
            input = input
                .on_input(Message::InputChanged)
                .on_submit(Message::SubmitPressed);
        }

        let voice_label = i18n.tr("chat-voice-button");
        let voice_button = if self.loading {
            button(Text::new(voice_label).size(typography::BODY)).style(styles::button::neutral)
        } else {
            button(Text::new(voice_label).size(typography::BODY))
                .on_press(Message::VoicePressed)
                .style(styles::button::neutral)
        };

        let can_send = !self.input.trim().is_empty() && !self.loading;
        let send_label = i18n.tr("chat-send-button");
        let send_button = if can_send {
            button(Text::new(send_label).size(typography::BODY))
                .on_press(Message::SubmitPressed)
                .style(styles::button::primary)
        } else {
            button(Text::new(send_label).size(typography::BODY)).style(styles::button::primary)
        };

        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .push(input)
            .push(voice_button.padding([spacing::XS, spacing::MD]))
            .push(send_button.padding([spacing::XS, spacing::MD]))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply_with_answer(answer: &str) -> ChatReply {
        serde_json::from_value(json!({ "answer": answer })).unwrap()
    }

    fn empty_reply() -> ChatReply {
        serde_json::from_value(json!({})).unwrap()
    }

    #[test]
    fn submit_of_empty_input_is_a_no_op() {
        let i18n = I18n::default();
        let mut state = State::new();

        let event = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(event, Event::None));
        assert!(state.transcript().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_of_whitespace_input_is_a_no_op() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("   ".to_string()), &i18n);

        let event = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(event, Event::None));
        assert_eq!(state.transcript().len(), 0);
    }

    #[test]
    fn submit_trims_appends_user_turn_and_starts_loading() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("  hello  ".to_string()), &i18n);

        let event = state.update(Message::SubmitPressed, &i18n);
        match event {
            Event::SubmitQuery(query) => assert_eq!(query, "hello"),
            _ => panic!("expected SubmitQuery event"),
        }
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript().turns()[0].content, "hello");
        assert_eq!(state.transcript().turns()[0].role, Role::User);
        assert!(state.input().is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn submit_while_loading_is_a_no_op() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("first".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);
        assert!(state.is_loading());

        let _ = state.update(Message::InputChanged("second".to_string()), &i18n);
        let event = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(event, Event::None));
        assert_eq!(state.transcript().len(), 1);
    }

    #[test]
    fn reply_appends_assistant_turn_in_order() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("hello".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);

        let event = state.update(
            Message::ReplyReceived(Ok(reply_with_answer("hi"))),
            &i18n,
        );
        assert!(matches!(event, Event::RequestFocus));
        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript().turns()[0].role, Role::User);
        assert_eq!(state.transcript().turns()[0].content, "hello");
        assert_eq!(state.transcript().turns()[1].role, Role::Assistant);
        assert_eq!(state.transcript().turns()[1].content, "hi");
        assert!(!state.is_loading());
    }

    #[test]
    fn reply_without_text_uses_localized_fallback() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("x".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);

        let _ = state.update(Message::ReplyReceived(Ok(empty_reply())), &i18n);
        assert_eq!(
            state.transcript().turns()[1].content,
            i18n.tr("chat-no-response")
        );
    }

    #[test]
    fn failed_request_appends_localized_error_turn() {
        let mut i18n = I18n::default();
        i18n.set_locale("hi".parse().unwrap());
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("x".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);

        let _ = state.update(
            Message::ReplyReceived(Err(ApiError::Status(500))),
            &i18n,
        );
        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript().turns()[1].role, Role::Assistant);
        assert_eq!(state.transcript().turns()[1].content, i18n.tr("chat-error"));
        assert!(!state.is_loading());
    }

    #[test]
    fn voice_button_is_a_stub() {
        let i18n = I18n::default();
        let mut state = State::new();
        let event = state.update(Message::VoicePressed, &i18n);
        assert!(matches!(event, Event::VoiceStub));
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn input_edits_are_ignored_while_loading() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.update(Message::InputChanged("q".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);

        let _ = state.update(Message::InputChanged("typing".to_string()), &i18n);
        assert!(state.input().is_empty());
    }

    #[test]
    fn chat_view_renders_in_all_states() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.view(&i18n);

        let _ = state.update(Message::InputChanged("hello".to_string()), &i18n);
        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.view(&i18n);

        let _ = state.update(
            Message::ReplyReceived(Ok(reply_with_answer("hi"))),
            &i18n,
        );
        let _ = state.view(&i18n);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Crop-condition simulation screen.
//!
//! Shows the editable parameter table, the submit/reset actions, and the
//! result of the last run. Validation happens twice: per field while typing
//! (silently, keeping the last good value) and across the whole catalog at
//! submit time (with a visible error banner).

use crate::api::{ApiError, SimulationOutcome};
use crate::i18n::fluent::I18n;
use crate::simulation::{Catalog, ParamId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};
use serde_json::{Map, Value};
use std::time::Instant;

/// Revolutions per second of the processing indicator.
const SPINNER_SPEED: f32 = 1.2;

/// Simulation screen state.
#[derive(Debug)]
pub struct State {
    catalog: Catalog,
    loading: bool,
    loading_since: Option<Instant>,
    result: Option<SimulationOutcome>,
    error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            loading: false,
            loading_since: None,
            result: None,
            error: None,
        }
    }
}

/// Messages emitted by the simulation screen.
#[derive(Debug, Clone)]
pub enum Message {
    ValueChanged(ParamId, String),
    SubmitPressed,
    ResetPressed,
    OutcomeReceived(Result<SimulationOutcome, ApiError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Send this flat parameter record to the simulation endpoint.
    Submit(Map<String, Value>),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn result(&self) -> Option<&SimulationOutcome> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Process a simulation screen message and return the corresponding event.
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::ValueChanged(id, raw) => {
                if self.catalog.update_value(id, &raw) {
                    self.error = None;
                    self.result = None;
                }
                Event::None
            }
            Message::SubmitPressed => {
                if self.loading {
                    return Event::None;
                }

                match self.catalog.to_request_record() {
                    Some(record) => {
                        self.loading = true;
                        self.loading_since = Some(Instant::now());
                        self.error = None;
                        self.result = None;
                        Event::Submit(record)
                    }
                    None => {
                        self.error = Some(i18n.tr("sim-validation-error"));
                        Event::None
                    }
                }
            }
            Message::ResetPressed => {
                if !self.loading {
                    self.catalog.reset();
                    self.error = None;
                    self.result = None;
                }
                Event::None
            }
            Message::OutcomeReceived(result) => {
                // An outcome for a form that was reset by navigation
                if !self.loading {
                    return Event::None;
                }

                self.loading = false;
                self.loading_since = None;
                match result {
                    Ok(outcome) => self.result = Some(outcome),
                    Err(_) => self.error = Some(i18n.tr("sim-request-error")),
                }
                Event::None
            }
        }
    }

    /// Render the simulation screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("sim-title"))
            .size(typography::TITLE_LG)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::KISAN_DARKER_GREEN),
            });

        let subtitle = Text::new(i18n.tr("sim-subtitle"))
            .size(typography::BODY_LG)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_700),
            });

        let mut content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::SIM_CONTENT_WIDTH))
            .push(title)
            .push(subtitle)
            .push(self.view_parameter_table(i18n))
            .push(self.view_actions(i18n));

        if let Some(error) = &self.error {
            content = content.push(view_error_banner(error));
        }

        if let Some(result) = &self.result {
            content = content.push(view_result(result, i18n));
        }

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(spacing::XL),
        )
        .into()
    }

    /// Build the header row and one row per parameter.
    fn view_parameter_table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Container::new(
            Row::new()
                .spacing(spacing::MD)
                .padding([spacing::SM, spacing::MD])
                .push(
                    Text::new(i18n.tr("sim-column-parameter"))
                        .size(typography::BODY_LG)
                        .width(Length::FillPortion(3)),
                )
                .push(
                    Text::new(i18n.tr("sim-column-range"))
                        .size(typography::BODY_LG)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    Text::new(i18n.tr("sim-column-value"))
                        .size(typography::BODY_LG)
                        .width(Length::FillPortion(2)),
                ),
        )
        .width(Length::Fill)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(palette::KISAN_GREEN)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        });

        let mut rows = Column::new().push(header);

        for param in self.catalog.parameters() {
            let name = Text::new(i18n.tr(param.id.i18n_key()))
                .size(typography::BODY)
                .width(Length::FillPortion(3));

            let range = Text::new(param.range_label())
                .size(typography::BODY)
                .width(Length::FillPortion(2))
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_700),
                });

            let id = param.id;
            let input = text_input("", &param.value.text())
                .on_input(move |raw| Message::ValueChanged(id, raw))
                .size(typography::BODY)
                .padding([spacing::XXS, spacing::XS])
                .width(Length::Fixed(sizing::PARAM_INPUT_WIDTH));

            let row = Row::new()
                .spacing(spacing::MD)
                .padding([spacing::XS, spacing::MD])
                .align_y(Vertical::Center)
                .push(name)
                .push(range)
                .push(
                    Container::new(input).width(Length::FillPortion(2)),
                );

            rows = rows.push(rule::horizontal(1)).push(row);
        }

        Container::new(rows)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }

    /// Build the submit/reset row, with the processing indicator while a
    /// request is in flight.
    fn view_actions<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let submit_label = if self.loading {
            i18n.tr("sim-submit-processing")
        } else {
            i18n.tr("sim-submit-button")
        };
        let submit_button = if self.loading {
            button(Text::new(submit_label).size(typography::BODY_LG)).style(styles::button::primary)
        } else {
            button(Text::new(submit_label).size(typography::BODY_LG))
                .on_press(Message::SubmitPressed)
                .style(styles::button::primary)
        };

        let reset_label = i18n.tr("sim-reset-button");
        let reset_button = if self.loading {
            button(Text::new(reset_label).size(typography::BODY_LG)).style(styles::button::neutral)
        } else {
            button(Text::new(reset_label).size(typography::BODY_LG))
                .on_press(Message::ResetPressed)
                .style(styles::button::neutral)
        };

        let mut actions = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(submit_button.padding([spacing::SM, spacing::XL]))
            .push(reset_button.padding([spacing::SM, spacing::XL]));

        if self.loading {
            let rotation = self
                .loading_since
                .map(|since| {
                    since.elapsed().as_secs_f32() * SPINNER_SPEED * std::f32::consts::TAU
                })
                .unwrap_or(0.0);
            actions = actions.push(
                AnimatedSpinner::new(palette::KISAN_DARK_GREEN, rotation).into_element(),
            );
        }

        actions.into()
    }
}

/// Build the red validation/request error banner.
fn view_error_banner(error: &str) -> Element<'_, Message> {
    Container::new(
        Text::new(error)
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::tinted_card(
        palette::RED_50,
        palette::ERROR_500,
    ))
    .into()
}

/// Build the result area: the ML section, the AI-analysis section, or the
/// raw fallback when neither sub-object is recognized.
fn view_result<'a>(result: &'a SimulationOutcome, i18n: &'a I18n) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(prediction) = result.ml_prediction() {
        let heading = Text::new(i18n.tr("sim-ml-prediction-title"))
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::INFO_500),
            });

        let condition = Row::new()
            .spacing(spacing::XS)
            .push(Text::new(format!("{}:", i18n.tr("sim-condition-label"))).size(typography::BODY))
            .push(
                Text::new(prediction.condition_label().unwrap_or_default().to_string())
                    .size(typography::BODY),
            );

        let confidence = Row::new()
            .spacing(spacing::XS)
            .push(Text::new(format!("{}:", i18n.tr("sim-confidence-label"))).size(typography::BODY))
            .push(Text::new(prediction.confidence_percent()).size(typography::BODY));

        let mut section = Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(Row::new().spacing(spacing::LG).push(condition).push(confidence));

        if let Some(message) = &prediction.message {
            section = section.push(Text::new(message.clone()).size(typography::BODY));
        }

        sections = sections.push(
            Container::new(section)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::tinted_card(
                    palette::BLUE_50,
                    palette::INFO_500,
                )),
        );
    }

    if let Some(explanation) = result.llm_explanation() {
        let heading = Text::new(i18n.tr("sim-ai-analysis-title"))
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::KISAN_DARKER_GREEN),
            });

        let mut section = Column::new().spacing(spacing::SM).push(heading);

        if !explanation.problems_detected.is_empty() {
            section = section.push(
                Text::new(format!("{}:", i18n.tr("sim-problems-label")))
                    .size(typography::BODY_LG)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
            for problem in &explanation.problems_detected {
                section =
                    section.push(Text::new(format!("• {problem}")).size(typography::BODY));
            }
        }

        if !explanation.ai_advice.is_empty() {
            section = section.push(
                Text::new(format!("{}:", i18n.tr("sim-advice-label")))
                    .size(typography::BODY_LG)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::KISAN_DARKER_GREEN),
                    }),
            );
            for advice in &explanation.ai_advice {
                section = section.push(Text::new(format!("• {advice}")).size(typography::BODY));
            }
        }

        if let Some(prose) = &explanation.explanation {
            section = section
                .push(
                    Text::new(format!("{}:", i18n.tr("sim-explanation-label")))
                        .size(typography::BODY_LG),
                )
                .push(Text::new(prose.clone()).size(typography::BODY));
        }

        sections = sections.push(
            Container::new(section)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::tinted_card(
                    palette::GREEN_50,
                    palette::KISAN_GREEN,
                )),
        );
    }

    if result.is_unrecognized() {
        let heading = Text::new(i18n.tr("sim-result-title"))
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::KISAN_DARKER_GREEN),
            });

        let raw = Text::new(result.raw_pretty()).size(typography::BODY);

        sections = sections.push(
            Container::new(Column::new().spacing(spacing::SM).push(heading).push(raw))
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );
    }

    sections.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ParamValue;
    use serde_json::json;

    fn outcome(value: serde_json::Value) -> SimulationOutcome {
        SimulationOutcome::from_value(value)
    }

    #[test]
    fn submit_with_defaults_builds_full_record() {
        let i18n = I18n::default();
        let mut state = State::new();

        let event = state.update(Message::SubmitPressed, &i18n);
        match event {
            Event::Submit(record) => {
                assert_eq!(record.len(), 13);
                assert_eq!(record["soil_moisture"], json!(18.0));
            }
            _ => panic!("expected Submit event"),
        }
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn out_of_range_edit_is_rejected_and_submit_still_passes() {
        let i18n = I18n::default();
        let mut state = State::new();

        // soil_ph is bounded to [4, 9]; a 10 never reaches the stored value
        let _ = state.update(
            Message::ValueChanged(ParamId::SoilPh, "10".to_string()),
            &i18n,
        );
        assert_eq!(
            state.catalog().get(ParamId::SoilPh).unwrap().value,
            ParamValue::Valid(8.1)
        );

        let event = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(event, Event::Submit(_)));
    }

    #[test]
    fn pending_edit_blocks_submit_with_validation_error() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        let mut state = State::new();

        let _ = state.update(
            Message::ValueChanged(ParamId::Humidity, String::new()),
            &i18n,
        );
        let event = state.update(Message::SubmitPressed, &i18n);

        assert!(matches!(event, Event::None));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(i18n.tr("sim-validation-error").as_str()));
    }

    #[test]
    fn accepted_edit_clears_stale_error_and_result() {
        let i18n = I18n::default();
        let mut state = State::new();

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Ok(outcome(json!({"status": "ok"})))),
            &i18n,
        );
        assert!(state.result().is_some());

        let _ = state.update(
            Message::ValueChanged(ParamId::Humidity, "42".to_string()),
            &i18n,
        );
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn rejected_edit_keeps_existing_result() {
        let i18n = I18n::default();
        let mut state = State::new();

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Ok(outcome(json!({"status": "ok"})))),
            &i18n,
        );

        let _ = state.update(
            Message::ValueChanged(ParamId::Humidity, "garbage".to_string()),
            &i18n,
        );
        assert!(state.result().is_some());
    }

    #[test]
    fn reset_restores_defaults_and_clears_state() {
        let i18n = I18n::default();
        let mut state = State::new();

        let _ = state.update(
            Message::ValueChanged(ParamId::Nitrogen, "150".to_string()),
            &i18n,
        );
        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Err(ApiError::Status(502))),
            &i18n,
        );
        assert!(state.error().is_some());

        let _ = state.update(Message::ResetPressed, &i18n);
        assert_eq!(
            state.catalog().get(ParamId::Nitrogen).unwrap().value,
            ParamValue::Valid(9.0)
        );
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn submit_while_loading_is_a_no_op() {
        let i18n = I18n::default();
        let mut state = State::new();

        let first = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(first, Event::Submit(_)));

        let second = state.update(Message::SubmitPressed, &i18n);
        assert!(matches!(second, Event::None));
    }

    #[test]
    fn failed_request_sets_localized_error_and_stops_loading() {
        let mut i18n = I18n::default();
        i18n.set_locale("hi".parse().unwrap());
        let mut state = State::new();

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Err(ApiError::Request("refused".into()))),
            &i18n,
        );

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(i18n.tr("sim-request-error").as_str()));
        assert!(state.result().is_none());
    }

    #[test]
    fn successful_outcome_is_stored_raw() {
        let i18n = I18n::default();
        let mut state = State::new();

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Ok(outcome(json!({
                "local_ml_prediction": {
                    "predicted_condition": "stressed",
                    "confidence": 0.8732
                }
            })))),
            &i18n,
        );

        let prediction = state
            .result()
            .and_then(SimulationOutcome::ml_prediction)
            .expect("prediction should parse");
        assert_eq!(prediction.condition_label(), Some("stressed"));
        assert_eq!(prediction.confidence_percent(), "87.32%");
        assert!(!state.is_loading());
    }

    #[test]
    fn simulation_view_renders_in_all_states() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        let mut state = State::new();
        let _ = state.view(&i18n);

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.view(&i18n);

        let _ = state.update(
            Message::OutcomeReceived(Ok(outcome(json!({
                "local_llm_explanation": {
                    "problems_detected": ["Low nitrogen"],
                    "ai_advice": ["Apply urea in split doses"],
                    "explanation": "Nutrient stress is likely."
                }
            })))),
            &i18n,
        );
        let _ = state.view(&i18n);

        let _ = state.update(Message::SubmitPressed, &i18n);
        let _ = state.update(
            Message::OutcomeReceived(Ok(outcome(json!({"echo": true})))),
            &i18n,
        );
        let _ = state.view(&i18n);
    }
}

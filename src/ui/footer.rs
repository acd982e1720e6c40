// SPDX-License-Identifier: MPL-2.0
//! Shared footer strip with the product attribution and the advisory notice.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{text, Column, Container, Text},
    Element, Length, Theme,
};

/// Render the footer. It emits no messages of its own.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let powered_by = Text::new(i18n.tr("footer-powered-by"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::KISAN_DARKER_GREEN),
        });

    let advisory = Text::new(i18n.tr("footer-advisory"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_700),
        });

    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(powered_by)
        .push(advisory);

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast label and its overlay layer.

use crate::ui::design_tokens::toast as tokens;
use iced::widget::{container, text, Container, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Shadow, Theme};

/// Everything the view needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub message: String,
    pub opacity: f32,
}

/// Renders the pill-shaped label.
pub fn label<'a, Message: 'a>(snapshot: ToastSnapshot) -> Element<'a, Message> {
    let opacity = snapshot.opacity;

    let message = Text::new(snapshot.message)
        .size(tokens::TEXT_SIZE)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(tokens::TEXT, opacity)),
        });

    Container::new(message)
        .padding(Padding {
            top: tokens::PADDING_VERTICAL,
            bottom: tokens::PADDING_VERTICAL,
            left: tokens::PADDING_HORIZONTAL,
            right: tokens::PADDING_HORIZONTAL,
        })
        .style(move |_theme: &Theme| label_style(opacity))
        .into()
}

/// Layers the toast over `content`, centered horizontally and lifted
/// `bottom_offset` pixels above the bottom edge.
pub fn overlay<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    snapshot: Option<ToastSnapshot>,
    bottom_offset: f32,
) -> Element<'a, Message> {
    let Some(snapshot) = snapshot else {
        return content.into();
    };

    let layer = Container::new(label(snapshot))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: bottom_offset,
            ..Padding::ZERO
        });

    Stack::new()
        .push(content)
        .push(layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Style for the label container at the given opacity.
fn label_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(tokens::BACKGROUND, opacity))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: tokens::RADIUS.into(),
        },
        shadow: Shadow {
            color: faded(tokens::SHADOW.color, opacity),
            ..tokens::SHADOW
        },
        text_color: Some(faded(tokens::TEXT, opacity)),
        ..Default::default()
    }
}

/// Scales a color's alpha by `opacity`.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

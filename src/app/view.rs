// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::{self, Phase, Policy, ToastSnapshot};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub policy: Policy,
    pub phase: Phase,
    pub jobs_running: u32,
    pub toast: Option<ToastSnapshot>,
    pub bottom_offset: f32,
}

/// Renders the controls with the toast layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("fade_toast").size(typography::TITLE_MD);

    let input = text_input("Message to show", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::ShowPressed)
        .padding(spacing::XS);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Show")).on_press(Message::ShowPressed))
        .push(button(Text::new("Show 6s")).on_press(Message::ShowLongPressed))
        .push(button(Text::new("Hide")).on_press(Message::HidePressed));

    let policy_label = match ctx.policy {
        Policy::Replace => "Policy: replace",
        Policy::DropWhileActive => "Policy: drop while active",
    };
    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(policy_label)).on_press(Message::TogglePolicy))
        .push(button(Text::new("Run background job")).on_press(Message::StartJob));

    let status = Text::new(format!(
        "Phase: {:?} | background jobs: {}",
        ctx.phase, ctx.jobs_running
    ))
    .size(typography::CAPTION);

    let controls = Column::new()
        .spacing(spacing::MD)
        .max_width(420.0)
        .push(title)
        .push(input)
        .push(actions)
        .push(extras)
        .push(status);

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG);

    toast::view::overlay(content, ctx.toast, ctx.bottom_offset)
}

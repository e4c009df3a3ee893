// SPDX-License-Identifier: MPL-2.0
//! Floating toast stack.
//!
//! Renders the floating projection in the bottom-right corner, newest on top.
//! Whether the center is open has no effect on what is shown here.

use super::card::{self, CardContext, Placement};
use super::Message;
use crate::domain::notification::Notification;
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};

/// Renders the overlay for the given notifications.
///
/// Returns an empty, zero-sized element when there is nothing to show, so the
/// overlay can always be stacked on top of the main view.
pub fn view<'a, E>(
    notifications: &[&'a Notification<E>],
    ctx: &CardContext<'a>,
) -> Element<'a, Message<E>>
where
    E: Clone + 'static,
{
    if notifications.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toasts = notifications
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            column.push(card::view(notification, ctx, Placement::Floating))
        })
        .align_x(alignment::Horizontal::Right);

    Container::new(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

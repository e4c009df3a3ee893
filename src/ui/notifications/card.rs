// SPDX-License-Identifier: MPL-2.0
//! Notification card.
//!
//! A card is the visual form of one notification: a priority-colored
//! accent strip, an icon by kind, title and message, optional category chip
//! and metadata line, action buttons, a relative timestamp and, for
//! notifications that auto-hide, a countdown bar.

use super::Message;
use crate::domain::notification::{remaining_fraction, Metadata, Notification, RelativeTime};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Granularity of the progress bars.
const BAR_RESOLUTION: u16 = 1000;

/// Everything a card needs besides the notification itself.
#[derive(Clone, Copy)]
pub struct CardContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

impl<'a> CardContext<'a> {
    #[must_use]
    pub fn new(i18n: &'a I18n, colors: &'a ColorScheme, now: Instant) -> Self {
        Self { i18n, colors, now }
    }
}

/// Where a card is drawn. Floating toasts have a fixed width, center
/// entries fill the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Floating,
    Center,
}

/// Renders one notification.
pub fn view<'a, E>(
    notification: &'a Notification<E>,
    ctx: &CardContext<'a>,
    placement: Placement,
) -> Element<'a, Message<E>>
where
    E: Clone + 'static,
{
    let colors = ctx.colors;
    let accent = colors.priority_color(notification.priority());
    let kind_color = colors.kind_color(notification.kind());
    let secondary = colors.text_secondary;
    let id = notification.id();
    let unread = !notification.is_read();

    let icon = icons::tinted(
        icons::sized(icons::for_kind(notification.kind()), sizing::ICON_MD),
        kind_color,
    );

    let title = Text::new(notification.title())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let mut heading = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(title);
    if let Some(category) = notification.category() {
        heading = heading.push(
            Container::new(Text::new(category).size(typography::CAPTION))
                .padding([0.0, spacing::XS])
                .style(styles::container::chip(kind_color)),
        );
    }

    let timestamp = Text::new(relative_label(
        ctx.i18n,
        RelativeTime::from_elapsed(notification.age(ctx.now)),
    ))
    .size(typography::CAPTION)
    .style(move |_theme: &Theme| text::Style {
        color: Some(secondary),
    });

    let close = button(icons::tinted(
        icons::sized(icons::cross(), sizing::ICON_SM),
        secondary,
    ))
    .on_press(Message::Dismiss(id))
    .padding(spacing::XXS)
    .style(styles::button::ghost);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Container::new(heading).width(Length::Fill))
        .push(timestamp)
        .push(close);

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(notification.message()).size(typography::BODY));

    let metadata = notification.metadata();
    if let Some(line) = metadata_line(ctx.i18n, metadata) {
        body = body.push(
            Text::new(line)
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(secondary),
                }),
        );
    }
    if let Some(progress) = metadata.progress {
        body = body.push(fraction_bar(progress.as_fraction(), kind_color));
    }

    if !notification.actions().is_empty() {
        let actions = notification
            .actions()
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, action| {
                row.push(
                    button(Text::new(action.label.as_str()).size(typography::BODY_SM))
                        .on_press(Message::Invoke(id, action.effect.clone()))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::card_action(kind_color)),
                )
            });
        body = body.push(actions);
    }

    if let Some(fraction) = remaining_fraction(notification, ctx.now) {
        body = body.push(fraction_bar(fraction, accent));
    }

    let strip = Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ACCENT_WIDTH))
        .style(styles::container::solid(accent));

    let content = Column::new().spacing(spacing::XS).push(strip).push(body);

    let width = match placement {
        Placement::Floating => Length::Fixed(sizing::TOAST_WIDTH),
        Placement::Center => Length::Fill,
    };

    let card: Element<'a, Message<E>> = Container::new(content)
        .width(width)
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::card(theme, accent, unread))
        .into();

    if unread {
        mouse_area(card).on_press(Message::MarkRead(id)).into()
    } else {
        card
    }
}

/// Localized relative timestamp ("Just now", "5m ago", ...).
#[must_use]
pub fn relative_label(i18n: &I18n, time: RelativeTime) -> String {
    match time.count() {
        Some(count) => i18n.tr_with_args(time.i18n_key(), &[("count", &count.to_string())]),
        None => i18n.tr(time.i18n_key()),
    }
}

/// One caption line summarizing the metadata, or `None` when there is
/// nothing to show.
#[must_use]
pub fn metadata_line(i18n: &I18n, metadata: &Metadata) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(amount) = &metadata.amount {
        parts.push(amount.to_string());
    }
    if let Some(booking_id) = &metadata.booking_id {
        parts.push(i18n.tr_with_args("card-booking-id", &[("id", booking_id)]));
    }
    if let Some(progress) = metadata.progress {
        parts.push(i18n.tr_with_args(
            "card-progress",
            &[("percent", &progress.value().to_string())],
        ));
    }
    if let Some(url) = &metadata.image_url {
        parts.push(url.clone());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

/// Splits a fraction into (filled, empty) bar portions.
#[must_use]
pub fn bar_portions(fraction: f32) -> (u16, u16) {
    let clamped = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (clamped * f32::from(BAR_RESOLUTION)).round() as u16;
    (filled, BAR_RESOLUTION - filled)
}

/// A thin horizontal bar filled to `fraction`.
///
/// Zero-width portions are skipped: iced treats `FillPortion(0)` as a
/// request for space.
fn fraction_bar<'a, M: 'a>(fraction: f32, color: Color) -> Element<'a, M> {
    let (filled, empty) = bar_portions(fraction);

    let mut bar = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT));
    if filled > 0 {
        bar = bar.push(
            container(text(""))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::solid(color)),
        );
    }
    if empty > 0 {
        bar = bar.push(
            container(text(""))
                .width(Length::FillPortion(empty))
                .height(Length::Fill)
                .style(styles::container::progress_track),
        );
    }
    bar.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::notification::{Amount, Percent};

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), None, &Config::default())
    }

    #[test]
    fn bar_portions_cover_the_whole_bar() {
        assert_eq!(bar_portions(1.0), (1000, 0));
        assert_eq!(bar_portions(0.0), (0, 1000));
        assert_eq!(bar_portions(0.25), (250, 750));
    }

    #[test]
    fn bar_portions_clamp_out_of_range_values() {
        assert_eq!(bar_portions(1.7), (1000, 0));
        assert_eq!(bar_portions(-0.3), (0, 1000));
        assert_eq!(bar_portions(f32::NAN), (0, 1000));
    }

    #[test]
    fn relative_label_uses_count_argument() {
        let i18n = english();
        assert_eq!(relative_label(&i18n, RelativeTime::Minutes(5)), "5m ago");
        assert_eq!(relative_label(&i18n, RelativeTime::JustNow), "Just now");
    }

    #[test]
    fn metadata_line_is_none_for_empty_metadata() {
        assert_eq!(metadata_line(&english(), &Metadata::default()), None);
    }

    #[test]
    fn metadata_line_joins_present_fields() {
        let metadata = Metadata::default()
            .with_amount(Amount::npr(1500))
            .with_booking_id("BK-42")
            .with_progress(Percent::new(40));
        let line = metadata_line(&english(), &metadata).expect("line expected");

        assert!(line.contains("NPR 1,500.00"));
        assert!(line.contains("BK-42"));
        assert!(line.contains("40%"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Notification center: the bell with its unread badge and the panel that
//! lists every notification in the store.

use super::card::{self, CardContext, Placement};
use super::Message;
use crate::domain::notification::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Font, Length, Theme};

/// Highest count displayed on the badge before it switches to "99+".
pub const BADGE_CAP: usize = 99;

/// Text shown in the unread badge, or `None` when the badge is hidden.
#[must_use]
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

/// Bell button toggling the center, with the unread badge in its top-right
/// corner.
pub fn bell<'a, E>(unread: usize, colors: &ColorScheme) -> Element<'a, Message<E>>
where
    E: Clone + 'static,
{
    let bell = button(icons::tinted(
        icons::sized(icons::bell(), sizing::ICON_MD),
        colors.text_primary,
    ))
    .on_press(Message::ToggleCenter)
    .padding(spacing::XS)
    .style(styles::button::ghost);

    let Some(label) = badge_label(unread) else {
        return bell.into();
    };

    let badge = Container::new(Text::new(label).size(typography::BADGE))
        .padding([0.0, spacing::XXS])
        .height(Length::Fixed(sizing::BADGE))
        .align_y(alignment::Vertical::Center)
        .style(styles::container::badge);

    Stack::new()
        .push(bell)
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top),
        )
        .into()
}

/// The drop-down panel: header with bulk actions, then every notification
/// newest first, or an empty-state message.
pub fn panel<'a, E>(store: &'a Store<E>, ctx: &CardContext<'a>) -> Element<'a, Message<E>>
where
    E: Clone + 'static,
{
    let i18n = ctx.i18n;
    let secondary = ctx.colors.text_secondary;

    let title = Text::new(i18n.tr("center-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let mark_all = button(Text::new(i18n.tr("center-mark-all-read")).size(typography::BODY_SM))
        .on_press_maybe((store.unread_count() > 0).then_some(Message::MarkAllRead))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost);

    let clear_all = button(Text::new(i18n.tr("center-clear-all")).size(typography::BODY_SM))
        .on_press_maybe((!store.is_empty()).then_some(Message::ClearAll))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost);

    let close = button(icons::tinted(
        icons::sized(icons::cross(), sizing::ICON_SM),
        secondary,
    ))
    .on_press(Message::CloseCenter)
    .padding(spacing::XXS)
    .style(styles::button::ghost);

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(mark_all)
        .push(clear_all)
        .push(close);

    let body: Element<'a, Message<E>> = if store.is_empty() {
        Container::new(
            text(i18n.tr("center-empty"))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(secondary),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let list = store
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, notification| {
                column.push(card::view(notification, ctx, Placement::Center))
            });
        scrollable(list).into()
    };

    Container::new(Column::new().spacing(spacing::SM).push(header).push(body))
        .width(Length::Fixed(sizing::CENTER_PANEL_WIDTH))
        .max_height(sizing::CENTER_PANEL_MAX_HEIGHT)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_without_unread() {
        assert_eq!(badge_label(0), None);
    }

    #[test]
    fn badge_shows_exact_count_up_to_cap() {
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
    }

    #[test]
    fn badge_caps_large_counts() {
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
        assert_eq!(badge_label(5000).as_deref(), Some("99+"));
    }

    #[test]
    fn views_render_from_a_borrowed_store() {
        use crate::config::Config;
        use crate::domain::notification::NotificationDraft;
        use crate::i18n::fluent::I18n;
        use crate::ui::theming::{AppTheme, ThemeMode};

        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let theme = AppTheme::new(ThemeMode::Dark);
        let mut store: Store<String> = Store::new();
        store.add(
            NotificationDraft::booking("Booking Confirmed", "Seat booked")
                .with_category("booking")
                .with_action("View booking", "YT-01001".to_string()),
        );
        let ctx = CardContext::new(&i18n, &theme.colors, store.clock().now());

        let _bell: Element<'_, Message<String>> = bell(store.unread_count(), &theme.colors);
        let _panel = panel(&store, &ctx);
    }
}

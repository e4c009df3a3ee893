// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: one button per notification producer, plus the theme
//! and language switches.
//!
//! The buttons stand in for the booking, payment and system flows that
//! create notifications in production.

use crate::application::producers::Gateway;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, text, Column, Row, Text};
use iced::{alignment, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// A notification the dashboard can produce on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    BookingConfirmed,
    PaymentSucceeded(Gateway),
    PaymentFailed(Gateway),
    PaymentPending(Gateway),
    SystemNotice,
    /// Five quick informational notifications.
    Burst,
}

impl Demo {
    /// Stable producer name, used in diagnostics.
    #[must_use]
    pub fn producer_name(self) -> &'static str {
        match self {
            Demo::BookingConfirmed => "booking_confirmed",
            Demo::PaymentSucceeded(_) => "payment_succeeded",
            Demo::PaymentFailed(_) => "payment_failed",
            Demo::PaymentPending(_) => "payment_pending",
            Demo::SystemNotice => "system_notice",
            Demo::Burst => "burst",
        }
    }
}

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub total: usize,
    pub unread: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Produce(Demo),
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    OpenDiagnostics,
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_SM).into()
}

fn producer_button<'a>(label: String, demo: Demo) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(Message::Produce(demo))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .into()
}

fn toggle_button<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let style = if selected {
        styles::button::primary
    } else {
        styles::button::unselected
    };
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

fn build_producers<'a>(i18n: &I18n) -> Element<'a, Message> {
    let booking = Row::new()
        .spacing(spacing::XS)
        .push(producer_button(
            i18n.tr("dashboard-demo-booking"),
            Demo::BookingConfirmed,
        ))
        .push(producer_button(
            i18n.tr("dashboard-demo-system"),
            Demo::SystemNotice,
        ))
        .push(producer_button(i18n.tr("dashboard-demo-burst"), Demo::Burst));

    let payments = Gateway::ALL.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, &gateway| {
            let name = gateway.display_name();
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new(name).size(typography::BODY).width(Length::Fixed(64.0)))
                    .push(producer_button(
                        i18n.tr("dashboard-demo-payment-success"),
                        Demo::PaymentSucceeded(gateway),
                    ))
                    .push(producer_button(
                        i18n.tr("dashboard-demo-payment-failure"),
                        Demo::PaymentFailed(gateway),
                    ))
                    .push(producer_button(
                        i18n.tr("dashboard-demo-payment-pending"),
                        Demo::PaymentPending(gateway),
                    )),
            )
        },
    );

    Column::new()
        .spacing(spacing::SM)
        .push(section_title(i18n.tr("dashboard-producers-title")))
        .push(booking)
        .push(payments)
        .into()
}

fn build_preferences<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            row.push(toggle_button(
                i18n.tr(mode.i18n_key()),
                mode == ctx.theme_mode,
                Message::ThemeSelected(mode),
            ))
        });

    let languages = i18n
        .available_locales
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            row.push(toggle_button(
                i18n.tr(&format!("language-name-{locale}")),
                locale == i18n.current_locale(),
                Message::LanguageSelected(locale.clone()),
            ))
        });

    Column::new()
        .spacing(spacing::SM)
        .push(section_title(i18n.tr("dashboard-theme-title")))
        .push(themes)
        .push(section_title(i18n.tr("dashboard-language-title")))
        .push(languages)
        .into()
}

/// Render the dashboard.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("dashboard-title")).size(typography::TITLE_LG);

    let total_str = ctx.total.to_string();
    let unread_str = ctx.unread.to_string();
    let summary = text(i18n.tr_with_args(
        "dashboard-summary",
        &[("total", &total_str), ("unread", &unread_str)],
    ))
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let diagnostics =
        button(Text::new(i18n.tr("dashboard-open-diagnostics")).size(typography::BODY_SM))
            .on_press(Message::OpenDiagnostics)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(title)
        .push(summary)
        .push(build_producers(i18n))
        .push(build_preferences(&ctx))
        .push(diagnostics);

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_names_are_distinct() {
        let demos = [
            Demo::BookingConfirmed,
            Demo::PaymentSucceeded(Gateway::Khalti),
            Demo::PaymentFailed(Gateway::Khalti),
            Demo::PaymentPending(Gateway::Esewa),
            Demo::SystemNotice,
            Demo::Burst,
        ];
        let mut names: Vec<_> = demos.iter().map(|d| d.producer_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), demos.len());
    }

    #[test]
    fn dashboard_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
            total: 2,
            unread: 1,
        });
    }
}

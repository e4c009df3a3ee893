// SPDX-License-Identifier: MPL-2.0
//! Diagnostics screen module for viewing and exporting diagnostic data.
//!
//! Shows how long events have been collected, the buffer fill level and the
//! most recent events, with a button to export the JSON report.

use std::time::Duration;

use crate::diagnostics::{DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Text},
    Element, Length, Theme,
};

/// Number of events listed on screen, newest first.
pub const RECENT_EVENT_LIMIT: usize = 20;

/// Contextual data needed to render the diagnostics screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Number of events in the buffer.
    pub event_count: usize,
    pub capacity: usize,
    /// Duration since collection started.
    pub collection_duration: Duration,
    /// Buffered events, oldest first.
    pub events: Vec<&'a DiagnosticEvent>,
}

/// Messages emitted by the diagnostics screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToDashboard,
    ExportReport,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToDashboard,
    ExportReport,
}

/// Process a diagnostics screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToDashboard => Event::BackToDashboard,
        Message::ExportReport => Event::ExportReport,
    }
}

/// Formats a duration for display.
///
/// - Under 1 hour: "Xm Ys"
/// - Over 1 hour: "Xh Ym Zs"
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// One-line summary of an event for the recent events list.
#[must_use]
pub fn describe(kind: &DiagnosticEventKind) -> String {
    match kind {
        DiagnosticEventKind::UserAction { action, details } => {
            let name = match action {
                UserAction::OpenCenter => "open_center".to_string(),
                UserAction::CloseCenter => "close_center".to_string(),
                UserAction::DismissNotification => "dismiss_notification".to_string(),
                UserAction::MarkAllRead => "mark_all_read".to_string(),
                UserAction::ClearAll => "clear_all".to_string(),
                UserAction::InvokeAction { label } => format!("invoke_action ({label})"),
                UserAction::ProduceNotification { producer } => {
                    format!("produce_notification ({producer})")
                }
                UserAction::ExportDiagnostics => "export_diagnostics".to_string(),
            };
            match details {
                Some(details) => format!("action: {name}: {details}"),
                None => format!("action: {name}"),
            }
        }
        DiagnosticEventKind::AutoHidden { count } => format!("auto_hidden: {count}"),
        DiagnosticEventKind::Warning { event } => {
            format!("warning: {:?}: {}", event.warning_type, event.message)
        }
        DiagnosticEventKind::Error { event } => {
            format!("error: {:?}: {}", event.error_type, event.message)
        }
    }
}

fn build_status_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let duration_str = format_duration(ctx.collection_duration);
    let duration_text = ctx
        .i18n
        .tr_with_args("diagnostics-running-for", &[("duration", &duration_str)]);

    let count_str = ctx.event_count.to_string();
    let capacity_str = ctx.capacity.to_string();
    let buffer_text = ctx.i18n.tr_with_args(
        "diagnostics-buffer-count",
        &[("count", &count_str), ("capacity", &capacity_str)],
    );

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(duration_text).size(typography::BODY))
        .push(Text::new(buffer_text).size(typography::BODY))
        .into()
}

fn build_recent_events<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let secondary = ctx.colors.text_secondary;
    let heading = Text::new(ctx.i18n.tr("diagnostics-recent-events")).size(typography::TITLE_SM);

    if ctx.events.is_empty() {
        return Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(
                text(ctx.i18n.tr("diagnostics-no-events"))
                    .size(typography::BODY_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(secondary),
                    }),
            )
            .into();
    }

    let latest = ctx.events.last().map(|event| event.timestamp);

    ctx.events
        .iter()
        .rev()
        .take(RECENT_EVENT_LIMIT)
        .fold(
            Column::new().spacing(spacing::XXS).push(heading),
            |column, event| {
                // Offset from the newest event, shown as an age.
                let age = latest
                    .map(|latest| latest.saturating_duration_since(event.timestamp))
                    .unwrap_or_default();
                column.push(
                    Text::new(format!("-{}  {}", format_duration(age), describe(&event.kind)))
                        .size(typography::CAPTION),
                )
            },
        )
        .into()
}

/// Render the diagnostics screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("diagnostics-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToDashboard)
    .style(styles::button::unselected);

    let title = Text::new(ctx.i18n.tr("diagnostics-title")).size(typography::TITLE_LG);

    let export_button = button(Text::new(ctx.i18n.tr("diagnostics-export-button")))
        .on_press(Message::ExportReport)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_status_section(&ctx))
        .push(export_button)
        .push(build_recent_events(&ctx));

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{WarningEvent, WarningType};

    #[test]
    fn diagnostics_view_renders() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let ctx = ViewContext {
            i18n: &i18n,
            colors: &colors,
            event_count: 0,
            capacity: 500,
            collection_duration: Duration::from_secs(0),
            events: Vec::new(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn back_emits_event() {
        let event = update(&Message::BackToDashboard);
        assert!(matches!(event, Event::BackToDashboard));
    }

    #[test]
    fn export_emits_event() {
        let event = update(&Message::ExportReport);
        assert!(matches!(event, Event::ExportReport));
    }

    #[test]
    fn format_duration_under_one_hour() {
        let duration = Duration::from_secs(5 * 60 + 32); // 5m 32s
        assert_eq!(format_duration(duration), "5m 32s");
    }

    #[test]
    fn format_duration_over_one_hour() {
        let duration = Duration::from_secs(2 * 3600 + 15 * 60 + 45); // 2h 15m 45s
        assert_eq!(format_duration(duration), "2h 15m 45s");
    }

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(Duration::ZERO), "0m 0s");
    }

    #[test]
    fn describe_user_action_with_label() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::InvokeAction {
                label: "Retry".to_string(),
            },
            details: None,
        };
        assert_eq!(describe(&kind), "action: invoke_action (Retry)");
    }

    #[test]
    fn describe_warning() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::PaymentIssue, "slow gateway"),
        };
        assert_eq!(describe(&kind), "warning: PaymentIssue: slow gateway");
    }
}

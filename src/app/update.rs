// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every store mutation happens here. Views only emit messages.

use super::{persistence, Effect, Screen};
use crate::application::producers;
use crate::diagnostics::{
    default_export_directory, generate_default_filename, DiagnosticsCollector, UserAction,
};
use crate::domain::notification::{
    Amount, FloatingPolicy, Kind, NotificationDraft, NotificationId, Percent, Store,
};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, Demo};
use crate::ui::diagnostics_screen::{self, Event as DiagnosticsEvent};
use crate::ui::notifications::{self, visibility, ReadTracker};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::Task;

use super::Message;

/// Sample routes used by the booking producer.
const DEMO_ROUTES: [&str; 3] = [
    "Kathmandu → Pokhara",
    "Pokhara → Chitwan",
    "Kathmandu → Biratnagar",
];

/// Sample fares in rupees used by the payment producer.
const DEMO_FARES: [i64; 3] = [1500, 2250, 12_000];

/// Number of notifications produced by the burst demo.
pub const BURST_SIZE: usize = 5;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub app_theme: &'a mut AppTheme,
    pub store: &'a mut Store<Effect>,
    pub floating_policy: FloatingPolicy,
    pub read_tracker: &'a mut ReadTracker,
    pub center_open: &'a mut bool,
    pub diagnostics: &'a mut DiagnosticsCollector,
    /// Counter feeding the demo booking ids, fares and progress values.
    pub demo_sequence: &'a mut u32,
}

impl UpdateContext<'_> {
    fn push_warning(&mut self, key: Option<String>) {
        if let Some(key) = key {
            let draft = producers::config_warning(self.i18n, &key);
            self.store.add(draft);
        }
    }

    fn next_sequence(&mut self) -> u32 {
        *self.demo_sequence = self.demo_sequence.wrapping_add(1);
        *self.demo_sequence
    }
}

/// Handles notification card, center and bell interactions.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message<Effect>,
) -> Task<Message> {
    use notifications::Message as N;

    let handle = ctx.diagnostics.handle();
    match message {
        N::Dismiss(id) => {
            if ctx.store.remove(id) {
                handle.log_action(UserAction::DismissNotification);
            }
        }
        N::Invoke(id, effect) => handle_invoke(ctx, id, effect),
        N::MarkRead(id) => ctx.store.mark_read(id),
        N::ToggleCenter => {
            *ctx.center_open = !*ctx.center_open;
            handle.log_action(if *ctx.center_open {
                UserAction::OpenCenter
            } else {
                UserAction::CloseCenter
            });
        }
        N::CloseCenter => {
            if *ctx.center_open {
                *ctx.center_open = false;
                handle.log_action(UserAction::CloseCenter);
            }
        }
        N::MarkAllRead => {
            ctx.store.mark_all_read();
            handle.log_action(UserAction::MarkAllRead);
        }
        N::ClearAll => {
            ctx.store.clear_all();
            ctx.read_tracker.clear();
            handle.log_action(UserAction::ClearAll);
        }
    }
    Task::none()
}

/// Runs the effect of an action button, then removes its notification.
fn handle_invoke(ctx: &mut UpdateContext<'_>, id: NotificationId, effect: Effect) {
    let Some(notification) = ctx.store.get(id) else {
        return;
    };
    let label = notification
        .actions()
        .iter()
        .find(|action| action.effect == effect)
        .map(|action| action.label.clone())
        .unwrap_or_default();
    ctx.diagnostics
        .handle()
        .log_action(UserAction::InvokeAction { label });

    match effect {
        Effect::OpenBooking(booking_id) => {
            let draft = NotificationDraft::info(
                ctx.i18n.tr("effect-open-booking-title"),
                ctx.i18n
                    .tr_with_args("effect-open-booking-message", &[("booking", &booking_id)]),
            )
            .with_category(producers::CATEGORY_BOOKING);
            ctx.store.add(draft);
        }
        Effect::RetryPayment(gateway) => {
            let draft = producers::payment_pending(ctx.i18n, gateway, Percent::new(0));
            ctx.store.add(draft);
        }
        Effect::Dismiss => {}
    }
    ctx.store.remove(id);
}

/// Handles dashboard buttons.
pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match message {
        dashboard::Message::Produce(demo) => produce(ctx, demo),
        dashboard::Message::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            *ctx.app_theme = AppTheme::new(mode);
            let warning = persistence::persist_preferences(mode, None);
            ctx.push_warning(warning);
        }
        dashboard::Message::LanguageSelected(locale) => {
            let warning = persistence::apply_language_change(ctx.i18n, *ctx.theme_mode, locale);
            ctx.push_warning(warning);
        }
        dashboard::Message::OpenDiagnostics => *ctx.screen = Screen::Diagnostics,
    }
    Task::none()
}

/// Runs one of the dashboard producers.
fn produce(ctx: &mut UpdateContext<'_>, demo: Demo) {
    ctx.diagnostics
        .handle()
        .log_action(UserAction::ProduceNotification {
            producer: demo.producer_name().to_string(),
        });

    let sequence = ctx.next_sequence();
    let pick = sequence as usize;

    match demo {
        Demo::BookingConfirmed => {
            let booking_id = format!("YT-{:05}", 1000 + sequence);
            let route = DEMO_ROUTES[pick % DEMO_ROUTES.len()];
            let draft = producers::booking_confirmed(
                ctx.i18n,
                &booking_id,
                route,
                Effect::OpenBooking(booking_id.clone()),
            );
            ctx.store.add(draft);
        }
        Demo::PaymentSucceeded(gateway) => {
            clear_payment_state(ctx.store);
            let amount = Amount::npr(DEMO_FARES[pick % DEMO_FARES.len()]);
            let draft = producers::payment_succeeded(ctx.i18n, gateway, amount);
            ctx.store.add(draft);
        }
        Demo::PaymentFailed(gateway) => {
            let reason = ctx.i18n.tr("payment-failure-reason");
            let draft = producers::payment_failed(
                ctx.i18n,
                gateway,
                &reason,
                Effect::RetryPayment(gateway),
            );
            ctx.store.add(draft);
        }
        Demo::PaymentPending(gateway) => {
            let progress = Percent::new(pending_progress(sequence));
            ctx.store.add(producers::payment_pending(ctx.i18n, gateway, progress));
        }
        Demo::SystemNotice => {
            let draft = producers::system_notice(
                ctx.i18n.tr("demo-system-title"),
                ctx.i18n.tr("demo-system-message"),
            );
            ctx.store.add(draft);
        }
        Demo::Burst => {
            for n in 1..=BURST_SIZE {
                let draft = NotificationDraft::info(
                    ctx.i18n
                        .tr_with_args("demo-burst-title", &[("number", &n.to_string())]),
                    ctx.i18n.tr("demo-burst-message"),
                );
                ctx.store.add(draft);
            }
        }
    }
}

/// Removes pending payments and payment errors, which a successful payment
/// supersedes.
fn clear_payment_state(store: &mut Store<Effect>) {
    let stale: Vec<NotificationId> = store
        .iter()
        .filter(|n| producers::is_payment_related(n.kind(), n.category()))
        .filter(|n| n.is_persistent() || n.kind() == Kind::Error)
        .map(|n| n.id())
        .collect();
    for id in stale {
        store.remove(id);
    }
}

/// Progress shown by the pending demo, cycling 20 %, 45 %, 70 %, 95 %.
fn pending_progress(sequence: u32) -> u8 {
    const STEPS: [u8; 4] = [20, 45, 70, 95];
    STEPS[sequence as usize % STEPS.len()]
}

/// Handles the diagnostics screen.
pub fn handle_diagnostics_message(
    ctx: &mut UpdateContext<'_>,
    message: &diagnostics_screen::Message,
) -> Task<Message> {
    match diagnostics_screen::update(message) {
        DiagnosticsEvent::BackToDashboard => *ctx.screen = Screen::Dashboard,
        DiagnosticsEvent::ExportReport => export_diagnostics(ctx),
    }
    Task::none()
}

fn export_diagnostics(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.process_pending();
    ctx.diagnostics.log_action(UserAction::ExportDiagnostics);

    let path = default_export_directory().join(generate_default_filename());
    let draft = match ctx.diagnostics.export_to_file(&path) {
        Ok(written) => producers::export_succeeded(ctx.i18n, &written),
        Err(error) => producers::export_failed(ctx.i18n, &error),
    };
    ctx.store.add(draft);
}

/// Periodic tick: fires due auto-hide timers, marks notifications read
/// once they have been on screen long enough, and drains diagnostics.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let removed = ctx.store.tick();
    ctx.diagnostics.handle().log_auto_hidden(removed.len());

    let now = ctx.store.clock().now();
    let visible = visibility::visible_unread(ctx.store, now, ctx.floating_policy, *ctx.center_open);
    for id in ctx.read_tracker.observe(visible, now) {
        ctx.store.mark_read(id);
    }

    ctx.diagnostics.process_pending();
    Task::none()
}

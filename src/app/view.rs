// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current screen sits under a top bar with the notification bell. The
//! floating toast stack and, when open, the notification center panel are
//! stacked on top of it.

use super::{Effect, Message, Screen};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::notification::{floating, FloatingPolicy, Store};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::diagnostics_screen;
use crate::ui::notifications::{self, center, CardContext};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::font::Weight;
use iced::{
    alignment,
    widget::{Column, Container, Row, Stack, Text},
    Element, Font, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme: &'a AppTheme,
    pub theme_mode: ThemeMode,
    pub store: &'a Store<Effect>,
    pub floating_policy: FloatingPolicy,
    pub center_open: bool,
    pub diagnostics: &'a DiagnosticsCollector,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => view_dashboard(&ctx),
        Screen::Diagnostics => view_diagnostics(&ctx),
    };

    let now = ctx.store.clock().now();
    let card_ctx = CardContext::new(ctx.i18n, &ctx.theme.colors, now);

    let base = Column::new()
        .push(view_top_bar(&ctx))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let visible = floating(ctx.store, now, ctx.floating_policy);
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(notifications::floating::view(&visible, &card_ctx).map(Message::Notification));

    if ctx.center_open {
        let panel = center::panel(ctx.store, &card_ctx).map(Message::Notification);
        layers = layers.push(
            Container::new(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding([spacing::XL + spacing::MD, spacing::MD]),
        );
    }

    layers.into()
}

fn view_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let bell = center::bell(ctx.store.unread_count(), &ctx.theme.colors).map(Message::Notification);

    Row::new()
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(bell)
        .into()
}

fn view_dashboard<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    dashboard::view(dashboard::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        total: ctx.store.len(),
        unread: ctx.store.unread_count(),
    })
    .map(Message::Dashboard)
}

fn view_diagnostics<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    diagnostics_screen::view(diagnostics_screen::ViewContext {
        i18n: ctx.i18n,
        colors: &ctx.theme.colors,
        event_count: ctx.diagnostics.len(),
        capacity: ctx.diagnostics.capacity(),
        collection_duration: ctx.diagnostics.collection_duration(),
        events: ctx.diagnostics.iter().collect(),
    })
    .map(Message::Diagnostics)
}

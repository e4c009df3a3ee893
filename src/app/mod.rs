// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the notification store
//! and the screens.
//!
//! The `App` struct owns the store and wires it to localization, theming,
//! diagnostics and persisted preferences. The store is created once here and
//! handed to the views by reference; nothing else holds it.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::TickNeeds;

use crate::application::producers::{self, Gateway};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::notification::{floating, Clock, FloatingPolicy, Store, SystemClock};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::ReadTracker;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// What an action button on a notification does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the booking with this id.
    OpenBooking(String),
    /// Start the payment again through the same gateway.
    RetryPayment(Gateway),
    /// Only close the notification.
    Dismiss,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    app_theme: AppTheme,
    store: Store<Effect>,
    floating_policy: FloatingPolicy,
    read_tracker: ReadTracker,
    center_open: bool,
    diagnostics: DiagnosticsCollector,
    demo_sequence: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.store.len())
            .field("center_open", &self.center_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the
    // first call and later calls fall back to the defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl App {
    /// Default state whose store reads time from `clock`.
    fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut store = Store::with_clock(clock);
        store.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::default(),
            screen: Screen::Dashboard,
            theme_mode: ThemeMode::System,
            app_theme: AppTheme::new(ThemeMode::System),
            store,
            floating_policy: FloatingPolicy::default(),
            read_tracker: ReadTracker::default(),
            center_open: false,
            diagnostics,
            demo_sequence: 0,
        }
    }

    /// Initializes application state from the config file and the `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.app_theme = AppTheme::new(app.theme_mode);
        app.store
            .set_hide_defaults(config.notifications.hide_defaults());
        app.floating_policy = config.notifications.floating_policy();
        app.read_tracker
            .set_read_after(config.notifications.read_delay());

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            let draft = producers::config_warning(&app.i18n, &key);
            app.store.add(draft);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.store.unread_count() {
            0 => app_name,
            unread => format!("({unread}) {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        self.app_theme.iced_theme()
    }

    fn tick_needs(&self) -> TickNeeds {
        let now = self.store.clock().now();
        TickNeeds {
            pending_timers: self.store.has_pending_timers(),
            floating_visible: !floating(&self.store, now, self.floating_policy).is_empty(),
            read_tracking: self.read_tracker.is_tracking(),
            live_view: self.center_open || self.screen == Screen::Diagnostics,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.tick_needs())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            app_theme: &mut self.app_theme,
            store: &mut self.store,
            floating_policy: self.floating_policy,
            read_tracker: &mut self.read_tracker,
            center_open: &mut self.center_open,
            diagnostics: &mut self.diagnostics,
            demo_sequence: &mut self.demo_sequence,
        };

        match message {
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::Diagnostics(diagnostics_message) => {
                update::handle_diagnostics_message(&mut ctx, &diagnostics_message)
            }
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme: &self.app_theme,
            theme_mode: self.theme_mode,
            store: &self.store,
            floating_policy: self.floating_policy,
            center_open: self.center_open,
            diagnostics: &self.diagnostics,
        })
    }
}

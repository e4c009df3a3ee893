// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are stroke-only SVGs embedded at compile time via `include_bytes!`.
//! Handles are cached using `OnceLock`, and callers tint them through the
//! `svg::Style` color, so one asset serves both themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let bell = icons::bell().width(24).height(24);
//! let success = icons::tinted(icons::check_circle(), palette::SUCCESS_500);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the notification context (e.g., `ticket` not `booking`).

use crate::domain::notification::Kind;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Notification Kind Icons
// =============================================================================

define_icon!(
    check_circle,
    "check_circle.svg",
    "Circle with a check mark."
);
define_icon!(x_circle, "x_circle.svg", "Circle with an X.");
define_icon!(
    alert_triangle,
    "alert_triangle.svg",
    "Triangle with an exclamation mark."
);
define_icon!(info, "info.svg", "Circle with a lowercase i.");
define_icon!(ticket, "ticket.svg", "Travel ticket with a perforated stub.");
define_icon!(
    credit_card,
    "credit_card.svg",
    "Card with a magnetic stripe."
);
define_icon!(megaphone, "megaphone.svg", "Megaphone with sound waves.");

// =============================================================================
// Chrome Icons
// =============================================================================

define_icon!(bell, "bell.svg", "Bell, opens the notification center.");
define_icon!(cross, "cross.svg", "X mark, closes a card.");

/// The icon shown on a card for each notification kind.
#[must_use]
pub fn for_kind<'a>(kind: Kind) -> Svg<'a> {
    match kind {
        Kind::Success => check_circle(),
        Kind::Error => x_circle(),
        Kind::Warning => alert_triangle(),
        Kind::Info => info(),
        Kind::Booking => ticket(),
        Kind::Payment => credit_card(),
        Kind::System => megaphone(),
    }
}

/// Applies a fixed tint color to an icon.
#[must_use]
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Sizes an icon to a square of `size` pixels.
#[must_use]
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_an_icon() {
        for kind in Kind::ALL {
            let _ = for_kind(kind);
        }
    }

    #[test]
    fn icon_handles_are_cached() {
        let _ = bell();
        let _ = bell();
        let _ = cross();
    }
}

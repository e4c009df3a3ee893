// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use yatra_notify::domain::notification::{Kind, Priority};
    use yatra_notify::ui::design_tokens::{opacity, palette, sizing, spacing};
    use yatra_notify::ui::styles::{button, container};
    use yatra_notify::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, Status::Active);
        let _ = button::unselected(&theme, Status::Hovered);
        let _ = button::ghost(&theme, Status::Pressed);
        let _ = button::card_action(palette::PAYMENT_500)(&theme, Status::Active);
    }

    #[test]
    fn unread_cards_differ_from_read_cards() {
        let theme = Theme::Light;
        let unread = container::card(&theme, palette::BOOKING_500, true);
        let read = container::card(&theme, palette::BOOKING_500, false);
        assert_ne!(unread.background, read.background);
    }

    #[test]
    fn solid_container_uses_given_color() {
        let style = container::solid(palette::SUCCESS_500)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::SUCCESS_500)));
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::UNREAD_TINT;
        let _ = sizing::TOAST_WIDTH;
        assert!(sizing::CENTER_PANEL_WIDTH > sizing::TOAST_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }

    #[test]
    fn every_kind_and_priority_has_an_accent() {
        let colors = AppTheme::new(ThemeMode::Dark).colors;
        assert_ne!(colors.kind_color(Kind::Error), colors.kind_color(Kind::Success));
        assert_eq!(colors.priority_color(Priority::Urgent), palette::PRIORITY_URGENT);
    }
}

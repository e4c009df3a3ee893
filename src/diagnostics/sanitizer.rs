// SPDX-License-Identifier: MPL-2.0
//! Message sanitization and warning/error type definitions.
//!
//! Notification text can carry customer data (a phone number in a booking
//! confirmation, an e-mail in a payment receipt), so every message that
//! reaches the diagnostics buffer goes through [`sanitize_message`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A payment is stalled or needs attention.
    PaymentIssue,
    /// A booking could not be confirmed as requested.
    BookingIssue,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// A translation could not be loaded.
    LocalizationIssue,
    Other,
}

impl WarningType {
    /// Maps a notification category to a warning type.
    #[must_use]
    pub fn from_category(category: Option<&str>) -> Self {
        match category.map(str::to_ascii_lowercase).as_deref() {
            Some("payment") => WarningType::PaymentIssue,
            Some("booking") => WarningType::BookingIssue,
            Some("config") | Some("settings") => WarningType::ConfigurationIssue,
            Some("i18n") | Some("locale") => WarningType::LocalizationIssue,
            _ => WarningType::Other,
        }
    }
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A payment failed.
    PaymentError,
    /// A booking failed.
    BookingError,
    /// Input/output error (config or export file failures).
    IoError,
    /// Internal application error.
    InternalError,
    Other,
}

impl ErrorType {
    /// Maps a notification category to an error type.
    #[must_use]
    pub fn from_category(category: Option<&str>) -> Self {
        match category.map(str::to_ascii_lowercase).as_deref() {
            Some("payment") => ErrorType::PaymentError,
            Some("booking") => ErrorType::BookingError,
            Some("io") | Some("export") | Some("config") => ErrorType::IoError,
            Some("internal") => ErrorType::InternalError,
            _ => ErrorType::Other,
        }
    }
}

static PATH_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    // Path continues until whitespace or a common delimiter
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|/tmp/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .expect("path regex should compile")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

// Nepali mobile numbers: optional +977 prefix, then 98/97 and eight digits
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+977[-\s]?)?9[78]\d{8}").expect("phone regex should compile")
});

/// Sanitizes a message by removing file paths, e-mail addresses and phone
/// numbers.
///
/// # Examples
///
/// ```
/// use yatra_notify::diagnostics::sanitize_message;
///
/// let msg = "Receipt sent to ram@example.com";
/// assert_eq!(sanitize_message(msg), "Receipt sent to <email>");
///
/// let msg = "Booking BK-42 confirmed";
/// assert_eq!(sanitize_message(msg), "Booking BK-42 confirmed");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_paths = PATH_PATTERNS.replace_all(message, "<path>");
    let without_email = EMAIL_PATTERN.replace_all(&without_paths, "<email>");
    PHONE_PATTERN
        .replace_all(&without_email, "<phone>")
        .into_owned()
}

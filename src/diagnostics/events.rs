// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ErrorType, WarningType};

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Open the notification center panel.
    OpenCenter,
    /// Close the notification center panel.
    CloseCenter,
    /// Dismiss one notification with its close button.
    DismissNotification,
    /// Mark every notification as read.
    MarkAllRead,
    /// Remove every notification.
    ClearAll,
    /// Click an action button on a notification card.
    InvokeAction {
        /// The button label.
        label: String,
    },
    /// Trigger one of the dashboard producers.
    ProduceNotification {
        /// Producer name, e.g. `payment_succeeded`.
        producer: String,
    },
    /// Export the diagnostics report.
    ExportDiagnostics,
}

/// A categorized warning with a sanitized message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A categorized error with a sanitized message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    /// Notifications removed by their auto-hide timer in one tick.
    AutoHidden { count: usize },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::AutoHidden { count: 1 });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::InvokeAction {
                label: "View booking".to_string(),
            },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"invoke_action\""));
        assert!(json.contains("\"label\":\"View booking\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_event_deserializes_from_json() {
        let json = r#"{"type":"error","event":{"error_type":"payment_error","message":"denied"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(
            kind,
            DiagnosticEventKind::Error {
                event: ErrorEvent::new(ErrorType::PaymentError, "denied"),
            }
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events are captured during a session, kept in a memory-bounded circular
//! buffer and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cloneable, non-blocking sender of events
//! - [`DiagnosticsCollector`]: owns the buffer and drains the handles
//! - [`CircularBuffer`]: generic ring buffer with [`BufferCapacity`]
//!
//! # Privacy
//!
//! Messages are run through [`sanitize_message`] before they are stored, so
//! exported reports carry no file paths, e-mail addresses or phone numbers.

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent};
pub use export::{default_export_directory, generate_default_filename, write_atomic};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};

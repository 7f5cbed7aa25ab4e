//! Interaction event logging.
//!
//! UI collaborators record user interactions (views, clicks, analyze
//! actions) as timestamped log lines. The analyzer itself never logs; the
//! collaborator that invoked it does, after the analysis succeeds.
//!
//! Each line has the form
//!
//! ```text
//! <RFC 3339 UTC timestamp>, <kind>, <description>
//! ```
//!
//! for example:
//!
//! ```text
//! 2025-03-14T09:26:53.589Z, analyze, text-analyzer:6 words analyzed
//! ```
//!
//! # Examples
//!
//! ```
//! use lexstat::interaction::{InteractionKind, InteractionLog};
//!
//! let mut log = InteractionLog::new(Vec::new());
//! log.record(InteractionKind::View, "page_loaded").unwrap();
//! log.analyzed(6).unwrap();
//!
//! let lines = String::from_utf8(log.into_sink()).unwrap();
//! assert!(lines.contains("view, page_loaded"));
//! assert!(lines.contains("analyze, text-analyzer:6 words analyzed"));
//! ```

use std::fmt;
use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The kind of user interaction being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// An element or page became visible
    View,
    /// An element was clicked
    Click,
    /// A text analysis was performed
    Analyze,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InteractionKind::View => "view",
            InteractionKind::Click => "click",
            InteractionKind::Analyze => "analyze",
        };
        write!(f, "{s}")
    }
}

/// A single timestamped interaction event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// When the interaction happened
    pub timestamp: DateTime<Utc>,
    /// What kind of interaction it was
    pub kind: InteractionKind,
    /// Free-form description, e.g. `text-analyzer:6 words analyzed`
    pub description: String,
}

impl InteractionEvent {
    /// Create an event stamped with the current time.
    pub fn now<S: Into<String>>(kind: InteractionKind, description: S) -> Self {
        InteractionEvent {
            timestamp: Utc::now(),
            kind,
            description: description.into(),
        }
    }

    /// Render this event as a log line (without trailing newline).
    pub fn log_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.kind,
            self.description
        )
    }
}

/// An interaction log writing events to an arbitrary sink.
///
/// The CLI points this at stderr so log lines never mix with rendered
/// results on stdout.
#[derive(Debug)]
pub struct InteractionLog<W: Write> {
    sink: W,
}

impl<W: Write> InteractionLog<W> {
    /// Create a new log writing to the given sink.
    pub fn new(sink: W) -> Self {
        InteractionLog { sink }
    }

    /// Record an event stamped with the current time.
    pub fn record<S: Into<String>>(&mut self, kind: InteractionKind, description: S) -> Result<()> {
        self.write_event(&InteractionEvent::now(kind, description))
    }

    /// Record a completed analysis of `words` words.
    pub fn analyzed(&mut self, words: usize) -> Result<()> {
        self.record(
            InteractionKind::Analyze,
            format!("text-analyzer:{words} words analyzed"),
        )
    }

    /// Write an already-constructed event.
    pub fn write_event(&mut self, event: &InteractionEvent) -> Result<()> {
        writeln!(self.sink, "{}", event.log_line())?;
        Ok(())
    }

    /// Consume the log and return its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

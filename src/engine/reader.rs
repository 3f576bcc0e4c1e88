// ============================================================================
// Decimal Reader
// Turns a sequence of text lines into certified decimals
// ============================================================================

use crate::domain::{InvalidLinePolicy, ReaderConfig};
use crate::interfaces::{EventHandler, LineSource, ReaderEvent, SourceError};
use crate::numeric::{validate, DecimalString, NumericError};
use std::fmt;
use std::sync::Arc;

/// A line that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub value: DecimalString,
}

/// A line that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub text: String,
    pub error: NumericError,
}

/// Outcome of reading a batch of lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadReport {
    pub accepted: Vec<ParsedLine>,
    pub rejected: Vec<RejectedLine>,
    /// Lines skipped as blank or comment
    pub ignored: usize,
}

impl ReadReport {
    /// Certified values in input order
    pub fn values(&self) -> impl Iterator<Item = &DecimalString> {
        self.accepted.iter().map(|line| &line.value)
    }

    /// Exact sum of every accepted value
    pub fn total(&self) -> DecimalString {
        self.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Errors that stop a read
#[derive(Debug)]
pub enum ReadError {
    /// Reader configuration failed validation
    Config(String),
    /// The line source could not be loaded
    Source(SourceError),
    /// Invalid line under `InvalidLinePolicy::Fail`
    InvalidLine {
        line_number: usize,
        error: NumericError,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Config(reason) => write!(f, "invalid reader configuration: {}", reason),
            ReadError::Source(err) => write!(f, "{}", err),
            ReadError::InvalidLine { line_number, error } => {
                write!(f, "line {}: {}", line_number, error)
            },
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Config(_) => None,
            ReadError::Source(err) => Some(err),
            ReadError::InvalidLine { error, .. } => Some(error),
        }
    }
}

impl From<SourceError> for ReadError {
    fn from(err: SourceError) -> Self {
        ReadError::Source(err)
    }
}

/// Validates lines against the decimal grammar according to a `ReaderConfig`
pub struct DecimalReader {
    config: ReaderConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl DecimalReader {
    /// Create a reader, validating the configuration first
    ///
    /// # Example
    /// ```
    /// use text_decimal::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let reader = DecimalReader::new(ReaderConfig::lenient(), Arc::new(NoOpEventHandler)).unwrap();
    /// let report = reader.read(["1.5", "# note", "2.5"]).unwrap();
    /// assert_eq!(report.total().as_str(), "4");
    /// ```
    pub fn new(
        config: ReaderConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, ReadError> {
        config.validate().map_err(ReadError::Config)?;
        Ok(Self {
            config,
            event_handler,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Load every line from `source` and read them
    pub fn read_source(&self, source: &dyn LineSource) -> Result<ReadReport, ReadError> {
        tracing::debug!(source = %source.describe(), "Reading decimals");
        let lines = source.lines()?;
        self.read(lines)
    }

    /// Validate each line in order
    ///
    /// # Errors
    /// `InvalidLine` for the first invalid line under `InvalidLinePolicy::Fail`.
    pub fn read<I, S>(&self, lines: I) -> Result<ReadReport, ReadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ReadReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let raw = line.as_ref();
            let text = if self.config.trim_whitespace {
                raw.trim()
            } else {
                raw
            };

            if self.is_ignored(text) {
                report.ignored += 1;
                self.event_handler
                    .on_event(ReaderEvent::LineIgnored { line_number });
                continue;
            }

            match validate(text) {
                Ok(()) => {
                    let value = DecimalString::from_certified(text.to_string());
                    report.accepted.push(ParsedLine {
                        line_number,
                        value: value.clone(),
                    });
                    self.event_handler
                        .on_event(ReaderEvent::LineAccepted { line_number, value });
                },
                Err(error) => {
                    self.event_handler
                        .on_event(ReaderEvent::LineRejected { line_number, error });
                    if self.config.invalid_line_policy == InvalidLinePolicy::Fail {
                        return Err(ReadError::InvalidLine { line_number, error });
                    }
                    report.rejected.push(RejectedLine {
                        line_number,
                        text: raw.to_string(),
                        error,
                    });
                },
            }
        }

        tracing::trace!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            ignored = report.ignored,
            "Read complete"
        );
        Ok(report)
    }

    fn is_ignored(&self, text: &str) -> bool {
        if self.config.skip_blank_lines && text.is_empty() {
            return true;
        }
        match &self.config.comment_prefix {
            Some(prefix) => text.starts_with(prefix.as_str()),
            None => false,
        }
    }
}

//! Collects error and warning messages during a run so they can be saved next to its output.

use std::fmt::Display;
use std::sync::Arc;

use arrow_array::StringArray;
use log::error;

use crate::error::{PathError, Result};
use crate::storage::SlotStore;

/// Default slot name under which messages are saved.
pub const EXECUTION_ERRORS: &str = "ExecutionErrors";

/// Messages accumulated over one run, each prefixed by the function or program that raised it.
///
/// Pass the log to whatever code may report problems, then call [`ExecutionLog::save`] with the
/// output store before finishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    context: String,
    messages: Vec<String>,
}

impl ExecutionLog {
    /// `context` identifies messages recorded without an explicit function name, typically the
    /// program name.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            messages: Vec::new(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Record `msg`, attributed to `fcn` or to the log's context when `fcn` is `None`.
    ///
    /// The message is also emitted through [`log::error!`].
    pub fn error(&mut self, fcn: Option<&str>, msg: impl Display) {
        let message = format!("{}: {msg}", fcn.unwrap_or(self.context.as_str()));
        error!("{message}");
        self.messages.push(message);
    }

    /// Warnings are recorded exactly like errors.
    pub fn warning(&mut self, fcn: Option<&str>, msg: impl Display) {
        self.error(fcn, msg)
    }

    pub fn record(&mut self, fcn: Option<&str>, err: &PathError) {
        self.error(fcn, err)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Write the accumulated messages as a string array under `name`, or [`EXECUTION_ERRORS`]
    /// when `name` is `None`. Nothing is written if no message was recorded.
    pub fn save<S: SlotStore + ?Sized>(&self, store: &mut S, name: Option<&str>) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let array = StringArray::from(self.messages.clone());
        store.write(name.unwrap_or(EXECUTION_ERRORS), Arc::new(array))
    }
}

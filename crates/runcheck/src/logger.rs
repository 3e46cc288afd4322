//! Warning sink
//!
//! When a check substitutes a default for a rejected value it may report the
//! substitution through a [`Logger`]. The default sink forwards to
//! `tracing`; hosts install their own with
//! [`ValidationContext::set_logger`](crate::context::ValidationContext::set_logger)
//! or the process-wide [`set_logger`](crate::global::set_logger).

use std::fmt;

use crate::value::Value;

/// Receives warnings emitted by checks.
pub trait Logger: Send + Sync {
    /// Reports a warning. `context` holds related values, such as the default
    /// that was substituted.
    fn warn(&self, message: &str, context: &[Value]);
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}

/// Logger that forwards warnings to `tracing` under the `runcheck` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str, context: &[Value]) {
        if context.is_empty() {
            tracing::warn!(target: "runcheck", "{message}");
        } else {
            let context = render_context(context);
            tracing::warn!(target: "runcheck", context = %context, "{message}");
        }
    }
}

/// Joins context values the way they print, e.g. `0, a,b`.
fn render_context(context: &[Value]) -> String {
    context
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Logger that drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn warn(&self, _message: &str, _context: &[Value]) {}
}

impl<F> Logger for F
where
    F: Fn(&str, &[Value]) + Send + Sync,
{
    fn warn(&self, message: &str, context: &[Value]) {
        self(message, context);
    }
}

//! Sink trait for remote delivery targets

use super::error::Result;

/// A delivery target for one pre-encoded payload
///
/// Implementations report failure through the returned `Result`; the
/// dispatcher absorbs it at the boundary of the dispatch unit and writes a
/// local notice, so nothing reaches the log caller.
///
/// # Example
///
/// ```
/// use rust_fanout_logger::core::{Result, Sink};
///
/// struct StderrSink;
///
/// impl Sink for StderrSink {
///     fn send(&self, payload: &str) -> Result<()> {
///         eprintln!("{}", payload);
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "stderr"
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    fn send(&self, payload: &str) -> Result<()>;
    fn name(&self) -> &str;
}

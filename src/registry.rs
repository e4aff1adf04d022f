//! Process-wide active logger and the free-function entry points
//!
//! The registry is the single injection point for code that logs through
//! the free functions or macros. Set it once at startup, either with
//! [`init`] or [`set_logger`], before other threads start logging. Reads
//! and swaps are memory safe, but a swap racing with in-flight calls may
//! route those calls to either instance.
//!
//! Until something is installed, calls go to a local-only console logger.

use crate::backends::ConsoleBackend;
use crate::core::{
    Backend, CallerContext, DispatchConfig, Dispatcher, FanoutLogger, Level, Logger, LoggerExt,
    Result,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static ACTIVE: RwLock<Option<Arc<dyn Logger>>> = parking_lot::const_rwlock(None);

/// Install `config` as the process-wide dispatch configuration
///
/// Builds HTTP sinks for the configured endpoints and installs a
/// [`FanoutLogger`] over a console backend.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built
///
/// # Example
///
/// ```no_run
/// use rust_fanout_logger::DispatchConfig;
///
/// rust_fanout_logger::init(DispatchConfig::new(
///     "https://chat.example/hook?",
///     "orders",
///     "https://ch.example/insert",
///     "prod",
/// ))
/// .expect("HTTP client");
///
/// rust_fanout_logger::error!("bad", "-input");
/// ```
pub fn init(config: DispatchConfig) -> Result<()> {
    let backend = Arc::new(ConsoleBackend::new());
    let dispatcher = Dispatcher::new(config, Arc::clone(&backend) as Arc<dyn Backend>)?;
    set_logger(Arc::new(FanoutLogger::with_dispatcher(backend, dispatcher)));
    Ok(())
}

/// Replace the active logger
pub fn set_logger(logger: Arc<dyn Logger>) {
    *ACTIVE.write() = Some(logger);
}

/// The active logger
pub fn logger() -> Arc<dyn Logger> {
    if let Some(active) = ACTIVE.read().as_ref() {
        return Arc::clone(active);
    }

    let mut slot = ACTIVE.write();
    let active = slot.get_or_insert_with(|| Arc::new(FanoutLogger::default()) as Arc<dyn Logger>);
    Arc::clone(active)
}

pub fn log(level: Level, message: String, caller: Option<CallerContext>) {
    logger().log(level, message, caller);
}

#[track_caller]
pub fn debug(args: &[&dyn fmt::Display]) {
    logger().debug(args);
}

#[track_caller]
pub fn info(args: &[&dyn fmt::Display]) {
    logger().info(args);
}

#[track_caller]
pub fn error(args: &[&dyn fmt::Display]) {
    logger().error(args);
}

#[track_caller]
pub fn fatal(args: &[&dyn fmt::Display]) {
    logger().fatal(args);
}

#[track_caller]
pub fn panic(args: &[&dyn fmt::Display]) {
    logger().panic(args);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    logger().debugf(args);
}

pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

pub fn printf(args: fmt::Arguments<'_>) {
    logger().printf(args);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    logger().fatalf(args);
}

pub fn panicf(args: fmt::Arguments<'_>) {
    logger().panicf(args);
}

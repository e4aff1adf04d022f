//! Local logging capability consumed by the facade

use super::level::Level;

/// Level-keyed local output
///
/// The facade never formats, buffers or persists local output itself; it
/// hands the finished message to a `Backend`. Termination for FATAL and
/// PANIC is also the backend's call so tests can observe those levels
/// without ending the process.
pub trait Backend: Send + Sync {
    fn write(&self, level: Level, message: &str);

    /// Invoked after the local write of a terminal level
    ///
    /// FATAL exits the process with status 1, PANIC unwinds with the message.
    fn terminate(&self, level: Level, message: &str) {
        match level {
            Level::Fatal => std::process::exit(1),
            Level::Panic => panic!("{}", message),
            _ => {}
        }
    }
}

//! Call-site capture for forwarded events

use std::fmt;
use std::panic::Location;

/// The source location that issued a log call
///
/// Captured eagerly at the entry point, before any dispatch is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    pub module_path: Option<&'static str>,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallerContext {
    pub const fn new(
        module_path: Option<&'static str>,
        file: &'static str,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            module_path,
            file,
            line,
            column,
        }
    }

    /// Capture the location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'static>) -> Self {
        Self::new(None, location.file(), location.line(), location.column())
    }

    #[must_use]
    pub fn with_module_path(mut self, module_path: &'static str) -> Self {
        self.module_path = Some(module_path);
        self
    }
}

impl fmt::Display for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.module_path {
            Some(module) => write!(f, "{} {}:{}:{}", module, self.file, self.line, self.column),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

/// Capture the current call site including the module path
#[macro_export]
macro_rules! caller {
    () => {
        $crate::CallerContext::new(
            ::std::option::Option::Some(::std::module_path!()),
            ::std::file!(),
            ::std::line!(),
            ::std::column!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn through_tracked() -> CallerContext {
        CallerContext::capture()
    }

    #[test]
    fn test_capture_points_at_caller() {
        let expected_line = line!() + 1;
        let ctx = through_tracked();
        assert_eq!(ctx.line, expected_line);
        assert!(ctx.file.ends_with("caller.rs"));
        assert_eq!(ctx.module_path, None);
    }

    #[test]
    fn test_macro_includes_module_path() {
        let ctx = crate::caller!();
        assert_eq!(ctx.module_path, Some(module_path!()));
        assert!(ctx.to_string().starts_with(module_path!()));
    }

    #[test]
    fn test_display() {
        let ctx = CallerContext::new(None, "src/orders.rs", 12, 5);
        assert_eq!(ctx.to_string(), "src/orders.rs:12:5");

        let ctx = ctx.with_module_path("orders::checkout");
        assert_eq!(ctx.to_string(), "orders::checkout src/orders.rs:12:5");
    }
}

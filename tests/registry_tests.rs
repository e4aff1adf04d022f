//! Tests for the process-wide logger registry
//!
//! The registry is global, so every test holds `SERIAL` while it runs.

use parking_lot::Mutex;
use rust_fanout_logger::prelude::*;
use rust_fanout_logger::{
    debug, debugf, error, errorf, fatal, fatalf, info, infof, panic_log, panicf, printf,
};
use std::sync::Arc;

static SERIAL: Mutex<()> = parking_lot::const_mutex(());

type Record = (Level, String, Option<CallerContext>);

#[derive(Default)]
struct RecordingLogger {
    records: Mutex<Vec<Record>>,
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: String, caller: Option<CallerContext>) {
        self.records.lock().push((level, message, caller));
    }
}

fn install() -> Arc<RecordingLogger> {
    let logger = Arc::new(RecordingLogger::default());
    rust_fanout_logger::set_logger(Arc::clone(&logger) as Arc<dyn Logger>);
    logger
}

#[test]
fn test_swap_routes_subsequent_calls() {
    let _guard = SERIAL.lock();

    let first = install();
    rust_fanout_logger::error(&[&"to ", &"first"]);
    error!("also ", "first");

    let second = install();
    info!("to second");
    rust_fanout_logger::infof(format_args!("{} second", "also"));
    rust_fanout_logger::fatal(&[&"fatal to second"]);

    let first = first.records.lock();
    let second = second.records.lock();

    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|(level, _, _)| *level == Level::Error));
    assert_eq!(first[0].1, "to first");
    assert_eq!(first[1].1, "also first");

    let levels: Vec<Level> = second.iter().map(|(level, _, _)| *level).collect();
    assert_eq!(levels, vec![Level::Info, Level::Info, Level::Fatal]);
}

#[test]
fn test_free_functions_capture_call_site() {
    let _guard = SERIAL.lock();
    let recorder = install();

    let line = line!() + 1;
    rust_fanout_logger::debug(&[&"here"]);

    let records = recorder.records.lock();
    let caller = records[0].2.expect("plain call captures the caller");
    assert!(caller.file.ends_with("registry_tests.rs"));
    assert_eq!(caller.line, line);
    assert_eq!(caller.module_path, None);
}

#[test]
fn test_macros_capture_module_path() {
    let _guard = SERIAL.lock();
    let recorder = install();

    error!("code ", 500);

    let records = recorder.records.lock();
    let caller = records[0].2.expect("plain macro captures the caller");
    assert_eq!(caller.module_path, Some(module_path!()));
    assert_eq!(records[0].1, "code 500");
}

#[test]
fn test_every_macro_reaches_the_active_logger() {
    let _guard = SERIAL.lock();
    let recorder = install();

    debug!("d", 1);
    info!("i", 2);
    error!("e", 3);
    fatal!("f", 4);
    panic_log!("p", 5);
    debugf!("d{}", 1);
    infof!("i{}", 2);
    printf!("i{}", 2);
    errorf!("e{}", 3);
    fatalf!("f{}", 4);
    panicf!("p{}", 5);

    let records = recorder.records.lock();
    let summary: Vec<(Level, &str, bool)> = records
        .iter()
        .map(|(level, message, caller)| (*level, message.as_str(), caller.is_some()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Level::Debug, "d1", true),
            (Level::Info, "i2", true),
            (Level::Error, "e3", true),
            (Level::Fatal, "f4", true),
            (Level::Panic, "p5", true),
            (Level::Debug, "d1", false),
            (Level::Info, "i2", false),
            (Level::Info, "i2", false),
            (Level::Error, "e3", false),
            (Level::Fatal, "f4", false),
            (Level::Panic, "p5", false),
        ]
    );
}

#[test]
fn test_formatted_calls_carry_no_caller() {
    let _guard = SERIAL.lock();
    let recorder = install();

    debugf!("{} items", 3);
    printf!("{}", "printed");
    errorf!("code {}", 500);
    rust_fanout_logger::panicf(format_args!("halt"));

    let records = recorder.records.lock();
    let summary: Vec<(Level, &str)> = records
        .iter()
        .map(|(level, message, _)| (*level, message.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Level::Debug, "3 items"),
            (Level::Info, "printed"),
            (Level::Error, "code 500"),
            (Level::Panic, "halt"),
        ]
    );
    assert!(records.iter().all(|(_, _, caller)| caller.is_none()));
}

#[test]
fn test_init_installs_a_fanout_logger() {
    let _guard = SERIAL.lock();
    let recorder = install();

    let config = DispatchConfig::new(
        "http://127.0.0.1:9/hook?",
        "orders",
        "http://127.0.0.1:9/insert",
        "test",
    )
    .with_request_timeout(std::time::Duration::from_millis(200));
    rust_fanout_logger::init(config).expect("init succeeds");

    rust_fanout_logger::debug(&[&"after init"]);

    assert!(recorder.records.lock().is_empty());
    assert!(!Arc::ptr_eq(
        &rust_fanout_logger::logger(),
        &(Arc::clone(&recorder) as Arc<dyn Logger>)
    ));
}

#[tokio::test]
async fn test_init_inside_async_runtime() {
    let _guard = SERIAL.lock();
    let recorder = install();

    let config = DispatchConfig::new(
        "http://127.0.0.1:9/hook?",
        "orders",
        "http://127.0.0.1:9/insert",
        "test",
    )
    .with_request_timeout(std::time::Duration::from_millis(200));

    assert!(rust_fanout_logger::init(config).is_ok());
    rust_fanout_logger::error(&[&"from a runtime worker"]);

    assert!(recorder.records.lock().is_empty());
}

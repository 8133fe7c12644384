//! Integration tests for Engine logging system
//!
//! These tests verify that client components log through the engine
//! facade. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use lumen_client::lumen::Engine;
use lumen_client::lumen::log::{Logger, LogEntry, LogSeverity, MemoryLogger};
use lumen_client::lumen::scene::{Scene, World};
use lumen_client::lumen::SceneConfig;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("test_file.rs"));
    assert_eq!(captured[0].line, Some(42));
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());

    // Still only one message
    assert_eq!(entries.lock().unwrap().len(), 1);
}

// ============================================================================
// COMPONENT LOGGING
// ============================================================================

#[test]
#[serial]
fn test_integration_scene_lifecycle_logs() {
    let logger = MemoryLogger::with_min_severity(LogSeverity::Info);
    Engine::set_logger(logger.clone());

    let mut scene = Scene::new(SceneConfig::default(), World::flat(1));
    scene.cleanup();

    let messages = logger.messages_from("lumen::Scene");
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("9 chunk(s)"));
    assert!(messages[1].contains("cleaned up"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_threshold_drops_component_logs() {
    let logger = MemoryLogger::new();
    Engine::set_logger(logger.clone());
    Engine::set_min_severity(LogSeverity::Error);

    let mut scene = Scene::new(SceneConfig::default(), World::new());
    scene.cleanup();

    assert!(logger.messages_from("lumen::Scene").is_empty());

    Engine::reset_logger();
}

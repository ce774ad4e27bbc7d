//! Captures `log` records emitted by the current thread, for assertions in tests.

use log::{LevelFilter, Log, Metadata, Record};
use std::cell::{Cell, RefCell};

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LOG_BUFFER: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        CAPTURING.with(Cell::get)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("[{}] {}", record.level(), record.args());
        LOG_BUFFER.with(|buffer| buffer.borrow_mut().push(message));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Runs `f` and returns every record it logged on this thread, formatted as
/// `[LEVEL] message`.
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<String> {
    // Fails after the first call; the installed logger is the same one.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    LOG_BUFFER.with(|buffer| buffer.borrow_mut().clear());
    CAPTURING.with(|capturing| capturing.set(true));
    f();
    CAPTURING.with(|capturing| capturing.set(false));
    LOG_BUFFER.with(|buffer| buffer.borrow_mut().split_off(0))
}

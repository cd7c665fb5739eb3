//! Test support: a process-wide logger that counts warnings per thread.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::Cell;
use std::sync::Once;

thread_local! {
    static WARNINGS: Cell<usize> = const { Cell::new(0) };
}

struct WarningCounter;

impl Log for WarningCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: WarningCounter = WarningCounter;
static INIT: Once = Once::new();

/// Number of warnings logged on the current thread while `f` runs.
pub(crate) fn count_warnings(f: impl FnOnce()) -> usize {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });
    let before = WARNINGS.with(Cell::get);
    f();
    WARNINGS.with(Cell::get) - before
}

use log::{LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Writes records to the browser console on wasm32 and to stderr elsewhere.
pub struct ConsoleLogger;

/// Installs [`ConsoleLogger`] and sets the maximum level.
///
/// Only the first call installs the logger; later calls return the error from
/// `log::set_logger` and leave the level untouched.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

pub fn format_record(record: &Record) -> String {
    format!(
        "[{}] {}: {}",
        record.level(),
        record.target(),
        record.args()
    )
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            emit(record.level(), &format_record(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: log::Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);

    match level {
        log::Level::Error => web_sys::console::error_1(&value),
        log::Level::Warn => web_sys::console::warn_1(&value),
        log::Level::Info => web_sys::console::info_1(&value),
        log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: log::Level, line: &str) {
    eprintln!("{}", line);
}

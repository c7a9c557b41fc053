//! Console Logging
//!
//! `log` backend that writes to the browser console, one `[TAG] message` per line.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{} {}", tag(record.target()), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Debug builds log everything down to `debug`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `portfolio_content::loader` -> `[LOADER]`
fn tag(target: &str) -> String {
    let last = target.rsplit("::").next().unwrap_or(target);
    format!("[{}]", last.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_uses_last_segment() {
        assert_eq!(tag("portfolio_content::loader"), "[LOADER]");
        assert_eq!(tag("portfolio_ui::components::works"), "[WORKS]");
        assert_eq!(tag("portfolio_ui"), "[PORTFOLIO_UI]");
    }
}

// src/app/console_logger.rs
//! `log` クレートのマクロ (`info!` とか) の出力をブラウザの console に流すロガーだよ。
//!
//! ネイティブのテストでは `init` を呼ばないので、ログは何も出ないよ。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

#[cfg(debug_assertions)]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Info;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// ロガーを登録する。2回目以降は `SetLoggerError` が返るよ。
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(MAX_LOG_LEVEL);
    Ok(())
}

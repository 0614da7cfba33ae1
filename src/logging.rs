//! Logger installation.
//!
//! The browser gets a `log` sink writing to the devtools console; native
//! builds (tests, headless drivers) use `env_logger`. Both start from
//! [`LOG_LEVEL`](crate::LOG_LEVEL) and are safe to call more than once.
use std::str::FromStr;

fn level() -> log::LevelFilter {
    log::LevelFilter::from_str(crate::LOG_LEVEL).unwrap_or(log::LevelFilter::Info)
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    static CONSOLE: Console = Console;
    if log::set_logger(&CONSOLE).is_ok() {
        log::set_max_level(level());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = env_logger::Builder::new()
        .filter_level(level())
        .parse_default_env()
        .is_test(cfg!(test))
        .try_init();
}

/// Forwards records to `console.{error,warn,info,debug}`.
#[cfg(target_arch = "wasm32")]
struct Console;

#[cfg(target_arch = "wasm32")]
impl log::Log for Console {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ref line = wasm_bindgen::JsValue::from_str(&format!(
            "{:<5} {:<24} {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(line),
            log::Level::Warn => web_sys::console::warn_1(line),
            log::Level::Info => web_sys::console::info_1(line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(line),
        }
    }
    fn flush(&self) {}
}

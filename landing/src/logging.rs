//! Logging setup.
//!
//! One `tracing-subscriber` fmt subscriber for the whole page. On wasm each
//! event becomes one browser console call at the matching console level;
//! natively (tests, prerender) events go to stderr.

use std::io;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

static INIT: Once = Once::new();

/// DEBUG in debug builds, INFO otherwise.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

pub fn init() {
    init_with_level(default_level());
}

/// Installs the global subscriber. Later calls do nothing.
pub fn init_with_level(level: Level) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(ConsoleWriter)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            emit(Level::WARN, "a global tracing subscriber was already installed");
        }
    });
}

/// `MakeWriter` that hands each formatted event to the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

/// Buffers one event; the line is emitted on drop.
#[derive(Debug)]
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            emit(self.level, &self.text());
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn line_buffers_until_dropped() {
        let mut line = ConsoleWriter.make_writer();
        write!(line, "hello ").unwrap();
        write!(line, "world\n").unwrap();
        assert_eq!(line.text(), "hello world");
    }

    #[test]
    #[serial]
    fn init_is_idempotent() {
        init();
        init_with_level(Level::TRACE);
        tracing::info!("logging initialised twice without panicking");
    }
}

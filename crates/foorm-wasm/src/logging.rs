// File: foorm-wasm/src/logging.rs
// Purpose: Route tracing output to the browser console

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and emits it on drop with the console method
/// matching its level
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(line.trim_end());

        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Installs the console subscriber. Returns false if a global subscriber was
/// already set.
pub fn init(level: Level) -> bool {
    // No clock on wasm32-unknown-unknown, so timestamps are off
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

/// Parses `error`, `warn`, `info`, `debug` or `trace`, ignoring case
pub fn parse_level(level: &str) -> anyhow::Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", level))
}

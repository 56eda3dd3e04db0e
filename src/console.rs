// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::ConsoleSink;

/**
The default console sink.  Writes each line to stdout, or to the browser console on wasm32.
 */
#[derive(Debug, Clone)]
pub struct StdoutConsole {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone: derived
// - Copy: implemented, zero-sized
// - PartialEq/Eq/Hash: all instances are equivalent
// - Default: zero-argument constructor
// - Display: NOT implemented, no meaningful representation

impl Copy for StdoutConsole {}

impl PartialEq for StdoutConsole {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdoutConsole {}

impl std::hash::Hash for StdoutConsole {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutConsole {
    pub const fn new() -> Self {
        Self {}
    }
}

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            // a closed stdout must not take the application down
            let _ = lock
                .write_all(line.as_bytes())
                .and_then(|_| lock.write_all(b"\n"));
        }
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&wasm_bindgen::JsValue::from(line));
        }
    }

    fn flush(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stdout().lock().flush();
        }
    }
}

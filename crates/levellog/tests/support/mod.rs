//! Shared helpers for levellog integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use levellog::{Destination, Flags, Level, Logger};

/// In-memory writer whose contents can be read back after logging.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf-8")
    }

    pub fn destination(&self) -> Destination {
        Destination::new(self.clone())
    }

    pub fn clear(&self) {
        self.0.lock().expect("capture lock").clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds a logger over a fresh capture.
pub fn captured(prefix: &str, flags: Flags, level: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::with_level(capture.destination(), prefix, flags, level);
    (logger, capture)
}

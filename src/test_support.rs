use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::digest::{text_hash, DigestHash};

/// Digest stub with pinned outputs: looks the input up in a table and
/// falls back to a constant.
#[derive(Debug, Clone)]
pub struct FixedDigest {
    table: HashMap<Vec<u8>, i32>,
    fallback: i32,
}

impl FixedDigest {
    pub fn new(fallback: i32) -> Self {
        FixedDigest {
            table: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, input: &str, value: i32) -> Self {
        self.table.insert(input.as_bytes().to_vec(), value);
        self
    }
}

impl DigestHash for FixedDigest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        self.table.get(bytes).copied().unwrap_or(self.fallback)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Folds the input bytes directly, with no digest in front. Builds
/// without any backend feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextHashDigest;

impl DigestHash for TextHashDigest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        text_hash(bytes)
    }

    fn name(&self) -> &str {
        "text"
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a scoped TRACE subscriber and returns its result together
/// with everything that was logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();

    (result, logs)
}

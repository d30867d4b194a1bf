//! In-memory output stream.
//!
//! Clones share one buffer, so a clone can be handed to a logger while the
//! original is kept to read back what was written.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Written lines parsed as JSON. Lines that are not JSON are skipped.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"{\"a\":1}\nnot json\n").unwrap();

        assert_eq!(sink.lines().len(), 2);
        assert_eq!(sink.records(), vec![serde_json::json!({"a": 1})]);

        sink.clear();
        assert!(writer.clone().is_empty());
    }
}

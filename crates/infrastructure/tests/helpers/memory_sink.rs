#![allow(dead_code)]
use ferrous_rdns_application::ports::ResultSink;
use ferrous_rdns_domain::DomainError;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn sorted_lines(&self) -> Vec<String> {
        let mut lines = self.lines();
        lines.sort();
        lines
    }
}

impl ResultSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), DomainError> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

use ferrous_rdns_application::ports::ResultSink;
use ferrous_rdns_domain::DomainError;
use std::io::Write;

/// Writes result lines to standard output.
///
/// The stdout lock is held for the whole line, so concurrent writers never
/// tear each other's output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), DomainError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)
            .map_err(|e| DomainError::IoError(format!("Failed to write result: {}", e)))
    }
}

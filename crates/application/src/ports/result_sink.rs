use ferrous_rdns_domain::DomainError;

/// Line-oriented output shared by all workers.
///
/// Each call must write the whole line or nothing; lines from different
/// callers may interleave in any order.
pub trait ResultSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), DomainError>;
}

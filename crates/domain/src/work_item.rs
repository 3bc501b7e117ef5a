use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use crate::DomainError;

/// One input address awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    raw: Arc<str>,
}

impl WorkItem {
    /// Builds a work item from an input line. Returns `None` for blank lines.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.into(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn ip(&self) -> Result<IpAddr, DomainError> {
        self.raw
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.raw.to_string()))
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(WorkItem::from_line("").is_none());
        assert!(WorkItem::from_line("   \t").is_none());
    }

    #[test]
    fn test_line_is_trimmed() {
        let item = WorkItem::from_line("  192.0.2.5\r").unwrap();
        assert_eq!(item.as_str(), "192.0.2.5");
        assert_eq!(item.ip().unwrap().to_string(), "192.0.2.5");
    }

    #[test]
    fn test_non_ip_line_fails_to_parse() {
        let item = WorkItem::from_line("not-an-ip").unwrap();
        assert!(matches!(item.ip(), Err(DomainError::InvalidIpAddress(_))));
    }
}

use std::fmt;
use std::io::{BufRead, BufReader};
use std::net::Ipv6Addr;
use std::path::Path;
use std::sync::Arc;

use crate::DomainError;

/// `host:port` of a DNS server. Not validated: a malformed endpoint simply
/// fails to connect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolverEndpoint(Arc<str>);

impl ResolverEndpoint {
    pub fn new(addr: impl Into<Arc<str>>) -> Self {
        Self(addr.into())
    }

    /// Joins a host and port, bracketing bare IPv6 literals.
    pub fn from_host_port(host: &str, port: u16) -> Self {
        if host.parse::<Ipv6Addr>().is_ok() {
            Self::new(format!("[{}]:{}", host, port))
        } else {
            Self::new(format!("{}:{}", host, port))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of resolver endpoints, immutable once the pipeline starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverSet {
    endpoints: Vec<ResolverEndpoint>,
}

impl ResolverSet {
    pub fn new(endpoints: Vec<ResolverEndpoint>) -> Self {
        Self { endpoints }
    }

    /// Builds the set from an optional single endpoint followed by the
    /// entries of an optional resolvers file.
    pub fn build(single: Option<&str>, file: Option<&Path>) -> Result<Self, DomainError> {
        let mut set = Self::with_single(single);
        if let Some(path) = file {
            set.extend_from_file(path)?;
        }
        Ok(set)
    }

    pub fn with_single(single: Option<&str>) -> Self {
        let endpoints = single
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ResolverEndpoint::new)
            .into_iter()
            .collect();
        Self { endpoints }
    }

    /// Appends every non-blank, trimmed line of `path`. Nothing is appended
    /// if the file cannot be opened or read to the end.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, DomainError> {
        let file = std::fs::File::open(path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to open resolvers file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut loaded = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to read resolvers file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                loaded.push(ResolverEndpoint::new(trimmed));
            }
        }

        let count = loaded.len();
        self.endpoints.extend(loaded);
        Ok(count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolverEndpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolverSet {
    type Item = &'a ResolverEndpoint;
    type IntoIter = std::slice::Iter<'a, ResolverEndpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}

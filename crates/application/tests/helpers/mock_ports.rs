#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_rdns_application::ports::{ResultSink, ReverseLookup};
use ferrous_rdns_domain::{DomainError, ResolverEndpoint};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, RwLock};
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
enum StubBehavior {
    Fail(DomainError),
    Hang,
}

/// Deterministic stand-in for network PTR lookups.
///
/// Answers are keyed by `(endpoint, ip)`; unknown pairs yield an empty
/// answer. Endpoints can be marked as always failing or as hanging until
/// the lookup is cancelled.
#[derive(Clone, Default)]
pub struct MockReverseLookup {
    answers: Arc<RwLock<HashMap<(String, IpAddr), Vec<String>>>>,
    endpoints: Arc<RwLock<HashMap<String, StubBehavior>>>,
    calls: Arc<Mutex<Vec<(String, IpAddr)>>>,
}

impl MockReverseLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, endpoint: &str, ip: &str, hostnames: &[&str]) {
        self.answers.write().unwrap().insert(
            (endpoint.to_string(), ip.parse().unwrap()),
            hostnames.iter().map(|h| h.to_string()).collect(),
        );
    }

    pub fn set_failing(&self, endpoint: &str, error: DomainError) {
        self.endpoints
            .write()
            .unwrap()
            .insert(endpoint.to_string(), StubBehavior::Fail(error));
    }

    pub fn set_hanging(&self, endpoint: &str) {
        self.endpoints
            .write()
            .unwrap()
            .insert(endpoint.to_string(), StubBehavior::Hang);
    }

    pub fn calls(&self) -> Vec<(String, IpAddr)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ReverseLookup for MockReverseLookup {
    async fn lookup(
        &self,
        ip: IpAddr,
        endpoint: &ResolverEndpoint,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.as_str().to_string(), ip));

        let behavior = self.endpoints.read().unwrap().get(endpoint.as_str()).cloned();
        match behavior {
            Some(StubBehavior::Fail(error)) => return Err(error),
            Some(StubBehavior::Hang) => {
                cancel.cancelled().await;
                return Err(DomainError::Cancelled);
            }
            None => {}
        }

        // Yield so concurrent workers actually interleave.
        tokio::task::yield_now().await;

        Ok(self
            .answers
            .read()
            .unwrap()
            .get(&(endpoint.as_str().to_string(), ip))
            .cloned()
            .unwrap_or_default())
    }
}

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

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use vetted_dns_application::ports::{
    CandidateSource, ResolverList, ResolverListSink, ResolverListSource,
};
use vetted_dns_domain::{DomainError, RawCandidate};

#[derive(Clone)]
pub struct MockCandidateSource {
    records: Arc<Mutex<Vec<RawCandidate>>>,
    error: Arc<Mutex<Option<DomainError>>>,
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Every address with reliability 1.0.
    pub fn with_reliable(addresses: &[&str]) -> Self {
        let source = Self::new();
        *source.records.lock().unwrap() = addresses
            .iter()
            .map(|ip| RawCandidate::new(*ip, "1.0"))
            .collect();
        source
    }

    pub fn with_records(records: Vec<RawCandidate>) -> Self {
        let source = Self::new();
        *source.records.lock().unwrap() = records;
        source
    }

    pub fn failing(error: DomainError) -> Self {
        let source = Self::new();
        *source.error.lock().unwrap() = Some(error);
        source
    }
}

impl Default for MockCandidateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    async fn fetch(&self) -> Result<Vec<RawCandidate>, DomainError> {
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// In-memory list store serving as both sink and source.
#[derive(Clone, Default)]
pub struct MockListStore {
    lists: Arc<Mutex<HashMap<ResolverList, BTreeSet<Ipv4Addr>>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MockListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, list: ResolverList, addresses: &[&str]) -> Self {
        self.lists.lock().unwrap().insert(
            list,
            addresses.iter().map(|ip| ip.parse().unwrap()).collect(),
        );
        self
    }

    pub fn failing_writes(self) -> Self {
        *self.fail_writes.lock().unwrap() = true;
        self
    }

    pub fn get(&self, list: ResolverList) -> Option<BTreeSet<Ipv4Addr>> {
        self.lists.lock().unwrap().get(&list).cloned()
    }

    pub fn get_strings(&self, list: ResolverList) -> Option<Vec<String>> {
        self.get(list)
            .map(|set| set.iter().map(|ip| ip.to_string()).collect())
    }
}

#[async_trait]
impl ResolverListSink for MockListStore {
    async fn write(
        &self,
        list: ResolverList,
        addresses: &BTreeSet<Ipv4Addr>,
    ) -> Result<(), DomainError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.lists.lock().unwrap().insert(list, addresses.clone());
        Ok(())
    }
}

#[async_trait]
impl ResolverListSource for MockListStore {
    async fn read(&self, list: ResolverList) -> Result<BTreeSet<Ipv4Addr>, DomainError> {
        self.lists
            .lock()
            .unwrap()
            .get(&list)
            .cloned()
            .ok_or_else(|| DomainError::SourceUnavailable(format!("no {} list", list)))
    }
}

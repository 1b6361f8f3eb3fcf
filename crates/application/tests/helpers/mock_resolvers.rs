#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vetted_dns_application::ports::{ResolverClient, ResolverConnector};
use vetted_dns_domain::{DnsQuery, DomainError, Lookup, RecordType};

/// What a scripted resolver does with one kind of query.
#[derive(Debug, Clone)]
pub enum Reply {
    Addresses(Vec<IpAddr>),
    Names(Vec<String>),
    Fail(DomainError),
    /// Never answers; the probe's own deadline has to fire.
    Hang,
    Panic,
}

impl Reply {
    pub fn address(ip: &str) -> Self {
        Reply::Addresses(vec![ip.parse().unwrap()])
    }

    pub fn nxdomain() -> Self {
        Reply::Fail(DomainError::NxDomain)
    }
}

/// Per-server behaviour, split by the query shapes the probes send.
#[derive(Debug, Clone)]
pub struct ServerScript {
    pub known_good_a: Reply,
    pub known_good_aaaa: Reply,
    pub other_a: Reply,
    pub other_aaaa: Reply,
    pub ns: Reply,
    pub delay: Option<Duration>,
}

impl ServerScript {
    /// Correct known-good answers, NXDOMAIN for everything else.
    pub fn honest() -> Self {
        Self {
            known_good_a: Reply::address("8.8.8.8"),
            known_good_aaaa: Reply::address("2001:4860:4860::8888"),
            other_a: Reply::nxdomain(),
            other_aaaa: Reply::nxdomain(),
            ns: Reply::nxdomain(),
            delay: None,
        }
    }

    /// Answers every name, including ones that do not exist.
    pub fn hijacking() -> Self {
        Self {
            other_a: Reply::address("1.2.3.4"),
            other_aaaa: Reply::address("2001:db8::1"),
            ..Self::honest()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            known_good_a: Reply::Hang,
            known_good_aaaa: Reply::Hang,
            other_a: Reply::Hang,
            other_aaaa: Reply::Hang,
            ns: Reply::Hang,
            delay: None,
        }
    }

    pub fn with_known_good_a(mut self, reply: Reply) -> Self {
        self.known_good_a = reply;
        self
    }

    pub fn with_known_good_aaaa(mut self, reply: Reply) -> Self {
        self.known_good_aaaa = reply;
        self
    }

    pub fn with_other_a(mut self, reply: Reply) -> Self {
        self.other_a = reply;
        self
    }

    pub fn with_other_aaaa(mut self, reply: Reply) -> Self {
        self.other_aaaa = reply;
        self
    }

    pub fn with_ns(mut self, reply: Reply) -> Self {
        self.ns = reply;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn reply_for(&self, query: &DnsQuery) -> Reply {
        let known_good = &*query.domain == "dns.google";
        match (query.record_type, known_good) {
            (RecordType::A, true) => self.known_good_a.clone(),
            (RecordType::AAAA, true) => self.known_good_aaaa.clone(),
            (RecordType::A, false) => self.other_a.clone(),
            (RecordType::AAAA, false) => self.other_aaaa.clone(),
            (RecordType::NS, _) => self.ns.clone(),
        }
    }
}

#[derive(Default)]
struct Counters {
    connects: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[derive(Clone)]
pub struct MockResolverConnector {
    scripts: Arc<Mutex<HashMap<Ipv4Addr, ServerScript>>>,
    fallback: Arc<Mutex<ServerScript>>,
    queries: Arc<Mutex<Vec<(Ipv4Addr, DnsQuery)>>>,
    counters: Arc<Counters>,
}

impl MockResolverConnector {
    pub fn new() -> Self {
        Self::with_fallback(ServerScript::honest())
    }

    pub fn with_fallback(fallback: ServerScript) -> Self {
        Self {
            scripts: Arc::new(Mutex::new(HashMap::new())),
            fallback: Arc::new(Mutex::new(fallback)),
            queries: Arc::new(Mutex::new(Vec::new())),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn script(self, server: &str, script: ServerScript) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(server.parse().unwrap(), script);
        self
    }

    pub fn connects(&self) -> usize {
        self.counters.connects.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.counters.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(Ipv4Addr, DnsQuery)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queries_to(&self, server: &str) -> Vec<DnsQuery> {
        let server: Ipv4Addr = server.parse().unwrap();
        self.queries()
            .into_iter()
            .filter(|(s, _)| *s == server)
            .map(|(_, q)| q)
            .collect()
    }

    pub fn servers_queried(&self) -> Vec<Ipv4Addr> {
        let mut servers: Vec<Ipv4Addr> = self.queries().into_iter().map(|(s, _)| s).collect();
        servers.sort();
        servers.dedup();
        servers
    }
}

impl Default for MockResolverConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConnector for MockResolverConnector {
    fn connect(&self, server: Ipv4Addr, _timeout: Duration) -> Box<dyn ResolverClient> {
        self.counters.connects.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(&server)
            .cloned()
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone());
        Box::new(MockResolverClient {
            server,
            script,
            queries: Arc::clone(&self.queries),
            counters: Arc::clone(&self.counters),
        })
    }
}

pub struct MockResolverClient {
    server: Ipv4Addr,
    script: ServerScript,
    queries: Arc<Mutex<Vec<(Ipv4Addr, DnsQuery)>>>,
    counters: Arc<Counters>,
}

struct InFlight<'a>(&'a Counters);

impl<'a> InFlight<'a> {
    fn enter(counters: &'a Counters) -> Self {
        let now = counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        counters.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(counters)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResolverClient for MockResolverClient {
    async fn lookup(&self, query: &DnsQuery) -> Result<Lookup, DomainError> {
        self.queries
            .lock()
            .unwrap()
            .push((self.server, query.clone()));
        let _guard = InFlight::enter(&self.counters);

        if let Some(delay) = self.script.delay {
            tokio::time::sleep(delay).await;
        }

        match self.script.reply_for(query) {
            Reply::Addresses(addresses) => Ok(Lookup::from_addresses(query.record_type, addresses)),
            Reply::Names(names) => Ok(Lookup::from_names(query.record_type, names)),
            Reply::Fail(e) => Err(e),
            Reply::Hang => std::future::pending().await,
            Reply::Panic => panic!("scripted resolver {} panicked", self.server),
        }
    }

    fn server(&self) -> Ipv4Addr {
        self.server
    }
}

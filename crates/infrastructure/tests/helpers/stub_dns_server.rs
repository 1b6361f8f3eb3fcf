#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_NS: u16 = 2;
pub const QTYPE_AAAA: u16 = 28;

pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

#[derive(Debug, Clone)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
}

#[derive(Debug, Clone, Default)]
pub struct StubReply {
    pub rcode: u8,
    pub answers: Vec<RecordData>,
    pub truncated: bool,
    pub silent: bool,
    pub mismatched_id: bool,
}

impl StubReply {
    pub fn answer(answers: Vec<RecordData>) -> Self {
        Self {
            answers,
            ..Default::default()
        }
    }

    pub fn a(ip: &str) -> Self {
        Self::answer(vec![RecordData::A(ip.parse().unwrap())])
    }

    pub fn aaaa(ip: &str) -> Self {
        Self::answer(vec![RecordData::Aaaa(ip.parse().unwrap())])
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Default::default()
        }
    }

    pub fn nxdomain() -> Self {
        Self::rcode(RCODE_NXDOMAIN)
    }

    pub fn truncated() -> Self {
        Self {
            truncated: true,
            ..Default::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Default::default()
        }
    }
}

type Rules = HashMap<(String, u16), StubReply>;

#[derive(Clone)]
struct Script {
    udp: Arc<Rules>,
    tcp: Arc<Rules>,
    fallback: StubReply,
}

impl Script {
    fn reply(&self, tcp: bool, name: &str, qtype: u16) -> StubReply {
        let rules = if tcp { &self.tcp } else { &self.udp };
        rules
            .get(&(name.to_string(), qtype))
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub struct StubDnsServerBuilder {
    udp: Rules,
    tcp: Rules,
    fallback: StubReply,
}

impl StubDnsServerBuilder {
    /// Same reply over UDP and TCP.
    pub fn on(mut self, name: &str, qtype: u16, reply: StubReply) -> Self {
        self.udp.insert((name.to_string(), qtype), reply.clone());
        self.tcp.insert((name.to_string(), qtype), reply);
        self
    }

    pub fn on_udp(mut self, name: &str, qtype: u16, reply: StubReply) -> Self {
        self.udp.insert((name.to_string(), qtype), reply);
        self
    }

    pub fn on_tcp(mut self, name: &str, qtype: u16, reply: StubReply) -> Self {
        self.tcp.insert((name.to_string(), qtype), reply);
        self
    }

    /// Reply for every query without a rule. Defaults to NXDOMAIN.
    pub fn otherwise(mut self, reply: StubReply) -> Self {
        self.fallback = reply;
        self
    }

    /// Answers dns.google the way Google's own resolvers do.
    pub fn honest(self) -> Self {
        self.on("dns.google", QTYPE_A, StubReply::a("8.8.8.8"))
            .on("dns.google", QTYPE_AAAA, StubReply::aaaa("2001:4860:4860::8888"))
    }

    pub async fn start(self) -> StubDnsServer {
        let script = Script {
            udp: Arc::new(self.udp),
            tcp: Arc::new(self.tcp),
            fallback: self.fallback,
        };
        StubDnsServer::start(script).await
    }
}

/// In-process DNS server on 127.0.0.1 answering UDP and TCP on the same port.
pub struct StubDnsServer {
    addr: SocketAddr,
    udp_hits: Arc<AtomicUsize>,
    tcp_hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StubDnsServer {
    pub fn builder() -> StubDnsServerBuilder {
        StubDnsServerBuilder {
            udp: HashMap::new(),
            tcp: HashMap::new(),
            fallback: StubReply::nxdomain(),
        }
    }

    async fn bind() -> (UdpSocket, TcpListener) {
        for _ in 0..20 {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            if let Ok(socket) = UdpSocket::bind(addr).await {
                return (socket, listener);
            }
        }
        panic!("no port free for both UDP and TCP");
    }

    async fn start(script: Script) -> Self {
        let (socket, listener) = Self::bind().await;
        let addr = socket.local_addr().unwrap();
        let udp_hits = Arc::new(AtomicUsize::new(0));
        let tcp_hits = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = Arc::clone(&udp_hits);
        let tcp_counter = Arc::clone(&tcp_hits);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = respond(&script, false, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(serve_tcp(stream, script.clone()));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            udp_hits,
            tcp_hits,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn udp_hits(&self) -> usize {
        self.udp_hits.load(Ordering::SeqCst)
    }

    pub fn tcp_hits(&self) -> usize {
        self.tcp_hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, script: Script) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }
    if let Some(response) = respond(&script, true, &query) {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }
}

/// Question name (lowercase, no trailing dot), qtype, and where the question ends.
fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(query.get(pos..pos + len)?).to_lowercase());
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((labels.join("."), qtype, pos + 4))
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn respond(script: &Script, tcp: bool, query: &[u8]) -> Option<Vec<u8>> {
    let (name, qtype, question_end) = parse_question(query)?;
    let reply = script.reply(tcp, &name, qtype);
    if reply.silent {
        return None;
    }

    let mut response = Vec::with_capacity(512);
    if reply.mismatched_id {
        response.extend_from_slice(&[query[0] ^ 0xff, query[1] ^ 0xff]);
    } else {
        response.extend_from_slice(&query[0..2]);
    }
    response.push(0x81 | if reply.truncated { 0x02 } else { 0x00 });
    response.push(0x80 | (reply.rcode & 0x0f));
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(reply.answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..question_end]);

    for answer in &reply.answers {
        let (rtype, rdata) = match answer {
            RecordData::A(ip) => (QTYPE_A, ip.octets().to_vec()),
            RecordData::Aaaa(ip) => (QTYPE_AAAA, ip.octets().to_vec()),
            RecordData::Ns(target) => (QTYPE_NS, encode_name(target)),
        };
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    Some(response)
}

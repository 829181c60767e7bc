#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers a query for one name.
#[derive(Debug, Clone)]
pub enum MockReply {
    Addresses(Vec<Ipv4Addr>),
    NxDomain,
    Empty,
    /// Answer with a flipped transaction ID.
    WrongId,
    /// Ignore the first `count` queries, then answer with `then`.
    DropFirst { count: usize, then: Box<MockReply> },
    Silent,
}

impl MockReply {
    pub fn address(ip: &str) -> Self {
        MockReply::Addresses(vec![ip.parse().unwrap()])
    }
}

#[derive(Default)]
struct ServerState {
    replies: HashMap<String, MockReply>,
    received: HashMap<String, usize>,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    state: Arc<Mutex<ServerState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral loopback port. Unknown names get NXDOMAIN.
    pub async fn start(replies: Vec<(&str, MockReply)>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let state = Arc::new(Mutex::new(ServerState {
            replies: replies
                .into_iter()
                .map(|(name, reply)| (name.to_string(), reply))
                .collect(),
            received: HashMap::new(),
        }));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let task_state = Arc::clone(&state);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = Self::respond(&task_state, &buf[..len]);
                            if let Some(response) = response {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self, name: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.received.get(name).copied().unwrap_or(0)
    }

    fn respond(state: &Mutex<ServerState>, query: &[u8]) -> Option<Vec<u8>> {
        let (name, question_end) = question_name(query)?;

        let mut state = state.lock().unwrap();
        let seen = {
            let counter = state.received.entry(name.clone()).or_insert(0);
            *counter += 1;
            *counter
        };
        let reply = state
            .replies
            .get(&name)
            .cloned()
            .unwrap_or(MockReply::NxDomain);

        build_reply(&reply, query, question_end, seen)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Reads the first question name (lowercased, no trailing dot).
fn question_name(query: &[u8]) -> Option<(String, usize)> {
    if query.len() < 12 {
        return None;
    }

    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).to_lowercase());
        pos += len;
    }

    // QTYPE + QCLASS
    Some((labels.join("."), pos + 4))
}

fn build_reply(reply: &MockReply, query: &[u8], question_end: usize, seen: usize) -> Option<Vec<u8>> {
    match reply {
        MockReply::Silent => None,
        MockReply::DropFirst { count, then } => {
            if seen <= *count {
                None
            } else {
                build_reply(then, query, question_end, seen)
            }
        }
        MockReply::NxDomain => Some(header_and_question(query, question_end, 0x83, 0)),
        MockReply::Empty => Some(header_and_question(query, question_end, 0x80, 0)),
        MockReply::WrongId => {
            let mut response = header_and_question(query, question_end, 0x80, 0);
            response[0] ^= 0xff;
            response[1] ^= 0xff;
            Some(response)
        }
        MockReply::Addresses(ips) => {
            let mut response = header_and_question(query, question_end, 0x80, ips.len() as u16);
            for ip in ips {
                response.extend_from_slice(&[
                    0xc0, 0x0c, // pointer to question name
                    0x00, 0x01, // A
                    0x00, 0x01, // IN
                    0x00, 0x00, 0x00, 0x3c, // TTL 60
                    0x00, 0x04,
                ]);
                response.extend_from_slice(&ip.octets());
            }
            Some(response)
        }
    }
}

/// `rcode_byte` is the second flags byte: RA plus the response code.
fn header_and_question(query: &[u8], question_end: usize, rcode_byte: u8, ancount: u16) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);
    // QR=1, opcode=0, RD copied from the query
    response.push(0x80 | (query[2] & 0x01));
    response.push(rcode_byte);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&ancount.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..question_end.min(query.len())]);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_name_parsing() {
        let mut query = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        query.extend_from_slice(&[6, b'G', b'i', b't', b'H', b'u', b'b', 3, b'c', b'o', b'm', 0]);
        query.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        let (name, end) = question_name(&query).unwrap();
        assert_eq!(name, "github.com");
        assert_eq!(end, query.len());
    }
}

#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers PTR queries.
#[derive(Clone, Debug)]
pub enum MockPtrBehavior {
    /// Answer from a reverse-name → hostnames table; names not in the table
    /// get an empty NOERROR answer.
    Answer(HashMap<String, Vec<String>>),
    NxDomain,
    ServFail,
    /// Reply with a different transaction ID.
    WrongId,
    /// Send a reply with a different transaction ID first, then answer
    /// from the table.
    StrayThenAnswer(HashMap<String, Vec<String>>),
    /// Never reply.
    Silent,
}

impl MockPtrBehavior {
    pub fn answer(entries: &[(&str, &[&str])]) -> Self {
        MockPtrBehavior::Answer(Self::table(entries))
    }

    pub fn stray_then_answer(entries: &[(&str, &[&str])]) -> Self {
        MockPtrBehavior::StrayThenAnswer(Self::table(entries))
    }

    fn table(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, hosts)| {
                (
                    name.to_string(),
                    hosts.iter().map(|h| h.to_string()).collect(),
                )
            })
            .collect()
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_udp(behavior: MockPtrBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;
        let behavior = Arc::new(behavior);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            for response in build_mock_responses(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn start_tcp(behavior: MockPtrBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let local_addr = listener.local_addr()?;
        let behavior = Arc::new(behavior);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else {
                            continue;
                        };
                        let behavior = behavior.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            let responses = build_mock_responses(&query, &behavior);
                            let Some(response) = responses.first() else {
                                // Hold the connection open without answering.
                                let mut sink = [0u8; 1];
                                let _ = stream.read(&mut sink).await;
                                return;
                            };
                            let len = (response.len() as u16).to_be_bytes();
                            let _ = stream.write_all(&len).await;
                            let _ = stream.write_all(response).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn endpoint(&self) -> String {
        self.addr.to_string()
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

/// Reads the uncompressed QNAME that starts at byte 12 of a query.
fn question_name(query: &[u8]) -> Option<(String, usize)> {
    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
        pos += len;
    }
    // QTYPE + QCLASS
    Some((format!("{}.", labels.join(".")), pos + 4))
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

fn build_mock_responses(query: &[u8], behavior: &MockPtrBehavior) -> Vec<Vec<u8>> {
    if query.len() < 12 {
        return vec![];
    }
    let Some((qname, question_end)) = question_name(query) else {
        return vec![];
    };
    let id = u16::from_be_bytes([query[0], query[1]]);
    let stray_id = id.wrapping_add(1);
    let question = &query[12..question_end];

    match behavior {
        MockPtrBehavior::Silent => vec![],
        MockPtrBehavior::NxDomain => vec![encode_response(id, 3, question, &[])],
        MockPtrBehavior::ServFail => vec![encode_response(id, 2, question, &[])],
        MockPtrBehavior::WrongId => vec![encode_response(stray_id, 0, question, &[])],
        MockPtrBehavior::Answer(table) => {
            let hostnames = table.get(&qname).cloned().unwrap_or_default();
            vec![encode_response(id, 0, question, &hostnames)]
        }
        MockPtrBehavior::StrayThenAnswer(table) => {
            let hostnames = table.get(&qname).cloned().unwrap_or_default();
            vec![
                encode_response(stray_id, 0, question, &["stray.example.".to_string()]),
                encode_response(id, 0, question, &hostnames),
            ]
        }
    }
}

fn encode_response(id: u16, rcode: u8, question: &[u8], hostnames: &[String]) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&id.to_be_bytes());

    // QR | RD, RA | RCODE
    response.push(0x81);
    response.push(0x80 | rcode);

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(hostnames.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(question);

    for hostname in hostnames {
        let rdata = encode_name(hostname);
        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to QNAME
            0x00, 0x0c, // PTR
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c,
        ]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}

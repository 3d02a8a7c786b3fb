#![allow(dead_code)]
use super::wire_builders::question_name;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct MockHttpRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// Decoded `dns` query parameter, when present.
    pub dns_query: Option<Vec<u8>>,
}

impl MockHttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn question_name(&self) -> Option<String> {
        self.dns_query.as_deref().and_then(question_name)
    }
}

pub struct MockHttpReply {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
}

impl MockHttpReply {
    pub fn dns(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body,
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = dyn Fn(&MockHttpRequest) -> MockHttpReply + Send + Sync;

/// Minimal HTTP/1.1 server on 127.0.0.1 standing in for a DoH endpoint.
pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<MockHttpRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    pub async fn start<F>(responder: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&MockHttpRequest) -> MockHttpReply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Arc<Responder> = Arc::new(responder);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let responder = Arc::clone(&responder);
                        let recorded = Arc::clone(&recorded);
                        tokio::spawn(async move {
                            let _ = Self::handle(stream, responder, recorded).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn requests(&self) -> Vec<MockHttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    async fn handle(
        mut stream: tokio::net::TcpStream,
        responder: Arc<Responder>,
        recorded: Arc<Mutex<Vec<MockHttpRequest>>>,
    ) -> Result<(), std::io::Error> {
        let mut buf = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                return Ok(());
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let Some(request) = parse_request(&buf) else {
            return Ok(());
        };
        let reply = responder(&request);
        recorded.lock().unwrap().push(request);

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }

        let head = format!(
            "HTTP/1.1 {} Mock\r\nContent-Type: application/dns-message\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            reply.status,
            reply.body.len()
        );
        stream.write_all(head.as_bytes()).await?;
        stream.write_all(&reply.body).await?;
        stream.shutdown().await
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn parse_request(buf: &[u8]) -> Option<MockHttpRequest> {
    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split("\r\n");

    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    let dns_query = path
        .split_once('?')
        .and_then(|(_, query)| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("dns="))
                .map(str::to_string)
        })
        .and_then(|param| URL_SAFE_NO_PAD.decode(param).ok());

    Some(MockHttpRequest {
        method,
        path,
        headers,
        dns_query,
    })
}

//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// What the mock backend does with a given request (by hit index).
#[derive(Debug, Clone)]
#[allow(dead_code)] // not every test binary uses every variant
pub enum Reply {
    /// Respond with this status and JSON body.
    Json(u16, &'static str),
    /// Sleep, then respond with this status and JSON body.
    Slow(u64, u16, &'static str),
    /// Drop the connection without responding (transport failure).
    Abort,
}

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Raw request line, e.g. `GET /api/products/p1 HTTP/1.1`.
    pub line: String,
    /// Value of the `Authorization` header, if present.
    pub authorization: Option<String>,
    /// Value of the `x-request-id` header, if present.
    pub request_id: Option<String>,
}

impl RecordedRequest {
    /// `true` if the request line starts with `METHOD path `.
    #[allow(dead_code)]
    pub fn matches(&self, method_and_path: &str) -> bool {
        self.line.starts_with(&format!("{method_and_path} "))
    }
}

/// Handle to a running mock backend.
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicU32>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    /// Base URL for a gateway pointed at this backend.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Number of requests that reached the backend.
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Snapshot of every request seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock backend on an ephemeral port. The `reply` closure decides
/// the behavior per hit index (0-based), so tests can script
/// fail-then-succeed sequences.
pub async fn start_backend<F>(reply: F) -> MockBackend
where
    F: Fn(u32) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let reply = Arc::new(reply);

    let backend = MockBackend {
        addr,
        hits: hits.clone(),
        requests: requests.clone(),
    };

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let hits = hits.clone();
                    let requests = requests.clone();
                    let reply = reply.clone();
                    tokio::spawn(async move {
                        let head = match read_head(&mut socket).await {
                            Some(head) => head,
                            None => return,
                        };
                        let hit = hits.fetch_add(1, Ordering::SeqCst);
                        requests.lock().unwrap().push(parse_head(&head));

                        match reply(hit) {
                            Reply::Json(status, body) => {
                                write_json(&mut socket, status, body).await;
                            }
                            Reply::Slow(delay_ms, status, body) => {
                                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                                write_json(&mut socket, status, body).await;
                            }
                            Reply::Abort => {
                                let _ = socket.shutdown().await;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    backend
}

/// Read the request head, draining any Content-Length body so the reply
/// does not race with the client still writing.
async fn read_head(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let head_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();

    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body_read = buf.len() - head_end;
    while body_read < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body_read += n;
    }

    Some(head)
}

fn parse_head(head: &str) -> RecordedRequest {
    let mut lines = head.lines();
    let line = lines.next().unwrap_or_default().to_string();

    let mut authorization = None;
    let mut request_id = None;
    for header in lines {
        if let Some((name, value)) = header.split_once(':') {
            match name.to_ascii_lowercase().as_str() {
                "authorization" => authorization = Some(value.trim().to_string()),
                "x-request-id" => request_id = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    RecordedRequest {
        line,
        authorization,
        request_id,
    }
}

async fn write_json(socket: &mut tokio::net::TcpStream, status: u16, body: &str) {
    let status_text = match status {
        200 => "200 OK",
        201 => "201 Created",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::models::{ProblemRecord, Rating};
use crate::sources::RawPayloads;

pub fn sample_payloads() -> RawPayloads {
    RawPayloads {
        codeforces: json!({
            "status": "OK",
            "result": { "problems": [
                {
                    "contestId": 1, "index": "A", "name": "Theatre Square",
                    "rating": 1000, "tags": ["math"]
                },
                { "contestId": 2, "index": "B", "name": "Two Sum", "tags": ["dp", "math"] }
            ]}
        }),
        uva: json!([[100, 100, "The 3n+1 problem", 80000, 0, 0]]),
    }
}

pub fn theatre_square() -> ProblemRecord {
    ProblemRecord::codeforces(
        1,
        "A".to_string(),
        "Theatre Square".to_string(),
        vec!["math".to_string()],
        Rating::Rated(1000),
    )
}

pub fn three_n_plus_one() -> ProblemRecord {
    ProblemRecord::uva(100, "The 3n+1 problem".to_string(), 80000, 0, 0)
}

pub fn two_sum() -> ProblemRecord {
    ProblemRecord::codeforces(
        2,
        "B".to_string(),
        "Two Sum".to_string(),
        vec!["dp".to_string(), "math".to_string()],
        Rating::NotAvailable,
    )
}

/// URL of a local port with nothing listening on it.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Serves one connection with `status` and `body`, then closes it.
pub async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{}/api", addr)
}

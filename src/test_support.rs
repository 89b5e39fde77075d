// src/test_support.rs
// Tiny HTTP/1.1 server for tests. Answers every request with the canned
// status/Location for its path (200 with no Location for unknown paths)
// and records what it received. "{base}" in a Location is replaced by the
// server's own base URL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub user_agent: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct Routes(HashMap<String, (u16, Option<String>)>);

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, status: u16, location: Option<&str>) -> Self {
        self.0
            .insert(path.to_string(), (status, location.map(str::to_string)));
        self
    }
}

pub struct TestServer {
    /// e.g. "http://127.0.0.1:40123", no trailing slash
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl TestServer {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn(routes: Routes) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let routes = Routes(
        routes
            .0
            .into_iter()
            .map(|(path, (status, location))| {
                (path, (status, location.map(|l| l.replace("{base}", &base_url))))
            })
            .collect(),
    );

    let log = Arc::clone(&requests);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            let log = Arc::clone(&log);
            tokio::spawn(async move {
                let _ = serve(stream, routes, log).await;
            });
        }
    });

    TestServer { base_url, requests }
}

async fn serve(
    mut stream: TcpStream,
    routes: Routes,
    log: Arc<Mutex<Vec<Recorded>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf).into_owned();
    let mut lines = head.split("\r\n");
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let mut user_agent = None;
    let mut authorization = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "user-agent" => user_agent = Some(value.trim().to_string()),
                "authorization" => authorization = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    let (status, location) = routes.0.get(&path).cloned().unwrap_or((200, None));
    log.lock().unwrap().push(Recorded {
        path,
        user_agent,
        authorization,
    });

    let mut response = format!("HTTP/1.1 {} Test\r\n", status);
    if let Some(location) = location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    response.push_str("Content-Length: 0\r\nConnection: close\r\n\r\n");
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

// tests/fetch_http.rs
//
// HttpFetcher against a throwaway local server (one response per connection).
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use nba_roster::core::net::{Fetch, HttpFetcher};
use nba_roster::error::FetchError;
use nba_roster::teams::TeamCode;

/// Answer a single request with `status` and `body`; hand back the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let n = stream.read(&mut buf).unwrap();
        let req = String::from_utf8_lossy(&buf[..n]).into_owned();

        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        req.lines().next().unwrap_or_default().to_string()
    });

    (base, handle)
}

#[test]
fn ok_response_returns_body_and_hits_team_path() {
    let (base, server) = serve_once("200 OK", "<table class=\"stats_table\"></table>");
    let fetcher = HttpFetcher::new(&base, 2023).unwrap();

    let body = fetcher.fetch(&TeamCode::parse("bos").unwrap()).unwrap();
    assert_eq!(body, "<table class=\"stats_table\"></table>");

    let request_line = server.join().unwrap();
    assert_eq!(request_line, "GET /teams/BOS/2023.html HTTP/1.1");
}

#[test]
fn non_2xx_is_a_fetch_error() {
    let (base, server) = serve_once("404 Not Found", "gone");
    let fetcher = HttpFetcher::new(&base, 2023).unwrap();

    let err = fetcher.fetch(&TeamCode::parse("XYZ").unwrap()).unwrap_err();
    match err {
        FetchError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/teams/XYZ/2023.html#all_roster"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn refused_connection_is_a_fetch_error() {
    // Bind then drop to get a port nobody is listening on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let fetcher = HttpFetcher::new(&format!("http://127.0.0.1:{port}"), 2023).unwrap();

    let err = fetcher.fetch(&TeamCode::parse("LAL").unwrap()).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

//! Minimal HTTP/1.1 server answering every request with one canned response,
//! for integration tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread that replies to every request with
/// `status` and `body`. Returns the URL to request. The server runs until the
/// process exits.
pub fn serve(status: u16, reason: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = body.clone();
            thread::spawn(move || handle(stream, status, reason, &body));
        }
    });
    format!("http://127.0.0.1:{}/logo.jpg", port)
}

/// Returns a URL on a port where nothing is listening, so connecting fails.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/logo.jpg", port)
}

fn handle(mut stream: TcpStream, status: u16, reason: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    // Request contents are irrelevant; drain the head and send the canned
    // response.
    let mut buf = [0u8; 8192];
    if stream.read(&mut buf).is_err() {
        return;
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

#![allow(dead_code)]

use tokio::{
    io::{AsyncReadExt as _, AsyncWriteExt as _},
    net::TcpListener,
    task::JoinHandle,
};

/// Serves exactly one HTTP/1.1 response on a loopback port and hands back
/// the raw request head it received.
pub async fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _addr) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0_u8; 1024];
        while !head.windows(4).any(|x| x == b"\r\n\r\n") {
            let count = stream.read(&mut buf).await.unwrap();
            if count == 0 {
                break;
            }
            head.extend_from_slice(&buf[..count]);
        }

        let mut response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(&body);
        stream.write_all(&response).await.unwrap();
        stream.shutdown().await.unwrap();

        String::from_utf8(head).unwrap()
    });

    (base_url, handle)
}

/// Binds and immediately releases a loopback port, giving a base URL that
/// refuses connections.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base_url
}

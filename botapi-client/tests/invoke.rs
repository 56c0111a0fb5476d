use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use botapi_client::{CancellationToken, Client, Config, ErrorPolicy, InvocationError};
use botapi_types::functions::{GetMe, RestrictChatMember, SendDocument, SendMessage};
use botapi_types::types::{ChatPermissions, InputFile, Message};

// ── One-shot HTTP responder ───────────────────────────────────────────────────

/// What the server saw.
struct Captured {
    request_line: String,
    headers:      Vec<(String, String)>,
    body:         Vec<u8>,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Accept one connection, record the request, answer with `status` and
/// `body`. Returns the base URL and a handle yielding the capture.
fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let captured = read_request(&mut reader);

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        )
        .unwrap();
        stream.flush().unwrap();
        captured
    });
    (url, handle)
}

/// Serve every connection, answering each request with `body` and keeping
/// the connection open for the next one.
fn serve_keep_alive(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            thread::spawn(move || {
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut stream = stream;
                while try_read_request(&mut reader).is_some() {
                    let written = write!(
                        stream,
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
                        body.len(),
                    );
                    if written.and_then(|()| stream.flush()).is_err() {
                        break;
                    }
                }
            });
        }
    });
    url
}

fn read_request(reader: &mut impl BufRead) -> Captured {
    try_read_request(reader).expect("connection closed before a request arrived")
}

/// `None` once the peer closes the connection.
fn try_read_request(reader: &mut impl BufRead) -> Option<Captured> {
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).ok()? == 0 {
        return None;
    }

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_owned(), v.trim().to_owned()));
        }
    }

    let find = |name: &str| {
        headers
            .iter()
            .find(|(k, _): &&(String, String)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    };
    let mut body = Vec::new();
    if let Some(len) = find("content-length") {
        body.resize(len.parse().unwrap(), 0);
        reader.read_exact(&mut body).unwrap();
    } else if find("transfer-encoding").is_some_and(|v| v.eq_ignore_ascii_case("chunked")) {
        loop {
            let mut size = String::new();
            reader.read_line(&mut size).unwrap();
            let size = usize::from_str_radix(size.trim(), 16).unwrap();
            let mut chunk = vec![0; size + 2];
            reader.read_exact(&mut chunk).unwrap();
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }

    Some(Captured { request_line: request_line.trim_end().to_owned(), headers, body })
}

fn client(url: String, policy: ErrorPolicy) -> Client {
    Client::with_config(Config {
        api_url:      url,
        http:         Some(reqwest::Client::new()),
        error_policy: policy,
        timeout:      Some(Duration::from_secs(10)),
        ..Config::new("1:test")
    })
    .unwrap()
}

const TOO_MANY: &str = r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#;

// ── Envelope handling ─────────────────────────────────────────────────────────

#[tokio::test]
async fn ok_envelope_yields_result() {
    let (url, server) = serve_once("200 OK", "application/json", r#"{"ok":true,"result":42}"#);
    let value: i64 = client(url, ErrorPolicy::Raise).invoke_json("getAnswer", "{}").await.unwrap();
    assert_eq!(value, 42);

    let seen = server.join().unwrap();
    assert_eq!(seen.request_line, "POST /bot1:test/getAnswer HTTP/1.1");
    assert_eq!(seen.header("accept"), Some("application/json, multipart/form-data"));
    assert_eq!(seen.body, b"{}");
}

#[tokio::test]
async fn rate_limit_is_raised_with_retry_hint() {
    let (url, server) = serve_once("429 Too Many Requests", "application/json", TOO_MANY);
    let err = client(url, ErrorPolicy::Raise)
        .invoke(&SendMessage::new(1, "hi"))
        .await
        .unwrap_err();

    let remote = err.remote().expect("remote error");
    assert_eq!(remote.code, 429);
    assert_eq!(err.retry_after(), Some(3));
    assert!(err.is("Too Many Requests*"));
    server.join().unwrap();
}

#[tokio::test]
async fn rate_limit_is_suppressed_to_default() {
    let (url, server) = serve_once("429 Too Many Requests", "application/json", TOO_MANY);
    let value: i64 = client(url, ErrorPolicy::Suppress).invoke_json("getAnswer", "{}").await.unwrap();
    assert_eq!(value, 0);
    server.join().unwrap();
}

#[tokio::test]
async fn per_call_policy_overrides_config() {
    let (url, server) = serve_once("429 Too Many Requests", "application/json", TOO_MANY);
    let msg = client(url, ErrorPolicy::Raise)
        .invoke_with_policy(&SendMessage::new(1, "hi"), ErrorPolicy::Suppress)
        .await
        .unwrap();
    assert_eq!(msg, Message::default());
    server.join().unwrap();
}

#[tokio::test]
async fn non_json_error_page_is_http_error() {
    let (url, server) = serve_once("502 Bad Gateway", "text/html", "<html>Bad Gateway</html>");
    let err = client(url, ErrorPolicy::Suppress).get_me().await.unwrap_err();
    match err {
        InvocationError::Http { status, body } => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    server.join().unwrap();
}

#[tokio::test]
async fn garbage_success_body_is_decode_error() {
    let (url, server) = serve_once("200 OK", "application/json", r#"{"result":true}"#);
    let err = client(url, ErrorPolicy::Suppress).get_me().await.unwrap_err();
    assert!(matches!(err, InvocationError::Decode(_)), "{err:?}");
    server.join().unwrap();
}

// ── Transport selection on the wire ───────────────────────────────────────────

#[tokio::test]
async fn argument_less_call_uses_get() {
    let (url, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Echo","username":"echo_bot"}}"#,
    );
    let me = client(url, ErrorPolicy::Raise).invoke(&GetMe).await.unwrap();
    assert_eq!(me.username.as_deref(), Some("echo_bot"));

    let seen = server.join().unwrap();
    assert_eq!(seen.request_line, "GET /bot1:test/getMe HTTP/1.1");
    assert!(seen.body.is_empty());
}

#[tokio::test]
async fn restrict_member_posts_exact_json() {
    let (url, server) = serve_once("200 OK", "application/json", r#"{"ok":true,"result":true}"#);
    let permissions = ChatPermissions { can_send_messages: Some(false), ..Default::default() };
    let done = client(url, ErrorPolicy::Raise)
        .invoke(&RestrictChatMember::new(123, 456, permissions))
        .await
        .unwrap();
    assert!(done);

    let seen = server.join().unwrap();
    assert_eq!(seen.request_line, "POST /bot1:test/restrictChatMember HTTP/1.1");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(seen.body_text(), r#"{"chat_id":123,"user_id":456,"permissions":{"can_send_messages":false}}"#);
}

#[tokio::test]
async fn upload_is_sent_as_multipart() {
    let (url, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"ok":true,"result":{"message_id":5,"chat":{"id":-100,"type":"supergroup"},"date":0,"document":{"file_id":"BQAD","file_unique_id":"u"}}}"#,
    );
    let req = SendDocument::new(-100, InputFile::upload("report.txt", b"quarterly numbers".to_vec()))
        .caption("Q3");
    let msg = client(url, ErrorPolicy::Raise).send_document(&req).await.unwrap();
    assert_eq!(msg.document.map(|d| d.file_id), Some("BQAD".to_owned()));

    let seen = server.join().unwrap();
    assert!(seen.header("content-type").is_some_and(|v| v.starts_with("multipart/form-data; boundary=")));
    let body = seen.body_text();
    assert!(body.contains(r#"name="chat_id""#), "{body}");
    assert!(body.contains(r#"name="document"; filename="report.txt""#), "{body}");
    assert!(body.to_ascii_lowercase().contains("content-type: text/plain"), "{body}");
    assert!(body.contains("quarterly numbers"));
    assert!(body.find(r#"name="document""#) < body.find(r#"name="caption""#));
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_network() {
    let client = client("http://127.0.0.1:9".into(), ErrorPolicy::Raise);
    let err = client.send_message("", "hello").await.unwrap_err();
    assert!(matches!(err, InvocationError::Argument(ref e) if e.name == "chat_id"), "{err:?}");
}

// ── Call styles ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn cancellation_aborts_a_pending_call() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        // Hold the connection open without answering.
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
    });

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = client(url, ErrorPolicy::Raise)
        .invoke_cancellable(&GetMe, &token)
        .await
        .unwrap_err();
    assert!(err.is_cancelled(), "{err:?}");
}

#[tokio::test]
async fn cancellation_aborts_a_stalled_body() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        read_request(&mut reader);
        // Promise more body than is ever sent.
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{{\"ok\":true,",
        )
        .unwrap();
        stream.flush().unwrap();
        thread::sleep(Duration::from_secs(3));
    });

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.cancel();
    });

    let err = client(url, ErrorPolicy::Raise)
        .invoke_cancellable(&GetMe, &token)
        .await
        .unwrap_err();
    assert!(err.is_cancelled(), "{err:?}");
}

#[test]
fn blocking_call_outside_runtime() {
    let (url, server) = serve_once("200 OK", "application/json", r#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Echo"}}"#);
    let client = client(url, ErrorPolicy::Raise);
    let me = client.invoke_blocking(&GetMe).unwrap();
    assert_eq!(me.first_name, "Echo");
    assert!(server.join().unwrap().request_line.starts_with("GET "));
}

#[test]
fn async_call_after_blocking_call_on_default_pool() {
    let url = serve_keep_alive(r#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Echo"}}"#);
    let client = Client::with_config(Config { api_url: url, ..Config::new("1:test") }).unwrap();

    let me = client.invoke_blocking(&GetMe).unwrap();
    assert_eq!(me.first_name, "Echo");

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap();
    let me = rt
        .block_on(async { tokio::time::timeout(Duration::from_secs(3), client.invoke(&GetMe)).await })
        .expect("async call stalled after a blocking call")
        .unwrap();
    assert_eq!(me.first_name, "Echo");

    let me = client.invoke_blocking(&GetMe).unwrap();
    assert_eq!(me.first_name, "Echo");
}

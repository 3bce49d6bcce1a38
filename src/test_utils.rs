#[cfg(test)]
pub mod test_helpers {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::JoinHandle;

    use crate::ai::provider::{AiProvider, GeminiClient};

    pub const SAMPLE_CONTENT: &str =
        "Sourdough needs a lively starter. Feed your starter with whole wheat flour every day.";

    pub const SAMPLE_LINKS: &str = "https://example.com/starter-guide\nhttps://example.com/flour";

    pub const SAMPLE_REPLY: &str = r#"{"suggestions":[{"anchorText":"lively starter","link":"https://example.com/starter-guide","context":"Sourdough needs a lively starter."}]}"#;

    /// Wrap a reply text in a Gemini `generateContent` envelope
    pub fn gemini_envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": text }] },
                    "finishReason": "STOP"
                }
            ]
        })
        .to_string()
    }

    /// Serve exactly one HTTP response on a loopback port
    ///
    /// Returns the base URL and a handle yielding the raw request text.
    pub fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        (format!("http://{addr}/v1beta"), handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Gemini client pointed at a local test server, bypassing any proxy settings
    pub fn local_client(base_url: &str) -> GeminiClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        GeminiClient::with_client(
            http,
            "AIza-test-key".to_string(),
            "gemini-2.5-flash".to_string(),
            base_url.to_string(),
        )
    }

    pub fn local_provider(base_url: &str) -> AiProvider {
        AiProvider::Gemini(local_client(base_url))
    }
}

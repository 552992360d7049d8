#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::catalog::{CatalogState, Course};
    use crate::search_bar::{SearchBar, SearchCallback};

    pub const SAMPLE_CATALOG_JSON: &str =
        r#"[{"id": 1, "course_code": "CS101"}, {"id": 2, "course_code": "CS201"}]"#;

    /// Callback invocations recorded as `(query, matches)` pairs
    pub type Calls = Rc<RefCell<Vec<(String, Vec<Course>)>>>;

    pub fn sample_catalog() -> Vec<Course> {
        vec![Course::new(1, "CS101"), Course::new(2, "CS201")]
    }

    pub fn recording_callback() -> (SearchCallback, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback: SearchCallback = Box::new(move |query: &str, matches: &[Course]| {
            sink.borrow_mut().push((query.to_string(), matches.to_vec()));
        });
        (callback, calls)
    }

    /// Search bar over an already-loaded catalog
    pub fn test_search_bar(courses: Vec<Course>) -> (SearchBar, Calls) {
        let (callback, calls) = recording_callback();
        let bar = SearchBar::new(CatalogState::preloaded(courses), callback);
        (bar, calls)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Minimal HTTP server answering every request with a fixed response
    pub struct TestServer {
        pub base_url: String,
        hits: Arc<AtomicUsize>,
        heads: Arc<Mutex<Vec<String>>>,
    }

    impl TestServer {
        /// Number of requests received so far
        pub fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }

        /// Request line and headers of the most recent request
        pub fn last_request_head(&self) -> Option<String> {
            self.heads.lock().unwrap().last().cloned()
        }
    }

    pub fn serve(status: u16, body: &'static str) -> TestServer {
        serve_with_delay(status, body, Duration::ZERO)
    }

    pub fn serve_with_delay(status: u16, body: &'static str, delay: Duration) -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let heads = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&heads);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                counter.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(delay);
                respond(stream, status, body, &recorded);
            }
        });

        TestServer {
            base_url: format!("http://{}", addr),
            hits,
            heads,
        }
    }

    fn respond(stream: TcpStream, status: u16, body: &str, heads: &Mutex<Vec<String>>) {
        let mut reader = BufReader::new(stream);
        let mut head = String::new();
        let mut line = String::new();
        // Consume the request head; GET carries no body
        while reader.read_line(&mut line).is_ok_and(|n| n > 0) {
            if line == "\r\n" {
                break;
            }
            head.push_str(&line);
            line.clear();
        }
        heads.lock().unwrap().push(head);

        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );

        let mut stream = reader.into_inner();
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    }

    /// Poll `condition` every 10ms until it holds or `timeout_ms` elapses
    pub fn wait_until(timeout_ms: u64, mut condition: impl FnMut() -> bool) -> bool {
        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        condition()
    }
}

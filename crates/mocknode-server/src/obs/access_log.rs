//! Access-log sinks.
//!
//! `WriterAccessLog` renders the classic line
//! `[2025-01-28 09:00:00] "GET /metrics HTTP/1.1" 200 -` into any writer;
//! `TracingAccessLog` emits structured events instead; `NullAccessLog` drops
//! everything.

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

use axum::http::{Method, StatusCode, Version};
use chrono::{DateTime, Local};

use crate::config::AccessLogMode;

/// One handled request.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub at: DateTime<Local>,
    pub method: Method,
    /// Path plus query, as received.
    pub target: String,
    pub version: Version,
    pub status: StatusCode,
}

impl AccessEntry {
    /// `GET /metrics HTTP/1.1`
    pub fn request_line(&self) -> String {
        format!("{} {} {:?}", self.method, self.target, self.version)
    }

    /// Full access line without trailing newline. Response size is not
    /// tracked, hence the `-`.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] \"{}\" {} -",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.request_line(),
            self.status.as_u16()
        )
    }
}

pub trait AccessLog: Send + Sync {
    fn record(&self, entry: &AccessEntry);
}

/// Line-per-request sink over any writer (stdout in production).
pub struct WriterAccessLog<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterAccessLog<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterAccessLog<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> AccessLog for WriterAccessLog<W> {
    fn record(&self, entry: &AccessEntry) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{}", entry.to_line()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "access log write failed");
        }
    }
}

pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn record(&self, entry: &AccessEntry) {
        tracing::info!(
            method = %entry.method,
            target = %entry.target,
            version = ?entry.version,
            status = entry.status.as_u16(),
            "request"
        );
    }
}

pub struct NullAccessLog;

impl AccessLog for NullAccessLog {
    fn record(&self, _entry: &AccessEntry) {}
}

/// Build the sink selected in config.
pub fn from_mode(mode: AccessLogMode) -> Arc<dyn AccessLog> {
    match mode {
        AccessLogMode::Stdout => Arc::new(WriterAccessLog::stdout()),
        AccessLogMode::Tracing => Arc::new(TracingAccessLog),
        AccessLogMode::Off => Arc::new(NullAccessLog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> AccessEntry {
        AccessEntry {
            at: Local.with_ymd_and_hms(2025, 1, 28, 9, 0, 0).unwrap(),
            method: Method::GET,
            target: "/metrics?debug=1".into(),
            version: Version::HTTP_11,
            status: StatusCode::OK,
        }
    }

    #[test]
    fn formats_classic_access_line() {
        assert_eq!(
            entry().to_line(),
            "[2025-01-28 09:00:00] \"GET /metrics?debug=1 HTTP/1.1\" 200 -"
        );
    }

    #[test]
    fn writer_sink_appends_one_line_per_entry() {
        let sink = WriterAccessLog::new(Vec::new());
        sink.record(&entry());
        sink.record(&AccessEntry {
            status: StatusCode::NOT_FOUND,
            target: "/foo".into(),
            ..entry()
        });
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("\"GET /foo HTTP/1.1\" 404 -"));
    }
}

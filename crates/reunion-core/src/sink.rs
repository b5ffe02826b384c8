//! Persistence sinks for finalized answers.
//!
//! - [`JsonFileSink`] writes one pretty-printed `answers_<millis>.json` per
//!   submission into a directory.
//! - [`HttpSink`] POSTs the payload to a save endpoint.
//! - [`AnswerSink`] picks one of the two at startup.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::payload::SubmissionPayload;

/// Where a payload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReceipt {
    File(PathBuf),
    Endpoint { url: String, status: u16 },
}

impl std::fmt::Display for SaveReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveReceipt::File(path) => write!(f, "{}", path.display()),
            SaveReceipt::Endpoint { url, status } => write!(f, "{} ({})", url, status),
        }
    }
}

/// Destination for a finalized payload.
pub trait PayloadSink {
    fn persist(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = CoreResult<SaveReceipt>> + Send;
}

/// Writes each payload to its own file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a payload written at `millis` since the epoch
    pub fn file_name(millis: i64) -> String {
        format!("answers_{}.json", millis)
    }
}

impl PayloadSink for JsonFileSink {
    async fn persist(&self, payload: &SubmissionPayload) -> CoreResult<SaveReceipt> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let json = payload.to_json_pretty()?;
        let path = self
            .dir
            .join(Self::file_name(chrono::Utc::now().timestamp_millis()));
        tokio::fs::write(&path, json).await?;

        debug!("File saved to {:?}", path);
        Ok(SaveReceipt::File(path))
    }
}

/// POSTs each payload as JSON.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    url: String,
}

impl HttpSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PayloadSink for HttpSink {
    async fn persist(&self, payload: &SubmissionPayload) -> CoreResult<SaveReceipt> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Persistence(format!(
                "save endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        debug!(url = %self.url, %status, "payload posted");
        Ok(SaveReceipt::Endpoint {
            url: self.url.clone(),
            status: status.as_u16(),
        })
    }
}

/// The sink chosen by configuration
#[derive(Debug, Clone)]
pub enum AnswerSink {
    File(JsonFileSink),
    Http(HttpSink),
}

impl PayloadSink for AnswerSink {
    async fn persist(&self, payload: &SubmissionPayload) -> CoreResult<SaveReceipt> {
        match self {
            AnswerSink::File(sink) => sink.persist(payload).await,
            AnswerSink::Http(sink) => sink.persist(payload).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            timestamp: "2026-10-18T09:30:00.000Z".to_string(),
            date_range: Default::default(),
            travelers: vec![],
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(JsonFileSink::file_name(1700000000000), "answers_1700000000000.json");
    }

    #[tokio::test]
    async fn test_file_sink_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path().join("nested").join("answers"));

        let receipt = sink.persist(&payload()).await.unwrap();
        let SaveReceipt::File(path) = receipt else {
            panic!("expected a file receipt");
        };
        assert!(path.starts_with(sink.dir()));

        let written: SubmissionPayload =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, payload());
    }

    #[tokio::test]
    async fn test_http_sink_unreachable_endpoint_errors() {
        // Bind then release an ephemeral port so nothing is listening on it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let sink = HttpSink::new(format!("http://127.0.0.1:{}/save-json", port));
        let err = sink.persist(&payload()).await.unwrap_err();
        assert!(matches!(err, CoreError::Http(_)));
    }

    #[test]
    fn test_receipt_display() {
        let receipt = SaveReceipt::Endpoint {
            url: "http://localhost:3000/save-json".into(),
            status: 200,
        };
        assert_eq!(receipt.to_string(), "http://localhost:3000/save-json (200)");
    }
}

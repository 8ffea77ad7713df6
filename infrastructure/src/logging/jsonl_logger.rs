//! JSONL transcript of answer requests.
//!
//! Each [`AnswerEvent`] becomes one JSON line carrying a `type` and an
//! RFC 3339 `timestamp`. The file is opened in append mode so successive
//! runs accumulate in one transcript.

use askme_application::ports::answer_logger::{AnswerEvent, AnswerLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Answer logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`; flushed after every event.
pub struct JsonlAnswerLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnswerLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; answering proceeds
    /// without a transcript in that case.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create answer log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open answer log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_record(event: AnswerEvent, timestamp: String) -> serde_json::Value {
    match event.payload {
        serde_json::Value::Object(mut map) => {
            map.insert("type".to_string(), event.event_type.into());
            map.insert("timestamp".to_string(), timestamp.into());
            serde_json::Value::Object(map)
        }
        other => serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": other,
        }),
    }
}

impl AnswerLogger for JsonlAnswerLogger {
    fn log(&self, event: AnswerEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&to_record(event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Failed to write answer log {}: {}", self.path.display(), e);
            }
        }
    }
}

//! Realtime counter listener
//!
//! Subscribes to the status document's streaming endpoint
//! (`text/event-stream`) and turns the server's `put`/`patch` events into
//! full replacement snapshots. The stream stays open for the lifetime of
//! one dashboard visit; teardown happens by dropping the stream when the
//! owning task is cancelled.

use thiserror::Error;

use crate::config::{RemoteConfig, Timeouts};

use super::CounterSnapshot;

/// Errors from the counter subscription
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("stream rejected with HTTP {0}")]
    Status(u16),

    #[error("subscription cancelled by the server")]
    Revoked,

    #[error("malformed stream payload: {0}")]
    Payload(String),
}

/// Factory for one streaming subscription to the status document
pub struct CounterListener {
    client: reqwest::Client,
    url: String,
}

impl CounterListener {
    pub fn new(remote: &RemoteConfig, timeouts: &Timeouts) -> Result<Self, ListenerError> {
        // Only the connection setup gets a deadline; the stream itself is
        // expected to stay open indefinitely.
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.listener_connect)
            .build()?;

        Ok(Self {
            client,
            url: remote.stream_url(),
        })
    }

    /// Open the subscription. Exactly one stream per dashboard visit.
    pub async fn subscribe(self) -> Result<CounterStream, ListenerError> {
        tracing::info!(url = %self.url, "Opening counter stream");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "text/event-stream")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListenerError::Status(status.as_u16()));
        }

        Ok(CounterStream {
            response,
            buffer: String::new(),
            snapshot: CounterSnapshot::default(),
        })
    }
}

/// An open subscription yielding counter snapshots as the server pushes
/// changes
pub struct CounterStream {
    response: reqwest::Response,
    buffer: String,
    snapshot: CounterSnapshot,
}

impl CounterStream {
    /// Wait for the next change and return the resulting full snapshot.
    /// `Ok(None)` means the server closed the stream.
    pub async fn next_snapshot(&mut self) -> Result<Option<CounterSnapshot>, ListenerError> {
        loop {
            // Drain complete frames already buffered
            while let Some(pos) = self.buffer.find("\n\n") {
                let frame: String = self.buffer.drain(..pos + 2).collect();
                if let Some(event) = parse_frame(&frame) {
                    if apply_event(&mut self.snapshot, &event)? {
                        return Ok(Some(self.snapshot));
                    }
                }
            }

            match self.response.chunk().await? {
                // Payloads are JSON; stripping carriage returns normalizes
                // CRLF frame separators without touching the data.
                Some(chunk) => self
                    .buffer
                    .push_str(&String::from_utf8_lossy(&chunk).replace('\r', "")),
                None => return Ok(None),
            }
        }
    }
}

/// One parsed server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
struct SseEvent {
    name: String,
    data: String,
}

/// Parse a single frame (the text between blank lines) into an event
fn parse_frame(frame: &str) -> Option<SseEvent> {
    let mut name: Option<String> = None;
    let mut data_lines: Vec<&str> = Vec::new();

    for line in frame.lines() {
        if line.starts_with(':') {
            continue;
        }
        if let Some(value) = line.strip_prefix("event:") {
            name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("data:") {
            data_lines.push(value.strip_prefix(' ').unwrap_or(value));
        }
    }

    if name.is_none() && data_lines.is_empty() {
        return None;
    }

    Some(SseEvent {
        name: name.unwrap_or_else(|| "message".to_string()),
        data: data_lines.join("\n"),
    })
}

/// Body of a `put`/`patch` event: a path into the document plus the value
/// written there
#[derive(Debug, serde::Deserialize)]
struct StreamUpdate {
    path: String,
    data: serde_json::Value,
}

/// Fold one event into the running snapshot. Returns true when the
/// snapshot changed and should be republished.
fn apply_event(snapshot: &mut CounterSnapshot, event: &SseEvent) -> Result<bool, ListenerError> {
    match event.name.as_str() {
        "put" | "patch" => {
            let update: StreamUpdate = serde_json::from_str(&event.data)
                .map_err(|e| ListenerError::Payload(e.to_string()))?;
            apply_update(snapshot, event.name == "put", &update)
        }
        "keep-alive" => Ok(false),
        "cancel" | "auth_revoked" => Err(ListenerError::Revoked),
        _ => Ok(false),
    }
}

fn apply_update(
    snapshot: &mut CounterSnapshot,
    replace: bool,
    update: &StreamUpdate,
) -> Result<bool, ListenerError> {
    match update.path.trim_end_matches('/') {
        // Whole-document write: replace the snapshot wholesale
        "" => {
            if update.data.is_null() {
                *snapshot = CounterSnapshot::default();
                return Ok(true);
            }
            if replace {
                *snapshot = serde_json::from_value(update.data.clone())
                    .map_err(|e| ListenerError::Payload(e.to_string()))?;
                return Ok(true);
            }
            // A patch merges only the fields present
            let fields = update
                .data
                .as_object()
                .ok_or_else(|| ListenerError::Payload("patch data is not an object".to_string()))?;
            let mut changed = false;
            for (field, value) in fields {
                changed |= set_field(snapshot, field, value)?;
            }
            Ok(changed)
        }
        // Single-field write
        path => {
            let field = path.trim_start_matches('/');
            set_field(snapshot, field, &update.data)
        }
    }
}

fn set_field(
    snapshot: &mut CounterSnapshot,
    field: &str,
    value: &serde_json::Value,
) -> Result<bool, ListenerError> {
    let slot = match field {
        "entries" => &mut snapshot.entries,
        "exits" => &mut snapshot.exits,
        "inside" => &mut snapshot.inside,
        // The status document may grow fields this client does not show
        _ => return Ok(false),
    };

    let count = value
        .as_u64()
        .ok_or_else(|| ListenerError::Payload(format!("{field} is not a non-negative integer")))?;
    *slot = count;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, data: &str) -> SseEvent {
        SseEvent {
            name: name.to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_parse_frame_event_and_data() {
        let frame = "event: put\ndata: {\"path\":\"/\",\"data\":null}\n";
        let parsed = parse_frame(frame).unwrap();
        assert_eq!(parsed.name, "put");
        assert_eq!(parsed.data, "{\"path\":\"/\",\"data\":null}");
    }

    #[test]
    fn test_parse_frame_multiline_data_and_comments() {
        let frame = ": heartbeat\nevent: put\ndata: {\"path\":\"/\",\ndata: \"data\":null}";
        let parsed = parse_frame(frame).unwrap();
        assert_eq!(parsed.data, "{\"path\":\"/\",\n\"data\":null}");
    }

    #[test]
    fn test_parse_frame_empty() {
        assert_eq!(parse_frame("\n"), None);
        assert_eq!(parse_frame(": just a comment\n"), None);
    }

    #[test]
    fn test_put_root_replaces_wholesale() {
        let mut snap = CounterSnapshot {
            entries: 99,
            exits: 99,
            inside: 99,
        };
        let changed = apply_event(
            &mut snap,
            &event("put", r#"{"path":"/","data":{"entries":5,"exits":2,"inside":3}}"#),
        )
        .unwrap();
        assert!(changed);
        assert_eq!(
            snap,
            CounterSnapshot {
                entries: 5,
                exits: 2,
                inside: 3
            }
        );

        // Missing fields reset to zero: a replacement, not a merge
        apply_event(&mut snap, &event("put", r#"{"path":"/","data":{"entries":7}}"#)).unwrap();
        assert_eq!(
            snap,
            CounterSnapshot {
                entries: 7,
                exits: 0,
                inside: 0
            }
        );
    }

    #[test]
    fn test_put_single_field() {
        let mut snap = CounterSnapshot {
            entries: 5,
            exits: 2,
            inside: 3,
        };
        let changed =
            apply_event(&mut snap, &event("put", r#"{"path":"/entries","data":7}"#)).unwrap();
        assert!(changed);
        assert_eq!(snap.entries, 7);
        assert_eq!(snap.inside, 3);
    }

    #[test]
    fn test_patch_merges_fields() {
        let mut snap = CounterSnapshot {
            entries: 5,
            exits: 2,
            inside: 3,
        };
        let changed = apply_event(
            &mut snap,
            &event("patch", r#"{"path":"/","data":{"entries":7,"inside":5}}"#),
        )
        .unwrap();
        assert!(changed);
        assert_eq!(
            snap,
            CounterSnapshot {
                entries: 7,
                exits: 2,
                inside: 5
            }
        );
    }

    #[test]
    fn test_keep_alive_and_unknown_fields_ignored() {
        let mut snap = CounterSnapshot::default();
        assert!(!apply_event(&mut snap, &event("keep-alive", "null")).unwrap());
        assert!(
            !apply_event(&mut snap, &event("put", r#"{"path":"/camera_id","data":4}"#)).unwrap()
        );
        assert_eq!(snap, CounterSnapshot::default());
    }

    #[test]
    fn test_cancel_is_revoked() {
        let mut snap = CounterSnapshot::default();
        assert!(matches!(
            apply_event(&mut snap, &event("cancel", "null")),
            Err(ListenerError::Revoked)
        ));
    }

    #[test]
    fn test_put_null_clears_document() {
        let mut snap = CounterSnapshot {
            entries: 5,
            exits: 2,
            inside: 3,
        };
        assert!(apply_event(&mut snap, &event("put", r#"{"path":"/","data":null}"#)).unwrap());
        assert_eq!(snap, CounterSnapshot::default());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let mut snap = CounterSnapshot::default();
        let result = apply_event(&mut snap, &event("put", r#"{"path":"/entries","data":-3}"#));
        assert!(matches!(result, Err(ListenerError::Payload(_))));
    }
}

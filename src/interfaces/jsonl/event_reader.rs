use crate::domain::message::{MessageEvent, RawEvent};
use crate::error::Result;
use std::io::BufRead;

/// Reads one message event per line of JSON.
///
/// Blank lines, lines that are not valid UTF-8 or do not parse as an event
/// object, and objects without a body are all liveness probes. Only I/O
/// failures are errors.
pub struct EventReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn events(self) -> impl Iterator<Item = Result<MessageEvent>> {
        self.source
            .split(b'\n')
            .enumerate()
            .map(|(idx, line)| -> Result<MessageEvent> { Ok(classify(idx + 1, &line?)) })
    }
}

fn classify(line_no: usize, bytes: &[u8]) -> MessageEvent {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = match std::str::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("Line {}: undecodable event treated as probe: {}", line_no, e);
            return MessageEvent::Probe;
        }
    };

    if line.trim().is_empty() {
        return MessageEvent::Probe;
    }

    match serde_json::from_str::<RawEvent>(line) {
        Ok(raw) => raw.into_event(),
        Err(e) => {
            log::warn!("Line {}: malformed event treated as probe: {}", line_no, e);
            MessageEvent::Probe
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::IncomingMessage;

    #[test]
    fn test_reader_valid_stream() {
        let data = r#"{"conversation_id":"c-1","message":"click the link"}
{"conversation_id":"c-1","message":"ok","timestamp":"2024-01-01T00:00:10Z"}"#;
        let results: Vec<MessageEvent> = EventReader::new(data.as_bytes())
            .events()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(
            results,
            vec![
                MessageEvent::Evaluate(IncomingMessage::new("c-1", "click the link")),
                MessageEvent::Evaluate(
                    IncomingMessage::new("c-1", "ok").with_timestamp("2024-01-01T00:00:10Z")
                ),
            ]
        );
    }

    #[test]
    fn test_probe_lines() {
        let data = "\n{}\nnot json\n{\"conversation_id\":\"c-1\"}\n[1,2]\n";
        let results: Vec<MessageEvent> = EventReader::new(data.as_bytes())
            .events()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|e| *e == MessageEvent::Probe));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_the_stream() {
        let data: &[u8] = b"{\"conversation_id\":\"c\",\"message\":\"hi\"}\n\
\xff\xfe garbage\r\n\
{\"conversation_id\":\"c\",\"message\":\"again\"}\n";
        let results: Vec<MessageEvent> = EventReader::new(data)
            .events()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(
            results,
            vec![
                MessageEvent::Evaluate(IncomingMessage::new("c", "hi")),
                MessageEvent::Probe,
                MessageEvent::Evaluate(IncomingMessage::new("c", "again")),
            ]
        );
    }
}

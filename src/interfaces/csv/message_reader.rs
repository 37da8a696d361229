use crate::domain::message::{MessageEvent, RawEvent};
use crate::error::{HoneypotError, Result};
use std::io::Read;

/// Reads message events from a CSV source.
///
/// Expects the headers `conversation_id,message,timestamp`. Rows missing a
/// conversation id or message body, and rows that cannot be decoded, become
/// [`MessageEvent::Probe`]. Only I/O failures are errors.
pub struct MessageReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MessageReader<R> {
    /// Creates a new `MessageReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and classifies events.
    pub fn events(self) -> impl Iterator<Item = Result<MessageEvent>> {
        self.reader
            .into_deserialize::<RawEvent>()
            .map(|result| match result {
                Ok(raw) => Ok(raw.into_event()),
                Err(e) if is_undecodable_record(&e) => {
                    log::warn!("Undecodable record treated as probe: {}", e);
                    Ok(MessageEvent::Probe)
                }
                Err(e) => Err(HoneypotError::from(e)),
            })
    }
}

fn is_undecodable_record(e: &csv::Error) -> bool {
    matches!(
        e.kind(),
        csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::Deserialize { .. }
    )
}

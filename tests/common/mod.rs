#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use scam_honeypot::application::engine::EngagementEngine;
use scam_honeypot::config::EngineConfig;
use scam_honeypot::infrastructure::in_memory::InMemoryConversationStore;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const SCAM_LINES: &[&str] = &[
    "Your bank account is suspended",
    "URGENT: verify your KYC",
    "share the OTP you received",
    "click this link to unblock",
    "send payment to help.desk@okicici",
    "deposit into 555566667777 today",
    "visit http://secure-upi.example now",
];

pub const BENIGN_LINES: &[&str] = &[
    "hello",
    "who is this?",
    "good morning",
    "I am at work right now",
];

pub fn engine() -> EngagementEngine {
    EngagementEngine::new(
        Box::new(InMemoryConversationStore::new()),
        EngineConfig::default(),
    )
    .expect("engine should build with default config")
}

/// A reproducible mix of scam and benign lines.
pub fn random_messages(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let pool = if rng.gen_bool(0.5) {
                SCAM_LINES
            } else {
                BENIGN_LINES
            };
            pool.choose(&mut rng)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Writes `rows` of (conversation_id, message) to a temporary CSV file.
pub fn write_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(["conversation_id", "message", "timestamp"])?;
        for (id, message) in rows {
            wtr.write_record([*id, *message, ""])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}

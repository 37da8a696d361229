use crate::domain::intelligence::Extraction;
use crate::error::Result;
use regex::Regex;
use std::collections::BTreeSet;

const HANDLE_PATTERN: &str = r"[A-Za-z0-9._-]{2,}@[A-Za-z]{2,}(?:\.[A-Za-z]{2,})*";
const URL_PATTERN: &str = r"https?://\S+";
const BANK_ACCOUNT_PATTERN: &str = r"\b\d{9,18}\b";

/// Pulls payment handles, bank account numbers and URLs out of free text.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    handle: Regex,
    url: Regex,
    bank_account: Option<Regex>,
}

impl EntityExtractor {
    /// Compiles the patterns. When `bank_accounts` is false that category
    /// always comes back empty.
    pub fn new(bank_accounts: bool) -> Result<Self> {
        let bank_account = if bank_accounts {
            Some(Regex::new(BANK_ACCOUNT_PATTERN)?)
        } else {
            None
        };

        Ok(Self {
            handle: Regex::new(HANDLE_PATTERN)?,
            url: Regex::new(URL_PATTERN)?,
            bank_account,
        })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        Extraction {
            handles: matches(&self.handle, text),
            bank_accounts: self
                .bank_account
                .as_ref()
                .map(|re| matches(re, text))
                .unwrap_or_default(),
            urls: matches(&self.url, text),
        }
    }
}

fn matches(re: &Regex, text: &str) -> BTreeSet<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

use super::score::Score;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// The categories of evidence the extractor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceKind {
    PaymentHandle,
    BankAccount,
    PhishingUrl,
}

impl EvidenceKind {
    /// Fixed confidence attached to every value of this category.
    pub fn weight(self) -> Score {
        let value = match self {
            EvidenceKind::PaymentHandle => Decimal::new(90, 2),
            EvidenceKind::BankAccount => Decimal::new(85, 2),
            EvidenceKind::PhishingUrl => Decimal::new(95, 2),
        };
        Score::clamped(value)
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Evidence {
    pub value: String,
    pub confidence: Score,
}

impl Evidence {
    pub fn new(kind: EvidenceKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            confidence: kind.weight(),
        }
    }
}

/// Raw, deduplicated matches from a single extraction call.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Extraction {
    pub handles: BTreeSet<String>,
    pub bank_accounts: BTreeSet<String>,
    pub urls: BTreeSet<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty() && self.bank_accounts.is_empty() && self.urls.is_empty()
    }

    /// Folds another extraction into this one, keeping set semantics.
    pub fn merge(&mut self, other: Extraction) {
        self.handles.extend(other.handles);
        self.bank_accounts.extend(other.bank_accounts);
        self.urls.extend(other.urls);
    }
}

/// Evidence gathered for one message.
///
/// Built fresh per turn; nothing from earlier turns is carried over.
#[derive(Debug, Default, Serialize, PartialEq, Clone)]
pub struct Intelligence {
    pub upi_ids: Vec<Evidence>,
    pub bank_accounts: Vec<Evidence>,
    pub phishing_urls: Vec<Evidence>,
}

impl Intelligence {
    pub fn is_empty(&self) -> bool {
        self.upi_ids.is_empty() && self.bank_accounts.is_empty() && self.phishing_urls.is_empty()
    }
}

impl From<Extraction> for Intelligence {
    fn from(extraction: Extraction) -> Self {
        let attach = |kind: EvidenceKind, values: BTreeSet<String>| {
            values
                .into_iter()
                .map(|v| Evidence::new(kind, v))
                .collect::<Vec<_>>()
        };

        Self {
            upi_ids: attach(EvidenceKind::PaymentHandle, extraction.handles),
            bank_accounts: attach(EvidenceKind::BankAccount, extraction.bank_accounts),
            phishing_urls: attach(EvidenceKind::PhishingUrl, extraction.urls),
        }
    }
}

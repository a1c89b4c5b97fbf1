use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Address,
    Domain,
}

impl EntityKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            EntityKind::Address => "address",
            EntityKind::Domain => "domain",
        }
    }

    /// The kind listed on the other side of an association.
    pub fn counterpart(&self) -> EntityKind {
        match self {
            EntityKind::Address => EntityKind::Domain,
            EntityKind::Domain => EntityKind::Address,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Outcome of checking one address or domain against the scam store.
///
/// `subject` is the key that was actually looked up: the address verbatim, or
/// the normalized domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub kind: EntityKind,
    pub is_flagged: bool,
    pub subject: String,
    pub associated: Vec<String>,
}

impl LookupResult {
    pub fn flagged(kind: EntityKind, subject: String, associated: Vec<String>) -> Self {
        Self {
            kind,
            is_flagged: true,
            subject,
            associated,
        }
    }

    pub fn clear(kind: EntityKind, subject: String) -> Self {
        Self {
            kind,
            is_flagged: false,
            subject,
            associated: Vec::new(),
        }
    }

    pub fn has_associations(&self) -> bool {
        !self.associated.is_empty()
    }
}

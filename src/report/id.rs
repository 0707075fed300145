//! Report file identifiers.

use std::fmt;

use crate::error::{OsfLinterError, Result};

/// A random (version 4) UUID naming one report file.
///
/// Format: `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportId([u8; 16]);

impl ReportId {
    /// Generate a fresh identifier.
    pub fn new() -> Result<Self> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes).map_err(|e| {
            OsfLinterError::Other(anyhow::anyhow!("Failed to generate report id: {}", e))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Build an identifier from raw bytes, setting the version and variant bits.
    pub fn from_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Parse the hyphenated form.
    pub fn parse(s: &str) -> Option<Self> {
        let groups: Vec<&str> = s.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        if lengths != [8, 4, 4, 4, 12] {
            return None;
        }

        let raw = hex::decode(groups.concat()).ok()?;
        let bytes: [u8; 16] = raw.try_into().ok()?;
        let id = Self::from_bytes(bytes);
        (id.0 == bytes).then_some(id)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16])
        )
    }
}

//! Identifier generation for collections.
//!
//! Two sequential policies coexist across entity kinds: most collections
//! increment the numeric tail of the last stored identifier, a few derive
//! the next id from the record count. Which policy applies is a constant on
//! the owning repository, not something inferred from the data. A third,
//! non-sequential shape (`comment_<epoch millis>`) is covered by
//! [`timestamp_id`].

use crate::error::{Result, VaultError};
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Parse the last stored id's numeric tail and increment it.
    LastIdIncrement,
    /// `count + 1`, ignoring stored ids entirely.
    CountBased,
}

/// The identifier shape of one collection: a fixed prefix followed by a
/// zero-padded sequence number, e.g. `CR001`.
#[derive(Debug, Clone, Copy)]
pub struct IdScheme {
    pub prefix: &'static str,
    pub width: usize,
    pub policy: IdPolicy,
}

impl IdScheme {
    pub const fn new(prefix: &'static str, width: usize, policy: IdPolicy) -> Self {
        Self {
            prefix,
            width,
            policy,
        }
    }

    /// Next identifier given the collection's last stored id and its record
    /// count. An empty collection always yields `prefix + 0..01`.
    pub fn next(&self, last_id: Option<&str>, count: usize) -> Result<String> {
        match self.policy {
            IdPolicy::CountBased => Ok(self.format(count as u64 + 1)),
            IdPolicy::LastIdIncrement => match last_id {
                None => Ok(self.format(1)),
                Some(id) => Ok(self.format(self.parse(id)? + 1)),
            },
        }
    }

    pub fn format(&self, seq: u64) -> String {
        format!("{}{:0width$}", self.prefix, seq, width = self.width)
    }

    /// Parse a stored identifier back to its sequence number. A stored id
    /// that does not match `prefix + digits` is a data defect the caller
    /// must handle, not a panic.
    pub fn parse(&self, id: &str) -> Result<u64> {
        id.strip_prefix(self.prefix)
            .and_then(|digits| digits.parse::<u64>().ok())
            .ok_or_else(|| VaultError::MalformedId {
                prefix: self.prefix.to_string(),
                id: id.to_string(),
            })
    }
}

/// Epoch-millisecond identifier, e.g. `comment_1700000000000`.
pub fn timestamp_id(prefix: &str) -> String {
    format!("{}{}", prefix, Utc::now().timestamp_millis())
}

/// Next id derived from the maximum parseable suffix among existing ids,
/// skipping malformed ones. Used by share records, whose history may contain
/// hand-authored ids.
pub fn max_scan_next<'a, I>(prefix: &str, width: usize, ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|digits| digits.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:0width$}", prefix, max + 1, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CR: IdScheme = IdScheme::new("CR", 3, IdPolicy::LastIdIncrement);
    const PSR: IdScheme = IdScheme::new("PSR", 3, IdPolicy::CountBased);

    #[test]
    fn test_empty_collection_starts_at_001() {
        assert_eq!(CR.next(None, 0).unwrap(), "CR001");
        assert_eq!(PSR.next(None, 0).unwrap(), "PSR001");
    }

    #[test]
    fn test_last_id_increment_is_monotonic() {
        let first = CR.next(None, 0).unwrap();
        let second = CR.next(Some(&first), 1).unwrap();
        let third = CR.next(Some(&second), 2).unwrap();
        assert_eq!([first, second, third], ["CR001", "CR002", "CR003"]);
    }

    #[test]
    fn test_count_based_ignores_last_id() {
        assert_eq!(PSR.next(Some("PSR007"), 2).unwrap(), "PSR003");
    }

    #[test]
    fn test_width_grows_past_padding() {
        assert_eq!(CR.next(Some("CR999"), 999).unwrap(), "CR1000");
    }

    #[test]
    fn test_malformed_stored_id_is_an_error() {
        let err = CR.next(Some("bogus"), 1).unwrap_err();
        assert!(matches!(
            err,
            crate::error::VaultError::MalformedId { .. }
        ));
    }

    #[test]
    fn test_timestamp_id_prefix() {
        let id = timestamp_id("comment_");
        assert!(id.starts_with("comment_"));
        assert!(id["comment_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_max_scan_skips_malformed() {
        let ids = ["share_002", "garbage", "share_005", "share_x"];
        assert_eq!(max_scan_next("share_", 3, ids), "share_006");
    }

    #[test]
    fn test_max_scan_empty() {
        assert_eq!(max_scan_next("share_", 3, []), "share_001");
    }
}

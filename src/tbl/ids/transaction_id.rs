use std::fmt;

use chrono::{DateTime, Utc};

/// Identifier derived from the creation time of a transaction, in Unix milliseconds.
///
/// Ids handed out by a single ledger are strictly increasing: when two transactions are
/// created within the same millisecond, the later one takes the previous id plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn next(timestamp: &DateTime<Utc>, previous: Option<TransactionId>) -> Self {
        let millis = timestamp.timestamp_millis().max(0) as u64;

        return match previous {
            Some(TransactionId(prev)) if prev >= millis => Self(prev + 1),
            _ => Self(millis),
        };
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn derived_from_timestamp() {
        let timestamp = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        assert_eq!(
            TransactionId::next(&timestamp, None),
            TransactionId(1_700_000_000_123)
        );
    }

    #[test]
    fn bumped_past_previous_id() {
        let timestamp = Utc.timestamp_millis_opt(1_000).unwrap();

        assert_eq!(
            TransactionId::next(&timestamp, Some(TransactionId(1_000))),
            TransactionId(1_001)
        );
        assert_eq!(
            TransactionId::next(&timestamp, Some(TransactionId(5_000))),
            TransactionId(5_001)
        );
        assert_eq!(
            TransactionId::next(&timestamp, Some(TransactionId(999))),
            TransactionId(1_000)
        );
    }
}

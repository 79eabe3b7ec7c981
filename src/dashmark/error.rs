use crate::store::Slot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashmarkError {
    /// Text handed to the codec is not an acceptable snapshot.
    #[error("Invalid bookmark data: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage quota exceeded for {slot} slot: {size} bytes (limit {limit})")]
    QuotaExceeded { slot: Slot, size: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DashmarkError {
    /// True for failures raised while writing a slot.
    ///
    /// The in-memory state already reflects the mutation when one of these
    /// comes back from a store operation.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            DashmarkError::QuotaExceeded { .. } | DashmarkError::Io(_) | DashmarkError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DashmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_persistence_failures() {
        let quota = DashmarkError::QuotaExceeded {
            slot: Slot::Primary,
            size: 10,
            limit: 5,
        };
        assert!(quota.is_persistence_failure());
        assert!(DashmarkError::Store("disk gone".into()).is_persistence_failure());
        assert!(!DashmarkError::Validation("nope".into()).is_persistence_failure());
        assert!(!DashmarkError::NotFound("cat".into()).is_persistence_failure());
    }

    #[test]
    fn quota_message_names_the_slot() {
        let err = DashmarkError::QuotaExceeded {
            slot: Slot::Backup,
            size: 12,
            limit: 4,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded for backup slot: 12 bytes (limit 4)"
        );
    }
}

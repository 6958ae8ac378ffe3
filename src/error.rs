use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The handle's generation no longer matches its slot, or the handle was
    /// never issued by this storage.
    #[error("stale {category} handle (id: {id}, gen: {generation})")]
    StaleHandle {
        category: &'static str,
        id: u16,
        generation: u16,
    },
    /// Every 16-bit slot id is in use or retired.
    #[error("ran out of {category} slots ({slots} allocated)")]
    OutOfSlots { category: &'static str, slots: usize },
}

impl StorageError {
    pub fn is_stale(&self) -> bool {
        matches!(self, StorageError::StaleHandle { .. })
    }
}

/// Convenient crate-wide result type.
pub type Result<T, E = StorageError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_category() {
        let err = StorageError::StaleHandle {
            category: "Framebuffer",
            id: 2,
            generation: 1,
        };
        assert_eq!(err.to_string(), "stale Framebuffer handle (id: 2, gen: 1)");
        assert!(err.is_stale());

        let err = StorageError::OutOfSlots {
            category: "Image",
            slots: 65536,
        };
        assert_eq!(err.to_string(), "ran out of Image slots (65536 allocated)");
        assert!(!err.is_stale());
    }
}

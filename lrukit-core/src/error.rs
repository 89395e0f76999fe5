use thiserror::Error;

/// Errors produced by the cache.
///
/// Only construction can fail. Lookups report absence through `Option`,
/// never through this type.
///
/// # Examples
///
/// ```
/// use lrukit_core::{CacheError, LruCache};
///
/// let err = LruCache::<u32, u32>::new(0).unwrap_err();
/// assert_eq!(err, CacheError::InvalidArgument { capacity: 0 });
/// assert_eq!(
///     err.to_string(),
///     "invalid argument: cache capacity must be at least 1, got 0"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The requested capacity was below the minimum of one entry.
    #[error("invalid argument: cache capacity must be at least 1, got {capacity}")]
    InvalidArgument { capacity: usize },
}

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_capacity() {
        let err = CacheError::InvalidArgument { capacity: 0 };
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CacheError::InvalidArgument { capacity: 0 });
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_full_message() {
        let err = CacheError::InvalidArgument { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid argument: cache capacity must be at least 1, got 0"
        );
    }
}

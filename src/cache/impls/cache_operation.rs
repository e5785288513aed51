use std::fmt;
use crate::cache::enums::cache_operation::CacheOperation;

impl fmt::Display for CacheOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheOperation::Read => write!(f, "read"),
            CacheOperation::Write => write!(f, "write"),
            CacheOperation::Invalidate => write!(f, "invalidate"),
            CacheOperation::Decode => write!(f, "decode"),
        }
    }
}

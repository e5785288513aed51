use chrono::{DateTime, Utc};
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub expires_at: Option<DateTime<Utc>>,
    pub payload: Vec<u8>,
}

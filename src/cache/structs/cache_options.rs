#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    pub prefix: String,
    pub ttl: Option<u64>,
}

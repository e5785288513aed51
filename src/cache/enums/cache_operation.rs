#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    Read,
    Write,
    Invalidate,
    Decode,
}

use sentry::{
    Transaction,
    TransactionContext
};

/// Starts a transaction when trace logging is enabled, `None` otherwise.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

use crate::websocket::errors::ClusterError;
use sentry::{
    Transaction,
    TransactionContext
};

/// Starts a Sentry transaction when trace logging is enabled.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

pub fn finish_trace_transaction<T>(transaction: Option<Transaction>, result: &Result<T, ClusterError>) {
    if let Some(txn) = transaction {
        match result {
            Ok(_) => txn.set_tag("result", "success"),
            Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
        }
        txn.finish();
    }
}

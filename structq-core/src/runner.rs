//! Query runner: fetch every MyComplexStruct with its relations, dump it,
//! release the connection.
//!
//! The store is closed after the query and output, on the success path and
//! on the error path alike.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::render::{write_records, OutputFormat};
use crate::store::Store;
use crate::Result;

/// Summary of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub records: usize,
}

/// Run the query against `store`, write the result set to `out`, then close
/// the store.
///
/// The first error wins: a query or write failure is returned even if
/// closing also fails afterwards.
pub async fn run<S, W>(store: S, out: &mut W, format: OutputFormat) -> Result<RunReport>
where
    S: Store,
    W: Write,
{
    let outcome = query_and_write(&store, out, format).await;
    let closed = store.close().await;

    let report = settle(outcome, closed)?;
    info!(records = report.records, "Query complete");
    Ok(report)
}

/// Combine the result of work done on a handle with the result of closing
/// it. The work's error wins; a close error after a failure is only logged.
pub fn settle<T>(outcome: Result<T>, closed: Result<()>) -> Result<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!("Failed to close connection after error: {}", close_err);
            Err(err)
        }
    }
}

async fn query_and_write<S, W>(store: &S, out: &mut W, format: OutputFormat) -> Result<RunReport>
where
    S: Store,
    W: Write,
{
    let records = store.find_many_complex_structs().await?;
    debug!(records = records.len(), %format, "Writing result set");

    write_records(&records, format, out)?;

    Ok(RunReport {
        records: records.len(),
    })
}

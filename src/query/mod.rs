//! The query dispatcher: serializes the current filter selection into a
//! request payload, sends it to the remote index, and publishes the latest
//! result set (or a pending/failed state) to the rendering layer.

mod client;
mod dispatcher;
mod error;
mod payload;

pub use client::SearchClient;
pub use dispatcher::{QueryDispatcher, QueryEvent, QueryPhase};
pub use error::QueryError;
pub use payload::{FilterPayload, QueryRequest};

//! Pagination strategies
//!
//! The page iterator's continuation logic. A page token is an opaque value
//! extracted from one response and echoed back on the next request; its
//! absence ends the stream. An empty page is always terminal, even when a
//! token is technically present, so a misbehaving upstream can never cause
//! an infinite loop.

mod strategies;
mod types;

pub use strategies::{CursorPaginator, NoPaginator};
pub use types::{NextPage, PaginationConfig, PaginationState, Paginator};

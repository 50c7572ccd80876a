//! Pagination strategy implementations

use super::types::{extract_path_string, NextPage, PaginationState, Paginator};
use crate::types::JsonValue;
use std::collections::HashMap;

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination
///
/// Echoes an opaque token from each response back as a query parameter on
/// the next request. Stops when the token is absent or empty, or when a
/// page carries no records. The empty-page check runs first: a token on an
/// empty page is ignored rather than followed.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for the token
    pub cursor_param: String,
    /// Dot-notation path to the token in the response body
    pub cursor_path: String,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: impl Into<String>, cursor_path: impl Into<String>) -> Self {
        Self {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
        }
    }
}

impl Paginator for CursorPaginator {
    fn initial_params(&self, state: &PaginationState) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(cursor) = &state.cursor {
            params.insert(self.cursor_param.clone(), cursor.clone());
        }
        params
    }

    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        match extract_path_string(body, &self.cursor_path) {
            Some(cursor) if !cursor.is_empty() => {
                state.set_cursor(cursor.clone());
                state.next_page();
                NextPage::with_param(&self.cursor_param, cursor)
            }
            _ => {
                state.mark_done();
                NextPage::Done
            }
        }
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// No pagination - single request
#[derive(Debug, Clone, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn initial_params(&self, _state: &PaginationState) -> HashMap<String, String> {
        HashMap::new()
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);
        state.mark_done();
        NextPage::Done
    }
}

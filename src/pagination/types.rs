//! Pagination types and traits

use crate::types::JsonValue;
use std::collections::HashMap;

/// Result of the next page computation
#[derive(Debug, Clone)]
pub enum NextPage {
    /// More pages available with these query parameters
    Continue {
        /// Query parameters to add/replace
        query_params: HashMap<String, String>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a single parameter
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert(key.into(), value.into());
        Self::Continue {
            query_params: params,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Configuration for pagination behavior, fixed per stream
#[derive(Debug, Clone, Default)]
pub enum PaginationConfig {
    /// Single request, no continuation (the HiBob people endpoint)
    #[default]
    None,

    /// Opaque continuation token extracted from each response
    Cursor {
        /// Query parameter name for the token
        cursor_param: String,
        /// Dot-notation path to the token in the response body
        cursor_path: String,
    },
}

impl PaginationConfig {
    /// Create cursor pagination config
    pub fn cursor(cursor_param: impl Into<String>, cursor_path: impl Into<String>) -> Self {
        Self::Cursor {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
        }
    }

    /// Build the paginator for this configuration
    pub fn build(&self) -> Box<dyn Paginator> {
        match self {
            PaginationConfig::None => Box::new(super::NoPaginator),
            PaginationConfig::Cursor {
                cursor_param,
                cursor_path,
            } => Box::new(super::CursorPaginator::new(cursor_param, cursor_path)),
        }
    }
}

/// Tracks pagination state during iteration
///
/// Owned solely by one sync pass; never shared.
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub page: u32,
    /// Current continuation token
    pub cursor: Option<String>,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page count
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Set the continuation token
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the next request, given the current state
    fn initial_params(&self, state: &PaginationState) -> HashMap<String, String>;

    /// Process a response and determine if there's a next page
    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage;
}

/// Extract a string-convertible value from a dot-notation path
pub(crate) fn extract_path_string(value: &JsonValue, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }

    match current {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

//! Wire models of the WaniKani v2 collection endpoints

use crate::domain::Record;
use serde::Deserialize;

/// One page of a collection response
///
/// Both `data` and `pages` are required; a body lacking either is not a
/// page and fails to deserialize.
#[derive(Debug, Deserialize)]
pub struct Page {
    /// Records on this page, in server order
    pub data: Vec<Record>,

    /// Pagination pointers
    pub pages: Pagination,
}

/// Pagination block of a collection response
#[derive(Debug, Deserialize)]
pub struct Pagination {
    /// Location of the next page; `null` on the last page
    pub next_url: Option<String>,
}

//! Cursor pagination past the search page-size cap.
//!
//! The first request carries no cursor; each later request passes the
//! identifier of the last record received as `after_id`. Records accumulate
//! in one append-only vector until the unique count reaches the total the
//! counting call reported.

use std::collections::HashSet;
use std::future::Future;

use crate::error::CrunchbaseError;
use crate::wire::Entity;

/// Records with an identifier usable as an `after_id` cursor.
pub trait Cursor {
    fn cursor_id(&self) -> &str;
}

impl<P> Cursor for Entity<P> {
    fn cursor_id(&self) -> &str {
        &self.uuid
    }
}

/// Result of a finished pagination run.
#[derive(Debug)]
pub struct Paged<T> {
    pub records: Vec<T>,
    /// Page requests issued.
    pub pages: u32,
}

/// Fetch pages until `expected` unique records have been collected.
///
/// `fetch` receives the cursor for the next page. Records whose identifier
/// was already seen are skipped.
///
/// # Errors
///
/// - whatever `fetch` returns, unchanged;
/// - [`CrunchbaseError::NoProgress`] when a page adds no new record before
///   the total is reached;
/// - [`CrunchbaseError::PageLimit`] when `max_pages` requests were not enough.
pub async fn paginate<T, F, Fut>(
    collection: &str,
    expected: u64,
    max_pages: u32,
    mut fetch: F,
) -> Result<Paged<T>, CrunchbaseError>
where
    T: Cursor,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, CrunchbaseError>>,
{
    let mut records: Vec<T> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut cursor: Option<String> = None;
    let mut pages: u32 = 0;

    while (records.len() as u64) < expected {
        if pages >= max_pages {
            return Err(CrunchbaseError::PageLimit {
                collection: collection.to_string(),
                pages,
                retrieved: records.len(),
                expected,
            });
        }

        let page = fetch(cursor.take()).await?;
        pages += 1;

        let before = records.len();
        let last = page.last().map(|record| record.cursor_id().to_string());
        for record in page {
            if seen.insert(record.cursor_id().to_string()) {
                records.push(record);
            }
        }

        tracing::debug!(
            collection,
            page = pages,
            added = records.len() - before,
            retrieved = records.len(),
            expected,
            "fetched search page"
        );

        if records.len() == before {
            return Err(CrunchbaseError::NoProgress {
                collection: collection.to_string(),
                pages,
                retrieved: records.len(),
                expected,
            });
        }
        cursor = last;
    }

    Ok(Paged { records, pages })
}

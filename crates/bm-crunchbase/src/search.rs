//! `POST /searches/{collection}`: counting, single pages and full walks.

use serde::de::DeserializeOwned;

use crate::http::{check_response, read_json};
use crate::paginate::{Paged, paginate};
use crate::query::SearchQuery;
use crate::wire::{CountResponse, Entity, SearchResponse};
use crate::{Collection, CrunchbaseClient, CrunchbaseError, Paging};

impl CrunchbaseClient {
    /// Total number of matches for `query`.
    ///
    /// Issues the same search request and reads only `count`.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError`] if the request fails, the API answers with
    /// an error, or the body cannot be decoded.
    pub async fn count(
        &self,
        collection: Collection,
        query: &SearchQuery,
    ) -> Result<u64, CrunchbaseError> {
        let path = format!("/searches/{collection}");
        tracing::debug!(%collection, "counting search results");
        let resp = check_response(self.post(&path).json(query).send().await?).await?;
        let data: CountResponse = read_json(resp).await?;
        Ok(data.count)
    }

    /// One page of results.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError`] if the request fails, the API answers with
    /// an error, or the body cannot be decoded.
    pub async fn search_page<P: DeserializeOwned>(
        &self,
        collection: Collection,
        query: &SearchQuery,
    ) -> Result<Vec<Entity<P>>, CrunchbaseError> {
        let path = format!("/searches/{collection}");
        tracing::debug!(%collection, after_id = ?query.after_id, "requesting search page");
        let resp = check_response(self.post(&path).json(query).send().await?).await?;
        let data: SearchResponse<P> = read_json(resp).await?;
        Ok(data.entities)
    }

    /// Every result of `query`, following cursors until the reported count
    /// has been collected.
    ///
    /// # Errors
    ///
    /// Propagates request errors and fails with
    /// [`CrunchbaseError::NoProgress`] or [`CrunchbaseError::PageLimit`] when
    /// the walk cannot complete.
    pub async fn search_all<P: DeserializeOwned>(
        &self,
        collection: Collection,
        query: &SearchQuery,
        paging: Paging,
    ) -> Result<Vec<Entity<P>>, CrunchbaseError> {
        let expected = self.count(collection, query).await?;
        tracing::debug!(%collection, expected, "search total");

        let Paged { records, pages } = paginate(
            collection.as_str(),
            expected,
            paging.max_pages,
            |cursor| {
                let page_query = query.with_cursor(cursor);
                async move { self.search_page::<P>(collection, &page_query).await }
            },
        )
        .await?;

        tracing::info!(%collection, records = records.len(), pages, "search complete");
        Ok(records)
    }
}

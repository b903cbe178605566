//! Company-name resolution via `GET /autocompletes`.

use bm_core::Company;

use crate::http::{check_response, read_json};
use crate::wire::AutocompleteResponse;
use crate::{Collection, CrunchbaseClient, CrunchbaseError};

/// Top autocomplete hit for a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub company: Company,
    pub description: Option<String>,
    pub permalink: Option<String>,
}

/// Outcome of resolving one free-text name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Match),
    /// No entity matched; carries the input as given.
    NotFound { input: String },
}

impl CrunchbaseClient {
    /// Resolve `name` against `collection`, keeping the first of at most
    /// `limit` matches.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError`] if the request fails or the API answers
    /// with an error. An empty match list is not an error.
    pub async fn resolve(
        &self,
        name: &str,
        collection: Collection,
        limit: u32,
    ) -> Result<Resolution, CrunchbaseError> {
        let limit = limit.max(1).to_string();
        let resp = check_response(
            self.get(
                "/autocompletes",
                &[
                    ("query", name),
                    ("collection_ids", collection.as_str()),
                    ("limit", limit.as_str()),
                ],
            )
            .send()
            .await?,
        )
        .await?;
        let data: AutocompleteResponse = read_json(resp).await?;

        let Some(top) = data.entities.into_iter().next() else {
            tracing::debug!(name, %collection, "no autocomplete match");
            return Ok(Resolution::NotFound {
                input: name.to_string(),
            });
        };

        tracing::debug!(name, matched = %top.identifier.value, uuid = %top.identifier.uuid, "resolved");
        Ok(Resolution::Found(Match {
            company: Company {
                uuid: top.identifier.uuid,
                name: top.identifier.value,
            },
            description: top.short_description,
            permalink: top.identifier.permalink,
        }))
    }

    /// [`Self::resolve`] against organizations with a single result.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn resolve_company(&self, name: &str) -> Result<Resolution, CrunchbaseError> {
        self.resolve(name, Collection::Organizations, 1).await
    }
}

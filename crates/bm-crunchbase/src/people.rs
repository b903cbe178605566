//! Person enrichment via `GET /entities/people/{id}`.
//!
//! Each lookup is retried with exponential backoff while the failure is
//! transient (rate limiting, an undecodable body, a timeout). A person the
//! API does not know gets an all-unknown profile instead of an error.

use std::collections::HashMap;
use std::time::Duration;

use bm_core::PersonProfile;
use futures::StreamExt;

use crate::error::ErrorKind;
use crate::http::{check_response, read_json};
use crate::wire::PersonResponse;
use crate::{CrunchbaseClient, CrunchbaseError};

const PROFILE_FIELDS: &str = "primary_job_title,primary_organization,linkedin";

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(5),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Wait after failed attempt number `attempt` (1-based).
    ///
    /// Doubles from `base_delay`, capped at `max_delay`, and never shorter
    /// than a server-supplied `retry_after`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        let backoff = self.base_delay.saturating_mul(factor).min(self.max_delay);
        retry_after.map_or(backoff, |floor| backoff.max(floor))
    }
}

/// Profiles keyed by person identifier.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub profiles: HashMap<String, PersonProfile>,
    /// People missing at least one of title, organization or link.
    pub incomplete: usize,
}

impl CrunchbaseClient {
    /// Fetch one person's primary position and profile link.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::NotFound`] for an unknown person and other
    /// [`CrunchbaseError`] variants for request or decode failures.
    pub async fn fetch_profile(&self, person_id: &str) -> Result<PersonProfile, CrunchbaseError> {
        let path = format!("/entities/people/{}", urlencoding::encode(person_id));
        let resp = check_response(
            self.get(&path, &[("field_ids", PROFILE_FIELDS)])
                .send()
                .await?,
        )
        .await?;
        let data: PersonResponse = read_json(resp).await?;
        let props = data.properties;

        let (organization, organization_uuid) = match props.primary_organization {
            Some(org) => (Some(org.value), Some(org.uuid)),
            None => (None, None),
        };
        Ok(PersonProfile {
            uuid: person_id.to_string(),
            name: Some(props.identifier.value).filter(|name| !name.is_empty()),
            title: props.primary_job_title.filter(|title| !title.is_empty()),
            organization: organization.filter(|name| !name.is_empty()),
            organization_uuid,
            linkedin: props.linkedin.map(|link| link.value).filter(|url| !url.is_empty()),
        })
    }

    /// [`Self::fetch_profile`] with retries on transient failures.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::RetriesExhausted`] once `policy.max_attempts`
    /// transient failures have occurred, or the first non-transient error.
    pub async fn fetch_profile_with_retry(
        &self,
        person_id: &str,
        policy: RetryPolicy,
    ) -> Result<PersonProfile, CrunchbaseError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let err = match self.fetch_profile(person_id).await {
                Ok(profile) => return Ok(profile),
                Err(err) => err,
            };
            match err.kind() {
                ErrorKind::NotFound => {
                    tracing::warn!(person_id, "person not found, recording unknown profile");
                    return Ok(PersonProfile::unknown(person_id));
                }
                ErrorKind::Fatal => return Err(err),
                ErrorKind::Retryable if attempt >= policy.max_attempts => {
                    return Err(CrunchbaseError::RetriesExhausted {
                        id: person_id.to_string(),
                        attempts: attempt,
                        last: err.to_string(),
                    });
                }
                ErrorKind::Retryable => {
                    let delay = policy.delay_for(attempt, err.retry_after());
                    tracing::warn!(
                        person_id,
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Enrich every identifier in `person_ids`.
    ///
    /// At most `concurrency` lookups are in flight; `on_progress` is called
    /// once per finished person. The first fatal error aborts the run.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_profile_with_retry`].
    pub async fn enrich_people<F>(
        &self,
        person_ids: &[String],
        policy: RetryPolicy,
        concurrency: usize,
        mut on_progress: F,
    ) -> Result<Enrichment, CrunchbaseError>
    where
        F: FnMut(&PersonProfile),
    {
        let mut results = futures::stream::iter(person_ids)
            .map(|id| self.fetch_profile_with_retry(id, policy))
            .buffer_unordered(concurrency.max(1));

        let mut enrichment = Enrichment::default();
        while let Some(result) = results.next().await {
            let profile = result?;
            on_progress(&profile);
            if !profile.is_complete() {
                enrichment.incomplete += 1;
            }
            enrichment.profiles.insert(profile.uuid.clone(), profile);
        }

        tracing::info!(
            people = enrichment.profiles.len(),
            incomplete = enrichment.incomplete,
            "enrichment complete"
        );
        Ok(enrichment)
    }
}

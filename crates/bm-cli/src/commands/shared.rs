use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use bm_config::OnUnresolved;
use bm_core::Company;
use bm_crunchbase::{CrunchbaseClient, Resolution};

use crate::progress::Progress;

/// Company names from `path`, one per line, blank lines skipped.
pub fn read_names(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(parse_names(&raw))
}

fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolve every name to a company, in input order.
///
/// Unresolved names are skipped with a warning or abort the run, per
/// `on_unresolved`. Names resolving to an already seen company are dropped.
pub async fn resolve_companies(
    client: &CrunchbaseClient,
    names: &[String],
    on_unresolved: OnUnresolved,
    echo: bool,
    show_progress: bool,
) -> anyhow::Result<Vec<Company>> {
    let progress = Progress::stage("resolving companies", names.len() as u64, show_progress);
    let mut seen = HashSet::new();
    let mut companies = Vec::with_capacity(names.len());

    for name in names {
        progress.current(name);
        let resolution = match client.resolve_company(name).await {
            Ok(resolution) => resolution,
            Err(error) => {
                progress.fail("lookup failed");
                return Err(error).with_context(|| format!("failed to resolve '{name}'"));
            }
        };
        progress.advance();

        match resolution {
            Resolution::Found(found) => {
                if echo {
                    println!("Searching for {}", name.to_uppercase());
                    println!("{}", "*".repeat(50));
                    println!(
                        "Found {}\nDescription: {}\n",
                        found.company.name.to_uppercase(),
                        found.description.as_deref().unwrap_or(bm_core::entities::UNKNOWN)
                    );
                }
                if seen.insert(found.company.uuid.clone()) {
                    companies.push(found.company);
                } else {
                    tracing::debug!(name, uuid = %found.company.uuid, "duplicate company");
                }
            }
            Resolution::NotFound { input } => match on_unresolved {
                OnUnresolved::Skip => {
                    tracing::warn!(name = %input, "no company matches; skipping");
                }
                OnUnresolved::Abort => {
                    progress.fail("unresolved company");
                    anyhow::bail!("no company matches '{input}'");
                }
            },
        }
    }

    progress.done();
    tracing::info!(requested = names.len(), resolved = companies.len(), "companies resolved");
    Ok(companies)
}

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bm_config::BoardmapConfig;
use bm_core::aggregate::{Bucket, board_summaries, bucket_affiliations, investor_summaries};
use bm_core::table::assemble_rows;
use bm_core::{AffiliationRecord, InvestmentRecord};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output;
use crate::progress::Progress;

/// Options of one summary run after argument checks.
#[derive(Debug, Clone)]
pub struct MapRun {
    pub input: PathBuf,
    pub echo: bool,
    pub output: Option<PathBuf>,
    pub abbreviate_rounds: bool,
}

pub async fn handle(run: &MapRun, config: &BoardmapConfig, flags: GlobalFlags) -> anyhow::Result<()> {
    let client = bootstrap::client(config)?;
    let paging = bootstrap::paging(config);
    let policy = config.aggregate.unknown_tenure;
    let show_progress = flags.show_progress();

    let names = shared::read_names(&run.input)?;
    let companies = shared::resolve_companies(
        &client,
        &names,
        config.resolve.on_unresolved,
        run.echo,
        show_progress,
    )
    .await?;

    let affiliations = client
        .board_affiliations(&companies, paging)
        .await
        .context("failed to fetch board affiliations")?;
    let people = distinct_people(&affiliations);
    print_affiliation_stats(companies.len(), &affiliations, people.len(), config);

    let progress = Progress::stage("enriching people", people.len() as u64, show_progress);
    let enrichment = client
        .enrich_people(
            &people,
            bootstrap::retry_policy(config),
            config.enrich.concurrency,
            |_| progress.advance(),
        )
        .await;
    let enrichment = match enrichment {
        Ok(enrichment) => {
            progress.done();
            enrichment
        }
        Err(error) => {
            progress.fail("enrichment failed");
            return Err(error).context("failed to enrich people");
        }
    };
    println!(
        "{} out of {} records are missing either a primary job title, primary organization, or LinkedIn url.\n",
        enrichment.incomplete,
        people.len()
    );
    if run.echo {
        let mut profiles: Vec<_> = enrichment.profiles.values().collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid)));
        println!("PEOPLE");
        for profile in profiles {
            print!("{}", output::render_person(profile));
        }
        println!();
    }

    let investments = client
        .investments(&companies, paging)
        .await
        .context("failed to fetch investments")?;
    print_investment_stats(companies.len(), &investments);

    let boards = board_summaries(&affiliations, &enrichment.profiles, policy);
    let style = if run.abbreviate_rounds {
        bm_core::RoundLabelStyle::Abbreviated
    } else {
        config.output.round_style()
    };
    let investors = investor_summaries(&investments, style);
    let rows = assemble_rows(&companies, &boards, &investors);

    if run.echo {
        for row in &rows {
            print!("{}", output::render_row(row));
        }
    }

    let path = output_path(run.output.as_deref(), &config.output.path);
    // `validate` has already rejected multi-byte delimiters.
    let delimiter = config.output.delimiter_byte().unwrap_or(b',');
    output::write_table(&path, delimiter, &rows)?;
    println!("\nRESULTS WRITTEN TO {}", path.display());
    tracing::info!(rows = rows.len(), path = %path.display(), "summary written");
    Ok(())
}

/// Sorted distinct person identifiers.
fn distinct_people(records: &[AffiliationRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.person_uuid.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn output_path(flag: Option<&Path>, configured: &str) -> PathBuf {
    flag.map_or_else(|| PathBuf::from(configured), Path::to_path_buf)
}

fn print_affiliation_stats(
    companies: usize,
    records: &[AffiliationRecord],
    people: usize,
    config: &BoardmapConfig,
) {
    println!("\nAFFILIATIONS");
    println!("Number of companies: {companies}");
    println!("Total affiliations found: {}", records.len());
    println!("Total unique affiliations found: {people}");
    for (bucket, members) in bucket_affiliations(records, config.aggregate.unknown_tenure) {
        println!("  {}: {}", bucket_label(bucket), members.len());
    }
    println!();
}

fn print_investment_stats(companies: usize, records: &[InvestmentRecord]) {
    let investors: BTreeSet<&str> = records.iter().map(|r| r.investor_name.as_str()).collect();
    println!("INVESTMENTS");
    println!("Number of companies: {companies}");
    println!("Total investments found: {}", records.len());
    println!("Total unique investors found: {}\n", investors.len());
}

const fn bucket_label(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::CurrentBoard => "current board members",
        Bucket::FormerBoard => "former board members",
        Bucket::CurrentOther => "current advisors/observers",
        Bucket::FormerOther => "former advisors/observers",
    }
}

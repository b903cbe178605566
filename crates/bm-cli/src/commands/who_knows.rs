use anyhow::Context;
use bm_config::BoardmapConfig;
use bm_core::CoreError;
use bm_core::who_knows::{Grouping, who_knows};

use crate::bootstrap;
use crate::cli::{GlobalFlags, WhoKnowsArgs};
use crate::commands::shared;

pub async fn handle(
    args: &WhoKnowsArgs,
    config: &BoardmapConfig,
    flags: GlobalFlags,
) -> anyhow::Result<()> {
    let client = bootstrap::client(config)?;
    let names = shared::read_names(&args.input)?;
    let companies = shared::resolve_companies(
        &client,
        &names,
        config.resolve.on_unresolved,
        false,
        flags.show_progress(),
    )
    .await?;

    let affiliations = client
        .board_affiliations(&companies, bootstrap::paging(config))
        .await
        .context("failed to fetch board affiliations")?;

    let grouping = if args.by_company {
        Grouping::CompanyFirst
    } else {
        Grouping::PersonFirst
    };

    match who_knows(&args.name, &affiliations, grouping) {
        Ok(report) if report.is_empty() => {
            println!("{} shares no board with anyone else in these companies.", args.name);
        }
        Ok(report) => println!("{report}"),
        Err(CoreError::NotFound { .. }) => {
            println!("{} is not affiliated with any of these companies.", args.name);
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

pub mod map;
pub mod shared;
pub mod who_knows;

use bm_config::BoardmapConfig;

use crate::cli::{Commands, GlobalFlags};

pub async fn dispatch(
    command: &Commands,
    config: &BoardmapConfig,
    flags: GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::WhoKnows(args) => who_knows::handle(args, config, flags).await,
    }
}

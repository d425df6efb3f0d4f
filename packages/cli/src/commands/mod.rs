mod bulk_insert;
mod delete;
mod get;
mod insert;
mod update;

use bulk_insert::BulkInsertCommand;
use clap::Parser;
use delete::DeleteCommand;
use get::GetCommand;
use insert::InsertCommand;
use repokit_core::services::entities::EntitiesService;
use std::sync::Arc;
use update::UpdateCommand;

#[derive(Debug, Parser)]
#[clap(name = "repokit", version)]
enum RepokitCLIOptions {
    #[clap(name = "insert")]
    Insert(InsertCommand),

    #[clap(name = "get")]
    Get(GetCommand),

    #[clap(name = "update")]
    Update(UpdateCommand),

    #[clap(name = "delete")]
    Delete(DeleteCommand),

    #[clap(name = "bulk-insert")]
    BulkInsert(BulkInsertCommand),
}

impl RepokitCLIOptions {
    /**
     * Code ran when CLI bootstraped
     */
    pub async fn run(
        &self,
        entities_service: &Arc<EntitiesService>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Self::Insert(insert) => insert.run(entities_service).await?,
            Self::Get(get) => get.run(entities_service).await?,
            Self::Update(update) => update.run(entities_service).await?,
            Self::Delete(delete) => delete.run(entities_service).await?,
            Self::BulkInsert(bulk_insert) => bulk_insert.run(entities_service).await?,
        }

        Ok(())
    }
}

/**
 * Parse CLI args then run chain of commands
 */
#[cfg(not(tarpaulin_include))]
pub async fn bootstrap(
    entities_service: &Arc<EntitiesService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let args = RepokitCLIOptions::parse();

    args.run(entities_service).await?;

    Ok(())
}

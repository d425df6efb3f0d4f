mod commands;

use repokit_core::config::init_config;
use repokit_core::logging::init_logger;
use home::home_dir;
use log::info;

use std::sync::Arc;

use repokit_core::{
    db::{
        client::DbClient, documents::entity_document::EntityDocument,
        traits::repository::Repository,
    },
    services::{db::documents_repository::DocumentsRepository, entities::EntitiesService},
};

/**
 * Main CLI entry point
 */
#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_path = home_dir().ok_or("Could not find home directory")?;

    let config_manager = init_config(&config_path)?;

    let core_config = config_manager.load()?;

    init_logger(core_config.get_log_level(log::LevelFilter::Info));

    info!("repokit v{}", VERSION);

    let db_client = Arc::new(DbClient::open(&config_manager.get_db_path(&core_config))?);

    // Repositories
    let entities_repository: Arc<dyn Repository<EntityDocument, String>> =
        Arc::new(DocumentsRepository::<EntityDocument>::from(&db_client));

    // Services
    let entities_service = Arc::new(EntitiesService::from(&entities_repository));

    commands::bootstrap(&entities_service).await?;

    Ok(())
}

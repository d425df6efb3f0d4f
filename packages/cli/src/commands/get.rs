use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use repokit_core::services::entities::EntitiesService;
use uuid::Uuid;

/** Display all entities, or a single one by id */
#[derive(Debug, Parser)]
pub struct GetCommand {
    #[clap(required = false)]
    pub id: Option<Uuid>,
}

impl GetCommand {
    pub async fn run(
        &self,
        entities_service: &EntitiesService,
    ) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Subcommand get is being run...");

        let entities = match &self.id {
            Some(id) => vec![entities_service.get_by_id(id).await?],
            None => entities_service.get_all().await?,
        };

        if entities.is_empty() {
            info!("No entities stored yet");
        }

        for entity in entities {
            let id = entity.id.map(|id| id.to_string()).unwrap_or_default();

            info!("{} {}", id.dimmed(), entity.name.blue());
        }

        debug!("Subcommand get successfully ran !");

        Ok(())
    }
}

use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use repokit_core::{entities::entity::Entity, services::entities::EntitiesService};
use uuid::Uuid;

/** Rename stored entity */
#[derive(Debug, Parser)]
pub struct UpdateCommand {
    #[clap(required = true)]
    pub id: Uuid,

    /**
     * New entity name
     */
    #[clap(required = true)]
    pub name: String,
}

impl UpdateCommand {
    pub async fn run(
        &self,
        entities_service: &EntitiesService,
    ) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Subcommand update is being run...");

        let entity = Entity {
            id: Some(self.id),
            name: self.name.clone(),
        };

        entities_service.update(&entity).await?;

        info!(
            "Entity {} has been {} to {}",
            self.id.to_string().dimmed(),
            "renamed".yellow(),
            self.name.blue()
        );

        debug!("Subcommand update successfully ran !");

        Ok(())
    }
}

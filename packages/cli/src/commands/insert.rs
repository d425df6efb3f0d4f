use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use repokit_core::{entities::entity::Entity, services::entities::EntitiesService};

/** Insert one entity per given name */
#[derive(Debug, Parser)]
pub struct InsertCommand {
    /**
     * Entities names ( eg: Alice Bob )
     */
    #[clap(required = true)]
    pub names: Vec<String>,
}

impl InsertCommand {
    /**
     * Insert entities one after another
     */
    pub async fn run(
        &self,
        entities_service: &EntitiesService,
    ) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Subcommand insert is being run...");

        for name in &self.names {
            let entity = entities_service.add(&Entity::new(name)).await?;

            let id = entity.id.map(|id| id.to_string()).unwrap_or_default();

            info!(
                "Entity {} has been {} ( {} )",
                entity.name.blue(),
                "inserted".green(),
                id.dimmed()
            );
        }

        debug!("Subcommand insert successfully ran !");

        Ok(())
    }
}

use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use log::{debug, error, info};
use repokit_core::{
    db::errors::repository_error::RepositoryError, services::entities::EntitiesService,
};
use uuid::Uuid;

/** Delete entity using its id */
#[derive(Debug, Parser)]
pub struct DeleteCommand {
    #[clap(required = true)]
    pub id: Uuid,

    /**
     * Skip confirmation prompt
     */
    #[clap(long, short)]
    pub yes: bool,
}

impl DeleteCommand {
    /**
     * Prompt for deletion confirmation
     */
    fn confirm(&self) -> Result<bool, dialoguer::Error> {
        if self.yes {
            return Ok(true);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete entity {} ?", self.id))
            .default(false)
            .interact()
    }

    pub async fn run(
        &self,
        entities_service: &EntitiesService,
    ) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Subcommand delete is being run...");

        if !self.confirm()? {
            info!("Deletion of {} cancelled", self.id.to_string().dimmed());

            return Ok(());
        }

        match entities_service.remove(&self.id).await {
            Ok(_) => {
                info!(
                    "Entity {} has been {} !",
                    self.id.to_string().blue(),
                    "deleted".red()
                );
            }
            Err(RepositoryError::NotFound(_)) => {
                error!("Entity {} does not exist", self.id.to_string().blue());
            }
            Err(err) => return Err(err.into()),
        }

        debug!("Subcommand delete successfully ran !");

        Ok(())
    }
}

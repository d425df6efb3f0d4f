use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use repokit_core::{entities::entity::Entity, services::entities::EntitiesService};

/** Insert many entities concurrently */
#[derive(Debug, Parser)]
pub struct BulkInsertCommand {
    /**
     * Number of entities to insert
     */
    #[clap(long, default_value_t = 100)]
    pub count: usize,

    /**
     * Entities names prefix, suffixed with their number ( eg: entity42 )
     */
    #[clap(long, default_value = "entity")]
    pub prefix: String,
}

impl BulkInsertCommand {
    /**
     * Build progress bar
     */
    fn build_progress_bar(&self) -> Result<ProgressBar, Box<dyn std::error::Error>> {
        let pb = ProgressBar::new(self.count as u64);
        pb.enable_steady_tick(Duration::from_millis(60));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:40.blue}] {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );

        Ok(pb)
    }

    /**
     * Insert entities, reporting each one as soon as it lands
     */
    pub async fn run(
        &self,
        entities_service: &EntitiesService,
    ) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Subcommand bulk-insert is being run...");

        let entities: Vec<Entity> = (0..self.count)
            .map(|count| Entity::new(&format!("{}{}", self.prefix, count)))
            .collect();

        let pb = self.build_progress_bar()?;

        let mut inserted = 0;
        let mut failed = 0;

        for slot in entities_service.add_many(&entities) {
            match slot.await {
                Ok(Ok(entity)) => {
                    inserted += 1;

                    pb.set_message(entity.name);
                }
                Ok(Err(err)) => {
                    failed += 1;

                    pb.suspend(|| error!("Entity could not be inserted: {}", err));
                }
                Err(err) => {
                    failed += 1;

                    pb.suspend(|| error!("{}", err));
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();

        info!(
            "{} entities {}, {} {}",
            inserted,
            "inserted".green(),
            failed,
            "failed".red()
        );

        debug!("Subcommand bulk-insert successfully ran !");

        Ok(())
    }
}

use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::{
    db::{
        documents::{
            entity_document::EntityDocument, entity_document_builder::EntityDocumentBuilder,
        },
        errors::repository_error::RepositoryError,
        traits::repository::Repository,
    },
    entities::entity::Entity,
    tasks::{interleave, Slot},
};

/**
 * Entities service
 */
pub struct EntitiesService {
    entities_repository: Arc<dyn Repository<EntityDocument, String>>,
}

impl EntitiesService {
    /**
     * Add new entity to DB
     */
    pub async fn add(&self, entity: &Entity) -> Result<Entity, RepositoryError> {
        debug!("Adding new entity {}...", entity.name);

        let doc = EntityDocumentBuilder::from_entity(entity).build();

        let created_doc = self.entities_repository.create(&doc).await?;

        let created = Entity::try_from(&created_doc)?;

        debug!("Done adding new entity {} !", created);

        Ok(created)
    }

    /**
     * Add many entities concurrently
     *
     * Returned slots resolve in insertion completion order, each one with
     * its own insertion outcome
     */
    pub fn add_many(&self, entities: &[Entity]) -> Vec<Slot<Result<Entity, RepositoryError>>> {
        debug!("Adding {} entities concurrently...", entities.len());

        let inserts: Vec<_> = entities
            .iter()
            .map(|entity| {
                let entities_repository = Arc::clone(&self.entities_repository);
                let doc = EntityDocumentBuilder::from_entity(entity).build();

                async move {
                    entities_repository
                        .create(&doc)
                        .await
                        .and_then(|created_doc| Entity::try_from(&created_doc))
                }
            })
            .collect();

        let slots = interleave(inserts);

        debug!("Done scheduling {} entities insertions !", slots.len());

        slots
    }

    /**
     * Get all entities
     */
    pub async fn get_all(&self) -> Result<Vec<Entity>, RepositoryError> {
        debug!("Getting all entities...");

        let entities = self
            .entities_repository
            .read_all()
            .await?
            .iter()
            .map(Entity::try_from)
            .collect::<Result<Vec<Entity>, RepositoryError>>()?;

        debug!("Done getting all entities !");

        Ok(entities)
    }

    /**
     * Get entity by id
     */
    pub async fn get_by_id(&self, id: &Uuid) -> Result<Entity, RepositoryError> {
        debug!("Getting entity {}...", id);

        let key = id.to_string();

        let doc = self
            .entities_repository
            .read_by_key(&key)
            .await?
            .ok_or(RepositoryError::NotFound(key))?;

        let entity = Entity::try_from(&doc)?;

        debug!("Done getting entity {} !", id);

        Ok(entity)
    }

    /**
     * Update stored entity
     */
    pub async fn update(&self, entity: &Entity) -> Result<(), RepositoryError> {
        let id = entity
            .id
            .ok_or_else(|| RepositoryError::MissingKey(entity.name.clone()))?;

        debug!("Updating entity {}...", id);

        let doc = EntityDocumentBuilder::from_entity(entity).build();

        self.entities_repository
            .update(&id.to_string(), &doc)
            .await?;

        debug!("Done updating entity {} !", id);

        Ok(())
    }

    /**
     * Remove entity by id
     */
    pub async fn remove(&self, id: &Uuid) -> Result<(), RepositoryError> {
        debug!("Removing entity {}...", id);

        self.entities_repository.delete(&id.to_string()).await?;

        debug!("Done removing entity {} !", id);

        Ok(())
    }
}

impl From<&Arc<dyn Repository<EntityDocument, String>>> for EntitiesService {
    fn from(value: &Arc<dyn Repository<EntityDocument, String>>) -> Self {
        Self {
            entities_repository: Arc::clone(value),
        }
    }
}

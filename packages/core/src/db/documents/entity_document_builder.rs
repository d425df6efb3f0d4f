use crate::entities::entity::Entity;

use super::entity_document::EntityDocument;

#[derive(Debug, Default)]
pub struct EntityDocumentBuilder {
    id: Option<String>,
    name: Option<String>,
}

impl EntityDocumentBuilder {
    /**
     * Set id
     */
    pub fn set_id(&mut self, id: &String) -> &mut Self {
        self.id = Some(id.clone());

        self
    }

    /**
     * Set entity name
     */
    pub fn set_name(&mut self, name: &String) -> &mut Self {
        self.name = Some(name.clone());

        self
    }

    /**
     * Reset builder
     */
    pub fn reset(&mut self) -> &mut Self {
        self.id = None;
        self.name = None;

        self
    }

    /**
     * Build from document
     */
    pub fn from_document(doc: &EntityDocument) -> Self {
        Self {
            id: Some(doc.id.clone()),
            name: Some(doc.name.clone()),
        }
    }

    /**
     * Build from entity, entities not stored yet get an empty id
     */
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id.map(|id| id.to_string()),
            name: Some(entity.name.clone()),
        }
    }

    /**
     * Build document
     */
    pub fn build(&mut self) -> EntityDocument {
        let doc = EntityDocument {
            id: self.id.clone().unwrap_or_default(),
            name: self.name.clone().expect("Name must be set"),
        };

        self.reset();

        doc
    }
}

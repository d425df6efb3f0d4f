use super::entity_document_builder::EntityDocumentBuilder;
use crate::db::traits::document::Document;

/**
 * Represents how entity is stored in DB
 */
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntityDocument {
    pub id: String,
    pub name: String,
}

impl EntityDocument {
    /**
     * Return associated builder
     */
    pub fn builder() -> EntityDocumentBuilder {
        EntityDocumentBuilder::default()
    }
}

impl Document for EntityDocument {
    fn collection_name() -> &'static str {
        "entities"
    }

    fn get_key(&self) -> &String {
        &self.id
    }

    fn set_key(&mut self, key: &String) {
        self.id = key.clone();
    }
}

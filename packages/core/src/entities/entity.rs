use std::fmt::Display;

use uuid::Uuid;

use crate::db::{
    documents::entity_document::EntityDocument, errors::repository_error::RepositoryError,
};

/**
 * Base entity, identified once stored
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: Option<Uuid>,
    pub name: String,
}

impl Entity {
    /**
     * New entity, not stored yet
     */
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

impl TryFrom<&EntityDocument> for Entity {
    type Error = RepositoryError;

    fn try_from(doc: &EntityDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id).map_err(|_| RepositoryError::InvalidKey(doc.id.clone()))?;

        Ok(Self {
            id: Some(id),
            name: doc.name.clone(),
        })
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({})", self.name, id),
            None => write!(f, "{}", self.name),
        }
    }
}

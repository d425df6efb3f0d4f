#[cfg(test)]
pub mod tests {
    use uuid::Uuid;

    use crate::db::documents::entity_document::EntityDocument;

    /**
     * Entity document not stored yet
     */
    pub fn create_entity_doc(name: &str) -> EntityDocument {
        EntityDocument::builder().set_name(&name.to_string()).build()
    }

    /**
     * Entity document as returned by a repository once stored
     */
    pub fn create_stored_entity_doc(name: &str) -> EntityDocument {
        EntityDocument::builder()
            .set_id(&Uuid::new_v4().to_string())
            .set_name(&name.to_string())
            .build()
    }
}

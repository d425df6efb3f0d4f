pub mod entity_document;
pub mod entity_document_builder;

pub mod documents_repository;

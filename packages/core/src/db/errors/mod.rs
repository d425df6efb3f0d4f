pub mod repository_error;

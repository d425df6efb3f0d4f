pub mod client;
pub mod documents;
pub mod errors;
pub mod traits;

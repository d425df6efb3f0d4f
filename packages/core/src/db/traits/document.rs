use serde::{de::DeserializeOwned, Serialize};

/**
 * Anything stored in its own collection under a string key
 */
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /**
     * Field holding document key
     */
    const KEY_FIELD: &'static str = "id";

    /**
     * Collection documents of this type live in
     */
    fn collection_name() -> &'static str;

    fn get_key(&self) -> &String;

    fn set_key(&mut self, key: &String);
}

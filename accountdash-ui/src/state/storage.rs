//! `localStorage` session mirror

use accountdash::{ClientError, ClientResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// Key-value store backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> ClientResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

fn storage_error(err: JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", err))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.storage()?.remove_item(key).map_err(storage_error)
    }
}

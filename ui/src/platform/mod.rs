//! Browser glue: persistence, downloads, printing and page listeners.
//!
//! Every function has a wasm implementation backed by `web-sys` and a
//! native one so the crate builds and tests on the host. Native downloads
//! land in the project exports directory; printing and listeners are no-ops.

use std::future::Future;

use thiserror::Error;

use crate::core::storage::StorageError;

mod dom;
mod storage;

pub use dom::{download_text, install_page_listeners, print_page, scroll_to_first_article};
pub use storage::PageStore;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlatformError {
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_err(value: wasm_bindgen::JsValue) -> PlatformError {
    PlatformError::Js(format!("{value:?}"))
}

pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}

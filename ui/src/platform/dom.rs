use futures_channel::mpsc::UnboundedSender;

use super::PlatformError;
use crate::core::Command;

/// Offers `body` as a file download. Returns the written path on native
/// builds, `None` in the browser.
pub fn download_text(
    filename: &str,
    mime: &str,
    body: &str,
) -> Result<Option<String>, PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(body));

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(super::js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(super::js_err)?;

        let outcome = (|| -> Result<Option<String>, PlatformError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(PlatformError::Unavailable("document"))?;
            let anchor: HtmlAnchorElement = document
                .create_element("a")
                .map_err(super::js_err)?
                .dyn_into()
                .map_err(|_| PlatformError::Js("anchor cast failed".into()))?;
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.style().set_property("display", "none").ok();

            document
                .body()
                .ok_or(PlatformError::Unavailable("body"))?
                .append_child(&anchor)
                .map_err(super::js_err)?;
            anchor.click();
            anchor.remove();
            Ok(None)
        })();

        // The object URL is released whether or not the click went through.
        Url::revoke_object_url(&url).ok();
        outcome
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, body)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, PlatformError> {
    let dirs = directories::ProjectDirs::from("id", "EduKreasi", "EduKreasi")
        .ok_or(PlatformError::Unavailable("export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}

pub fn print_page() -> Result<(), PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .ok_or(PlatformError::Unavailable("window"))?
            .print()
            .map_err(super::js_err)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("printing is only available in the browser");
        Ok(())
    }
}

/// Smooth-scrolls to the first `article` on the page, if there is one.
pub fn scroll_to_first_article() -> Result<(), PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::Unavailable("document"))?;
        if let Some(article) = document.query_selector("article").map_err(super::js_err)? {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            article.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(())
    }
}

/// Forwards window scrolls and document key presses to the page coroutine.
/// The listeners live for the rest of the page.
pub fn install_page_listeners(sender: UnboundedSender<Command>) -> Result<(), PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(PlatformError::Unavailable("window"))?;
        let document = window.document().ok_or(PlatformError::Unavailable("document"))?;

        let scroll_sender = sender.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || match measure_sections() {
            Ok((scroll_y, sections)) => {
                let _ = scroll_sender.unbounded_send(Command::Scroll { scroll_y, sections });
            }
            Err(err) => tracing::debug!(%err, "scroll spy skipped"),
        });
        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(super::js_err)?;
        on_scroll.forget();

        let on_key = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                let _ = sender.unbounded_send(Command::KeyPressed(event.key()));
            },
        );
        document
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
            .map_err(super::js_err)?;
        on_key.forget();

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = sender;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn measure_sections() -> Result<(f64, Vec<crate::core::nav::SectionOffset>), PlatformError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::core::nav::SectionOffset;

    let window = web_sys::window().ok_or(PlatformError::Unavailable("window"))?;
    let document = window.document().ok_or(PlatformError::Unavailable("document"))?;
    let scroll_y = window.scroll_y().map_err(super::js_err)?;

    let nodes = document
        .query_selector_all("main section[id]")
        .map_err(super::js_err)?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(element) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        sections.push(SectionOffset::new(element.id(), f64::from(element.offset_top())));
    }
    Ok((scroll_y, sections))
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, FileList, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Element podľa id pretypovaný na `T`; chýbajúci element sa len zaloguje
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        log::debug!("Element #{} na stránke nie je", id);
        return None;
    };
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            log::warn!("Element #{} nemá očakávaný typ", id);
            None
        }
    }
}

pub fn inputs_by_name(document: &Document, name: &str) -> Vec<HtmlInputElement> {
    let selector = format!("input[name=\"{}\"]", name);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

pub fn file_names(files: &FileList) -> Vec<String> {
    (0..files.length())
        .filter_map(|idx| files.item(idx))
        .map(|file| file.name())
        .collect()
}

/// Pripojí listener na celý život stránky
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    match target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(err) => log::warn!("Nepodarilo sa pripojiť '{}': {:?}", event_type, err),
    }
}

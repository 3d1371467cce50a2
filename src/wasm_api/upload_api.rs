use wasm_bindgen::prelude::*;

use crate::form::{UploadEvent, UploadForm};
use super::to_js;

/// Stav drop zóny pre stránky, ktoré si DOM obsluhujú samy
#[wasm_bindgen]
pub struct WasmUploadForm {
    form: UploadForm,
    label_prefix: String,
}

#[wasm_bindgen]
impl WasmUploadForm {
    #[wasm_bindgen(constructor)]
    pub fn new(label_prefix: Option<String>) -> WasmUploadForm {
        console_error_panic_hook::set_once();
        WasmUploadForm {
            form: UploadForm::new(),
            label_prefix: label_prefix.unwrap_or_else(|| "Vybraný súbor: ".to_string()),
        }
    }

    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self) -> Result<JsValue, JsValue> {
        self.form.apply(UploadEvent::DragOver);
        self.view()
    }

    #[wasm_bindgen(js_name = dragLeave)]
    pub fn drag_leave(&mut self) -> Result<JsValue, JsValue> {
        self.form.apply(UploadEvent::DragLeave);
        self.view()
    }

    /// Vráti `true`, ak má stránka pustené súbory priradiť do file inputu
    #[wasm_bindgen(js_name = dropFiles)]
    pub fn drop_files(&mut self, names: Vec<String>) -> bool {
        self.form.apply(UploadEvent::Drop(names))
    }

    #[wasm_bindgen(js_name = selectFiles)]
    pub fn select_files(&mut self, names: Vec<String>) -> Result<JsValue, JsValue> {
        self.form.apply(UploadEvent::FilesSelected(names));
        self.view()
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.view(&self.label_prefix))
    }
}

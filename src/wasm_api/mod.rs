use serde::Serialize;
use wasm_bindgen::JsValue;

pub mod factory_api;
pub mod analyze_api;
pub mod cleaning_api;
pub mod upload_api;
pub mod chart_api;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod page;

pub use factory_api::WasmFormFactory;
pub use analyze_api::WasmAnalyzeForm;
pub use cleaning_api::WasmCleaningForm;
pub use upload_api::WasmUploadForm;
pub use chart_api::WasmChartForm;

/// Mapy (napr. parametre grafu) idú do JS ako obyčajné objekty
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Chyba serializácie: {}", e)))
}

/// Zoznam stĺpcov z JS poľa reťazcov
pub(crate) fn columns_from_js(columns: JsValue) -> Result<Vec<String>, JsValue> {
    if columns.is_undefined() || columns.is_null() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(columns)
        .map_err(|e| JsValue::from_str(&format!("Neplatný zoznam stĺpcov: {}", e)))
}

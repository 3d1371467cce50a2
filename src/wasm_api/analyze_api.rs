use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};

use crate::columns::ColumnCatalog;
use crate::form::{AnalyzeEvent, AnalyzeForm};
use super::{columns_from_js, to_js};

#[derive(Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// JS obal nad view-modelom analytického formulára. Každá zmena vráti
/// nový `AnalyzeView`, ktorý si stránka vykreslí.
#[wasm_bindgen]
pub struct WasmAnalyzeForm {
    form: AnalyzeForm,
}

#[wasm_bindgen]
impl WasmAnalyzeForm {
    /// `columns` je pole názvov stĺpcov, `numeric_json` obsah vloženého
    /// JSON zoznamu numerických stĺpcov
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue, numeric_json: &str) -> Result<WasmAnalyzeForm, JsValue> {
        console_error_panic_hook::set_once();
        let columns = columns_from_js(columns)?;
        let catalog = ColumnCatalog::from_embedded_json_or_empty(columns, numeric_json);
        Ok(WasmAnalyzeForm {
            form: AnalyzeForm::new(catalog),
        })
    }

    #[wasm_bindgen(js_name = selectAlgorithm)]
    pub fn select_algorithm(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.form.apply(AnalyzeEvent::AlgorithmChanged(value.to_string()))?;
        self.view()
    }

    #[wasm_bindgen(js_name = selectTarget)]
    pub fn select_target(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.form.apply(AnalyzeEvent::TargetChanged(value.to_string()))?;
        self.view()
    }

    #[wasm_bindgen(js_name = toggleFeature)]
    pub fn toggle_feature(&mut self, column: &str, checked: bool) -> Result<JsValue, JsValue> {
        self.form.apply(AnalyzeEvent::FeatureToggled {
            column: column.to_string(),
            checked,
        })?;
        self.view()
    }

    #[wasm_bindgen(js_name = setParam)]
    pub fn set_param(&mut self, name: &str, value: &str) -> Result<JsValue, JsValue> {
        self.form.apply(AnalyzeEvent::ParamChanged {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        self.view()
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.view())
    }

    /// Validovaná požiadavka na spustenie; chyba sa vráti ako text
    #[wasm_bindgen(js_name = buildRequest)]
    pub fn build_request(&self) -> Result<JsValue, JsValue> {
        let request = self.form.build_request()?;
        to_js(&request)
    }

    /// Páry `name`/`value` pripravené na odoslanie ako form data
    #[wasm_bindgen(js_name = buildFormFields)]
    pub fn build_form_fields(&self) -> Result<JsValue, JsValue> {
        let fields: Vec<FormField> = self
            .form
            .build_request()?
            .to_form_fields()
            .into_iter()
            .map(|(name, value)| FormField { name, value })
            .collect();
        to_js(&fields)
    }
}

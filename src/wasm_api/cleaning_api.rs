use wasm_bindgen::prelude::*;

use crate::columns::ColumnCatalog;
use crate::form::{CleaningEvent, CleaningForm};
use super::{columns_from_js, to_js};

#[wasm_bindgen]
pub struct WasmCleaningForm {
    form: CleaningForm,
}

#[wasm_bindgen]
impl WasmCleaningForm {
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue, numeric_json: &str) -> Result<WasmCleaningForm, JsValue> {
        console_error_panic_hook::set_once();
        let columns = columns_from_js(columns)?;
        let catalog = ColumnCatalog::from_embedded_json_or_empty(columns, numeric_json);
        Ok(WasmCleaningForm {
            form: CleaningForm::new(catalog),
        })
    }

    #[wasm_bindgen(js_name = setMissingStrategy)]
    pub fn set_missing_strategy(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::MissingStrategyChanged(value.to_string()))
    }

    #[wasm_bindgen(js_name = setFillValue)]
    pub fn set_fill_value(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::FillValueChanged(value.to_string()))
    }

    #[wasm_bindgen(js_name = setOutlierColumn)]
    pub fn set_outlier_column(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::OutlierColumnChanged(value.to_string()))
    }

    #[wasm_bindgen(js_name = setThreshold)]
    pub fn set_threshold(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::ThresholdChanged(value.to_string()))
    }

    #[wasm_bindgen(js_name = setReplacement)]
    pub fn set_replacement(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::ReplacementChanged(value.to_string()))
    }

    #[wasm_bindgen(js_name = setDuplicateStrategy)]
    pub fn set_duplicate_strategy(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.apply(CleaningEvent::DuplicateStrategyChanged(value.to_string()))
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.view())
    }

    #[wasm_bindgen(js_name = buildRules)]
    pub fn build_rules(&self) -> Result<JsValue, JsValue> {
        let rules = self.form.build_rules()?;
        to_js(&rules)
    }
}

impl WasmCleaningForm {
    fn apply(&mut self, event: CleaningEvent) -> Result<JsValue, JsValue> {
        self.form.apply(event)?;
        self.view()
    }
}

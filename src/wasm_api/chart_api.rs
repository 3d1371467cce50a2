use wasm_bindgen::prelude::*;

use crate::columns::ColumnCatalog;
use crate::form::{ChartEvent, ChartForm};
use super::{columns_from_js, to_js};

#[wasm_bindgen]
pub struct WasmChartForm {
    form: ChartForm,
}

#[wasm_bindgen]
impl WasmChartForm {
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue, numeric_json: &str) -> Result<WasmChartForm, JsValue> {
        console_error_panic_hook::set_once();
        let columns = columns_from_js(columns)?;
        let catalog = ColumnCatalog::from_embedded_json_or_empty(columns, numeric_json);
        Ok(WasmChartForm {
            form: ChartForm::new(catalog),
        })
    }

    #[wasm_bindgen(js_name = selectChartType)]
    pub fn select_chart_type(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.form.apply(ChartEvent::TypeChanged(value.to_string()))?;
        self.view()
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.form.apply(ChartEvent::TitleChanged(title.to_string())).ok();
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.form.apply(ChartEvent::FieldChanged {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setFlag)]
    pub fn set_flag(&mut self, name: &str, checked: bool) -> Result<(), JsValue> {
        self.form.apply(ChartEvent::FlagChanged {
            name: name.to_string(),
            checked,
        })?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setColumns)]
    pub fn set_columns(&mut self, name: &str, columns: Vec<String>) -> Result<(), JsValue> {
        self.form.apply(ChartEvent::ColumnsChanged {
            name: name.to_string(),
            columns,
        })?;
        Ok(())
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.form.view())
    }

    #[wasm_bindgen(js_name = buildPayload)]
    pub fn build_payload(&self) -> Result<JsValue, JsValue> {
        let payload = self.form.build_payload()?;
        to_js(&payload)
    }
}

use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};

use crate::algorithms::{Algorithm, AlgorithmFactory, AlgorithmRegistry, ParamDefinition};
use crate::form::{ChartType, ExportRequest, ALLOWED_EXTENSIONS};
use super::to_js;

#[derive(Serialize, Deserialize)]
pub struct AlgorithmOption {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub panel: String,
    pub requires_target: bool,
}

#[derive(Serialize, Deserialize)]
pub struct ChartTypeInfo {
    pub name: String,
    pub required_fields: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct AvailableOptions {
    pub algorithms: Vec<AlgorithmOption>,
    pub chart_types: Vec<ChartTypeInfo>,
    pub allowed_extensions: Vec<String>,
}

#[wasm_bindgen]
pub struct WasmFormFactory;

#[wasm_bindgen]
impl WasmFormFactory {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmFormFactory {
        console_error_panic_hook::set_once();
        WasmFormFactory
    }

    /// Získa všetky možnosti formulárov pre frontend
    #[wasm_bindgen(js_name = getAvailableOptions)]
    pub fn get_available_options(&self) -> Result<JsValue, JsValue> {
        let options = AvailableOptions {
            algorithms: Self::algorithm_options(),
            chart_types: Self::chart_type_infos(),
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        };
        to_js(&options)
    }

    #[wasm_bindgen(js_name = getAvailableAlgorithms)]
    pub fn get_available_algorithms(&self) -> Result<JsValue, JsValue> {
        to_js(&Self::algorithm_options())
    }

    /// Parametre algoritmu s predvolenými hodnotami a rozsahmi
    #[wasm_bindgen(js_name = getParamDefinitions)]
    pub fn get_param_definitions(&self, algorithm: &str) -> Result<JsValue, JsValue> {
        let definitions: Vec<ParamDefinition> = match AlgorithmFactory::parse(algorithm)? {
            Some(algorithm) => AlgorithmRegistry::instance().get_param_definitions(algorithm),
            None => Vec::new(),
        };
        to_js(&definitions)
    }

    #[wasm_bindgen(js_name = getChartTypes)]
    pub fn get_chart_types(&self) -> Result<JsValue, JsValue> {
        to_js(&Self::chart_type_infos())
    }

    #[wasm_bindgen(js_name = getAllowedExtensions)]
    pub fn get_allowed_extensions(&self) -> js_sys::Array {
        ALLOWED_EXTENSIONS.iter().map(|e| JsValue::from_str(e)).collect()
    }

    /// Názov exportovaného súboru s príponou podľa formátu
    #[wasm_bindgen(js_name = normalizeExportFilename)]
    pub fn normalize_export_filename(
        &self,
        filename: &str,
        format: &str,
        default_name: &str,
    ) -> Result<JsValue, JsValue> {
        let request = ExportRequest::new(filename, format, default_name)?;
        to_js(&request)
    }
}

impl WasmFormFactory {
    fn algorithm_options() -> Vec<AlgorithmOption> {
        let registry = AlgorithmRegistry::instance();
        Algorithm::ALL
            .iter()
            .map(|&algorithm| AlgorithmOption {
                name: algorithm.as_str().to_string(),
                description: registry.get_description(algorithm).to_string(),
                kind: algorithm.kind().as_str().to_string(),
                panel: algorithm.panel().key().to_string(),
                requires_target: algorithm.kind().requires_target(),
            })
            .collect()
    }

    fn chart_type_infos() -> Vec<ChartTypeInfo> {
        ChartType::ALL
            .iter()
            .map(|chart| ChartTypeInfo {
                name: chart.as_str().to_string(),
                required_fields: chart.required_fields().iter().map(|f| f.to_string()).collect(),
            })
            .collect()
    }
}

impl Default for WasmFormFactory {
    fn default() -> Self {
        Self::new()
    }
}

use thiserror::Error;

/// Chyby pri spracovaní formulára pre konfiguráciu ML behu
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Chyba pri parsovaní JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Neznámy algoritmus: {0}")]
    UnknownAlgorithm(String),

    #[error("Neznámy typ grafu: {0}")]
    UnknownChartType(String),

    #[error("Nepodporovaný formát exportu: {0}")]
    UnknownExportFormat(String),

    #[error("Neznáma stratégia '{value}' pre pole '{field}'")]
    UnknownStrategy { field: &'static str, value: String },

    #[error("Neznámy stĺpec: {0}")]
    UnknownColumn(String),

    #[error("Stĺpec '{0}' nie je numerický")]
    NonNumericColumn(String),

    #[error("Algoritmus nie je zvolený")]
    NoAlgorithm,

    #[error("Algoritmus '{0}' vyžaduje cieľový stĺpec")]
    MissingTarget(&'static str),

    #[error("Algoritmus '{algorithm}' nepodporuje cieľový stĺpec '{column}'")]
    IncompatibleTarget {
        algorithm: &'static str,
        column: String,
    },

    #[error("Cieľový stĺpec '{0}' nemôže byť zároveň príznakom")]
    TargetIsFeature(String),

    #[error("Nie je zvolený žiadny príznak")]
    NoFeatures,

    #[error("Neplatná hodnota parametra '{name}': '{value}'")]
    InvalidParam { name: String, value: String },

    #[error("Algoritmus '{algorithm}' nemá parameter '{name}'")]
    UnknownParam { algorithm: &'static str, name: String },

    #[error("Parameter '{name}' je mimo povoleného rozsahu: {value}")]
    ParamOutOfRange { name: String, value: f64 },

    #[error("Stratégia 'fill' vyžaduje hodnotu na doplnenie")]
    MissingFillValue,

    #[error("Graf '{chart}' vyžaduje pole '{field}'")]
    MissingChartField {
        chart: &'static str,
        field: &'static str,
    },
}

impl From<FormError> for wasm_bindgen::JsValue {
    fn from(err: FormError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

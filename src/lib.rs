pub mod error;
pub mod config;
pub mod logging;
pub mod columns;
pub mod algorithms;
pub mod form;
pub mod wasm_api;

pub use error::FormError;
pub use config::PageConfig;
pub use columns::{ColumnCatalog, ColumnType};
pub use algorithms::{Algorithm, AlgorithmFactory, AlgorithmKind, AlgorithmRegistry, ParamDefinition, ParamPanel};
pub use form::{AnalyzeForm, AnalyzeEvent, CleaningForm, CleaningEvent, UploadForm, UploadEvent, ChartForm, ChartEvent, RunRequest, RunRequestBuilder};
pub use wasm_api::{WasmFormFactory, WasmAnalyzeForm, WasmCleaningForm, WasmUploadForm, WasmChartForm};

/// View-modely formulárov stránky. Každý formulár drží explicitný stav,
/// mení sa typovanými udalosťami a z neho sa odvodzuje `view()` pre DOM.

pub mod view;
pub mod request;
pub mod analyze;
pub mod cleaning;
pub mod upload;
pub mod export;
pub mod chart;

pub use view::{OptionState, CheckboxState, PanelState};
pub use request::{RunRequest, RunRequestBuilder, RunParams};
pub use analyze::{AnalyzeForm, AnalyzeEvent, AnalyzeView};
pub use cleaning::{CleaningForm, CleaningEvent, CleaningView, CleaningRules, MissingStrategy, DuplicateStrategy};
pub use upload::{UploadForm, UploadEvent, UploadView, ALLOWED_EXTENSIONS, DRAG_EVENT_TYPES};
pub use export::{ExportFormat, ExportRequest};
pub use chart::{ChartForm, ChartEvent, ChartView, ChartPayload, ChartType};

use serde::Serialize;

/// Prípony súborov, ktoré server vie načítať
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    DragOver,
    DragLeave,
    /// Názvy pustených súborov (môže byť prázdne)
    Drop(Vec<String>),
    /// Zmena výberu v samotnom `<input type="file">`
    FilesSelected(Vec<String>),
}

/// DOM udalosti ťahania nad drop zónou
pub const DRAG_EVENT_TYPES: [&str; 3] = ["dragenter", "dragover", "dragleave"];

impl UploadEvent {
    /// Udalosť pre typ DOM udalosti ťahania; `drop` nesie súbory, rieši sa zvlášť
    pub fn from_drag_event(event_type: &str) -> Option<UploadEvent> {
        match event_type {
            "dragenter" | "dragover" => Some(UploadEvent::DragOver),
            "dragleave" => Some(UploadEvent::DragLeave),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadView {
    pub drag_over: bool,
    pub file_name: Option<String>,
    pub label: String,
    pub supported: bool,
}

pub fn is_supported_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Stav drop zóny a zvoleného súboru
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    drag_over: bool,
    file_name: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Aplikuje udalosť. Vráti `true`, ak sa pustené súbory majú zrkadliť
    /// do file inputu.
    pub fn apply(&mut self, event: UploadEvent) -> bool {
        match event {
            UploadEvent::DragOver => {
                self.drag_over = true;
                false
            }
            UploadEvent::DragLeave => {
                self.drag_over = false;
                false
            }
            UploadEvent::Drop(files) => {
                self.drag_over = false;
                match files.into_iter().next() {
                    Some(first) => {
                        log::info!("Pustený súbor: {}", first);
                        self.file_name = Some(first);
                        true
                    }
                    None => false,
                }
            }
            UploadEvent::FilesSelected(files) => {
                self.file_name = files.into_iter().next();
                false
            }
        }
    }

    pub fn view(&self, label_prefix: &str) -> UploadView {
        let label = match &self.file_name {
            Some(name) => format!("{}{}", label_prefix, name),
            None => String::new(),
        };

        UploadView {
            drag_over: self.drag_over,
            file_name: self.file_name.clone(),
            label,
            supported: self.file_name.as_deref().map(is_supported_file).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_over_toggles_highlight() {
        let mut form = UploadForm::new();
        form.apply(UploadEvent::DragOver);
        assert!(form.is_drag_over());
        form.apply(UploadEvent::DragLeave);
        assert!(!form.is_drag_over());
    }

    #[test]
    fn drag_enter_highlights_like_drag_over() {
        assert_eq!(UploadEvent::from_drag_event("dragenter"), Some(UploadEvent::DragOver));
        assert_eq!(UploadEvent::from_drag_event("dragover"), Some(UploadEvent::DragOver));
        assert_eq!(UploadEvent::from_drag_event("dragleave"), Some(UploadEvent::DragLeave));
        assert_eq!(UploadEvent::from_drag_event("drop"), None);

        let mut form = UploadForm::new();
        for event_type in DRAG_EVENT_TYPES {
            let event = UploadEvent::from_drag_event(event_type).unwrap();
            form.apply(event);
            assert_eq!(form.is_drag_over(), event_type != "dragleave", "after {}", event_type);
        }
    }

    #[test]
    fn drop_selects_first_file_and_requests_mirroring() {
        let mut form = UploadForm::new();
        form.apply(UploadEvent::DragOver);
        let mirror = form.apply(UploadEvent::Drop(vec!["data.csv".into(), "other.csv".into()]));

        assert!(mirror);
        assert!(!form.is_drag_over());
        let view = form.view("Vybraný súbor: ");
        assert_eq!(view.label, "Vybraný súbor: data.csv");
        assert!(view.supported);
    }

    #[test]
    fn empty_drop_changes_nothing() {
        let mut form = UploadForm::new();
        form.apply(UploadEvent::FilesSelected(vec!["a.xlsx".into()]));
        let mirror = form.apply(UploadEvent::Drop(Vec::new()));

        assert!(!mirror);
        assert_eq!(form.file_name(), Some("a.xlsx"));
    }

    #[test]
    fn empty_selection_clears_name() {
        let mut form = UploadForm::new();
        form.apply(UploadEvent::FilesSelected(vec!["a.csv".into()]));
        form.apply(UploadEvent::FilesSelected(Vec::new()));

        let view = form.view("x");
        assert_eq!(view.file_name, None);
        assert_eq!(view.label, "");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_file("Report.XLSX"));
        assert!(is_supported_file("a.b.csv"));
        assert!(!is_supported_file("notes.txt"));
        assert!(!is_supported_file("csv"));
    }

    #[test]
    fn unsupported_file_is_still_displayed() {
        let mut form = UploadForm::new();
        form.apply(UploadEvent::FilesSelected(vec!["image.png".into()]));
        let view = form.view("> ");
        assert_eq!(view.label, "> image.png");
        assert!(!view.supported);
    }
}

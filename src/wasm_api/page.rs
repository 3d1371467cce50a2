//! Napojenie view-modelov na DOM serverom vykreslenej stránky.
//!
//! Každá časť (upload, analýza, čistenie) sa pripája samostatne; ak jej
//! elementy na stránke chýbajú, preskočí sa a ostatné fungujú ďalej.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Element, Event, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::algorithms::{Algorithm, AlgorithmRegistry, ParamPanel};
use crate::columns::ColumnCatalog;
use crate::config::PageConfig;
use crate::form::{
    AnalyzeEvent, AnalyzeForm, AnalyzeView, CleaningEvent, CleaningForm, CleaningView,
    UploadEvent, UploadForm, UploadView, DRAG_EVENT_TYPES,
};
use crate::logging::init_logging;
use super::dom::{self, listen};

/// Pripojí formuláre stránky. `config` môže byť `undefined`, potom sa
/// použijú predvolené id elementov.
#[wasm_bindgen(js_name = attachPage)]
pub fn attach_page(config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Neplatná konfigurácia stránky: {}", e)))?
    };
    init_logging(config.level_filter());

    let document = dom::document().ok_or_else(|| JsValue::from_str("Dokument nie je dostupný"))?;

    let upload = attach_upload(&document, &config).is_some();
    let analyze = attach_analyze(&document, &config).is_some();
    let cleaning = attach_cleaning(&document, &config).is_some();
    log::info!(
        "Stránka pripojená (upload: {}, analýza: {}, čistenie: {})",
        upload, analyze, cleaning
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

struct UploadDom {
    drop_zone: HtmlElement,
    file_input: HtmlInputElement,
    file_name: Element,
    drag_over_class: String,
    label_prefix: String,
}

impl UploadDom {
    fn render(&self, view: &UploadView) {
        let classes = self.drop_zone.class_list();
        let result = if view.drag_over {
            classes.add_1(&self.drag_over_class)
        } else {
            classes.remove_1(&self.drag_over_class)
        };
        if let Err(err) = result {
            log::warn!("Triedu drop zóny sa nepodarilo zmeniť: {:?}", err);
        }

        self.file_name.set_text_content(Some(&view.label));
        if let (Some(name), false) = (&view.file_name, view.supported) {
            log::warn!("Súbor {} nemá podporovanú príponu", name);
        }
    }
}

fn attach_upload(document: &Document, config: &PageConfig) -> Option<()> {
    let ui = Rc::new(UploadDom {
        drop_zone: dom::element_by_id(document, &config.drop_zone_id)?,
        file_input: dom::element_by_id(document, &config.file_input_id)?,
        file_name: dom::element_by_id(document, &config.file_name_id)?,
        drag_over_class: config.drag_over_class.clone(),
        label_prefix: config.file_label_prefix.clone(),
    });
    let state = Rc::new(RefCell::new(UploadForm::new()));

    let on_click = {
        let ui = ui.clone();
        move |_: Event| ui.file_input.click()
    };
    listen(&ui.drop_zone, "click", on_click);

    for event_type in DRAG_EVENT_TYPES {
        let Some(upload_event) = UploadEvent::from_drag_event(event_type) else {
            continue;
        };
        let on_drag = {
            let (ui, state) = (ui.clone(), state.clone());
            move |event: Event| {
                event.prevent_default();
                let mut form = state.borrow_mut();
                form.apply(upload_event.clone());
                ui.render(&form.view(&ui.label_prefix));
            }
        };
        listen(&ui.drop_zone, event_type, on_drag);
    }

    let on_drop = {
        let (ui, state) = (ui.clone(), state.clone());
        move |event: Event| {
            event.prevent_default();
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
                .and_then(|transfer| transfer.files());
            let names = files.as_ref().map(dom::file_names).unwrap_or_default();

            let mut form = state.borrow_mut();
            if form.apply(UploadEvent::Drop(names)) {
                // Súbor musí skončiť v inpute, inak by sa s formulárom neodoslal
                if let Some(files) = &files {
                    ui.file_input.set_files(Some(files));
                }
            }
            ui.render(&form.view(&ui.label_prefix));
        }
    };
    listen(&ui.drop_zone, "drop", on_drop);

    let on_change = {
        let (ui, state) = (ui.clone(), state.clone());
        move |_: Event| {
            let names = ui
                .file_input
                .files()
                .map(|files| dom::file_names(&files))
                .unwrap_or_default();
            let mut form = state.borrow_mut();
            form.apply(UploadEvent::FilesSelected(names));
            ui.render(&form.view(&ui.label_prefix));
        }
    };
    listen(&ui.file_input, "change", on_change);

    Some(())
}

// ---------------------------------------------------------------------------
// Analýza
// ---------------------------------------------------------------------------

struct AnalyzeDom {
    algorithm: HtmlSelectElement,
    target: Option<HtmlSelectElement>,
    features: Vec<HtmlInputElement>,
    panels: Vec<(ParamPanel, HtmlElement)>,
    params: Vec<(String, HtmlInputElement)>,
    error: Option<Element>,
}

impl AnalyzeDom {
    fn render(&self, view: &AnalyzeView) {
        let visible = view.visible_panel();
        for (panel, element) in &self.panels {
            element.set_hidden(visible != Some(*panel));
        }

        if let Some(target) = &self.target {
            render_target(target, view);
        }

        for checkbox in &self.features {
            if let Some(state) = view.feature(&checkbox.value()) {
                checkbox.set_disabled(!state.enabled);
                checkbox.set_checked(state.checked);
            }
        }
    }

    fn show_error(&self, message: Option<&str>) {
        if let Some(element) = &self.error {
            element.set_text_content(message);
        }
    }
}

fn select_options(select: &HtmlSelectElement) -> Vec<HtmlOptionElement> {
    (0..select.length())
        .filter_map(|idx| select.item(idx))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .collect()
}

fn render_target(select: &HtmlSelectElement, view: &AnalyzeView) {
    select.set_disabled(!view.target_enabled);

    for option in select_options(select) {
        let value = option.value();
        // placeholder
        if value.is_empty() {
            continue;
        }
        let enabled = view.target_option(&value).map(|o| o.enabled).unwrap_or(false);
        option.set_disabled(!enabled);
        option.set_hidden(!enabled);
    }

    select.set_value(view.target.as_deref().unwrap_or(""));
}

/// Vstupy pre parametre všetkých algoritmov, ktoré na stránke existujú
fn param_inputs(document: &Document) -> Vec<(String, HtmlInputElement)> {
    let registry = AlgorithmRegistry::instance();
    let names: BTreeSet<String> = Algorithm::ALL
        .iter()
        .flat_map(|&algorithm| registry.get_param_definitions(algorithm))
        .map(|definition| definition.name)
        .collect();

    names
        .into_iter()
        .filter_map(|name| {
            let selector = format!("input[name=\"{}\"]", name);
            let input = document
                .query_selector(&selector)
                .ok()
                .flatten()?
                .dyn_into::<HtmlInputElement>()
                .ok()?;
            Some((name, input))
        })
        .collect()
}

fn read_catalog(
    document: &Document,
    config: &PageConfig,
    features: &[HtmlInputElement],
    target: Option<&HtmlSelectElement>,
) -> ColumnCatalog {
    let mut columns: Vec<String> = features.iter().map(|checkbox| checkbox.value()).collect();
    if let Some(select) = target {
        columns.extend(select_options(select).iter().map(|option| option.value()));
    }

    let numeric_json = match document.get_element_by_id(&config.numeric_columns_id) {
        Some(element) => element.text_content().unwrap_or_default(),
        None => {
            log::warn!("Chýba zoznam numerických stĺpcov #{}", config.numeric_columns_id);
            "[]".to_string()
        }
    };
    ColumnCatalog::from_embedded_json_or_empty(columns, &numeric_json)
}

/// Prevezme hodnoty, ktoré stránka zobrazuje po návrate zo servera
fn restore_analyze(form: &mut AnalyzeForm, ui: &AnalyzeDom) {
    if let Err(err) = form.apply(AnalyzeEvent::AlgorithmChanged(ui.algorithm.value())) {
        log::warn!("{}", err);
    }
    if let Some(target) = &ui.target {
        if let Err(err) = form.apply(AnalyzeEvent::TargetChanged(target.value())) {
            log::debug!("Uložený cieľ sa nepoužije: {}", err);
        }
    }
    for checkbox in ui.features.iter().filter(|c| c.checked()) {
        let event = AnalyzeEvent::FeatureToggled {
            column: checkbox.value(),
            checked: true,
        };
        if let Err(err) = form.apply(event) {
            log::debug!("{}", err);
        }
    }
    for (name, input) in &ui.params {
        form.set_param(name, &input.value());
    }
}

fn attach_analyze(document: &Document, config: &PageConfig) -> Option<()> {
    let algorithm: HtmlSelectElement = dom::element_by_id(document, &config.algorithm_select_id)?;
    let target: Option<HtmlSelectElement> = dom::element_by_id(document, &config.target_select_id);
    let features = dom::inputs_by_name(document, &config.feature_checkbox_name);
    let panels = ParamPanel::ALL
        .iter()
        .filter_map(|&panel| {
            dom::element_by_id::<HtmlElement>(document, &config.panel_id(panel.key()))
                .map(|element| (panel, element))
        })
        .collect();

    let catalog = read_catalog(document, config, &features, target.as_ref());
    log::debug!(
        "Katalóg: {} stĺpcov, {} numerických",
        catalog.len(),
        catalog.numeric_columns().len()
    );

    let ui = Rc::new(AnalyzeDom {
        algorithm,
        target,
        features,
        panels,
        params: param_inputs(document),
        error: dom::element_by_id(document, &config.form_error_id),
    });

    let mut form = AnalyzeForm::new(catalog);
    restore_analyze(&mut form, &ui);
    ui.render(&form.view());
    let state = Rc::new(RefCell::new(form));

    let on_algorithm = {
        let (ui, state) = (ui.clone(), state.clone());
        move |_: Event| {
            let mut form = state.borrow_mut();
            if let Err(err) = form.apply(AnalyzeEvent::AlgorithmChanged(ui.algorithm.value())) {
                log::warn!("{}", err);
            }
            ui.render(&form.view());
        }
    };
    listen(&ui.algorithm, "change", on_algorithm);

    if let Some(target) = &ui.target {
        let on_target = {
            let (ui, state, target) = (ui.clone(), state.clone(), target.clone());
            move |_: Event| {
                let mut form = state.borrow_mut();
                if let Err(err) = form.apply(AnalyzeEvent::TargetChanged(target.value())) {
                    log::warn!("{}", err);
                }
                ui.render(&form.view());
            }
        };
        listen(target, "change", on_target);
    }

    for checkbox in &ui.features {
        let on_toggle = {
            let (ui, state, checkbox) = (ui.clone(), state.clone(), checkbox.clone());
            move |_: Event| {
                let mut form = state.borrow_mut();
                let event = AnalyzeEvent::FeatureToggled {
                    column: checkbox.value(),
                    checked: checkbox.checked(),
                };
                if let Err(err) = form.apply(event) {
                    log::warn!("{}", err);
                }
                ui.render(&form.view());
            }
        };
        listen(checkbox, "change", on_toggle);
    }

    for (name, input) in &ui.params {
        let on_input = {
            let (state, name, input) = (state.clone(), name.clone(), input.clone());
            move |_: Event| state.borrow_mut().set_param(&name, &input.value())
        };
        listen(input, "input", on_input);
    }

    if let Some(form_element) = ui.algorithm.form() {
        let on_submit = {
            let (ui, state) = (ui.clone(), state.clone());
            move |event: Event| match state.borrow().build_request() {
                Ok(request) => {
                    log::debug!(
                        "Odosielam {} s {} príznakmi",
                        request.ml_algorithm.as_str(),
                        request.features.len()
                    );
                    ui.show_error(None);
                }
                Err(err) => {
                    event.prevent_default();
                    log::warn!("Formulár nie je platný: {}", err);
                    ui.show_error(Some(&err.to_string()));
                }
            }
        };
        listen(&form_element, "submit", on_submit);
    }

    Some(())
}

// ---------------------------------------------------------------------------
// Čistenie dát
// ---------------------------------------------------------------------------

struct CleaningDom {
    radios: Vec<HtmlInputElement>,
    fill_value: HtmlInputElement,
}

impl CleaningDom {
    fn render(&self, view: &CleaningView) {
        self.fill_value.set_disabled(!view.fill_value_enabled);
        for radio in &self.radios {
            radio.set_checked(radio.value() == view.missing_strategy.as_str());
        }
    }
}

fn attach_cleaning(document: &Document, config: &PageConfig) -> Option<()> {
    let radios = dom::inputs_by_name(document, &config.missing_method_name);
    if radios.is_empty() {
        log::debug!("Prepínače '{}' na stránke nie sú", config.missing_method_name);
        return None;
    }
    let ui = Rc::new(CleaningDom {
        radios,
        fill_value: dom::element_by_id(document, &config.fill_value_id)?,
    });

    // Na tejto stránke sa rieši len prepínač drop/fill
    let mut form = CleaningForm::new(ColumnCatalog::default());
    if let Some(checked) = ui.radios.iter().find(|r| r.checked()) {
        if let Err(err) = form.apply(CleaningEvent::MissingStrategyChanged(checked.value())) {
            log::warn!("{}", err);
        }
    }
    form.apply(CleaningEvent::FillValueChanged(ui.fill_value.value())).ok();
    ui.render(&form.view());
    let state = Rc::new(RefCell::new(form));

    for radio in &ui.radios {
        let on_change = {
            let (ui, state, radio) = (ui.clone(), state.clone(), radio.clone());
            move |_: Event| {
                let mut form = state.borrow_mut();
                if let Err(err) = form.apply(CleaningEvent::MissingStrategyChanged(radio.value())) {
                    log::warn!("{}", err);
                }
                ui.render(&form.view());
            }
        };
        listen(radio, "change", on_change);
    }

    let on_fill = {
        let (ui, state) = (ui.clone(), state.clone());
        move |_: Event| {
            state
                .borrow_mut()
                .apply(CleaningEvent::FillValueChanged(ui.fill_value.value()))
                .ok();
        }
    };
    listen(&ui.fill_value, "input", on_fill);

    Some(())
}

use std::collections::{HashMap, HashSet};
use serde::Serialize;

use crate::algorithms::{Algorithm, AlgorithmFactory, AlgorithmKind, ParamPanel};
use crate::columns::ColumnCatalog;
use crate::error::FormError;
use super::request::{RunRequest, RunRequestBuilder};
use super::view::{CheckboxState, OptionState, PanelState};

/// Udalosti analytického formulára (výber algoritmu, cieľa a príznakov)
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeEvent {
    AlgorithmChanged(String),
    TargetChanged(String),
    FeatureToggled { column: String, checked: bool },
    ParamChanged { name: String, value: String },
}

/// Odvodený stav všetkých závislých ovládacích prvkov
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeView {
    pub algorithm: Option<Algorithm>,
    pub kind: Option<AlgorithmKind>,
    pub target_enabled: bool,
    pub target: Option<String>,
    pub target_options: Vec<OptionState>,
    pub features: Vec<CheckboxState>,
    pub panels: Vec<PanelState<ParamPanel>>,
}

impl AnalyzeView {
    pub fn visible_panel(&self) -> Option<ParamPanel> {
        self.panels.iter().find(|p| p.visible).map(|p| p.panel)
    }

    pub fn feature(&self, column: &str) -> Option<&CheckboxState> {
        self.features.iter().find(|f| f.value == column)
    }

    pub fn target_option(&self, column: &str) -> Option<&OptionState> {
        self.target_options.iter().find(|o| o.value == column)
    }
}

/// View-model formulára pre ML beh.
///
/// Stav sa mení len cez udalosti, po každej zmene sa znovu vynútia invarianty:
/// cieľ musí byť kompatibilný so zvoleným algoritmom a nikdy nie je zároveň
/// príznakom, zaškrtnuté môžu byť len povolené príznaky.
#[derive(Debug, Clone)]
pub struct AnalyzeForm {
    catalog: ColumnCatalog,
    algorithm: Option<Algorithm>,
    target: Option<String>,
    features: HashSet<String>,
    params: HashMap<String, String>,
}

impl AnalyzeForm {
    pub fn new(catalog: ColumnCatalog) -> Self {
        Self {
            catalog,
            algorithm: None,
            target: None,
            features: HashSet::new(),
            params: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Zvolené príznaky v poradí stĺpcov
    pub fn selected_features(&self) -> Vec<&str> {
        self.catalog
            .columns()
            .iter()
            .filter(|c| self.features.contains(c.as_str()))
            .map(|c| c.as_str())
            .collect()
    }

    pub fn apply(&mut self, event: AnalyzeEvent) -> Result<(), FormError> {
        match event {
            AnalyzeEvent::AlgorithmChanged(value) => {
                let algorithm = AlgorithmFactory::parse(&value)?;
                self.select_algorithm(algorithm);
            }
            AnalyzeEvent::TargetChanged(value) => self.select_target(&value)?,
            AnalyzeEvent::FeatureToggled { column, checked } => self.toggle_feature(&column, checked)?,
            AnalyzeEvent::ParamChanged { name, value } => self.set_param(&name, &value),
        }
        Ok(())
    }

    pub fn select_algorithm(&mut self, algorithm: Option<Algorithm>) {
        log::debug!("Algoritmus: {:?}", algorithm.map(|a| a.as_str()));
        self.algorithm = algorithm;
        self.reconcile();
    }

    /// Nastaví cieľový stĺpec; prázdna hodnota cieľ zruší
    pub fn select_target(&mut self, column: &str) -> Result<(), FormError> {
        if column.is_empty() {
            self.target = None;
            self.reconcile();
            return Ok(());
        }

        if !self.catalog.contains(column) {
            return Err(FormError::UnknownColumn(column.to_string()));
        }

        if !self.is_target_selectable(column) {
            let algorithm = self.algorithm.map(|a| a.as_str()).unwrap_or("");
            return Err(FormError::IncompatibleTarget {
                algorithm,
                column: column.to_string(),
            });
        }

        self.target = Some(column.to_string());
        self.reconcile();
        Ok(())
    }

    /// Zaškrtnutie zakázaného príznaku sa ticho ignoruje
    pub fn toggle_feature(&mut self, column: &str, checked: bool) -> Result<(), FormError> {
        if !self.catalog.contains(column) {
            return Err(FormError::UnknownColumn(column.to_string()));
        }

        if !checked {
            self.features.remove(column);
        } else if self.is_feature_enabled(column) {
            self.features.insert(column.to_string());
        } else {
            log::debug!("Príznak '{}' je zakázaný, ignorujem", column);
        }
        Ok(())
    }

    pub fn set_param(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Či je výber cieľa povolený (algoritmy bez učiteľa cieľ nemajú)
    pub fn is_target_enabled(&self) -> bool {
        self.algorithm.map(|a| a.kind().requires_target()).unwrap_or(true)
    }

    pub fn is_target_selectable(&self, column: &str) -> bool {
        match self.algorithm {
            None => self.catalog.contains(column),
            Some(algorithm) => self
                .catalog
                .column_type(column)
                .map(|t| algorithm.kind().accepts_target(t))
                .unwrap_or(false),
        }
    }

    /// Príznak zhodný s cieľom je vždy zakázaný. Regresia pripúšťa len
    /// numerické príznaky, ostatné typy (aj nezvolený algoritmus) všetky.
    pub fn is_feature_enabled(&self, column: &str) -> bool {
        if !self.catalog.contains(column) || self.target.as_deref() == Some(column) {
            return false;
        }
        match self.algorithm.map(|a| a.kind()) {
            Some(AlgorithmKind::Regression) => self.catalog.is_numeric(column),
            _ => true,
        }
    }

    fn reconcile(&mut self) {
        if let Some(target) = self.target.clone() {
            if !self.is_target_selectable(&target) {
                log::debug!("Cieľ '{}' nie je kompatibilný, rušíme ho", target);
                self.target = None;
            }
        }

        let disabled: Vec<String> = self
            .features
            .iter()
            .filter(|f| !self.is_feature_enabled(f))
            .cloned()
            .collect();
        for feature in disabled {
            self.features.remove(&feature);
        }
    }

    pub fn view(&self) -> AnalyzeView {
        let target_enabled = self.is_target_enabled();

        let target_options = self
            .catalog
            .columns()
            .iter()
            .map(|column| OptionState {
                value: column.clone(),
                enabled: target_enabled && self.is_target_selectable(column),
                selected: self.target.as_deref() == Some(column.as_str()),
            })
            .collect();

        let features = self
            .catalog
            .columns()
            .iter()
            .map(|column| CheckboxState {
                value: column.clone(),
                enabled: self.is_feature_enabled(column),
                checked: self.features.contains(column),
            })
            .collect();

        let panels = ParamPanel::ALL
            .iter()
            .map(|&panel| PanelState {
                panel,
                visible: self.algorithm.map(|a| a.panel() == panel).unwrap_or(false),
            })
            .collect();

        AnalyzeView {
            algorithm: self.algorithm,
            kind: self.algorithm.map(|a| a.kind()),
            target_enabled,
            target: self.target.clone(),
            target_options,
            features,
            panels,
        }
    }

    /// Zostaví zvalidovaný požiadavok z aktuálneho stavu
    pub fn build_request(&self) -> Result<RunRequest, FormError> {
        let algorithm = self.algorithm.ok_or(FormError::NoAlgorithm)?;

        let mut builder = RunRequestBuilder::new()
            .algorithm(algorithm)
            .features(self.selected_features());

        if let Some(target) = &self.target {
            builder = builder.target(target);
        }
        for (key, value) in &self.params {
            builder = builder.param(key, value);
        }

        builder.build(&self.catalog)
    }
}

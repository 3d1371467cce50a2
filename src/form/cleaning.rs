use serde::Serialize;

use crate::columns::ColumnCatalog;
use crate::error::FormError;
use super::view::OptionState;

/// Spracovanie chýbajúcich hodnôt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStrategy {
    Drop,
    Fill,
}

impl MissingStrategy {
    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value {
            "drop" => Ok(MissingStrategy::Drop),
            "fill" => Ok(MissingStrategy::Fill),
            other => Err(FormError::UnknownStrategy {
                field: "missing_method",
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissingStrategy::Drop => "drop",
            MissingStrategy::Fill => "fill",
        }
    }
}

/// Spracovanie duplicitných riadkov
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateStrategy {
    Drop,
    Mark,
}

impl DuplicateStrategy {
    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value {
            "drop" => Ok(DuplicateStrategy::Drop),
            "mark" => Ok(DuplicateStrategy::Mark),
            other => Err(FormError::UnknownStrategy {
                field: "duplicate_method",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CleaningEvent {
    MissingStrategyChanged(String),
    FillValueChanged(String),
    OutlierColumnChanged(String),
    ThresholdChanged(String),
    ReplacementChanged(String),
    DuplicateStrategyChanged(String),
}

/// Pravidlo pre chýbajúce hodnoty v tvare, aký očakáva server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MissingValuesRule {
    Drop,
    Fill { fill_value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierRule {
    pub column: String,
    pub threshold: f64,
    /// Bez náhrady server odľahlé riadky odstráni
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatesRule {
    pub method: DuplicateStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningRules {
    pub missing_values: MissingValuesRule,
    pub outliers: Option<OutlierRule>,
    pub duplicates: DuplicatesRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningView {
    pub missing_strategy: MissingStrategy,
    pub drop_selected: bool,
    pub fill_value_enabled: bool,
    pub outlier_options: Vec<OptionState>,
    pub outlier_inputs_enabled: bool,
    pub duplicate_strategy: DuplicateStrategy,
}

pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 3.0;

/// Formulár čistenia dát
#[derive(Debug, Clone)]
pub struct CleaningForm {
    catalog: ColumnCatalog,
    missing: MissingStrategy,
    fill_value: String,
    outlier_column: Option<String>,
    threshold: String,
    replacement: String,
    duplicates: DuplicateStrategy,
}

impl CleaningForm {
    pub fn new(catalog: ColumnCatalog) -> Self {
        Self {
            catalog,
            missing: MissingStrategy::Drop,
            fill_value: String::new(),
            outlier_column: None,
            threshold: String::new(),
            replacement: String::new(),
            duplicates: DuplicateStrategy::Drop,
        }
    }

    pub fn missing_strategy(&self) -> MissingStrategy {
        self.missing
    }

    pub fn apply(&mut self, event: CleaningEvent) -> Result<(), FormError> {
        match event {
            CleaningEvent::MissingStrategyChanged(value) => {
                self.missing = MissingStrategy::parse(&value)?;
            }
            // Hodnotu si pamätáme aj pri 'drop', odošle sa len pri 'fill'
            CleaningEvent::FillValueChanged(value) => self.fill_value = value,
            CleaningEvent::OutlierColumnChanged(value) => {
                if value.is_empty() {
                    self.outlier_column = None;
                } else if self.catalog.is_numeric(&value) {
                    self.outlier_column = Some(value);
                } else if self.catalog.contains(&value) {
                    return Err(FormError::NonNumericColumn(value));
                } else {
                    return Err(FormError::UnknownColumn(value));
                }
            }
            CleaningEvent::ThresholdChanged(value) => self.threshold = value,
            CleaningEvent::ReplacementChanged(value) => self.replacement = value,
            CleaningEvent::DuplicateStrategyChanged(value) => {
                self.duplicates = DuplicateStrategy::parse(&value)?;
            }
        }
        Ok(())
    }

    pub fn is_fill_value_enabled(&self) -> bool {
        self.missing == MissingStrategy::Fill
    }

    pub fn view(&self) -> CleaningView {
        let outlier_options = self
            .catalog
            .numeric_columns()
            .into_iter()
            .map(|column| OptionState {
                value: column.to_string(),
                enabled: true,
                selected: self.outlier_column.as_deref() == Some(column),
            })
            .collect();

        CleaningView {
            missing_strategy: self.missing,
            drop_selected: self.missing == MissingStrategy::Drop,
            fill_value_enabled: self.is_fill_value_enabled(),
            outlier_options,
            outlier_inputs_enabled: self.outlier_column.is_some(),
            duplicate_strategy: self.duplicates,
        }
    }

    pub fn build_rules(&self) -> Result<CleaningRules, FormError> {
        let missing_values = match self.missing {
            MissingStrategy::Drop => MissingValuesRule::Drop,
            MissingStrategy::Fill => {
                if self.fill_value.trim().is_empty() {
                    return Err(FormError::MissingFillValue);
                }
                MissingValuesRule::Fill {
                    fill_value: self.fill_value.clone(),
                }
            }
        };

        let outliers = match &self.outlier_column {
            Some(column) => Some(OutlierRule {
                column: column.clone(),
                threshold: self.parse_threshold()?,
                replacement: Some(self.replacement.trim())
                    .filter(|r| !r.is_empty())
                    .map(str::to_string),
            }),
            None => None,
        };

        Ok(CleaningRules {
            missing_values,
            outliers,
            duplicates: DuplicatesRule {
                method: self.duplicates,
            },
        })
    }

    fn parse_threshold(&self) -> Result<f64, FormError> {
        let text = self.threshold.trim();
        if text.is_empty() {
            return Ok(DEFAULT_OUTLIER_THRESHOLD);
        }

        let value: f64 = text.parse().map_err(|_| FormError::InvalidParam {
            name: "threshold".to_string(),
            value: text.to_string(),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(FormError::ParamOutOfRange {
                name: "threshold".to_string(),
                value,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CleaningForm {
        CleaningForm::new(ColumnCatalog::new(
            ["age", "salary", "name"],
            &["age".to_string(), "salary".to_string()],
        ))
    }

    fn strategy(form: &mut CleaningForm, value: &str) {
        form.apply(CleaningEvent::MissingStrategyChanged(value.to_string())).unwrap();
    }

    #[test]
    fn exactly_one_of_drop_and_fill_value_is_active() {
        let mut form = form();
        for value in ["fill", "drop", "fill", "fill", "drop", "drop"] {
            strategy(&mut form, value);
            let view = form.view();
            assert!(view.drop_selected ^ view.fill_value_enabled, "after {}", value);
        }
    }

    #[test]
    fn fill_value_is_editable_only_for_fill() {
        let mut form = form();
        assert!(!form.view().fill_value_enabled);
        strategy(&mut form, "fill");
        assert!(form.view().fill_value_enabled);
        strategy(&mut form, "drop");
        assert!(!form.view().fill_value_enabled);
    }

    #[test]
    fn fill_requires_value() {
        let mut form = form();
        strategy(&mut form, "fill");
        assert!(matches!(form.build_rules(), Err(FormError::MissingFillValue)));

        form.apply(CleaningEvent::FillValueChanged("0".to_string())).unwrap();
        let rules = form.build_rules().unwrap();
        assert_eq!(rules.missing_values, MissingValuesRule::Fill { fill_value: "0".to_string() });
    }

    #[test]
    fn drop_ignores_remembered_fill_value() {
        let mut form = form();
        strategy(&mut form, "fill");
        form.apply(CleaningEvent::FillValueChanged("n/a".to_string())).unwrap();
        strategy(&mut form, "drop");
        assert_eq!(form.build_rules().unwrap().missing_values, MissingValuesRule::Drop);
    }

    #[test]
    fn outlier_column_must_be_numeric() {
        let mut form = form();
        assert!(matches!(
            form.apply(CleaningEvent::OutlierColumnChanged("name".to_string())),
            Err(FormError::NonNumericColumn(_))
        ));
        assert!(!form.view().outlier_inputs_enabled);

        form.apply(CleaningEvent::OutlierColumnChanged("age".to_string())).unwrap();
        let view = form.view();
        assert!(view.outlier_inputs_enabled);
        assert_eq!(view.outlier_options.len(), 2);
    }

    #[test]
    fn outlier_rule_uses_defaults() {
        let mut form = form();
        form.apply(CleaningEvent::OutlierColumnChanged("age".to_string())).unwrap();
        form.apply(CleaningEvent::ReplacementChanged("  ".to_string())).unwrap();

        let rule = form.build_rules().unwrap().outliers.unwrap();
        assert_eq!(rule.threshold, DEFAULT_OUTLIER_THRESHOLD);
        assert_eq!(rule.replacement, None);

        form.apply(CleaningEvent::ThresholdChanged("-1".to_string())).unwrap();
        assert!(matches!(form.build_rules(), Err(FormError::ParamOutOfRange { .. })));
    }

    #[test]
    fn rules_serialize_like_server_dictionary() {
        let mut form = form();
        strategy(&mut form, "fill");
        form.apply(CleaningEvent::FillValueChanged("0".to_string())).unwrap();
        form.apply(CleaningEvent::DuplicateStrategyChanged("mark".to_string())).unwrap();

        let json = serde_json::to_value(form.build_rules().unwrap()).unwrap();
        assert_eq!(json["missing_values"]["method"], "fill");
        assert_eq!(json["missing_values"]["fill_value"], "0");
        assert!(json["outliers"].is_null());
        assert_eq!(json["duplicates"]["method"], "mark");
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let mut form = form();
        let err = form
            .apply(CleaningEvent::MissingStrategyChanged("interpolate".to_string()))
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownStrategy { field: "missing_method", .. }));
        assert_eq!(form.missing_strategy(), MissingStrategy::Drop);
    }
}

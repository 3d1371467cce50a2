use std::collections::HashMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::columns::ColumnCatalog;
use crate::error::FormError;
use super::view::PanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Histogram,
    Scatter,
    Line,
    Bar,
    Box,
    Pie,
    Heatmap,
}

/// Druh vstupu v paneli grafu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Column,
    NumericColumn,
    /// Viac numerických stĺpcov, prázdny výber = všetky
    NumericColumns,
    PositiveInteger,
    /// Číslo v intervale [0, 1)
    Fraction,
    Flag,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, kind: FieldKind, required: bool) -> ChartField {
    ChartField { name, kind, required }
}

const HISTOGRAM_FIELDS: &[ChartField] = &[
    field("hist_column", FieldKind::Column, true),
    field("hist_nbins", FieldKind::PositiveInteger, false),
    field("hist_color_column", FieldKind::Column, false),
];

const SCATTER_FIELDS: &[ChartField] = &[
    field("scatter_x_column", FieldKind::Column, true),
    field("scatter_y_column", FieldKind::Column, true),
    field("scatter_color_column", FieldKind::Column, false),
    field("scatter_size_column", FieldKind::NumericColumn, false),
];

const LINE_FIELDS: &[ChartField] = &[
    field("line_x_column", FieldKind::Column, true),
    field("line_y_column", FieldKind::Column, true),
    field("line_color_column", FieldKind::Column, false),
    field("line_markers", FieldKind::Flag, false),
];

const BAR_FIELDS: &[ChartField] = &[
    field("bar_x_column", FieldKind::Column, true),
    field("bar_y_column", FieldKind::Column, true),
    field("bar_color_column", FieldKind::Column, false),
    field("bar_orientation", FieldKind::Choice(&["v", "h"]), false),
    field("bar_mode", FieldKind::Choice(&["group", "stack", "overlay", "relative"]), false),
];

const BOX_FIELDS: &[ChartField] = &[
    field("box_y_column", FieldKind::Column, true),
    field("box_x_column", FieldKind::Column, false),
    field("box_color_column", FieldKind::Column, false),
    field("box_notched", FieldKind::Flag, false),
];

const PIE_FIELDS: &[ChartField] = &[
    field("pie_names_column", FieldKind::Column, true),
    field("pie_values_column", FieldKind::NumericColumn, true),
    field("pie_hole", FieldKind::Fraction, false),
];

const HEATMAP_FIELDS: &[ChartField] = &[
    field("heatmap_columns", FieldKind::NumericColumns, false),
];

impl ChartType {
    pub const ALL: [ChartType; 7] = [
        ChartType::Histogram,
        ChartType::Scatter,
        ChartType::Line,
        ChartType::Bar,
        ChartType::Box,
        ChartType::Pie,
        ChartType::Heatmap,
    ];

    pub fn parse(value: &str) -> Result<Self, FormError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| FormError::UnknownChartType(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Histogram => "histogram",
            ChartType::Scatter => "scatter",
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Box => "box",
            ChartType::Pie => "pie",
            ChartType::Heatmap => "heatmap",
        }
    }

    pub fn fields(&self) -> &'static [ChartField] {
        match self {
            ChartType::Histogram => HISTOGRAM_FIELDS,
            ChartType::Scatter => SCATTER_FIELDS,
            ChartType::Line => LINE_FIELDS,
            ChartType::Bar => BAR_FIELDS,
            ChartType::Box => BOX_FIELDS,
            ChartType::Pie => PIE_FIELDS,
            ChartType::Heatmap => HEATMAP_FIELDS,
        }
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields().iter().filter(|f| f.required).map(|f| f.name).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    TypeChanged(String),
    TitleChanged(String),
    FieldChanged { name: String, value: String },
    FlagChanged { name: String, checked: bool },
    ColumnsChanged { name: String, columns: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub chart_type: Option<ChartType>,
    pub panels: Vec<PanelState<ChartType>>,
    pub required_fields: Vec<&'static str>,
}

/// Telo požiadavky na vykreslenie grafu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub chart_type: ChartType,
    pub params: Map<String, Value>,
}

/// Formulár vizualizácie: typ grafu a jeho parametre
#[derive(Debug, Clone)]
pub struct ChartForm {
    catalog: ColumnCatalog,
    chart_type: Option<ChartType>,
    title: String,
    values: HashMap<String, FieldValue>,
}

impl ChartForm {
    pub fn new(catalog: ColumnCatalog) -> Self {
        Self {
            catalog,
            chart_type: None,
            title: String::new(),
            values: HashMap::new(),
        }
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart_type
    }

    pub fn apply(&mut self, event: ChartEvent) -> Result<(), FormError> {
        match event {
            ChartEvent::TypeChanged(value) => {
                self.chart_type = if value.is_empty() { None } else { Some(ChartType::parse(&value)?) };
            }
            ChartEvent::TitleChanged(title) => self.title = title,
            ChartEvent::FieldChanged { name, value } => {
                self.values.insert(name, FieldValue::Text(value));
            }
            ChartEvent::FlagChanged { name, checked } => {
                self.values.insert(name, FieldValue::Flag(checked));
            }
            ChartEvent::ColumnsChanged { name, columns } => {
                self.values.insert(name, FieldValue::List(columns));
            }
        }
        Ok(())
    }

    pub fn view(&self) -> ChartView {
        ChartView {
            chart_type: self.chart_type,
            panels: ChartType::ALL
                .iter()
                .map(|&panel| PanelState {
                    panel,
                    visible: self.chart_type == Some(panel),
                })
                .collect(),
            required_fields: self.chart_type.map(|t| t.required_fields()).unwrap_or_default(),
        }
    }

    fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text.trim(),
            _ => "",
        }
    }

    fn check_column(&self, column: &str, numeric: bool) -> Result<(), FormError> {
        if !self.catalog.contains(column) {
            return Err(FormError::UnknownColumn(column.to_string()));
        }
        if numeric && !self.catalog.is_numeric(column) {
            return Err(FormError::NonNumericColumn(column.to_string()));
        }
        Ok(())
    }

    /// Zostaví parametre len pre polia zvoleného typu grafu
    pub fn build_payload(&self) -> Result<ChartPayload, FormError> {
        let chart_type = self
            .chart_type
            .ok_or_else(|| FormError::UnknownChartType(String::new()))?;
        let mut params = Map::new();

        if !self.title.trim().is_empty() {
            params.insert("chart_title".to_string(), Value::from(self.title.trim()));
        }

        for field in chart_type.fields() {
            let value = match field.kind {
                FieldKind::Flag => match self.values.get(field.name) {
                    Some(FieldValue::Flag(checked)) => Some(Value::Bool(*checked)),
                    _ => Some(Value::Bool(false)),
                },
                FieldKind::NumericColumns => match self.values.get(field.name) {
                    Some(FieldValue::List(columns)) if !columns.is_empty() => {
                        for column in columns {
                            self.check_column(column, true)?;
                        }
                        Some(Value::from(columns.clone()))
                    }
                    _ => None,
                },
                kind => self.parse_text_field(field.name, kind)?,
            };

            match value {
                Some(value) => {
                    params.insert(field.name.to_string(), value);
                }
                None if field.required => {
                    return Err(FormError::MissingChartField {
                        chart: chart_type.as_str(),
                        field: field.name,
                    });
                }
                None => {}
            }
        }

        Ok(ChartPayload { chart_type, params })
    }

    fn parse_text_field(&self, name: &'static str, kind: FieldKind) -> Result<Option<Value>, FormError> {
        let text = self.text(name);
        if text.is_empty() {
            return Ok(None);
        }

        let invalid = || FormError::InvalidParam {
            name: name.to_string(),
            value: text.to_string(),
        };

        let value = match kind {
            FieldKind::Column => {
                self.check_column(text, false)?;
                Value::from(text)
            }
            FieldKind::NumericColumn => {
                self.check_column(text, true)?;
                Value::from(text)
            }
            FieldKind::PositiveInteger => {
                let n: u32 = text.parse().map_err(|_| invalid())?;
                if n == 0 {
                    return Err(FormError::ParamOutOfRange { name: name.to_string(), value: 0.0 });
                }
                Value::from(n)
            }
            FieldKind::Fraction => {
                let x: f64 = text.parse().map_err(|_| invalid())?;
                if !(0.0..1.0).contains(&x) {
                    return Err(FormError::ParamOutOfRange { name: name.to_string(), value: x });
                }
                Value::from(x)
            }
            FieldKind::Choice(options) => {
                if !options.contains(&text) {
                    return Err(invalid());
                }
                Value::from(text)
            }
            FieldKind::Flag | FieldKind::NumericColumns => return Ok(None),
        };

        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ChartForm {
        ChartForm::new(ColumnCatalog::new(
            ["age", "salary", "city"],
            &["age".to_string(), "salary".to_string()],
        ))
    }

    fn set(form: &mut ChartForm, name: &str, value: &str) {
        form.apply(ChartEvent::FieldChanged {
            name: name.to_string(),
            value: value.to_string(),
        })
        .unwrap();
    }

    #[test]
    fn one_panel_per_chart_type() {
        let mut form = form();
        assert!(form.view().panels.iter().all(|p| !p.visible));

        form.apply(ChartEvent::TypeChanged("pie".to_string())).unwrap();
        let view = form.view();
        let visible: Vec<_> = view.panels.iter().filter(|p| p.visible).map(|p| p.panel).collect();
        assert_eq!(visible, vec![ChartType::Pie]);
        assert_eq!(view.required_fields, vec!["pie_names_column", "pie_values_column"]);
    }

    #[test]
    fn scatter_requires_both_axes() {
        let mut form = form();
        form.apply(ChartEvent::TypeChanged("scatter".to_string())).unwrap();
        set(&mut form, "scatter_x_column", "age");

        let err = form.build_payload().unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingChartField { chart: "scatter", field: "scatter_y_column" }
        ));

        set(&mut form, "scatter_y_column", "salary");
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.params["scatter_x_column"], "age");
        assert!(!payload.params.contains_key("scatter_color_column"));
    }

    #[test]
    fn payload_only_contains_fields_of_current_chart() {
        let mut form = form();
        set(&mut form, "hist_column", "age");
        set(&mut form, "box_y_column", "salary");
        form.apply(ChartEvent::TypeChanged("box".to_string())).unwrap();
        form.apply(ChartEvent::TitleChanged(" Mzdy ".to_string())).unwrap();

        let payload = form.build_payload().unwrap();
        assert_eq!(payload.chart_type, ChartType::Box);
        assert_eq!(payload.params["chart_title"], "Mzdy");
        assert_eq!(payload.params["box_notched"], false);
        assert!(!payload.params.contains_key("hist_column"));
    }

    #[test]
    fn heatmap_accepts_empty_or_numeric_columns() {
        let mut form = form();
        form.apply(ChartEvent::TypeChanged("heatmap".to_string())).unwrap();
        assert!(form.build_payload().unwrap().params.is_empty());

        form.apply(ChartEvent::ColumnsChanged {
            name: "heatmap_columns".to_string(),
            columns: vec!["age".to_string(), "city".to_string()],
        })
        .unwrap();
        assert!(matches!(form.build_payload(), Err(FormError::NonNumericColumn(c)) if c == "city"));
    }

    #[test]
    fn numeric_parameters_are_validated() {
        let mut form = form();
        form.apply(ChartEvent::TypeChanged("pie".to_string())).unwrap();
        set(&mut form, "pie_names_column", "city");
        set(&mut form, "pie_values_column", "salary");
        set(&mut form, "pie_hole", "1.0");
        assert!(matches!(form.build_payload(), Err(FormError::ParamOutOfRange { .. })));

        set(&mut form, "pie_hole", "0.4");
        assert_eq!(form.build_payload().unwrap().params["pie_hole"], 0.4);

        form.apply(ChartEvent::TypeChanged("histogram".to_string())).unwrap();
        set(&mut form, "hist_column", "age");
        set(&mut form, "hist_nbins", "ten");
        assert!(matches!(form.build_payload(), Err(FormError::InvalidParam { .. })));
    }

    #[test]
    fn unknown_column_and_choice_are_rejected() {
        let mut form = form();
        form.apply(ChartEvent::TypeChanged("bar".to_string())).unwrap();
        set(&mut form, "bar_x_column", "city");
        set(&mut form, "bar_y_column", "ghost");
        assert!(matches!(form.build_payload(), Err(FormError::UnknownColumn(_))));

        set(&mut form, "bar_y_column", "salary");
        set(&mut form, "bar_orientation", "diagonal");
        assert!(matches!(form.build_payload(), Err(FormError::InvalidParam { .. })));
    }

    #[test]
    fn unknown_chart_type_is_rejected() {
        let mut form = form();
        assert!(matches!(
            form.apply(ChartEvent::TypeChanged("radar".to_string())),
            Err(FormError::UnknownChartType(_))
        ));
    }
}

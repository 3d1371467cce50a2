use serde::{Serialize, Deserialize};

/// Konfigurácia stránky: id elementov a texty. Z JavaScriptu prichádza ako
/// obyčajný objekt, chýbajúce polia dostanú predvolené hodnoty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub drop_zone_id: String,
    pub file_input_id: String,
    pub file_name_id: String,
    pub drag_over_class: String,
    pub file_label_prefix: String,

    pub algorithm_select_id: String,
    pub target_select_id: String,
    pub feature_checkbox_name: String,
    pub param_panel_prefix: String,
    pub numeric_columns_id: String,
    pub form_error_id: String,

    pub missing_method_name: String,
    pub fill_value_id: String,

    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            drop_zone_id: "drop-zone".to_string(),
            file_input_id: "datafile".to_string(),
            file_name_id: "file-name".to_string(),
            drag_over_class: "dragover".to_string(),
            file_label_prefix: "Vybraný súbor: ".to_string(),
            algorithm_select_id: "ml_algorithm".to_string(),
            target_select_id: "target_column".to_string(),
            feature_checkbox_name: "features".to_string(),
            param_panel_prefix: "params-".to_string(),
            numeric_columns_id: "numeric-columns-data".to_string(),
            form_error_id: "form-error".to_string(),
            missing_method_name: "missing_method".to_string(),
            fill_value_id: "fill_value".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn panel_id(&self, key: &str) -> String {
        format!("{}{}", self.param_panel_prefix, key)
    }

    /// Neznáma úroveň logovania spadne na `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PageConfig = serde_json::from_str(r#"{"drop_zone_id": "zone"}"#).unwrap();
        assert_eq!(config.drop_zone_id, "zone");
        assert_eq!(config.file_input_id, "datafile");
        assert_eq!(config.panel_id("kmeans"), "params-kmeans");
    }

    #[test]
    fn log_level_is_parsed() {
        let mut config = PageConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}

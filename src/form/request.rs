use std::collections::HashMap;
use serde::Serialize;

use crate::algorithms::{Algorithm, AlgorithmKind, AlgorithmRegistry, ParamDefinition};
use crate::columns::ColumnCatalog;
use crate::error::FormError;

/// Parametre behu podľa zvoleného algoritmu
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RunParams {
    /// `test_size` je v percentách, server ho delí stovkou
    Supervised { test_size: f64 },
    Kmeans { n_clusters: u32 },
    Dbscan { eps: f64, min_samples: u32 },
    Pca { n_components: u32 },
}

/// Zvalidovaný požiadavok na ML beh, tak ako ho odošle formulár
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRequest {
    pub ml_algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    pub features: Vec<String>,
    #[serde(flatten)]
    pub params: RunParams,
}

impl RunRequest {
    /// Podiel testovacej množiny ako zlomok (0.2 pre 20 %)
    pub fn test_fraction(&self) -> Option<f64> {
        match self.params {
            RunParams::Supervised { test_size } => Some(test_size / 100.0),
            _ => None,
        }
    }

    /// Polia formulára v poradí, v akom ich posiela prehliadač
    /// (`features` sa opakuje pre každý zvolený príznak)
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("ml_algorithm".to_string(), self.ml_algorithm.as_str().to_string())];

        if let Some(target) = &self.target_column {
            fields.push(("target_column".to_string(), target.clone()));
        }
        for feature in &self.features {
            fields.push(("features".to_string(), feature.clone()));
        }

        match &self.params {
            RunParams::Supervised { test_size } => {
                fields.push(("test_size".to_string(), test_size.to_string()));
            }
            RunParams::Kmeans { n_clusters } => {
                fields.push(("n_clusters".to_string(), n_clusters.to_string()));
            }
            RunParams::Dbscan { eps, min_samples } => {
                fields.push(("eps".to_string(), eps.to_string()));
                fields.push(("min_samples".to_string(), min_samples.to_string()));
            }
            RunParams::Pca { n_components } => {
                fields.push(("n_components".to_string(), n_components.to_string()));
            }
        }

        fields
    }
}

/// Builder pre RunRequest s validáciou voči katalógu stĺpcov
#[derive(Debug, Clone, Default)]
pub struct RunRequestBuilder {
    algorithm: Option<Algorithm>,
    target: Option<String>,
    features: Vec<String>,
    params: HashMap<String, String>,
}

impl RunRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Nastaví cieľový stĺpec; prázdny reťazec znamená bez cieľa
    pub fn target(mut self, target: &str) -> Self {
        self.target = if target.is_empty() { None } else { Some(target.to_string()) };
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.features.push(feature.to_string());
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self, catalog: &ColumnCatalog) -> Result<RunRequest, FormError> {
        let algorithm = self.algorithm.ok_or(FormError::NoAlgorithm)?;
        let kind = algorithm.kind();

        if self.features.is_empty() {
            return Err(FormError::NoFeatures);
        }
        for feature in &self.features {
            if !catalog.contains(feature) {
                return Err(FormError::UnknownColumn(feature.clone()));
            }
            if kind == AlgorithmKind::Regression && !catalog.is_numeric(feature) {
                return Err(FormError::NonNumericColumn(feature.clone()));
            }
        }

        let target_column = if kind.requires_target() {
            let target = self.target.ok_or(FormError::MissingTarget(algorithm.as_str()))?;
            let column_type = catalog
                .column_type(&target)
                .ok_or_else(|| FormError::UnknownColumn(target.clone()))?;
            AlgorithmRegistry::check_target(algorithm, &target, column_type)?;
            if self.features.contains(&target) {
                return Err(FormError::TargetIsFeature(target));
            }
            Some(target)
        } else {
            None
        };

        let params = Self::parse_params(algorithm, &self.params, self.features.len())?;

        Ok(RunRequest {
            ml_algorithm: algorithm,
            target_column,
            features: self.features,
            params,
        })
    }

    fn parse_params(
        algorithm: Algorithm,
        raw: &HashMap<String, String>,
        feature_count: usize,
    ) -> Result<RunParams, FormError> {
        let definitions = AlgorithmRegistry::instance().get_param_definitions(algorithm);
        let value = |name: &str| param_value(algorithm, &definitions, raw, name);
        let count = |name: &str| value(name).and_then(|v| to_count(name, v));

        let params = match algorithm {
            Algorithm::LinearRegression
            | Algorithm::RandomForestRegression
            | Algorithm::RandomForestClassification => RunParams::Supervised {
                test_size: value("test_size")?,
            },
            Algorithm::Kmeans => RunParams::Kmeans {
                n_clusters: count("n_clusters")?,
            },
            Algorithm::Dbscan => RunParams::Dbscan {
                eps: value("eps")?,
                min_samples: count("min_samples")?,
            },
            Algorithm::Pca => {
                let n_components = count("n_components")?;
                // Viac komponentov ako príznakov PCA nevie vytvoriť
                if n_components as usize > feature_count {
                    return Err(FormError::ParamOutOfRange {
                        name: "n_components".to_string(),
                        value: f64::from(n_components),
                    });
                }
                RunParams::Pca { n_components }
            }
        };

        Ok(params)
    }
}

/// Hodnota parametra podľa definícií daného algoritmu
fn param_value(
    algorithm: Algorithm,
    definitions: &[ParamDefinition],
    raw: &HashMap<String, String>,
    name: &str,
) -> Result<f64, FormError> {
    let definition = definitions
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| FormError::UnknownParam {
            algorithm: algorithm.as_str(),
            name: name.to_string(),
        })?;
    let text = raw.get(name).map(String::as_str).unwrap_or("");
    AlgorithmRegistry::parse_param(definition, text)
}

fn to_count(name: &str, value: f64) -> Result<u32, FormError> {
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(FormError::ParamOutOfRange {
            name: name.to_string(),
            value,
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new(
            ["age", "salary", "city", "segment"],
            &["age".to_string(), "salary".to_string()],
        )
    }

    #[test]
    fn builds_regression_request_with_default_test_size() {
        let request = RunRequestBuilder::new()
            .algorithm(Algorithm::LinearRegression)
            .target("salary")
            .feature("age")
            .build(&catalog())
            .unwrap();

        assert_eq!(request.target_column.as_deref(), Some("salary"));
        assert_eq!(request.params, RunParams::Supervised { test_size: 20.0 });
        assert_eq!(request.test_fraction(), Some(0.2));
    }

    #[test]
    fn supervised_run_requires_target() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::RandomForestClassification)
            .feature("age")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::MissingTarget("random_forest_classification")));
    }

    #[test]
    fn run_requires_features() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::Kmeans)
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::NoFeatures));
    }

    #[test]
    fn classification_rejects_numeric_target() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::RandomForestClassification)
            .target("age")
            .feature("salary")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::IncompatibleTarget { .. }));
    }

    #[test]
    fn target_cannot_be_feature() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::RandomForestClassification)
            .target("city")
            .features(["age", "city"])
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::TargetIsFeature(c) if c == "city"));
    }

    #[test]
    fn regression_rejects_categorical_feature() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::RandomForestRegression)
            .target("salary")
            .features(["age", "segment"])
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::NonNumericColumn(c) if c == "segment"));
    }

    #[test]
    fn unsupervised_run_drops_target() {
        let request = RunRequestBuilder::new()
            .algorithm(Algorithm::Dbscan)
            .target("salary")
            .features(["age", "salary"])
            .param("eps", "1.5")
            .build(&catalog())
            .unwrap();

        assert_eq!(request.target_column, None);
        assert_eq!(request.params, RunParams::Dbscan { eps: 1.5, min_samples: 5 });
    }

    #[test]
    fn pca_components_limited_by_feature_count() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::Pca)
            .feature("age")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::ParamOutOfRange { ref name, .. } if name == "n_components"));
    }

    #[test]
    fn form_fields_repeat_features() {
        let request = RunRequestBuilder::new()
            .algorithm(Algorithm::Kmeans)
            .features(["age", "salary"])
            .param("n_clusters", "4")
            .build(&catalog())
            .unwrap();

        let fields = request.to_form_fields();
        assert_eq!(fields[0], ("ml_algorithm".to_string(), "kmeans".to_string()));
        assert_eq!(fields.iter().filter(|(k, _)| k == "features").count(), 2);
        assert!(fields.contains(&("n_clusters".to_string(), "4".to_string())));
    }

    #[test]
    fn serializes_flat_json() {
        let request = RunRequestBuilder::new()
            .algorithm(Algorithm::LinearRegression)
            .target("salary")
            .feature("age")
            .param("test_size", "30")
            .build(&catalog())
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ml_algorithm"], "linear_regression");
        assert_eq!(json["target_column"], "salary");
        assert_eq!(json["test_size"], 30.0);
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::Kmeans)
            .features(["age", "salary"])
            .param("n_clusters", "1e12")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::ParamOutOfRange { ref name, .. } if name == "n_clusters"));

        let err = RunRequestBuilder::new()
            .algorithm(Algorithm::Dbscan)
            .features(["age", "salary"])
            .param("min_samples", "5000000000")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, FormError::ParamOutOfRange { ref name, .. } if name == "min_samples"));
    }

    #[test]
    fn largest_count_is_kept_exactly() {
        let request = RunRequestBuilder::new()
            .algorithm(Algorithm::Dbscan)
            .features(["age"])
            .param("min_samples", "4294967295")
            .build(&catalog())
            .unwrap();
        assert_eq!(request.params, RunParams::Dbscan { eps: 0.5, min_samples: u32::MAX });
    }

    #[test]
    fn param_missing_from_definitions_is_reported() {
        let err = param_value(Algorithm::Kmeans, &[], &HashMap::new(), "n_clusters").unwrap_err();
        assert!(matches!(
            err,
            FormError::UnknownParam { algorithm: "kmeans", ref name } if name == "n_clusters"
        ));
    }
}

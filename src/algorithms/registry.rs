use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::{Algorithm, AlgorithmKind, ParamDefinition};
use crate::columns::ColumnType;
use crate::error::FormError;

/// Popis algoritmu v registri
#[derive(Debug, Clone)]
pub struct AlgorithmInfo {
    pub description: &'static str,
    pub params: Vec<ParamDefinition>,
}

/// Register algoritmov: popisy, parametre a kompatibilita cieľového stĺpca.
/// Inicializuje sa raz pri prvom použití, potom je len na čítanie.
pub struct AlgorithmRegistry {
    algorithms: HashMap<Algorithm, AlgorithmInfo>,
}

/// Horná hranica celočíselných parametrov (server ich číta ako u32)
pub const MAX_COUNT_PARAM: f64 = u32::MAX as f64;

static REGISTRY: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::new);

impl AlgorithmRegistry {
    fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
        };

        registry.initialize_defaults();
        registry
    }

    /// Získa singleton instanciu
    pub fn instance() -> &'static AlgorithmRegistry {
        &REGISTRY
    }

    fn initialize_defaults(&mut self) {
        let test_size = ParamDefinition {
            name: "test_size".to_string(),
            param_type: "number".to_string(),
            default_value: "20".to_string(),
            description: "Podiel testovacej množiny v percentách".to_string(),
            min: Some(1.0),
            max: Some(99.0),
            exclusive_min: false,
        };

        self.algorithms.insert(Algorithm::LinearRegression, AlgorithmInfo {
            description: "Lineárna regresia - predikcia spojitých hodnôt",
            params: vec![test_size.clone()],
        });
        self.algorithms.insert(Algorithm::RandomForestRegression, AlgorithmInfo {
            description: "Náhodný les (regresia) - predikcia spojitých hodnôt s dôležitosťou príznakov",
            params: vec![test_size.clone()],
        });
        self.algorithms.insert(Algorithm::RandomForestClassification, AlgorithmInfo {
            description: "Náhodný les (klasifikácia) - predikcia kategórií",
            params: vec![test_size],
        });

        self.algorithms.insert(Algorithm::Kmeans, AlgorithmInfo {
            description: "K-means - zhlukovanie do k zhlukov",
            params: vec![ParamDefinition {
                name: "n_clusters".to_string(),
                param_type: "integer".to_string(),
                default_value: "3".to_string(),
                description: "Počet zhlukov".to_string(),
                min: Some(2.0),
                max: Some(MAX_COUNT_PARAM),
                exclusive_min: false,
            }],
        });

        self.algorithms.insert(Algorithm::Dbscan, AlgorithmInfo {
            description: "DBSCAN - zhlukovanie podľa hustoty, -1 označuje šum",
            params: vec![
                ParamDefinition {
                    name: "eps".to_string(),
                    param_type: "number".to_string(),
                    default_value: "0.5".to_string(),
                    description: "Polomer okolia bodu".to_string(),
                    min: Some(0.0),
                    max: None,
                    exclusive_min: true,
                },
                ParamDefinition {
                    name: "min_samples".to_string(),
                    param_type: "integer".to_string(),
                    default_value: "5".to_string(),
                    description: "Minimálny počet bodov v okolí jadrového bodu".to_string(),
                    min: Some(1.0),
                    max: Some(MAX_COUNT_PARAM),
                    exclusive_min: false,
                },
            ],
        });

        self.algorithms.insert(Algorithm::Pca, AlgorithmInfo {
            description: "PCA - redukcia dimenzie na hlavné komponenty",
            params: vec![ParamDefinition {
                name: "n_components".to_string(),
                param_type: "integer".to_string(),
                default_value: "2".to_string(),
                description: "Počet hlavných komponentov (najviac počet príznakov)".to_string(),
                min: Some(1.0),
                max: Some(MAX_COUNT_PARAM),
                exclusive_min: false,
            }],
        });
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmInfo> {
        self.algorithms.get(&algorithm)
    }

    pub fn get_description(&self, algorithm: Algorithm) -> &'static str {
        self.get(algorithm).map(|info| info.description).unwrap_or("")
    }

    pub fn get_param_definitions(&self, algorithm: Algorithm) -> Vec<ParamDefinition> {
        self.get(algorithm)
            .map(|info| info.params.clone())
            .unwrap_or_default()
    }

    pub fn get_param_definition(&self, algorithm: Algorithm, name: &str) -> Option<&ParamDefinition> {
        self.get(algorithm)?.params.iter().find(|p| p.name == name)
    }

    /// Skontroluje, či stĺpec daného typu môže byť cieľom pre algoritmus
    pub fn is_target_compatible(&self, algorithm: Algorithm, column_type: ColumnType) -> bool {
        algorithm.kind().accepts_target(column_type)
    }

    /// Všetky algoritmy daného typu v poradí, v akom ich ponúka formulár
    pub fn algorithms_of_kind(&self, kind: AlgorithmKind) -> Vec<Algorithm> {
        Algorithm::ALL
            .iter()
            .copied()
            .filter(|a| a.kind() == kind)
            .collect()
    }
}

// Helper funkcie pre jednoduchšie použitie
impl AlgorithmRegistry {
    pub fn check_target(
        algorithm: Algorithm,
        column: &str,
        column_type: ColumnType,
    ) -> Result<(), FormError> {
        if !Self::instance().is_target_compatible(algorithm, column_type) {
            return Err(FormError::IncompatibleTarget {
                algorithm: algorithm.as_str(),
                column: column.to_string(),
            });
        }
        Ok(())
    }

    /// Parsuje textovú hodnotu parametra; prázdny vstup znamená predvolenú hodnotu
    pub fn parse_param(definition: &ParamDefinition, raw: &str) -> Result<f64, FormError> {
        let raw = raw.trim();
        let text = if raw.is_empty() { definition.default_value.as_str() } else { raw };

        let value: f64 = text.parse().map_err(|_| FormError::InvalidParam {
            name: definition.name.clone(),
            value: text.to_string(),
        })?;

        if !value.is_finite() || (definition.is_integer() && value.fract() != 0.0) {
            return Err(FormError::InvalidParam {
                name: definition.name.clone(),
                value: text.to_string(),
            });
        }

        let below_min = match definition.min {
            Some(min) if definition.exclusive_min => value <= min,
            Some(min) => value < min,
            None => false,
        };
        let above_max = definition.max.map(|max| value > max).unwrap_or(false);

        if below_min || above_max {
            return Err(FormError::ParamOutOfRange {
                name: definition.name.clone(),
                value,
            });
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_is_registered() {
        let registry = AlgorithmRegistry::instance();
        for algorithm in Algorithm::ALL {
            assert!(registry.get(algorithm).is_some(), "{:?}", algorithm);
            assert!(!registry.get_param_definitions(algorithm).is_empty());
        }
    }

    #[test]
    fn target_compatibility_follows_kind() {
        let registry = AlgorithmRegistry::instance();
        assert!(registry.is_target_compatible(Algorithm::LinearRegression, ColumnType::Numeric));
        assert!(!registry.is_target_compatible(Algorithm::LinearRegression, ColumnType::Categorical));
        assert!(registry.is_target_compatible(Algorithm::RandomForestClassification, ColumnType::Categorical));
        assert!(!registry.is_target_compatible(Algorithm::RandomForestClassification, ColumnType::Numeric));
        assert!(!registry.is_target_compatible(Algorithm::Kmeans, ColumnType::Numeric));
        assert!(!registry.is_target_compatible(Algorithm::Pca, ColumnType::Categorical));
    }

    #[test]
    fn check_target_reports_incompatible_column() {
        let err = AlgorithmRegistry::check_target(Algorithm::LinearRegression, "city", ColumnType::Categorical)
            .unwrap_err();
        assert!(matches!(err, FormError::IncompatibleTarget { algorithm: "linear_regression", .. }));
    }

    #[test]
    fn empty_param_uses_default() {
        let registry = AlgorithmRegistry::instance();
        let def = registry.get_param_definition(Algorithm::Kmeans, "n_clusters").unwrap();
        assert_eq!(AlgorithmRegistry::parse_param(def, "  ").unwrap(), 3.0);
    }

    #[test]
    fn param_ranges_are_enforced() {
        let registry = AlgorithmRegistry::instance();
        let eps = registry.get_param_definition(Algorithm::Dbscan, "eps").unwrap();
        assert!(matches!(AlgorithmRegistry::parse_param(eps, "0"), Err(FormError::ParamOutOfRange { .. })));
        assert_eq!(AlgorithmRegistry::parse_param(eps, "0.25").unwrap(), 0.25);

        let clusters = registry.get_param_definition(Algorithm::Kmeans, "n_clusters").unwrap();
        assert!(matches!(AlgorithmRegistry::parse_param(clusters, "1"), Err(FormError::ParamOutOfRange { .. })));
        assert!(matches!(AlgorithmRegistry::parse_param(clusters, "2.5"), Err(FormError::InvalidParam { .. })));
        assert!(matches!(AlgorithmRegistry::parse_param(clusters, "abc"), Err(FormError::InvalidParam { .. })));

        let test_size = registry.get_param_definition(Algorithm::LinearRegression, "test_size").unwrap();
        assert!(matches!(AlgorithmRegistry::parse_param(test_size, "100"), Err(FormError::ParamOutOfRange { .. })));
    }

    #[test]
    fn integer_params_are_capped_at_u32() {
        let registry = AlgorithmRegistry::instance();
        for (algorithm, name) in [
            (Algorithm::Kmeans, "n_clusters"),
            (Algorithm::Dbscan, "min_samples"),
            (Algorithm::Pca, "n_components"),
        ] {
            let definition = registry.get_param_definition(algorithm, name).unwrap();
            assert!(matches!(
                AlgorithmRegistry::parse_param(definition, "1e12"),
                Err(FormError::ParamOutOfRange { .. })
            ));
            assert_eq!(AlgorithmRegistry::parse_param(definition, "4294967295").unwrap(), MAX_COUNT_PARAM);
        }
    }

    #[test]
    fn algorithms_of_kind_keeps_form_order() {
        let registry = AlgorithmRegistry::instance();
        assert_eq!(
            registry.algorithms_of_kind(AlgorithmKind::Unsupervised),
            vec![Algorithm::Kmeans, Algorithm::Dbscan, Algorithm::Pca]
        );
    }
}

use super::{Algorithm, AlgorithmKind, AlgorithmRegistry};
use crate::error::FormError;

/// Factory pre algoritmy podľa hodnoty z formulára
pub struct AlgorithmFactory;

impl AlgorithmFactory {
    /// Vytvorí algoritmus z hodnoty `<select>`; prázdna hodnota znamená "nezvolený"
    pub fn parse(value: &str) -> Result<Option<Algorithm>, FormError> {
        match value.trim() {
            "" => Ok(None),
            "linear_regression" => Ok(Some(Algorithm::LinearRegression)),
            "random_forest_regression" => Ok(Some(Algorithm::RandomForestRegression)),
            "random_forest_classification" => Ok(Some(Algorithm::RandomForestClassification)),
            "kmeans" => Ok(Some(Algorithm::Kmeans)),
            "dbscan" => Ok(Some(Algorithm::Dbscan)),
            "pca" => Ok(Some(Algorithm::Pca)),
            other => Err(FormError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// Vráti zoznam všetkých dostupných algoritmov
    pub fn available() -> Vec<&'static str> {
        Algorithm::ALL.iter().map(|a| a.as_str()).collect()
    }

    pub fn get_description(value: &str) -> Option<&'static str> {
        let algorithm = Self::parse(value).ok().flatten()?;
        Some(AlgorithmRegistry::instance().get_description(algorithm))
    }

    /// Určí typ algoritmu (regression/classification/unsupervised)
    pub fn get_kind(value: &str) -> Option<AlgorithmKind> {
        Self::parse(value).ok().flatten().map(|a| a.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_values() {
        assert_eq!(AlgorithmFactory::parse("").unwrap(), None);
        assert_eq!(AlgorithmFactory::parse("kmeans").unwrap(), Some(Algorithm::Kmeans));
        assert!(matches!(
            AlgorithmFactory::parse("svm"),
            Err(FormError::UnknownAlgorithm(v)) if v == "svm"
        ));
    }

    #[test]
    fn only_form_values_are_accepted() {
        for value in ["linreg", "k_means"] {
            assert!(matches!(
                AlgorithmFactory::parse(value),
                Err(FormError::UnknownAlgorithm(v)) if v == value
            ));
        }
    }

    #[test]
    fn available_values_round_trip_through_parse() {
        for value in AlgorithmFactory::available() {
            let algorithm = AlgorithmFactory::parse(value).unwrap().unwrap();
            assert_eq!(algorithm.as_str(), value);
        }
    }

    #[test]
    fn kind_and_description_lookup() {
        assert_eq!(AlgorithmFactory::get_kind("dbscan"), Some(AlgorithmKind::Unsupervised));
        assert_eq!(AlgorithmFactory::get_kind("nope"), None);
        assert!(AlgorithmFactory::get_description("pca").unwrap().starts_with("PCA"));
    }
}

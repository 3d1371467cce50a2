use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use crate::error::FormError;

/// Typ stĺpca tak, ako ho posiela server (numerický alebo kategorický)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Numeric,
    Categorical,
}

/// Katalóg stĺpcov nahraného súboru.
/// Poradie stĺpcov zodpovedá poradiu na stránke, numerické stĺpce dodáva server
/// ako JSON vložený do stránky. Všetko ostatné je kategorické.
#[derive(Debug, Clone, Default)]
pub struct ColumnCatalog {
    columns: Vec<String>,
    numeric: HashSet<String>,
}

impl ColumnCatalog {
    pub fn new<I, S>(columns: I, numeric: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let columns: Vec<String> = columns
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| !c.is_empty() && seen.insert(c.clone()))
            .collect();

        // Numerické názvy, ktoré sa v stĺpcoch nenachádzajú, ignorujeme
        let numeric = numeric
            .iter()
            .filter(|n| columns.contains(n))
            .cloned()
            .collect();

        Self { columns, numeric }
    }

    /// Parsuje zoznam numerických stĺpcov z JSON (pole reťazcov)
    pub fn parse_numeric_columns(json_text: &str) -> Result<Vec<String>, FormError> {
        let parsed: Vec<String> = serde_json::from_str(json_text.trim())?;
        Ok(parsed)
    }

    pub fn from_embedded_json<I, S>(columns: I, json_text: &str) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let numeric = Self::parse_numeric_columns(json_text)?;
        Ok(Self::new(columns, &numeric))
    }

    /// Rovnaké ako `from_embedded_json`, ale pri chybnom JSON zaloguje varovanie
    /// a pokračuje tak, akoby žiadny stĺpec nebol numerický.
    pub fn from_embedded_json_or_empty<I, S>(columns: I, json_text: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let numeric = match Self::parse_numeric_columns(json_text) {
            Ok(numeric) => numeric,
            Err(e) => {
                log::warn!("Numerické stĺpce sa nepodarilo načítať: {}", e);
                Vec::new()
            }
        };
        Self::new(columns, &numeric)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        if !self.contains(name) {
            return None;
        }
        if self.numeric.contains(name) {
            Some(ColumnType::Numeric)
        } else {
            Some(ColumnType::Categorical)
        }
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.numeric.contains(name)
    }

    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| self.numeric.contains(c.as_str()))
            .map(|c| c.as_str())
            .collect()
    }

    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !self.numeric.contains(c.as_str()))
            .map(|c| c.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn column_types_follow_numeric_list() {
        let catalog = ColumnCatalog::new(["age", "name", "salary"], &names(&["age", "salary"]));

        assert_eq!(catalog.column_type("age"), Some(ColumnType::Numeric));
        assert_eq!(catalog.column_type("name"), Some(ColumnType::Categorical));
        assert_eq!(catalog.column_type("missing"), None);
        assert_eq!(catalog.numeric_columns(), vec!["age", "salary"]);
        assert_eq!(catalog.categorical_columns(), vec!["name"]);
    }

    #[test]
    fn unknown_numeric_names_are_ignored() {
        let catalog = ColumnCatalog::new(["a"], &names(&["a", "ghost"]));
        assert!(!catalog.is_numeric("ghost"));
        assert_eq!(catalog.numeric_columns(), vec!["a"]);
    }

    #[test]
    fn duplicate_and_empty_columns_are_dropped() {
        let catalog = ColumnCatalog::new(["a", "", "b", "a"], &[]);
        assert_eq!(catalog.columns(), &names(&["a", "b"])[..]);
    }

    #[test]
    fn embedded_json_is_parsed() {
        let catalog =
            ColumnCatalog::from_embedded_json(["x", "y", "label"], r#" ["x", "y"] "#).unwrap();
        assert!(catalog.is_numeric("x"));
        assert!(!catalog.is_numeric("label"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = ColumnCatalog::from_embedded_json(["x"], "{not json");
        assert!(matches!(result, Err(FormError::InvalidJson(_))));
    }

    #[test]
    fn malformed_json_falls_back_to_no_numeric_columns() {
        let catalog = ColumnCatalog::from_embedded_json_or_empty(["x", "y"], "[\"x\",");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.numeric_columns().is_empty());
        assert_eq!(catalog.column_type("x"), Some(ColumnType::Categorical));
    }
}

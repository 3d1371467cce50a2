/// Modul s algoritmami, ktoré si používateľ môže zvoliť vo formulári.
/// Typ algoritmu (regresia / klasifikácia / bez učiteľa) určuje, ktoré stĺpce
/// môžu byť cieľom a ktoré príznaky sú povolené.

pub mod registry;
pub mod factory;

pub use registry::{AlgorithmRegistry, AlgorithmInfo};
pub use factory::AlgorithmFactory;

use serde::{Serialize, Deserialize};
use crate::columns::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    LinearRegression,
    RandomForestRegression,
    RandomForestClassification,
    Kmeans,
    Dbscan,
    Pca,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::LinearRegression,
        Algorithm::RandomForestRegression,
        Algorithm::RandomForestClassification,
        Algorithm::Kmeans,
        Algorithm::Dbscan,
        Algorithm::Pca,
    ];

    /// Hodnota, pod ktorou sa algoritmus odosiela serveru (`ml_algorithm`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::LinearRegression => "linear_regression",
            Algorithm::RandomForestRegression => "random_forest_regression",
            Algorithm::RandomForestClassification => "random_forest_classification",
            Algorithm::Kmeans => "kmeans",
            Algorithm::Dbscan => "dbscan",
            Algorithm::Pca => "pca",
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::LinearRegression | Algorithm::RandomForestRegression => AlgorithmKind::Regression,
            Algorithm::RandomForestClassification => AlgorithmKind::Classification,
            Algorithm::Kmeans | Algorithm::Dbscan | Algorithm::Pca => AlgorithmKind::Unsupervised,
        }
    }

    pub fn panel(&self) -> ParamPanel {
        match self {
            Algorithm::LinearRegression
            | Algorithm::RandomForestRegression
            | Algorithm::RandomForestClassification => ParamPanel::Supervised,
            Algorithm::Kmeans => ParamPanel::Kmeans,
            Algorithm::Dbscan => ParamPanel::Dbscan,
            Algorithm::Pca => ParamPanel::Pca,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Regression,
    Classification,
    Unsupervised,
}

impl AlgorithmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Regression => "regression",
            AlgorithmKind::Classification => "classification",
            AlgorithmKind::Unsupervised => "unsupervised",
        }
    }

    pub fn requires_target(&self) -> bool {
        !matches!(self, AlgorithmKind::Unsupervised)
    }

    /// Či stĺpec daného typu môže byť cieľovou premennou
    pub fn accepts_target(&self, column_type: ColumnType) -> bool {
        match self {
            AlgorithmKind::Regression => column_type == ColumnType::Numeric,
            AlgorithmKind::Classification => column_type == ColumnType::Categorical,
            AlgorithmKind::Unsupervised => false,
        }
    }
}

/// Panel s parametrami, ktorý sa zobrazí pre zvolený algoritmus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamPanel {
    Supervised,
    Kmeans,
    Dbscan,
    Pca,
}

impl ParamPanel {
    pub const ALL: [ParamPanel; 4] = [
        ParamPanel::Supervised,
        ParamPanel::Kmeans,
        ParamPanel::Dbscan,
        ParamPanel::Pca,
    ];

    /// Kľúč panelu, z ktorého sa skladá id elementu (`<prefix><key>`)
    pub fn key(&self) -> &'static str {
        match self {
            ParamPanel::Supervised => "supervised",
            ParamPanel::Kmeans => "kmeans",
            ParamPanel::Dbscan => "dbscan",
            ParamPanel::Pca => "pca",
        }
    }
}

/// Definícia jedného parametra algoritmu pre frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDefinition {
    pub name: String,
    pub param_type: String,
    pub default_value: String,
    pub description: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Hodnota musí byť ostro väčšia ako `min`
    pub exclusive_min: bool,
}

impl ParamDefinition {
    pub fn is_integer(&self) -> bool {
        self.param_type == "integer"
    }
}

use serde::Serialize;
use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value.trim().to_lowercase().as_str() {
            "" | "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(FormError::UnknownExportFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => ".csv",
            ExportFormat::Excel => ".xlsx",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportRequest {
    /// Doplní príponu podľa formátu; prázdny názov nahradí `default_name`
    pub fn new(filename: &str, format: &str, default_name: &str) -> Result<Self, FormError> {
        let format = ExportFormat::parse(format)?;
        let base = match filename.trim() {
            "" => default_name.trim(),
            name => name,
        };

        let filename = if base.ends_with(format.extension()) {
            base.to_string()
        } else {
            format!("{}{}", base, format.extension())
        };

        Ok(Self { filename, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_extension() {
        let csv = ExportRequest::new("cleaned", "csv", "x").unwrap();
        assert_eq!(csv.filename, "cleaned.csv");

        let excel = ExportRequest::new("report.xlsx", "excel", "x").unwrap();
        assert_eq!(excel.filename, "report.xlsx");
        assert_eq!(excel.format, ExportFormat::Excel);
    }

    #[test]
    fn empty_name_uses_default() {
        let request = ExportRequest::new("  ", "", "data_export_20240101").unwrap();
        assert_eq!(request.filename, "data_export_20240101.csv");
    }

    #[test]
    fn csv_name_exported_as_excel_gets_xlsx() {
        let request = ExportRequest::new("data.csv", "excel", "x").unwrap();
        assert_eq!(request.filename, "data.csv.xlsx");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            ExportRequest::new("a", "parquet", "x"),
            Err(FormError::UnknownExportFormat(f)) if f == "parquet"
        ));
    }
}

//! Configuration for loading a sales file

use std::path::Path;
use serde::{Serialize, Deserialize};

use super::null_handling::NullConfig;
use crate::schema::Column;
use crate::DataError;

/// Header names of the required columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub name: String,
    pub year: String,
    pub genre: String,
    pub platform: String,
    pub publisher: String,
    pub sales_na: String,
    pub sales_eu: String,
    pub sales_jp: String,
    pub sales_other: String,
    pub sales_global: String,
}

impl Default for ColumnMapping {
    /// Headers of the published top-50 games file
    fn default() -> Self {
        Self {
            name: "Nome".to_string(),
            year: "Ano".to_string(),
            genre: "Gênero".to_string(),
            platform: "Plataforma".to_string(),
            publisher: "Empresa_Jogos".to_string(),
            sales_na: "Vendas_NA".to_string(),
            sales_eu: "Vendas_EU".to_string(),
            sales_jp: "Vendas_JP".to_string(),
            sales_other: "Outras_Vendas".to_string(),
            sales_global: "Vendas_Globais".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Snake-case English headers
    pub fn english() -> Self {
        Self {
            name: "name".to_string(),
            year: "year".to_string(),
            genre: "genre".to_string(),
            platform: "platform".to_string(),
            publisher: "publisher".to_string(),
            sales_na: "na_sales".to_string(),
            sales_eu: "eu_sales".to_string(),
            sales_jp: "jp_sales".to_string(),
            sales_other: "other_sales".to_string(),
            sales_global: "global_sales".to_string(),
        }
    }

    /// Header name configured for a column
    pub fn header(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Year => &self.year,
            Column::Genre => &self.genre,
            Column::Platform => &self.platform,
            Column::Publisher => &self.publisher,
            Column::SalesNa => &self.sales_na,
            Column::SalesEu => &self.sales_eu,
            Column::SalesJp => &self.sales_jp,
            Column::SalesOther => &self.sales_other,
            Column::SalesGlobal => &self.sales_global,
        }
    }
}

/// Everything needed to turn a delimited file into a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Column header mapping
    pub columns: ColumnMapping,

    /// Field delimiter, must be ASCII
    pub delimiter: char,

    /// Missing value handling
    pub null_config: NullConfig,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMapping::default(),
            delimiter: ',',
            null_config: NullConfig::default(),
        }
    }
}

impl LoadConfig {
    /// Read a JSON configuration file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)?;
        let config: LoadConfig = serde_json::from_str(&text)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, DataError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(DataError::Config(format!("delimiter '{}' is not ASCII", self.delimiter)))
        }
    }
}

use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufReader, Read};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use tracing::info;
use vg_core::{Dataset, IntegrityError, Record, SalesField};

use crate::config::LoadConfig;
use crate::schema::{Column, ColumnIndex};
use crate::DataError;

/// CSV data source producing a validated [`Dataset`]
pub struct CsvSource {
    /// Path to the CSV file
    path: PathBuf,
    /// Load configuration
    config: LoadConfig,
    /// Source name
    source_name: String,
}

impl CsvSource {
    /// Create a new CSV source. The file is not touched until it is read.
    pub fn new(path: impl Into<PathBuf>, config: LoadConfig) -> Self {
        let path = path.into();
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
            .to_string();

        Self {
            path,
            config,
            source_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the whole file, blocking the current thread
    pub fn read_dataset(&self) -> Result<Dataset, DataError> {
        info!("Loading sales data from {:?}", self.path);
        let file = File::open(&self.path)?;
        Self::read_from(BufReader::new(file), &self.config)
    }

    /// Parse CSV text from any reader
    pub fn read_from<R: Read>(reader: R, config: &LoadConfig) -> Result<Dataset, DataError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(config.delimiter_byte()?)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let index = ColumnIndex::resolve(headers.iter(), &config.columns)?;

        let mut records = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let row = result?;
            records.push(Self::parse_row(&row, idx + 1, &index, config)?);
        }

        let dataset = Dataset::new(records)?;
        info!("Loaded {} records", dataset.len());
        Ok(dataset)
    }

    /// Convert one CSV row into a record, reporting the first malformed cell
    fn parse_row(
        row: &StringRecord,
        row_number: usize,
        index: &ColumnIndex,
        config: &LoadConfig,
    ) -> Result<Record, IntegrityError> {
        let text = |column: Column| {
            config
                .null_config
                .require(index.cell(row, column), row_number, config.columns.header(column))
        };

        let year_raw = text(Column::Year)?;
        let year = year_raw.parse::<i32>().map_err(|_| IntegrityError::NotNumeric {
            row: row_number,
            field: config.columns.header(Column::Year).to_string(),
            value: year_raw.to_string(),
        })?;

        let sales = |field: SalesField| -> Result<f64, IntegrityError> {
            let column = Column::for_sales(field);
            let raw = text(column)?;
            raw.parse::<f64>().map_err(|_| IntegrityError::NotNumeric {
                row: row_number,
                field: config.columns.header(column).to_string(),
                value: raw.to_string(),
            })
        };

        Ok(Record {
            name: text(Column::Name)?.to_string(),
            year,
            genre: text(Column::Genre)?.to_string(),
            platform: text(Column::Platform)?.to_string(),
            publisher: text(Column::Publisher)?.to_string(),
            sales_na: sales(SalesField::NorthAmerica)?,
            sales_eu: sales(SalesField::Europe)?,
            sales_jp: sales(SalesField::Japan)?,
            sales_other: sales(SalesField::Other)?,
            sales_global: sales(SalesField::Global)?,
        })
    }
}

#[async_trait]
impl vg_core::data::DatasetSource for CsvSource {
    async fn load(&self) -> anyhow::Result<Dataset> {
        let path = self.path.clone();
        let config = self.config.clone();

        let dataset = tokio::task::spawn_blocking(move || -> Result<Dataset, DataError> {
            let file = File::open(&path)?;
            Self::read_from(BufReader::new(file), &config)
        })
        .await
        .map_err(DataError::from)??;

        Ok(dataset)
    }

    fn source_name(&self) -> &str {
        &self.source_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vg_core::DatasetSource;
    use crate::config::ColumnMapping;

    const HEADER: &str = "Nome,Ano,Gênero,Plataforma,Empresa_Jogos,Vendas_NA,Vendas_EU,Vendas_JP,Outras_Vendas,Vendas_Globais";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_reads_rows_in_order() {
        let text = csv(&[
            "Wii Sports,2006,Sports,Wii,Nintendo,41.49,29.02,3.77,8.46,82.74",
            "Super Mario Bros.,1985,Platform,NES,Nintendo,29.08,3.58,6.81,0.77,40.24",
        ]);

        let dataset = CsvSource::read_from(text.as_bytes(), &LoadConfig::default()).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.name, "Wii Sports");
        assert_eq!(first.year, 2006);
        assert_eq!(first.publisher, "Nintendo");
        assert_eq!(first.sales_global, 82.74);
        assert_eq!(dataset.records()[1].platform, "NES");
    }

    #[test]
    fn test_non_numeric_sales_is_fatal() {
        let text = csv(&[
            "Wii Sports,2006,Sports,Wii,Nintendo,41.49,29.02,3.77,8.46,82.74",
            "Tetris,1989,Puzzle,GB,Nintendo,23.2,lots,4.22,0.58,30.26",
        ]);

        let err = CsvSource::read_from(text.as_bytes(), &LoadConfig::default()).unwrap_err();
        match err {
            DataError::Integrity(IntegrityError::NotNumeric { row, field, value }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "Vendas_EU");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_value_is_fatal() {
        let text = csv(&["Tetris,1989,,GB,Nintendo,23.2,2.26,4.22,0.58,30.26"]);

        let err = CsvSource::read_from(text.as_bytes(), &LoadConfig::default()).unwrap_err();
        match err {
            DataError::Integrity(IntegrityError::MissingField { row, field }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "Gênero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_sales_rejected_by_dataset() {
        let text = csv(&["Tetris,1989,Puzzle,GB,Nintendo,23.2,2.26,-4.22,0.58,30.26"]);

        let err = CsvSource::read_from(text.as_bytes(), &LoadConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DataError::Integrity(IntegrityError::InvalidSales { row: 1, field: "sales_jp", .. })
        ));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let text = "Nome,Ano\nTetris,1989";

        let err = CsvSource::read_from(text.as_bytes(), &LoadConfig::default()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(ref c) if c == "Gênero"));
    }

    #[test]
    fn test_custom_delimiter_and_mapping() {
        let text = "name;year;genre;platform;publisher;na_sales;eu_sales;jp_sales;other_sales;global_sales\n\
                    Minecraft;2013;Misc;X360;Microsoft Game Studios;5.58;2.83;0.02;0.77;9.2";
        let config = LoadConfig {
            columns: ColumnMapping::english(),
            delimiter: ';',
            ..LoadConfig::default()
        };

        let dataset = CsvSource::read_from(text.as_bytes(), &config).unwrap();
        assert_eq!(dataset.records()[0].publisher, "Microsoft Game Studios");
        assert_eq!(dataset.records()[0].sales_global, 9.2);
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let dataset = CsvSource::read_from(HEADER.as_bytes(), &LoadConfig::default()).unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn test_async_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = csv(&["Wii Sports,2006,Sports,Wii,Nintendo,41.49,29.02,3.77,8.46,82.74"]);
        write!(file, "{}", text).unwrap();

        let source = CsvSource::new(file.path(), LoadConfig::default());
        let dataset = source.load().await.unwrap();

        assert_eq!(dataset.len(), 1);
        assert!(!source.source_name().is_empty());
    }

    #[tokio::test]
    async fn test_async_load_missing_file_fails() {
        let source = CsvSource::new("/definitely/not/here.csv", LoadConfig::default());
        assert!(source.load().await.is_err());
        assert_eq!(source.source_name(), "here.csv");
    }
}

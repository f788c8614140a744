pub mod soup;

use std::{fmt, fs::File, io::Read, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{RecommenderError, Result};
use self::soup::compose_soup;

/// Value used for a missing country, director or cast cell
pub const UNKNOWN: &str = "Unknown";

/// Header names the catalog must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["Title", "Production Country", "Director", "Cast"];

/// Position of an item in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub usize);

impl RowIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw catalog row as it comes out of the CSV.
/// Empty cells deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Production Country")]
    pub production_country: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Cast")]
    pub cast: Option<String>,
}

impl Record {
    pub fn new(title: &str, production_country: Option<&str>, director: Option<&str>, cast: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            production_country: production_country.map(str::to_string),
            director: director.map(str::to_string),
            cast: cast.map(str::to_string),
        }
    }
}

/// Normalized catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub production_country: String,
    pub director: String,
    pub cast: String,
    /// feature text used for vectorization
    pub soup: String,
}

impl From<Record> for Item {
    fn from(record: Record) -> Self {
        fn or_unknown(field: Option<String>) -> String {
            match field {
                Some(v) if !v.is_empty() => v,
                _ => UNKNOWN.to_string(),
            }
        }
        let production_country = or_unknown(record.production_country);
        let director = or_unknown(record.director);
        let cast = or_unknown(record.cast);
        let soup = compose_soup(&production_country, &director, &cast);
        Item {
            title: record.title.unwrap_or_default(),
            production_country,
            director,
            cast,
            soup,
        }
    }
}

/// Ordered, immutable set of catalog items
#[derive(Debug, Clone)]
pub struct RecordStore {
    items: Vec<Item>,
}

impl RecordStore {
    /// Load the catalog from a CSV file.
    ///
    /// Fails when the file is missing, lacks one of `REQUIRED_COLUMNS`,
    /// or has no data rows.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecommenderError::DataSourceMissing(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let store = Self::from_reader(file).map_err(|e| match e {
            RecommenderError::EmptyDataSource(_) => RecommenderError::EmptyDataSource(path.to_path_buf()),
            other => other,
        })?;
        info!(rows = store.len(), path = %path.display(), "catalog loaded");
        Ok(store)
    }

    /// Parse a catalog from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(false)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(RecommenderError::EmptyDataSource("<memory>".into()));
        }
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(RecommenderError::MissingColumn(column.to_string()));
            }
        }
        let records = reader
            .deserialize::<Record>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
        debug!(rows = records.len(), "parsed catalog records");
        Self::from_records(records)
    }

    /// Build a store from in-memory records
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let items: Vec<Item> = records.into_iter().map(Item::from).collect();
        if items.is_empty() {
            return Err(RecommenderError::EmptyDataSource("<memory>".into()));
        }
        Ok(Self { items })
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn get(&self, row: RowIndex) -> Option<&Item> {
        self.items.get(row.get())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Feature soups in corpus order
    pub fn soups(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.soup.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Show Id,Title,Production Country,Director,Cast,Genres
s1,Alpha,United States,Jane Doe,\"Ann, Bob\",Drama
s2,Beta,,,,Comedy
s3,Gamma,France,Pierre,Marie,Drama
";

    #[test]
    fn parses_rows_in_order_and_ignores_extra_columns() {
        let store = RecordStore::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(store.items()[0].cast, "Ann, Bob");
        assert_eq!(store.items()[0].soup, "United States Jane Doe Ann, Bob");
    }

    #[test]
    fn missing_fields_become_unknown() {
        let store = RecordStore::from_reader(CSV.as_bytes()).unwrap();
        let beta = store.get(RowIndex(1)).unwrap();
        assert_eq!(beta.production_country, UNKNOWN);
        assert_eq!(beta.director, UNKNOWN);
        assert_eq!(beta.cast, UNKNOWN);
        assert_eq!(beta.soup, "Unknown Unknown Unknown");
    }

    #[test]
    fn header_only_is_empty_source() {
        let csv = "Title,Production Country,Director,Cast\n";
        assert!(matches!(
            RecordStore::from_reader(csv.as_bytes()),
            Err(RecommenderError::EmptyDataSource(_))
        ));
    }

    #[test]
    fn zero_byte_input_is_empty_source() {
        assert!(matches!(
            RecordStore::from_reader("".as_bytes()),
            Err(RecommenderError::EmptyDataSource(_))
        ));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Title,Production Country,Cast\nA,US,X\n";
        match RecordStore::from_reader(csv.as_bytes()) {
            Err(RecommenderError::MissingColumn(col)) => assert_eq!(col, "Director"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_reported() {
        let err = RecordStore::load("/nonexistent/catalog.csv").unwrap_err();
        assert!(matches!(err, RecommenderError::DataSourceMissing(_)));
    }

    #[test]
    fn out_of_range_row_is_none() {
        let store = RecordStore::from_records(vec![Record::new("A", None, None, None)]).unwrap();
        assert!(store.get(RowIndex(1)).is_none());
        assert_eq!(store.get(RowIndex(0)).unwrap().soup, "Unknown Unknown Unknown");
    }
}

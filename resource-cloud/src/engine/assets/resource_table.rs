use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use thiserror::Error;

use super::resource_record::ResourceRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("No valid data found in CSV")]
    NoRows,
}

/// Validated rows from one CSV file. `dropped` counts rows rejected for missing
/// required fields or malformed content.
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct ResourceTable {
    pub records: Vec<ResourceRecord>,
    pub dropped: usize,
}

impl ResourceTable {
    /// Validate records that arrived already split into fields, e.g. from the host page.
    pub fn from_records(records: Vec<ResourceRecord>) -> Self {
        let total = records.len();
        let records: Vec<_> = records.into_iter().filter(ResourceRecord::is_complete).collect();
        Self {
            dropped: total - records.len(),
            records,
        }
    }

    /// The records, or `NoRows` when validation left nothing.
    pub fn into_non_empty(self) -> Result<Vec<ResourceRecord>, DatasetError> {
        if self.records.is_empty() {
            Err(DatasetError::NoRows)
        } else {
            Ok(self.records)
        }
    }
}

#[derive(Default)]
pub struct ResourceTableLoader;

impl AssetLoader for ResourceTableLoader {
    type Asset = ResourceTable;
    type Settings = ();
    type Error = DatasetError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let table = parse_resource_csv(&bytes)?;
        debug!(
            "Parsed {} with {} valid rows, {} dropped",
            load_context.path().display(),
            table.records.len(),
            table.dropped
        );
        Ok(table)
    }

    fn extensions(&self) -> &[&str] {
        &["csv"]
    }
}

/// Parse CSV bytes with a header row into validated records.
///
/// Rows may have fewer or more fields than the header; missing optional columns
/// become empty strings. Rows without a name, category or description are dropped.
/// Only I/O failures abort the parse.
pub fn parse_resource_csv(bytes: &[u8]) -> Result<ResourceTable, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut table = ResourceTable::default();
    for (row, result) in reader.deserialize::<ResourceRecord>().enumerate() {
        // Header is line 1.
        let line = row + 2;
        match result {
            Ok(record) if record.is_complete() => table.records.push(record),
            Ok(_) => {
                debug!("Dropping CSV line {line}: missing name, category or description");
                table.dropped += 1;
            }
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                debug!("Dropping CSV line {line}: {err}");
                table.dropped += 1;
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Resource_Name,Category,Sub_Category,Location_Scope,Description,Relevance,Link,Access type";

    #[test]
    fn parses_complete_rows_with_all_columns() {
        let csv = format!(
            "{HEADER}\np5.js,Tool,Library,Global,Creative coding,High,https://p5js.org,Free\n"
        );
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.dropped, 0);

        let record = &table.records[0];
        assert_eq!(record.name, "p5.js");
        assert_eq!(record.sub_category, "Library");
        assert_eq!(record.location_scope, "Global");
        assert_eq!(record.access_type, "Free");
    }

    #[test]
    fn drops_rows_missing_required_fields() {
        let csv = format!(
            "{HEADER}\n\
             Processing,Tool,,,Sketchbook,High,[link],\n\
             ,Tool,,,No name,High,,\n\
             Nameless Category,,,,Still missing,Low,,\n\
             No Description,Venue,,,,Medium,,\n"
        );
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].name, "Processing");
        assert_eq!(table.dropped, 3);
    }

    #[test]
    fn short_rows_normalise_optional_fields() {
        let csv = "Resource_Name,Category,Description\nopenFrameworks,Tool,C++ toolkit\n";
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        let record = &table.records[0];
        assert_eq!(record.relevance, "");
        assert_eq!(record.link, "");
        assert_eq!(record.relevance_score(), 1);
    }

    #[test]
    fn fields_and_headers_are_trimmed() {
        let csv = " Resource_Name , Category , Description \n  Kennedy Center ,  Venue , Arts \n";
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].name, "Kennedy Center");
        assert_eq!(table.records[0].category, "Venue");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let csv = format!("{HEADER}\n\"Arts + Industries\",Venue,,,\"Museum, workshops\",Medium,,\n");
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].description, "Museum, workshops");
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        let table = parse_resource_csv(HEADER.as_bytes()).unwrap();
        assert!(table.records.is_empty());
        assert!(matches!(table.into_non_empty(), Err(DatasetError::NoRows)));
    }

    #[test]
    fn prevalidated_records_drop_incomplete_entries() {
        let table = ResourceTable::from_records(vec![
            ResourceRecord::new("p5.js", "Tool", "Library", "High", ""),
            ResourceRecord::new("", "Tool", "Nameless", "High", ""),
        ]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.dropped, 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = format!("{HEADER}\n\np5.js,Tool,,,Library,High,,\n\n");
        let table = parse_resource_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.dropped, 0);
    }
}

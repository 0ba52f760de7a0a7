use crate::table::RecordTable;
use crate::types::Result;
use std::path::Path;

/// Load a CSV file with a header row into a [`RecordTable`].
pub async fn load_table_from_csv(path: impl AsRef<Path>) -> Result<RecordTable> {
    let path = path.as_ref().to_owned();

    let bytes = tokio::fs::read(&path).await?;

    let table = tokio::task::spawn_blocking(move || parse_table(&bytes)).await??;

    log::debug!(
        "Loaded {} rows with columns {:?} from {}",
        table.rows.len(),
        table.columns,
        path.display()
    );

    Ok(table)
}

/// Parse CSV text with a header row. Rows may be shorter or longer than the
/// header; missing cells read as empty. Input that is not UTF-8 is a CSV
/// error.
pub fn parse_table(data: &[u8]) -> Result<RecordTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RecordTable { columns, rows })
}

//! CSV decode/encode for the record sets moving through the pipeline.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};

/// An in-memory table: the header row plus data records, in file order.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

/// Parse CSV bytes into a [`Table`]. The first row is taken as the header.
pub fn decode(data: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new().from_reader(data);
    let headers = reader.headers().context("invalid CSV header row")?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.context("invalid CSV record")?);
    }

    Ok(Table { headers, rows })
}

/// Serialize a [`Table`] back to CSV bytes.
pub fn encode(table: &Table) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finalizing CSV output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_headers_and_rows() {
        let table = decode(b"id,valor\n1,99.9\n2,5\n").unwrap();
        assert_eq!(table.headers, StringRecord::from(vec!["id", "valor"]));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get(1), Some("99.9"));
    }

    #[test]
    fn encode_quotes_fields_containing_the_delimiter() {
        let table = Table {
            headers: StringRecord::from(vec!["id", "valor"]),
            rows: vec![StringRecord::from(vec!["1", "R$ 99,90"])],
        };
        let bytes = encode(&table).unwrap();
        assert_eq!(bytes, b"id,valor\n1,\"R$ 99,90\"\n");
    }

    #[test]
    fn rejects_ragged_records() {
        assert!(decode(b"id,valor\n1\n").is_err());
    }
}

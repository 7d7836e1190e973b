use anyhow::Context;
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Columns every results table must provide. Extra columns are ignored.
pub(crate) const MEASUREMENT_COLUMNS: [&str; 3] = ["vus", "tps", "avg_ms"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Column `{column}` missing from {path}")]
    MissingColumn { column: String, path: String },
}

/// Load a results table with every column read as a string.
///
/// Schema inference is disabled so that a malformed value anywhere in the
/// file cannot change how a column is read; numbers are produced afterwards
/// by [`coerce_measurements`].
pub(crate) fn load_results(path: &Path) -> anyhow::Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Open results table {}", path.display()))?
        .finish()
        .with_context(|| format!("Read results table {}", path.display()))?;

    for column in MEASUREMENT_COLUMNS {
        if frame.column(column).is_err() {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
                path: path.display().to_string(),
            }
            .into());
        }
    }

    log::debug!("Loaded {} rows from {}", frame.height(), path.display());

    Ok(frame)
}

/// Coerce the measurement columns to `Float64`, column by column.
///
/// The cast is non-strict: values that do not parse as numbers become nulls,
/// never errors. The charts render those rows as gaps.
pub(crate) fn coerce_measurements(frame: DataFrame) -> anyhow::Result<DataFrame> {
    let frame = frame
        .lazy()
        .with_columns(
            MEASUREMENT_COLUMNS
                .iter()
                .map(|&column| col(column).cast(DataType::Float64))
                .collect::<Vec<_>>(),
        )
        .collect()?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn numeric_column(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
        frame
            .column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn load_keeps_row_order_and_extra_columns() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results_get_only.csv");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "vus,tps,avg_ms,p95_ms")?;
        writeln!(file, "1,100,10,15")?;
        writeln!(file, "2,190,11,18")?;

        let frame = load_results(&path)?;
        assert_eq!(frame.height(), 2);
        assert!(frame.column("p95_ms").is_ok());
        Ok(())
    }

    #[test]
    fn load_rejects_table_without_measurement_column() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results_mixed.csv");
        std::fs::write(&path, "vus,tps\n1,100\n")?;

        let err = load_results(&path).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "avg_ms"),
            None => panic!("Expected a LoadError, got: {err:?}"),
        }
        Ok(())
    }

    #[test]
    fn load_fails_for_missing_table() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let result = load_results(&dir.path().join("results_put_only.csv"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn coerce_turns_malformed_values_into_nulls() -> anyhow::Result<()> {
        let frame = df![
            "vus"    => ["1", "2", "4"],
            "tps"    => ["100", "N/A", "310"],
            "avg_ms" => ["10", "11", ""],
        ]?;

        let frame = coerce_measurements(frame)?;

        assert_eq!(
            numeric_column(&frame, "vus"),
            vec![Some(1.0), Some(2.0), Some(4.0)]
        );
        assert_eq!(
            numeric_column(&frame, "tps"),
            vec![Some(100.0), None, Some(310.0)]
        );
        assert_eq!(
            numeric_column(&frame, "avg_ms"),
            vec![Some(10.0), Some(11.0), None]
        );
        Ok(())
    }

    #[test]
    fn coerce_leaves_row_count_untouched() -> anyhow::Result<()> {
        let frame = df![
            "vus"    => ["bad", "worse"],
            "tps"    => ["also bad", "x"],
            "avg_ms" => ["n/a", "n/a"],
        ]?;

        let frame = coerce_measurements(frame)?;
        assert_eq!(frame.height(), 2);
        assert_eq!(numeric_column(&frame, "tps"), vec![None, None]);
        Ok(())
    }
}

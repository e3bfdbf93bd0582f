//! Classification service: batch record schema, orchestration, and CSV
//! helpers for the external caller.

use crate::classify::{Classifier, Sentiment};
use crate::error::{Error, Result};
use crate::pipeline::SentimentPipeline;
use rayon::prelude::*;
use std::io::{Read, Write};
use std::path::Path;

/// Column every input record must carry.
pub const TEXT_COLUMN: &str = "full_text";

/// Columns appended to each output record.
pub const CLEANED_COLUMN: &str = "cleaned_text";
pub const LABEL_COLUMN: &str = "label";

/// An input row: at minimum a `full_text` field, plus arbitrary extra
/// fields that pass through unchanged, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Field name/value pairs in original column order.
    pub fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Creates a record with just the text field.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            fields: vec![(TEXT_COLUMN.to_string(), text.into())],
        }
    }

    /// Returns the raw tweet text, or [`Error::MissingColumn`] when the
    /// record has no `full_text` field.
    pub fn full_text(&self) -> Result<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == TEXT_COLUMN)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| Error::MissingColumn(TEXT_COLUMN.to_string()))
    }
}

/// An output row: the original fields plus the pipeline output and the
/// predicted label. `cleaned_text` is always present, even when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Original fields, order preserved.
    pub fields: Vec<(String, String)>,
    /// Canonical text produced by the pipeline.
    pub cleaned_text: String,
    /// Predicted sentiment class.
    pub label: Sentiment,
}

/// Orchestrates the pipeline and the frozen classifier over record
/// batches.
pub struct ClassificationService {
    pipeline: SentimentPipeline,
    classifier: Box<dyn Classifier + Send + Sync>,
    parallel: bool,
}

impl ClassificationService {
    /// Creates a service from a pipeline and a classifier. Normalization
    /// is parallel by default.
    pub fn new(pipeline: SentimentPipeline, classifier: Box<dyn Classifier + Send + Sync>) -> Self {
        Self {
            pipeline,
            classifier,
            parallel: true,
        }
    }

    /// Disables parallel normalization.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Returns the pipeline in use.
    pub fn pipeline(&self) -> &SentimentPipeline {
        &self.pipeline
    }

    /// Classifies a batch of records.
    ///
    /// The schema is validated up front: if any record lacks `full_text`
    /// the whole batch fails with [`Error::MissingColumn`] and no partial
    /// result is returned. Normalization is per-record independent and
    /// order-preserving; the cleaned texts are then submitted to the
    /// classifier in one batch and the labels zipped back positionally.
    pub fn classify_batch(&self, records: &[RawRecord]) -> Result<Vec<NormalizedRecord>> {
        let texts: Vec<&str> = records
            .iter()
            .map(|record| record.full_text())
            .collect::<Result<_>>()?;

        let cleaned: Vec<String> = if self.parallel {
            texts
                .par_iter()
                .map(|text| self.pipeline.normalize(text))
                .collect()
        } else {
            texts.iter().map(|text| self.pipeline.normalize(text)).collect()
        };

        let labels = self.classifier.predict(&cleaned)?;
        if labels.len() != records.len() {
            return Err(Error::PredictionMismatch {
                expected: records.len(),
                got: labels.len(),
            });
        }

        Ok(records
            .iter()
            .zip(cleaned)
            .zip(labels)
            .map(|((record, cleaned_text), label)| NormalizedRecord {
                fields: record.fields.clone(),
                cleaned_text,
                label,
            })
            .collect())
    }
}

impl std::fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationService")
            .field("pipeline", &self.pipeline)
            .field("parallel", &self.parallel)
            .finish()
    }
}

// ============================================================================
// CSV helpers (batch input/output schema)
// ============================================================================

/// Reads records from a CSV reader. The header row defines the field
/// names; every data row becomes one [`RawRecord`] with fields in column
/// order. Schema validation happens at classification time, not here.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(RawRecord { fields });
    }
    Ok(records)
}

/// Reads records from a CSV file path.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}

/// Writes classified records as CSV: the original columns followed by
/// `cleaned_text` and `label`. Column order comes from the first record.
pub fn write_records<W: Write>(writer: W, records: &[NormalizedRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let Some(first) = records.first() else {
        return Ok(());
    };

    let mut header: Vec<&str> = first.fields.iter().map(|(name, _)| name.as_str()).collect();
    header.push(CLEANED_COLUMN);
    header.push(LABEL_COLUMN);
    csv_writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<&str> = record.fields.iter().map(|(_, value)| value.as_str()).collect();
        row.push(&record.cleaned_text);
        row.push(record.label.as_str());
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LexiconModel;
    use crate::slang::SlangDictionary;

    fn service() -> ClassificationService {
        let pipeline = SentimentPipeline::new(SlangDictionary::from_entries([("gk", "tidak")]));
        let model = LexiconModel::from_weights([
            ("bagus", 0.8),
            ("suka", 0.7),
            ("parah", -0.9),
            ("error", -0.6),
        ]);
        ClassificationService::new(pipeline, Box::new(model))
    }

    fn record(text: &str, user: &str) -> RawRecord {
        RawRecord {
            fields: vec![
                (TEXT_COLUMN.to_string(), text.to_string()),
                ("user_id".to_string(), user.to_string()),
            ],
        }
    }

    #[test]
    fn test_classify_batch_end_to_end() {
        let service = service();
        let records = vec![
            record("Aplikasinyaaa error terus parah!! https://t.co/abc @dirjenpajak", "u1"),
            record("Sangat suka, pelayanan bagus", "u2"),
            record("Cuaca hari ini cerah", "u3"),
        ];

        let results = service.classify_batch(&records).unwrap();
        assert_eq!(results.len(), 3);

        // Record 1: negative, cleaned text free of noise.
        assert_eq!(results[0].label, Sentiment::Negative);
        assert!(!results[0].cleaned_text.is_empty());
        assert!(!results[0].cleaned_text.contains("http"));
        assert!(!results[0].cleaned_text.contains('@'));
        assert_eq!(results[0].cleaned_text, results[0].cleaned_text.to_lowercase());

        assert_eq!(results[1].label, Sentiment::Positive);
        assert_eq!(results[2].label, Sentiment::Neutral);

        // Original fields preserved for every record.
        for (result, input) in results.iter().zip(&records) {
            assert_eq!(result.fields, input.fields);
        }
    }

    #[test]
    fn test_missing_column_fails_whole_batch() {
        let service = service();
        let records = vec![
            record("teks pertama", "u1"),
            RawRecord {
                fields: vec![("user_id".to_string(), "u2".to_string())],
            },
        ];

        let err = service.classify_batch(&records).unwrap_err();
        match err {
            Error::MissingColumn(column) => assert_eq!(column, TEXT_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_noise_record_gets_empty_cleaned_text() {
        let service = service();
        let records = vec![record("http://t.co/xyz @user #tag 123", "u1")];
        let results = service.classify_batch(&records).unwrap();
        assert_eq!(results[0].cleaned_text, "");
        assert_eq!(results[0].label, Sentiment::Neutral);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let records: Vec<RawRecord> = (0..50)
            .map(|i| record(&format!("pelayanan bagus sekali nomor {i}!!"), "u"))
            .collect();

        let parallel = service().classify_batch(&records).unwrap();
        let sequential = service().sequential().classify_batch(&records).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_prediction_mismatch_detected() {
        struct BrokenClassifier;
        impl Classifier for BrokenClassifier {
            fn predict(&self, _texts: &[String]) -> Result<Vec<Sentiment>> {
                Ok(vec![Sentiment::Neutral])
            }
        }

        let pipeline = SentimentPipeline::new(SlangDictionary::empty());
        let service = ClassificationService::new(pipeline, Box::new(BrokenClassifier));
        let records = vec![record("satu", "u1"), record("dua", "u2")];

        let err = service.classify_batch(&records).unwrap_err();
        assert!(matches!(err, Error::PredictionMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn test_empty_batch() {
        let results = service().classify_batch(&[]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_csv_round_trip_preserves_fields() {
        let input = "full_text,user_id,created_at\n\
                     Saya sangat suka layanan ini!,user1,2024-01-01\n\
                     Produk ini parah sekali,user2,2024-01-02\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_text().unwrap(), "Saya sangat suka layanan ini!");
        assert_eq!(records[0].fields[2], ("created_at".to_string(), "2024-01-01".to_string()));

        let results = service().classify_batch(&records).unwrap();
        let mut output = Vec::new();
        write_records(&mut output, &results).unwrap();
        let output = String::from_utf8(output).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "full_text,user_id,created_at,cleaned_text,label");
        let first = lines.next().unwrap();
        assert!(first.starts_with("Saya sangat suka layanan ini!,user1,2024-01-01,"));
        assert!(first.ends_with(",positive"));
    }

    #[test]
    fn test_write_empty_batch_is_empty_output() {
        let mut output = Vec::new();
        write_records(&mut output, &[]).unwrap();
        assert!(output.is_empty());
    }
}

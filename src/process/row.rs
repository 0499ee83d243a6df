use csv::ReaderBuilder;

use super::utils::clean_str;
use crate::error::{ExtractError, Result};

/// One record-event row of a flat export, keyed by column role.
///
/// REDCap returns `[primary key, event, secondary key, others...]`; the row is
/// named here once so nothing downstream indexes into raw columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRow {
    pub primary_key: String,
    pub event: String,
    pub secondary_key: String,
    pub others: Vec<String>,
}

impl ExtractRow {
    /// Tokenize one response line (quote-aware) and assign column roles.
    ///
    /// `line_no` is only used to report narrow rows.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());

        let fields: Vec<String> = match reader.records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        Self::from_fields(fields, line_no)
    }

    pub fn from_fields(fields: Vec<String>, line_no: usize) -> Result<Self> {
        let found = fields.len();
        let mut it = fields.into_iter();
        match (it.next(), it.next(), it.next()) {
            (Some(primary_key), Some(event), Some(secondary_key)) => Ok(Self {
                primary_key,
                event,
                secondary_key,
                others: it.collect(),
            }),
            _ => Err(ExtractError::Shape {
                line: line_no,
                found,
            }),
        }
    }

    /// The secondary key carries a value (no trimming: whitespace counts).
    pub fn has_secondary_key(&self) -> bool {
        !self.secondary_key.is_empty()
    }

    /// Output columns: event dropped, every field but the last cleaned.
    pub fn into_output(self) -> Vec<String> {
        let mut out = Vec::with_capacity(2 + self.others.len());
        out.push(self.primary_key);
        out.push(self.secondary_key);
        out.extend(self.others);

        let last = out.len() - 1;
        for field in &mut out[..last] {
            *field = clean_str(field);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assigns_roles() {
        let row = ExtractRow::parse("1,visit_1_arm_1,1990-01-01,Jane,Doe", 1).unwrap();
        assert_eq!(row.primary_key, "1");
        assert_eq!(row.event, "visit_1_arm_1");
        assert_eq!(row.secondary_key, "1990-01-01");
        assert_eq!(row.others, vec!["Jane", "Doe"]);
    }

    #[test]
    fn test_parse_keeps_quoted_commas_together() {
        let row = ExtractRow::parse("7,baseline,\"Smith, J\",notes", 3).unwrap();
        assert_eq!(row.secondary_key, "Smith, J");
        assert_eq!(row.others, vec!["notes"]);
    }

    #[test]
    fn test_narrow_rows_are_shape_errors() {
        for (line, found) in [("ERROR: invalid token", 1), ("1,event", 2)] {
            match ExtractRow::parse(line, 5) {
                Err(ExtractError::Shape { line: 5, found: f }) => assert_eq!(f, found),
                other => panic!("expected shape error for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_output_drops_event_and_cleans_all_but_last() {
        let row = ExtractRow::parse("\" 1 \",evt, 2001-02-03 , \"x\" ,  last ", 1).unwrap();
        assert_eq!(row.into_output(), vec!["1", "2001-02-03", "x", "  last "]);
    }

    #[test]
    fn test_whitespace_secondary_key_counts_as_present() {
        let row = ExtractRow::parse("1,evt, ,name", 1).unwrap();
        assert!(row.has_secondary_key());
        let row = ExtractRow::parse("1,evt,,name", 1).unwrap();
        assert!(!row.has_secondary_key());
    }
}

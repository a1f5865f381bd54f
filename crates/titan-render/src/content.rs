//! Line-oriented parsers for delimited text-area content.
//!
//! Site owners enter features, stats, testimonials and FAQ entries as one
//! record per line with `|` (or `::` for FAQ) between fields. Parsing is
//! lenient by design: blank lines are discarded and lines with too few
//! fields are skipped with a debug log, never an error.

use tracing::debug;

/// One parsed record: the trimmed fields of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    fields: Vec<String>,
}

impl ContentRecord {
    /// Field at `index`, or `""` when the line had fewer fields.
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// All fields in input order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Re-serialize the record with the given delimiter.
    #[must_use]
    pub fn join(&self, delimiter: &str) -> String {
        self.fields.join(&format!(" {} ", delimiter.trim()))
    }
}

/// One parsed FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Marker separating an FAQ question from its answer.
const FAQ_DELIMITER: &str = "::";

/// Parse a delimited text block into records.
///
/// Each non-blank line is split on the first `min_fields - 1` occurrences
/// of `delimiter`; lines with fewer than `min_fields` parts are skipped.
/// Fields are whitespace-trimmed. Input line order is preserved.
pub fn parse_delimited_list(raw: &str, delimiter: &str, min_fields: usize) -> Vec<ContentRecord> {
    let mut records = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line
            .splitn(min_fields, delimiter)
            .map(|part| part.trim().to_owned())
            .collect();
        if fields.len() < min_fields {
            debug!(line, "skipping malformed content line");
            continue;
        }
        records.push(ContentRecord { fields });
    }
    records
}

/// Parse an FAQ text block: one `Question :: Answer` pair per line.
///
/// Same leniency as [`parse_delimited_list`]: lines without the `::`
/// marker are silently skipped.
pub fn parse_faq(raw: &str) -> Vec<FaqEntry> {
    parse_delimited_list(raw, FAQ_DELIMITER, 2)
        .into_iter()
        .map(|record| FaqEntry {
            question: record.field(0).to_owned(),
            answer: record.field(1).to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_feature_lines() {
        let raw = "bolt | Speed | Loads in 0.1s\nwallet | Cost | $0 Monthly Fees";
        let records = parse_delimited_list(raw, "|", 3);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field(0), "bolt");
        assert_eq!(records[0].field(1), "Speed");
        assert_eq!(records[0].field(2), "Loads in 0.1s");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        // 5 lines, 2 lacking the delimiter: exactly 3 records, input order.
        let raw = "a | 1 | x\nno delimiter here\nb | 2 | y\nstill none\nc | 3 | z";
        let records = parse_delimited_list(raw, "|", 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].field(0), "a");
        assert_eq!(records[1].field(0), "b");
        assert_eq!(records[2].field(0), "c");
    }

    #[test]
    fn test_blank_lines_discarded() {
        let raw = "\n\na | 1\n   \nb | 2\n";
        let records = parse_delimited_list(raw, "|", 2);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_body_keeps_extra_delimiters() {
        // min_fields bounds the split: extra delimiters stay in the last field.
        let records = parse_delimited_list("star | Rated | 5/5 | verified", "|", 3);
        assert_eq!(records[0].field(2), "5/5 | verified");
    }

    #[test]
    fn test_reparse_of_rejoined_records_is_identity() {
        let raw = "bolt | Speed | Fast\nshield | Secure | Safe";
        let records = parse_delimited_list(raw, "|", 3);
        let rejoined: Vec<String> = records.iter().map(|r| r.join("|")).collect();
        let reparsed = parse_delimited_list(&rejoined.join("\n"), "|", 3);
        assert_eq!(records, reparsed);
    }

    #[test]
    fn test_parse_faq() {
        let raw = "How fast? :: 0.1 seconds.\nnot a question\nIs it secure? :: Yes.";
        let entries = parse_faq(raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "How fast?");
        assert_eq!(entries[0].answer, "0.1 seconds.");
        assert_eq!(entries[1].question, "Is it secure?");
    }
}

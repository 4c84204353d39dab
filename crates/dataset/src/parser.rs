//! Parser for the song dataset CSV.
//!
//! The dataset is a single CSV file whose header names the columns. Only four
//! columns are required:
//! - `track_name`: lookup key for the picker
//! - `artist(s)_name`: artist name(s), one field even for collaborations
//! - `streams`: total stream count
//! - `recommendations`: precomputed similar-song list, comma-delimited
//!
//! Any extra columns are ignored. Track names and recommendation lists contain
//! commas, so fields follow the usual CSV quoting rules: a field wrapped in
//! double quotes may contain commas, newlines, and doubled quotes (`""`) for a
//! literal quote.

use crate::error::{DatasetError, Result};
use crate::types::SongRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Required column names, exactly as they appear in the header
pub const COL_TRACK_NAME: &str = "track_name";
pub const COL_ARTISTS: &str = "artist(s)_name";
pub const COL_STREAMS: &str = "streams";
pub const COL_RECOMMENDATIONS: &str = "recommendations";

/// One record split into fields, tagged with the line it started on
struct RawRecord {
    line: usize,
    fields: Vec<String>,
}

/// Read the whole file into memory.
///
/// A missing file maps to `FileNotFound` so startup can report it distinctly
/// from read failures.
fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DatasetError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DatasetError::IoError(err),
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Split CSV content into records of fields.
///
/// Quoting rules: a `"` at the start of a field opens quoted mode, where
/// commas and newlines are literal and `""` is an escaped quote. Blank lines
/// are skipped. `\r` is stripped so `\r\n` files parse the same as `\n` files.
fn split_records(content: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            // Stray quote inside an unquoted field, keep it as data
            '"' => field.push('"'),
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\n' if in_quotes => {
                line += 1;
                field.push('\n');
            }
            '\n' => {
                line += 1;
                if !(fields.is_empty() && field.is_empty()) {
                    fields.push(std::mem::take(&mut field));
                    records.push(RawRecord {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                record_line = line;
            }
            '\r' => {}
            _ => field.push(c),
        }
    }

    // Final record when the file doesn't end with a newline
    if !(fields.is_empty() && field.is_empty()) {
        fields.push(field);
        records.push(RawRecord {
            line: record_line,
            fields,
        });
    }

    records
}

/// Find a required column in the header row
fn column_position(header: &[String], column: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: column.to_string(),
        })
}

/// Split the stored recommendation column into its segments.
///
/// The column holds one comma-delimited string; splitting happens here, once,
/// so the interaction path never re-checks how the list was stored. Segments
/// are kept verbatim, including leading spaces and bracket/quote artifacts
/// from how the list was serialized into the column. An empty column
/// normalizes to an empty list.
pub(crate) fn normalize_recommendations(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Parse the dataset CSV into song records.
///
/// Fails if the file is missing, the header lacks a required column, a row is
/// shorter than the header, or a stream count doesn't parse.
pub fn parse_songs(path: &Path) -> Result<Vec<SongRecord>> {
    let content = read_file(path)?;
    let mut records = split_records(&content).into_iter();

    let header = records.next().ok_or_else(|| DatasetError::ParseError {
        line: 1,
        reason: "empty file, no header row".to_string(),
    })?;

    let track_col = column_position(&header.fields, COL_TRACK_NAME)?;
    let artists_col = column_position(&header.fields, COL_ARTISTS)?;
    let streams_col = column_position(&header.fields, COL_STREAMS)?;
    let recs_col = column_position(&header.fields, COL_RECOMMENDATIONS)?;
    let width = header.fields.len();

    let mut songs = Vec::new();
    for RawRecord { line, fields } in records {
        if fields.len() < width {
            return Err(DatasetError::FieldCountMismatch {
                expected: width,
                found: fields.len(),
                line,
            });
        }

        let streams_raw = fields[streams_col].trim();
        let streams = streams_raw
            .parse::<u64>()
            .map_err(|e| DatasetError::ParseError {
                line,
                reason: format!("Invalid streams value '{streams_raw}': {e}"),
            })?;

        songs.push(SongRecord {
            track_name: fields[track_col].clone(),
            artists: fields[artists_col].clone(),
            streams,
            recommendations: normalize_recommendations(&fields[recs_col]),
        });
    }

    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_split_records_quoted_commas() {
        let records = split_records("a,\"b,c\",d\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_records_escaped_quotes_and_blank_lines() {
        let records = split_records("\"say \"\"hi\"\"\",x\n\n1,2\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["say \"hi\"", "x"]);
        assert_eq!(records[1].fields, vec!["1", "2"]);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_split_records_no_trailing_newline() {
        let records = split_records("a,b");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields, vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_recommendations_splits_on_comma() {
        let segments = normalize_recommendations("['X', 'Y', 'Z']");
        assert_eq!(segments, vec!["['X'", " 'Y'", " 'Z']"]);
    }

    #[test]
    fn test_normalize_recommendations_empty_column() {
        assert!(normalize_recommendations("").is_empty());
        assert!(normalize_recommendations("   ").is_empty());
    }

    #[test]
    fn test_parse_songs_basic() {
        let file = write_csv(
            "track_name,artist(s)_name,streams,recommendations,bpm\n\
             Flowers,Miley Cyrus,1316855716,\"['Kill Bill', 'Creepin']\",118\n",
        );
        let songs = parse_songs(file.path()).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].track_name, "Flowers");
        assert_eq!(songs[0].artists, "Miley Cyrus");
        assert_eq!(songs[0].streams, 1316855716);
        assert_eq!(songs[0].recommendations, vec!["['Kill Bill'", " 'Creepin']"]);
    }

    #[test]
    fn test_parse_songs_missing_column() {
        let file = write_csv("track_name,streams,recommendations\nA,1,X\n");
        let err = parse_songs(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { ref column } if column == COL_ARTISTS
        ));
    }

    #[test]
    fn test_parse_songs_invalid_streams() {
        let file = write_csv(
            "track_name,artist(s)_name,streams,recommendations\nA,B,not_a_number,X\n",
        );
        let err = parse_songs(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_parse_songs_short_row() {
        let file = write_csv("track_name,artist(s)_name,streams,recommendations\nA,B,1\n");
        let err = parse_songs(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::FieldCountMismatch {
                expected: 4,
                found: 3,
                line: 2
            }
        ));
    }

    #[test]
    fn test_parse_songs_file_not_found() {
        let err = parse_songs(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::FileNotFound { .. }));
    }
}

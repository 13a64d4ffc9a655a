//! Link record collection from `id,url,page_num` lines

use crate::error::CollectError;
use crate::schema::LinkRecord;
use std::io::BufRead;

/// Parse one input line. `line` is 1-based and only used in diagnostics.
///
/// No quoting or escaping: a URL containing a comma is a format error.
pub fn parse_line(line: usize, text: &str) -> Result<LinkRecord, CollectError> {
    let fields: Vec<&str> = text.split(',').collect();
    let [id, url, page_number] = fields[..] else {
        return Err(CollectError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let id = id.parse::<i64>().map_err(|_| CollectError::InvalidId {
        line,
        value: id.to_string(),
    })?;
    let page_number = page_number
        .parse::<i64>()
        .map_err(|_| CollectError::InvalidPageNumber {
            line,
            value: page_number.to_string(),
        })?;

    Ok(LinkRecord {
        id,
        url: url.to_string(),
        page_number,
    })
}

/// Collect records in input order, stopping at the first bad line
pub fn collect<R: BufRead>(reader: R) -> Result<Vec<LinkRecord>, CollectError> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(idx + 1, &line?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        let record = parse_line(1, "1,http://example.com,5").unwrap();
        assert_eq!(
            record,
            LinkRecord {
                id: 1,
                url: "http://example.com".to_string(),
                page_number: 5,
            }
        );
    }

    #[test]
    fn test_url_taken_verbatim() {
        let record = parse_line(1, "2,not a url at all,0").unwrap();
        assert_eq!(record.url, "not a url at all");
    }

    #[test]
    fn test_signed_integers() {
        let record = parse_line(1, "+7,http://a.test,-2").unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.page_number, -2);
    }

    #[test]
    fn test_invalid_id() {
        let err = parse_line(4, "abc,http://example.com,1").unwrap_err();
        assert!(matches!(
            err,
            CollectError::InvalidId { line: 4, ref value } if value == "abc"
        ));
    }

    #[test]
    fn test_invalid_page_number() {
        let err = parse_line(1, "1,http://example.com,five").unwrap_err();
        assert!(matches!(
            err,
            CollectError::InvalidPageNumber { ref value, .. } if value == "five"
        ));
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        assert!(parse_line(1, " 1,http://example.com,5").is_err());
    }

    #[test]
    fn test_field_count() {
        let err = parse_line(1, "1,http://example.com").unwrap_err();
        assert!(matches!(err, CollectError::FieldCount { found: 2, .. }));

        let err = parse_line(1, "1,http://example.com/?a=1,b=2,5").unwrap_err();
        assert!(matches!(err, CollectError::FieldCount { found: 4, .. }));

        let err = parse_line(1, "").unwrap_err();
        assert!(matches!(err, CollectError::FieldCount { found: 1, .. }));
    }

    #[test]
    fn test_collect_preserves_order() {
        let input = "3,http://c.test,1\r\n1,http://a.test,2\n2,http://b.test,3\n";
        let records = collect(Cursor::new(input)).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(records[0].page_number, 1);
    }

    #[test]
    fn test_collect_empty() {
        assert!(collect(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_collect_fails_fast() {
        let input = "1,http://a.test,1\nx,http://b.test,2\ny,http://c.test,3\n";
        let err = collect(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, CollectError::InvalidId { line: 2, .. }));
    }
}

//! Query parsing.
//!
//! A query is either free text used to filter the catalog, or
//! `<type> ✕ <count>` asking for `count` values of one type.

/// Separates the type name from the count.
pub const DELIMITER: char = '✕';

/// Error type for query parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Count is not a positive integer
    #[error("Not a number: {0}")]
    InvalidCount(String),
}

/// A parsed request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Explicit data type, when the delimiter is present
    pub type_name: Option<String>,
    /// Requested number of values, when the delimiter is present
    pub count: Option<u64>,
    /// Free text to filter the catalog with
    pub raw_text: Option<String>,
}

/// Outcome of parsing one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Query(Query),
    /// The input ends with the delimiter: go back to an empty query.
    ResetRequested,
}

/// Parse raw input into a request.
pub fn parse(raw: &str) -> Result<ParseOutcome, QueryError> {
    let Some((name, count)) = raw.split_once(DELIMITER) else {
        return Ok(ParseOutcome::Query(Query {
            raw_text: Some(raw.trim().to_string()),
            ..Query::default()
        }));
    };

    // Checked on the raw text, so "Name ✕ " is a request and "Name ✕" is not
    if raw.ends_with(DELIMITER) {
        return Ok(ParseOutcome::ResetRequested);
    }

    let count = parse_count(count.trim())?;
    Ok(ParseOutcome::Query(Query {
        type_name: Some(name.trim().to_string()),
        count: Some(count),
        raw_text: None,
    }))
}

fn parse_count(text: &str) -> Result<u64, QueryError> {
    if text.is_empty() {
        return Ok(1);
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(QueryError::InvalidCount(text.to_string()));
    }
    match text.parse::<u64>() {
        Ok(0) | Err(_) => Err(QueryError::InvalidCount(text.to_string())),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> Query {
        match parse(raw).unwrap() {
            ParseOutcome::Query(q) => q,
            ParseOutcome::ResetRequested => panic!("unexpected reset for {raw:?}"),
        }
    }

    #[test]
    fn test_type_and_count() {
        let q = query("Name ✕ 5");
        assert_eq!(q.type_name.as_deref(), Some("Name"));
        assert_eq!(q.count, Some(5));
        assert_eq!(q.raw_text, None);
    }

    #[test]
    fn test_empty_count_defaults_to_one() {
        let q = query("Name ✕ ");
        assert_eq!(q.type_name.as_deref(), Some("Name"));
        assert_eq!(q.count, Some(1));
    }

    #[test]
    fn test_reset() {
        assert_eq!(parse("✕").unwrap(), ParseOutcome::ResetRequested);
        assert_eq!(parse("Name ✕").unwrap(), ParseOutcome::ResetRequested);
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            parse("Name ✕ abc"),
            Err(QueryError::InvalidCount("abc".to_string()))
        );
        assert_eq!(
            parse("Name ✕ -3"),
            Err(QueryError::InvalidCount("-3".to_string()))
        );
        assert_eq!(
            parse("Name ✕ 0"),
            Err(QueryError::InvalidCount("0".to_string()))
        );
    }

    #[test]
    fn test_count_overflow() {
        let huge = "99999999999999999999999";
        assert_eq!(
            parse(&format!("Name ✕ {huge}")),
            Err(QueryError::InvalidCount(huge.to_string()))
        );
    }

    #[test]
    fn test_free_text() {
        let q = query("  addr ");
        assert_eq!(q.raw_text.as_deref(), Some("addr"));
        assert_eq!(q.type_name, None);
        assert_eq!(q.count, None);

        let q = query("");
        assert_eq!(q.raw_text.as_deref(), Some(""));
    }

    #[test]
    fn test_second_delimiter_in_count() {
        assert_eq!(
            parse("Name ✕ 3 ✕ 4"),
            Err(QueryError::InvalidCount("3 ✕ 4".to_string()))
        );
    }

    #[test]
    fn test_name_with_whitespace_only_count() {
        let q = query("Street Name ✕    ");
        assert_eq!(q.type_name.as_deref(), Some("Street Name"));
        assert_eq!(q.count, Some(1));
    }
}

//! Field-level text helpers for the semicolon-delimited import files

/// Split one record into exactly `expected` fields
///
/// Line terminators are removed first, so a record read with its `\n` or
/// `\r\n` still yields clean last fields.
///
/// # Errors
/// Returns a description of the mismatch if the field count is wrong
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, String> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(';').collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(format!("expected {expected} fields, found {}", fields.len()))
    }
}

/// Parse an optional integer field; blank and `-1` both mean unknown
///
/// # Errors
/// Returns a description if the text is not an integer
pub fn parse_optional_id(field: &str) -> Result<Option<i64>, String> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    match field.parse::<i64>() {
        Ok(-1) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(format!("'{field}' is not a number: {e}")),
    }
}

/// Parse a decimal written with a decimal comma (`500,250` is 500.25)
///
/// A blank field reads as zero.
///
/// # Errors
/// Returns a description if the text is not a number
pub fn parse_decimal_comma(field: &str) -> Result<f64, String> {
    let normalized = field.trim().replace(',', ".");
    if normalized.is_empty() {
        return Ok(0.0);
    }
    normalized
        .parse::<f64>()
        .map_err(|e| format!("'{}' is not a decimal number: {e}", field.trim()))
}

/// Parse an integer that may contain thousands-separator commas
///
/// A blank field reads as zero, which later reports as missing population.
///
/// # Errors
/// Returns a description if the text is not an integer
pub fn parse_grouped_integer(field: &str) -> Result<i64, String> {
    let digits: String = field.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<i64>()
        .map_err(|e| format!("'{}' is not an integer: {e}", field.trim()))
}

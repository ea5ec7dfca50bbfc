use crate::error::Error;

/// Parse whitespace-delimited numbers into a vector of `f64`
///
/// Tokens may be separated by any whitespace, so both one-value-per-line and
/// space separated input are accepted. Blank lines are skipped. Parsing stops
/// at the first token that is not a valid `f64`, reporting its 1-based line.
pub fn parse_values(text: &str) -> Result<Vec<f64>, Error> {
    let mut values = Vec::new();

    for (index, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| Error::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

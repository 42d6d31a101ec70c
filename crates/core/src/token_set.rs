//! Delimited encoding for ordered token sequences.
//!
//! Ad weekdays are persisted as a single delimited string (`"mon,wed,fri"`)
//! and exposed as a sequence of tokens. Tokens must be non-empty and must not
//! contain the delimiter; [`encode_token_set`] enforces this so that
//! [`decode_token_set`] always restores the original sequence.

/// Delimiter used for the `ads.week_days` column.
pub const WEEK_DAY_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenSetError {
    #[error("token at position {0} is empty")]
    EmptyToken(usize),

    #[error("token '{token}' contains the delimiter '{delimiter}'")]
    ContainsDelimiter { token: String, delimiter: char },
}

/// Join `tokens` with `delimiter`, preserving order and duplicates.
pub fn encode_token_set<T: AsRef<str>>(
    tokens: &[T],
    delimiter: char,
) -> Result<String, TokenSetError> {
    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(TokenSetError::EmptyToken(index));
        }
        if token.contains(delimiter) {
            return Err(TokenSetError::ContainsDelimiter {
                token: token.to_string(),
                delimiter,
            });
        }
    }

    let parts: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    Ok(parts.join(&delimiter.to_string()))
}

/// Split an encoded string back into its tokens. The empty string decodes to
/// an empty sequence.
pub fn decode_token_set(encoded: &str, delimiter: char) -> Vec<String> {
    if encoded.is_empty() {
        return Vec::new();
    }
    encoded.split(delimiter).map(str::to_string).collect()
}

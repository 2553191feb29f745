//! Canonical JSON bytes for hashing.
//!
//! Rules: object keys sorted, compact separators, integers only. Floats
//! are rejected so digests never depend on float formatting.

use thiserror::Error;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    #[error("canonical JSON encoding failed: {detail}")]
    Encode { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// Object keys are sorted here by byte order, whatever map type
/// `serde_json` was built with.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
        }
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &serde_json::Value::String(key.clone()))?;
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
        scalar => write_scalar(buf, scalar)?,
    }
    Ok(())
}

/// Null, bool, integer, or string: serde_json's compact form is canonical.
fn write_scalar(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *buf, value).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}

//! Cart snapshot codec.
//!
//! A snapshot is the full cart serialized as a JSON array of lines (see
//! `marzipan_core::CartLine` for the wire shape). Decoding is tolerant:
//! a snapshot that is not valid JSON, or not an array of lines, yields an
//! empty cart rather than an error, and individually invalid lines are
//! dropped while the rest survive.

use std::collections::HashSet;

use marzipan_core::CartLine;

/// Serialize the cart to its snapshot form.
///
/// Returns `None` only if serialization itself fails, which for these
/// types means a bug rather than bad data; the caller logs and skips the
/// persist.
#[must_use]
pub fn encode(lines: &[CartLine]) -> Option<String> {
    match serde_json::to_string(lines) {
        Ok(serialized) => Some(serialized),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize cart snapshot");
            None
        }
    }
}

/// Parse a stored snapshot back into cart lines.
///
/// Enforces the cart invariants on the way in: at most one line per
/// product id (first occurrence wins) and no zero-quantity lines. Data
/// violating them can only come from hand-edited or pre-migration
/// snapshots.
#[must_use]
pub fn decode(raw: &str) -> Vec<CartLine> {
    let parsed: Vec<CartLine> = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Corrupt cart snapshot, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut lines = Vec::with_capacity(parsed.len());
    for line in parsed {
        if line.quantity == 0 {
            tracing::warn!(product_id = %line.product.id, "Dropping zero-quantity line from snapshot");
            continue;
        }
        if !seen.insert(line.product.id.clone()) {
            tracing::warn!(product_id = %line.product.id, "Dropping duplicate line from snapshot");
            continue;
        }
        lines.push(line);
    }
    lines
}

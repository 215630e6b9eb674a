use serde_json::Value;

use crate::types::EmbeddingVector;

/// Reconciles a raw embedding-provider payload into one dense vector.
///
/// Accepted shapes:
/// - flat `[d]` - returned as-is
/// - per-token `[[d], [d], ...]` - element-wise mean over every row whose
///   length matches the first row; other rows are skipped
/// - batch of one `[[[d], ...]]` or `[[d]]` nested one level deeper - recurses
///   into the first element
///
/// Anything else yields `None`. Never panics on malformed input. Non-numeric
/// cells inside a token row count as `0.0`; a flat vector containing a
/// non-numeric entry is rejected.
pub fn to_vector_1d(raw: &Value) -> Option<EmbeddingVector> {
    let items = raw.as_array()?;
    let first = items.first()?;

    match first {
        Value::Number(_) => items.iter().map(Value::as_f64).collect(),
        Value::Array(row) => match row.first() {
            Some(Value::Number(_)) => mean_pool(items, row.len()),
            Some(Value::Array(_)) => to_vector_1d(first),
            _ => None,
        },
        _ => None,
    }
}

fn mean_pool(rows: &[Value], dims: usize) -> Option<EmbeddingVector> {
    let mut out = vec![0.0f64; dims];
    let mut count = 0usize;

    for row in rows {
        let Some(cells) = row.as_array() else {
            continue;
        };
        if cells.len() != dims {
            continue;
        }
        for (acc, cell) in out.iter_mut().zip(cells) {
            *acc += cell.as_f64().unwrap_or(0.0);
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let count = count as f64;
    for value in out.iter_mut() {
        *value /= count;
    }
    Some(out)
}

/// In-place L2 normalization. Zero vectors are left untouched.
pub fn l2_normalize_in_place(v: &mut [f64]) {
    let norm_sq: f64 = v.iter().map(|x| x * x).sum();
    if norm_sq > 0.0 {
        let inv_norm = norm_sq.sqrt().recip();
        for x in v.iter_mut() {
            *x *= inv_norm;
        }
    }
}

//! Fixed-width digit frames with per-position change annotations

use serde::Serialize;

/// One displayable snapshot of the computation
///
/// `digits` always has the same length within a run: the output digit
/// count plus the leading integer digit and the decimal point. `deltas`
/// runs parallel to `digits`: `None` at the decimal point, otherwise the
/// absolute difference against the digit previously shown at that
/// position. The first frame of a run has no baseline and carries no
/// deltas at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFrame {
    pub digits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deltas: Option<Vec<Option<u8>>>,
}

/// Truncate a raw decimal rendering to `width` characters, keep the
/// decimal point alive even when truncation would drop it, and right-pad
/// with zeros so every frame of a run has the same width.
pub(crate) fn truncate_and_pad(raw: &str, width: usize) -> String {
    let mut out: String = raw.chars().take(width).collect();
    if !out.contains('.') {
        out.push('.');
    }
    while out.len() < width {
        out.push('0');
    }
    out
}

/// Annotate `digits` against the previously shown string. Differing
/// lengths mean there is nothing sensible to diff (only possible when no
/// baseline exists yet), so the frame is returned unannotated.
pub(crate) fn diff(baseline: Option<&str>, digits: String) -> DisplayFrame {
    let deltas = match baseline {
        Some(prev) if prev.len() == digits.len() => Some(
            digits
                .chars()
                .zip(prev.chars())
                .map(|(new, old)| {
                    if new == '.' {
                        None
                    } else {
                        let new = new.to_digit(10).unwrap_or(0) as i8;
                        let old = old.to_digit(10).unwrap_or(0) as i8;
                        Some((new - old).unsigned_abs())
                    }
                })
                .collect(),
        ),
        _ => None,
    };
    DisplayFrame { digits, deltas }
}

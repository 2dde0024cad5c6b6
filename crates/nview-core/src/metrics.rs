//! Viewer metrics derived from ended streams.

use crate::catalog::StreamRecord;

/// Average concurrent viewers and its order of magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerMetrics {
    pub ccv: i64,
    pub n_view: u32,
}

impl ViewerMetrics {
    #[must_use]
    pub fn from_records(records: &[StreamRecord]) -> Self {
        let ccv = compute_ccv(records);
        Self {
            ccv,
            n_view: compute_n_view(ccv),
        }
    }
}

/// Integer mean of `viewer_avg` across `records`, or `0` for no records.
///
/// Summed in `i128` so that huge per-stream averages cannot overflow.
#[must_use]
pub fn compute_ccv(records: &[StreamRecord]) -> i64 {
    let Ok(count) = i128::try_from(records.len()) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let total: i128 = records.iter().map(|r| i128::from(r.viewer_avg)).sum();
    i64::try_from(total / count).unwrap_or(i64::MAX)
}

/// Number of decimal digits in `ccv`: `floor(log10(ccv)) + 1`, or `0` when
/// `ccv` is not positive.
///
/// NView is defined by this `f64::log10` formula, not by the exact digit
/// count. Above 10^15 the two diverge (`999_999_999_999_999` gives 16), so do
/// not swap in `i64::ilog10`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_n_view(ccv: i64) -> u32 {
    if ccv <= 0 {
        return 0;
    }
    (ccv as f64).log10().floor() as u32 + 1
}

//! Historical IV percentile
//!
//! Rank-based percentile: where does today's IV sit against the last year of
//! observations? Not a distributional fit - just the share of history
//! strictly below the current value.

use super::round2;

/// Trading days in a year; the historical window never looks further back
pub const HISTORY_WINDOW: usize = 252;

/// Percentile of `current_iv` against a historical series.
///
/// The series is most-recent-first and already filtered to one symbol; only
/// the first [`HISTORY_WINDOW`] entries are consulted. Equal historical
/// values do not count as "below", so a current IV matching the whole history
/// ranks at 0, not 100.
///
/// `None` when there is no history to rank against.
pub fn iv_percentile(historical: &[f64], current_iv: f64) -> Option<f64> {
    if historical.is_empty() {
        return None;
    }

    let window = &historical[..historical.len().min(HISTORY_WINDOW)];
    let below = window.iter().filter(|&&iv| iv < current_iv).count();

    Some(round2(100.0 * below as f64 / window.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_rank() {
        let history = [10.0, 15.0, 20.0, 25.0, 30.0];
        assert_eq!(iv_percentile(&history, 22.0), Some(60.0));
    }

    #[test]
    fn test_extremes() {
        let history = [10.0, 15.0, 20.0, 25.0, 30.0];
        assert_eq!(iv_percentile(&history, 5.0), Some(0.0));
        assert_eq!(iv_percentile(&history, 35.0), Some(100.0));
    }

    #[test]
    fn test_ties_excluded() {
        // Strictly-below: the two 20.0 entries do not lift the rank
        let history = [20.0, 20.0, 10.0, 30.0];
        assert_eq!(iv_percentile(&history, 20.0), Some(25.0));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(iv_percentile(&[], 20.0), None);
    }

    #[test]
    fn test_window_cap() {
        // 300 old observations at 10, current 252 most-recent at 50: only the
        // window is consulted
        let mut history = vec![50.0; HISTORY_WINDOW];
        history.extend(vec![10.0; 300]);

        assert_eq!(iv_percentile(&history, 40.0), Some(0.0));
    }

    #[test]
    fn test_rounding() {
        let history = [10.0, 20.0, 30.0];
        // 1/3 below -> 33.333... -> 33.33
        assert_eq!(iv_percentile(&history, 15.0), Some(33.33));
    }
}

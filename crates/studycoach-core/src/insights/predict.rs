//! Predicted score: a weighted blend of recent practice and the last exam.

const PRACTICE_WEIGHT: f64 = 0.6;
const EXAM_WEIGHT: f64 = 0.4;

/// Lenient numeric parse: blanks, junk and non-finite values become 0.
pub fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Blend practice average and last exam score into a predicted score.
///
/// An empty practice slice averages to 0 rather than erroring (the divisor
/// is clamped to 1); non-finite entries count as 0. Always returns an
/// integer, possibly 0.
pub fn predict_score(practice: &[f64], last_exam: f64) -> i64 {
    let sum: f64 = practice
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .sum();
    let avg = sum / practice.len().max(1) as f64;
    let exam = if last_exam.is_finite() { last_exam } else { 0.0 };
    (PRACTICE_WEIGHT * avg + EXAM_WEIGHT * exam).round() as i64
}

/// [`predict_score`] over raw text fields, coercing each entry first.
pub fn predict_score_raw(practice: &[&str], last_exam: &str) -> i64 {
    let parsed: Vec<f64> = practice.iter().copied().map(parse_score).collect();
    predict_score(&parsed, parse_score(last_exam))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blends_practice_average_and_exam() {
        // round(0.6 * 80 + 0.4 * 75) == 78
        assert_eq!(predict_score(&[80.0, 90.0, 70.0, 100.0, 60.0], 75.0), 78);
    }

    #[test]
    fn blank_inputs_predict_zero() {
        assert_eq!(predict_score_raw(&["", "", "", "", ""], ""), 0);
    }

    #[test]
    fn empty_practice_uses_exam_only() {
        assert_eq!(predict_score(&[], 80.0), 32);
    }

    #[test]
    fn junk_entries_count_as_zero() {
        // avg of [100, 0, 0] with exam 50: round(0.6 * 33.33 + 0.4 * 50) == 40
        assert_eq!(predict_score_raw(&["100", "n/a", ""], "50"), 40);
    }

    #[test]
    fn non_finite_values_count_as_zero() {
        assert_eq!(predict_score(&[f64::NAN, f64::INFINITY], f64::NAN), 0);
    }

    #[test]
    fn parse_score_is_lenient() {
        assert_eq!(parse_score("85"), 85.0);
        assert_eq!(parse_score(" 72.5 "), 72.5);
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("eighty"), 0.0);
        assert_eq!(parse_score("inf"), 0.0);
    }

    #[test]
    fn result_is_rounded_to_nearest() {
        // 0.6 * 81 + 0.4 * 80 == 80.6
        assert_eq!(predict_score(&[81.0], 80.0), 81);
        // 0.6 * 80 + 0.4 * 81 == 80.4
        assert_eq!(predict_score(&[80.0], 81.0), 80);
    }
}

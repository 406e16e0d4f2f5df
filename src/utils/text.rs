//! Text and number formatting helpers

/// Round to two decimal places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// English ordinal for a 1-based rank ("1st", "2nd", "3rd", "4th", ...)
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

/// Format an average for display, always with at least one decimal
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", round_to_hundredths(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(8.666_666), 8.67);
        assert_eq!(round_to_hundredths(9.0), 9.0);
        assert_eq!(round_to_hundredths(0.004), 0.0);
    }

    #[test]
    fn test_round_to_hundredths_huge_values_stay_finite() {
        assert_eq!(round_to_hundredths(1e307), 1e307);
        assert_eq!(round_to_hundredths(-f64::MAX), -f64::MAX);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9.0), "9.0");
        assert_eq!(format_score(9.5), "9.5");
        assert_eq!(format_score(8.67), "8.67");
        assert_eq!(format_score(0.0), "0.0");
    }
}

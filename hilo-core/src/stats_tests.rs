#[cfg(test)]
mod tests {
    use crate::stats::{win_probability, AggregateStats};

    #[test]
    fn win_rate_rounds_to_nearest_percent() {
        let mut s = AggregateStats::default();
        assert_eq!(s.win_rate(), 0);

        s.record_round(true);
        s.record_round(false);
        s.record_round(false);
        // 1/3 -> 33.33 -> 33
        assert_eq!(s.win_rate(), 33);

        s.record_round(true);
        // 2/4 -> 50
        assert_eq!(s.win_rate(), 50);

        s.record_round(true);
        s.record_round(true);
        // 4/6 -> 66.67 -> 67
        assert_eq!(s.win_rate(), 67);
    }

    #[test]
    fn wins_never_exceed_games_played() {
        let mut s = AggregateStats::default();
        for i in 0..20 {
            s.record_round(i % 3 == 0);
            assert!(s.wins <= s.games_played);
        }
        assert_eq!(s.games_played, 20);
        assert_eq!(s.wins, 7);
    }

    #[test]
    fn probability_two_decimal_display_values() {
        assert_eq!(format!("{:.2}", win_probability(99)), "1.00");
        assert_eq!(format!("{:.2}", win_probability(1)), "50.00");
        assert_eq!(format!("{:.2}", win_probability(9)), "10.00");
        // The cap only engages for the degenerate bound 0.
        assert_eq!(format!("{:.2}", win_probability(0)), "100.00");
    }
}

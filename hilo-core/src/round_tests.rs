use crate::round::{attempt_budget, Direction};

#[test]
fn attempt_budget_tier_boundaries() {
    assert_eq!(attempt_budget(1), 5);
    assert_eq!(attempt_budget(50), 5);
    assert_eq!(attempt_budget(51), 7);
    assert_eq!(attempt_budget(1000), 7);
    assert_eq!(attempt_budget(1001), 10);
    assert_eq!(attempt_budget(1_000_000), 10);
}

#[test]
fn direction_labels() {
    assert_eq!(Direction::Higher.as_str(), "higher");
    assert_eq!(Direction::Lower.as_str(), "lower");
}

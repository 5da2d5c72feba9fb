/// Suggested wager for the next round: one unit until the true count passes 2, then one more
/// unit per point of true count above 1, rounding the count down.
pub fn suggested_bet(true_count: f32, base_unit: f32) -> f32 {
    let units = (true_count - 1.0).floor().max(1.0);
    base_unit.max(units * base_unit)
}

/// Calorie anchors and the food each one stands for, in lookup order.
pub const FOOD_EQUIVALENTS: [(f64, &str); 6] = [
    (100.0, "1 large apple"),
    (200.0, "1 glass of milk"),
    (300.0, "1 slice of pizza"),
    (400.0, "1 bowl of instant noodles"),
    (500.0, "1 burger"),
    (700.0, "1 plate of Padang rice"),
];

/// Label of the anchor closest to `calories`. Ties go to the earlier entry.
pub fn nearest_food(calories: f64) -> &'static str {
    let mut best = FOOD_EQUIVALENTS[0];
    for entry in FOOD_EQUIVALENTS.iter().skip(1) {
        if (entry.0 - calories).abs() < (best.0 - calories).abs() {
            best = *entry;
        }
    }
    best.1
}

use crate::domain::{frequency::entities::FoodCount, variety::entities::TopFood};

pub const TOP_FOOD_LIMIT: u64 = 5;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

const DOMINANT_SHARE: f64 = 40.0;
const BALANCED_SHARE: f64 = 30.0;

pub const DOMINANT_FOOD_MESSAGE: &str = "One food has made up a big share of your meals lately. \
Alternating it with a similar food now and then can be an easy way to add variety.";
pub const REPEAT_FOODS_MESSAGE: &str =
    "You've been enjoying some foods on repeat, and that's okay. Try a small variation when you're ready.";
pub const BALANCED_MESSAGE: &str =
    "Your meals have been nicely varied lately. Keep enjoying the mix!";

/// Weekly variety is the base; monthly variety adds a small bonus and active
/// patterns take off one point for every two. Always within `MIN_SCORE..=MAX_SCORE`.
pub fn variety_score(unique_7d: i64, unique_30d: i64, active_hyperfixations: usize) -> i32 {
    let mut score = unique_7d;
    score += if unique_30d > 20 {
        2
    } else if unique_30d > 15 {
        1
    } else {
        0
    };
    score -= (active_hyperfixations / 2) as i64;

    score.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as i32
}

pub fn top_food_shares(counts: Vec<FoodCount>, total_events: i64) -> Vec<TopFood> {
    counts
        .into_iter()
        .map(|c| {
            let percentage = if total_events > 0 {
                c.count as f64 / total_events as f64 * 100.0
            } else {
                0.0
            };
            TopFood {
                food_name: c.food_name,
                count: c.count,
                percentage,
            }
        })
        .collect()
}

/// Generic, encouraging messages. Food names are never interpolated so the
/// wording stays under our control.
pub fn suggested_messages(top_foods: &[TopFood], active_hyperfixations: usize) -> Vec<String> {
    let mut messages = Vec::new();

    if top_foods.iter().any(|f| f.percentage > DOMINANT_SHARE) {
        messages.push(DOMINANT_FOOD_MESSAGE.to_string());
    }

    if active_hyperfixations > 0 {
        messages.push(REPEAT_FOODS_MESSAGE.to_string());
    }

    if let Some(top) = top_foods.first()
        && top.percentage < BALANCED_SHARE
    {
        messages.push(BALANCED_MESSAGE.to_string());
    }

    messages
}

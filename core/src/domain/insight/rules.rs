use crate::domain::{insight::entities::InsightType, variety::entities::VarietyReport};

/// Weekly unique-food count above which the week is celebrated.
pub const CELEBRATION_UNIQUE_FOODS: i64 = 7;

/// Insights a report qualifies for, with their message.
pub fn qualifying_insights(report: &VarietyReport) -> Vec<(InsightType, String)> {
    let mut insights = Vec::new();

    if report.unique_7d > CELEBRATION_UNIQUE_FOODS {
        insights.push((
            InsightType::VarietyCelebration,
            format!(
                "You enjoyed {} different foods this week. That's a lovely amount of variety!",
                report.unique_7d
            ),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::tone::is_gentle;

    fn report(unique_7d: i64) -> VarietyReport {
        VarietyReport {
            unique_7d,
            unique_30d: unique_7d,
            top_foods: Vec::new(),
            active_hyperfixations: Vec::new(),
            suggested_messages: Vec::new(),
            variety_score: 1,
        }
    }

    #[test]
    fn test_celebration_needs_more_than_seven_foods() {
        assert!(qualifying_insights(&report(7)).is_empty());

        let insights = qualifying_insights(&report(8));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].0, InsightType::VarietyCelebration);
        assert!(insights[0].1.contains('8'));
        assert!(is_gentle(&insights[0].1));
    }
}

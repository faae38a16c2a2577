use crate::models::{AppData, DayForest, DayStats};
use crate::tree::flatten;
use chrono::{Duration, Local, NaiveDate};

/// Completion summary for one day forest.
pub fn day_stats(forest: &DayForest) -> DayStats {
    let nodes = flatten(forest);
    let total = nodes.len();
    let completed = nodes.iter().filter(|node| node.done).count();
    let percentage = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    DayStats {
        total,
        completed,
        percentage,
        stars: stars_for(percentage),
    }
}

// Each check overwrites the previous one; the highest satisfied tier wins.
fn stars_for(percentage: u8) -> u8 {
    let mut stars = 0;
    if percentage > 0 {
        stars = 1;
    }
    if percentage >= 40 {
        stars = 2;
    }
    if percentage >= 70 {
        stars = 3;
    }
    if percentage >= 90 {
        stars = 4;
    }
    if percentage == 100 {
        stars = 5;
    }
    stars
}

/// Consecutive fully-complete days ending today. Recomputed from the store on
/// every call.
pub fn streak(data: &AppData) -> u32 {
    streak_at(Local::now().date_naive(), data)
}

/// A day counts iff it has at least one task and every task in its flattened
/// forest is complete; the walk stops at the first day that fails, today
/// included.
pub fn streak_at(today: NaiveDate, data: &AppData) -> u32 {
    let mut days = 0;
    let mut date = today;
    loop {
        let qualifies = data
            .days
            .get(&date_key(date))
            .is_some_and(|forest| !forest.is_empty() && flatten(forest).iter().all(|node| node.done));
        if !qualifies {
            break;
        }
        days += 1;
        date = date - Duration::days(1);
    }
    days
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskNode;

    fn leaf(id: &str, done: bool) -> TaskNode {
        TaskNode {
            id: id.to_string(),
            text: format!("task {id}"),
            done,
            children: Vec::new(),
        }
    }

    fn forest_with(completed: usize, total: usize) -> DayForest {
        (0..total)
            .map(|index| leaf(&format!("t{index}"), index < completed))
            .collect()
    }

    #[test]
    fn empty_forest_scores_zero() {
        let stats = day_stats(&Vec::new());
        assert_eq!(stats, DayStats { total: 0, completed: 0, percentage: 0, stars: 0 });
    }

    #[test]
    fn all_complete_scores_five_stars() {
        let stats = day_stats(&forest_with(4, 4));
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.stars, 5);
    }

    #[test]
    fn nested_children_count_toward_totals() {
        let forest = vec![TaskNode {
            id: "root".to_string(),
            text: "root".to_string(),
            done: true,
            children: vec![leaf("kid1", true), leaf("kid2", false)],
        }];
        let stats = day_stats(&forest);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.percentage, 67);
    }

    #[test]
    fn star_thresholds() {
        let cases = [
            (0, 0),
            (1, 1),
            (39, 1),
            (40, 2),
            (69, 2),
            (70, 3),
            (89, 3),
            (90, 4),
            (99, 4),
            (100, 5),
        ];
        for (percentage, expected) in cases {
            assert_eq!(stars_for(percentage), expected, "{percentage}%");
        }
    }

    #[test]
    fn star_thresholds_via_forests() {
        assert_eq!(day_stats(&forest_with(39, 100)).stars, 1);
        assert_eq!(day_stats(&forest_with(40, 100)).stars, 2);
        assert_eq!(day_stats(&forest_with(70, 100)).stars, 3);
        assert_eq!(day_stats(&forest_with(90, 100)).stars, 4);
        assert_eq!(day_stats(&forest_with(99, 100)).stars, 4);
        assert_eq!(day_stats(&forest_with(100, 100)).stars, 5);
    }

    #[test]
    fn streak_breaks_at_first_incomplete_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        data.days.insert(date_key(today), vec![leaf("t", true)]);
        data.days.insert(
            date_key(today - Duration::days(1)),
            vec![leaf("y1", true), leaf("y2", false)],
        );
        data.days
            .insert(date_key(today - Duration::days(2)), vec![leaf("d", true)]);

        assert_eq!(streak_at(today, &data), 1);
    }

    #[test]
    fn empty_today_breaks_streak_immediately() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        data.days.insert(date_key(today), Vec::new());
        data.days
            .insert(date_key(today - Duration::days(1)), vec![leaf("y", true)]);

        assert_eq!(streak_at(today, &data), 0);
    }

    #[test]
    fn streak_counts_consecutive_complete_days() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        for offset in 0..3 {
            data.days.insert(
                date_key(today - Duration::days(offset)),
                vec![leaf(&format!("t{offset}"), true)],
            );
        }

        assert_eq!(streak_at(today, &data), 3);
    }

    #[test]
    fn streak_requires_every_nested_node_complete() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        data.days.insert(
            date_key(today),
            vec![TaskNode {
                id: "root".to_string(),
                text: "root".to_string(),
                done: true,
                children: vec![leaf("kid", false)],
            }],
        );

        assert_eq!(streak_at(today, &data), 0);
    }
}

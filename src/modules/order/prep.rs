use serde::Serialize;
use sqlx::FromRow;

pub const PREP_WEEKS: std::ops::RangeInclusive<i32> = 1..=4;

#[derive(FromRow, Clone, Debug)]
pub struct PrepItem {
    pub meal_name: String,
    pub week_number: i32,
    pub day_text: String,
    pub time_slot: String,
    pub is_completed: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MealPrep {
    pub meal_name: String,
    pub count: usize,
    pub days: Vec<String>,
    pub slots: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeekPrep {
    pub week: i32,
    pub total_items: usize,
    pub meals: Vec<MealPrep>,
}

/// `"Lunch (1pm)"` is prepped as `"Lunch"`.
fn slot_name(time_slot: &str) -> &str {
    time_slot.split(' ').next().unwrap_or_default()
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

/// Groups open orders per week, then per meal, keeping first-seen order
/// for meals, days and slots. Weeks with nothing to prep are left out.
pub fn summarize(items: &[PrepItem]) -> Vec<WeekPrep> {
    PREP_WEEKS
        .filter_map(|week| {
            let mut meals: Vec<MealPrep> = vec![];
            let active = items
                .iter()
                .filter(|item| item.week_number == week && !item.is_completed);

            for item in active {
                let position = match meals.iter().position(|meal| meal.meal_name == item.meal_name) {
                    Some(position) => position,
                    None => {
                        meals.push(MealPrep {
                            meal_name: item.meal_name.clone(),
                            count: 0,
                            days: vec![],
                            slots: vec![],
                        });
                        meals.len() - 1
                    }
                };

                let meal = &mut meals[position];
                meal.count += 1;
                push_unique(&mut meal.days, &item.day_text);
                push_unique(&mut meal.slots, slot_name(&item.time_slot));
            }

            if meals.is_empty() {
                return None;
            }

            Some(WeekPrep {
                week,
                total_items: meals.iter().map(|meal| meal.count).sum(),
                meals,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(meal_name: &str, week_number: i32, day_text: &str, time_slot: &str) -> PrepItem {
        PrepItem {
            meal_name: meal_name.to_string(),
            week_number,
            day_text: day_text.to_string(),
            time_slot: time_slot.to_string(),
            is_completed: false,
        }
    }

    #[test]
    fn aggregates_per_week_and_meal() {
        let items = vec![
            item("Pilau", 1, "Monday", "Lunch (1pm)"),
            item("Chapati Wrap", 1, "Tuesday", "Dinner (7pm)"),
            item("Pilau", 1, "Wednesday", "Dinner (7pm)"),
            item("Pilau", 1, "Monday", "Lunch (12pm)"),
        ];

        let summary = summarize(&items);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].week, 1);
        assert_eq!(summary[0].total_items, 4);
        assert_eq!(
            summary[0].meals[0],
            MealPrep {
                meal_name: "Pilau".to_string(),
                count: 3,
                days: vec!["Monday".to_string(), "Wednesday".to_string()],
                slots: vec!["Lunch".to_string(), "Dinner".to_string()],
            }
        );
        assert_eq!(summary[0].meals[1].meal_name, "Chapati Wrap");
    }

    #[test]
    fn completed_orders_and_empty_weeks_are_skipped() {
        let mut done = item("Pilau", 2, "Friday", "Lunch (1pm)");
        done.is_completed = true;
        let items = vec![done, item("Mandazi", 4, "Sunday", "Breakfast")];

        let summary = summarize(&items);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].week, 4);
        assert_eq!(summary[0].meals[0].slots, vec!["Breakfast".to_string()]);
    }

    #[test]
    fn weeks_outside_the_cycle_are_ignored() {
        assert!(summarize(&[item("Pilau", 5, "Monday", "Lunch (1pm)")]).is_empty());
        assert!(summarize(&[]).is_empty());
    }
}

//! Nutrition log: meals per day plus a kcal target.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default daily kcal target for fresh journals.
pub const DEFAULT_TARGET_KCAL: u32 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub kcal: u32,
    #[serde(default)]
    pub meal_type: MealType,
    pub timestamp: DateTime<Utc>,
}

impl Meal {
    pub fn new(name: impl Into<String>, kcal: u32, meal_type: MealType) -> Self {
        Meal {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kcal,
            meal_type,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

/// One day's meals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMeals {
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// The whole nutrition log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default)]
    pub meals: BTreeMap<NaiveDate, DayMeals>,
    #[serde(default = "default_target")]
    pub target_kcal: u32,
}

fn default_target() -> u32 {
    DEFAULT_TARGET_KCAL
}

impl Default for Nutrition {
    fn default() -> Self {
        Nutrition {
            meals: BTreeMap::new(),
            target_kcal: DEFAULT_TARGET_KCAL,
        }
    }
}

impl Nutrition {
    pub fn add_meal(&mut self, date: NaiveDate, meal: Meal) {
        self.meals.entry(date).or_default().meals.push(meal);
    }

    /// Remove a meal by id. Deleting the last meal of a day removes the day
    /// key entirely. Returns whether anything was removed.
    pub fn remove_meal(&mut self, date: NaiveDate, meal_id: &str) -> bool {
        let Some(day) = self.meals.get_mut(&date) else {
            return false;
        };
        let before = day.meals.len();
        day.meals.retain(|m| m.id != meal_id);
        let removed = day.meals.len() != before;

        if day.meals.is_empty() {
            self.meals.remove(&date);
        }
        removed
    }

    /// Total kcal logged on a day.
    pub fn day_total(&self, date: NaiveDate) -> u32 {
        self.meals
            .get(&date)
            .map(|d| d.meals.iter().map(|m| m.kcal).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_total_sums_meals() {
        let mut nutrition = Nutrition::default();
        nutrition.add_meal(d(2024, 3, 1), Meal::new("Oats", 350, MealType::Breakfast));
        nutrition.add_meal(d(2024, 3, 1), Meal::new("Pasta", 600, MealType::Dinner));

        assert_eq!(nutrition.day_total(d(2024, 3, 1)), 950);
        assert_eq!(nutrition.day_total(d(2024, 3, 2)), 0);
    }

    #[test]
    fn removing_last_meal_drops_the_day() {
        let mut nutrition = Nutrition::default();
        let meal = Meal::new("Oats", 350, MealType::Breakfast);
        let id = meal.id.clone();
        nutrition.add_meal(d(2024, 3, 1), meal);

        assert!(nutrition.remove_meal(d(2024, 3, 1), &id));
        assert!(!nutrition.meals.contains_key(&d(2024, 3, 1)));
    }

    #[test]
    fn removing_one_of_two_keeps_the_day() {
        let mut nutrition = Nutrition::default();
        let first = Meal::new("Oats", 350, MealType::Breakfast);
        let id = first.id.clone();
        nutrition.add_meal(d(2024, 3, 1), first);
        nutrition.add_meal(d(2024, 3, 1), Meal::new("Pasta", 600, MealType::Dinner));

        assert!(nutrition.remove_meal(d(2024, 3, 1), &id));
        assert_eq!(nutrition.meals[&d(2024, 3, 1)].meals.len(), 1);
    }

    #[test]
    fn remove_unknown_meal_is_noop() {
        let mut nutrition = Nutrition::default();
        assert!(!nutrition.remove_meal(d(2024, 3, 1), "nope"));
    }
}

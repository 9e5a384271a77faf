//! Daily consumption aggregation
//!
//! Sums logged food records into per-nutrient totals.

use chrono::{NaiveDate, Utc};

use crate::models::{FoodRecord, NutrientTotals};

/// Sum food records into per-nutrient totals
///
/// Pure summation: absent nutrient values count as zero and record
/// order does not matter. Callers supply the records for the period
/// they care about; see `records_for_day` for the UTC day cut.
pub fn aggregate_daily_consumption(records: &[FoodRecord]) -> NutrientTotals {
    records.iter().map(FoodRecord::totals).sum()
}

/// Records consumed on the given UTC calendar date
///
/// Keeps timestamps in [00:00:00, next 00:00:00) UTC.
pub fn records_for_day(records: &[FoodRecord], day: NaiveDate) -> Vec<&FoodRecord> {
    records.iter().filter(|r| r.consumed_on() == day).collect()
}

/// Filter to one UTC day, then sum
pub fn aggregate_for_day(records: &[FoodRecord], day: NaiveDate) -> NutrientTotals {
    records_for_day(records, day)
        .into_iter()
        .map(FoodRecord::totals)
        .sum()
}

/// Aggregate the records that fall on the current UTC date
pub fn aggregate_today(records: &[FoodRecord]) -> NutrientTotals {
    aggregate_for_day(records, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    fn record(name: &str, ts: DateTime<Utc>, calories: Option<f64>) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            consumed_at: ts,
            calories,
            carbs: None,
            protein: None,
            fat: None,
            sugar: None,
            salt: None,
        }
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, h, m, s).unwrap()
    }

    #[test]
    fn test_aggregate_treats_absent_fields_as_zero() {
        let records = vec![
            record("desayuno", at(8, 0, 0), Some(300.0)),
            record("almuerzo", at(13, 0, 0), Some(450.0)),
        ];
        let totals = aggregate_daily_consumption(&records);
        assert_eq!(totals.calories, 750.0);
        assert_eq!(totals.carbs, 0.0);
        assert_eq!(totals.protein, 0.0);
        assert_eq!(totals.fat, 0.0);
        assert_eq!(totals.sugar, 0.0);
        assert_eq!(totals.salt, 0.0);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut records = vec![
            record("a", at(8, 0, 0), Some(100.0)),
            record("b", at(12, 0, 0), Some(200.0)),
            record("c", at(19, 0, 0), Some(300.0)),
        ];
        let forward = aggregate_daily_consumption(&records);
        records.reverse();
        let reverse = aggregate_daily_consumption(&records);
        assert_eq!(forward, reverse);
        assert_eq!(forward.calories, 600.0);
    }

    #[test]
    fn test_aggregate_empty_is_all_zeros() {
        let totals = aggregate_daily_consumption(&[]);
        assert_eq!(totals, NutrientTotals::zero());
    }

    #[test]
    fn test_records_for_day_keeps_whole_utc_day() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let records = vec![
            record("vispera", Utc.with_ymd_and_hms(2024, 5, 9, 23, 59, 59).unwrap(), Some(1.0)),
            record("medianoche", at(0, 0, 0), Some(2.0)),
            record("noche", at(23, 59, 59), Some(4.0)),
            record("siguiente", Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap(), Some(8.0)),
        ];

        let kept = records_for_day(&records, day);
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["medianoche", "noche"]);

        let totals = aggregate_for_day(&records, day);
        assert_eq!(totals.calories, 6.0);
    }

    #[test]
    fn test_aggregate_sums_every_nutrient() {
        let mut a = record("a", at(9, 0, 0), Some(95.0));
        a.carbs = Some(25.0);
        a.sugar = Some(19.0);
        let mut b = record("b", at(14, 0, 0), Some(250.0));
        b.carbs = Some(30.0);
        b.protein = Some(12.0);
        b.fat = Some(9.0);
        b.salt = Some(1.5);

        let totals = aggregate_daily_consumption(&[a, b]);
        assert_eq!(totals.calories, 345.0);
        assert_eq!(totals.carbs, 55.0);
        assert_eq!(totals.protein, 12.0);
        assert_eq!(totals.fat, 9.0);
        assert_eq!(totals.sugar, 19.0);
        assert_eq!(totals.salt, 1.5);
    }
}

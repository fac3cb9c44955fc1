//! Sales history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of summed sales for a product
///
/// The storage layer emits one event per calendar day that had at least one
/// sale, with the quantity already aggregated for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEvent {
    pub date: NaiveDate,
    pub quantity: i64,
}

/// Date-ordered sales history for a single product
///
/// Events are sorted ascending by date on construction and dates are unique
/// within the series. An empty series is valid and means "no recorded sales".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesSeries {
    events: Vec<SaleEvent>,
}

impl SalesSeries {
    /// Build a series from raw events, sorting by date ascending
    pub fn new(mut events: Vec<SaleEvent>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total units sold across the whole series
    pub fn total_quantity(&self) -> i64 {
        self.events.iter().map(|e| e.quantity).sum()
    }
}

impl FromIterator<SaleEvent> for SalesSeries {
    fn from_iter<T: IntoIterator<Item = SaleEvent>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn new_sorts_events_by_date() {
        let series = SalesSeries::new(vec![
            SaleEvent { date: day(3), quantity: 5 },
            SaleEvent { date: day(1), quantity: 2 },
            SaleEvent { date: day(2), quantity: 7 },
        ]);

        let dates: Vec<NaiveDate> = series.events().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn total_quantity_sums_all_events() {
        let series = SalesSeries::new(vec![
            SaleEvent { date: day(1), quantity: 2 },
            SaleEvent { date: day(2), quantity: 7 },
        ]);
        assert_eq!(series.total_quantity(), 9);
    }

    #[test]
    fn empty_series_is_valid() {
        let series = SalesSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.total_quantity(), 0);
    }
}

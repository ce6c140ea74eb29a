//! Sales chart aggregation
//!
//! Buckets sale totals into fixed-size time series for the dashboard chart.
//! Pure functions of the reference instant passed in, so tests never race
//! the wall clock.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::Sale;

/// Chart time range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartPeriod {
    /// Last 24 hours, hourly buckets
    Day,
    /// Last 7 days, daily buckets
    Week,
    /// Last 4 weeks, weekly buckets
    Month,
}

impl ChartPeriod {
    /// Number of buckets this period always produces
    pub fn bucket_count(&self) -> usize {
        match self {
            ChartPeriod::Day => 24,
            ChartPeriod::Week => 7,
            ChartPeriod::Month => 4,
        }
    }
}

/// One chart data point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBucket {
    pub label: String,
    pub amount: Decimal,
}

/// Aggregate sales into the period's buckets, oldest first
///
/// The last bucket always contains `now`. Buckets not touched by any sale
/// carry a zero amount, so the series length is fixed per period.
pub fn aggregate(sales: &[Sale], period: ChartPeriod, now: DateTime<Utc>) -> Vec<ChartBucket> {
    match period {
        ChartPeriod::Day => hourly(sales, now),
        ChartPeriod::Week => daily(sales, now),
        ChartPeriod::Month => weekly(sales, now),
    }
}

fn hourly(sales: &[Sale], now: DateTime<Utc>) -> Vec<ChartBucket> {
    (0..24)
        .rev()
        .map(|offset| {
            let hour = now - Duration::hours(offset);
            let amount = sales
                .iter()
                .filter(|s| {
                    s.date.date_naive() == hour.date_naive() && s.date.hour() == hour.hour()
                })
                .map(|s| s.total)
                .sum();
            ChartBucket {
                label: format!("{:02}:00", hour.hour()),
                amount,
            }
        })
        .collect()
}

fn daily(sales: &[Sale], now: DateTime<Utc>) -> Vec<ChartBucket> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();
            let amount = sales
                .iter()
                .filter(|s| s.date.date_naive() == day)
                .map(|s| s.total)
                .sum();
            ChartBucket {
                label: day.format("%a").to_string(),
                amount,
            }
        })
        .collect()
}

/// Weekly buckets use half-open `[start, end)` day ranges so a sale on a
/// boundary day lands in exactly one bucket.
fn weekly(sales: &[Sale], now: DateTime<Utc>) -> Vec<ChartBucket> {
    // exclusive end of the newest bucket: midnight after today
    let newest_end = now.date_naive() + Duration::days(1);
    (0..4)
        .rev()
        .map(|offset| {
            let end = newest_end - Duration::days(offset * 7);
            let start = end - Duration::days(7);
            let amount = sales
                .iter()
                .filter(|s| {
                    let day = s.date.date_naive();
                    day >= start && day < end
                })
                .map(|s| s.total)
                .sum();
            ChartBucket {
                label: format!("{} - {}", month_day(start), month_day(end - Duration::days(1))),
                amount,
            }
        })
        .collect()
}

fn month_day(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductSnapshot;

    fn sale_at(date: &str, total: Decimal) -> Sale {
        Sale {
            id: shared::util::snowflake_id(),
            date: date.parse().unwrap(),
            product: ProductSnapshot {
                id: 1,
                name: "Wireless Headphones".to_string(),
                price: total,
                image: String::new(),
            },
            quantity: 1,
            total,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-05-12T10:30:00Z".parse().unwrap()
    }

    #[test]
    fn test_empty_input_yields_fixed_length_zero_series() {
        for period in [ChartPeriod::Day, ChartPeriod::Week, ChartPeriod::Month] {
            let buckets = aggregate(&[], period, now());
            assert_eq!(buckets.len(), period.bucket_count());
            assert!(buckets.iter().all(|b| b.amount == Decimal::ZERO));
        }
    }

    #[test]
    fn test_day_sale_at_now_lands_in_last_bucket() {
        let sales = vec![sale_at("2025-05-12T10:05:00Z", Decimal::new(5000, 2))];
        let buckets = aggregate(&sales, ChartPeriod::Day, now());
        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[23].label, "10:00");
        assert_eq!(buckets[23].amount, Decimal::new(5000, 2));
    }

    #[test]
    fn test_day_excludes_sales_older_than_24_hours() {
        // two sales 25 hours before the reference instant, one right at it
        let sales = vec![
            sale_at("2025-05-11T09:30:00Z", Decimal::from(10)),
            sale_at("2025-05-11T09:30:00Z", Decimal::from(20)),
            sale_at("2025-05-12T10:30:00Z", Decimal::from(30)),
        ];
        let buckets = aggregate(&sales, ChartPeriod::Day, now());
        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[23].amount, Decimal::from(30));
        let total: Decimal = buckets.iter().map(|b| b.amount).sum();
        assert_eq!(total, Decimal::from(30));
    }

    #[test]
    fn test_day_same_hour_yesterday_is_outside_the_window() {
        // with now at 10:30 the series runs 11:00 yesterday .. 10:00 today,
        // so 10:45 yesterday matches no bucket and never doubles into today's
        let sales = vec![sale_at("2025-05-11T10:45:00Z", Decimal::ONE)];
        let buckets = aggregate(&sales, ChartPeriod::Day, now());
        assert_eq!(buckets[0].label, "11:00");
        assert_eq!(buckets[23].label, "10:00");
        let total: Decimal = buckets.iter().map(|b| b.amount).sum();
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_week_buckets_by_calendar_day() {
        let sales = vec![
            sale_at("2025-05-12T00:00:00Z", Decimal::from(2)),
            sale_at("2025-05-12T23:59:59Z", Decimal::from(3)),
            sale_at("2025-05-06T12:00:00Z", Decimal::from(7)),
        ];
        let buckets = aggregate(&sales, ChartPeriod::Week, now());
        assert_eq!(buckets.len(), 7);
        // May 12 2025 is a Monday; the series runs Tue..Mon
        assert_eq!(buckets[6].label, "Mon");
        assert_eq!(buckets[6].amount, Decimal::from(5));
        assert_eq!(buckets[0].label, "Tue");
        assert_eq!(buckets[0].amount, Decimal::from(7));
    }

    #[test]
    fn test_month_boundary_sale_counts_exactly_once() {
        // one sale per day over the whole 28-day window
        let start: DateTime<Utc> = "2025-04-15T12:00:00Z".parse().unwrap();
        let sales: Vec<Sale> = (0..28)
            .map(|d| sale_at(&(start + Duration::days(d)).to_rfc3339(), Decimal::ONE))
            .collect();
        let buckets = aggregate(&sales, ChartPeriod::Month, now());
        assert_eq!(buckets.len(), 4);
        let total: Decimal = buckets.iter().map(|b| b.amount).sum();
        assert_eq!(total, Decimal::from(28));
        assert!(buckets.iter().all(|b| b.amount == Decimal::from(7)));
    }

    #[test]
    fn test_month_labels_are_inclusive_day_ranges() {
        let buckets = aggregate(&[], ChartPeriod::Month, now());
        assert_eq!(buckets[3].label, "May 6 - May 12");
        assert_eq!(buckets[2].label, "Apr 29 - May 5");
    }
}

use crate::format::{format_currency, format_percent};
use crate::report::{ChartPoint, MetricSummary, YoyChange};
use core_types::SalaryEntry;
use rust_decimal::Decimal;

/// Percent change from `previous` to `current`. `previous` is never zero for
/// well-formed entries (salary is validated as positive upstream).
fn percent_change(previous: Decimal, current: Decimal) -> Decimal {
    (current - previous) / previous * Decimal::ONE_HUNDRED
}

/// Returns the entries sorted by year ascending. `sort_by_key` is stable, so
/// entries sharing a year keep their original relative order.
fn sorted_by_year(entries: &[SalaryEntry]) -> Vec<&SalaryEntry> {
    let mut sorted: Vec<&SalaryEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.year);
    sorted
}

/// Builds the fixed five-metric summary panel for the dashboard.
///
/// Returns an empty vec for an empty input; the caller suppresses the panel
/// in that case. Otherwise the result always holds exactly five summaries in
/// a fixed order: Current Salary, Total Growth, Last YoY Change, Years
/// Tracked, and Avg. Compa Ratio.
pub fn build_metric_summaries(entries: &[SalaryEntry]) -> Vec<MetricSummary> {
    if entries.is_empty() {
        return Vec::new();
    }

    let sorted = sorted_by_year(entries);
    let first = sorted[0];
    let latest = sorted[sorted.len() - 1];

    let total_growth = percent_change(first.salary, latest.salary);

    let latest_change = if sorted.len() > 1 {
        percent_change(sorted[sorted.len() - 2].salary, latest.salary)
    } else {
        Decimal::ZERO
    };
    let latest_change_helper = if sorted.len() > 1 {
        format!("{} → {}", sorted[sorted.len() - 2].year, latest.year)
    } else {
        "N/A".to_string()
    };

    let ratio_sum: Decimal = sorted
        .iter()
        .map(|entry| entry.salary / entry.range_mid)
        .sum();
    let average_compa_ratio = ratio_sum / Decimal::from(sorted.len() as u64);

    vec![
        MetricSummary {
            label: "Current Salary".to_string(),
            value: format_currency(latest.salary),
            helper: Some(format!("{} • {}", latest.year, latest.role)),
        },
        MetricSummary {
            label: "Total Growth".to_string(),
            value: format_percent(total_growth),
            helper: Some(format!(
                "{} → {}",
                format_currency(first.salary),
                format_currency(latest.salary)
            )),
        },
        MetricSummary {
            label: "Last YoY Change".to_string(),
            value: format_percent(latest_change),
            helper: Some(latest_change_helper),
        },
        MetricSummary {
            label: "Years Tracked".to_string(),
            value: sorted.len().to_string(),
            helper: Some(format!("{} – {}", first.year, latest.year)),
        },
        MetricSummary {
            label: "Avg. Compa Ratio".to_string(),
            value: format_percent(average_compa_ratio * Decimal::ONE_HUNDRED),
            helper: Some("Salary ÷ band midpoint".to_string()),
        },
    ]
}

/// Lazily yields the percent change of each entry against the one before it
/// in year order. N entries produce exactly `max(N - 1, 0)` items, ascending
/// by year. Each call returns a fresh, restartable iterator.
///
/// Year gaps are tolerated: the comparison is always against the immediately
/// preceding logged entry, not against `year - 1`.
pub fn calculate_year_over_year(
    entries: &[SalaryEntry],
) -> impl Iterator<Item = YoyChange> + '_ {
    let sorted = sorted_by_year(entries);

    (1..sorted.len()).map(move |i| {
        let previous = sorted[i - 1];
        let current = sorted[i];
        YoyChange {
            year: current.year,
            change: percent_change(previous.salary, current.salary),
        }
    })
}

/// Maps entries to chart-ready points, sorted by year ascending. Band edges
/// pass through unchanged; an absent edge stays `None`.
pub fn normalize_entries_for_chart(entries: &[SalaryEntry]) -> Vec<ChartPoint> {
    sorted_by_year(entries)
        .into_iter()
        .map(|entry| ChartPoint {
            year: entry.year,
            salary: entry.salary,
            min: entry.range_min,
            mid: entry.range_mid,
            max: entry.range_max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn entry(year: i32, salary: Decimal, range_mid: Decimal) -> SalaryEntry {
        SalaryEntry {
            id: Uuid::new_v4(),
            role: format!("Engineer {year}"),
            year,
            salary,
            range_min: None,
            range_mid,
            range_max: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_produces_empty_outputs() {
        let entries: Vec<SalaryEntry> = Vec::new();
        assert!(build_metric_summaries(&entries).is_empty());
        assert_eq!(calculate_year_over_year(&entries).count(), 0);
        assert!(normalize_entries_for_chart(&entries).is_empty());
    }

    #[test]
    fn panel_has_five_summaries_in_fixed_order() {
        let entries = vec![
            entry(2021, dec!(110000), dec!(105000)),
            entry(2020, dec!(100000), dec!(100000)),
            entry(2022, dec!(120000), dec!(110000)),
        ];

        let summaries = build_metric_summaries(&entries);
        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Current Salary",
                "Total Growth",
                "Last YoY Change",
                "Years Tracked",
                "Avg. Compa Ratio",
            ]
        );
    }

    #[test]
    fn two_entry_history_derives_growth_and_compa_ratio() {
        // Scenario: 100k at midpoint in 2020, 110k against a 105k midpoint
        // in 2021.
        let entries = vec![
            entry(2020, dec!(100000), dec!(100000)),
            entry(2021, dec!(110000), dec!(105000)),
        ];

        let summaries = build_metric_summaries(&entries);

        assert_eq!(summaries[0].value, "$110,000");
        assert_eq!(summaries[0].helper.as_deref(), Some("2021 • Engineer 2021"));

        assert_eq!(summaries[1].value, "+10.0%");
        assert_eq!(summaries[1].helper.as_deref(), Some("$100,000 → $110,000"));

        assert_eq!(summaries[2].value, "+10.0%");
        assert_eq!(summaries[2].helper.as_deref(), Some("2020 → 2021"));

        assert_eq!(summaries[3].value, "2");
        assert_eq!(summaries[3].helper.as_deref(), Some("2020 – 2021"));

        // Mean of 1.0 and 110000/105000 is roughly 1.0238.
        assert_eq!(summaries[4].value, "+102.4%");
        assert_eq!(summaries[4].helper.as_deref(), Some("Salary ÷ band midpoint"));
    }

    #[test]
    fn single_entry_reports_zero_yoy_with_na_helper() {
        let entries = vec![entry(2022, dec!(90000), dec!(90000))];

        let summaries = build_metric_summaries(&entries);
        assert_eq!(summaries[2].value, "+0.0%");
        assert_eq!(summaries[2].helper.as_deref(), Some("N/A"));
        assert_eq!(summaries[3].value, "1");
    }

    #[test]
    fn yoy_yields_one_result_per_entry_beyond_the_first() {
        let entries = vec![
            entry(2022, dec!(120000), dec!(110000)),
            entry(2019, dec!(90000), dec!(95000)),
            entry(2020, dec!(100000), dec!(100000)),
        ];

        let changes: Vec<YoyChange> = calculate_year_over_year(&entries).collect();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].year, 2020);
        assert_eq!(changes[1].year, 2022);
        // 90k -> 100k is a gain of one ninth; 100k -> 120k skips 2021 and is
        // still compared against the prior logged entry.
        assert_eq!(changes[0].change.round_dp(1), dec!(11.1));
        assert_eq!(changes[1].change, dec!(20));
    }

    #[test]
    fn yoy_is_restartable_and_idempotent() {
        let entries = vec![
            entry(2020, dec!(100000), dec!(100000)),
            entry(2021, dec!(110000), dec!(105000)),
        ];

        let first: Vec<YoyChange> = calculate_year_over_year(&entries).collect();
        let second: Vec<YoyChange> = calculate_year_over_year(&entries).collect();
        assert_eq!(first, second);

        let panel_a = build_metric_summaries(&entries);
        let panel_b = build_metric_summaries(&entries);
        assert_eq!(panel_a, panel_b);
    }

    #[test]
    fn chart_points_preserve_absent_band_edges() {
        let mut with_band = entry(2021, dec!(110000), dec!(105000));
        with_band.range_min = Some(dec!(95000));
        with_band.range_max = Some(dec!(115000));
        let entries = vec![with_band, entry(2020, dec!(100000), dec!(100000))];

        let points = normalize_entries_for_chart(&entries);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2020);
        assert_eq!(points[0].min, None);
        assert_eq!(points[0].max, None);
        assert_eq!(points[1].min, Some(dec!(95000)));
        assert_eq!(points[1].mid, dec!(105000));
        assert_eq!(points[1].max, Some(dec!(115000)));
    }

    #[test]
    fn year_ties_keep_original_relative_order() {
        let mut a = entry(2020, dec!(100000), dec!(100000));
        a.role = "First".to_string();
        let mut b = entry(2020, dec!(105000), dec!(100000));
        b.role = "Second".to_string();

        let salaries: Vec<Decimal> = normalize_entries_for_chart(&[a, b])
            .into_iter()
            .map(|p| p.salary)
            .collect();
        assert_eq!(salaries, vec![dec!(100000), dec!(105000)]);
    }
}

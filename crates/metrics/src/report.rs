use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cell of the dashboard's summary panel.
///
/// `value` is already display-formatted (currency or signed percent); the
/// optional `helper` line gives context, e.g. the year range behind a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub label: String,
    pub value: String,
    pub helper: Option<String>,
}

/// The percent change of one entry against the chronologically preceding one.
///
/// `year` is the year of the later entry. The comparison is against whatever
/// prior entry exists in sorted order, not necessarily `year - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoyChange {
    pub year: i32,
    pub change: Decimal,
}

/// A chart-ready point: the logged salary plus the target band for that year.
///
/// Missing band edges stay `None`; charts draw no line for an absent series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: i32,
    pub salary: Decimal,
    pub min: Option<Decimal>,
    pub mid: Decimal,
    pub max: Option<Decimal>,
}

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::domain::weather::{RawSample, Units, round_temp, round_to_tenth};

/// Number of calendar days kept (today plus four).
pub const MAX_DAYS: usize = 5;
/// Number of raw slots in the short-horizon chart sequence.
pub const HOURLY_HORIZON: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    /// 12-hour clock label such as `3 PM`.
    pub time_label: String,
    pub temperature: i32,
    pub icon: String,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// e.g. `Fri, Oct 17`
    pub date_label: String,
    pub weekday_label: String,
    /// `None` when no slot in the day carried a finite temperature.
    pub temp_min: Option<i32>,
    pub temp_max: Option<i32>,
    pub icon: String,
    pub description: String,
    pub avg_humidity: i32,
    /// Mean wind speed rounded to one decimal.
    pub avg_wind_speed: f64,
    pub hourly: Vec<HourlyEntry>,
    /// Epoch seconds of the first slot that landed in this day.
    pub bucket_key: i64,
}

impl DailySummary {
    #[must_use]
    pub fn average_temp(&self) -> Option<f64> {
        Some((f64::from(self.temp_max?) + f64::from(self.temp_min?)) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub units: Units,
    pub daily: Vec<DailySummary>,
    pub hourly: Vec<HourlyEntry>,
}

impl ForecastView {
    #[must_use]
    pub fn today(&self) -> Option<&DailySummary> {
        self.daily.first()
    }

    #[must_use]
    pub fn tomorrow(&self) -> Option<&DailySummary> {
        self.daily.get(1)
    }

    /// Days after today shown in the outlook strip (at most three).
    #[must_use]
    pub fn upcoming(&self) -> &[DailySummary] {
        let end = self.daily.len().min(4);
        self.daily.get(1..end).unwrap_or_default()
    }

    /// Chart bounds for the hourly strip, padded by three degrees each side.
    #[must_use]
    pub fn temperature_range(&self) -> Option<(i32, i32)> {
        let min = self.hourly.iter().map(|h| h.temperature).min()?;
        let max = self.hourly.iter().map(|h| h.temperature).max()?;
        Some((min.saturating_sub(3), max.saturating_add(3)))
    }
}

/// Buckets forecast slots into the viewer's local calendar days.
#[must_use]
pub fn aggregate(samples: &[RawSample], units: Units) -> ForecastView {
    aggregate_in(samples, units, &Local)
}

/// Same as [`aggregate`], with calendar days and clock labels taken in `tz`.
#[must_use]
pub fn aggregate_in<Tz: TimeZone>(samples: &[RawSample], units: Units, tz: &Tz) -> ForecastView {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let Some(local) = local_time(sample.dt, tz) else {
            continue;
        };
        let date = local.date();
        let index = match buckets.iter().position(|bucket| bucket.date == date) {
            Some(index) => index,
            None => {
                buckets.push(DayBucket::new(date, local, sample.dt));
                buckets.len() - 1
            }
        };
        buckets[index].push(sample, local);
    }

    let daily = buckets
        .into_iter()
        .take(MAX_DAYS)
        .map(DayBucket::summarize)
        .collect();

    let hourly = samples
        .iter()
        .take(HOURLY_HORIZON)
        .filter_map(|sample| {
            let local = local_time(sample.dt, tz)?;
            Some(hourly_entry(sample, local))
        })
        .collect();

    ForecastView {
        units,
        daily,
        hourly,
    }
}

fn local_time<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|utc| utc.with_timezone(tz).naive_local())
}

fn hourly_entry(sample: &RawSample, local: NaiveDateTime) -> HourlyEntry {
    let primary = sample.primary();
    HourlyEntry {
        time_label: local.format("%-I %p").to_string(),
        temperature: round_temp(sample.main.temp),
        icon: primary.icon,
        description: primary.description,
        humidity: sample.main.humidity,
        wind_speed: sample.wind.speed,
        timestamp: sample.dt,
    }
}

struct DayBucket {
    date: NaiveDate,
    date_label: String,
    weekday_label: String,
    first_dt: i64,
    temps: Vec<f64>,
    icons: Vec<String>,
    descriptions: Vec<String>,
    humidity: Vec<f64>,
    wind: Vec<f64>,
    hourly: Vec<HourlyEntry>,
}

impl DayBucket {
    fn new(date: NaiveDate, local: NaiveDateTime, first_dt: i64) -> Self {
        Self {
            date,
            date_label: local.format("%a, %b %-d").to_string(),
            weekday_label: local.format("%a").to_string(),
            first_dt,
            temps: Vec::new(),
            icons: Vec::new(),
            descriptions: Vec::new(),
            humidity: Vec::new(),
            wind: Vec::new(),
            hourly: Vec::new(),
        }
    }

    fn push(&mut self, sample: &RawSample, local: NaiveDateTime) {
        let entry = hourly_entry(sample, local);
        self.temps.push(sample.main.temp);
        self.icons.push(entry.icon.clone());
        self.descriptions.push(entry.description.clone());
        self.humidity.push(sample.main.humidity);
        self.wind.push(sample.wind.speed);
        self.hourly.push(entry);
    }

    fn summarize(mut self) -> DailySummary {
        // Buckets are created on their first sample, so they are never empty.
        let median = self.icons.len() / 2;
        let finite = || self.temps.iter().copied().filter(|t| t.is_finite());
        let min = finite().reduce(f64::min);
        let max = finite().reduce(f64::max);

        DailySummary {
            date: self.date,
            date_label: self.date_label,
            weekday_label: self.weekday_label,
            temp_min: min.map(round_temp),
            temp_max: max.map(round_temp),
            icon: self.icons.swap_remove(median),
            description: self.descriptions.swap_remove(median),
            avg_humidity: round_temp(mean(&self.humidity)),
            avg_wind_speed: round_to_tenth(mean(&self.wind)),
            hourly: self.hourly,
            bucket_key: self.first_dt,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

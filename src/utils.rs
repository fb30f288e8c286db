// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

pub fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("Missing required argument --{}", name))
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    let s = s.trim();
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_amount(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

pub fn fmt_money(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Advances `date` by `months` calendar months.
///
/// The day of month is kept when the target month is long enough; otherwise
/// the surplus days spill into the following month, so 2024-01-31 plus one
/// month lands on 2024-03-02.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn add_months_keeps_day() {
        assert_eq!(add_months(d(2024, 1, 15), 0), Some(d(2024, 1, 15)));
        assert_eq!(add_months(d(2024, 1, 15), 2), Some(d(2024, 3, 15)));
    }

    #[test]
    fn add_months_crosses_year() {
        assert_eq!(add_months(d(2024, 11, 10), 3), Some(d(2025, 2, 10)));
    }

    #[test]
    fn add_months_rolls_over_short_months() {
        assert_eq!(add_months(d(2024, 1, 31), 1), Some(d(2024, 3, 2)));
        assert_eq!(add_months(d(2023, 1, 31), 1), Some(d(2023, 3, 3)));
        assert_eq!(add_months(d(2024, 3, 31), 1), Some(d(2024, 5, 1)));
    }

    #[test]
    fn parse_month_validates_shape() {
        assert_eq!(parse_month(" 2024-03 ").unwrap(), "2024-03");
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert!(parse_amount("twelve").is_err());
    }
}

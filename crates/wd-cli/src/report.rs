//! Monthly working-day report
//!
//! Collects the billable working days of a month and renders them as plain
//! text, together with the contractual listing in which bank holidays stay
//! in and are marked "(BH)".

use std::fmt;

use tracing::info;
use wd_time::{Date, HolidaySet, MarkedDay, Month, WorkingDaysCalculator};

use crate::Result;

/// The computed figures for one month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Month reported on
    pub month: Month,
    /// Year reported on
    pub year: i32,
    /// Rate per working day
    pub day_rate: f64,
    /// Working days, bank holidays and extra closures removed
    pub working_days: Vec<Date>,
    /// Every weekday of the month, bank holidays flagged
    pub contractual_days: Vec<MarkedDay>,
}

impl MonthlyReport {
    /// Build the report for `month`/`year`.
    pub fn build(
        calc: &WorkingDaysCalculator,
        year: i32,
        month: Month,
        day_rate: f64,
        extra: Option<&HolidaySet>,
    ) -> Result<Self> {
        let start = Date::from_ymd(year, month.number(), 1)?;
        let end = start.end_of_month();
        let working_days = calc.working_days(Some(start), Some(end), extra)?;
        let contractual_days = calc.working_days_in_month_marking_holidays(year, month)?;
        info!(
            year,
            month = month.number(),
            working = working_days.len(),
            contractual = contractual_days.len(),
            "built monthly report"
        );
        Ok(Self {
            month,
            year,
            day_rate,
            working_days,
            contractual_days,
        })
    }

    /// Amount due for the billable working days.
    pub fn total(&self) -> f64 {
        self.day_rate * self.working_days.len() as f64
    }

    /// Text view of the report; `list_days` adds the per-day listings.
    pub fn display<'a>(&'a self, currency: &'a str, list_days: bool) -> ReportText<'a> {
        ReportText {
            report: self,
            currency,
            list_days,
        }
    }
}

/// A [`MonthlyReport`] bound to its output options.
#[derive(Debug, Clone, Copy)]
pub struct ReportText<'a> {
    report: &'a MonthlyReport,
    currency: &'a str,
    list_days: bool,
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        let currency = self.currency;
        writeln!(f, "Working days in {}/{}", r.month.number(), r.year)?;
        writeln!(
            f,
            "{} days @ {currency}{:.2} per day",
            r.working_days.len(),
            r.day_rate
        )?;
        writeln!(f)?;
        writeln!(f, "{}", format_currency(r.total(), currency))?;
        writeln!(f)?;

        if self.list_days {
            for d in &r.working_days {
                writeln!(f, "{}", short_date(*d))?;
            }
            writeln!(f, "Working days (including bank holidays)")?;
            writeln!(f, "{} days", r.contractual_days.len())?;
            for m in &r.contractual_days {
                let marker = if m.is_holiday { " (BH)" } else { "" };
                writeln!(f, "{}{marker}", short_date(m.date))?;
            }
        }
        Ok(())
    }
}

/// `dd/mm/yyyy`
pub fn short_date(d: Date) -> String {
    let (y, m, day) = d.ymd();
    format!("{day:02}/{m:02}/{y:04}")
}

/// Two decimal places with thousands separators, e.g. `£6,551.77`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let pence = (amount * 100.0).round() as i64;
    let sign = if pence < 0 { "-" } else { "" };
    let pence = pence.unsigned_abs();
    let whole = (pence / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{symbol}{grouped}.{:02}", pence % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn december_2018_report() {
        let calc = WorkingDaysCalculator::new();
        let report = MonthlyReport::build(&calc, 2018, Month::December, 344.83, None).unwrap();
        assert_eq!(report.working_days.len(), 19);
        assert_eq!(report.contractual_days.len(), 21);
        assert_relative_eq!(report.total(), 6551.77, max_relative = 1e-12);

        let text = report.display("£", true).to_string();
        assert!(text.starts_with("Working days in 12/2018\n19 days @ £344.83 per day\n"));
        assert!(text.contains("\n£6,551.77\n"));
        assert!(text.contains("\n03/12/2018\n"));
        assert!(text.contains("\n25/12/2018 (BH)\n"));
        assert!(text.contains("\n26/12/2018 (BH)\n"));
        assert!(text.contains("Working days (including bank holidays)\n21 days\n"));
    }

    #[test]
    fn render_without_listing() {
        let calc = WorkingDaysCalculator::new();
        let report = MonthlyReport::build(&calc, 2018, Month::December, 100.0, None).unwrap();
        let text = format!("{}", report.display("$", false));
        assert_eq!(
            text,
            "Working days in 12/2018\n19 days @ $100.00 per day\n\n$1,900.00\n\n"
        );
    }

    #[test]
    fn extra_closures_reduce_billable_days_only() {
        let calc = WorkingDaysCalculator::new();
        let closure: HolidaySet = [Date::from_ymd(2018, 12, 24).unwrap()].into_iter().collect();
        let report =
            MonthlyReport::build(&calc, 2018, Month::December, 344.83, Some(&closure)).unwrap();
        assert_eq!(report.working_days.len(), 18);
        assert_eq!(report.contractual_days.len(), 21);
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0, "£"), "£0.00");
        assert_eq!(format_currency(999.999, "£"), "£1,000.00");
        assert_eq!(format_currency(1234567.5, "£"), "£1,234,567.50");
        assert_eq!(format_currency(-42.1, "£"), "-£42.10");
    }
}

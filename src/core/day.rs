use chrono::{Days, Local, NaiveDate};

/// The day whose rates are requested. The provider has no final rates for today yet.
pub fn yesterday() -> NaiveDate {
    let today = Local::now().date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

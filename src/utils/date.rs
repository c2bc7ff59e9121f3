use chrono::NaiveDate;

/// Key format used for the `date` field of the session log (`10/16/26`).
pub const DATE_KEY_FORMAT: &str = "%m/%d/%y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn date_key(d: NaiveDate) -> String {
    d.format(DATE_KEY_FORMAT).to_string()
}


use anyhow::Context;
use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str =
  "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str =
  "%d.%m.%Y";

pub fn parse_iso_date(
  raw: &str
) -> anyhow::Result<NaiveDate> {
  NaiveDate::parse_from_str(
    raw,
    ISO_DATE_FORMAT
  )
  .with_context(|| {
    format!(
      "invalid calendar date: {raw}"
    )
  })
}

/// `DD.MM.YYYY` rendering of an ISO
/// date. An unparseable date echoes
/// its raw text; the card shows what
/// the dataset holds instead of
/// failing the render.
pub fn format_display_date(
  raw: &str
) -> String {
  match parse_iso_date(raw) {
    | Ok(date) => date
      .format(DISPLAY_DATE_FORMAT)
      .to_string(),
    | Err(_) => raw.to_string()
  }
}

pub fn date_range_display(
  start: &str,
  end: &str
) -> String {
  format!(
    "{} - {}",
    format_display_date(start),
    format_display_date(end)
  )
}

/// True iff the event's end date
/// falls strictly before `today`.
/// Ending today is not past, and an
/// unparseable end date never marks
/// a card as past.
pub fn is_past(
  date_end: &str,
  today: NaiveDate
) -> bool {
  parse_iso_date(date_end)
    .map(|end| end < today)
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    date_range_display,
    format_display_date,
    is_past
  };

  fn day(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn formats_display_date() {
    assert_eq!(
      format_display_date("2026-07-03"),
      "03.07.2026"
    );
  }

  #[test]
  fn unparseable_date_echoes_raw_text()
  {
    assert_eq!(
      format_display_date("kādreiz"),
      "kādreiz"
    );
  }

  #[test]
  fn joins_date_range() {
    assert_eq!(
      date_range_display(
        "2026-07-03",
        "2026-07-10"
      ),
      "03.07.2026 - 10.07.2026"
    );
  }

  #[test]
  fn end_before_today_is_past() {
    assert!(is_past(
      "2026-07-02",
      day(2026, 7, 3)
    ));
  }

  #[test]
  fn end_on_today_is_not_past() {
    assert!(!is_past(
      "2026-07-03",
      day(2026, 7, 3)
    ));
  }

  #[test]
  fn unparseable_end_is_not_past() {
    assert!(!is_past(
      "never",
      day(2026, 7, 3)
    ));
  }
}

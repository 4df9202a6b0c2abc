use crate::group::MonthKey;

/// Fixed Latvian month
/// abbreviations, indexed by
/// month number minus one.
pub const MONTH_ABBREVS: [&str; 12] = [
  "Jan", "Feb", "Mar", "Apr", "Mai",
  "Jūn", "Jūl", "Aug", "Sep", "Okt",
  "Nov", "Dec"
];

pub const NO_EVENTS_NOTICE: &str =
  "Nav plānotu pasākumu";

pub const LOAD_ERROR_NOTICE: &str =
  "Neizdevās ielādēt pasākumu datus";

pub const ACTION_LINK_LABEL: &str =
  "Uzzināt vairāk";

/// Tab caption for a month key,
/// e.g. `2026-07` becomes
/// `Jūl 2026`. A key whose month
/// part does not name a calendar
/// month falls back to the raw key
/// text instead of failing.
pub fn month_label(
  key: &MonthKey
) -> String {
  let Some((year, month)) =
    key.as_str().split_once('-')
  else {
    return key.as_str().to_string();
  };

  let Ok(number) =
    month.parse::<usize>()
  else {
    return key.as_str().to_string();
  };

  match number {
    | 1..=12 => {
      format!(
        "{} {}",
        MONTH_ABBREVS[number - 1],
        year
      )
    }
    | _ => key.as_str().to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::month_label;
  use crate::group::MonthKey;

  #[test]
  fn labels_month_in_latvian() {
    let key = MonthKey::from_start_date(
      "2026-07-03"
    );
    assert_eq!(
      month_label(&key),
      "Jūl 2026"
    );
  }

  #[test]
  fn out_of_range_month_keeps_raw_key()
  {
    let key = MonthKey::from_start_date(
      "2026-13-01"
    );
    assert_eq!(
      month_label(&key),
      "2026-13"
    );
  }

  #[test]
  fn garbage_key_keeps_raw_text() {
    let key =
      MonthKey::from_start_date("soon");
    assert_eq!(
      month_label(&key),
      "soon"
    );
  }
}

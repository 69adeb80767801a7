use chrono::{Days, NaiveDate, NaiveTime};

const FIRST_SLOT: (u32, u32) = (9, 0);
const LAST_SLOT: (u32, u32) = (20, 30);
const SLOT_MINUTES: u32 = 30;

/// `count` consecutive days starting with `today`.
pub fn calendar_days(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// Bookable times, every half hour from 09:00 to 20:30.
pub fn time_slots() -> Vec<String> {
    let first = FIRST_SLOT.0 * 60 + FIRST_SLOT.1;
    let last = LAST_SLOT.0 * 60 + LAST_SLOT.1;
    (first..=last)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .map(|time| time.format("%H:%M").to_string())
        .collect()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_days_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let days = calendar_days(today, 14);
        assert_eq!(days.len(), 14);
        assert_eq!(days[0], today);
        assert_eq!(days[13], NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
    }

    #[test]
    fn half_hour_slots_through_the_evening() {
        let slots = time_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots[1], "09:30");
        assert_eq!(slots.last().map(String::as_str), Some("20:30"));
    }
}

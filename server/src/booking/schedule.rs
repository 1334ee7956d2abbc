/*
 * Copyright (c) 2021 gematik GmbH
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *    http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use resources::{primitives::IsoDate, slot::AvailableDate};

/// Days offered by the date picker, the reference day included.
const BOOKING_HORIZON: i64 = 7;

/// Clinic working-day configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ClinicSchedule {
    /// Weekday on which the clinic is closed.
    pub closed: Weekday,
}

impl Default for ClinicSchedule {
    fn default() -> Self {
        Self {
            closed: Weekday::Sun,
        }
    }
}

/// The next seven calendar days starting at `reference` inclusive, skipping
/// the clinic's closed weekday. Regenerated fresh on every call; a pure
/// function of the reference date and the schedule.
pub fn available_dates(reference: NaiveDate, schedule: &ClinicSchedule) -> Vec<AvailableDate> {
    (0..BOOKING_HORIZON)
        .filter_map(|offset| {
            let date = reference + Duration::days(offset);
            if date.weekday() == schedule.closed {
                return None;
            }

            Some(AvailableDate {
                date: IsoDate::from(date),
                day: date.day(),
                day_name: date.format("%a").to_string().to_uppercase(),
                month: date.format("%b").to_string(),
                is_today: offset == 0,
            })
        })
        .collect()
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn closed_weekday_is_never_offered() {
        // Any run of seven consecutive days contains the closed weekday
        // exactly once, so six dates remain regardless of the reference.
        for offset in 0..7 {
            let reference = NaiveDate::from_ymd(2021, 3, 1) + Duration::days(offset);
            let dates = available_dates(reference, &ClinicSchedule::default());

            assert_eq!(dates.len(), 6);
            assert!(dates
                .iter()
                .all(|entry| entry.date.date().weekday() != Weekday::Sun));
        }
    }

    #[test]
    fn dates_are_chronological_and_start_today() {
        // 2021-03-01 is a Monday.
        let reference = NaiveDate::from_ymd(2021, 3, 1);
        let dates = available_dates(reference, &ClinicSchedule::default());

        assert_eq!(dates[0].date.date(), reference);
        assert!(dates[0].is_today);
        assert!(dates.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn reference_on_the_closed_weekday_has_no_today_entry() {
        // 2021-03-07 is a Sunday.
        let reference = NaiveDate::from_ymd(2021, 3, 7);
        let dates = available_dates(reference, &ClinicSchedule::default());

        assert_eq!(dates.len(), 6);
        assert!(dates.iter().all(|entry| !entry.is_today));
    }

    #[test]
    fn display_fields_follow_the_date() {
        let reference = NaiveDate::from_ymd(2021, 3, 1);
        let dates = available_dates(reference, &ClinicSchedule::default());

        assert_eq!(dates[0].day, 1);
        assert_eq!(dates[0].day_name, "MON");
        assert_eq!(dates[0].month, "Mar");
    }

    #[test]
    fn alternate_closed_weekday_is_respected() {
        let schedule = ClinicSchedule {
            closed: Weekday::Wed,
        };
        let reference = NaiveDate::from_ymd(2021, 3, 1);
        let dates = available_dates(reference, &schedule);

        assert_eq!(dates.len(), 6);
        assert!(dates
            .iter()
            .all(|entry| entry.date.date().weekday() != Weekday::Wed));
    }
}

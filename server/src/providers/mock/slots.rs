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

use std::time::Duration;

use async_trait::async_trait;
use rand::{thread_rng, Rng};
use resources::{misc::DoctorId, primitives::IsoDate, slot::TimeSlot};
use tokio::time::delay_for;

use super::super::{Error, SlotProvider};

const QUERY_LATENCY: Duration = Duration::from_millis(500);

/// Booking count shown for the designated full slot.
const FULL_SLOT_BOOKINGS: u32 = 8;

/// Upper bound (exclusive) of the random booking count on open slots.
const MAX_OPEN_BOOKINGS: u32 = 5;

/// Catalog of slot times spanning the clinic's working hours. Availability
/// is pre-seeded data: the 12:30 slot models a fully booked period.
const CATALOG: &[(&str, &str, bool)] = &[
    ("09:00", "9:00 AM", true),
    ("09:30", "9:30 AM", true),
    ("10:00", "10:00 AM", true),
    ("10:30", "10:30 AM", true),
    ("12:00", "12:00 PM", true),
    ("12:30", "12:30 PM", false),
    ("13:30", "1:30 PM", true),
    ("14:00", "2:00 PM", true),
    ("15:00", "3:00 PM", true),
    ("16:30", "4:30 PM", true),
    ("17:00", "5:00 PM", true),
    ("17:30", "5:30 PM", true),
];

/// In-memory stand-in for the scheduling backend.
pub struct MockSlotProvider {
    latency: Duration,
}

impl MockSlotProvider {
    pub fn new() -> Self {
        Self::with_latency(QUERY_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockSlotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlotProvider for MockSlotProvider {
    async fn list_slots(
        &self,
        _doctor_id: &DoctorId,
        _date: &IsoDate,
    ) -> Result<Vec<TimeSlot>, Error> {
        delay_for(self.latency).await;

        let mut rng = thread_rng();

        let slots = CATALOG
            .iter()
            .map(|(time, label, available)| TimeSlot {
                time: time.parse().unwrap(),
                label: (*label).to_owned(),
                available: *available,
                booking_count: if *available {
                    rng.gen_range(0, MAX_OPEN_BOOKINGS)
                } else {
                    FULL_SLOT_BOOKINGS
                },
            })
            .collect();

        Ok(slots)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    fn args() -> (DoctorId, IsoDate) {
        (
            DoctorId::try_from("dr-somasree-rc").unwrap(),
            "2021-03-01".parse().unwrap(),
        )
    }

    #[actix_rt::test]
    async fn catalog_is_served_for_any_date() {
        let provider = MockSlotProvider::with_latency(Duration::from_millis(0));
        let (doctor_id, date) = args();

        let slots = provider.list_slots(&doctor_id, &date).await.unwrap();

        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0].time.as_str(), "09:00");
        assert_eq!(slots[0].label, "9:00 AM");
    }

    #[actix_rt::test]
    async fn designated_slot_is_full() {
        let provider = MockSlotProvider::with_latency(Duration::from_millis(0));
        let (doctor_id, date) = args();

        let slots = provider.list_slots(&doctor_id, &date).await.unwrap();
        let full = slots
            .iter()
            .find(|slot| slot.time.as_str() == "12:30")
            .unwrap();

        assert!(!full.available);
        assert_eq!(full.booking_count, FULL_SLOT_BOOKINGS);
    }

    #[actix_rt::test]
    async fn open_slots_carry_bounded_booking_counts() {
        let provider = MockSlotProvider::with_latency(Duration::from_millis(0));
        let (doctor_id, date) = args();

        let slots = provider.list_slots(&doctor_id, &date).await.unwrap();

        for slot in slots.iter().filter(|slot| slot.available) {
            assert!(slot.booking_count < MAX_OPEN_BOOKINGS);
        }
    }
}

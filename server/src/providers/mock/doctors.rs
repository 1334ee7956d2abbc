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

use std::convert::TryFrom;
use std::time::Duration;

use async_trait::async_trait;
use resources::{
    doctor::{Contact, Location, Rating, Stats, WorkingHours},
    misc::DoctorId,
    Doctor,
};
use tokio::time::delay_for;

use super::super::{DoctorDirectory, Error};

const PROFILE_LATENCY: Duration = Duration::from_millis(500);

/// In-memory stand-in for the doctor profile backend, preloaded with the
/// clinic's single doctor.
pub struct MockDoctorDirectory {
    latency: Duration,
    profile: Doctor,
}

impl MockDoctorDirectory {
    pub fn new() -> Self {
        Self::with_latency(PROFILE_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            profile: built_in_profile(),
        }
    }
}

impl Default for MockDoctorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorDirectory for MockDoctorDirectory {
    async fn profile(&self, id: &DoctorId) -> Result<Doctor, Error> {
        delay_for(self.latency).await;

        if id == &self.profile.id {
            Ok(self.profile.clone())
        } else {
            Err(Error::NotFound("Doctor not found".into()))
        }
    }
}

fn built_in_profile() -> Doctor {
    Doctor {
        id: DoctorId::try_from("dr-somasree-rc").unwrap(),
        name: "Dr. Somasree R C".into(),
        qualifications: vec![
            "BAMS".into(),
            "CRAV (Sports medicine)".into(),
            "PGDYE".into(),
        ],
        specialization: "Ayurveda Practitioner".into(),
        image: "/doctor-placeholder.jpg".into(),
        is_verified: true,
        rating: Rating {
            stars: 4.5,
            total: 6800,
        },
        stats: Stats {
            patients: "1.2k".into(),
            experience: "8 Years".into(),
            reviews: "1.3k".into(),
        },
        about: "Experienced Ayurveda practitioner specializing in traditional healing \
                methods, sports medicine applications, and yoga therapy. Dedicated to \
                providing holistic healthcare solutions with personalized treatment \
                approaches for optimal wellness."
            .into(),
        education: vec![
            "BAMS - Bachelor of Ayurvedic Medicine and Surgery".into(),
            "CRAV - Certificate in Sports Medicine".into(),
            "PGDYE - Post Graduate Diploma in Yoga Education".into(),
        ],
        location: Location {
            clinic: "Itoozhi Ayurveda".into(),
            address: "Mayyil P O".into(),
            city: "Kannur".into(),
        },
        working_hours: WorkingHours {
            time: "8:00 AM to 6:00 PM".into(),
            days: "Monday - Saturday".into(),
        },
        contact: Contact {
            phone: "+919539581258".into(),
            email: "dr.somasree@doctor-mail.com".into(),
        },
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    #[actix_rt::test]
    async fn known_doctor_is_served() {
        let directory = MockDoctorDirectory::with_latency(Duration::from_millis(0));
        let id = DoctorId::try_from("dr-somasree-rc").unwrap();

        let doctor = directory.profile(&id).await.unwrap();

        assert_eq!(doctor.name, "Dr. Somasree R C");
        assert_eq!(doctor.location.clinic, "Itoozhi Ayurveda");
    }

    #[actix_rt::test]
    async fn unknown_doctor_is_not_found() {
        let directory = MockDoctorDirectory::with_latency(Duration::from_millis(0));
        let id = DoctorId::try_from("dr-unknown").unwrap();

        let err = directory.profile(&id).await.unwrap_err();

        assert_eq!(err.to_string(), "Doctor not found");
    }
}

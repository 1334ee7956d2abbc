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

mod appointments;
mod doctors;
mod patients;
mod slots;

pub use appointments::MockAppointmentBook;
pub use doctors::MockDoctorDirectory;
pub use patients::MockPatientDirectory;
pub use slots::MockSlotProvider;

#[cfg(test)]
pub fn deterministic(register_ok: bool, issue_ok: bool) -> super::Collaborators {
    use std::sync::Arc;
    use std::time::Duration;

    use super::{Collaborators, FixedOutcome};

    let zero = Duration::from_millis(0);

    Collaborators {
        patients: Arc::new(MockPatientDirectory::with_policy(
            Arc::new(FixedOutcome(register_ok)),
            zero,
        )),
        slots: Arc::new(MockSlotProvider::with_latency(zero)),
        tokens: Arc::new(MockAppointmentBook::with_policy(
            Arc::new(FixedOutcome(issue_ok)),
            zero,
        )),
        doctors: Arc::new(MockDoctorDirectory::with_latency(zero)),
    }
}

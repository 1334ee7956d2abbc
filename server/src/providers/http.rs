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

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use resources::{
    misc::{DoctorId, PatientId, TokenNumber},
    patient::{Patient, PatientForm, PatientSubmitted},
    primitives::IsoDate,
    Appointment, Doctor, TimeSlot, TokenIssued, TokenRequest,
};
use serde::Deserialize;

use super::{DoctorDirectory, Error, PatientDirectory, SlotProvider, TokenIssuer};

/// Error body shape shared by all backend endpoints.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Registration backend reached over HTTP.
pub struct HttpPatientDirectory {
    client: Client,
    base: String,
}

pub struct HttpSlotProvider {
    client: Client,
    base: String,
}

pub struct HttpTokenIssuer {
    client: Client,
    base: String,
}

pub struct HttpDoctorDirectory {
    client: Client,
    base: String,
}

impl HttpPatientDirectory {
    pub fn new(client: Client, base: String) -> Self {
        Self { client, base }
    }
}

impl HttpSlotProvider {
    pub fn new(client: Client, base: String) -> Self {
        Self { client, base }
    }
}

impl HttpTokenIssuer {
    pub fn new(client: Client, base: String) -> Self {
        Self { client, base }
    }
}

impl HttpDoctorDirectory {
    pub fn new(client: Client, base: String) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl PatientDirectory for HttpPatientDirectory {
    async fn register(&self, form: &PatientForm) -> Result<Patient, Error> {
        let res = self
            .client
            .post(&format!("{}/patients", self.base))
            .json(form)
            .send()
            .await?;
        let res = into_result(res).await?;
        let body: PatientSubmitted = res.json().await?;

        Ok(body.patient)
    }

    async fn find(&self, id: &PatientId) -> Result<Patient, Error> {
        let res = self
            .client
            .get(&format!("{}/patients/{}", self.base, id))
            .send()
            .await?;
        let res = into_result(res).await?;

        Ok(res.json().await?)
    }
}

#[async_trait]
impl SlotProvider for HttpSlotProvider {
    async fn list_slots(
        &self,
        doctor_id: &DoctorId,
        date: &IsoDate,
    ) -> Result<Vec<TimeSlot>, Error> {
        let date = date.to_string();
        let res = self
            .client
            .get(&format!("{}/appointments/slots", self.base))
            .query(&[("doctorId", doctor_id.as_str()), ("date", date.as_str())])
            .send()
            .await?;
        let res = into_result(res).await?;

        Ok(res.json().await?)
    }
}

#[async_trait]
impl TokenIssuer for HttpTokenIssuer {
    async fn issue(&self, request: &TokenRequest) -> Result<Appointment, Error> {
        let res = self
            .client
            .post(&format!("{}/appointments/token", self.base))
            .json(request)
            .send()
            .await?;
        let res = into_result(res).await?;
        let body: TokenIssued = res.json().await?;

        Ok(body.appointment)
    }

    async fn find(&self, token_number: &TokenNumber) -> Result<Appointment, Error> {
        let res = self
            .client
            .get(&format!("{}/appointments/token/{}", self.base, token_number))
            .send()
            .await?;
        let res = into_result(res).await?;

        Ok(res.json().await?)
    }
}

#[async_trait]
impl DoctorDirectory for HttpDoctorDirectory {
    async fn profile(&self, id: &DoctorId) -> Result<Doctor, Error> {
        let res = self
            .client
            .get(&format!("{}/doctors/{}", self.base, id))
            .send()
            .await?;
        let res = into_result(res).await?;

        Ok(res.json().await?)
    }
}

async fn into_result(res: Response) -> Result<Response, Error> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };

    if status == StatusCode::NOT_FOUND {
        Err(Error::NotFound(message))
    } else {
        Err(Error::Rejected(message))
    }
}

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

use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use log::debug;
use resources::{
    patient::{PatientForm, PatientSubmitted},
    validation::validate_patient_form,
};

use super::super::super::{error::RequestError, state::State};

pub async fn create(
    state: Data<State>,
    form: Json<PatientForm>,
) -> Result<HttpResponse, RequestError> {
    let form = form.into_inner();

    let validation = validate_patient_form(&form);
    if !validation.is_valid() {
        return Err(RequestError::Validation(validation));
    }

    let patient = state
        .collaborators
        .patients
        .register(&form)
        .await
        .map_err(RequestError::registration)?;

    debug!(target: "clinic_booking_server", "Patient created with id: {}", patient.id);

    Ok(HttpResponse::Created().json(PatientSubmitted {
        success: true,
        patient_id: patient.id.clone(),
        message: "Patient information saved successfully!".into(),
        patient,
    }))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use actix_web::{http::StatusCode, test, App};
    use resources::misc::DoctorId;
    use serde_json::Value;

    use crate::{
        providers::mock,
        service::routes::configure_routes,
    };

    fn state(register_ok: bool) -> State {
        State::new(
            mock::deterministic(register_ok, true),
            DoctorId::try_from("dr-somasree-rc").unwrap(),
        )
    }

    #[actix_rt::test]
    async fn valid_form_is_created() {
        let mut app = test::init_service(
            App::new().data(state(true)).configure(configure_routes),
        )
        .await;

        let form = PatientForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "+1 555 123 4567".into(),
            reason: "checkup".into(),
        };
        let req = test::TestRequest::post()
            .uri("/patients")
            .set_json(&form)
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["patient"]["name"], "Jane Doe");
        assert!(body["patientId"].as_str().unwrap().starts_with("PAT-"));
    }

    #[actix_rt::test]
    async fn invalid_form_is_rejected_with_field_errors() {
        // The registry would reject every call; validation must answer
        // before it is reached.
        let mut app = test::init_service(
            App::new().data(state(false)).configure(configure_routes),
        )
        .await;

        let form = PatientForm {
            name: "Jane Doe".into(),
            email: "not-an-email".into(),
            phone: "+1 555 123 4567".into(),
            reason: String::new(),
        };
        let req = test::TestRequest::post()
            .uri("/patients")
            .set_json(&form)
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["errors"]["email"], "Please enter a valid email address");
    }

    #[actix_rt::test]
    async fn rejected_registration_is_service_unavailable() {
        let mut app = test::init_service(
            App::new().data(state(false)).configure(configure_routes),
        )
        .await;

        let form = PatientForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "+1 555 123 4567".into(),
            reason: String::new(),
        };
        let req = test::TestRequest::post()
            .uri("/patients")
            .set_json(&form)
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

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
use resources::{TokenIssued, TokenRequest};

use super::super::super::{error::RequestError, state::State};

pub async fn create(
    state: Data<State>,
    request: Json<TokenRequest>,
) -> Result<HttpResponse, RequestError> {
    let request = request.into_inner();

    let appointment = state
        .collaborators
        .tokens
        .issue(&request)
        .await
        .map_err(RequestError::issuance)?;

    debug!(
        target: "clinic_booking_server",
        "Token issued: {} ({})", appointment.token_number, appointment.id
    );

    Ok(HttpResponse::Created().json(TokenIssued {
        success: true,
        token_number: appointment.token_number.clone(),
        appointment_id: appointment.id.clone(),
        message: "Appointment token generated successfully!".into(),
        appointment,
    }))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use actix_web::{http::StatusCode, test, App};
    use resources::misc::DoctorId;
    use serde_json::Value;

    use crate::{providers::mock, service::routes::configure_routes};

    fn state(issue_ok: bool) -> State {
        State::new(
            mock::deterministic(true, issue_ok),
            DoctorId::try_from("dr-somasree-rc").unwrap(),
        )
    }

    fn request_body() -> Value {
        serde_json::json!({
            "patientId": "PAT-1614592800000",
            "doctorId": "dr-somasree-rc",
            "date": "2021-03-01",
            "time": "09:00",
            "reason": "checkup",
        })
    }

    #[actix_rt::test]
    async fn token_is_issued() {
        let mut app =
            test::init_service(App::new().data(state(true)).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/appointments/token")
            .set_json(&request_body())
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], Value::Bool(true));
        assert!(body["tokenNumber"].as_str().unwrap().starts_with('T'));
        assert!(body["appointmentId"].as_str().unwrap().starts_with("APT-"));

        let wait = body["appointment"]["estimatedWaitTime"].as_u64().unwrap();
        assert!((15..=45).contains(&wait));
    }

    #[actix_rt::test]
    async fn contention_is_a_conflict() {
        let mut app =
            test::init_service(App::new().data(state(false)).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/appointments/token")
            .set_json(&request_body())
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body["message"],
            "Unable to generate token. Time slot may be full."
        );
    }

    #[actix_rt::test]
    async fn malformed_ids_are_rejected() {
        let mut app =
            test::init_service(App::new().data(state(true)).configure(configure_routes)).await;

        let mut body = request_body();
        body["patientId"] = Value::String("nonsense".into());

        let req = test::TestRequest::post()
            .uri("/appointments/token")
            .set_json(&body)
            .to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

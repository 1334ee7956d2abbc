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

use actix_web::{web::Data, HttpResponse};
use chrono::Utc;

use crate::booking::schedule::available_dates;

use super::super::super::{error::RequestError, state::State};

pub async fn get_dates(state: Data<State>) -> Result<HttpResponse, RequestError> {
    let today = Utc::now().naive_utc().date();
    let dates = available_dates(today, &state.schedule);

    Ok(HttpResponse::Ok().json(dates))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use actix_web::{http::StatusCode, test, App};
    use resources::misc::DoctorId;
    use serde_json::Value;

    use crate::{providers::mock, service::routes::configure_routes};

    #[actix_rt::test]
    async fn upcoming_dates_are_served() {
        let state = State::new(
            mock::deterministic(true, true),
            DoctorId::try_from("dr-somasree-rc").unwrap(),
        );
        let mut app =
            test::init_service(App::new().data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/appointments/dates").to_request();
        let res = test::call_service(&mut app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        let dates = body.as_array().unwrap();

        assert_eq!(dates.len(), 6);
        assert!(dates.iter().all(|entry| entry["dayName"] != "SUN"));
    }
}

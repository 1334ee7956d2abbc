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

mod create;
mod dates;
mod get;
mod slots;

use actix_web::web::{self, ServiceConfig};

use create::create;
use dates::get_dates;
use get::get_one;
use slots::get_slots;

pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(web::resource("/appointments/token").route(web::post().to(create)));
    cfg.service(web::resource("/appointments/token/{number}").route(web::get().to(get_one)));
    cfg.service(web::resource("/appointments/slots").route(web::get().to(get_slots)));
    cfg.service(web::resource("/appointments/dates").route(web::get().to(get_dates)));
}

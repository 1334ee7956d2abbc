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

use std::convert::TryInto;
use std::env::var;
use std::path::PathBuf;

use resources::misc::DoctorId;
use structopt::StructOpt;
use tokio::{runtime::Builder, task::LocalSet};

use clinic_booking_server::{
    error::Error,
    logging::init_logger,
    providers::Collaborators,
    service::{Service, State},
};

fn main() -> Result<(), Error> {
    let opts = Options::from_args();

    init_logger(&opts.log_config)?;

    let doctor_id: DoctorId = opts
        .doctor_id
        .clone()
        .try_into()
        .map_err(|id| Error::Generic(format!("Invalid doctor id: {}", id)))?;

    // CLINIC_BACKEND_URL switches from the built-in mock data to a real
    // backend.
    let collaborators = match var("CLINIC_BACKEND_URL") {
        Ok(url) => Collaborators::http(&url)?,
        Err(_) => Collaborators::mock(),
    };

    let mut runtime = Builder::new().threaded_scheduler().enable_all().build()?;
    let local = LocalSet::new();

    let server = Service::new(State::new(collaborators, doctor_id))
        .listen(&opts.server_addr)?
        .run(&local)?;

    local.block_on(&mut runtime, server)?;

    Ok(())
}

#[derive(Clone, StructOpt)]
struct Options {
    #[structopt(short = "c", long = "config", default_value = "./log4rs.yml")]
    log_config: PathBuf,

    #[structopt(short = "l", long = "listen", default_value = "[::]:3000")]
    server_addr: String,

    #[structopt(short = "d", long = "doctor-id", default_value = "dr-somasree-rc")]
    doctor_id: String,
}

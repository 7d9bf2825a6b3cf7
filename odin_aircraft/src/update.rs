/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the (externally defined) JSON shape of aircraft list updates. Members are sparse: the server only
//! sends what changed since the last update, except for a few computed members it always sends.

use serde::Deserialize;

/// one polling response
#[derive(Deserialize,Debug,Default)]
pub struct AircraftListUpdate {
    #[serde(rename="acList", default)]
    pub aircraft: Vec<AircraftUpdate>,

    /// server time of this response in ticks (epoch millis)
    #[serde(rename="stm", default)]
    pub server_ticks: i64,

    /// duration covered by short trails, as configured on the server
    #[serde(rename="shtTrlSec")]
    pub short_trail_seconds: Option<i64>,
}

/// sparse update for a single aircraft
#[derive(Deserialize,Debug,Default,Clone)]
pub struct AircraftUpdate {
    #[serde(rename="Id")]
    pub id: i32,
    #[serde(rename="TSecs", default)]
    pub seconds_tracked: i64,

    #[serde(rename="Rcvr")] pub receiver_id: Option<i32>,
    #[serde(rename="Icao")] pub icao: Option<String>,
    #[serde(rename="Bad")] pub icao_invalid: Option<bool>,
    #[serde(rename="Reg")] pub registration: Option<String>,

    #[serde(rename="Alt")] pub altitude: Option<i32>, // pressure altitude in ft
    #[serde(rename="GAlt")] pub geometric_altitude: Option<i32>,
    #[serde(rename="InHg")] pub air_pressure_in_hg: Option<f64>,
    #[serde(rename="AltT")] pub altitude_type: Option<i32>,
    #[serde(rename="TAlt")] pub target_altitude: Option<i32>,

    #[serde(rename="Call")] pub callsign: Option<String>,
    #[serde(rename="CallSus")] pub callsign_suspect: Option<bool>,

    #[serde(rename="Lat")] pub latitude: Option<f64>,
    #[serde(rename="Long")] pub longitude: Option<f64>,
    #[serde(rename="PosTime")] pub position_time: Option<i64>,
    #[serde(rename="PosStale")] pub position_stale: Option<bool>,
    #[serde(rename="Mlat")] pub is_mlat: Option<bool>,
    #[serde(rename="Tisb")] pub is_tisb: Option<bool>,

    #[serde(rename="Spd")] pub speed: Option<f64>, // knots
    #[serde(rename="SpdTyp")] pub speed_type: Option<i32>,
    #[serde(rename="Vsi")] pub vertical_speed: Option<i32>, // ft/min
    #[serde(rename="VsiT")] pub vertical_speed_type: Option<i32>,
    #[serde(rename="Trak")] pub heading: Option<f64>,
    #[serde(rename="TrkH")] pub heading_is_true: Option<bool>,
    #[serde(rename="TTrk")] pub target_heading: Option<f64>,

    #[serde(rename="Man")] pub manufacturer: Option<String>,
    #[serde(rename="CNum")] pub serial_number: Option<String>,
    #[serde(rename="Year")] pub year_built: Option<String>,
    #[serde(rename="Mdl")] pub model: Option<String>,
    #[serde(rename="Type")] pub model_icao: Option<String>,

    #[serde(rename="From")] pub from: Option<String>, // "code description"
    #[serde(rename="To")] pub to: Option<String>,
    #[serde(rename="Stops")] pub stops: Option<Vec<String>>,

    #[serde(rename="Op")] pub operator: Option<String>,
    #[serde(rename="OpIcao")] pub operator_icao: Option<String>,
    #[serde(rename="Sqk")] pub squawk: Option<String>,
    #[serde(rename="Help")] pub is_emergency: Option<bool>,

    #[serde(rename="Dst")] pub distance_from_here_km: Option<f64>,
    #[serde(rename="Brng")] pub bearing_from_here: Option<f64>,

    #[serde(rename="WTC")] pub wake_turbulence_cat: Option<i32>,
    #[serde(rename="Engines")] pub count_engines: Option<String>,
    #[serde(rename="EngType")] pub engine_type: Option<i32>,
    #[serde(rename="EngMount")] pub engine_placement: Option<i32>,
    #[serde(rename="Species")] pub species: Option<i32>,
    #[serde(rename="Mil")] pub is_military: Option<bool>,
    #[serde(rename="Cou")] pub country: Option<String>,

    #[serde(rename="HasPic")] pub has_picture: Option<bool>,
    #[serde(rename="PicX")] pub picture_width: Option<i32>,
    #[serde(rename="PicY")] pub picture_height: Option<i32>,

    #[serde(rename="FlightsCount")] pub count_flights: Option<i32>,
    #[serde(rename="CMsgs")] pub count_messages: Option<i64>,
    #[serde(rename="Gnd")] pub is_on_ground: Option<bool>,

    #[serde(rename="Notes")] pub user_notes: Option<String>,
    #[serde(rename="Tag")] pub user_tag: Option<String>,
    #[serde(rename="Interested")] pub user_interested: Option<bool>,

    #[serde(rename="HasSig")] pub has_signal_level: Option<bool>,
    #[serde(rename="Sig")] pub signal_level: Option<i32>,
    #[serde(rename="Trt")] pub transponder_type: Option<i32>,

    // trails
    #[serde(rename="TT")] pub trail_type: Option<String>,
    #[serde(rename="Cos")] pub short_trail: Option<Vec<Option<f64>>>,
    #[serde(rename="Cot")] pub full_trail: Option<Vec<Option<f64>>>,
    #[serde(rename="ResetTrail", default)] pub reset_trail: bool,
}

impl AircraftUpdate {
    pub fn new (id: i32)->Self {
        AircraftUpdate { id, ..Default::default() }
    }
}

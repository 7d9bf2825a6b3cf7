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

use std::{fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};

use crate::errors::Result;
use crate::signal::DEFAULT_SIGNAL_HISTORY_WINDOW;
use crate::trail::SHORT_TRAILS_DISABLED;

/// global settings of the aircraft list. Normally loaded from a RON file such as `configs/aircraft_list.ron`.
/// Missing fields get their default values
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct AircraftListConfig {
    pub suppress_trails: bool, // memory saving mode - don't keep any trails
    pub hide_uncertain_callsigns: bool,
    pub signal_history_window: usize, // number of signal levels to average over, 0 disables
    pub short_trail_seconds: Option<i64>, // used if server does not send it. None disables short trails
    pub pictures_enabled: bool,
    pub drop_after: Duration, // duration after which unreported aircraft are removed
}

impl Default for AircraftListConfig {
    fn default()->Self {
        AircraftListConfig {
            suppress_trails: false,
            hide_uncertain_callsigns: false,
            signal_history_window: DEFAULT_SIGNAL_HISTORY_WINDOW,
            short_trail_seconds: Some(30),
            pictures_enabled: true,
            drop_after: Duration::from_secs(60),
        }
    }
}

impl AircraftListConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::de::from_str(s)? )
    }

    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        let data = fs::read( path)?;
        Ok( ron::de::from_bytes( data.as_slice())? )
    }

    /// the tick threshold for short trail points at the given server time. Points with older ticks expire
    pub fn short_trail_tick_threshold (&self, server_ticks: i64, server_short_trail_seconds: Option<i64>)->i64 {
        match self.short_trail_seconds {
            Some(secs) => {
                let secs = server_short_trail_seconds.unwrap_or(secs);
                if secs < 0 { SHORT_TRAILS_DISABLED } else { server_ticks.saturating_sub( secs.saturating_mul(1000)).max(0) }
            }
            None => SHORT_TRAILS_DISABLED
        }
    }
}

/// per update context the aircraft list derives from config and server response
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct UpdateContext {
    pub short_trail_tick_threshold: i64,
    pub pictures_enabled: bool,
}

impl UpdateContext {
    pub fn new (short_trail_tick_threshold: i64, pictures_enabled: bool)->Self {
        UpdateContext { short_trail_tick_threshold, pictures_enabled }
    }
}

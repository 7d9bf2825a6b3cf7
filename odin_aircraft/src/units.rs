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

//! display units the UI can ask aircraft values in. Source values are in the units the server uses
//! (feet, knots, km, inHg, ft/min) and get converted through uom quantities

use serde::{Serialize,Deserialize};
use uom::si::{
    f64::{Length,Velocity,Pressure},
    length::{foot,meter,kilometer,mile,nautical_mile},
    velocity::{knot,kilometer_per_hour,mile_per_hour,foot_per_minute,foot_per_second,meter_per_second},
    pressure::{inch_of_mercury,millibar,millimeter_of_mercury},
};

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum HeightUnit { Feet, Metres }

impl HeightUnit {
    pub fn convert (&self, len: Length)->f64 {
        match self {
            HeightUnit::Feet => len.get::<foot>(),
            HeightUnit::Metres => len.get::<meter>(),
        }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum SpeedUnit { Knots, KilometresPerHour, MilesPerHour }

impl SpeedUnit {
    pub fn convert (&self, spd: Velocity)->f64 {
        match self {
            SpeedUnit::Knots => spd.get::<knot>(),
            SpeedUnit::KilometresPerHour => spd.get::<kilometer_per_hour>(),
            SpeedUnit::MilesPerHour => spd.get::<mile_per_hour>(),
        }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum DistanceUnit { Kilometres, StatuteMiles, NauticalMiles }

impl DistanceUnit {
    pub fn convert (&self, len: Length)->f64 {
        match self {
            DistanceUnit::Kilometres => len.get::<kilometer>(),
            DistanceUnit::StatuteMiles => len.get::<mile>(),
            DistanceUnit::NauticalMiles => len.get::<nautical_mile>(),
        }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum PressureUnit { InHg, Millibars, MmHg }

impl PressureUnit {
    pub fn convert (&self, p: Pressure)->f64 {
        match self {
            PressureUnit::InHg => p.get::<inch_of_mercury>(),
            PressureUnit::Millibars => p.get::<millibar>(),
            PressureUnit::MmHg => p.get::<millimeter_of_mercury>(),
        }
    }
}

/// vertical speeds are shown either per minute or per second, in the selected height unit
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct VerticalSpeedUnit {
    pub height: HeightUnit,
    pub per_second: bool,
}

impl VerticalSpeedUnit {
    pub fn convert (&self, spd: Velocity)->f64 {
        match (self.height, self.per_second) {
            (HeightUnit::Feet, false) => spd.get::<foot_per_minute>(),
            (HeightUnit::Feet, true) => spd.get::<foot_per_second>(),
            (HeightUnit::Metres, false) => spd.get::<meter_per_second>() * 60.0,
            (HeightUnit::Metres, true) => spd.get::<meter_per_second>(),
        }
    }
}

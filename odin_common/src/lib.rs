/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

use serde::{Serialize,Deserialize};
use num::{Num,ToPrimitive};

pub mod angle;
pub mod collections;
pub mod uom;

use angle::{normalize_90, normalize_180};

/// a generic bounding box without semantics for the coordinate type
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + ToPrimitive> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    /// does the box span the antimeridian (i.e. west is numerically east of east)
    pub fn crosses_antimeridian (&self)->bool {
        self.west.to_f64().unwrap_or(0.0) > self.east.to_f64().unwrap_or(0.0)
    }

    /// geographic containment test for boxes in degrees. Longitudes are normalized to [-180..180]
    /// before comparison, and a box with west > east is taken to wrap around the antimeridian
    /// (e.g. west=170, east=-170 covers 170..180 and -180..-170)
    pub fn contains_lon_lat (&self, lon: f64, lat: f64)->bool {
        let (Some(west),Some(south),Some(east),Some(north)) =
            (self.west.to_f64(), self.south.to_f64(), self.east.to_f64(), self.north.to_f64()) else { return false };

        let lat = normalize_90(lat);
        if lat < south || lat > north { return false }

        let lon = normalize_180(lon);
        if west <= east {
            lon >= west && lon <= east
        } else {
            lon >= west || lon <= east
        }
    }
}

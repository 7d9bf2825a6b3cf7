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

//! shorthand constructors for the [uom](https://docs.rs/uom/latest/uom/) quantities we get from
//! aviation data sources, which mostly use non-SI units (feet, knots, inches of mercury..)

use uom::si::{
    f64::{Length,Velocity,Pressure},
    length::{kilometer,foot},
    velocity::{knot,foot_per_minute},
    pressure::inch_of_mercury,
};

#[inline]
pub fn kilometers (len: f64)-> Length { Length::new::<kilometer>(len) }

#[inline]
pub fn feet (len: f64)-> Length { Length::new::<foot>(len) }

#[inline]
pub fn knots (spd: f64)-> Velocity { Velocity::new::<knot>(spd) }

#[inline]
pub fn feet_per_minute (spd: f64)-> Velocity { Velocity::new::<foot_per_minute>(spd) }

#[inline]
pub fn inches_of_mercury (p: f64)-> Pressure { Pressure::new::<inch_of_mercury>(p) }

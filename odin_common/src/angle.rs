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

//! angle normalization and a normalized angle type (degrees) for headings and bearings

use std::{fmt, marker::PhantomData};
use serde::ser::{Serialize, Serializer};

/// reflect into [-90..90]
#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

/// wrap into [-180..180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// wrap into [0..360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

pub trait AngleKind {
    const NAME: &'static str;
    fn normalize(v: f64)->f64;
}

#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    const NAME: &'static str = "Angle360";
    fn normalize(v: f64) -> f64 { normalize_360(v) }
}

#[derive(Copy, Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline] pub fn degrees(&self)->f64 { self.value }
}

impl NormalizedAngle<FullCircleKind> {
    /// the smallest absolute angle between the receiver and `other`, in [0..180]
    pub fn abs_diff (&self, other: &Self)->f64 {
        let d = (self.value - other.value).abs();
        if d > 180.0 { 360.0 - d } else { d }
    }

    /// the reciprocal direction (e.g. 90 -> 270)
    pub fn reciprocal (&self)->Self {
        Self::from_degrees( self.value + 180.0)
    }
}

impl <K> From<NormalizedAngle<K>> for f64 where K: AngleKind {
    fn from(a: NormalizedAngle<K>) -> Self { a.value }
}

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.value) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}({})", K::NAME, self.value) }
}

impl<K> PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { self.value.partial_cmp(&other.value) }
}

pub type Angle360 = NormalizedAngle<FullCircleKind>;

impl<K> Serialize for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.value)
    }
}

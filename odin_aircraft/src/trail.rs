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

//! reconciliation of trail (past position) arrays with the flat coordinate buffers the server sends.
//!
//! Short trails are bounded by a tick threshold: expired points are trimmed from the front each
//! update cycle. Full trails are unbounded but collapse straight-and-level runs into a moving end
//! point so that renderers only have to redraw the trail suffix that actually changed.
//!
//! Both buffer kinds consist of repeating tuples `lat,lng,X[,alt|spd]` where X is the point tick
//! (short trails) or heading (full trails). The optional 4th element depends on the [`TrailType`].
//! Buffers are decoded (and validated) as a whole before any trail is mutated.

use serde::Serialize;
use tracing::trace;

use crate::errors::{OdinAircraftError, Result, malformed_trail};
use crate::tracked::ChangeTrackedArray;

/// tick threshold value that tells the short trail reconciler trails are disabled
pub const SHORT_TRAILS_DISABLED: i64 = -1;

/// what (if anything) is the 4th element of trail tuples
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TrailType {
    Plain,
    Altitude,
    Speed,
}

impl TrailType {
    /// resolve the single char discriminator of update payloads ("a" or "s")
    pub fn from_discriminator (tt: Option<&str>)->Result<Self> {
        match tt {
            None | Some("") => Ok(TrailType::Plain),
            Some("a") => Ok(TrailType::Altitude),
            Some("s") => Ok(TrailType::Speed),
            Some(other) => Err( OdinAircraftError::UnknownTrailType( other.to_string()))
        }
    }

    pub fn tuple_len (&self)->usize {
        if *self == TrailType::Plain { 3 } else { 4 }
    }

    // split the optional 4th tuple element into (altitude,speed)
    fn extra (&self, tuple: &[Option<f64>])->(Option<f64>,Option<f64>) {
        match self {
            TrailType::Plain => (None,None),
            TrailType::Altitude => (tuple[3],None),
            TrailType::Speed => (None,tuple[3]),
        }
    }
}

/// point of a time bounded trail. These are never modified once created
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ShortTrailPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub tick: i64,
    #[serde(skip_serializing_if="Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub speed: Option<f64>,
}

/// point of an unbounded trail. The last point can move if the aircraft keeps flying straight and level,
/// in which case `merged_in_place` is set until the next reconciliation
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FullTrailPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if="Option::is_none")]
    pub heading: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub speed: Option<f64>,
    pub merged_in_place: bool,
}

impl FullTrailPoint {
    pub fn new (latitude: f64, longitude: f64, heading: Option<f64>, altitude: Option<f64>, speed: Option<f64>)->Self {
        FullTrailPoint { latitude, longitude, heading, altitude, speed, merged_in_place: false }
    }

    fn has_same_course (&self, other: &FullTrailPoint)->bool {
        self.heading == other.heading && self.altitude == other.altitude && self.speed == other.speed
    }
}

fn required (field: &'static str, buf: &[Option<f64>], idx: usize)->Result<f64> {
    buf[idx].ok_or( OdinAircraftError::MissingTrailValue { field, index: idx })
}

fn check_len (field: &'static str, buf: &[Option<f64>], trail_type: TrailType)->Result<()> {
    let tuple_len = trail_type.tuple_len();
    if buf.len() % tuple_len != 0 {
        Err( malformed_trail!( field, buf.len(), tuple_len))
    } else {
        Ok(())
    }
}

/// decode a flat `lat,lng,tick[,alt|spd]` buffer
pub fn decode_short_trail (buf: &[Option<f64>], trail_type: TrailType)->Result<Vec<ShortTrailPoint>> {
    const FIELD: &str = "short";
    check_len( FIELD, buf, trail_type)?;

    let tuple_len = trail_type.tuple_len();
    let mut points = Vec::with_capacity( buf.len() / tuple_len);
    for (i,tuple) in buf.chunks_exact(tuple_len).enumerate() {
        let base = i * tuple_len;
        let latitude = required( FIELD, buf, base)?;
        let longitude = required( FIELD, buf, base+1)?;
        let tick = required( FIELD, buf, base+2)? as i64;
        let (altitude,speed) = trail_type.extra(tuple);
        points.push( ShortTrailPoint { latitude, longitude, tick, altitude, speed });
    }
    Ok(points)
}

/// decode a flat `lat,lng,heading[,alt|spd]` buffer. Heading is optional
pub fn decode_full_trail (buf: &[Option<f64>], trail_type: TrailType)->Result<Vec<FullTrailPoint>> {
    const FIELD: &str = "full";
    check_len( FIELD, buf, trail_type)?;

    let tuple_len = trail_type.tuple_len();
    let mut points = Vec::with_capacity( buf.len() / tuple_len);
    for (i,tuple) in buf.chunks_exact(tuple_len).enumerate() {
        let base = i * tuple_len;
        let latitude = required( FIELD, buf, base)?;
        let longitude = required( FIELD, buf, base+1)?;
        let (altitude,speed) = trail_type.extra(tuple);
        points.push( FullTrailPoint::new( latitude, longitude, tuple[2], altitude, speed));
    }
    Ok(points)
}

/// expire short trail points older than `tick_threshold` and append `new_points`.
/// A threshold of [`SHORT_TRAILS_DISABLED`] always empties the trail
pub fn reconcile_short_trail (trail: &mut ChangeTrackedArray<ShortTrailPoint>, new_points: Vec<ShortTrailPoint>,
                              reset: bool, tick_threshold: i64) {
    trail.reset_to_no_change();

    if !trail.is_empty() {
        if reset || tick_threshold == SHORT_TRAILS_DISABLED {
            trail.reset_to_empty();
        } else {
            match trail.items().iter().position( |p| p.tick >= tick_threshold) {
                None => trail.reset_to_empty(),
                Some(0) => {}
                Some(idx) => trail.trim_from_start(idx),
            }
        }
    }

    if !new_points.is_empty() {
        trail.append( new_points);
    }
}

/// merge `new_points` into an unbounded trail.
///
/// A new point that has the same heading, altitude and speed as both the last and the second to last trail
/// points only moves the last point (flagged as `merged_in_place`). Anything else is appended. Only the last
/// two points are compared, i.e. a long straight run keeps moving the same end point.
///
/// If nothing was appended the trail reports no structural change (the moved end point is flagged). Otherwise
/// the changed index is the first appended point, or its predecessor if that was moved in this pass
pub fn reconcile_full_trail (trail: &mut ChangeTrackedArray<FullTrailPoint>, new_points: Vec<FullTrailPoint>, reset: bool) {
    // merge flags only refer to the previous reconciliation
    if let Some(last) = trail.last_mut() {
        last.merged_in_place = false;
    }
    trail.reset_to_no_change();

    if reset {
        trail.clear();
    }

    let original_len = trail.len();

    for p in new_points {
        let len = trail.len();
        let is_straight_and_level = p.heading.is_some() && len >= 2 && {
            let items = trail.items();
            items[len-1].has_same_course(&p) && items[len-2].has_same_course(&p)
        };

        if is_straight_and_level {
            let last = &mut trail.items_mut()[len-1];
            if last.latitude != p.latitude || last.longitude != p.longitude {
                last.latitude = p.latitude;
                last.longitude = p.longitude;
                last.merged_in_place = true;
            }
        } else {
            trail.push(p);
        }
    }

    let len = trail.len();
    if len > original_len {
        let mut first_changed = original_len;
        if first_changed > 0 && trail.items()[first_changed-1].merged_in_place {
            first_changed -= 1;
        }
        for p in &mut trail.items_mut()[first_changed..] {
            p.merged_in_place = false;
        }
        trail.set_changed_from( first_changed);
        trace!("full trail changed from {first_changed} (len {len})");
    }
}

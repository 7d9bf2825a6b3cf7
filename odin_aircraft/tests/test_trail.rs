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
#![allow(unused)]

use odin_aircraft::errors::OdinAircraftError;
use odin_aircraft::tracked::ChangeTrackedArray;
use odin_aircraft::trail::*;

// run with "cargo test test_short -- --nocapture"

fn buf (vs: &[f64])->Vec<Option<f64>> { vs.iter().map( |v| Some(*v)).collect() }

fn short_trail (ticks: &[i64])->ChangeTrackedArray<ShortTrailPoint> {
    let mut trail = ChangeTrackedArray::new();
    trail.append( ticks.iter().map( |t| ShortTrailPoint { latitude: 37.0, longitude: -122.0, tick: *t, altitude: None, speed: None }));
    trail.reset_to_no_change();
    trail
}

fn full_point (lat: f64, lng: f64, hdg: f64, alt: f64, spd: f64)->FullTrailPoint {
    FullTrailPoint::new( lat, lng, Some(hdg), Some(alt), Some(spd))
}

fn full_trail (points: &[FullTrailPoint])->ChangeTrackedArray<FullTrailPoint> {
    let mut trail = ChangeTrackedArray::new();
    trail.append( points.iter().cloned());
    trail.reset_to_no_change();
    trail
}

//--- decoding

#[test]
fn test_trail_type () {
    assert_eq!( TrailType::Plain, TrailType::from_discriminator(None).unwrap());
    assert_eq!( TrailType::Plain, TrailType::from_discriminator(Some("")).unwrap());
    assert_eq!( TrailType::Altitude, TrailType::from_discriminator(Some("a")).unwrap());
    assert_eq!( TrailType::Speed, TrailType::from_discriminator(Some("s")).unwrap());
    assert!( matches!( TrailType::from_discriminator(Some("x")), Err(OdinAircraftError::UnknownTrailType(_))));
}

#[test]
fn test_decode_short () {
    let points = decode_short_trail( &buf(&[1.0,2.0,100.0,5000.0, 3.0,4.0,200.0,5100.0]), TrailType::Altitude).unwrap();
    println!("{points:?}");
    assert_eq!( 2, points.len());
    assert_eq!( 200, points[1].tick);
    assert_eq!( Some(5100.0), points[1].altitude);
    assert_eq!( None, points[1].speed);

    let points = decode_short_trail( &buf(&[1.0,2.0,100.0,250.0]), TrailType::Speed).unwrap();
    assert_eq!( Some(250.0), points[0].speed);
    assert_eq!( None, points[0].altitude);
}

#[test]
fn test_decode_malformed () {
    let res = decode_short_trail( &buf(&[1.0,2.0,100.0,3.0]), TrailType::Plain);
    assert!( matches!( res, Err(OdinAircraftError::MalformedTrail{ len: 4, tuple_len: 3, ..})));

    let res = decode_full_trail( &vec![Some(1.0), None, Some(90.0)], TrailType::Plain);
    assert!( matches!( res, Err(OdinAircraftError::MissingTrailValue{ index: 1, ..})));

    // heading is optional in full trails, tick is not in short trails
    assert!( decode_full_trail( &vec![Some(1.0), Some(2.0), None], TrailType::Plain).is_ok());
    assert!( decode_short_trail( &vec![Some(1.0), Some(2.0), None], TrailType::Plain).is_err());
}

//--- short trails

#[test]
fn test_short_trim () {
    let mut trail = short_trail( &[5,10,15]);
    reconcile_short_trail( &mut trail, Vec::new(), false, 12);

    assert!( trail.changed());
    assert_eq!( 2, trail.trimmed_from_start_count());
    assert_eq!( vec![15], trail.items().iter().map(|p| p.tick).collect::<Vec<i64>>());
}

#[test]
fn test_short_no_trim () {
    let mut trail = short_trail( &[5,10,15]);
    reconcile_short_trail( &mut trail, Vec::new(), false, 5);

    assert!( !trail.changed());
    assert_eq!( 0, trail.trimmed_from_start_count());
    assert_eq!( 3, trail.len());
}

#[test]
fn test_short_all_expired () {
    let mut trail = short_trail( &[5,10,15]);
    reconcile_short_trail( &mut trail, Vec::new(), false, 100);

    assert!( trail.changed());
    assert!( trail.is_empty());
    assert_eq!( 3, trail.trimmed_from_start_count());
    assert_eq!( None, trail.changed_from_index());
}

#[test]
fn test_short_disabled () {
    let mut trail = short_trail( &[5,10,15]);
    reconcile_short_trail( &mut trail, Vec::new(), false, SHORT_TRAILS_DISABLED);
    assert!( trail.is_empty());
    assert_eq!( 3, trail.trimmed_from_start_count());

    // even if all points are young
    let mut trail = short_trail( &[500,1000]);
    reconcile_short_trail( &mut trail, Vec::new(), false, -1);
    assert!( trail.is_empty());
}

#[test]
fn test_short_reset () {
    let mut trail = short_trail( &[50,60]);
    let new_points = decode_short_trail( &buf(&[1.0,2.0,70.0]), TrailType::Plain).unwrap();
    reconcile_short_trail( &mut trail, new_points, true, 10);

    assert!( trail.changed());
    assert_eq!( 2, trail.trimmed_from_start_count());
    assert_eq!( Some(0), trail.changed_from_index());
    assert_eq!( 1, trail.len());
}

#[test]
fn test_short_append () {
    let mut trail: ChangeTrackedArray<ShortTrailPoint> = ChangeTrackedArray::new();
    let new_points = decode_short_trail( &buf(&[1.0,2.0,100.0, 3.0,4.0,200.0]), TrailType::Plain).unwrap();
    reconcile_short_trail( &mut trail, new_points, false, 50);

    assert!( trail.changed());
    assert_eq!( Some(0), trail.changed_from_index());
    assert_eq!( 2, trail.len());
    assert_eq!( (1.0,2.0,100), (trail.items()[0].latitude, trail.items()[0].longitude, trail.items()[0].tick));
    assert_eq!( (3.0,4.0,200), (trail.items()[1].latitude, trail.items()[1].longitude, trail.items()[1].tick));
}

#[test]
fn test_short_trim_and_append () {
    let mut trail = short_trail( &[5,10,15]);
    let new_points = decode_short_trail( &buf(&[1.0,2.0,20.0]), TrailType::Plain).unwrap();
    reconcile_short_trail( &mut trail, new_points, false, 12);

    assert_eq!( 2, trail.trimmed_from_start_count());
    assert_eq!( Some(1), trail.changed_from_index());
    assert_eq!( vec![15,20], trail.items().iter().map(|p| p.tick).collect::<Vec<i64>>());
}

//--- full trails

#[test]
fn test_full_merge () {
    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, vec![ full_point(1.0,3.0, 90.0,1000.0,200.0)], false);

    assert_eq!( 2, trail.len());
    assert_eq!( None, trail.changed_from_index());
    assert!( !trail.changed());
    let last = trail.last().unwrap();
    assert_eq!( (1.0,3.0), (last.latitude,last.longitude));
    assert!( last.merged_in_place);

    // the merge flag only lasts for one reconciliation
    reconcile_full_trail( &mut trail, Vec::new(), false);
    assert!( !trail.last().unwrap().merged_in_place);
}

#[test]
fn test_full_merge_same_position () {
    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, vec![ full_point(1.0,2.0, 90.0,1000.0,200.0)], false);

    assert_eq!( 2, trail.len());
    assert!( !trail.last().unwrap().merged_in_place);
    assert!( !trail.changed());
}

#[test]
fn test_full_no_merge_without_heading () {
    let mut trail = full_trail( &[ FullTrailPoint::new(1.0,1.0,None,None,None), FullTrailPoint::new(1.0,2.0,None,None,None)]);
    reconcile_full_trail( &mut trail, vec![ FullTrailPoint::new(1.0,3.0,None,None,None)], false);

    assert_eq!( 3, trail.len());
    assert_eq!( Some(2), trail.changed_from_index());
}

#[test]
fn test_full_append () {
    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, vec![ full_point(2.0,2.0, 45.0,1000.0,200.0)], false);

    assert!( trail.changed());
    assert_eq!( 3, trail.len());
    assert_eq!( Some(2), trail.changed_from_index());
}

#[test]
fn test_full_merge_then_append () {
    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, vec![
        full_point(1.0,3.0, 90.0,1000.0,200.0), // moves point 1
        full_point(2.0,3.0, 0.0,1000.0,200.0),  // turn -> new point 2
    ], false);

    assert_eq!( 3, trail.len());
    assert!( trail.changed());
    // the moved predecessor of the first new point has to be redrawn too
    assert_eq!( Some(1), trail.changed_from_index());
    assert!( trail.items().iter().all( |p| !p.merged_in_place));
    assert_eq!( (1.0,3.0), (trail.items()[1].latitude, trail.items()[1].longitude));
}

#[test]
fn test_full_collinear_run () {
    // only the last two points are compared, a long straight run keeps moving the same end point
    let mut trail: ChangeTrackedArray<FullTrailPoint> = ChangeTrackedArray::new();
    let run: Vec<FullTrailPoint> = (0..6).map( |i| full_point(1.0, i as f64, 90.0,1000.0,200.0)).collect();
    reconcile_full_trail( &mut trail, run, false);

    println!("{:?}", trail.items());
    assert_eq!( 2, trail.len());
    assert_eq!( 5.0, trail.last().unwrap().longitude);
    assert_eq!( Some(0), trail.changed_from_index());
    assert!( !trail.last().unwrap().merged_in_place);
}

#[test]
fn test_full_reset () {
    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, Vec::new(), true);
    assert!( trail.is_empty());
    assert!( trail.changed());
    assert_eq!( None, trail.changed_from_index());

    let mut trail = full_trail( &[ full_point(1.0,1.0, 90.0,1000.0,200.0), full_point(1.0,2.0, 90.0,1000.0,200.0)]);
    reconcile_full_trail( &mut trail, vec![ full_point(1.0,3.0, 90.0,1000.0,200.0)], true);
    assert_eq!( 1, trail.len()); // no merge after reset - there are no previous points
    assert_eq!( Some(0), trail.changed_from_index());
}

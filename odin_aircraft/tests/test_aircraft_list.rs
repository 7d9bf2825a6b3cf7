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

use std::time::Duration;
use odin_aircraft::*;
use odin_aircraft::errors::OdinAircraftError;
use odin_aircraft::trail::SHORT_TRAILS_DISABLED;

// run with "cargo test test_list -- --nocapture"

const BATCH_1: &str = r#"{
    "stm": 100000, "shtTrlSec": 30,
    "acList": [
        {"Id":1, "TSecs":10, "Icao":"A1B2C3", "Call":"SWA1234", "Lat":37.5, "Long":-122.1, "HasPic":true,
         "Cos":[37.4,-122.0,80000, 37.5,-122.1,95000]},
        {"Id":2, "TSecs":2, "Icao":"D4E5F6", "Alt":3500}
    ]
}"#;

const BATCH_2: &str = r#"{
    "stm": 110000, "shtTrlSec": 30,
    "acList": [
        {"Id":1, "TSecs":20, "Alt":12000}
    ]
}"#;

const BATCH_3: &str = r#"{
    "stm": 126000, "shtTrlSec": 30,
    "acList": [
        {"Id":1, "TSecs":36},
        {"Id":3, "Icao":"AAAAAA"}
    ]
}"#;

fn init_logging () {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level( tracing::Level::DEBUG).try_init();
}

#[test]
fn test_config () {
    let config = AircraftListConfig::from_ron_str( include_str!("../configs/aircraft_list.ron")).unwrap();
    println!("{config:?}");
    assert!( config.hide_uncertain_callsigns);
    assert!( !config.suppress_trails);
    assert_eq!( 6, config.signal_history_window);
    assert_eq!( Some(30), config.short_trail_seconds);
    assert_eq!( Duration::from_secs(60), config.drop_after);

    // missing fields get defaults
    let config = AircraftListConfig::from_ron_str( "AircraftListConfig( short_trail_seconds: None )").unwrap();
    assert_eq!( None, config.short_trail_seconds);
    assert!( config.pictures_enabled);

    assert!( matches!( AircraftListConfig::from_ron_str( "AircraftListConfig( signal_history_window: \"x\" )"),
                       Err(OdinAircraftError::ConfigError(_))));
}

#[test]
fn test_short_trail_threshold () {
    let config = AircraftListConfig::default();
    assert_eq!( 70000, config.short_trail_tick_threshold( 100000, None)); // config default is 30sec
    assert_eq!( 90000, config.short_trail_tick_threshold( 100000, Some(10)));
    assert_eq!( 0, config.short_trail_tick_threshold( 5000, Some(10)));
    assert_eq!( SHORT_TRAILS_DISABLED, config.short_trail_tick_threshold( 100000, Some(-1)));

    let config = AircraftListConfig { short_trail_seconds: None, ..AircraftListConfig::default() };
    assert_eq!( SHORT_TRAILS_DISABLED, config.short_trail_tick_threshold( 100000, Some(30)));
}

#[test]
fn test_list_batches () {
    init_logging();
    let mut list = AircraftList::new( AircraftListConfig::default());
    assert!( list.is_empty());

    let summary = list.apply_json( BATCH_1).unwrap();
    assert_eq!( vec![1,2], summary.added);
    assert_eq!( 0, summary.n_updated);
    assert_eq!( 2, list.len());
    assert_eq!( 100000, list.server_ticks());

    let ac = list.get(1).unwrap();
    println!("{ac}");
    assert_eq!( 2, ac.short_trail.len());
    assert_eq!( 100000, ac.last_seen_ticks());

    let summary = list.apply_json( BATCH_2).unwrap();
    assert!( summary.added.is_empty());
    assert_eq!( 1, summary.n_updated);

    let ac = list.get(1).unwrap();
    assert_eq!( 2, ac.update_counter);
    assert!( ac.altitude.changed());
    assert!( !ac.short_trail.changed()); // threshold 80000 keeps both points
    assert_eq!( 100000, list.get(2).unwrap().last_seen_ticks());

    let summary = list.apply_json( BATCH_3).unwrap();
    assert_eq!( vec![3], summary.added);
    let ac = list.get(1).unwrap();
    assert!( ac.short_trail.is_empty()); // threshold 96000 expires both
    assert_eq!( 2, ac.short_trail.trimmed_from_start_count());
    assert_eq!( 3, list.len());
}

#[test]
fn test_list_remove_stale () {
    let mut list = AircraftList::new( AircraftListConfig::default());
    list.apply_json( BATCH_1).unwrap();
    list.apply_json( BATCH_2).unwrap();

    assert_eq!( 0, list.remove_stale( 160000));
    assert!( list.dropped_list().is_empty());

    assert_eq!( 1, list.remove_stale( 165000));
    assert_eq!( &[2], list.dropped_list());
    assert!( list.get(2).is_none());
    assert_eq!( 1, list.len());

    // dropped aircraft come back as new records
    let summary = list.apply_json( r#"{"stm":170000, "acList":[{"Id":2}]}"#).unwrap();
    assert_eq!( vec![2], summary.added);
    assert_eq!( 1, list.get(2).unwrap().update_counter);
    assert_eq!( None, list.get(2).unwrap().altitude.get());
}

#[test]
fn test_list_thumbnails () {
    let mut list = AircraftList::new( AircraftListConfig::default());
    list.apply_json( BATCH_1).unwrap();

    let requests = list.pending_thumbnail_requests();
    assert_eq!( vec![ ThumbnailRequest{ aircraft_id: 1, icao: "A1B2C3".to_string() }], requests);

    let thumbnails: AirportDataThumbnails = serde_json::from_str(
        r#"{"status":200,"data":[{"image":"https://image.airport-data.com/aircraft/thumbnails/001.jpg","link":"https://www.airport-data.com/aircraft/photo/001.html"}]}"#
    ).unwrap();
    assert!( list.apply_thumbnails( &requests[0], thumbnails));
    assert!( list.pending_thumbnail_requests().is_empty());
    assert!( list.get(1).unwrap().airport_data_thumbnails.changed());

    let gone = ThumbnailRequest{ aircraft_id: 99, icao: "A1B2C3".to_string() };
    assert!( !list.apply_thumbnails( &gone, AirportDataThumbnails::default()));
}

#[test]
fn test_list_errors () {
    let mut list = AircraftList::new( AircraftListConfig::default());

    assert!( matches!( list.apply_json( "{ not json"), Err(OdinAircraftError::JsonError(_))));

    let res = list.apply_json( r#"{"stm":1000, "acList":[{"Id":5, "Cot":[1.0,2.0,90.0,3.0]}]}"#);
    assert!( matches!( res, Err(OdinAircraftError::MalformedTrail{..})));
    assert!( list.get(5).is_none()); // failed updates don't create records
}

#[test]
fn test_list_serialize () {
    let mut list = AircraftList::new( AircraftListConfig::default());
    list.apply_json( BATCH_1).unwrap();

    let json = serde_json::to_value( list.get(1).unwrap()).unwrap();
    println!("{json:#}");
    assert_eq!( "SWA1234", json["callsign"]["value"]);
    assert_eq!( true, json["callsign"]["changed"]);
    assert_eq!( 0, json["shortTrail"]["changedFromIndex"]);
    assert_eq!( -1, json["fullTrail"]["changedFromIndex"]);
    assert_eq!( 95000, json["shortTrail"]["items"][1]["tick"]);
    assert!( json.get("lastSeenTicks").is_none());
}

#[test]
fn test_list_extreme_ticks () {
    let config = AircraftListConfig::default();
    assert_eq!( 0, config.short_trail_tick_threshold( 100000, Some(10_000_000_000_000_000)));
    assert_eq!( 0, config.short_trail_tick_threshold( i64::MIN, Some(i64::MAX)));
    assert_eq!( i64::MAX - 30000, config.short_trail_tick_threshold( i64::MAX, None));

    let mut list = AircraftList::new( config);
    let summary = list.apply_json( r#"{"stm":100000, "shtTrlSec":10000000000000000, "acList":[{"Id":1, "Cos":[37.0,-122.0,90000]}]}"#).unwrap();
    assert_eq!( vec![1], summary.added);
    assert_eq!( 1, list.get(1).unwrap().short_trail.len());

    list.apply_json( r#"{"stm":-9223372036854775807, "acList":[{"Id":2}]}"#).unwrap();
    assert_eq!( 1, list.remove_stale( 100000)); // age of id 2 saturates
    assert_eq!( &[2], list.dropped_list());
    assert_eq!( 1, list.remove_stale( i64::MAX));
    assert!( list.is_empty());
}

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

use std::fmt;
use serde::Serialize;
use tracing::{trace,warn};
use uom::si::f64::{Length,Velocity,Pressure};

use odin_common::{BoundingBox, angle::Angle360, uom::{feet,kilometers,knots,feet_per_minute,inches_of_mercury}};

use crate::config::{AircraftListConfig,UpdateContext};
use crate::errors::Result;
use crate::signal::SignalHistoryTracker;
use crate::thumbnails::{AirportDataThumbnails,ThumbnailLatch,ThumbnailRequest};
use crate::tracked::{ChangeTrackedArray,ChangeTrackedValue};
use crate::trail::{self,FullTrailPoint,ShortTrailPoint,TrailType};
use crate::units::{DistanceUnit,HeightUnit,PressureUnit,SpeedUnit,VerticalSpeedUnit};
use crate::update::AircraftUpdate;

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct Position { pub latitude: f64, pub longitude: f64 }

/// the state of one tracked aircraft. There is exactly one record per aircraft id, which is updated
/// in place by each polling cycle that mentions the aircraft.
///
/// Each field knows if it changed in the last [`AircraftRecord::apply_update`], which is what renderers use
/// to decide what to redraw
#[derive(Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct AircraftRecord {
    pub id: i32,
    pub seconds_tracked: i64,
    pub update_counter: u64,
    #[serde(skip)]
    pub(crate) last_seen_ticks: i64,

    pub receiver_id: ChangeTrackedValue<i32>,
    pub icao: ChangeTrackedValue<String>,
    pub icao_invalid: ChangeTrackedValue<bool>,
    pub registration: ChangeTrackedValue<String>,

    pub altitude: ChangeTrackedValue<i32>,
    pub geometric_altitude: ChangeTrackedValue<i32>,
    pub air_pressure_in_hg: ChangeTrackedValue<f64>,
    pub altitude_type: ChangeTrackedValue<i32>,
    pub target_altitude: ChangeTrackedValue<i32>,

    pub callsign: ChangeTrackedValue<String>,
    pub callsign_suspect: ChangeTrackedValue<bool>,

    pub latitude: ChangeTrackedValue<f64>,
    pub longitude: ChangeTrackedValue<f64>,
    pub position_time: ChangeTrackedValue<i64>,
    pub position_stale: ChangeTrackedValue<bool>,
    pub is_mlat: ChangeTrackedValue<bool>,
    pub is_tisb: ChangeTrackedValue<bool>,

    pub speed: ChangeTrackedValue<f64>,
    pub speed_type: ChangeTrackedValue<i32>,
    pub vertical_speed: ChangeTrackedValue<i32>,
    pub vertical_speed_type: ChangeTrackedValue<i32>,
    pub heading: ChangeTrackedValue<f64>,
    pub heading_is_true: ChangeTrackedValue<bool>,
    pub target_heading: ChangeTrackedValue<f64>,

    pub manufacturer: ChangeTrackedValue<String>,
    pub serial_number: ChangeTrackedValue<String>,
    pub year_built: ChangeTrackedValue<String>,
    pub model: ChangeTrackedValue<String>,
    pub model_icao: ChangeTrackedValue<String>,

    pub from: ChangeTrackedValue<String>,
    pub to: ChangeTrackedValue<String>,
    pub via: ChangeTrackedArray<String>,

    pub operator: ChangeTrackedValue<String>,
    pub operator_icao: ChangeTrackedValue<String>,
    pub squawk: ChangeTrackedValue<String>,
    pub is_emergency: ChangeTrackedValue<bool>,

    pub distance_from_here_km: ChangeTrackedValue<f64>,
    pub bearing_from_here: ChangeTrackedValue<f64>,

    pub wake_turbulence_cat: ChangeTrackedValue<i32>,
    pub count_engines: ChangeTrackedValue<String>,
    pub engine_type: ChangeTrackedValue<i32>,
    pub engine_placement: ChangeTrackedValue<i32>,
    pub species: ChangeTrackedValue<i32>,
    pub is_military: ChangeTrackedValue<bool>,
    pub country: ChangeTrackedValue<String>,

    pub has_picture: ChangeTrackedValue<bool>,
    pub picture_width: ChangeTrackedValue<i32>,
    pub picture_height: ChangeTrackedValue<i32>,

    pub count_flights: ChangeTrackedValue<i32>,
    pub count_messages: ChangeTrackedValue<i64>,
    pub is_on_ground: ChangeTrackedValue<bool>,

    pub user_notes: ChangeTrackedValue<String>,
    pub user_tag: ChangeTrackedValue<String>,
    pub user_interested: ChangeTrackedValue<bool>,

    pub signal_level: ChangeTrackedValue<i32>,
    pub average_signal_level: ChangeTrackedValue<i32>,
    pub transponder_type: ChangeTrackedValue<i32>,

    pub airport_data_thumbnails: ChangeTrackedValue<AirportDataThumbnails>,

    pub short_trail: ChangeTrackedArray<ShortTrailPoint>,
    pub full_trail: ChangeTrackedArray<FullTrailPoint>,

    #[serde(skip)]
    signal_history: SignalHistoryTracker,
    #[serde(skip)]
    thumbnail_latch: ThumbnailLatch,
}

impl AircraftRecord {
    pub fn new (id: i32, signal_history_window: usize)->Self {
        AircraftRecord {
            id,
            seconds_tracked: 0,
            update_counter: 0,
            last_seen_ticks: 0,

            receiver_id: ChangeTrackedValue::new(),
            icao: ChangeTrackedValue::new(),
            icao_invalid: ChangeTrackedValue::new(),
            registration: ChangeTrackedValue::new(),
            altitude: ChangeTrackedValue::new(),
            geometric_altitude: ChangeTrackedValue::new(),
            air_pressure_in_hg: ChangeTrackedValue::new(),
            altitude_type: ChangeTrackedValue::new(),
            target_altitude: ChangeTrackedValue::new(),
            callsign: ChangeTrackedValue::new(),
            callsign_suspect: ChangeTrackedValue::new(),
            latitude: ChangeTrackedValue::new(),
            longitude: ChangeTrackedValue::new(),
            position_time: ChangeTrackedValue::new(),
            position_stale: ChangeTrackedValue::new(),
            is_mlat: ChangeTrackedValue::new(),
            is_tisb: ChangeTrackedValue::new(),
            speed: ChangeTrackedValue::new(),
            speed_type: ChangeTrackedValue::new(),
            vertical_speed: ChangeTrackedValue::new(),
            vertical_speed_type: ChangeTrackedValue::new(),
            heading: ChangeTrackedValue::new(),
            heading_is_true: ChangeTrackedValue::new(),
            target_heading: ChangeTrackedValue::new(),
            manufacturer: ChangeTrackedValue::new(),
            serial_number: ChangeTrackedValue::new(),
            year_built: ChangeTrackedValue::new(),
            model: ChangeTrackedValue::new(),
            model_icao: ChangeTrackedValue::new(),
            from: ChangeTrackedValue::new(),
            to: ChangeTrackedValue::new(),
            via: ChangeTrackedArray::new(),
            operator: ChangeTrackedValue::new(),
            operator_icao: ChangeTrackedValue::new(),
            squawk: ChangeTrackedValue::new(),
            is_emergency: ChangeTrackedValue::new(),
            distance_from_here_km: ChangeTrackedValue::new(),
            bearing_from_here: ChangeTrackedValue::new(),
            wake_turbulence_cat: ChangeTrackedValue::new(),
            count_engines: ChangeTrackedValue::new(),
            engine_type: ChangeTrackedValue::new(),
            engine_placement: ChangeTrackedValue::new(),
            species: ChangeTrackedValue::new(),
            is_military: ChangeTrackedValue::new(),
            country: ChangeTrackedValue::new(),
            has_picture: ChangeTrackedValue::new(),
            picture_width: ChangeTrackedValue::new(),
            picture_height: ChangeTrackedValue::new(),
            count_flights: ChangeTrackedValue::new(),
            count_messages: ChangeTrackedValue::new(),
            is_on_ground: ChangeTrackedValue::new(),
            user_notes: ChangeTrackedValue::new(),
            user_tag: ChangeTrackedValue::new(),
            user_interested: ChangeTrackedValue::new(),
            signal_level: ChangeTrackedValue::new(),
            average_signal_level: ChangeTrackedValue::new(),
            transponder_type: ChangeTrackedValue::new(),
            airport_data_thumbnails: ChangeTrackedValue::new(),
            short_trail: ChangeTrackedArray::new(),
            full_trail: ChangeTrackedArray::new(),

            signal_history: SignalHistoryTracker::new( signal_history_window),
            thumbnail_latch: ThumbnailLatch::default(),
        }
    }

    pub fn last_seen_ticks (&self)->i64 { self.last_seen_ticks }

    /// reconcile the record with a sparse update from the server.
    ///
    /// Trail buffers are decoded before anything is modified, i.e. if this returns an error (which means the server
    /// violated the payload contract) the record is unchanged
    pub fn apply_update (&mut self, u: AircraftUpdate, ctx: &UpdateContext, config: &AircraftListConfig)->Result<()> {
        let trails = if config.suppress_trails {
            None
        } else {
            // the discriminator only matters if there are trail buffers
            if u.short_trail.is_some() || u.full_trail.is_some() {
                let trail_type = TrailType::from_discriminator( u.trail_type.as_deref())?;
                let short = match &u.short_trail { Some(buf) => trail::decode_short_trail( buf, trail_type)?, None => Vec::new() };
                let full = match &u.full_trail { Some(buf) => trail::decode_full_trail( buf, trail_type)?, None => Vec::new() };
                Some((short,full))
            } else {
                Some((Vec::new(),Vec::new()))
            }
        };

        self.id = u.id;
        self.seconds_tracked = u.seconds_tracked;
        self.update_counter += 1;

        self.receiver_id.assign( u.receiver_id);
        self.icao.assign( u.icao);
        self.icao_invalid.assign( u.icao_invalid);
        self.registration.assign( u.registration);

        self.altitude.assign( u.altitude);
        self.geometric_altitude.assign( u.geometric_altitude);
        self.air_pressure_in_hg.assign( u.air_pressure_in_hg);
        self.altitude_type.assign( u.altitude_type);
        self.target_altitude.assign( u.target_altitude);

        self.callsign.assign( u.callsign);
        self.callsign_suspect.assign( u.callsign_suspect);

        self.latitude.assign( u.latitude);
        self.longitude.assign( u.longitude);
        self.position_time.assign( u.position_time);
        self.position_stale.assign_always( u.position_stale);
        self.is_mlat.assign( u.is_mlat);
        self.is_tisb.assign( u.is_tisb);

        self.speed.assign( u.speed);
        self.speed_type.assign( u.speed_type);
        self.vertical_speed.assign( u.vertical_speed);
        self.vertical_speed_type.assign( u.vertical_speed_type);
        self.heading.assign( u.heading);
        self.heading_is_true.assign( u.heading_is_true);
        self.target_heading.assign( u.target_heading);

        self.manufacturer.assign( u.manufacturer);
        self.serial_number.assign( u.serial_number);
        self.year_built.assign( u.year_built);
        self.model.assign( u.model);
        self.model_icao.assign( u.model_icao);

        self.from.assign( u.from);
        self.to.assign( u.to);
        self.via.reset_to_no_change();
        if let Some(stops) = u.stops {
            self.via.replace_wholesale( stops);
        }

        self.operator.assign( u.operator);
        self.operator_icao.assign( u.operator_icao);
        self.squawk.assign( u.squawk);
        self.is_emergency.assign( u.is_emergency);

        self.distance_from_here_km.assign_always( u.distance_from_here_km);
        self.bearing_from_here.assign_always( u.bearing_from_here);

        self.wake_turbulence_cat.assign( u.wake_turbulence_cat);
        self.count_engines.assign( u.count_engines);
        self.engine_type.assign( u.engine_type);
        self.engine_placement.assign( u.engine_placement);
        self.species.assign( u.species);
        self.is_military.assign( u.is_military);
        self.country.assign( u.country);

        self.has_picture.assign( u.has_picture.map( |has_pic| has_pic && ctx.pictures_enabled));
        self.picture_width.assign( u.picture_width);
        self.picture_height.assign( u.picture_height);

        self.count_flights.assign( u.count_flights);
        self.count_messages.assign( u.count_messages);
        self.is_on_ground.assign( u.is_on_ground);

        self.user_notes.assign( u.user_notes);
        self.user_tag.assign( u.user_tag);
        self.user_interested.assign( u.user_interested);

        self.transponder_type.assign( u.transponder_type);

        if u.has_signal_level == Some(true) {
            self.signal_level.assign( u.signal_level);
        } else {
            self.signal_level.clear_changed(); // keep the last level, but the flag is per cycle
        }
        let avg = self.signal_history.record_sample( self.signal_level.get().map( |s| s as f64));
        self.average_signal_level.assign_always( Some(avg));

        if let Some((short,full)) = trails {
            trail::reconcile_short_trail( &mut self.short_trail, short, u.reset_trail, ctx.short_trail_tick_threshold);
            trail::reconcile_full_trail( &mut self.full_trail, full, u.reset_trail);
        }

        if config.hide_uncertain_callsigns && self.callsign_suspect.get() == Some(true) {
            self.callsign.blank();
        }

        if self.thumbnail_latch.advance( self.airport_data_thumbnails.changed()) {
            self.airport_data_thumbnails.clear_changed();
        }

        trace!("updated aircraft {} ({} updates)", self.id, self.update_counter);
        Ok(())
    }

    //--- thumbnails

    /// the token for an asynchronous thumbnail fetch, if we know the ICAO of this aircraft
    pub fn thumbnail_request (&self)->Option<ThumbnailRequest> {
        self.icao.value().map( |icao| ThumbnailRequest { aircraft_id: self.id, icao: icao.clone() })
    }

    /// store the result of a thumbnail fetch that was issued for `for_icao`. Results for another ICAO
    /// (the record was re-used or the fetch is stale) are dropped and false is returned
    pub fn set_airport_data_thumbnails (&mut self, for_icao: &str, thumbnails: AirportDataThumbnails)->bool {
        if self.icao.value().map( |s| s.as_str()) != Some(for_icao) {
            warn!("discarding stale thumbnails for {} (aircraft {} is now {:?})", for_icao, self.id, self.icao.value());
            return false
        }
        self.airport_data_thumbnails.set( thumbnails);
        self.thumbnail_latch = ThumbnailLatch::JustSet;
        true
    }

    //--- position

    pub fn has_position (&self)->bool {
        self.latitude.is_set() && self.longitude.is_set()
    }

    pub fn get_position (&self)->Option<Position> {
        match (self.latitude.get(), self.longitude.get()) {
            (Some(latitude), Some(longitude)) => Some( Position { latitude, longitude }),
            _ => None
        }
    }

    pub fn position_changed (&self)->bool {
        self.latitude.changed() || self.longitude.changed()
    }

    /// bounds are in degrees and can span the antimeridian
    pub fn is_within_bounds (&self, bounds: &BoundingBox<f64>)->bool {
        self.get_position().is_some_and( |p| bounds.contains_lon_lat( p.longitude, p.latitude))
    }

    //--- route

    pub fn has_route (&self)->bool {
        self.from.is_set() || self.to.is_set() || !self.via.is_empty()
    }

    pub fn route_changed (&self)->bool {
        self.from.changed() || self.to.changed() || self.via.changed()
    }

    pub fn get_via_airport_codes (&self)->Vec<String> {
        self.via.items().iter().map( |s| airport_code(s).to_string()).collect()
    }

    /// codes of origin, stops and destination in route order
    pub fn get_airport_codes (&self, distinct_only: bool)->Vec<String> {
        let route = self.from.value().into_iter()
            .chain( self.via.items().iter())
            .chain( self.to.value().into_iter());

        let mut codes: Vec<String> = Vec::new();
        for airport in route {
            let code = airport_code(airport);
            if !code.is_empty() && !(distinct_only && codes.iter().any( |c| c == code)) {
                codes.push( code.to_string());
            }
        }
        codes
    }

    //--- altitude

    /// pressure or geometric altitude (in ft) depending on user preference
    pub fn get_mixed_altitude (&self, use_pressure_altitude: bool)->Option<i32> {
        if use_pressure_altitude { self.altitude.get() } else { self.geometric_altitude.get() }
    }

    pub fn mixed_altitude_changed (&self, use_pressure_altitude: bool)->bool {
        if use_pressure_altitude { self.altitude.changed() } else { self.geometric_altitude.changed() }
    }

    //--- unit conversion

    pub fn altitude_length (&self)->Option<Length> { self.altitude.get().map( |alt| feet(alt as f64)) }
    pub fn geometric_altitude_length (&self)->Option<Length> { self.geometric_altitude.get().map( |alt| feet(alt as f64)) }
    pub fn target_altitude_length (&self)->Option<Length> { self.target_altitude.get().map( |alt| feet(alt as f64)) }
    pub fn ground_speed (&self)->Option<Velocity> { self.speed.get().map( knots) }
    pub fn vertical_rate (&self)->Option<Velocity> { self.vertical_speed.get().map( |vs| feet_per_minute(vs as f64)) }
    pub fn distance_from_here (&self)->Option<Length> { self.distance_from_here_km.get().map( kilometers) }
    pub fn air_pressure (&self)->Option<Pressure> { self.air_pressure_in_hg.get().map( inches_of_mercury) }

    pub fn altitude_in (&self, unit: HeightUnit)->Option<f64> { self.altitude_length().map( |l| unit.convert(l)) }
    pub fn geometric_altitude_in (&self, unit: HeightUnit)->Option<f64> { self.geometric_altitude_length().map( |l| unit.convert(l)) }
    pub fn mixed_altitude_in (&self, use_pressure_altitude: bool, unit: HeightUnit)->Option<f64> {
        self.get_mixed_altitude( use_pressure_altitude).map( |alt| unit.convert( feet(alt as f64)))
    }
    pub fn target_altitude_in (&self, unit: HeightUnit)->Option<f64> { self.target_altitude_length().map( |l| unit.convert(l)) }
    pub fn speed_in (&self, unit: SpeedUnit)->Option<f64> { self.ground_speed().map( |v| unit.convert(v)) }
    pub fn vertical_speed_in (&self, unit: VerticalSpeedUnit)->Option<f64> { self.vertical_rate().map( |v| unit.convert(v)) }
    pub fn distance_from_here_in (&self, unit: DistanceUnit)->Option<f64> { self.distance_from_here().map( |l| unit.convert(l)) }
    pub fn air_pressure_in (&self, unit: PressureUnit)->Option<f64> { self.air_pressure().map( |p| unit.convert(p)) }

    pub fn heading_angle (&self)->Option<Angle360> { self.heading.get().map( Angle360::from_degrees) }
    pub fn bearing_from_here_angle (&self)->Option<Angle360> { self.bearing_from_here.get().map( Angle360::from_degrees) }
}

/// route airports are sent as "code description", e.g. "KSFO San Francisco International"
pub fn airport_code (airport: &str)->&str {
    let airport = airport.trim_start();
    match airport.find(' ') {
        Some(idx) => &airport[..idx],
        None => airport
    }
}

impl fmt::Display for AircraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AircraftRecord( id: {}", self.id)?;
        if let Some(icao) = self.icao.value() { write!( f, ", icao: {icao}")?; }
        if let Some(cs) = self.callsign.value() { write!( f, ", cs: \"{cs}\"")?; }
        if let Some(p) = self.get_position() { write!( f, ", pos: [{:.5},{:.5}]", p.latitude, p.longitude)?; }
        if let Some(alt) = self.altitude.get() { write!( f, ", alt: {alt}")?; }
        if let Some(spd) = self.speed.get() { write!( f, ", spd: {spd:.1}")?; }
        if let Some(hdg) = self.heading.get() { write!( f, ", hdg: {hdg:.0}")?; }
        if !self.short_trail.is_empty() { write!( f, ", n_short: {}", self.short_trail.len())?; }
        if !self.full_trail.is_empty() { write!( f, ", n_full: {}", self.full_trail.len())?; }
        write!( f, ", updates: {})", self.update_counter)
    }
}

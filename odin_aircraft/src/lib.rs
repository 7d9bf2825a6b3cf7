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

//! incremental aircraft state model for browser based aircraft list/map displays.
//!
//! Polling responses of the aircraft list server are sparse: each aircraft entry only contains the members
//! that changed since the previous response. The [`AircraftList`] reconciles these responses with a set of
//! long lived [`AircraftRecord`]s whose fields carry a "changed in last update" flag, and maintains bounded
//! (short) and merged (full) trails for each aircraft so that renderers only redraw what changed.

use std::collections::HashMap;
use tracing::debug;

pub mod errors;
use errors::Result;

pub mod tracked;
pub use tracked::{ChangeTrackedValue,ChangeTrackedArray};

pub mod signal;
pub use signal::SignalHistoryTracker;

pub mod trail;
pub use trail::{ShortTrailPoint,FullTrailPoint,TrailType};

pub mod update;
pub use update::{AircraftUpdate,AircraftListUpdate};

pub mod config;
pub use config::{AircraftListConfig,UpdateContext};

pub mod units;

pub mod thumbnails;
pub use thumbnails::{AirportDataThumbnails,ThumbnailRequest};

pub mod aircraft;
pub use aircraft::{AircraftRecord,Position};

/// what changed in the list by applying a polling response
#[derive(Debug,Default,Clone,PartialEq)]
pub struct BatchSummary {
    pub added: Vec<i32>,
    pub n_updated: usize,
}

/// the set of tracked aircraft, keyed by aircraft id. This is the only place where records are created
/// and dropped, which guarantees there is at most one record per id
pub struct AircraftList {
    config: AircraftListConfig,
    aircraft: HashMap<i32,AircraftRecord>,
    server_ticks: i64, // of the last applied response
    dropped_list: Vec<i32>, // aircraft removed in last remove_stale()
}

impl AircraftList {
    pub fn new (config: AircraftListConfig)->Self {
        AircraftList {
            config,
            aircraft: HashMap::new(),
            server_ticks: 0,
            dropped_list: Vec::new(),
        }
    }

    pub fn config (&self)->&AircraftListConfig { &self.config }
    pub fn server_ticks (&self)->i64 { self.server_ticks }

    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }
    pub fn get (&self, id: i32)->Option<&AircraftRecord> { self.aircraft.get(&id) }
    pub fn iter (&self)->impl Iterator<Item=&AircraftRecord> { self.aircraft.values() }

    pub fn dropped_list (&self)->&[i32] { self.dropped_list.as_slice() }

    pub fn apply_json (&mut self, json: &str)->Result<BatchSummary> {
        let batch: AircraftListUpdate = serde_json::from_str(json)?;
        self.apply_batch( batch)
    }

    /// apply all aircraft updates of a polling response. Unknown ids get new records.
    /// Processing stops at the first update that violates the payload contract
    pub fn apply_batch (&mut self, batch: AircraftListUpdate)->Result<BatchSummary> {
        let threshold = self.config.short_trail_tick_threshold( batch.server_ticks, batch.short_trail_seconds);
        let ctx = UpdateContext::new( threshold, self.config.pictures_enabled);
        let mut summary = BatchSummary::default();

        for u in batch.aircraft {
            let id = u.id;
            match self.aircraft.get_mut(&id) {
                Some(ac) => {
                    ac.apply_update( u, &ctx, &self.config)?;
                    ac.last_seen_ticks = batch.server_ticks;
                    summary.n_updated += 1;
                }
                None => {
                    let mut ac = AircraftRecord::new( id, self.config.signal_history_window);
                    ac.apply_update( u, &ctx, &self.config)?;
                    ac.last_seen_ticks = batch.server_ticks;
                    self.aircraft.insert( id, ac);
                    summary.added.push( id);
                }
            }
        }

        self.server_ticks = batch.server_ticks;
        debug!("applied aircraft list update at {}: {} new, {} updated, {} total",
               self.server_ticks, summary.added.len(), summary.n_updated, self.aircraft.len());
        Ok(summary)
    }

    /// drop all aircraft that have not been reported for the configured `drop_after` duration
    pub fn remove_stale (&mut self, now_ticks: i64)->usize {
        let max_age = i64::try_from( self.config.drop_after.as_millis()).unwrap_or(i64::MAX);

        self.dropped_list.clear();
        for ac in self.aircraft.values() {
            if now_ticks.saturating_sub( ac.last_seen_ticks) > max_age {
                self.dropped_list.push( ac.id);
            }
        }

        for id in &self.dropped_list {
            self.aircraft.remove(id);
        }

        if !self.dropped_list.is_empty() {
            debug!("dropped {} stale aircraft", self.dropped_list.len());
        }
        self.dropped_list.len()
    }

    /// thumbnail requests for aircraft with pictures that don't have thumbnails yet
    pub fn pending_thumbnail_requests (&self)->Vec<ThumbnailRequest> {
        self.aircraft.values()
            .filter( |ac| ac.has_picture.get() == Some(true) && !ac.airport_data_thumbnails.is_set())
            .filter_map( |ac| ac.thumbnail_request())
            .collect()
    }

    /// hand over the result of an asynchronous thumbnail fetch. Returns false if the aircraft is gone
    /// or has a different ICAO than the one the fetch was issued for
    pub fn apply_thumbnails (&mut self, request: &ThumbnailRequest, thumbnails: AirportDataThumbnails)->bool {
        match self.aircraft.get_mut( &request.aircraft_id) {
            Some(ac) => ac.set_airport_data_thumbnails( &request.icao, thumbnails),
            None => {
                debug!("thumbnails for dropped aircraft {} ignored", request.aircraft_id);
                false
            }
        }
    }
}

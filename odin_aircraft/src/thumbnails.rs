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

//! aircraft photo thumbnails are fetched asynchronously by an external service client. Results can
//! arrive between any two update cycles and refer to an aircraft that was dropped or re-identified in
//! the meantime, hence requests carry the ICAO they were issued for

use serde::{Serialize,Deserialize};

/// response of the thumbnail service
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Default)]
pub struct AirportDataThumbnails {
    pub status: i32,
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Vec<AirportDataThumbnail>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Default)]
pub struct AirportDataThumbnail {
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub photographer: String,
}

/// the token a thumbnail fetch is issued with
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ThumbnailRequest {
    pub aircraft_id: i32,
    pub icao: String,
}

/// keeps the thumbnail change flag up for exactly one full update cycle after it was set
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum ThumbnailLatch {
    #[default] Consumed,
    JustSet,
}

impl ThumbnailLatch {
    /// advance the latch at the end of an update cycle. Returns true if the change flag has to be cleared
    pub fn advance (&mut self, flag_set: bool)->bool {
        match (flag_set, *self) {
            (true, ThumbnailLatch::JustSet) => { *self = ThumbnailLatch::Consumed; false }
            (true, ThumbnailLatch::Consumed) => true,
            (false, _) => { *self = ThumbnailLatch::Consumed; false }
        }
    }
}

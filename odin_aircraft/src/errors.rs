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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinAircraftError>;

/// errors of the aircraft state model. Note that absent payload members are never errors - they
/// just mean "unchanged". All trail variants are contract violations of the upstream data source
#[derive(Error,Debug)]
pub enum OdinAircraftError {

    #[error("malformed {field} trail: {len} values is not a multiple of the tuple length {tuple_len}")]
    MalformedTrail { field: &'static str, len: usize, tuple_len: usize },

    #[error("missing required value at index {index} of {field} trail")]
    MissingTrailValue { field: &'static str, index: usize },

    #[error("unknown trail type {0:?}")]
    UnknownTrailType(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! malformed_trail {
    ($field:expr, $len:expr, $tuple_len:expr) => {
        OdinAircraftError::MalformedTrail { field: $field, len: $len, tuple_len: $tuple_len }
    };
}
pub (crate) use malformed_trail;

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

use std::collections::VecDeque;
use odin_common::collections::push_to_ringbuffer;

pub const DEFAULT_SIGNAL_HISTORY_WINDOW: usize = 6;

/// rolling window of the most recent signal levels of an aircraft.
/// A capacity of 0 disables averaging
#[derive(Debug,Clone)]
pub struct SignalHistoryTracker {
    samples: VecDeque<f64>, // used as ringbuffer, oldest at front
    capacity: usize,
}

impl SignalHistoryTracker {
    pub fn new (capacity: usize)->Self {
        SignalHistoryTracker { samples: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn capacity (&self)->usize { self.capacity }
    pub fn len (&self)->usize { self.samples.len() }
    pub fn is_empty (&self)->bool { self.samples.is_empty() }

    /// add a sample and return the floored mean of the current window. A missing
    /// signal level resets the history
    pub fn record_sample (&mut self, signal_level: Option<f64>)->i32 {
        if self.capacity == 0 { return 0 }

        let Some(level) = signal_level else {
            self.samples.clear();
            return 0
        };

        push_to_ringbuffer( &mut self.samples, self.capacity, level);

        let sum: f64 = self.samples.iter().sum();
        (sum / self.samples.len() as f64).floor() as i32
    }
}

impl Default for SignalHistoryTracker {
    fn default()->Self { SignalHistoryTracker::new( DEFAULT_SIGNAL_HISTORY_WINDOW) }
}

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

//! the change tracking primitives of the aircraft model. Each field of an [`crate::AircraftRecord`]
//! is either a [`ChangeTrackedValue`] or a [`ChangeTrackedArray`], which tell renderers what they
//! have to redraw after an update cycle

use serde::{Serialize,Serializer};

/// an optional value plus a flag that tells if it was changed by the most recent update.
/// The flag is not cumulative - each update cycle recomputes it
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct ChangeTrackedValue<T> {
    value: Option<T>,
    changed: bool,
}

impl<T> Default for ChangeTrackedValue<T> {
    fn default()->Self { ChangeTrackedValue { value: None, changed: false } }
}

impl<T> ChangeTrackedValue<T> {
    pub fn new ()->Self { Self::default() }

    pub fn value (&self)->Option<&T> { self.value.as_ref() }
    pub fn changed (&self)->bool { self.changed }
    pub fn is_set (&self)->bool { self.value.is_some() }

    /// assignment for members the server only sends if they changed. An absent value
    /// means "unchanged" and does not touch the current value
    pub fn assign (&mut self, new_value: Option<T>) {
        match new_value {
            Some(v) => {
                self.value = Some(v);
                self.changed = true;
            }
            None => self.changed = false
        }
    }

    /// unconditional write from outside the update cycle (e.g. asynchronously fetched data)
    pub fn set (&mut self, v: T) {
        self.value = Some(v);
        self.changed = true;
    }

    /// drop the value without flagging a change
    pub fn blank (&mut self) {
        self.value = None;
        self.changed = false;
    }

    pub fn clear_changed (&mut self) { self.changed = false; }
}

impl<T: PartialEq> ChangeTrackedValue<T> {
    /// assignment for members the server transmits in every update (e.g. computed distances).
    /// Only a value that differs from the current one counts as change
    pub fn assign_always (&mut self, new_value: Option<T>) {
        match new_value {
            Some(v) => {
                if self.value.as_ref() != Some(&v) {
                    self.value = Some(v);
                    self.changed = true;
                } else {
                    self.changed = false;
                }
            }
            None => self.changed = false
        }
    }
}

impl<T: Copy> ChangeTrackedValue<T> {
    #[inline] pub fn get (&self)->Option<T> { self.value }
}

/// an ordered sequence plus the change metadata renderers need to update incrementally:
/// if it changed at all, the first index of appended elements (`None` if there are none or if the change
/// can't be described as an append) and how many elements were dropped from the front
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ChangeTrackedArray<T> {
    items: Vec<T>,
    changed: bool,
    #[serde(serialize_with="ser_index_or_minus_one")]
    changed_from_index: Option<usize>,
    trimmed_from_start_count: usize,
}

impl<T> Default for ChangeTrackedArray<T> {
    fn default()->Self {
        ChangeTrackedArray { items: Vec::new(), changed: false, changed_from_index: None, trimmed_from_start_count: 0 }
    }
}

impl<T> ChangeTrackedArray<T> {
    pub fn new ()->Self { Self::default() }

    pub fn items (&self)->&[T] { self.items.as_slice() }
    pub fn len (&self)->usize { self.items.len() }
    pub fn is_empty (&self)->bool { self.items.is_empty() }
    pub fn last (&self)->Option<&T> { self.items.last() }

    pub fn changed (&self)->bool { self.changed }
    pub fn changed_from_index (&self)->Option<usize> { self.changed_from_index }
    pub fn trimmed_from_start_count (&self)->usize { self.trimmed_from_start_count }

    pub(crate) fn items_mut (&mut self)->&mut [T] { self.items.as_mut_slice() }
    pub(crate) fn last_mut (&mut self)->Option<&mut T> { self.items.last_mut() }
    pub(crate) fn push (&mut self, item: T) { self.items.push(item) }

    /// start of every reconciliation pass
    pub fn reset_to_no_change (&mut self) {
        self.changed = false;
        self.changed_from_index = None;
        self.trimmed_from_start_count = 0;
    }

    /// drop all items, recording them as trimmed
    pub fn reset_to_empty (&mut self) {
        if !self.items.is_empty() {
            self.trimmed_from_start_count = self.items.len();
            self.items.clear();
            self.changed = true;
            self.changed_from_index = None;
        }
    }

    /// drop all items without trim bookkeeping. Renderers see a change that is not an append
    pub fn clear (&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.changed = true;
            self.changed_from_index = None;
        }
    }

    /// remove up to `count` leading items
    pub fn trim_from_start (&mut self, count: usize) {
        let n = count.min( self.items.len());
        self.items.drain(..n);
        self.trimmed_from_start_count += n;
        self.changed = true;
    }

    /// any change of the whole sequence is a full replacement
    pub fn replace_wholesale (&mut self, new_items: Vec<T>) {
        self.changed_from_index = if new_items.is_empty() { None } else { Some(0) };
        self.items = new_items;
        self.changed = true;
    }

    /// add new items at the end, recording the index of the first one
    pub fn append<I> (&mut self, new_items: I) where I: IntoIterator<Item=T> {
        let start = self.items.len();
        self.items.extend( new_items);
        if self.items.len() > start {
            self.set_changed_from( start);
        }
    }

    pub(crate) fn set_changed_from (&mut self, idx: usize) {
        self.changed = true;
        self.changed_from_index = Some(idx);
    }
}

// the JS side uses -1 for "no append index"
fn ser_index_or_minus_one<S: Serializer> (idx: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match idx {
        Some(i) => s.serialize_i64( *i as i64),
        None => s.serialize_i64(-1)
    }
}

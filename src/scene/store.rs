//! Shared per-scene geometry storage.
//!
//! All raw geometry lives in flat `Vec<f32>` channels owned by the scene,
//! one contiguous slice per object, so a rendering driver can upload each
//! channel as a single buffer and address objects by offset/length. The
//! bounding box deriver reads the vertex channel the same way.

use std::collections::HashMap;
use std::ops::Range;

/// The geometry channels a registered object may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Vertex,
    Normal,
    Texcoord,
    Color,
}

#[derive(Debug, Default)]
pub struct GeometryStore {
    vertices: Vec<f32>,
    normals: Vec<f32>,
    texcoords: Vec<f32>,
    colors: Vec<f32>,
    ranges: HashMap<(Channel, String), Range<usize>>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `data` to the channel and records the object's range.
    pub(crate) fn append(&mut self, channel: Channel, name: &str, data: &[f32]) -> Range<usize> {
        let buffer = self.buffer_mut(channel);
        let start = buffer.len();
        buffer.extend_from_slice(data);
        let range = start..start + data.len();
        self.ranges
            .insert((channel, name.to_string()), range.clone());
        range
    }

    pub(crate) fn remove(&mut self, name: &str) {
        // Ranges of other objects stay valid: the flat data is left in
        // place and only the lookup entries go away.
        for channel in [Channel::Vertex, Channel::Normal, Channel::Texcoord, Channel::Color] {
            self.ranges.remove(&(channel, name.to_string()));
        }
    }

    /// Offset and length of an object's slice of a channel, in floats.
    pub fn offset_and_length(&self, channel: Channel, name: &str) -> Option<(usize, usize)> {
        self.ranges
            .get(&(channel, name.to_string()))
            .map(|r| (r.start, r.end - r.start))
    }

    pub fn slice(&self, channel: Channel, name: &str) -> Option<&[f32]> {
        let range = self.ranges.get(&(channel, name.to_string()))?;
        Some(&self.buffer(channel)[range.clone()])
    }

    /// The whole flat channel, for bulk upload by a rendering driver.
    pub fn channel_data(&self, channel: Channel) -> &[f32] {
        self.buffer(channel)
    }

    fn buffer(&self, channel: Channel) -> &Vec<f32> {
        match channel {
            Channel::Vertex => &self.vertices,
            Channel::Normal => &self.normals,
            Channel::Texcoord => &self.texcoords,
            Channel::Color => &self.colors,
        }
    }

    fn buffer_mut(&mut self, channel: Channel) -> &mut Vec<f32> {
        match channel {
            Channel::Vertex => &mut self.vertices,
            Channel::Normal => &mut self.normals,
            Channel::Texcoord => &mut self.texcoords,
            Channel::Color => &mut self.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_records_contiguous_ranges() {
        let mut store = GeometryStore::new();
        store.append(Channel::Vertex, "a", &[1.0, 2.0, 3.0]);
        store.append(Channel::Vertex, "b", &[4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        assert_eq!(store.offset_and_length(Channel::Vertex, "a"), Some((0, 3)));
        assert_eq!(store.offset_and_length(Channel::Vertex, "b"), Some((3, 6)));
        assert_eq!(store.slice(Channel::Vertex, "b").unwrap()[0], 4.0);
        assert_eq!(store.channel_data(Channel::Vertex).len(), 9);
    }

    #[test]
    fn channels_are_independent() {
        let mut store = GeometryStore::new();
        store.append(Channel::Vertex, "a", &[1.0, 2.0, 3.0]);
        store.append(Channel::Normal, "a", &[0.0, 1.0, 0.0]);
        assert_eq!(store.offset_and_length(Channel::Normal, "a"), Some((0, 3)));
        assert_eq!(store.offset_and_length(Channel::Texcoord, "a"), None);
    }

    #[test]
    fn remove_drops_lookups_but_not_other_ranges() {
        let mut store = GeometryStore::new();
        store.append(Channel::Vertex, "a", &[1.0, 2.0, 3.0]);
        store.append(Channel::Vertex, "b", &[4.0, 5.0, 6.0]);
        store.remove("a");
        assert_eq!(store.offset_and_length(Channel::Vertex, "a"), None);
        assert_eq!(store.offset_and_length(Channel::Vertex, "b"), Some((3, 3)));
    }
}

use std::borrow::Borrow;

use rustc_hash::FxHashMap;

/// Station name bytes copied out of the read buffer.
///
/// Names are compared and hashed by raw content, so lookups can use the
/// `&[u8]` slice of the current block without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(Box<[u8]>);

impl StationName {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for StationName {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for StationName {
    fn from(source: &[u8]) -> Self {
        Self(source.into())
    }
}

impl From<StationName> for String {
    fn from(val: StationName) -> Self {
        match String::from_utf8(val.0.into_vec()) {
            Ok(name) => name,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

/// Running statistics of one station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationEntry {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Default for StationEntry {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl StationEntry {
    pub fn add(&mut self, measurement: f64) {
        self.count += 1;
        self.min = self.min.min(measurement);
        self.max = self.max.max(measurement);
        self.sum += measurement;
    }

    /// NaN for an entry that has not seen a measurement yet.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Station name to running statistics.
#[derive(Debug, Default)]
pub struct Summary {
    stations: FxHashMap<StationName, StationEntry>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stations: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds one measurement to the entry of `station_name`, creating it on
    /// first sight. The name is copied only when the entry is created.
    pub fn fold(&mut self, station_name: &[u8], measurement: f64) {
        match self.stations.get_mut(station_name) {
            Some(entry) => entry.add(measurement),
            None => {
                let mut entry = StationEntry::default();
                entry.add(measurement);
                self.stations.insert(station_name.into(), entry);
            }
        }
    }

    pub fn get(&self, station_name: &[u8]) -> Option<&StationEntry> {
        self.stations.get(station_name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationName, &StationEntry)> {
        self.stations.iter()
    }

    /// Decodes the names and sorts by their text.
    pub fn into_sorted(self) -> Vec<(String, StationEntry)> {
        let mut summary: Vec<(String, StationEntry)> = self
            .stations
            .into_iter()
            .map(|(station_name, entry)| (station_name.into(), entry))
            .collect();
        summary.sort_unstable_by(|m1, m2| m1.0.cmp(&m2.0));
        summary
    }
}

//! Fare policy and transfer counting.

use crate::domain::{Line, LineMap};

/// Fare policy: bands by stations traveled plus a per-transfer surcharge.
///
/// The defaults carry the live policy table. Amounts are currency-agnostic
/// integers; the fare for a path does not depend on which metric found it.
#[derive(Debug, Clone)]
pub struct FareSchedule {
    /// Fare for trips of at most 2 stations.
    pub short_fare: u32,

    /// Fare for trips of 3 to 5 stations.
    pub medium_fare: u32,

    /// Fare for trips of 6 to 10 stations.
    pub long_fare: u32,

    /// Fare for trips of more than 10 stations.
    pub extended_fare: u32,

    /// Flat surcharge added per line transfer.
    pub transfer_surcharge: u32,
}

impl FareSchedule {
    /// Create a schedule with the given band fares and surcharge.
    pub fn new(
        short_fare: u32,
        medium_fare: u32,
        long_fare: u32,
        extended_fare: u32,
        transfer_surcharge: u32,
    ) -> Self {
        Self {
            short_fare,
            medium_fare,
            long_fare,
            extended_fare,
            transfer_surcharge,
        }
    }

    /// The base fare for a trip of `stations` stations (edges traversed).
    pub fn base_fare(&self, stations: u32) -> u32 {
        match stations {
            0..=2 => self.short_fare,
            3..=5 => self.medium_fare,
            6..=10 => self.long_fare,
            _ => self.extended_fare,
        }
    }

    /// The total fare: banded base plus per-transfer surcharge.
    pub fn fare(&self, stations: u32, transfers: u32) -> u32 {
        self.base_fare(stations) + transfers * self.transfer_surcharge
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            short_fare: 10,
            medium_fare: 15,
            long_fare: 20,
            extended_fare: 25,
            transfer_surcharge: 5,
        }
    }
}

/// Count line transfers along a path.
///
/// Walks the path tracking the current line; each station whose line
/// differs from the current one counts as a line change. The first line
/// entry at the source is not a transfer, so the result is the change
/// count minus one, floored at zero. A station with no resolvable line is
/// skipped without triggering a comparison.
pub fn count_transfers(path: &[String], lines: &LineMap) -> u32 {
    let mut changes: u32 = 0;
    let mut current: Option<Line> = None;

    for station in path {
        if let Some(line) = lines.get(station) {
            if current != Some(line) {
                changes += 1;
                current = Some(line);
            }
        }
    }

    changes.saturating_sub(1)
}

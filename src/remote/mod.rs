//! Remote counter boundary: the status document mirrored from the
//! realtime database.

mod listener;

pub use listener::{CounterListener, CounterStream, ListenerError};

use serde::Deserialize;

/// The three-field counter record mirrored from the remote status document.
///
/// Replaced wholesale on every remote update; nothing on the client
/// mutates the counts independently of the remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct CounterSnapshot {
    /// Vehicles that entered, cumulative
    #[serde(default)]
    pub entries: u64,

    /// Vehicles that exited, cumulative
    #[serde(default)]
    pub exits: u64,

    /// Vehicles currently inside
    #[serde(default)]
    pub inside: u64,
}

impl CounterSnapshot {
    /// Share of entered vehicles still inside, for the occupancy gauge.
    /// Derived at render time, never stored.
    pub fn occupancy_ratio(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        (self.inside as f64 / self.entries as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_ratio() {
        let snap = CounterSnapshot {
            entries: 8,
            exits: 6,
            inside: 2,
        };
        assert!((snap.occupancy_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_occupancy_ratio_no_entries() {
        assert_eq!(CounterSnapshot::default().occupancy_ratio(), 0.0);
    }

    #[test]
    fn test_occupancy_ratio_clamped() {
        // The remote source owns consistency; a snapshot claiming more
        // inside than entered must not overflow the gauge.
        let snap = CounterSnapshot {
            entries: 2,
            exits: 0,
            inside: 5,
        };
        assert_eq!(snap.occupancy_ratio(), 1.0);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let snap: CounterSnapshot = serde_json::from_str(r#"{"entries": 7}"#).unwrap();
        assert_eq!(snap.entries, 7);
        assert_eq!(snap.exits, 0);
        assert_eq!(snap.inside, 0);
    }
}

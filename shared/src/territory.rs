use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type TerritoryMap = HashMap<String, TerritoryProfile>;

/// A territory as resolved by the host's lookup layer. The engine only ever
/// compares profiles for equality; the display name shown to the player is
/// resolved separately and may differ from the internal `name` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritoryProfile {
    pub name: String,
    pub location: Region,
}

/// Axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub start: [i32; 2],
    pub end: [i32; 2],
}

impl Region {
    pub const fn left(&self) -> i32 {
        if self.start[0] < self.end[0] {
            self.start[0]
        } else {
            self.end[0]
        }
    }

    pub const fn right(&self) -> i32 {
        if self.start[0] > self.end[0] {
            self.start[0]
        } else {
            self.end[0]
        }
    }

    pub const fn top(&self) -> i32 {
        if self.start[1] < self.end[1] {
            self.start[1]
        } else {
            self.end[1]
        }
    }

    pub const fn bottom(&self) -> i32 {
        if self.start[1] > self.end[1] {
            self.start[1]
        } else {
            self.end[1]
        }
    }

    /// Whether a world X/Z coordinate falls inside this region (inclusive).
    pub fn contains(&self, wx: f64, wz: f64) -> bool {
        let ix = wx as i32;
        let iz = wz as i32;
        ix >= self.left() && ix <= self.right() && iz >= self.top() && iz <= self.bottom()
    }
}

/// Find the territory containing a world X/Z coordinate, if any.
///
/// Linear scan over the map — territory checks run at most a few times per
/// second, so no spatial index is warranted. When regions overlap, which of
/// the overlapping territories wins is unspecified.
pub fn find_territory_at(territories: &TerritoryMap, wx: f64, wz: f64) -> Option<&TerritoryProfile> {
    territories.values().find(|t| t.location.contains(wx, wz))
}

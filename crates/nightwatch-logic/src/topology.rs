//! Static map of the pizzeria - locations, camera feeds, agent paths.
//!
//! Everything here is fixed at compile time. Lookups are exhaustive
//! `match`es over `&'static` slices, so nothing is allocated per tick and
//! there is no "unknown" viewpoint or agent kind to fall back on.
//!
//! # Location classes
//!
//! | Class | Locations | Cooldown (s) |
//! |-------|-----------|--------------|
//! | Spawn | Stage, Backstage, Supply Closet | 15–25 |
//! | Intermediate | Dining Area, Kitchen, Bathroom, Storage Room | 12–20 |
//! | Approach | Left Hallway, Right Hallway | 8–15 |
//! | Vent | Left Vent, Right Vent | 5–10 |
//! | Terminal | Office | 10–18 |
//!
//! ```
//! use nightwatch_logic::topology::{AgentKind, DoorSide, Location};
//!
//! let path = AgentKind::Foxy.path();
//! assert_eq!(path.first(), Some(&Location::Backstage));
//! assert_eq!(path.last(), Some(&Location::Office));
//! assert_eq!(AgentKind::Foxy.guarding_door(), Some(DoorSide::Left));
//! assert_eq!(AgentKind::GoldenFreddy.guarding_door(), None);
//! ```

use serde::{Deserialize, Serialize};

/// The player's defended position. Reaching it ends the encounter.
pub const TERMINAL: Location = Location::Office;

/// One of the twelve named areas of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Stage,
    Backstage,
    SupplyCloset,
    DiningArea,
    Kitchen,
    Bathroom,
    StorageRoom,
    LeftHallway,
    RightHallway,
    LeftVent,
    RightVent,
    Office,
}

/// Coarse grouping of locations by distance from the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationClass {
    Spawn,
    Intermediate,
    Approach,
    Vent,
    Terminal,
}

impl Location {
    pub const ALL: [Location; 12] = [
        Location::Stage,
        Location::Backstage,
        Location::SupplyCloset,
        Location::DiningArea,
        Location::Kitchen,
        Location::Bathroom,
        Location::StorageRoom,
        Location::LeftHallway,
        Location::RightHallway,
        Location::LeftVent,
        Location::RightVent,
        Location::Office,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::Stage => "Stage",
            Location::Backstage => "Backstage",
            Location::SupplyCloset => "Supply Closet",
            Location::DiningArea => "Dining Area",
            Location::Kitchen => "Kitchen",
            Location::Bathroom => "Bathroom",
            Location::StorageRoom => "Storage Room",
            Location::LeftHallway => "Left Hallway",
            Location::RightHallway => "Right Hallway",
            Location::LeftVent => "Left Vent",
            Location::RightVent => "Right Vent",
            Location::Office => "Office",
        }
    }

    pub fn class(self) -> LocationClass {
        match self {
            Location::Stage | Location::Backstage | Location::SupplyCloset => LocationClass::Spawn,
            Location::DiningArea | Location::Kitchen | Location::Bathroom | Location::StorageRoom => {
                LocationClass::Intermediate
            }
            Location::LeftHallway | Location::RightHallway => LocationClass::Approach,
            Location::LeftVent | Location::RightVent => LocationClass::Vent,
            Location::Office => LocationClass::Terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == TERMINAL
    }

    /// The camera feed that shares this location's name. The office has none.
    pub fn viewpoint(self) -> Option<Viewpoint> {
        Viewpoint::ALL.into_iter().find(|v| v.location() == self)
    }
}

/// One of the eleven camera feeds. Every non-terminal location has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewpoint {
    Stage,
    Backstage,
    SupplyCloset,
    DiningArea,
    Kitchen,
    Bathroom,
    StorageRoom,
    LeftHallway,
    RightHallway,
    LeftVent,
    RightVent,
}

impl Viewpoint {
    pub const ALL: [Viewpoint; 11] = [
        Viewpoint::Stage,
        Viewpoint::Backstage,
        Viewpoint::SupplyCloset,
        Viewpoint::DiningArea,
        Viewpoint::Kitchen,
        Viewpoint::Bathroom,
        Viewpoint::StorageRoom,
        Viewpoint::LeftHallway,
        Viewpoint::RightHallway,
        Viewpoint::LeftVent,
        Viewpoint::RightVent,
    ];

    /// The location this feed is mounted in.
    pub fn location(self) -> Location {
        match self {
            Viewpoint::Stage => Location::Stage,
            Viewpoint::Backstage => Location::Backstage,
            Viewpoint::SupplyCloset => Location::SupplyCloset,
            Viewpoint::DiningArea => Location::DiningArea,
            Viewpoint::Kitchen => Location::Kitchen,
            Viewpoint::Bathroom => Location::Bathroom,
            Viewpoint::StorageRoom => Location::StorageRoom,
            Viewpoint::LeftHallway => Location::LeftHallway,
            Viewpoint::RightHallway => Location::RightHallway,
            Viewpoint::LeftVent => Location::LeftVent,
            Viewpoint::RightVent => Location::RightVent,
        }
    }

    pub fn name(self) -> &'static str {
        self.location().name()
    }

    /// Locations visible from this feed in addition to its own.
    pub fn adjacent(self) -> &'static [Location] {
        use Location::*;
        match self {
            Viewpoint::Stage => &[Backstage, DiningArea],
            Viewpoint::Backstage => &[Stage, SupplyCloset],
            Viewpoint::SupplyCloset => &[Backstage, Bathroom],
            Viewpoint::DiningArea => &[Stage, Kitchen, StorageRoom],
            Viewpoint::Kitchen => &[DiningArea, RightHallway],
            Viewpoint::Bathroom => &[SupplyCloset, StorageRoom],
            Viewpoint::StorageRoom => &[DiningArea, Bathroom, LeftHallway, RightHallway],
            Viewpoint::LeftHallway => &[StorageRoom, LeftVent, Office],
            Viewpoint::RightHallway => &[StorageRoom, Kitchen, Office],
            Viewpoint::LeftVent => &[LeftHallway, Office],
            Viewpoint::RightVent => &[Office],
        }
    }

    /// Whether `location` shows up on this feed at all.
    pub fn sees(self, location: Location) -> bool {
        self.location() == location || self.adjacent().contains(&location)
    }
}

/// What the player is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    /// Looking at the office itself. No feed is live.
    #[default]
    Office,
    Camera(Viewpoint),
}

/// Order used when the player cycles through views with a single key.
const CYCLE_ORDER: [View; 12] = [
    View::Office,
    View::Camera(Viewpoint::Stage),
    View::Camera(Viewpoint::DiningArea),
    View::Camera(Viewpoint::Kitchen),
    View::Camera(Viewpoint::Backstage),
    View::Camera(Viewpoint::LeftHallway),
    View::Camera(Viewpoint::RightHallway),
    View::Camera(Viewpoint::SupplyCloset),
    View::Camera(Viewpoint::Bathroom),
    View::Camera(Viewpoint::StorageRoom),
    View::Camera(Viewpoint::LeftVent),
    View::Camera(Viewpoint::RightVent),
];

impl View {
    /// Next view in the cycle, wrapping back to the office.
    pub fn cycle(self) -> View {
        let idx = CYCLE_ORDER.iter().position(|v| *v == self).unwrap_or(0);
        CYCLE_ORDER[(idx + 1) % CYCLE_ORDER.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Office => "Office",
            View::Camera(v) => v.name(),
        }
    }
}

/// Which office door an agent has to pass on its final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorSide {
    Left,
    Right,
}

/// The five agents roaming the building at night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentKind {
    Freddy,
    Bonnie,
    Chica,
    Foxy,
    GoldenFreddy,
}

impl AgentKind {
    /// Roster order. The scheduler iterates agents in this order.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Freddy,
        AgentKind::Bonnie,
        AgentKind::Chica,
        AgentKind::Foxy,
        AgentKind::GoldenFreddy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Freddy => "Freddy",
            AgentKind::Bonnie => "Bonnie",
            AgentKind::Chica => "Chica",
            AgentKind::Foxy => "Foxy",
            AgentKind::GoldenFreddy => "Golden Freddy",
        }
    }

    /// Fixed route from spawn to the office. The index into this slice is
    /// the agent's danger level.
    pub fn path(self) -> &'static [Location] {
        use Location::*;
        match self {
            AgentKind::Freddy => &[Stage, DiningArea, StorageRoom, LeftHallway, LeftVent, Office],
            AgentKind::Bonnie => &[Stage, DiningArea, Kitchen, RightHallway, Office],
            AgentKind::Chica => &[Stage, DiningArea, Kitchen, RightHallway, Office],
            AgentKind::Foxy => &[Backstage, SupplyCloset, StorageRoom, LeftHallway, Office],
            AgentKind::GoldenFreddy => &[SupplyCloset, Bathroom, StorageRoom, RightVent, Office],
        }
    }

    pub fn spawn(self) -> Location {
        self.path()[0]
    }

    /// Door that can stop this agent's final step. `None` means no door
    /// holds it back.
    pub fn guarding_door(self) -> Option<DoorSide> {
        match self {
            AgentKind::Freddy | AgentKind::Foxy => Some(DoorSide::Left),
            AgentKind::Bonnie | AgentKind::Chica => Some(DoorSide::Right),
            AgentKind::GoldenFreddy => None,
        }
    }
}

/// Position of `location` on `kind`'s path, if it is on it at all.
pub fn path_index(kind: AgentKind, location: Location) -> Option<usize> {
    kind.path().iter().position(|l| *l == location)
}

/// Danger level for display: path index, or 0 for an off-path location.
pub fn danger_level(kind: AgentKind, location: Location) -> usize {
    path_index(kind, location).unwrap_or(0)
}

/// Whether a step into `next` is refused by a closed door.
///
/// Only steps into the terminal location can be blocked.
pub fn is_blocked(kind: AgentKind, next: Location, left_door_closed: bool, right_door_closed: bool) -> bool {
    if !next.is_terminal() {
        return false;
    }
    match kind.guarding_door() {
        Some(DoorSide::Left) => left_door_closed,
        Some(DoorSide::Right) => right_door_closed,
        None => false,
    }
}

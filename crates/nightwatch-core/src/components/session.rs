//! Office controls and view, passed by reference into every tick.

use nightwatch_logic::power::Loads;
use nightwatch_logic::topology::{DoorSide, View};
use serde::{Deserialize, Serialize};

/// Everything the player controls from the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub night: u32,
    pub left_door_closed: bool,
    pub right_door_closed: bool,
    pub left_light_on: bool,
    pub right_light_on: bool,
    pub vent_active: bool,
    pub view: View,
}

impl SessionState {
    /// Fresh office for `night`: doors open, lights off, looking at the office.
    pub fn new(night: u32) -> Self {
        Self {
            night,
            left_door_closed: false,
            right_door_closed: false,
            left_light_on: false,
            right_light_on: false,
            vent_active: false,
            view: View::Office,
        }
    }

    pub fn door_closed(&self, side: DoorSide) -> bool {
        match side {
            DoorSide::Left => self.left_door_closed,
            DoorSide::Right => self.right_door_closed,
        }
    }

    pub fn toggle_door(&mut self, side: DoorSide) -> bool {
        let door = match side {
            DoorSide::Left => &mut self.left_door_closed,
            DoorSide::Right => &mut self.right_door_closed,
        };
        *door = !*door;
        *door
    }

    pub fn toggle_light(&mut self, side: DoorSide) -> bool {
        let light = match side {
            DoorSide::Left => &mut self.left_light_on,
            DoorSide::Right => &mut self.right_light_on,
        };
        *light = !*light;
        *light
    }

    /// Current draw on the power reserve.
    pub fn loads(&self) -> Loads {
        Loads {
            doors_closed: self.left_door_closed as u8 + self.right_door_closed as u8,
            lights_on: self.left_light_on as u8 + self.right_light_on as u8,
            vent_active: self.vent_active,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(1)
    }
}

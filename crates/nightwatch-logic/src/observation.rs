//! Pure observation check - is an agent visible on the active view?
//!
//! An agent is observed when the player is on a camera feed that either
//! sits in the agent's location or has it in its adjacency set. The office
//! view has no feed, so nothing is ever observed from it.
//!
//! ```
//! use nightwatch_logic::observation::is_observed;
//! use nightwatch_logic::topology::{Location, View, Viewpoint};
//!
//! assert!(is_observed(Location::Kitchen, View::Camera(Viewpoint::DiningArea)));
//! assert!(!is_observed(Location::Kitchen, View::Office));
//! ```

use crate::topology::{Location, View};

/// Whether an agent at `location` shows up on `view`.
pub fn is_observed(location: Location, view: View) -> bool {
    match view {
        View::Office => false,
        View::Camera(vp) => vp.sees(location),
    }
}

/// All locations currently visible on `view`, own location first.
pub fn visible_locations(view: View) -> Vec<Location> {
    match view {
        View::Office => Vec::new(),
        View::Camera(vp) => {
            let mut out = Vec::with_capacity(vp.adjacent().len() + 1);
            out.push(vp.location());
            out.extend_from_slice(vp.adjacent());
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Viewpoint;

    #[test]
    fn office_view_sees_nothing() {
        for loc in Location::ALL {
            assert!(!is_observed(loc, View::Office));
        }
        assert!(visible_locations(View::Office).is_empty());
    }

    #[test]
    fn same_named_feed_observes() {
        for vp in Viewpoint::ALL {
            assert!(is_observed(vp.location(), View::Camera(vp)));
        }
    }

    #[test]
    fn adjacency_observes() {
        let view = View::Camera(Viewpoint::StorageRoom);
        assert!(is_observed(Location::LeftHallway, view));
        assert!(is_observed(Location::RightHallway, view));
        assert!(!is_observed(Location::Stage, view));
    }

    #[test]
    fn visible_locations_matches_is_observed() {
        for vp in Viewpoint::ALL {
            let view = View::Camera(vp);
            let visible = visible_locations(view);
            for loc in Location::ALL {
                assert_eq!(visible.contains(&loc), is_observed(loc, view));
            }
        }
    }
}

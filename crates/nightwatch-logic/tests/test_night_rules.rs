//! Integration tests for the rules that shape a night.
//!
//! Exercises: topology → roster → observation → difficulty → power → clock
//! → scoring, the way a session strings them together.
//!
//! All tests are pure logic: no RNG, no agents, no session state.

use nightwatch_logic::clock::{ClockConfig, NightClock};
use nightwatch_logic::config::{validate_config, TuningConfig};
use nightwatch_logic::difficulty::{is_kind_active_on, movement_chance, FINAL_NIGHT};
use nightwatch_logic::observation::{is_observed, visible_locations};
use nightwatch_logic::power::{drain_rate, seconds_remaining, Loads, PowerConfig, PowerState, PowerStatus};
use nightwatch_logic::roster::roster;
use nightwatch_logic::scoring::{survival_bonus, SessionStats};
use nightwatch_logic::topology::{
    danger_level, is_blocked, path_index, AgentKind, Location, LocationClass, View, Viewpoint,
};

// ── Topology ───────────────────────────────────────────────────────────

#[test]
fn every_path_stop_before_office_is_on_camera() {
    for kind in AgentKind::ALL {
        let path = kind.path();
        for loc in &path[..path.len() - 1] {
            let Some(vp) = loc.viewpoint() else {
                panic!("{}: {} has no feed", kind.name(), loc.name());
            };
            assert!(is_observed(*loc, View::Camera(vp)));
        }
    }
}

#[test]
fn every_non_terminal_location_has_one_feed() {
    for loc in Location::ALL {
        let feeds = Viewpoint::ALL.iter().filter(|v| v.location() == loc).count();
        let expected = usize::from(!loc.is_terminal());
        assert_eq!(feeds, expected, "{}", loc.name());
    }
}

#[test]
fn danger_level_climbs_toward_office() {
    for kind in AgentKind::ALL {
        let path = kind.path();
        for (i, loc) in path.iter().enumerate() {
            assert_eq!(path_index(kind, *loc), Some(i));
            assert_eq!(danger_level(kind, *loc), i);
        }
    }
    // Off-path locations read as zero danger
    assert_eq!(danger_level(AgentKind::Bonnie, Location::Bathroom), 0);
    assert_eq!(path_index(AgentKind::Bonnie, Location::Bathroom), None);
}

#[test]
fn doors_only_guard_the_final_step() {
    for kind in AgentKind::ALL {
        for loc in Location::ALL {
            if loc.is_terminal() {
                continue;
            }
            assert!(!is_blocked(kind, loc, true, true));
        }
    }
    assert!(is_blocked(AgentKind::Freddy, Location::Office, true, false));
    assert!(!is_blocked(AgentKind::Freddy, Location::Office, false, true));
    assert!(is_blocked(AgentKind::Chica, Location::Office, false, true));
    assert!(!is_blocked(AgentKind::GoldenFreddy, Location::Office, true, true));
}

#[test]
fn vents_sit_one_step_from_office() {
    for kind in AgentKind::ALL {
        let path = kind.path();
        for (i, loc) in path.iter().enumerate() {
            if loc.class() == LocationClass::Vent {
                assert!(path[i + 1].is_terminal(), "{}", kind.name());
            }
        }
    }
}

// ── Observation ────────────────────────────────────────────────────────

#[test]
fn storage_room_feed_covers_both_hallways() {
    let view = View::Camera(Viewpoint::StorageRoom);
    let visible = visible_locations(view);
    assert!(visible.contains(&Location::LeftHallway));
    assert!(visible.contains(&Location::RightHallway));
    assert!(!is_observed(Location::Office, view));
}

#[test]
fn cycling_views_visits_every_feed() {
    let mut view = View::Office;
    let mut seen = Vec::new();
    loop {
        view = view.cycle();
        if view == View::Office {
            break;
        }
        seen.push(view);
    }
    assert_eq!(seen.len(), Viewpoint::ALL.len());
}

// ── Difficulty ─────────────────────────────────────────────────────────

#[test]
fn week_gets_harder_each_night() {
    let mut last = 0.0;
    for night in 1..=FINAL_NIGHT {
        let chance = movement_chance(night);
        assert!(chance > last, "night {} did not get harder", night);
        last = chance;
    }
    let active_on_final = AgentKind::ALL
        .iter()
        .filter(|k| is_kind_active_on(**k, FINAL_NIGHT))
        .count();
    assert_eq!(active_on_final, roster().len());
}

// ── Power, clock and scoring ───────────────────────────────────────────

#[test]
fn idle_power_outlasts_the_night() {
    let power = PowerConfig::default();
    let clock = ClockConfig::default();
    let idle = seconds_remaining(power.capacity, &power, &Loads::default());
    assert!(idle > clock.night_length() as f32, "{idle}s of power");

    // Holding both doors shut all night is not affordable
    let sealed = Loads {
        doors_closed: 2,
        lights_on: 0,
        vent_active: false,
    };
    let sealed_secs = seconds_remaining(power.capacity, &power, &sealed);
    assert!(sealed_secs < clock.night_length() as f32, "{sealed_secs}s sealed");
}

#[test]
fn idle_default_night_reaches_dawn() {
    let power_config = PowerConfig::default();
    let clock_config = ClockConfig::default();
    let loads = Loads::default();
    assert!((drain_rate(&power_config, &loads) - 0.3).abs() < 1e-6);

    let mut power = PowerState::new(&power_config);
    let mut clock = NightClock::new();
    let mut stats = SessionStats::default();
    let mut dawn = false;
    for _ in 0..1_000 {
        if clock.advance(&clock_config, 1.0) {
            dawn = true;
            break;
        }
        assert_ne!(power.update(&power_config, &loads, 1.0), PowerStatus::Out);
    }
    assert!(dawn);
    assert_eq!(clock.display(&clock_config), "06:00 AM");
    // 539 seconds of idle drain leaves roughly 38 units
    assert!(power.level > 30.0 && power.level < 45.0, "{}", power.level);

    let bonus = survival_bonus(
        power.level,
        clock.hours_elapsed(&clock_config),
        clock_config.hours_per_night,
        2,
    );
    stats.record_survival(bonus, clock.survived_minutes(&clock_config));
    assert_eq!(stats.nights_survived, 1);
    assert_eq!(stats.best_survival_minutes, 360);
    assert!(stats.total_score > 500, "{}", stats.total_score);
}

#[test]
fn shipped_tuning_is_valid() {
    assert!(validate_config(&TuningConfig::default()).is_empty());
}

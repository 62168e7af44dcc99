//! NightWatch Headless Simulation Harness
//!
//! Validates the tuning data and the rules, then plays scripted nights with a
//! simple door-guarding policy. Runs entirely in-process: no window, no
//! input, no audio.
//!
//! Usage:
//!   cargo run -p nightwatch-simtest
//!   cargo run -p nightwatch-simtest -- --verbose --seed 7 --nights 5

use env_logger::Env;
use nightwatch_core::prelude::*;
use nightwatch_core::systems::{can_move, step, update_watch_status};
use nightwatch_logic::config::{validate_config, TuningConfig};
use nightwatch_logic::difficulty::FINAL_NIGHT;
use nightwatch_logic::observation::is_observed;
use nightwatch_logic::topology::{AgentKind, DoorSide, Location, View, Viewpoint};
use rand::rngs::mock::StepRng;

// ── Tuning data (the same JSON a front end ships) ───────────────────────
const TUNING_JSON: &str = include_str!("../../../data/tuning.json");

/// Frames per second for scripted nights.
const FRAME_RATE: f64 = 30.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    seed: u64,
    nights: u32,
}

fn parse_options() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let value_after = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .and_then(|v| v.parse::<u64>().ok())
    };
    Options {
        verbose: args.iter().any(|a| a == "--verbose"),
        seed: value_after("--seed").unwrap_or(42),
        nights: value_after("--nights")
            .map(|n| (n as u32).clamp(1, FINAL_NIGHT))
            .unwrap_or(FINAL_NIGHT),
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let options = parse_options();
    println!("=== NightWatch Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Tuning data validation
    let (config, tuning_results) = validate_tuning_data(options.verbose);
    results.extend(tuning_results);

    // 2. Map & paths
    results.extend(validate_topology(options.verbose));

    // 3. Movement chance curve
    results.extend(validate_difficulty_curve(&config, options.verbose));

    // 4. Observation & hysteresis
    results.extend(validate_observation(&config, options.verbose));

    // 5. Door blocks & retreat
    results.extend(validate_door_blocks(&config, options.verbose));

    // 6. Attempt rate across nights
    results.extend(validate_attempt_rate(&config, options.seed, options.verbose));

    // 7. Save/load
    results.extend(validate_persistence(&config, options.seed, options.verbose));

    // 8. Scripted nights
    results.extend(play_scripted_nights(&config, &options));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Tuning Data ──────────────────────────────────────────────────────

fn validate_tuning_data(verbose: bool) -> (TuningConfig, Vec<TestResult>) {
    println!("--- Tuning Data ---");
    let mut results = Vec::new();

    let config: TuningConfig = match serde_json::from_str(TUNING_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "tuning_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return (TuningConfig::default(), results);
        }
    };

    let errors = validate_config(&config);
    results.push(TestResult {
        name: "tuning_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "no validation errors".into()
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    results.push(TestResult {
        name: "tuning_matches_defaults".into(),
        passed: config == TuningConfig::default(),
        detail: "shipped JSON agrees with compiled-in defaults".into(),
    });

    if verbose {
        println!(
            "  base chance {:.3}, scaling {:.2}, cap {:.3}, hysteresis {:.1}s",
            config.difficulty.base_chance,
            config.difficulty.night_scaling,
            config.difficulty.max_chance,
            config.watch.hysteresis_secs
        );
    }

    (config, results)
}

// ── 2. Topology ─────────────────────────────────────────────────────────

fn validate_topology(verbose: bool) -> Vec<TestResult> {
    println!("--- Map & Paths ---");
    let mut results = Vec::new();

    for kind in AgentKind::ALL {
        let path = kind.path();
        let ends_in_office = path.last().is_some_and(|l| l.is_terminal());
        let office_once = path.iter().filter(|l| l.is_terminal()).count() == 1;
        results.push(TestResult {
            name: format!("path_{}", kind.name().to_lowercase().replace(' ', "_")),
            passed: ends_in_office && office_once && path.len() >= 2,
            detail: path.iter().map(|l| l.name()).collect::<Vec<_>>().join(" → "),
        });
        if verbose {
            println!("  {:14} {} steps", kind.name(), path.len() - 1);
        }
    }

    let feeds_ok = Location::ALL
        .iter()
        .all(|l| l.is_terminal() == l.viewpoint().is_none());
    results.push(TestResult {
        name: "feeds_cover_map".into(),
        passed: feeds_ok,
        detail: format!("{} feeds for {} locations", Viewpoint::ALL.len(), Location::ALL.len()),
    });

    let unguarded: Vec<_> = AgentKind::ALL
        .iter()
        .filter(|k| k.guarding_door().is_none())
        .map(|k| k.name())
        .collect();
    results.push(TestResult {
        name: "single_unguarded_agent".into(),
        passed: unguarded == ["Golden Freddy"],
        detail: format!("no door stops: {:?}", unguarded),
    });

    results
}

// ── 3. Difficulty Curve ─────────────────────────────────────────────────

fn validate_difficulty_curve(config: &TuningConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Movement Chance ---");
    let mut results = Vec::new();
    let difficulty = &config.difficulty;

    let chances: Vec<f64> = (0..=20).map(|n| difficulty.movement_chance(n)).collect();
    let monotonic = chances.windows(2).all(|w| w[1] >= w[0]);
    let capped = chances.iter().all(|c| *c <= difficulty.max_chance);
    results.push(TestResult {
        name: "chance_monotonic_and_capped".into(),
        passed: monotonic && capped,
        detail: format!(
            "night 1 = {:.3}, night 5 = {:.3}, night 20 = {:.3}",
            chances[1], chances[5], chances[20]
        ),
    });

    if verbose {
        for night in 1..=FINAL_NIGHT {
            let awake = AgentKind::ALL
                .iter()
                .filter(|k| difficulty.is_kind_active_on(**k, night))
                .count();
            println!(
                "  night {}: chance {:.3}, {} agents awake",
                night,
                difficulty.movement_chance(night),
                awake
            );
        }
    }

    results.push(TestResult {
        name: "late_agent_sleeps_early".into(),
        passed: !difficulty.is_kind_active_on(difficulty.late_agent, difficulty.late_agent_night.saturating_sub(1))
            && difficulty.is_kind_active_on(difficulty.late_agent, difficulty.late_agent_night),
        detail: format!(
            "{} wakes on night {}",
            difficulty.late_agent.name(),
            difficulty.late_agent_night
        ),
    });

    results
}

// ── 4. Observation ──────────────────────────────────────────────────────

fn validate_observation(config: &TuningConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Observation & Hysteresis ---");
    let mut results = Vec::new();
    let hysteresis = config.watch.hysteresis_secs;

    results.push(TestResult {
        name: "office_view_blind".into(),
        passed: Location::ALL.iter().all(|l| !is_observed(*l, View::Office)),
        detail: "nothing is observed from the office".into(),
    });

    let mut agent = Agent::from_kind(AgentKind::Freddy);
    update_watch_status(&mut agent, true, 100.0, hysteresis);
    let frozen_while_watched = !can_move(&agent, 100.0);

    // Sample the release time after the camera moves away
    let mut released_at = None;
    let mut t = 100.0;
    while t < 110.0 {
        t += 0.25;
        update_watch_status(&mut agent, false, t, hysteresis);
        if can_move(&agent, t) {
            released_at = Some(t);
            break;
        }
    }
    let released_after = released_at.map(|r| r - 100.0);
    results.push(TestResult {
        name: "hysteresis_release".into(),
        passed: frozen_while_watched && released_after.is_some_and(|d| d > hysteresis),
        detail: format!("released {:?}s after last sighting", released_after),
    });

    results
}

// ── 5. Door Blocks ──────────────────────────────────────────────────────

fn validate_door_blocks(config: &TuningConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Door Blocks & Retreat ---");
    let mut results = Vec::new();
    let cooldowns = &config.difficulty.cooldowns;

    for kind in AgentKind::ALL {
        let path = kind.path();
        let mut agent = Agent::from_kind(kind);
        agent.location = path[path.len() - 2];
        let before = agent.danger_level();

        let mut telemetry = Telemetry::default();
        let arrival = step(
            &mut agent,
            true,
            true,
            cooldowns,
            &mut StepRng::new(0, 0),
            &mut telemetry,
        );

        let (passed, detail) = match kind.guarding_door() {
            Some(side) => (
                arrival.is_none() && agent.danger_level() < before,
                format!(
                    "{:?} door pushes back to {}",
                    side,
                    agent.location.name()
                ),
            ),
            None => (
                arrival.map(|a| a.kind) == Some(kind),
                "walks through closed doors".to_string(),
            ),
        };
        if verbose {
            println!("  {:14} {}", kind.name(), detail);
        }
        results.push(TestResult {
            name: format!("blocked_{}", kind.name().to_lowercase().replace(' ', "_")),
            passed,
            detail,
        });
    }

    results
}

// ── 6. Attempt Rate ─────────────────────────────────────────────────────

/// Count movement attempts over `ticks` one-second ticks with every agent
/// awake, doors shut and nobody watched.
fn count_attempts(config: &TuningConfig, night: u32, ticks: u32, seed: u64) -> u64 {
    let mut config = *config;
    config.difficulty.late_agent_night = 0;
    let mut director = Director::with_config(config, seed);
    director.reset_for_new_night(night);
    let mut session = SessionState::new(night);
    session.left_door_closed = true;
    session.right_door_closed = true;
    for t in 0..ticks {
        let now = t as f64 * 30.0;
        if let Some(arrival) = director.tick(&session, now) {
            director.repel(arrival.kind, now);
        }
    }
    director.attempts()
}

fn validate_attempt_rate(config: &TuningConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Attempt Rate ---");
    let mut results = Vec::new();

    let night1 = count_attempts(config, 1, 10_000, seed);
    let night5 = count_attempts(config, 5, 10_000, seed);
    let expected = config.difficulty.movement_chance(5) / config.difficulty.movement_chance(1);
    let ratio = night5 as f64 / night1.max(1) as f64;
    if verbose {
        println!(
            "  night 1: {} attempts, night 5: {} attempts",
            night1, night5
        );
    }
    results.push(TestResult {
        name: "night5_vs_night1_attempts".into(),
        passed: (ratio - expected).abs() < 0.4,
        detail: format!("ratio {:.2}, expected ≈{:.2}", ratio, expected),
    });

    results
}

// ── 7. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(config: &TuningConfig, seed: u64, _verbose: bool) -> Vec<TestResult> {
    println!("--- Save/Load ---");
    let mut results = Vec::new();

    let mut director = Director::with_config(*config, seed);
    director.reset_for_new_night(3);
    let session = SessionState::new(3);
    for frame in 0..10_000 {
        director.tick(&session, frame as f64 / FRAME_RATE);
    }

    let mut buffer = Vec::new();
    let outcome = director
        .save(&mut buffer)
        .and_then(|_| Director::load(&buffer[..]));
    let (passed, detail) = match outcome {
        Ok(loaded) => (
            loaded.agents() == director.agents() && loaded.night() == 3,
            format!("{} bytes, roster restored", buffer.len()),
        ),
        Err(e) => (false, format!("roundtrip failed: {}", e)),
    };
    results.push(TestResult {
        name: "save_load_roundtrip".into(),
        passed,
        detail,
    });

    results
}

// ── 8. Scripted Nights ──────────────────────────────────────────────────

/// Keep the storage room feed up, glancing at the stage for two seconds
/// every half minute. The glance is shorter than the watch hysteresis, so
/// agents frozen on the storage feed stay frozen. Doors only close for an
/// agent that reached a hallway unseen.
fn guard_policy(session: &mut NightSession, frame: u64) {
    let mut want_left = false;
    let mut want_right = false;
    let unseen = session
        .director()
        .agents()
        .iter()
        .filter(|a| a.active && !a.is_observed);
    for agent in unseen {
        match agent.location {
            Location::LeftHallway | Location::LeftVent => want_left = true,
            Location::RightHallway => want_right = true,
            _ => {}
        }
    }
    if session.state().door_closed(DoorSide::Left) != want_left {
        session.toggle_left_door();
    }
    if session.state().door_closed(DoorSide::Right) != want_right {
        session.toggle_right_door();
    }

    let glancing = frame % (FRAME_RATE as u64 * 30) < FRAME_RATE as u64 * 2;
    let view = if glancing {
        View::Camera(Viewpoint::Stage)
    } else {
        View::Camera(Viewpoint::StorageRoom)
    };
    if session.state().view != view {
        session.switch_view(view);
    }

    let power = session.power();
    if power.level < 20.0 && !power.emergency_active && power.emergency_remaining > 0.0 {
        session.activate_emergency_power();
    }
}

fn play_scripted_nights(config: &TuningConfig, options: &Options) -> Vec<TestResult> {
    println!("--- Scripted Nights (seed {}) ---", options.seed);
    let mut results = Vec::new();
    let frame_limit = ((config.clock.night_length() + 1.0) * FRAME_RATE) as u64;

    let mut session = NightSession::with_config(*config, options.seed);
    loop {
        let night = session.night();
        let mut outcome = None;
        let mut near_misses = 0;
        for frame in 0..frame_limit {
            guard_policy(&mut session, frame);
            let report = session.update(1.0 / FRAME_RATE);
            if matches!(report.encounter, Some(Encounter::NearMiss(_))) {
                near_misses += 1;
            }
            if report.outcome.is_some() {
                outcome = report.outcome;
                break;
            }
        }

        let clock = session.clock().display(&config.clock);
        let repairs = session.director().repairs();
        println!(
            "  night {}: {:?} at {} ({} near misses, {:.0} power left)",
            night,
            outcome,
            clock,
            near_misses,
            session.power().level
        );
        if options.verbose {
            let telemetry = session.director().telemetry();
            println!(
                "    {} ticks, {} attempts, {} advances, {} retreats, {} arrivals",
                telemetry.ticks,
                telemetry.attempts,
                telemetry.advances,
                telemetry.retreats,
                telemetry.arrivals
            );
        }

        results.push(TestResult {
            name: format!("night_{}_ends", night),
            passed: outcome.is_some(),
            detail: format!("{:?} at {}", outcome, clock),
        });
        results.push(TestResult {
            name: format!("night_{}_no_repairs", night),
            passed: repairs.total() == 0,
            detail: format!("{:?}", repairs),
        });

        if night >= options.nights || !session.advance_night() {
            break;
        }
    }

    let stats = session.stats();
    println!(
        "  session: {} survived, {} jumpscares, {} points, best {} min",
        stats.nights_survived, stats.total_jumpscares, stats.total_score, stats.best_survival_minutes
    );
    results.push(TestResult {
        name: "guarded_nights_survivable".into(),
        passed: stats.nights_survived >= 1,
        detail: format!(
            "{} of {} nights survived, {} points",
            stats.nights_survived, options.nights, stats.total_score
        ),
    });

    results
}

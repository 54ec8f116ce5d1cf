//! Duskwatch Headless Campaign Harness
//!
//! Validates formulas, calendar and quest data, and plays whole campaigns
//! through the engine with scripted policies. No front end, no files
//! unless `--config` is given.
//!
//! Usage:
//!   cargo run -p duskwatch-simtest
//!   cargo run -p duskwatch-simtest -- --verbose --days 360 --seed 7
//!   cargo run -p duskwatch-simtest -- --config balance.json

use std::collections::HashSet;
use std::path::PathBuf;

use duskwatch_core::persistence::{self, KeyValueStore, MemoryStore, SAVE_KEY};
use duskwatch_core::prelude::*;
use duskwatch_logic::arena::{self, ArenaConfig};
use duskwatch_logic::calendar::{self, CalendarEventKind, MonthCursor, TOTAL_DAYS};
use duskwatch_logic::config::{validate_config, BalanceConfig};
use duskwatch_logic::constants::{ending, gauges, proficiency, DAY_SLOT_COUNT};
use duskwatch_logic::ending::EndingVar;
use duskwatch_logic::proficiency::{Proficiency, ProficiencyType};
use duskwatch_logic::quest;
use duskwatch_logic::schedule::Schedule;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

struct Args {
    verbose: bool,
    days: u32,
    seed: u64,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        verbose: false,
        days: calendar::DAYS_PER_YEAR,
        seed: 42,
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--days" => {
                let v = it.next().ok_or("--days needs a value")?;
                args.days = v.parse().map_err(|_| format!("bad --days value: {}", v))?;
            }
            "--seed" => {
                let v = it.next().ok_or("--seed needs a value")?;
                args.seed = v.parse().map_err(|_| format!("bad --seed value: {}", v))?;
            }
            "--config" => {
                let v = it.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(v));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    args.days = args.days.clamp(1, TOTAL_DAYS);
    Ok(args)
}

/// Engine log lines go to stderr in verbose mode.
struct HarnessLogger;

impl log::Log for HarnessLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("    [{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: HarnessLogger = HarnessLogger;

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: duskwatch-simtest [--verbose] [--days N] [--seed S] [--config FILE]");
            std::process::exit(2);
        }
    };
    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    println!("=== Duskwatch Campaign Harness ===");
    println!("    seed {}, {} day(s)\n", args.seed, args.days);

    let mut results = Vec::new();

    // 1. Balance config
    let config = match load_config(&args, &mut results) {
        Some(c) => c,
        None => BalanceConfig::default(),
    };

    // 2. Calendar
    results.extend(validate_calendar(args.verbose));

    // 3. Quest generation
    results.extend(validate_quests(args.verbose));

    // 4. Proficiency leveling
    results.extend(validate_proficiency(args.verbose));

    // 5. Arena odds
    results.extend(validate_arena_odds(&config.arena, args.verbose));

    // 6. Scripted campaigns
    for policy in Policy::ALL {
        results.extend(run_campaign(policy, &config, &args));
    }

    // 7. Save / load
    results.extend(validate_persistence(&config, args.seed, args.verbose));

    // 8. Debug commands
    results.extend(validate_debug_tools(args.seed));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
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

// ── 1. Balance config ───────────────────────────────────────────────────

fn load_config(args: &Args, results: &mut Vec<TestResult>) -> Option<BalanceConfig> {
    println!("--- Balance Config ---");
    let config = match &args.config {
        None => BalanceConfig::default(),
        Some(path) => {
            let parsed = std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| BalanceConfig::from_json(&json).map_err(|e| e.to_string()));
            match parsed {
                Ok(c) => c,
                Err(e) => {
                    results.push(TestResult::new(
                        "config_load",
                        false,
                        format!("{}: {}", path.display(), e),
                    ));
                    return None;
                }
            }
        }
    };

    let errors = validate_config(&config);
    results.push(TestResult::new(
        "config_valid",
        errors.is_empty(),
        if errors.is_empty() {
            "balance numbers pass validation".to_string()
        } else {
            format!("{:?}", errors)
        },
    ));
    if args.verbose {
        if let Ok(json) = config.to_json_pretty() {
            println!("{}", json);
        }
    }
    Some(config)
}

// ── 2. Calendar ─────────────────────────────────────────────────────────

fn validate_calendar(verbose: bool) -> Vec<TestResult> {
    println!("--- Calendar ---");
    let mut results = Vec::new();

    let arena_days = (1..=TOTAL_DAYS).filter(|&d| calendar::is_arena_day(d)).count();
    let promotion_days: Vec<u32> = (1..=TOTAL_DAYS)
        .filter(|&d| calendar::is_promotion_day(d))
        .collect();
    results.push(TestResult::new(
        "calendar_arena_days",
        arena_days == (TOTAL_DAYS / calendar::ARENA_INTERVAL) as usize,
        format!("{} arena days over {} days", arena_days, TOTAL_DAYS),
    ));
    results.push(TestResult::new(
        "calendar_promotion_days",
        promotion_days.len() == 12 && promotion_days.iter().all(|&d| calendar::is_arena_day(d)),
        format!("{} promotion days, all on arena nights", promotion_days.len()),
    ));

    let mut bad_next = Vec::new();
    for day in 1..TOTAL_DAYS {
        let next = calendar::next_arena_day(day);
        if next <= day || !calendar::is_arena_day(next) || next - day > calendar::ARENA_INTERVAL {
            bad_next.push(day);
        }
    }
    results.push(TestResult::new(
        "calendar_next_arena_day",
        bad_next.is_empty(),
        if bad_next.is_empty() {
            "next arena day always the following arena night".to_string()
        } else {
            format!("wrong for days {:?}", &bad_next[..bad_next.len().min(5)])
        },
    ));

    // Every month lists the same number of events; promotion matches
    // replace an arena night rather than adding one.
    let mut cursor = MonthCursor::at_day(1);
    let mut event_counts = HashSet::new();
    let mut promotion_months = 0;
    for _ in 0..calendar::MONTHS_PER_YEAR * calendar::TOTAL_YEARS {
        let events = cursor.events();
        event_counts.insert(events.len());
        let promos = events
            .iter()
            .filter(|e| e.kind == CalendarEventKind::PromotionMatch)
            .count();
        promotion_months += promos;
        cursor.next_month();
    }
    results.push(TestResult::new(
        "calendar_month_events",
        event_counts.len() == 1 && promotion_months == promotion_days.len(),
        format!(
            "event counts per month {:?}, {} promotion matches",
            event_counts, promotion_months
        ),
    ));

    let mut cursor = MonthCursor::at_day(1);
    cursor.prev_month();
    let start_clamped = cursor.year == 1;
    let mut cursor = MonthCursor::at_day(TOTAL_DAYS);
    cursor.next_month();
    let end_clamped = cursor.year == calendar::TOTAL_YEARS;
    results.push(TestResult::new(
        "calendar_cursor_bounds",
        start_clamped && end_clamped,
        "month browsing stays inside the campaign years",
    ));

    if verbose {
        println!("    last day: {}", calendar::date(TOTAL_DAYS));
    }
    results
}

// ── 3. Quests ───────────────────────────────────────────────────────────

fn validate_quests(verbose: bool) -> Vec<TestResult> {
    println!("--- Quest Generation ---");
    let mut results = Vec::new();

    let mut ids = HashSet::new();
    let mut duplicate_ids = 0;
    let mut same_endpoints = 0;
    let mut bad_counts = 0;
    let mut total = 0;
    for day in 1..=TOTAL_DAYS {
        let quests = quest::daily_quests(day);
        if !(2..=3).contains(&quests.len()) {
            bad_counts += 1;
        }
        for q in &quests {
            total += 1;
            if !ids.insert(q.id) {
                duplicate_ids += 1;
            }
            if q.pickup == q.deliver {
                same_endpoints += 1;
            }
        }
        if quest::daily_quests(day) != quests {
            bad_counts += 1;
        }
    }

    results.push(TestResult::new(
        "quests_unique_ids",
        duplicate_ids == 0,
        format!("{} quests, {} duplicate ids", total, duplicate_ids),
    ));
    results.push(TestResult::new(
        "quests_distinct_endpoints",
        same_endpoints == 0,
        format!("{} quests deliver where they start", same_endpoints),
    ));
    results.push(TestResult::new(
        "quests_daily_count",
        bad_counts == 0,
        format!("{} days with a bad or unstable board", bad_counts),
    ));

    if verbose {
        for q in quest::daily_quests(1) {
            println!("    {} - {} ({}G)", q.title, q.description(), q.gold_reward);
        }
    }
    results
}

// ── 4. Proficiency ──────────────────────────────────────────────────────

fn validate_proficiency(verbose: bool) -> Vec<TestResult> {
    println!("--- Proficiency ---");
    let mut results = Vec::new();

    let mut p = Proficiency::new();
    let mut steps = 0;
    let mut max_seen = p.level;
    while !p.is_max_level() && steps < 1000 {
        p.add_exp(3);
        max_seen = max_seen.max(p.level);
        steps += 1;
    }
    results.push(TestResult::new(
        "proficiency_reaches_cap",
        p.level == proficiency::MAX_LEVEL && p.exp == 0 && max_seen <= proficiency::MAX_LEVEL,
        format!("Lv.{} after {} grants of 3 exp", p.level, steps),
    ));

    p.add_exp(500);
    results.push(TestResult::new(
        "proficiency_capped",
        p.level == proficiency::MAX_LEVEL && p.exp == 0,
        "extra exp at the cap is discarded",
    ));

    let mut p = Proficiency::new();
    p.add_exp(12);
    results.push(TestResult::new(
        "proficiency_carry_over",
        p == Proficiency { level: 2, exp: 2 },
        format!("12 exp from Lv.1 gives {:?}", p),
    ));

    if verbose {
        println!("    thresholds {:?}", proficiency::EXP_THRESHOLDS);
    }
    results
}

// ── 5. Arena odds ───────────────────────────────────────────────────────

fn validate_arena_odds(cfg: &ArenaConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Arena Odds ---");
    let mut results = Vec::new();

    let mut prev_normal = 0.0f32;
    let mut prev_promo = 0.0f32;
    let mut monotonic = true;
    let mut in_range = true;
    for power in 0..=1000 {
        let n = arena::normal_win_chance(power, cfg);
        let p = arena::promotion_win_chance(power, cfg);
        if n < prev_normal || p < prev_promo {
            monotonic = false;
        }
        if !(0.0..=1.0).contains(&n) || !(0.0..=1.0).contains(&p) {
            in_range = false;
        }
        prev_normal = n;
        prev_promo = p;
    }
    results.push(TestResult::new(
        "arena_odds_monotonic",
        monotonic,
        "win chance never falls as power grows",
    ));
    results.push(TestResult::new(
        "arena_odds_clamped",
        in_range,
        format!(
            "normal {:.2}..{:.2}, promotion {:.2}..{:.2}",
            arena::normal_win_chance(0, cfg),
            prev_normal,
            arena::promotion_win_chance(0, cfg),
            prev_promo
        ),
    ));

    if verbose {
        for power in [0, 20, 60, 120] {
            println!(
                "    power {:>3}: normal {:.2}, promotion {:.2}",
                power,
                arena::normal_win_chance(power, cfg),
                arena::promotion_win_chance(power, cfg)
            );
        }
    }
    results
}

// ── 6. Campaigns ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    /// All-in on training, arena whenever it is open.
    Trainer,
    /// Part-time every slot, explores at night.
    Worker,
    /// Mix of both, rests when stress runs high.
    Balanced,
}

impl Policy {
    const ALL: [Policy; 3] = [Policy::Trainer, Policy::Worker, Policy::Balanced];

    fn name(self) -> &'static str {
        match self {
            Policy::Trainer => "trainer",
            Policy::Worker => "worker",
            Policy::Balanced => "balanced",
        }
    }

    fn schedule(self, day: u32, state: &GameState) -> Schedule {
        let mut schedule = Schedule::cleared();
        for i in 0..DAY_SLOT_COUNT {
            let stat = TrainingStat::ALL[(day as usize + i) % TrainingStat::ALL.len()];
            let slot = match self {
                Policy::Trainer => DaySlotType::Training(stat),
                Policy::Worker => DaySlotType::PartTime,
                Policy::Balanced if state.fatigue > 60 => DaySlotType::Rest,
                Policy::Balanced => match i {
                    0 | 1 => DaySlotType::Training(stat),
                    2 => DaySlotType::PartTime,
                    _ => DaySlotType::Investigation,
                },
            };
            schedule.set(i, slot);
        }
        schedule
    }

    fn errand(self, state: &GameState) -> (MapLocation, PlaceAction) {
        if let Some(q) = state.quests.active.first() {
            return (q.deliver, PlaceAction::DeliverQuest);
        }
        match self {
            Policy::Worker => match state.quests.available.first() {
                Some(q) => (MapLocation::QuestBoard, PlaceAction::AcceptQuest(q.id)),
                None => (MapLocation::Home, PlaceAction::Rest),
            },
            Policy::Trainer if state.stress >= 40 => (MapLocation::Cafe, PlaceAction::Talk),
            Policy::Trainer => (MapLocation::Home, PlaceAction::Rest),
            Policy::Balanced if state.fatigue >= 30 && state.gold >= 10 => {
                (MapLocation::Shop, PlaceAction::BuyItem)
            }
            Policy::Balanced => (MapLocation::InvestigationHq, PlaceAction::Investigate),
        }
    }

    fn night(self, status: &NightStatus) -> NightAction {
        let wanted = match self {
            Policy::Trainer => NightAction::Arena,
            Policy::Worker => NightAction::Exploration,
            Policy::Balanced if status.stress_warning => NightAction::Rest,
            Policy::Balanced => NightAction::Arena,
        };
        if status.can_choose(wanted) {
            wanted
        } else {
            NightAction::Rest
        }
    }
}

/// Per-day invariant check. Returns a description of the first violation.
fn check_invariants(state: &GameState) -> Option<String> {
    if state.stress > gauges::GAUGE_MAX || state.fatigue > gauges::GAUGE_MAX {
        return Some(format!("gauges out of range: {}/{}", state.stress, state.fatigue));
    }
    for kind in ProficiencyType::ALL {
        let p = state.proficiencies.get(kind);
        if p.level < proficiency::MIN_LEVEL || p.level > proficiency::MAX_LEVEL {
            return Some(format!("{} level {}", kind.name(), p.level));
        }
        if p.is_max_level() && p.exp != 0 {
            return Some(format!("{} keeps exp at the cap", kind.name()));
        }
        if !p.is_max_level() && p.exp >= p.threshold() {
            return Some(format!("{} missed a level-up", kind.name()));
        }
    }
    for var in EndingVar::ALL {
        let v = state.ending.get(var);
        if !(ending::ENDING_MIN..=ending::ENDING_MAX).contains(&v) {
            return Some(format!("{:?} = {}", var, v));
        }
    }
    None
}

fn check_day_reset(state: &GameState) -> Option<String> {
    let fresh = state.fighter_slot_progress == 0
        && state.player_actions_used == 0
        && state.player_location == MapLocation::Home
        && !state.night_completed
        && state.today_training_count == 0
        && state.today_gold_earned == 0
        && state.last_battle.is_none()
        && state.schedule == Schedule::cleared();
    if fresh {
        None
    } else {
        Some(format!("day {} started with leftover daily fields", state.day))
    }
}

/// Play one scripted day from ScheduleSetting back to ScheduleSetting.
fn play_day(engine: &mut GameEngine, policy: Policy) -> Result<(), GameError> {
    let day = engine.state().day;
    let schedule = policy.schedule(day, engine.state());
    for (i, slot) in schedule.slots.iter().enumerate() {
        engine.set_slot(i, *slot)?;
    }
    engine.confirm_schedule()?;

    while engine.phase() != GamePhase::NightChoice {
        let (location, action) = policy.errand(engine.state());
        engine.move_to(location)?;
        let report = match engine.perform(action) {
            Ok(report) => report,
            // Nothing sensible left to do here; rest at home instead.
            Err(_) => {
                engine.back_to_map()?;
                engine.move_to(MapLocation::Home)?;
                engine.perform(PlaceAction::Rest)?
            }
        };
        if !report.day_over {
            engine.back_to_map()?;
        }
    }

    let night = policy.night(&engine.night_status());
    engine.choose_night(night)?;
    Ok(())
}

fn run_campaign(policy: Policy, config: &BalanceConfig, args: &Args) -> Vec<TestResult> {
    println!("--- Campaign: {} ---", policy.name());
    let mut results = Vec::new();
    let prefix = format!("campaign_{}", policy.name());

    let mut engine = GameEngine::with_config(config.clone(), args.seed);
    engine.attach_store(Box::new(MemoryStore::new()));

    let mut failure = None;
    let mut level_ups = 0;
    let mut battles = 0;
    if let Err(e) = engine.start() {
        failure = Some(format!("start: {}", e));
    }

    for _ in 0..args.days {
        if failure.is_some() {
            break;
        }
        if let Err(e) = play_day(&mut engine, policy) {
            failure = Some(format!("day {}: {}", engine.state().day, e));
            break;
        }
        for event in engine.drain_events() {
            match event {
                GameEvent::LevelUp { .. } => level_ups += 1,
                GameEvent::NightResolved {
                    outcome: NightOutcome::Battle(_),
                    ..
                } => battles += 1,
                _ => {}
            }
        }
        if let Some(v) = check_invariants(engine.state()) {
            failure = Some(format!("day {}: {}", engine.state().day, v));
            break;
        }
        if args.verbose && engine.state().day % 30 == 0 {
            let bar = engine.top_bar();
            println!(
                "    {} {}G stress {} fatigue {} rank {} power {}",
                bar.date,
                bar.gold,
                bar.stress,
                bar.fatigue,
                bar.rank.name(),
                engine.state().total_power()
            );
        }
        match engine.next_day() {
            Ok(()) => {
                if let Some(v) = check_day_reset(engine.state()) {
                    failure = Some(v);
                }
            }
            Err(GameError::CampaignComplete) => break,
            Err(e) => failure = Some(format!("next_day: {}", e)),
        }
    }

    let state = engine.state();
    results.push(TestResult::new(
        format!("{}_invariants", prefix),
        failure.is_none(),
        failure.unwrap_or_else(|| format!("reached day {} cleanly", state.day)),
    ));

    let progressed = match policy {
        Policy::Trainer => {
            state.total_power() > 0 && (battles > 0 || args.days < calendar::ARENA_INTERVAL)
        }
        Policy::Worker => state.gold > 0 && !state.quests.completed.is_empty(),
        Policy::Balanced => state.total_power() > 0 && state.gold > 0,
    };
    results.push(TestResult::new(
        format!("{}_progress", prefix),
        progressed,
        format!(
            "power {}, gold {}, {} battles ({}-{}), {} quests, {} level-ups, rank {}",
            state.total_power(),
            state.gold,
            battles,
            state.arena.wins + state.arena.promotion_wins,
            state.arena.losses + state.arena.promotion_losses,
            state.quests.completed.len(),
            level_ups,
            state.arena.rank.name()
        ),
    ));

    if args.verbose {
        if let Ok(json) = serde_json::to_string(&engine.summary()) {
            println!("    final summary: {}", json);
        }
    }

    let autosaved = engine
        .detach_store()
        .map(|store| persistence::has_save(store.as_ref()).unwrap_or(false))
        .unwrap_or(false);
    results.push(TestResult::new(
        format!("{}_autosave", prefix),
        autosaved || args.days == 1,
        "day boundary wrote a save",
    ));
    results
}

// ── 7. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(config: &BalanceConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Save / Load ---");
    let mut results = Vec::new();

    let mut engine = GameEngine::with_config(config.clone(), seed);
    let played = engine
        .start()
        .and_then(|_| (0..20).try_for_each(|_| play_day_and_advance(&mut engine)));
    if let Err(e) = played {
        results.push(TestResult::new("save_setup", false, e.to_string()));
        return results;
    }

    let mut store = MemoryStore::new();
    let json_ok = engine.save_to(&mut store).is_ok()
        && matches!(
            GameEngine::load_from(&store, config.clone()),
            Ok(Some(ref loaded)) if loaded.state() == engine.state()
        );
    results.push(TestResult::new(
        "save_json_roundtrip",
        json_ok,
        format!("day {} survives a JSON round trip", engine.state().day),
    ));

    let mut buffer = Vec::new();
    let bin_ok = engine.save_binary(&mut buffer).is_ok()
        && matches!(
            GameEngine::load_binary(&buffer[..], config.clone()),
            Ok(ref loaded) if loaded.state() == engine.state()
        );
    results.push(TestResult::new(
        "save_binary_roundtrip",
        bin_ok,
        format!("{} byte snapshot", buffer.len()),
    ));

    let empty = MemoryStore::new();
    results.push(TestResult::new(
        "save_missing_is_fresh",
        matches!(persistence::load(&empty), Ok(None)),
        "no save means a new campaign",
    ));

    let mut corrupt = MemoryStore::new();
    let clamped = corrupt
        .set(
            SAVE_KEY,
            r#"{"day": 0, "stress": -5, "fatigue": 900, "proficiency_levels": [12, -1, 3, 3]}"#,
        )
        .is_ok()
        && match persistence::load(&corrupt) {
            Ok(Some(loaded)) => {
                let s = loaded.state;
                s.day == 1
                    && s.stress == 0
                    && s.fatigue == gauges::GAUGE_MAX
                    && s.proficiencies.training.level == proficiency::MAX_LEVEL
                    && s.proficiencies.investigation.level == proficiency::MIN_LEVEL
            }
            _ => false,
        };
    results.push(TestResult::new(
        "save_values_clamped",
        clamped,
        "out-of-range save values are clamped on load",
    ));

    if verbose {
        if let Ok(Some(json)) = store.get(SAVE_KEY) {
            println!("    save blob: {} bytes", json.len());
        }
    }
    results
}

fn play_day_and_advance(engine: &mut GameEngine) -> Result<(), GameError> {
    play_day(engine, Policy::Balanced)?;
    engine.next_day()
}

// ── 8. Debug tools ──────────────────────────────────────────────────────

fn validate_debug_tools(seed: u64) -> Vec<TestResult> {
    println!("--- Debug Tools ---");
    let mut engine = GameEngine::new(seed);
    engine.debug_add_gold(100);
    engine.debug_add_proficiency_exp(ProficiencyType::PartTime, 1000);
    let ok_gold = engine.state().gold == 100;
    let ok_prof = engine.state().proficiencies.part_time.level == proficiency::MAX_LEVEL;

    let forced = engine.start().is_ok() && {
        engine.debug_force_summary();
        engine.phase() == GamePhase::DaySummary && engine.next_day().is_ok()
    };

    vec![TestResult::new(
        "debug_commands",
        ok_gold && ok_prof && forced,
        "gold grant, proficiency grant and forced summary work",
    )]
}

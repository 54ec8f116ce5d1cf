//! Night system - exploration, arena bouts and promotion matches, rest

use rand::Rng;

use duskwatch_logic::arena;
use duskwatch_logic::config::BalanceConfig;
use duskwatch_logic::ending::EndingVar;
use duskwatch_logic::proficiency::ProficiencyType;
use duskwatch_logic::schedule::NightAction;

use super::day::grant_proficiency_exp;
use crate::engine::GameError;
use crate::events::{GameEvent, NightOutcome};
use crate::state::GameState;

/// Refuse night choices the current state does not allow.
pub fn check_night(state: &GameState, action: NightAction) -> Result<(), GameError> {
    let status = state.night_status();
    if action == NightAction::Arena && !state.is_arena_open() {
        return Err(GameError::ArenaClosed {
            next_open: duskwatch_logic::calendar::next_arena_day(state.day),
        });
    }
    if action != NightAction::Rest && status.stress_locked {
        return Err(GameError::TooStressed(state.stress));
    }
    Ok(())
}

/// Resolve the chosen night action and mark the night completed.
pub fn resolve_night<R: Rng>(
    state: &mut GameState,
    action: NightAction,
    cfg: &BalanceConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Result<NightOutcome, GameError> {
    check_night(state, action)?;
    state.night_choice = action;

    let outcome = match action {
        NightAction::Exploration => {
            let ex = &cfg.exploration;
            state.add_stress(ex.stress as i32);
            state.add_fatigue(ex.fatigue as i32);
            state.earn_gold(ex.gold);
            let clue_found =
                rng.gen::<f32>() < state.proficiencies.investigation.extra_clue_chance();
            if clue_found {
                state.clues += 1;
            }
            grant_proficiency_exp(state, ProficiencyType::Exploration, ex.exp, events);
            NightOutcome::Explored {
                gold: ex.gold,
                clue_found,
            }
        }
        NightAction::Arena => {
            let power = state.total_power();
            let roll = rng.gen::<f32>();
            let result = if state.is_promotion_day() {
                arena::resolve_promotion(&mut state.arena, power, roll, &cfg.arena)
            } else {
                arena::resolve_normal(&mut state.arena, power, roll, &cfg.arena)
            };
            state.add_stress(cfg.arena.stress);
            state.add_fatigue(cfg.arena.fatigue);
            state.earn_gold(result.gold_reward);
            state
                .ending
                .modify(EndingVar::Reputation, result.reputation_change);
            state.last_battle = Some(result);

            if result.ranked_up() {
                log::info!("promoted to {}", state.arena.rank.name());
            }
            log::info!(
                "arena day {}: {} (power {}, +{}G)",
                state.day,
                if result.won { "won" } else { "lost" },
                power,
                result.gold_reward
            );
            NightOutcome::Battle(result)
        }
        NightAction::Rest => {
            state.add_stress(-(cfg.recovery.night_rest_stress as i32));
            state.add_fatigue(-(cfg.recovery.night_rest_fatigue as i32));
            NightOutcome::Rested
        }
    };

    state.night_completed = true;
    events.push(GameEvent::NightResolved { action, outcome });
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskwatch_logic::arena::ArenaRank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (GameState, BalanceConfig, StdRng, Vec<GameEvent>) {
        (
            GameState::new(),
            BalanceConfig::default(),
            StdRng::seed_from_u64(3),
            Vec::new(),
        )
    }

    #[test]
    fn arena_closed_on_off_days() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.day = 4;
        assert_eq!(
            resolve_night(&mut s, NightAction::Arena, &cfg, &mut rng, &mut ev),
            Err(GameError::ArenaClosed { next_open: 6 })
        );
        assert!(!s.night_completed);
    }

    #[test]
    fn stress_lock_allows_only_rest() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.day = 3;
        s.add_stress(80);
        assert_eq!(
            resolve_night(&mut s, NightAction::Exploration, &cfg, &mut rng, &mut ev),
            Err(GameError::TooStressed(80))
        );
        assert_eq!(
            resolve_night(&mut s, NightAction::Arena, &cfg, &mut rng, &mut ev),
            Err(GameError::TooStressed(80))
        );
        assert_eq!(
            resolve_night(&mut s, NightAction::Rest, &cfg, &mut rng, &mut ev),
            Ok(NightOutcome::Rested)
        );
        assert_eq!(s.stress, 75);
        assert!(s.night_completed);
    }

    #[test]
    fn exploration_effects() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        let out = resolve_night(&mut s, NightAction::Exploration, &cfg, &mut rng, &mut ev);
        assert!(matches!(out, Ok(NightOutcome::Explored { gold: 5, .. })));
        assert_eq!((s.stress, s.fatigue, s.gold), (5, 3, 5));
        assert_eq!(s.proficiencies.exploration.exp, 4);
        assert_eq!(s.night_choice, NightAction::Exploration);
    }

    #[test]
    fn arena_battle_pays_out() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.day = 3;
        let out = resolve_night(&mut s, NightAction::Arena, &cfg, &mut rng, &mut ev);
        let Ok(NightOutcome::Battle(result)) = out else {
            panic!("expected a battle, got {:?}", out);
        };
        assert!(!result.is_promotion());
        assert_eq!(s.gold, result.gold_reward);
        assert_eq!(s.ending.reputation, result.reputation_change);
        assert_eq!(s.arena.wins + s.arena.losses, 1);
        assert_eq!((s.stress, s.fatigue), (3, 5));
        assert_eq!(s.last_battle, Some(result));
    }

    #[test]
    fn promotion_day_runs_promotion_match() {
        let (mut s, mut cfg, mut rng, mut ev) = setup();
        cfg.arena.promotion_base_chance = 1.0;
        s.day = 90;
        let out = resolve_night(&mut s, NightAction::Arena, &cfg, &mut rng, &mut ev);
        let Ok(NightOutcome::Battle(result)) = out else {
            panic!("expected a battle, got {:?}", out);
        };
        assert!(result.won && result.ranked_up());
        assert_eq!(s.arena.rank, ArenaRank::Silver);
        assert_eq!(s.arena.promotion_wins, 1);
        assert_eq!(s.ending.reputation, 10);
    }
}

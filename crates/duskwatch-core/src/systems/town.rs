//! Town actions - what the player does at each map location

use rand::Rng;

use duskwatch_logic::config::BalanceConfig;
use duskwatch_logic::ending::EndingVar;
use duskwatch_logic::proficiency::ProficiencyType;
use duskwatch_logic::schedule::PlaceAction;

use super::day::grant_proficiency_exp;
use crate::engine::GameError;
use crate::events::{ActionOutcome, GameEvent};
use crate::state::GameState;

/// Check that `action` can be taken right now, without mutating anything.
pub fn check_action(
    state: &GameState,
    action: PlaceAction,
    cfg: &BalanceConfig,
) -> Result<(), GameError> {
    let location = state.player_location;
    if state.is_day_over() {
        return Err(GameError::DayOver);
    }
    if !action.available_at(location) {
        return Err(GameError::ActionUnavailable { action, location });
    }
    match action {
        PlaceAction::AcceptQuest(id) => {
            if !state.quests.available.iter().any(|q| q.id == id) {
                return Err(GameError::UnknownQuest(id));
            }
        }
        PlaceAction::DeliverQuest => {
            if state.quests.deliverable_at(location).is_none() {
                return Err(GameError::NothingToDeliver(location));
            }
        }
        PlaceAction::BuyItem => {
            if state.gold < cfg.town.tonic_price {
                return Err(GameError::NotEnoughGold {
                    needed: cfg.town.tonic_price,
                    available: state.gold,
                });
            }
        }
        PlaceAction::Talk | PlaceAction::Investigate | PlaceAction::Rest => {}
    }
    Ok(())
}

/// Perform a place action, consuming one of the day's player actions.
pub fn perform_action<R: Rng>(
    state: &mut GameState,
    action: PlaceAction,
    cfg: &BalanceConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Result<ActionOutcome, GameError> {
    check_action(state, action, cfg)?;
    let location = state.player_location;

    let outcome = match action {
        PlaceAction::Talk => {
            state.add_stress(-(cfg.town.talk_stress_relief as i32));
            state
                .ending
                .modify(EndingVar::Reputation, cfg.town.talk_reputation);
            ActionOutcome::Talked
        }
        PlaceAction::Investigate => {
            let prof = state.proficiencies.investigation;
            let mut clues_found = 0;
            if rng.gen::<f32>() < cfg.investigation.clue_chance + prof.investigation_success_bonus()
            {
                clues_found += 1;
                if rng.gen::<f32>() < prof.extra_clue_chance() {
                    clues_found += 1;
                }
            }
            state.clues += clues_found;
            state.add_stress(cfg.investigation.stress as i32);
            grant_proficiency_exp(
                state,
                ProficiencyType::Investigation,
                cfg.investigation.exp,
                events,
            );
            ActionOutcome::Investigated { clues_found }
        }
        PlaceAction::AcceptQuest(id) => {
            state.quests.accept(id).ok_or(GameError::UnknownQuest(id))?;
            log::info!("quest {} accepted", id);
            ActionOutcome::QuestAccepted { id }
        }
        PlaceAction::DeliverQuest => {
            let quest = state
                .quests
                .complete_at(location)
                .ok_or(GameError::NothingToDeliver(location))?;
            state.earn_gold(quest.gold_reward);
            log::info!("quest {} delivered for {}G", quest.id, quest.gold_reward);
            ActionOutcome::QuestDelivered {
                id: quest.id,
                reward: quest.gold_reward,
            }
        }
        PlaceAction::BuyItem => {
            let price = cfg.town.tonic_price;
            if !state.spend_gold(price) {
                return Err(GameError::NotEnoughGold {
                    needed: price,
                    available: state.gold,
                });
            }
            state.add_fatigue(-(cfg.town.tonic_fatigue_relief as i32));
            ActionOutcome::BoughtTonic { price }
        }
        PlaceAction::Rest => {
            state.add_fatigue(-(cfg.recovery.day_rest_fatigue as i32));
            state.add_stress(-(cfg.recovery.day_rest_stress as i32));
            ActionOutcome::Rested
        }
    };
    state.player_actions_used += 1;

    events.push(GameEvent::ActionPerformed {
        location,
        action,
        outcome,
    });
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskwatch_logic::constants::MAX_PLAYER_ACTIONS;
    use duskwatch_logic::quest::MapLocation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (GameState, BalanceConfig, StdRng, Vec<GameEvent>) {
        (
            GameState::new(),
            BalanceConfig::default(),
            StdRng::seed_from_u64(11),
            Vec::new(),
        )
    }

    #[test]
    fn wrong_location_is_refused_without_cost() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::Home;
        let err = perform_action(&mut s, PlaceAction::Talk, &cfg, &mut rng, &mut ev);
        assert_eq!(
            err,
            Err(GameError::ActionUnavailable {
                action: PlaceAction::Talk,
                location: MapLocation::Home
            })
        );
        assert_eq!(s.player_actions_used, 0);
        assert!(ev.is_empty());
    }

    #[test]
    fn talk_relieves_stress_and_builds_reputation() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::Cafe;
        s.add_stress(10);
        let out = perform_action(&mut s, PlaceAction::Talk, &cfg, &mut rng, &mut ev);
        assert_eq!(out, Ok(ActionOutcome::Talked));
        assert_eq!(s.stress, 8);
        assert_eq!(s.ending.reputation, 1);
        assert_eq!(s.player_actions_used, 1);
    }

    #[test]
    fn accept_then_deliver_quest() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::QuestBoard;
        let quest = s.quests.available[0].clone();

        let out = perform_action(
            &mut s,
            PlaceAction::AcceptQuest(quest.id),
            &cfg,
            &mut rng,
            &mut ev,
        );
        assert_eq!(out, Ok(ActionOutcome::QuestAccepted { id: quest.id }));

        s.player_location = MapLocation::Home;
        assert_eq!(
            perform_action(&mut s, PlaceAction::DeliverQuest, &cfg, &mut rng, &mut ev),
            Err(GameError::NothingToDeliver(MapLocation::Home))
        );

        s.player_location = quest.deliver;
        let out = perform_action(&mut s, PlaceAction::DeliverQuest, &cfg, &mut rng, &mut ev);
        assert_eq!(
            out,
            Ok(ActionOutcome::QuestDelivered {
                id: quest.id,
                reward: quest.gold_reward
            })
        );
        assert_eq!(s.gold, quest.gold_reward);
        assert_eq!(s.player_actions_used, 2);
    }

    #[test]
    fn unknown_quest_rejected() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::QuestBoard;
        assert_eq!(
            perform_action(&mut s, PlaceAction::AcceptQuest(4242), &cfg, &mut rng, &mut ev),
            Err(GameError::UnknownQuest(4242))
        );
        assert_eq!(s.player_actions_used, 0);
    }

    #[test]
    fn tonic_needs_gold() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::Shop;
        assert_eq!(
            perform_action(&mut s, PlaceAction::BuyItem, &cfg, &mut rng, &mut ev),
            Err(GameError::NotEnoughGold {
                needed: 10,
                available: 0
            })
        );
        s.add_gold(12);
        s.add_fatigue(20);
        let out = perform_action(&mut s, PlaceAction::BuyItem, &cfg, &mut rng, &mut ev);
        assert_eq!(out, Ok(ActionOutcome::BoughtTonic { price: 10 }));
        assert_eq!(s.gold, 2);
        assert_eq!(s.fatigue, 15);
    }

    #[test]
    fn investigate_finds_clues_with_certain_chance() {
        let (mut s, mut cfg, mut rng, mut ev) = setup();
        cfg.investigation.clue_chance = 1.0;
        s.player_location = MapLocation::InvestigationHq;
        let out = perform_action(&mut s, PlaceAction::Investigate, &cfg, &mut rng, &mut ev);
        // Level 1 has no extra clue chance.
        assert_eq!(out, Ok(ActionOutcome::Investigated { clues_found: 1 }));
        assert_eq!(s.clues, 1);
        assert_eq!(s.stress, 2);
        assert_eq!(s.proficiencies.investigation.exp, 3);
    }

    #[test]
    fn actions_run_out() {
        let (mut s, cfg, mut rng, mut ev) = setup();
        s.player_location = MapLocation::Home;
        for _ in 0..MAX_PLAYER_ACTIONS {
            assert!(perform_action(&mut s, PlaceAction::Rest, &cfg, &mut rng, &mut ev).is_ok());
        }
        assert!(s.is_day_over());
        assert_eq!(
            perform_action(&mut s, PlaceAction::Rest, &cfg, &mut rng, &mut ev),
            Err(GameError::DayOver)
        );
    }
}

//! Fighter schedule - executes the day's planned slots one at a time

use rand::Rng;

use duskwatch_logic::config::BalanceConfig;
use duskwatch_logic::proficiency::ProficiencyType;
use duskwatch_logic::schedule::DaySlotType;

use crate::events::{GameEvent, SlotOutcome};
use crate::state::GameState;

/// Grant proficiency experience, recording a level-up event if one happens.
pub fn grant_proficiency_exp(
    state: &mut GameState,
    kind: ProficiencyType,
    amount: u32,
    events: &mut Vec<GameEvent>,
) {
    if let Some(level) = state.proficiencies.grant(kind, amount) {
        log::info!("{} proficiency reached Lv.{}", kind.name(), level);
        events.push(GameEvent::LevelUp { kind, level });
    }
}

/// Apply the effects of one schedule slot.
pub fn execute_slot<R: Rng>(
    state: &mut GameState,
    slot: DaySlotType,
    cfg: &BalanceConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> SlotOutcome {
    match slot {
        DaySlotType::Training(stat) => {
            let prof = state.proficiencies.training;
            let gain = state
                .stats
                .add(stat, cfg.training.base_amount, prof.training_stat_multiplier());
            let fatigue = cfg
                .training
                .fatigue
                .saturating_sub(prof.training_fatigue_reduction());
            state.add_fatigue(fatigue as i32);
            state.add_stress(cfg.training.stress as i32);
            grant_proficiency_exp(state, ProficiencyType::Training, cfg.training.exp, events);
            state.today_training_count += 1;
            SlotOutcome::Trained { stat, gain }
        }
        DaySlotType::PartTime => {
            let chance = cfg.part_time.big_success_chance
                + state.proficiencies.part_time.part_time_big_success_bonus();
            let big_success = rng.gen::<f32>() < chance;
            let gold = if big_success {
                cfg.part_time.big_success_reward
            } else {
                cfg.part_time.reward
            };
            state.earn_gold(gold);
            state.add_fatigue(cfg.part_time.fatigue as i32);
            grant_proficiency_exp(state, ProficiencyType::PartTime, cfg.part_time.exp, events);
            SlotOutcome::Worked { gold, big_success }
        }
        DaySlotType::Shop => SlotOutcome::Browsed,
        DaySlotType::Investigation => {
            state.add_stress(cfg.investigation.stress as i32);
            grant_proficiency_exp(
                state,
                ProficiencyType::Investigation,
                cfg.investigation.exp,
                events,
            );
            SlotOutcome::Investigated
        }
        DaySlotType::Relationship => {
            state.add_stress(-(cfg.recovery.relationship_stress as i32));
            SlotOutcome::Socialized
        }
        DaySlotType::Rest => {
            state.add_fatigue(-(cfg.recovery.day_rest_fatigue as i32));
            state.add_stress(-(cfg.recovery.day_rest_stress as i32));
            SlotOutcome::Rested
        }
    }
}

/// Run the next pending slot, if any. Returns its index and outcome.
pub fn advance_fighter<R: Rng>(
    state: &mut GameState,
    cfg: &BalanceConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<(usize, SlotOutcome)> {
    let index = state.fighter_slot_progress;
    let slot = state.schedule.get(index)?;
    let outcome = execute_slot(state, slot, cfg, rng, events);
    state.fighter_slot_progress += 1;
    log::debug!("day {} slot {} {}: {:?}", state.day, index + 1, slot.label(), outcome);
    events.push(GameEvent::SlotExecuted {
        index,
        slot,
        outcome,
    });
    Some((index, outcome))
}

/// Run every slot not yet executed today.
pub fn finish_fighter_day<R: Rng>(
    state: &mut GameState,
    cfg: &BalanceConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut ran = 0;
    while advance_fighter(state, cfg, rng, events).is_some() {
        ran += 1;
    }
    ran
}

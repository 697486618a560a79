//! Random lottery pick generation.
//!
//! Picks are synthesized locally, uniform over each game's rule (see
//! [`Game::pick_rule`]); nothing here touches the network.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{LotteryError, Result};
use crate::games::{Game, GroupRule, PickRule};

/// One synthesized lottery entry.
///
/// `groups` holds one comma-joined number string per ball group, e.g.
/// `["03,07,14,22,28,31", "09"]` for a 双色球 pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomPick {
    pub game: Game,
    pub groups: Vec<String>,
}

impl fmt::Display for RandomPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.game, self.groups.join(" + "))
    }
}

/// Generate `amount` random picks for `game`.
///
/// Fails with [`LotteryError::InvalidAmount`] when `amount` is zero.
pub fn random_picks(game: Game, amount: usize) -> Result<Vec<RandomPick>> {
    if amount < 1 {
        return Err(LotteryError::InvalidAmount { amount });
    }
    let mut rng = rand::thread_rng();
    Ok((0..amount).map(|_| random_pick(game, &mut rng)).collect())
}

/// Generate one random pick for `game` from the given RNG.
pub fn random_pick<R: Rng>(game: Game, rng: &mut R) -> RandomPick {
    let groups = match game.pick_rule() {
        PickRule::Groups(rules) => rules
            .iter()
            .map(|rule| {
                let mut numbers = sample_group(rng, rule);
                numbers.sort_unstable();
                join(&numbers)
            })
            .collect(),
        PickRule::Digits(count) => vec![digit_string(rng, count)],
        PickRule::DigitsWithExtra { digits, extra_max } => vec![
            digit_string(rng, digits),
            rng.gen_range(0..=extra_max).to_string(),
        ],
        PickRule::SetWithHeldExtra { count, max } => {
            // count + 1 numbers come out of one pool; the last drawn is the
            // extra, not a resample.
            let rule = GroupRule { count: count + 1, min: 1, max };
            let mut numbers = sample_group(rng, &rule);
            let extra = numbers.pop().unwrap_or_default();
            numbers.sort_unstable();
            vec![join(&numbers), extra.to_string()]
        }
    };
    RandomPick { game, groups }
}

/// Draw `rule.count` distinct numbers from `[rule.min, rule.max]`, in draw
/// order (not sorted).
fn sample_group<R: Rng>(rng: &mut R, rule: &GroupRule) -> Vec<u32> {
    let mut pool: Vec<u32> = (rule.min..=rule.max).collect();
    let (picked, _) = pool.partial_shuffle(rng, rule.count);
    picked.to_vec()
}

fn digit_string<R: Rng>(rng: &mut R, count: usize) -> String {
    let digits: Vec<String> = (0..count)
        .map(|_| rng.gen_range(0..=9u32).to_string())
        .collect();
    digits.join(",")
}

fn join(numbers: &[u32]) -> String {
    let parts: Vec<String> = numbers.iter().map(u32::to_string).collect();
    parts.join(",")
}

#[cfg(test)]
mod tests;

//! Integration tests for random pick generation

use lotterycn::{random_picks, Game, LotteryError};
use std::collections::HashSet;

fn parse_group(group: &str) -> Vec<u32> {
    group.split(',').map(|n| n.parse().unwrap()).collect()
}

#[test]
fn test_every_game_generates_requested_amount() {
    for game in Game::all() {
        let picks = random_picks(game, 25).unwrap();
        assert_eq!(picks.len(), 25);
        for pick in &picks {
            assert_eq!(pick.game, game);
            assert!(!pick.groups.is_empty());
        }
    }
}

#[test]
fn test_zero_amount_is_rejected_for_every_game() {
    for game in Game::all() {
        let err = random_picks(game, 0).unwrap_err();
        assert!(matches!(err, LotteryError::InvalidAmount { amount: 0 }));
    }
}

#[test]
fn test_ssq_single_pick_scenario() {
    let picks = random_picks(Game::Ssq, 1).unwrap();
    assert_eq!(picks.len(), 1);

    let red = parse_group(&picks[0].groups[0]);
    assert_eq!(red.len(), 6);
    assert!(red.windows(2).all(|w| w[0] < w[1]), "red balls not ascending");
    let unique: HashSet<u32> = red.iter().copied().collect();
    assert_eq!(unique.len(), 6, "red balls not distinct");
    assert!(red.iter().all(|&n| (1..=33).contains(&n)));

    let blue = parse_group(&picks[0].groups[1]);
    assert_eq!(blue.len(), 1);
    assert!((1..=16).contains(&blue[0]));
}

#[test]
fn test_without_replacement_groups_have_no_duplicates() {
    for game in [Game::Ssq, Game::Qlc, Game::Kl8, Game::Dlt] {
        for pick in random_picks(game, 50).unwrap() {
            let numbers = parse_group(&pick.groups[0]);
            let unique: HashSet<u32> = numbers.iter().copied().collect();
            assert_eq!(unique.len(), numbers.len(), "{game}: {numbers:?}");
        }
    }
}

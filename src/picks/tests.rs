//! Unit tests for random pick generation

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn parse_group(group: &str) -> Vec<u32> {
    group
        .split(',')
        .map(|n| n.parse().expect("numeric pick"))
        .collect()
}

fn assert_distinct_ascending(numbers: &[u32], min: u32, max: u32) {
    let unique: HashSet<u32> = numbers.iter().copied().collect();
    assert_eq!(unique.len(), numbers.len(), "duplicates in {numbers:?}");
    assert!(numbers.windows(2).all(|w| w[0] < w[1]), "not ascending: {numbers:?}");
    assert!(numbers.iter().all(|&n| (min..=max).contains(&n)));
}

#[test]
fn test_zero_amount_fails() {
    let err = random_picks(Game::Ssq, 0).unwrap_err();
    assert!(matches!(err, LotteryError::InvalidAmount { amount: 0 }));
}

#[test]
fn test_amount_is_respected() {
    for game in Game::all() {
        assert_eq!(random_picks(game, 7).unwrap().len(), 7);
    }
}

#[test]
fn test_ssq_pick_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pick = random_pick(Game::Ssq, &mut rng);
        assert_eq!(pick.groups.len(), 2);
        let red = parse_group(&pick.groups[0]);
        assert_eq!(red.len(), 6);
        assert_distinct_ascending(&red, 1, 33);
        let blue = parse_group(&pick.groups[1]);
        assert_eq!(blue.len(), 1);
        assert!((1..=16).contains(&blue[0]));
    }
}

#[test]
fn test_qlc_extra_is_held_out_not_resampled() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let pick = random_pick(Game::Qlc, &mut rng);
        assert_eq!(pick.groups.len(), 2);
        let basic = parse_group(&pick.groups[0]);
        assert_eq!(basic.len(), 7);
        assert_distinct_ascending(&basic, 1, 30);
        let extra: u32 = pick.groups[1].parse().unwrap();
        assert!((1..=30).contains(&extra));
        // all 8 came from one without-replacement draw
        assert!(!basic.contains(&extra));
    }
}

#[test]
fn test_kl8_pick_shape() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..100 {
        let pick = random_pick(Game::Kl8, &mut rng);
        assert_eq!(pick.groups.len(), 1);
        let numbers = parse_group(&pick.groups[0]);
        assert_eq!(numbers.len(), 20);
        assert_distinct_ascending(&numbers, 1, 80);
    }
}

#[test]
fn test_digit_games_allow_repeats() {
    let mut rng = StdRng::seed_from_u64(17);
    for (game, count) in [(Game::ThreeD, 3), (Game::Pls, 3), (Game::Plw, 5)] {
        let mut saw_repeat = false;
        for _ in 0..500 {
            let pick = random_pick(game, &mut rng);
            assert_eq!(pick.groups.len(), 1);
            let digits = parse_group(&pick.groups[0]);
            assert_eq!(digits.len(), count);
            assert!(digits.iter().all(|&d| d <= 9));
            let unique: HashSet<u32> = digits.iter().copied().collect();
            saw_repeat |= unique.len() < digits.len();
        }
        // with-replacement digits must be able to repeat
        assert!(saw_repeat, "{game} never produced a repeated digit");
    }
}

#[test]
fn test_dlt_pick_shape() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..200 {
        let pick = random_pick(Game::Dlt, &mut rng);
        assert_eq!(pick.groups.len(), 2);
        let front = parse_group(&pick.groups[0]);
        assert_eq!(front.len(), 5);
        assert_distinct_ascending(&front, 1, 35);
        let back = parse_group(&pick.groups[1]);
        assert_eq!(back.len(), 2);
        assert_distinct_ascending(&back, 1, 12);
    }
}

#[test]
fn test_qxc_pick_shape() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let pick = random_pick(Game::Qxc, &mut rng);
        assert_eq!(pick.groups.len(), 2);
        let digits = parse_group(&pick.groups[0]);
        assert_eq!(digits.len(), 5);
        assert!(digits.iter().all(|&d| d <= 9));
        let extra: u32 = pick.groups[1].parse().unwrap();
        assert!(extra <= 14);
    }
}

#[test]
fn test_display_format() {
    let pick = RandomPick {
        game: Game::Ssq,
        groups: vec!["03,07,14,22,28,31".to_string(), "09".to_string()],
    };
    assert_eq!(pick.to_string(), "ssq: 03,07,14,22,28,31 + 09");
}

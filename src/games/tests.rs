//! Unit tests for game parsing, partitioning and rule data

use super::*;

#[test]
fn test_all_short_names_parse() {
    for game in Game::all() {
        let parsed: Game = game.short_name().parse().unwrap();
        assert_eq!(parsed, game);
    }
}

#[test]
fn test_unknown_game_fails() {
    let err = "powerball".parse::<Game>().unwrap_err();
    assert!(matches!(
        err,
        LotteryError::UnsupportedGame { ref game } if game == "powerball"
    ));
}

#[test]
fn test_welfare_sports_partition() {
    for game in WELFARE_GAMES {
        assert!(game.is_welfare());
        assert!(!game.is_sports());
        assert!(game.sports_game_no().is_none());
        assert!(game.earliest_draw_date().is_some());
    }
    for game in SPORTS_GAMES {
        assert!(game.is_sports());
        assert!(!game.is_welfare());
        assert!(game.sports_game_no().is_some());
        assert!(game.earliest_draw_date().is_none());
    }
}

#[test]
fn test_sports_game_codes() {
    assert_eq!(Game::Dlt.sports_game_no(), Some("85"));
    assert_eq!(Game::Pls.sports_game_no(), Some("35"));
    assert_eq!(Game::Plw.sports_game_no(), Some("350133"));
    assert_eq!(Game::Qxc.sports_game_no(), Some("04"));
}

#[test]
fn test_earliest_draw_dates() {
    assert_eq!(
        Game::Kl8.earliest_draw_date(),
        NaiveDate::from_ymd_opt(2020, 10, 28)
    );
    for game in [Game::Ssq, Game::Qlc, Game::ThreeD] {
        assert_eq!(
            game.earliest_draw_date(),
            NaiveDate::from_ymd_opt(2013, 1, 1)
        );
    }
}

#[test]
fn test_display_roundtrip() {
    assert_eq!(Game::ThreeD.to_string(), "3d");
    assert_eq!(Game::Ssq.to_string(), "ssq");
}

#[test]
fn test_serde_uses_short_names() {
    assert_eq!(serde_json::to_string(&Game::ThreeD).unwrap(), "\"3d\"");
    assert_eq!(
        serde_json::from_str::<Game>("\"dlt\"").unwrap(),
        Game::Dlt
    );
}

#[test]
fn test_pick_rules_shape() {
    match Game::Ssq.pick_rule() {
        PickRule::Groups(groups) => {
            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0], GroupRule { count: 6, min: 1, max: 33 });
            assert_eq!(groups[1], GroupRule { count: 1, min: 1, max: 16 });
        }
        rule => panic!("unexpected rule: {rule:?}"),
    }
    assert_eq!(
        Game::Qlc.pick_rule(),
        PickRule::SetWithHeldExtra { count: 7, max: 30 }
    );
    assert_eq!(Game::Pls.pick_rule(), PickRule::Digits(3));
    assert_eq!(Game::Plw.pick_rule(), PickRule::Digits(5));
    assert_eq!(
        Game::Qxc.pick_rule(),
        PickRule::DigitsWithExtra { digits: 5, extra_max: 14 }
    );
}

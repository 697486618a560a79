//! `random` command: generate and print random picks.

use crate::error::Result;
use crate::games::Game;
use crate::picks::random_picks;

pub fn handle_random(game: Game, amount: usize, as_json: bool) -> Result<()> {
    let picks = random_picks(game, amount)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
    } else {
        for pick in &picks {
            println!("{pick}");
        }
    }
    Ok(())
}

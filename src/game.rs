//! Interactive turn controller
//!
//! Round-robin loop over the roster: each turn the acting player picks a
//! category and difficulty, gets a randomly drawn question from that bucket,
//! and scores a point if the answer is correct. Correctly answered questions
//! leave the bank; wrong answers keep the question in play for a later draw
//! by any player. The game ends when the bank is empty.

use rand::Rng;
use std::io;

use crate::console::Console;
use crate::state::GameState;

pub struct TriviaGame<C, R> {
    state: GameState,
    console: C,
    rng: R,
}

impl<C: Console, R: Rng> TriviaGame<C, R> {
    pub fn new(state: GameState, console: C, rng: R) -> Self {
        Self {
            state,
            console,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Prompt for each player's name. An empty submission gets a generated
    /// two-word name so the scoreboard never shows blanks.
    pub fn setup_players(&mut self, count: usize) -> io::Result<()> {
        for number in 1..=count {
            let name = self
                .console
                .prompt(&format!("\nEnter name for player {number}: "))?;
            let name = if name.is_empty() {
                let generated =
                    petname::petname(2, "-").unwrap_or_else(|| format!("player-{number}"));
                self.console
                    .say(&format!("No name given, you will be known as {generated}."))?;
                generated
            } else {
                name
            };
            self.state.add_player(name);
        }
        Ok(())
    }

    /// Play until the bank is empty, then report final standings and the
    /// winner(s).
    pub fn run(&mut self) -> io::Result<()> {
        let mut turn: usize = 0;

        loop {
            let categories = self.state.available_categories();
            if categories.is_empty() {
                break;
            }

            // Round-robin, wrapping with modulo. Aborted turns still advance
            // to the next player.
            let player_index = turn % self.state.player_count();
            turn += 1;
            let player_name = self.state.players()[player_index].name().to_string();

            self.console.say("")?;
            self.console.say(&"=".repeat(30))?;
            self.console.say("")?;
            self.console.say(&format!("{player_name}'s turn:"))?;

            let category =
                categories[self.choose_option(&player_name, &categories, "category")?].clone();

            let difficulties = self.state.available_difficulties(&category);
            if difficulties.is_empty() {
                // The menu offered a category that already ran dry. Drop it
                // and hand the turn to the next player.
                self.state.remove_category(&category);
                continue;
            }
            let labels: Vec<String> = difficulties.iter().map(ToString::to_string).collect();
            let difficulty =
                difficulties[self.choose_option(&player_name, &labels, "difficulty")?];

            match self.state.draw_question(&category, difficulty, &mut self.rng) {
                Some(question) => {
                    if question.ask(&mut self.console)? {
                        self.console.say("\nCorrect!")?;
                        self.state
                            .award_point(player_index)
                            .map_err(io::Error::other)?;
                        self.state
                            .remove_question(&category, difficulty, question.id());
                    } else {
                        self.console.say("\nIncorrect :-(")?;
                    }
                }
                None => {
                    self.console.say(&format!(
                        "No more questions available in {category} at {difficulty} difficulty."
                    ))?;
                }
            }
        }

        self.report_final_scores()
    }

    /// Let the acting player pick one of the offered options, by 1-based
    /// number or exact case-insensitive text. Invalid input re-prompts
    /// indefinitely. Returns the chosen index.
    fn choose_option(
        &mut self,
        player_name: &str,
        options: &[String],
        kind: &str,
    ) -> io::Result<usize> {
        loop {
            self.console
                .say(&format!("\n{player_name}, choose a {kind}:"))?;
            for (index, option) in options.iter().enumerate() {
                self.console.say(&format!("{}. {}", index + 1, option))?;
            }

            let choice = self
                .console
                .prompt(&format!("Enter the number or name of your {kind} choice: "))?;

            if let Ok(number) = choice.parse::<usize>() {
                if (1..=options.len()).contains(&number) {
                    return Ok(number - 1);
                }
            } else {
                let lowered = choice.to_lowercase();
                if let Some(index) = options.iter().position(|o| o.to_lowercase() == lowered) {
                    return Ok(index);
                }
            }

            self.console.say("Invalid choice. Please try again.")?;
        }
    }

    fn report_final_scores(&mut self) -> io::Result<()> {
        self.console.say("\nGame over! Final scores:")?;
        for (name, score) in self.state.standings() {
            self.console.say(&format!("  {name}: {score}"))?;
        }

        let high_score = self.state.high_score();
        let winners: Vec<&str> = self.state.winners().iter().map(|p| p.name()).collect();
        let line = if winners.len() == 1 {
            format!("\nThe winner is: {} with {} points.", winners[0], high_score)
        } else {
            format!(
                "\nThe winners are: {} with {} points.",
                winners.join(", "),
                high_score
            )
        };
        self.console.say(&line)
    }
}

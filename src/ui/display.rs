//! Terminal rendering of the map and battle results

use std::io::{self, Write};

use crate::combat::resolution::{BattleReport, RoundWinner};
use crate::core::error::ConquestError;
use crate::game::state::FinishReason;
use crate::map::Territory;
use crate::ui::MapView;

const RULE: &str = "+----+------------+----------+--------+";

/// Writes the game to any `Write` sink, normally stdout
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_banner(&mut self, territory_count: usize) -> io::Result<()> {
        writeln!(self.out, "\n=== CONQUEST ===")?;
        writeln!(
            self.out,
            "Player 1 vs Player 2 across {} territories.",
            territory_count
        )?;
        writeln!(
            self.out,
            "Battles are decided by one die each; ties go to the defender."
        )?;
        writeln!(self.out, "A territory needs at least 2 troops to attack.")?;
        self.out.flush()
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> MapView for ConsoleView<W> {
    fn show_map(&mut self, territories: &[Territory]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(
            self.out,
            "| {:>2} | {:<10} | {:<8} | {:>6} |",
            "ID", "Territory", "Owner", "Troops"
        )?;
        writeln!(self.out, "{}", RULE)?;
        for territory in territories {
            writeln!(
                self.out,
                "| {:>2} | {:<10} | {:<8} | {:>6} |",
                territory.id.0,
                territory.name,
                territory.owner.to_string(),
                territory.troops
            )?;
        }
        writeln!(self.out, "{}", RULE)?;
        self.out.flush()
    }

    fn show_battle(
        &mut self,
        attacker: &Territory,
        defender: &Territory,
        report: &BattleReport,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "\nBattle: {} attacks territory {}",
            attacker.name, defender.id
        )?;
        writeln!(
            self.out,
            "  Attacker rolls {}, defender rolls {}",
            report.attacker_roll, report.defender_roll
        )?;
        let verdict = match report.winner {
            RoundWinner::Attacker => "Attacker wins the round; the defender loses 1 troop.",
            RoundWinner::Defender => "Defender wins the round; the attacker loses 1 troop.",
            RoundWinner::Tie => "Tie goes to the defender; the attacker loses 1 troop.",
        };
        writeln!(self.out, "  {}", verdict)?;
        writeln!(
            self.out,
            "  {} has {} troops | {} has {} troops",
            attacker.name, report.attacker_troops, defender.name, report.defender_troops
        )?;
        if report.conquered {
            writeln!(
                self.out,
                "  Conquest! Territory {} now belongs to {} as {}.",
                defender.id, defender.owner, defender.name
            )?;
        }
        self.out.flush()
    }

    fn show_rejection(&mut self, error: &ConquestError) -> io::Result<()> {
        writeln!(self.out, "\n{}. Try again.", error)?;
        self.out.flush()
    }

    fn show_finish(&mut self, reason: FinishReason) -> io::Result<()> {
        match reason {
            FinishReason::Conquered { winner } => {
                writeln!(self.out, "\nGame over! {} conquered every territory.", winner)?
            }
            FinishReason::UserExit => writeln!(self.out, "\nLeaving the game...")?,
            FinishReason::TurnLimit => writeln!(self.out, "\nTurn limit reached.")?,
        }
        self.out.flush()
    }
}

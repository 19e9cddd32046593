#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use naval_duel::prelude::*;
#[cfg(feature = "std")]
use naval_duel::{init_logging, SHIPS};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players share this terminal and take turns.
    Play {
        #[arg(long, default_value = "player1")]
        player1: String,
        #[arg(long, default_value = "player2")]
        player2: String,
        #[arg(long, help = "Place ships by hand instead of at random")]
        manual: bool,
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(anyhow::anyhow!("input closed")),
    }
}

#[cfg(feature = "std")]
async fn place_fleet(
    handle: &GameHandle<String>,
    who: &String,
    rng: &mut SmallRng,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    println!("\n{}, place your ships. Enter `<coord> <y|n>` (vertical?), or ENTER for random.", who);
    for def in SHIPS.iter() {
        loop {
            let view = handle.view(who, true).await?;
            println!("{}", view);
            let line = prompt(lines, &format!("{} (length {}): ", def.name(), def.length()))?;
            if line.is_empty() {
                let slot = handle.with_engine(|e| e.seat_of(who)).await?;
                handle.with_engine(|e| e.auto_place(slot, rng)).await?;
                return Ok(());
            }
            let mut parts = line.split_whitespace();
            let origin = parts.next().unwrap_or_default();
            let Some(orientation) = parts.next().and_then(Orientation::from_vertical_answer) else {
                println!("Answer `y` or `n` after the coordinate.");
                continue;
            };
            match handle.submit_placement(who, def.name(), origin, orientation).await {
                Ok(_) => break,
                Err(e) => println!("{}, try again.", e),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player1,
            player2,
            manual,
            seed,
        } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            let names = [player1.clone(), player2.clone()];

            let handle = if manual {
                let handle = GameHandle::new(TurnEngine::new(player1, player2));
                for who in names.iter() {
                    place_fleet(&handle, who, &mut rng, &mut lines).await?;
                }
                handle
            } else {
                GameHandle::new(
                    TurnEngine::with_random_placement(player1, player2, &mut rng)
                        .map_err(|e| anyhow::anyhow!(e))?,
                )
            };

            while !handle.status().await.is_terminal() {
                let turn = handle.with_engine(|e| e.turn()).await;
                let who = &names[match turn {
                    PlayerSlot::One => 0,
                    PlayerSlot::Two => 1,
                }];
                let other = &names[match turn {
                    PlayerSlot::One => 1,
                    PlayerSlot::Two => 0,
                }];

                println!("\n===== {}'s turn =====", who);
                println!("Opponent board:\n{}", handle.target_view(who).await?);
                println!("\nYour board:\n{}", handle.view(who, true).await?);
                let line = prompt(&mut lines, "Target (e.g. a8) or `cancel`: ")?;

                if line.eq_ignore_ascii_case("cancel") {
                    handle.request_cancel(who).await?;
                    let answer = prompt(&mut lines, &format!("{}, cancel the game too? (y/n): ", other))?;
                    if answer.eq_ignore_ascii_case("y") {
                        handle.request_cancel(other).await?;
                    }
                    continue;
                }

                match handle.submit_shot(who, &line).await {
                    Ok(report) => {
                        match report.outcome {
                            ShotOutcome::Miss => println!("({}) was a miss.", report.coord),
                            ShotOutcome::Hit => println!("({}) was a hit!", report.coord),
                            ShotOutcome::HitAndSunk(name) => {
                                println!("({}) was a hit, you sank their {}!", report.coord, name)
                            }
                        }
                        if let Some(winner) = report.winner {
                            println!("{} ({}) wins!", who, winner);
                        }
                    }
                    Err(EngineError::InvalidCoordinate) => {
                        println!("`{}` is not a valid coordinate! Try something like a8.", line);
                    }
                    Err(e) => println!("{}", e),
                }
            }

            let final_state = handle.snapshot().await;
            if final_state.status == GameStatus::Cancelled {
                println!("\n**GAME OVER**, cancelled");
            }
            for (name, player) in names.iter().zip(final_state.players.iter()) {
                println!("\n--- {}'s log ---\n{}", name, player.log.render());
            }
        }
    }
    Ok(())
}

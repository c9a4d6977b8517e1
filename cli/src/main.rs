use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use engine::{Dice, EndState, PlayerMove, Session};

#[derive(Parser)]
#[command(name = "skirmish-cli")]
#[command(about = "Text-driven turn-based skirmish")]
struct Cli {
    /// RNG seed for a reproducible session (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let dice = match cli.seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    };
    let mut session = Session::new(dice);

    show_roster(&session);
    println!("PICK A CHARACTER");
    println!("TYPE 'HELP' FOR HELP");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while session.outcome().is_none() {
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut tokens = line.split_whitespace().map(str::to_uppercase);
        let Some(command) = tokens.next() else { continue };
        match command.as_str() {
            "PICK" => match tokens.next() {
                Some(name) => match session.select_character(&name) {
                    Ok(chara) => println!(
                        "PICKED {} THE {}",
                        chara.name,
                        chara.class.as_str().to_uppercase()
                    ),
                    Err(err) => println!("{err}"),
                },
                None => println!("PICK <NAME>"),
            },
            "SHOWALL" => show_roster(&session),
            "MOVE" => {
                println!("YOUR MOVE: ATTACK <NAME> | HEAL <NAME> | SKIP");
                let Some(inner) = lines.next() else { break };
                let report = session.take_turn(parse_move(&inner?));
                if let Some(err) = report.error {
                    println!("{err}");
                }
                for entry in report.log {
                    println!("{entry}");
                }
            }
            "HELP" => show_help(),
            _ => {}
        }
    }

    match session.outcome() {
        Some(EndState::Victory) => println!("VICTORY"),
        Some(EndState::Defeat) => println!("YOU LOST"),
        None => {}
    }
    Ok(())
}

fn parse_move(line: &str) -> PlayerMove {
    let mut tokens = line.split_whitespace().map(str::to_uppercase);
    match tokens.next().as_deref() {
        Some("ATTACK") => match tokens.next() {
            Some(name) => PlayerMove::Attack(name),
            None => PlayerMove::Other,
        },
        Some("HEAL") => match tokens.next() {
            Some(name) => PlayerMove::Heal(name),
            None => PlayerMove::Other,
        },
        Some("SKIP") => PlayerMove::Pass,
        _ => PlayerMove::Other,
    }
}

fn show_roster(session: &Session) {
    let view = session.roster();
    println!("CHARACTERS:");
    for c in &view.characters {
        println!(
            "{} TYPE:{} HEALTH:{} DAMAGE:{}",
            c.name,
            c.class.as_str(),
            c.health,
            c.damage
        );
    }
    println!("ENEMIES:");
    for e in &view.enemies {
        println!("{} HEALTH:{} DAMAGE:{}", e.name, e.health, e.damage);
    }
}

fn show_help() {
    println!("AVAILABLE COMMANDS (CASE DOES NOT MATTER):");
    println!("PICK <NAME>   pick the character your next moves act through");
    println!("SHOWALL       list every living character and enemy");
    println!("MOVE          make one move: ATTACK <NAME>, HEAL <NAME> (priest only), or SKIP");
    println!("HELP          this summary");
    println!("AFTER EVERY MOVE THE ENEMIES STRIKE A RANDOM CHARACTER");
}

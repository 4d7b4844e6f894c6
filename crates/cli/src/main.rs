use baccarat_core::{
    Bet, BetSelection, Card, Event, EventBus, GameConfig, Outcome, RngState, RoundSummary,
    Session, SessionError, Side,
};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    seed: Option<u64>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut seed = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions { seed }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Banker => "Banker",
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "Player",
        Outcome::BankerWin => "Banker",
        Outcome::Tie => "Tie",
    }
}

fn prompt_bet(session: &Session) -> Option<Bet> {
    println!();
    println!("Your wallet: ${}", session.state.wallet);
    println!("Choose your bet:");
    println!("1 - Player (2:1)");
    println!("2 - Banker (2:1)");
    println!("3 - Tie (8:1)");
    let selection = loop {
        let line = read_line("Enter your choice (1, 2, or 3): ")?;
        match line.as_str() {
            "1" => break BetSelection::Player,
            "2" => break BetSelection::Banker,
            "3" => break BetSelection::Tie,
            _ => println!("Invalid selection. Please enter 1, 2, or 3."),
        }
    };
    let amount = loop {
        let line = read_line("Enter your bet amount: ")?;
        match line.parse::<i64>() {
            Ok(amount) if amount > 0 => break amount,
            _ => println!("The bet amount must be a positive number."),
        }
    };
    Some(Bet { selection, amount })
}

fn print_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::DeckReshuffled { cards } => {
                println!("The shoe is reshuffled ({cards} cards).")
            }
            Event::CardDealt { side, card } => println!("{} draws: {card}", side_label(side)),
            Event::ThirdCardDrawn { side, card, score } => println!(
                "{} draws a third card on {score}: {card}",
                side_label(side)
            ),
            Event::RoundSettled { .. } | Event::SessionEnded { .. } => {}
        }
    }
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_table(summary: &RoundSummary) {
    println!("~~~~~~~~~~~~~~~~~ Baccarat Table ~~~~~~~~~~~~~~~~~");
    println!("Player hand: {}", format_hand(&summary.player_hand));
    println!("Banker hand: {}", format_hand(&summary.banker_hand));
    println!("Player score: {}", summary.player_score);
    println!("Banker score: {}", summary.banker_score);
    println!("~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~");
    println!("Result: {}", outcome_label(summary.outcome));
    if summary.delta > 0 {
        println!("You won! +${}", summary.delta);
    } else if summary.delta < 0 {
        println!("You lost! -${}", -summary.delta);
    } else {
        println!("It's a tie! Your bet is returned (push).");
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut session = Session::new(GameConfig::default(), rng);
    let mut events = EventBus::default();

    println!("Welcome to Casino Baccarat!");
    loop {
        if session.is_over() {
            println!("Unfortunately you have run out of money! Time to head home from the casino.");
            break;
        }
        let Some(bet) = prompt_bet(&session) else {
            break;
        };
        match session.play_round(bet, &mut events) {
            Ok(summary) => {
                print_events(&mut events);
                display_table(&summary);
            }
            Err(SessionError::InsufficientFunds { bet, wallet }) => {
                println!("You cannot bet ${bet} with only ${wallet}! Try again.");
                continue;
            }
            Err(err) => {
                print_events(&mut events);
                eprintln!("round error: {err}");
                break;
            }
        }
        if session.is_over() {
            continue;
        }
        let Some(answer) = read_line("Play another round? (y/n): ") else {
            break;
        };
        if !answer.eq_ignore_ascii_case("y") {
            break;
        }
    }
    println!("Game over! Final wallet: ${}", session.state.wallet);
}

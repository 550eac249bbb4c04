// src/bin/blackjack_autoplay.rs
//
// Self-play: играем N раундов, каждый ход берём из рекомендации MCTS,
// в конце печатаем статистику выигрышей.

use std::time::Instant;

use clap::Parser;
use log::{debug, info};

use blackjack_engine::domain::hand::RoundOutcome;
use blackjack_engine::engine::Move;
use blackjack_engine::{GameSession, SessionConfig};

/// Параметры прогона.
#[derive(Parser, Debug)]
#[command(name = "blackjack_autoplay", about = "Self-play блэкджека по советам MCTS")]
struct Args {
    /// Сколько раундов сыграть.
    #[arg(long, default_value_t = 1_000)]
    rounds: u32,

    /// Итераций MCTS на один совет (по умолчанию - из конфига).
    #[arg(long)]
    budget: Option<u32>,

    /// Seed сессии для воспроизводимого прогона.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-конфиг сессии.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    pushes: u32,
    losses: u32,
    hits: u32,
    searches_skipped: u32,
}

impl Tally {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Push => self.pushes += 1,
            RoundOutcome::Loss => self.losses += 1,
        }
    }

    fn played(&self) -> u32 {
        self.wins + self.pushes + self.losses
    }

    /// Средний результат на раунд (-1..1).
    fn expectation(&self) -> f64 {
        let played = self.played();
        if played == 0 {
            return 0.0;
        }
        (f64::from(self.wins) - f64::from(self.losses)) / f64::from(played)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("[AUTO] Не удалось прочитать {path}: {e}");
                    std::process::exit(2);
                }
            };
            match SessionConfig::from_json_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("[AUTO] Битый конфиг {path}: {e}");
                    std::process::exit(2);
                }
            }
        }
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let budget = args.budget.unwrap_or(config.default_budget);

    println!(
        "blackjack_autoplay: {} раундов, бюджет MCTS {} итераций.",
        args.rounds, budget
    );

    let mut session = GameSession::new(config);
    let mut tally = Tally::default();
    let started = Instant::now();

    for n in 0..args.rounds {
        if n > 0 {
            session.new_round();
        }

        while !session.round().is_player_over() {
            let rec = session.recommend(Some(budget));
            if rec.children.is_empty() {
                tally.searches_skipped += 1;
            }
            match rec.action {
                Move::Hit => {
                    tally.hits += 1;
                    if !session.hit() {
                        // Колода кончилась - дальше только stand.
                        session.stand();
                    }
                }
                Move::Stand => {
                    session.stand();
                }
            }
        }

        let outcome = session.outcome();
        session.dealer_play();
        debug!(
            "round {}: player {} ({}) vs dealer {} ({}) -> {:?}",
            session.round_id(),
            session.round().player,
            session.round().player_value(),
            session.round().dealer,
            session.round().dealer_value(),
            outcome
        );
        tally.record(outcome);

        if (n + 1) % 100 == 0 {
            info!("[AUTO] сыграно {} раундов, EV {:+.4}", n + 1, tally.expectation());
        }
    }

    let elapsed = started.elapsed();
    println!();
    println!("================ AUTOPLAY RESULT =================");
    println!("Раундов:   {}", tally.played());
    println!("Выигрыши:  {}", tally.wins);
    println!("Ничьи:     {}", tally.pushes);
    println!("Проигрыши: {}", tally.losses);
    println!("Hit-ов:    {}", tally.hits);
    println!("Советов без поиска: {}", tally.searches_skipped);
    println!("EV на раунд: {:+.4}", tally.expectation());
    println!("Время: {:.2?}", elapsed);
}

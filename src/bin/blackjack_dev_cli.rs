// src/bin/blackjack_dev_cli.rs
//
// Интерактивный dev-CLI: один игрок против дилера, совет от MCTS.
// Необязательный аргумент - путь к JSON-конфигу сессии.

use std::io::{self, BufRead, Write};

use blackjack_engine::domain::hand::{RoundOutcome, BLACKJACK};
use blackjack_engine::engine::Move;
use blackjack_engine::{GameSession, SessionConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("blackjack_dev_cli: стартуем блэкджек с советником MCTS…");

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] Не удалось прочитать конфиг {path}: {e}. Берём конфиг по умолчанию.");
                SessionConfig::default()
            }
        },
        None => SessionConfig::default(),
    };

    let mut session = GameSession::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_status(&session);

        let value = session.round().player_value();

        if value > BLACKJACK {
            println!("Перебор! Вы проиграли.");
            if !ask_play_again(&mut lines) {
                break;
            }
            session.new_round();
            continue;
        }

        if value == BLACKJACK {
            println!("21! Автоматический stand.");
            session.stand();
            finish_round(&mut session);
            if !ask_play_again(&mut lines) {
                break;
            }
            session.new_round();
            continue;
        }

        println!();
        println!("Действия:");
        println!("1. Hit");
        println!("2. Stand");
        println!("3. Спросить компьютер");
        println!("4. Отменить последний ход");
        println!("5. Новая игра");
        println!("6. Выход");

        let Some(choice) = prompt(&mut lines, "Ваш выбор (1-6): ") else {
            break;
        };

        match choice.as_str() {
            "1" => apply_hit(&mut session),
            "2" => {
                session.stand();
                finish_round(&mut session);
                if !ask_play_again(&mut lines) {
                    break;
                }
                session.new_round();
            }
            "3" => {
                let budget = session.config().default_budget;
                println!("Компьютер думает…");
                let rec = session.recommend(Some(budget));

                println!();
                println!("Результаты MCTS после {budget} симуляций:");
                for child in &rec.children {
                    println!(
                        "Ход: {}, визитов: {}, win rate: {:.3}",
                        child.action,
                        child.visits,
                        child.win_rate()
                    );
                }
                println!("Компьютер советует: {}", rec.action);

                match rec.action {
                    Move::Hit => apply_hit(&mut session),
                    Move::Stand => {
                        session.stand();
                        finish_round(&mut session);
                        if !ask_play_again(&mut lines) {
                            break;
                        }
                        session.new_round();
                    }
                }
            }
            "4" => match session.try_undo() {
                Ok(mv) => println!("Ход {mv} отменён."),
                Err(e) => println!("Отменить нельзя: {e}"),
            },
            "5" => {
                session.new_round();
                println!("Новая игра.");
            }
            "6" => {
                println!("Спасибо за игру!");
                break;
            }
            _ => println!("Неизвестная команда, попробуйте ещё раз."),
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn load_config(path: &str) -> Result<SessionConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    SessionConfig::from_json_str(&text).map_err(|e| e.to_string())
}

fn apply_hit(session: &mut GameSession) {
    if !session.hit() {
        println!("Колода пуста — карту взять нельзя.");
    }
}

/// Итог раунда, затем дилер доигрывает в живом раунде - показываем его карты.
fn finish_round(session: &mut GameSession) {
    let outcome = session.outcome();
    session.dealer_play();

    let round = session.round();
    println!();
    println!(
        "Карты дилера: {} (очки: {})",
        round.dealer,
        round.dealer_value()
    );

    match outcome {
        RoundOutcome::Win => println!("Вы выиграли!"),
        RoundOutcome::Loss => println!("Дилер выиграл!"),
        RoundOutcome::Push => println!("Ничья!"),
    }
}

fn print_status(session: &GameSession) {
    let round = session.round();

    let upcard = round
        .upcard()
        .map(|c| c.pretty())
        .unwrap_or_else(|| "нет".to_string());
    let upcard_value = round.upcard().map_or(0, |c| c.points());
    let moves: Vec<String> = round.moves().iter().map(|m| m.to_string()).collect();

    println!();
    println!(
        "Раунд {}: карты игрока {} (очки: {})",
        session.round_id(),
        round.player,
        round.player_value()
    );
    println!("Дилер показывает: {upcard} (очки: {upcard_value})");
    println!("Ходы: [{}]", moves.join(", "));
}

fn ask_play_again<B: BufRead>(lines: &mut io::Lines<B>) -> bool {
    loop {
        let Some(choice) = prompt(lines, "\nСыграть ещё? (y/n): ") else {
            return false;
        };
        match choice.to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => {
                println!("Спасибо за игру!");
                return false;
            }
            _ => println!("Введите 'y' или 'n'."),
        }
    }
}

/// Прочитать строку ответа. `None` на EOF или ошибке ввода.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

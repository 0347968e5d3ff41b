//! Terminal client for the scavenger simulation.
//!
//! A line-oriented frontend over [`game_core::GameSession`]: reads commands
//! from stdin, dispatches them as player actions, and prints the session
//! events that come back. Each command also advances the world clock by one
//! second so survival pressure and the day cycle move with play.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::ContentBundle;
use game_core::combat::battle::BattleAction;
use game_core::combat::skirmish::Direction;
use game_core::env::{Env, PcgRng};
use game_core::{
    GameConfig, GameSession, InteractTarget, Mode, PlayerAction, SessionError, SessionEvent,
    StationKind,
};

/// Wall-clock seconds fed to the simulation per accepted command.
const SECS_PER_COMMAND: f64 = 1.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = match std::env::var("SCAVENGER_SEED") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("SCAVENGER_SEED must be an unsigned integer")?,
        Err(_) => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    };

    let bundle = match std::env::var_os("SCAVENGER_CONTENT") {
        Some(dir) => ContentBundle::from_files(&PathBuf::from(dir))
            .context("loading content overrides from SCAVENGER_CONTENT")?,
        None => ContentBundle::builtin().context("parsing built-in content")?,
    };
    let rng = PcgRng;
    let env = bundle.env(&rng);

    let mut session = GameSession::new("Village", GameConfig::default(), seed);
    tracing::info!(seed, "session started");

    println!("You wake in the Village. Type `help` for commands.");
    print_status(&session);

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        match run_command(&mut session, &env, line) {
            Ok(events) => {
                render_events(&session, &events);
                for event in session.advance(SECS_PER_COMMAND, &env) {
                    render_event(&session, &event);
                }
            }
            Err(err) => println!("! {err}"),
        }
    }
    println!("Safe travels, scavenger.");
    Ok(())
}

fn run_command(
    session: &mut GameSession,
    env: &Env,
    line: &str,
) -> Result<Vec<SessionEvent>, SessionError> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match verb {
        "help" => {
            print_help();
            Ok(Vec::new())
        }
        "status" => {
            print_status(session);
            Ok(Vec::new())
        }
        "inv" | "inventory" => {
            print_inventory(session);
            Ok(Vec::new())
        }
        "move" | "go" => {
            let dir = match rest.first().copied() {
                Some("up" | "u" | "north") => Direction::Up,
                Some("down" | "d" | "south") => Direction::Down,
                Some("left" | "l" | "west") => Direction::Left,
                Some("right" | "r" | "east") => Direction::Right,
                _ => {
                    println!("usage: move <up|down|left|right>");
                    return Ok(Vec::new());
                }
            };
            session.dispatch(PlayerAction::Move(dir), env)
        }
        "attack" | "swing" => session.dispatch(PlayerAction::Attack, env),
        "defend" => session.battle_action(BattleAction::Defend, env),
        "flee" => session.battle_action(BattleAction::Flee, env),
        "talk" => session.dispatch(PlayerAction::Interact(InteractTarget::EventMarker), env),
        "enter" => match parse_station(rest.first().copied().unwrap_or_default()) {
            Some(station) => {
                session.dispatch(PlayerAction::Interact(InteractTarget::Station(station)), env)
            }
            None => {
                println!(
                    "usage: enter <bank|merchant|market|tinker|workshop|trading|arena|gate>"
                );
                Ok(Vec::new())
            }
        },
        "confirm" | "next" => session.dispatch(PlayerAction::Confirm, env),
        "cancel" | "back" => session.dispatch(PlayerAction::Cancel, env),
        "pick" => match rest.first().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => session.dispatch(PlayerAction::SelectOption(n), env),
            None => {
                println!("usage: pick <option number>");
                Ok(Vec::new())
            }
        },
        "use" => session.dispatch(PlayerAction::UseItem(rest.join(" ")), env),
        "equip" => session.dispatch(PlayerAction::EquipItem(rest.join(" ")), env),
        "camp" => session.request_camp(),
        "wait" => {
            let secs = rest
                .first()
                .and_then(|n| n.parse::<f64>().ok())
                .unwrap_or(10.0);
            let events = session.advance(secs, env);
            render_events(session, &events);
            println!("The clock reads {:02}:00.", session.clock.hour());
            Ok(Vec::new())
        }
        "deposit" => {
            let (item, nums) = split_item_and_numbers(&rest, 2);
            match nums.as_slice() {
                [amount, duration] => {
                    session.deposit(env, &item, *amount as u32, *duration)
                }
                _ => {
                    println!("usage: deposit <item> <amount> <seconds>");
                    Ok(Vec::new())
                }
            }
        }
        "withdraw" => match rest.first().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => session.withdraw(n),
            None => {
                println!("usage: withdraw <deposit number>");
                Ok(Vec::new())
            }
        },
        "list" => {
            let (item, nums) = split_item_and_numbers(&rest, 1);
            match nums.as_slice() {
                [price] => session.list_item(&item, *price as u32),
                _ => {
                    println!("usage: list <item> <price>");
                    Ok(Vec::new())
                }
            }
        }
        "stock" => session.buy_merchant_stock(env, &rest.join(" ")),
        "buy" => match rest.split_first() {
            Some((category, item)) if !item.is_empty() => {
                session.buy_royal(env, category, &item.join(" "))
            }
            _ => {
                println!("usage: buy <category> <item>");
                Ok(Vec::new())
            }
        },
        "craft" => session.craft_item(env, &rest.join(" ")),
        "repair" => session.repair_item(&rest.join(" ")),
        "experiment" => {
            let parts: Vec<String> = rest
                .join(" ")
                .split(';')
                .map(|p| p.trim().to_owned())
                .filter(|p| !p.is_empty())
                .collect();
            match <[String; 3]>::try_from(parts) {
                Ok(ingredients) => session.run_experiment(env, &ingredients),
                Err(_) => {
                    println!("usage: experiment <item>; <item>; <item>");
                    Ok(Vec::new())
                }
            }
        }
        "salvage" => session.salvage_item(env, &rest.join(" ")),
        "trade" => {
            let joined = rest.join(" ");
            match joined.split_once(" for ") {
                Some((offer, request)) => session.post_trade(offer.trim(), request.trim()),
                None => {
                    println!("usage: trade <offer item> for <requested item>");
                    Ok(Vec::new())
                }
            }
        }
        "accept" => match rest.first().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => session.accept_trade(n),
            None => {
                println!("usage: accept <offer number>");
                Ok(Vec::new())
            }
        },
        other => {
            println!("unknown command `{other}`; type `help`");
            Ok(Vec::new())
        }
    }
}

/// Splits trailing integers off a command tail, returning the leading words
/// joined as an item name plus up to `max` parsed numbers.
fn split_item_and_numbers(rest: &[&str], max: usize) -> (String, Vec<u64>) {
    let mut nums = Vec::new();
    let mut end = rest.len();
    while end > 0 && nums.len() < max {
        match rest[end - 1].parse::<u64>() {
            Ok(n) => {
                nums.insert(0, n);
                end -= 1;
            }
            Err(_) => break,
        }
    }
    (rest[..end].join(" "), nums)
}

fn parse_station(name: &str) -> Option<StationKind> {
    match name {
        "bank" | "liquidity" => Some(StationKind::LiquidityBank),
        "merchant" => Some(StationKind::MerchantQuarter),
        "market" | "royal" => Some(StationKind::RoyalMarket),
        "tinker" | "lab" => Some(StationKind::TinkerersLab),
        "workshop" | "craft" => Some(StationKind::CraftingWorkshop),
        "trading" | "post" => Some(StationKind::TradingPost),
        "arena" | "battle" => Some(StationKind::BattleArena),
        "gate" => Some(StationKind::ScavengerGate),
        _ => None,
    }
}

fn render_events(session: &GameSession, events: &[SessionEvent]) {
    for event in events {
        render_event(session, event);
    }
}

fn render_event(session: &GameSession, event: &SessionEvent) {
    match event {
        SessionEvent::DialogRequested { text, options } => {
            println!("{text}");
            for (i, option) in options.iter().enumerate() {
                println!("  [{i}] {option}");
            }
        }
        SessionEvent::LogAppended(line) => println!("* {line}"),
        SessionEvent::PlayerDeath => {
            println!("Everything goes dark. You wake on a cot in the Village, pack gone.");
        }
        SessionEvent::ZoneTransitionRequested { zone, .. } => {
            println!("-- {zone} --");
        }
        SessionEvent::BattleStateChanged => {
            if let Some(battle) = &session.battle {
                println!(
                    "{} (lv {})  {}/{} hp  |  you: {} hp",
                    battle.enemy.name,
                    battle.enemy.level,
                    battle.enemy.health,
                    battle.enemy.max_health,
                    session.stats.health,
                );
            }
        }
        SessionEvent::StatsChanged
        | SessionEvent::InventoryChanged
        | SessionEvent::EffectRequested(_) => {}
    }
}

fn print_status(session: &GameSession) {
    let s = &session.stats;
    println!(
        "{} | lv {} ({} exp) | hp {} sta {} hun {} thi {} | {} oromozi | {:02}:00",
        s.current_zone,
        s.level,
        s.experience,
        s.health,
        s.stamina,
        s.hunger,
        s.thirst,
        s.oromozi,
        session.clock.hour(),
    );
    if session.mode() != Mode::None {
        println!("mode: {}", session.mode());
    }
}

fn print_inventory(session: &GameSession) {
    if session.inventory.is_empty() {
        println!("Your pack is empty.");
        return;
    }
    for stack in session.inventory.stacks() {
        let equipped = if session.equipment.is_equipped(&stack.name) {
            " [equipped]"
        } else {
            ""
        };
        println!("  {} x{}{equipped}", stack.name, stack.quantity);
    }
}

fn print_help() {
    println!(
        "\
movement    move <dir>, attack, talk, enter <station>, camp, wait [secs]
dialogs     confirm, cancel, pick <n>, use <item>, equip <item>
battle      attack, defend, flee, use <item>
bank        deposit <item> <amt> <secs>, withdraw <n>
merchant    list <item> <price>, stock <item>
market      buy <category> <item>
workshop    craft <item>, repair <item>
tinker      experiment <a>; <b>; <c>, salvage <item>
trading     trade <offer> for <request>, accept <n>
            status, inv, help, quit"
    );
}

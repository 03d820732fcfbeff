//! Interactive study session.
//!
//! One task owns the session and `select!`s over the one-second clock and
//! stdin, so every call into the core is serialized. The clock branch is
//! polled first: a command racing the last second sees the expired session.

use std::time::Duration;

use cardpile_core::{
    BlobStore, CardStore, Config, Database, Event, Outcome, StudySession, Thresholds,
};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant};

#[derive(Args)]
pub struct StudyArgs {
    /// Do not run the real-time clock; time only advances with `tick`
    #[arg(long)]
    no_clock: bool,
    /// Session length in seconds (overrides config)
    #[arg(long)]
    duration: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Right,
    Left,
    Cancel,
    Drag(f64),
    Tap,
    Tick(u64),
    Background,
    Foreground,
    Reset,
    Status,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".into());
    };
    let arg = words.next();
    let command = match verb {
        "right" | "r" => Command::Right,
        "left" | "l" => Command::Left,
        "cancel" | "c" => Command::Cancel,
        "drag" => {
            let dx = arg.ok_or("drag needs a displacement")?;
            Command::Drag(dx.parse().map_err(|_| format!("bad displacement '{dx}'"))?)
        }
        "tap" | "t" => Command::Tap,
        "tick" => match arg {
            Some(n) => Command::Tick(n.parse().map_err(|_| format!("bad tick count '{n}'"))?),
            None => Command::Tick(1),
        },
        "bg" | "background" => Command::Background,
        "fg" | "foreground" => Command::Foreground,
        "reset" => Command::Reset,
        "status" | "s" => Command::Status,
        "quit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn emit(events: impl IntoIterator<Item = Event>) -> Result<(), serde_json::Error> {
    for event in events {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

fn status(session: &StudySession) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(&session.snapshot())?);
    Ok(())
}

/// Apply one command. Returns `false` when the session should end.
fn handle<S: BlobStore>(
    session: &mut StudySession,
    store: &CardStore<S>,
    thresholds: Thresholds,
    command: Command,
) -> Result<bool, serde_json::Error> {
    tracing::debug!(?command, "study command");
    match command {
        Command::Right => emit(session.judge_top(Outcome::SwipedRight))?,
        Command::Left => emit(session.judge_top(Outcome::SwipedLeft))?,
        Command::Cancel => emit(session.judge_top(Outcome::Cancelled))?,
        Command::Drag(dx) => match session.begin_drag(thresholds) {
            Some(mut drag) => {
                drag.update(dx);
                emit(session.on_gesture(drag.end()))?;
            }
            None => tracing::debug!(phase = ?session.phase(), "drag not accepted"),
        },
        Command::Tap => emit(session.toggle_answer())?,
        Command::Tick(n) => emit(session.on_ticks(n))?,
        Command::Background => emit(session.on_foreground_change(false))?,
        Command::Foreground => emit(session.on_foreground_change(true))?,
        Command::Reset => emit([session.reload(store)])?,
        Command::Status => status(session)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

async fn study_loop<S: BlobStore>(
    session: &mut StudySession,
    store: &CardStore<S>,
    thresholds: Thresholds,
    clock_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let period = Duration::from_secs(1);
    let mut clock = interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            biased;
            _ = clock.tick(), if clock_enabled => {
                emit(session.on_tick())?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(command) => {
                        if !handle(session, store, thresholds, command)? {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(line = %line, "rejected study command");
                        eprintln!("{e}");
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn run(args: StudyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let store = CardStore::with_key(&db, config.storage.cards_key.clone());
    let duration = args.duration.unwrap_or(config.session.duration_secs);

    let mut session = StudySession::with_duration(Vec::new(), duration);
    emit([session.reload(&store)])?;
    status(&session)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(study_loop(
        &mut session,
        &store,
        config.thresholds(),
        !args.no_clock,
    ))?;

    status(&session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpile_core::{Card, MemoryStore, Phase};

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("right"), Ok(Command::Right));
        assert_eq!(parse_command(" l "), Ok(Command::Left));
        assert_eq!(parse_command("drag -120.5"), Ok(Command::Drag(-120.5)));
        assert_eq!(parse_command("tick"), Ok(Command::Tick(1)));
        assert_eq!(parse_command("tick 7"), Ok(Command::Tick(7)));
        assert_eq!(parse_command("bg"), Ok(Command::Background));
        assert!(parse_command("drag").is_err());
        assert!(parse_command("tick x").is_err());
        assert!(parse_command("jump").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn handle_drives_session() {
        let mem = MemoryStore::new();
        let store = CardStore::new(&mem);
        store
            .save(&[Card::new("a", "1"), Card::new("b", "2")])
            .unwrap();
        let mut session = StudySession::default();
        session.reload(&store);

        let t = Thresholds::default();
        assert!(handle(&mut session, &store, t, Command::Drag(50.0)).unwrap());
        assert_eq!(session.deck().len(), 2);
        handle(&mut session, &store, t, Command::Drag(-150.0)).unwrap();
        assert_eq!(session.deck().len(), 1);
        handle(&mut session, &store, t, Command::Right).unwrap();
        assert_eq!(session.phase(), Phase::Exhausted);

        handle(&mut session, &store, t, Command::Reset).unwrap();
        assert_eq!(session.deck().len(), 2);
        assert!(!handle(&mut session, &store, t, Command::Quit).unwrap());
    }

    #[test]
    fn drag_after_expiry_leaves_pile() {
        let mem = MemoryStore::new();
        let store = CardStore::new(&mem);
        store.save(&[Card::new("a", "1")]).unwrap();
        let mut session = StudySession::with_duration(Vec::new(), 2);
        session.reload(&store);

        let t = Thresholds::default();
        handle(&mut session, &store, t, Command::Tick(u64::MAX)).unwrap();
        assert_eq!(session.phase(), Phase::Expired);
        handle(&mut session, &store, t, Command::Drag(500.0)).unwrap();
        assert_eq!(session.deck().len(), 1);
        assert_eq!(session.tally().correct, 0);
    }
}

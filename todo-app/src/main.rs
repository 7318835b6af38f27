//! Interactive console front-end for the to-do application.
//!
//! The front-end owns the monotonic id counter, trims and validates input
//! before dispatching, and renders through a subscribed listener so the
//! display follows every state change automatically.

use anyhow::Result;
use reflux_runtime::Store;
use std::io::{BufRead as _, Write as _};
use todo_app::{TodoAction, TodoId, app_reducer, view};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
commands:
  add <text>                       add a new to-do
  toggle <id>                      flip completion of a to-do
  filter all|active|completed      choose which to-dos are shown
  list                             print the current list
  help                             print this help
  quit                             exit
";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_app=debug,reflux_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting to-do console front-end");

    let mut store = Store::new(app_reducer());

    // Re-render after every dispatch, like the original single render
    // subscription at application start.
    store.subscribe(|state| {
        print!("{}", view::render(state));
    });

    println!("=== To-do List: Reflux Architecture ===");
    println!("Type `help` for commands.");

    let mut next_todo_id: u64 = 0;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            prompt(&mut stdout)?;
            continue;
        }

        match input.parse::<view::Command>() {
            Ok(view::Command::Add { text }) => {
                store.dispatch(TodoAction::AddTodo {
                    id: TodoId::new(next_todo_id),
                    text,
                });
                next_todo_id += 1;
            },
            Ok(view::Command::Toggle { id }) => {
                store.dispatch(TodoAction::ToggleTodo {
                    id: TodoId::new(id),
                });
            },
            Ok(view::Command::Filter { filter }) => {
                store.dispatch(TodoAction::SetVisibilityFilter { filter });
            },
            Ok(view::Command::List) => {
                print!("{}", view::render(store.state()));
            },
            Ok(view::Command::Help) => {
                print!("{HELP}");
            },
            Ok(view::Command::Quit) => break,
            Err(err) => {
                eprintln!("{err}");
            },
        }

        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut std::io::Stdout) -> Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

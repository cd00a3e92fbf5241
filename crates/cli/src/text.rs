//! Line mode: a prompt-driven game on plain stdout.

use chess_core::game_state::GameState;
use chess_core::presenter::{self, EventOutcome, InputEvent};
use chess_core::selection::ClickOutcome;
use colored::Colorize;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::{DisplayOptions, GameView};
use crate::parse::{self, Command};

const HELP: &str = "\
Commands:
  e2e4, e2 e4       move a piece
  select e2         click a square (select, move, or deselect)
  undo, u           take back the last move
  restart, n        start a new game
  board, b          show the board
  help, h           show this help
  quit, q           leave";

/// Runs the line-mode loop until `quit` or end of input.
pub fn text_loop(options: DisplayOptions) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = GameState::new();
    let mut view = GameView::new(&game, options);

    println!("{HELP}\n");
    view.print();

    loop {
        let prompt = format!("{} > ", game.side_to_move());
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse::parse_command(&line) {
                    Ok(Some(command)) => {
                        if !run_command(&mut game, &mut view, command) {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(msg) => println!("{}\n", msg.red()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        }
    }
    Ok(())
}

/// Executes one command. Returns `false` when the user asked to quit.
fn run_command(game: &mut GameState, view: &mut GameView, command: Command) -> bool {
    match command {
        Command::Move(from, to) => match game.attempt_move(from, to) {
            Ok(_) => {
                presenter::render_all(game, view);
                print_last_move(view);
                view.print();
            }
            Err(err) => println!("{}\n", err.to_string().red()),
        },
        Command::Click(sq) => match presenter::dispatch(game, InputEvent::CellClicked(sq), view) {
            EventOutcome::Click(ClickOutcome::Ignored) => {
                println!("Nothing to select on {sq}.\n");
            }
            EventOutcome::Click(ClickOutcome::Moved(_)) => {
                print_last_move(view);
                view.print();
            }
            _ => view.print(),
        },
        Command::Undo => match presenter::dispatch(game, InputEvent::UndoRequested, view) {
            EventOutcome::Undone(None) => println!("Cannot undo.\n"),
            _ => view.print(),
        },
        Command::Restart => {
            presenter::dispatch(game, InputEvent::RestartRequested, view);
            println!("New game started.\n");
            view.print();
        }
        Command::Board => view.print(),
        Command::Help => println!("{HELP}\n"),
        Command::Quit => return false,
    }
    true
}

fn print_last_move(view: &GameView) {
    if let Some(line) = view.move_log().last() {
        println!("{}\n", line.bright_magenta());
    }
}

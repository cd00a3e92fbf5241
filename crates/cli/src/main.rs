mod game;
mod parse;
mod text;
mod tui;
mod ui;

use chess_core::notation::GlyphSet;
use clap::{Parser, Subcommand};

use crate::game::DisplayOptions;

#[derive(Parser, Debug, Clone)]
struct DisplayParams {
    /// Draw pieces as letters (KQRBNP / kqrbnp) instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Do not mark where the selected piece can move
    #[arg(long)]
    no_highlights: bool,
}

impl DisplayParams {
    fn options(&self) -> DisplayOptions {
        DisplayOptions {
            glyphs: if self.ascii {
                GlyphSet::Ascii
            } else {
                GlyphSet::Unicode
            },
            show_highlights: !self.no_highlights,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chess", version, about = "Two-player chess on one terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    display: DisplayParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Line mode: type moves such as `e2e4` at a prompt
    Text {
        #[command(flatten)]
        display: DisplayParams,
    },
}

fn main() {
    let args = Cli::parse();
    let result = match args.command {
        Some(SubCommands::Text { display }) => text::text_loop(display.options()),
        None => ui::ui_loop(args.display.options()),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

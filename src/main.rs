mod app;
mod client;
mod config;
mod history;
mod input;
mod session;
mod terminal;
mod textarea;
mod tone;
mod utils;
mod view;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "tonepick")]
#[command(version = "0.2.0")]
#[command(about = "A terminal tone picker: rewrite text in a chosen tone, with undo/redo.")]
#[command(long_about = "
tonepick - rewrite text in a chosen tone

Type into the text area, pick a tone from the 3x3 grid, and navigate the
resulting history. Tone rewriting is done by a remote service.

KEYBOARD SHORTCUTS:

  Editing:
    Any printable key    Insert character
    Enter                New line
    Backspace/Delete     Delete character
    Arrows/Home/End      Move cursor

  Tones:
    Alt+1 .. Alt+9       Apply the corresponding grid tone

  History:
    Ctrl+Z               Undo
    Ctrl+Y               Redo
    Ctrl+R               Reset to empty text

  Other:
    Esc                  Clear messages
    Ctrl+Q               Quit
")]
struct Args {
    /// Tone adjustment service endpoint
    #[arg(long, default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日誌
    utils::init_logger(args.debug);

    let config = Config::new(args.endpoint);
    let mut app = App::new(&config)?;

    // 設置 panic hook 以確保終端正常恢復
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::Terminal::exit_raw_mode();
        let _ = terminal::Terminal::show_cursor();
        original_hook(panic_info);
    }));

    app.run()?;

    Ok(())
}

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::client::{spawn_adjust, ToneClient, ToneOutcome};
use crate::config::Config;
use crate::input::{handle_key_event, Command};
use crate::session::Session;
use crate::terminal::Terminal;
use crate::tone;
use crate::view::View;

/// 終端外殼：事件迴圈、渲染、派工，決策邏輯都在 Session
pub struct App {
    session: Session,
    view: View,
    terminal: Terminal,
    client: Arc<ToneClient>,
    outcome_tx: Sender<ToneOutcome>,
    outcome_rx: Receiver<ToneOutcome>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let terminal = Terminal::new()?;
        let view = View::new(&terminal);
        let client = Arc::new(ToneClient::new(
            config.endpoint.clone(),
            config.request_timeout,
        )?);
        let (outcome_tx, outcome_rx) = mpsc::channel();

        Ok(Self {
            session: Session::new(config.error_display),
            view,
            terminal,
            client,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        Terminal::enter_raw_mode()?;
        Terminal::clear_screen()?;

        while !self.should_quit {
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.session.apply_outcome(outcome);
            }
            self.session.expire_error();

            self.view.render(&self.session)?;

            // 短輪詢讓 spinner 動起來，也讓工作結果不用等按鍵就被取走
            if let Some(key_event) = Terminal::poll_key(Duration::from_millis(100))? {
                if let Some(command) = handle_key_event(key_event) {
                    self.handle_command(command)?;
                }
            }
        }

        Terminal::exit_raw_mode()?;
        Ok(())
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        if self.session.state().is_loading() && !command.allowed_while_loading() {
            return Ok(());
        }

        match command {
            // 字符輸入
            Command::Insert(ch) => {
                self.session.textarea.insert_char(ch);
                self.session.sync_typed_text();
            }

            // 刪除操作
            Command::Backspace => {
                self.session.textarea.backspace();
                self.session.sync_typed_text();
            }
            Command::Delete => {
                self.session.textarea.delete();
                self.session.sync_typed_text();
            }

            // 光標移動
            Command::MoveUp => self.session.textarea.move_up(),
            Command::MoveDown => self.session.textarea.move_down(),
            Command::MoveLeft => self.session.textarea.move_left(),
            Command::MoveRight => self.session.textarea.move_right(),
            Command::MoveHome => self.session.textarea.move_to_line_start(),
            Command::MoveEnd => self.session.textarea.move_to_line_end(),

            // 語氣調整
            Command::ApplyTone(index) => {
                if let Some(tone) = tone::tone_at(index) {
                    if let Some((request_id, text)) = self.session.request_tone(tone) {
                        log::debug!("dispatching tone request {} ({})", request_id, tone.label);
                        spawn_adjust(
                            Arc::clone(&self.client),
                            self.outcome_tx.clone(),
                            request_id,
                            text,
                            tone,
                        );
                    }
                }
            }

            // 歷史導覽
            Command::Undo => self.session.undo(),
            Command::Redo => self.session.redo(),
            Command::Reset => self.session.reset(),

            Command::ClearMessage => self.session.clear_messages(),

            // 視窗調整
            Command::Resize => {
                self.terminal.update_size()?;
                self.view.update_size(&self.terminal);
            }

            Command::Quit => {
                self.should_quit = true;
            }
        }

        Ok(())
    }
}

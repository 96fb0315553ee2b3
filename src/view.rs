use crate::history::History;
use crate::session::{Session, SessionState};
use crate::terminal::Terminal;
use crate::textarea::TextArea;
use crate::tone::{Tone, GRID_COLS, TONE_GRID};
use crate::utils::visual_width;
use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{self, Attribute, Color},
};
use std::io::{self, Write};
use std::time::Instant;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

// 文字區以下的固定列：網格標題 + 3 行網格 + 錯誤列 + 狀態欄
const CHROME_ROWS: usize = 6;

pub struct View {
    pub offset_row: usize, // 文字區頂部顯示的行號
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl View {
    pub fn new(terminal: &Terminal) -> Self {
        let (cols, rows) = terminal.size();
        Self {
            offset_row: 0,
            screen_rows: rows as usize,
            screen_cols: cols as usize,
        }
    }

    pub fn update_size(&mut self, terminal: &Terminal) {
        let (cols, rows) = terminal.size();
        self.screen_rows = rows as usize;
        self.screen_cols = cols as usize;
    }

    fn text_rows(&self) -> usize {
        self.screen_rows.saturating_sub(CHROME_ROWS).max(1)
    }

    pub fn render(&mut self, session: &Session) -> Result<()> {
        let textarea = &session.textarea;
        self.scroll_if_needed(textarea);

        let mut stdout = io::stdout();

        execute!(stdout, cursor::Hide)?;
        execute!(stdout, cursor::MoveTo(0, 0))?;

        let text_rows = self.text_rows();

        // 文字區
        for screen_row in 0..text_rows {
            let file_row = self.offset_row + screen_row;
            queue!(stdout, cursor::MoveTo(0, screen_row as u16))?;

            if let Some(line) = textarea.line(file_row) {
                let displayed = line.replace('\t', "    ");
                let truncated = truncate_line(&displayed, self.screen_cols);
                queue!(stdout, style::Print(truncated))?;
            } else {
                // 空行顯示波浪號
                queue!(stdout, style::SetForegroundColor(Color::DarkGrey))?;
                queue!(stdout, style::Print("~"))?;
                queue!(stdout, style::ResetColor)?;
            }

            queue!(
                stdout,
                crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine)
            )?;
        }

        self.render_tone_grid(&mut stdout, text_rows, &session.history, session.state())?;
        self.render_error_line(&mut stdout, text_rows + 4, session.error())?;
        self.render_status_bar(&session.history, session.state(), session.message())?;

        // 光標回到文字區（考慮寬字元的視覺列）
        let current_line = textarea.line(textarea.cursor.row).unwrap_or_default();
        let prefix: String = current_line.chars().take(textarea.cursor.col).collect();
        let cursor_x = visual_width(&prefix.replace('\t', "    ")) as u16;
        let cursor_y = (textarea.cursor.row - self.offset_row) as u16;

        execute!(stdout, cursor::MoveTo(cursor_x, cursor_y))?;
        execute!(stdout, cursor::Show)?;

        stdout.flush()?;
        Ok(())
    }

    pub fn scroll_if_needed(&mut self, textarea: &TextArea) {
        let row = textarea.cursor.row;
        // 向上滾動
        if row < self.offset_row {
            self.offset_row = row;
        }
        // 向下滾動
        let text_rows = self.text_rows();
        if row >= self.offset_row + text_rows {
            self.offset_row = row - text_rows + 1;
        }
    }

    fn render_tone_grid(
        &self,
        stdout: &mut io::Stdout,
        start_row: usize,
        history: &History,
        state: &SessionState,
    ) -> Result<()> {
        let active_label = history.current().label.as_str();
        let loading = state.is_loading();

        // 標題列
        queue!(stdout, cursor::MoveTo(0, start_row as u16))?;
        queue!(stdout, style::SetForegroundColor(Color::DarkGrey))?;
        queue!(stdout, style::Print(" Tones (Alt+1..9)"))?;
        queue!(stdout, style::ResetColor)?;
        queue!(
            stdout,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine)
        )?;

        let cell_width = (self.screen_cols / GRID_COLS).max(8);

        for (index, tone) in TONE_GRID.iter().enumerate() {
            let grid_row = index / GRID_COLS;
            let grid_col = index % GRID_COLS;

            if grid_col == 0 {
                queue!(stdout, cursor::MoveTo(0, (start_row + 1 + grid_row) as u16))?;
            }

            let cell = format_cell(index, tone, cell_width);
            let is_active = tone.label == active_label;

            if loading {
                // 請求在途時按鈕全部停用
                queue!(stdout, style::SetForegroundColor(Color::DarkGrey))?;
                queue!(stdout, style::Print(cell))?;
                queue!(stdout, style::ResetColor)?;
            } else if is_active {
                queue!(stdout, style::SetAttribute(Attribute::Reverse))?;
                queue!(stdout, style::Print(cell))?;
                queue!(stdout, style::SetAttribute(Attribute::NoReverse))?;
            } else {
                queue!(stdout, style::Print(cell))?;
            }

            if grid_col == GRID_COLS - 1 {
                queue!(
                    stdout,
                    crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine)
                )?;
            }
        }

        Ok(())
    }

    fn render_error_line(
        &self,
        stdout: &mut io::Stdout,
        row: usize,
        error: Option<&str>,
    ) -> Result<()> {
        queue!(stdout, cursor::MoveTo(0, row as u16))?;
        if let Some(msg) = error {
            queue!(stdout, style::SetForegroundColor(Color::Red))?;
            queue!(stdout, style::Print(truncate_line(msg, self.screen_cols)))?;
            queue!(stdout, style::ResetColor)?;
        }
        queue!(
            stdout,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine)
        )?;
        Ok(())
    }

    fn render_status_bar(
        &self,
        history: &History,
        state: &SessionState,
        message: Option<&str>,
    ) -> Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, self.screen_rows.saturating_sub(1) as u16)
        )?;

        queue!(stdout, style::SetBackgroundColor(Color::DarkGrey))?;
        queue!(stdout, style::SetForegroundColor(Color::White))?;

        let status = match state {
            SessionState::Loading { label, started, .. } => {
                format!(
                    " {} Applying \"{}\" tone...",
                    spinner_frame(*started),
                    label
                )
            }
            SessionState::Idle => {
                let undo = if history.can_step_back() { "Undo" } else { "----" };
                let redo = if history.can_step_forward() { "Redo" } else { "----" };
                let base = format!(
                    " Tone: {}  History {}/{}  Ctrl+Z:{} Ctrl+Y:{} Ctrl+R:Reset Ctrl+Q:Quit",
                    history.current().label,
                    history.cursor() + 1,
                    history.len(),
                    undo,
                    redo
                );
                if let Some(msg) = message {
                    format!("{} - {}", base, msg)
                } else {
                    base
                }
            }
        };

        // 確保狀態欄填滿整行
        let status = if visual_width(&status) < self.screen_cols {
            format!("{:width$}", status, width = self.screen_cols)
        } else {
            truncate_line(&status, self.screen_cols)
        };

        queue!(stdout, style::Print(status))?;
        queue!(stdout, style::ResetColor)?;

        Ok(())
    }
}

fn spinner_frame(started: Instant) -> char {
    let tick = started.elapsed().as_millis() / 100;
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u128) as usize]
}

fn format_cell(index: usize, tone: &Tone, width: usize) -> String {
    let text = format!(" {}:{}", index + 1, tone.label);
    let truncated = truncate_line(&text, width);
    let pad = width.saturating_sub(visual_width(&truncated));
    format!("{}{}", truncated, " ".repeat(pad))
}

fn truncate_line(line: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();

    for ch in line.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + char_width > max_width {
            break;
        }
        result.push(ch);
        width += char_width;
    }

    result
}

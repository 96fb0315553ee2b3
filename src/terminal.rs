use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

pub struct Terminal {
    size: (u16, u16),
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let size = terminal::size()?;
        Ok(Self { size })
    }

    pub fn enter_raw_mode() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen)?;
        Ok(())
    }

    pub fn exit_raw_mode() -> Result<()> {
        execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn clear_screen() -> Result<()> {
        execute!(io::stdout(), terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn update_size(&mut self) -> Result<()> {
        self.size = terminal::size()?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn flush() -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    /// 在 timeout 內等待按鍵；沒有事件時回傳 None，讓主迴圈能輪詢工作結果
    pub fn poll_key(timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key_event) => {
                // 只處理正常的 Press 和 Repeat 事件
                if key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat {
                    Ok(Some(key_event))
                } else {
                    Ok(None)
                }
            }
            Event::Resize(_cols, _rows) => {
                // 視窗大小改變,返回特殊標記
                Ok(Some(KeyEvent::new(KeyCode::F(21), KeyModifiers::NONE)))
            }
            _ => {
                // 忽略其他事件（鼠標等）
                Ok(None)
            }
        }
    }

    pub fn show_cursor() -> Result<()> {
        execute!(io::stdout(), cursor::Show)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::exit_raw_mode();
        let _ = Self::show_cursor();
    }
}

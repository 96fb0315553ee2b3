use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handler::Command;

pub fn handle_key_event(event: KeyEvent) -> Option<Command> {
    match (event.code, event.modifiers) {
        // 基本移動
        (KeyCode::Up, KeyModifiers::NONE) => Some(Command::MoveUp),
        (KeyCode::Down, KeyModifiers::NONE) => Some(Command::MoveDown),
        (KeyCode::Left, KeyModifiers::NONE) => Some(Command::MoveLeft),
        (KeyCode::Right, KeyModifiers::NONE) => Some(Command::MoveRight),
        (KeyCode::Home, KeyModifiers::NONE) => Some(Command::MoveHome),
        (KeyCode::End, KeyModifiers::NONE) => Some(Command::MoveEnd),

        // 語氣網格：Alt+1..Alt+9 對應行優先索引 0..=8
        (KeyCode::Char(c), KeyModifiers::ALT) if ('1'..='9').contains(&c) => {
            Some(Command::ApplyTone(c as usize - '1' as usize))
        }

        // Ctrl 組合鍵
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(Command::Quit),
        (KeyCode::Char('z'), KeyModifiers::CONTROL) => Some(Command::Undo),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(Command::Redo),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(Command::Reset),

        // 字符輸入
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Some(Command::Insert(c))
        }
        (KeyCode::Enter, _) => Some(Command::Insert('\n')),

        // 刪除操作
        (KeyCode::Backspace, _) => Some(Command::Backspace),
        (KeyCode::Delete, _) => Some(Command::Delete),

        // ESC 清除訊息
        (KeyCode::Esc, _) => Some(Command::ClearMessage),

        // F21 用於視窗大小調整事件
        (KeyCode::F(21), KeyModifiers::NONE) => Some(Command::Resize),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_alt_digits_map_to_grid_indices() {
        for (digit, index) in ('1'..='9').zip(0usize..9) {
            assert_eq!(
                handle_key_event(key(KeyCode::Char(digit), KeyModifiers::ALT)),
                Some(Command::ApplyTone(index))
            );
        }
    }

    #[test]
    fn test_plain_digits_insert_text() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(Command::Insert('1'))
        );
    }

    #[test]
    fn test_history_shortcuts() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Command::Undo)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Command::Redo)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Command::Reset)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(
            handle_key_event(key(KeyCode::F(5), KeyModifiers::NONE)),
            None
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // 字符輸入
    Insert(char),

    // 刪除操作
    Backspace,
    Delete,

    // 光標移動
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,

    // 語氣調整（網格索引，行優先 0..=8）
    ApplyTone(usize),

    // 歷史導覽
    Undo,
    Redo,
    Reset,

    // 其他
    ClearMessage,
    Resize,
    Quit,
}

impl Command {
    /// 請求在途時仍允許的命令
    /// 原始 UI 只停用按鈕，輸入區照常可編輯
    pub fn allowed_while_loading(&self) -> bool {
        !matches!(
            self,
            Command::ApplyTone(_) | Command::Undo | Command::Redo | Command::Reset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_controls_blocked_while_loading() {
        assert!(!Command::ApplyTone(0).allowed_while_loading());
        assert!(!Command::Undo.allowed_while_loading());
        assert!(!Command::Redo.allowed_while_loading());
        assert!(!Command::Reset.allowed_while_loading());
    }

    #[test]
    fn test_editing_and_quit_allowed_while_loading() {
        assert!(Command::Insert('a').allowed_while_loading());
        assert!(Command::Backspace.allowed_while_loading());
        assert!(Command::MoveLeft.allowed_while_loading());
        assert!(Command::Quit.allowed_while_loading());
        assert!(Command::ClearMessage.allowed_while_loading());
    }
}

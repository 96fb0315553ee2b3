// 可編輯文字區：ropey 緩衝區 + (row, col) 光標
// 不做字元級撤銷，歷史由快照層（history）負責

use ropey::Rope;

#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub row: usize,         // 邏輯行號 (0-based)
    pub col: usize,         // 邏輯列號 (0-based)
    pub desired_col: usize, // 上下移動時保持的列
}

pub struct TextArea {
    rope: Rope,
    pub cursor: Cursor,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor {
                row: 0,
                col: 0,
                desired_col: 0,
            },
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// 文字（去除前後空白後）是否為空
    pub fn is_blank(&self) -> bool {
        self.rope.chars().all(|ch| ch.is_whitespace())
    }

    /// 以整段新文字取代內容，光標移到結尾
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        let last_row = self.line_count().saturating_sub(1);
        self.cursor.row = last_row;
        self.cursor.col = self.line_len(last_row);
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn insert_char(&mut self, ch: char) {
        let pos = self.char_position();
        self.rope.insert_char(pos, ch);

        if ch == '\n' {
            self.cursor.row += 1;
            self.cursor.col = 0;
        } else {
            self.cursor.col += 1;
        }
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn backspace(&mut self) {
        if self.cursor.col > 0 {
            let pos = self.char_position() - 1;
            self.rope.remove(pos..pos + 1);
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            // 刪除換行符，合併到上一行
            let new_row = self.cursor.row - 1;
            let prev_len = self.line_len(new_row);
            let pos = self.rope.line_to_char(new_row) + prev_len;
            self.rope.remove(pos..pos + 1);
            self.cursor.row = new_row;
            self.cursor.col = prev_len;
        }
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn delete(&mut self) {
        let pos = self.char_position();
        if pos < self.rope.len_chars() {
            self.rope.remove(pos..pos + 1);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.adjust_col_to_desired();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.line_count() {
            self.cursor.row += 1;
            self.adjust_col_to_desired();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            // 移動到上一行末尾
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        }
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.line_count() {
            // 移動到下一行開頭
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
        self.cursor.desired_col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.row);
        self.cursor.desired_col = self.cursor.col;
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// 取得指定行內容（不含換行符）
    pub fn line(&self, row: usize) -> Option<String> {
        if row < self.line_count() {
            let line = self.rope.line(row).to_string();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// 光標在文本中的絕對字符位置
    fn char_position(&self) -> usize {
        self.rope.line_to_char(self.cursor.row) + self.cursor.col
    }

    fn adjust_col_to_desired(&mut self) {
        self.cursor.col = self.cursor.desired_col.min(self.line_len(self.cursor.row));
    }

    /// 指定行的長度（不包含換行符）
    fn line_len(&self, row: usize) -> usize {
        self.line(row).map(|l| l.chars().count()).unwrap_or(0)
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_text() {
        let mut area = TextArea::new();
        for ch in "Hi there".chars() {
            area.insert_char(ch);
        }
        assert_eq!(area.text(), "Hi there");
        assert_eq!(area.cursor.col, 8);
    }

    #[test]
    fn test_newline_moves_cursor_to_next_row() {
        let mut area = TextArea::new();
        area.insert_char('a');
        area.insert_char('\n');
        area.insert_char('b');
        assert_eq!(area.text(), "a\nb");
        assert_eq!(area.cursor.row, 1);
        assert_eq!(area.cursor.col, 1);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new();
        area.set_text("ab\ncd");
        area.cursor.row = 1;
        area.cursor.col = 0;
        area.backspace();
        assert_eq!(area.text(), "abcd");
        assert_eq!(area.cursor.row, 0);
        assert_eq!(area.cursor.col, 2);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut area = TextArea::new();
        area.set_text("ab");
        area.cursor.row = 0;
        area.cursor.col = 0;
        area.backspace();
        assert_eq!(area.text(), "ab");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut area = TextArea::new();
        area.set_text("ab");
        area.delete();
        assert_eq!(area.text(), "ab");
        area.cursor.col = 1;
        area.delete();
        assert_eq!(area.text(), "a");
    }

    #[test]
    fn test_set_text_puts_cursor_at_end() {
        let mut area = TextArea::new();
        area.set_text("one\ntwo");
        assert_eq!(area.cursor.row, 1);
        assert_eq!(area.cursor.col, 3);
    }

    #[test]
    fn test_desired_col_survives_short_line() {
        let mut area = TextArea::new();
        area.set_text("long line\nx\nlong line");
        area.cursor.row = 0;
        area.cursor.col = 6;
        area.cursor.desired_col = 6;
        area.move_down();
        assert_eq!(area.cursor.col, 1);
        area.move_down();
        assert_eq!(area.cursor.col, 6);
    }

    #[test]
    fn test_is_blank() {
        let mut area = TextArea::new();
        assert!(area.is_blank());
        area.set_text("  \n\t ");
        assert!(area.is_blank());
        area.set_text("  x ");
        assert!(!area.is_blank());
    }
}

// 撤銷/重做歷史管理
// 快照序列 + 游標：append 會截斷游標之後的「未來」，redo 分支不保留

pub const ORIGINAL_LABEL: &str = "Original";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub label: String,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// 使用者直接輸入（或初始狀態）的快照
    pub fn original(text: impl Into<String>) -> Self {
        Self::new(text, ORIGINAL_LABEL)
    }
}

pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

#[allow(clippy::len_without_is_empty)] // 序列永遠至少含一個快照
impl History {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::original("")],
            cursor: 0,
        }
    }

    /// 丟棄游標之後的快照，追加新快照並前進游標
    pub fn append(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// 使用者在當前位置直接編輯：覆寫當前快照而非追加
    /// 文字未變時不動作，避免無謂的歷史變動；有變動時同樣截斷未來
    pub fn replace_current(&mut self, text: &str) -> bool {
        if self.snapshots[self.cursor].text == text {
            return false;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots[self.cursor] = Snapshot::original(text);
        true
    }

    pub fn step_back(&mut self) -> Option<&Snapshot> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(&self.snapshots[self.cursor])
        } else {
            None
        }
    }

    pub fn step_forward(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            Some(&self.snapshots[self.cursor])
        } else {
            None
        }
    }

    /// 重設為單一空白 "Original" 快照
    pub fn reset(&mut self) {
        self.snapshots = vec![Snapshot::original("")];
        self.cursor = 0;
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

// 會話核心：歷史 + 文字區 + 載入狀態機
// 與終端無關，控制器的決策邏輯集中在這裡以便獨立測試

use std::time::{Duration, Instant};

use crate::client::ToneOutcome;
use crate::history::{History, Snapshot};
use crate::textarea::TextArea;
use crate::tone::Tone;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text before adjusting tone.";

/// 顯式狀態機：載入中停用語氣/重設/撤銷/重做，避免第二個請求或歷史競態
pub enum SessionState {
    Idle,
    Loading {
        request_id: u64,
        label: &'static str,
        started: Instant,
    },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading { .. })
    }
}

pub struct Session {
    pub history: History,
    pub textarea: TextArea,
    state: SessionState,
    next_request_id: u64,
    error: Option<(String, Instant)>,
    message: Option<String>,
    error_display: Duration,
}

impl Session {
    pub fn new(error_display: Duration) -> Self {
        Self {
            history: History::new(),
            textarea: TextArea::new(),
            state: SessionState::Idle,
            next_request_id: 0,
            error: None,
            message: None,
            error_display,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// 直接輸入：覆寫當前快照而非追加，文字未變時不動歷史
    pub fn sync_typed_text(&mut self) {
        let text = self.textarea.text();
        self.history.replace_current(&text);
    }

    /// 決定是否送出語氣請求
    /// 空白輸入只顯示錯誤，不發請求、不動歷史；回傳 Some((request_id, text))
    /// 表示呼叫端應派工，同一時間只允許一個請求在途
    pub fn request_tone(&mut self, tone: &'static Tone) -> Option<(u64, String)> {
        if self.state.is_loading() {
            return None;
        }
        if self.textarea.is_blank() {
            self.show_error(EMPTY_TEXT_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        self.message = None;

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.state = SessionState::Loading {
            request_id,
            label: tone.label,
            started: Instant::now(),
        };
        Some((request_id, self.textarea.text().trim().to_string()))
    }

    /// 套用工作結果；request_id 不符的過期回應（例如重設之後才到達）直接丟棄
    pub fn apply_outcome(&mut self, outcome: ToneOutcome) {
        let pending = match &self.state {
            SessionState::Loading { request_id, .. } => Some(*request_id),
            SessionState::Idle => None,
        };

        if pending != Some(outcome.request_id) {
            log::debug!("dropping stale tone outcome {}", outcome.request_id);
            return;
        }

        self.state = SessionState::Idle;
        match outcome.result {
            Ok(adjusted) => {
                log::debug!("tone request {} succeeded", outcome.request_id);
                self.history.append(Snapshot::new(adjusted.clone(), outcome.label));
                self.textarea.set_text(&adjusted);
            }
            Err(err) => {
                log::debug!("tone request {} failed: {}", outcome.request_id, err);
                self.show_error(err.to_string());
            }
        }
    }

    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.step_back() {
            let text = snapshot.text.clone();
            self.textarea.set_text(&text);
            self.message = Some("Undo".to_string());
        } else {
            self.message = Some("Nothing to undo".to_string());
        }
    }

    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.step_forward() {
            let text = snapshot.text.clone();
            self.textarea.set_text(&text);
            self.message = Some("Redo".to_string());
        } else {
            self.message = Some("Nothing to redo".to_string());
        }
    }

    pub fn reset(&mut self) {
        self.history.reset();
        self.textarea.set_text("");
        self.message = None;
        self.error = None;
    }

    pub fn clear_messages(&mut self) {
        self.message = None;
        self.error = None;
    }

    /// 錯誤訊息顯示一段時間後自動清除
    pub fn expire_error(&mut self) {
        if let Some((_, shown_at)) = &self.error {
            if shown_at.elapsed() >= self.error_display {
                self.error = None;
            }
        }
    }

    fn show_error(&mut self, message: String) {
        self.error = Some((message, Instant::now()));
    }
}

//! tonepick - 終端語氣調整工具的核心邏輯
//! UI（app/view/terminal/input）只存在於 binary，這裡導出可獨立測試的部分

pub mod client;
pub mod config;
pub mod history;
pub mod session;
pub mod textarea;
pub mod tone;

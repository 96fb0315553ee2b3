// 日誌工具
// 終端處於 raw mode 時 stderr 輸出會打亂畫面，平常只留錯誤級別

pub fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

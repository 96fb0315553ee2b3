// 語氣網格
// (x, y) 對應遠端服務的二維語氣空間：x 為正式程度，y 為溫度

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub label: &'static str,
    pub x: i32,
    pub y: i32,
}

pub const GRID_COLS: usize = 3;
pub const GRID_ROWS: usize = 3;

/// 3x3 語氣網格，列為正式程度（very formal / formal / casual），
/// 行為溫度（stern / neutral / warm），以行優先排列對應 Alt+1..Alt+9
pub static TONE_GRID: [Tone; GRID_ROWS * GRID_COLS] = [
    Tone { label: "Very Formal / Stern", x: 0, y: 0 },
    Tone { label: "Formal / Stern", x: 1, y: 0 },
    Tone { label: "Casual / Stern", x: 2, y: 0 },
    Tone { label: "Very Formal / Neutral", x: 0, y: 1 },
    Tone { label: "Formal / Neutral", x: 1, y: 1 },
    Tone { label: "Casual / Neutral", x: 2, y: 1 },
    Tone { label: "Very Formal / Warm", x: 0, y: 2 },
    Tone { label: "Formal / Warm", x: 1, y: 2 },
    Tone { label: "Casual / Warm", x: 2, y: 2 },
];

/// 依網格索引（0-based，行優先）取得語氣
pub fn tone_at(index: usize) -> Option<&'static Tone> {
    TONE_GRID.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_row_major_over_tone_space() {
        for (i, tone) in TONE_GRID.iter().enumerate() {
            assert_eq!(tone.x, (i % GRID_COLS) as i32);
            assert_eq!(tone.y, (i / GRID_COLS) as i32);
        }
    }

    #[test]
    fn test_tone_at_bounds() {
        assert_eq!(tone_at(0).unwrap().label, "Very Formal / Stern");
        assert_eq!(tone_at(8).unwrap().label, "Casual / Warm");
        assert!(tone_at(9).is_none());
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in TONE_GRID.iter().enumerate() {
            for b in TONE_GRID.iter().skip(i + 1) {
                assert_ne!(a.label, b.label);
            }
        }
    }
}

/// One team's performance in one match.
///
/// Every grouping field is optional: a blank or non-numeric cell stays
/// absent and is skipped by any aggregation keyed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub gold_diff_10: Option<i64>,
    pub kills_diff_10: Option<i64>,
    pub dragons: Option<u32>,
    pub barons: Option<u32>,
    pub towers: Option<u32>,
    pub vision_score: Option<f64>,
    pub won: bool,
}

/// Parses a cell as a finite number. Blank, `NA`, `null` and other
/// non-numeric text yield `None`.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer cell; integral decimals such as `"3.0"` are accepted.
/// Values outside the exactly representable `i64` range are absent.
pub fn parse_int(cell: &str) -> Option<i64> {
    let value = parse_number(cell)?;
    // i64::MAX as f64 rounds up to 2^63
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

pub fn parse_count(cell: &str) -> Option<u32> {
    parse_int(cell).and_then(|v| u32::try_from(v).ok())
}

pub fn parse_non_negative(cell: &str) -> Option<f64> {
    parse_number(cell).filter(|v| *v >= 0.0)
}

/// `win` must be exactly 0 or 1.
pub fn parse_win(cell: &str) -> Option<bool> {
    match parse_int(cell)? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

//! Award-year labels to numeric years

/// Year used when a label carries no readable year.
pub const FALLBACK_YEAR: i32 = 1900;

/// Reads the leading year of a label such as `"1927 / 28 (1st)"`.
pub fn normalize_year(raw: &str) -> i32 {
    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .unwrap_or(FALLBACK_YEAR)
}

pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

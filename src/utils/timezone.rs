//! 时区偏移换算
//!
//! 评价会话的时区以"小时"记录，可以是小数（如 +5.5）或负数。

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 将小时偏移换算为秒，四舍五入到整秒；NaN 视为 0
pub fn offset_seconds(hours: f64) -> i64 {
    if hours.is_nan() {
        return 0;
    }
    // `as` 对超出范围的浮点数饱和截断
    (hours * SECONDS_PER_HOUR).round() as i64
}

/// 将 UTC 时刻平移到给定偏移的本地挂钟时间
///
/// 偏移过大导致越界时，结果饱和到 `NaiveDateTime::MIN` / `NaiveDateTime::MAX`。
pub fn to_local_wall_clock(instant: DateTime<Utc>, offset_hours: f64) -> NaiveDateTime {
    let naive = instant.naive_utc();
    TimeDelta::try_seconds(offset_seconds(offset_hours))
        .and_then(|delta| naive.checked_add_signed(delta))
        .unwrap_or(if offset_hours.is_sign_negative() {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// 格式化挂钟时间，用于日志输出
pub fn format_wall_clock(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_offset_seconds() {
        assert_eq!(offset_seconds(0.0), 0);
        assert_eq!(offset_seconds(8.0), 28_800);
        assert_eq!(offset_seconds(5.5), 19_800);
        assert_eq!(offset_seconds(-3.5), -12_600);
        assert_eq!(offset_seconds(5.75), 20_700);
        assert_eq!(offset_seconds(f64::NAN), 0);
    }

    #[test]
    fn test_fractional_offset_shift() {
        let local = to_local_wall_clock(utc(2024, 1, 10, 3, 30, 0), 5.5);
        assert_eq!(local, naive(2024, 1, 10, 9, 0, 0));
    }

    #[test]
    fn test_negative_offset_crosses_midnight() {
        let local = to_local_wall_clock(utc(2024, 1, 10, 2, 0, 0), -5.0);
        assert_eq!(local, naive(2024, 1, 9, 21, 0, 0));
    }

    #[test]
    fn test_extreme_offsets() {
        let instant = utc(2024, 1, 10, 12, 0, 0);
        assert_eq!(
            to_local_wall_clock(instant, 12.0),
            naive(2024, 1, 11, 0, 0, 0)
        );
        assert_eq!(
            to_local_wall_clock(instant, -12.0),
            naive(2024, 1, 10, 0, 0, 0)
        );
    }

    #[test]
    fn test_absurd_offset_saturates() {
        let instant = utc(2024, 1, 10, 12, 0, 0);
        assert_eq!(to_local_wall_clock(instant, f64::MAX), NaiveDateTime::MAX);
        assert_eq!(
            to_local_wall_clock(instant, f64::NEG_INFINITY),
            NaiveDateTime::MIN
        );
    }

    #[test]
    fn test_format_wall_clock() {
        assert_eq!(
            format_wall_clock(naive(2024, 1, 10, 8, 59, 59)),
            "2024-01-10 08:59:59"
        );
    }
}

//! # Statistics
//!
//! 集計値の丸めと派生統計量の計算

/// 小数点以下 `decimals` 桁に丸める（0.5は0から遠い方へ）
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// 小数点以下2桁に丸める
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// 整数の比 `numerator / denominator` を小数点以下2桁に丸める（0.5は切り上げ）
///
/// 浮動小数点を経由しないので、ちょうど .xx5 になる値も切り上がる。
/// `denominator` が0以下の場合は0を返す
pub fn round2_ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator <= 0 {
        return 0.0;
    }
    let hundredths = (200 * i128::from(numerator) + i128::from(denominator))
        .div_euclid(2 * i128::from(denominator));
    hundredths as f64 / 100.0
}

/// 平均と二乗平均から母標準偏差を求める
///
/// 浮動小数点誤差で分散がわずかに負になる場合は0として扱う
pub fn population_std_dev(mean: f64, mean_of_squares: f64) -> f64 {
    (mean_of_squares - mean * mean).max(0.0).sqrt()
}

/// 占有率（%）を小数点以下2桁で返す。定員超過はそのまま100を超える
pub fn occupancy_percentage(occupied: u32, capacity: u8) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    round2_ratio(i64::from(occupied) * 100, i64::from(capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(21.0), 21.0);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_round2_ratio_rounds_half_up_exactly() {
        // 801 / 40 = 20.025
        assert_eq!(round2_ratio(801, 40), 20.03);
        assert_eq!(round2_ratio(63, 3), 21.0);
        assert_eq!(round2_ratio(1, 3), 0.33);
        assert_eq!(round2_ratio(2, 3), 0.67);
        assert_eq!(round2_ratio(1, 8), 0.13);
        assert_eq!(round2_ratio(0, 5), 0.0);
        assert_eq!(round2_ratio(5, 0), 0.0);
    }

    #[test]
    fn test_occupancy_percentage() {
        assert_eq!(occupancy_percentage(2, 2), 100.0);
        assert_eq!(occupancy_percentage(1, 4), 25.0);
        assert_eq!(occupancy_percentage(1, 2), 50.0);
        assert_eq!(occupancy_percentage(1, 3), 33.33);
        assert_eq!(occupancy_percentage(0, 5), 0.0);
    }

    #[test]
    fn test_occupancy_percentage_over_capacity_is_not_clamped() {
        assert_eq!(occupancy_percentage(3, 2), 150.0);
    }

    #[test]
    fn test_population_std_dev() {
        // 20, 22 -> mean 21, mean of squares 442
        assert_eq!(population_std_dev(21.0, 442.0), 1.0);
        // 全員同じ年齢
        assert_eq!(population_std_dev(20.0, 400.0), 0.0);
    }

    #[test]
    fn test_population_std_dev_clamps_negative_variance() {
        assert_eq!(population_std_dev(20.0, 399.999_999_999), 0.0);
    }
}

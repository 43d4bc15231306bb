/// Headroom above the largest value
pub const HEADROOM: f64 = 1.2;

/// Ceiling used when the data gives none (empty or all zero)
pub const FALLBACK_CEILING: f64 = 25.0;

/// `ceil(max * 1.2)`, raised to `floor`
pub fn axis_ceiling<I>(values: I, floor: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))));

    let ceiling = max
        .map(|m| (m * HEADROOM).ceil())
        .filter(|c| *c > 0.0)
        .unwrap_or(FALLBACK_CEILING);

    ceiling.max(floor)
}

/// A value axis running from zero to `max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub max: f64,
}

impl AxisScale {
    pub fn new(max: f64) -> Self {
        Self { max }
    }

    pub fn fit<I>(values: I, floor: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::new(axis_ceiling(values, floor))
    }

    /// Tick labels from the top of the axis down to zero
    pub fn ticks(&self) -> [f64; 5] {
        // Small axes keep one decimal so the ticks stay distinct
        let step = |fraction: f64| {
            if self.max < 4.0 {
                (self.max * fraction * 10.0).floor() / 10.0
            } else {
                (self.max * fraction).floor()
            }
        };
        [self.max, step(0.75), step(0.5), step(0.25), 0.0]
    }

    /// Height of `value` as a percentage of the axis, clamped to 0..=100
    pub fn percent(&self, value: f64) -> f64 {
        if self.max <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value / self.max * 100.0).clamp(0.0, 100.0)
    }
}

/// Tick or value text without a trailing `.0`
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_adds_twenty_percent() {
        assert_eq!(axis_ceiling([10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0], 0.0), 20.0);
    }

    #[test]
    fn test_ceiling_respects_floor() {
        assert_eq!(axis_ceiling([2.0, 3.0, 1.0], 30.0), 30.0);
        assert_eq!(axis_ceiling([30.0, 45.0], 40.0), 54.0);
    }

    #[test]
    fn test_ceiling_falls_back_without_data() {
        assert_eq!(axis_ceiling([], 0.0), FALLBACK_CEILING);
        assert_eq!(axis_ceiling([0.0, 0.0], 0.0), FALLBACK_CEILING);
        assert_eq!(axis_ceiling([0.0], 100.0), 100.0);
        assert_eq!(axis_ceiling([f64::NAN, 5.0], 0.0), 6.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(AxisScale::new(20.0).ticks(), [20.0, 15.0, 10.0, 5.0, 0.0]);
        assert_eq!(AxisScale::new(30.0).ticks(), [30.0, 22.0, 15.0, 7.0, 0.0]);
        assert_eq!(AxisScale::new(3.0).ticks(), [3.0, 2.2, 1.5, 0.7, 0.0]);
    }

    #[test]
    fn test_percent_is_clamped() {
        let scale = AxisScale::new(40.0);
        assert_eq!(scale.percent(10.0), 25.0);
        assert_eq!(scale.percent(80.0), 100.0);
        assert_eq!(scale.percent(-5.0), 0.0);
        assert_eq!(AxisScale::new(0.0).percent(5.0), 0.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(2.26), "2.3");
        assert_eq!(format_value(1.85), "1.9");
    }
}

//! Axis scales
//!
//! `LinearScale` maps values onto the y range with "nice" rounded bounds;
//! `PointScale` spreads categorical labels evenly across the x range.

/// Upper bound on the requested number of y intervals
pub const MAX_TICK_COUNT: usize = 20;

/// Fitted y-axis domain with its tick step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisDomain {
    /// Fit a domain around `values`.
    ///
    /// The result always covers the observed extent. With `include_zero` the
    /// domain is stretched to reach zero. An empty input yields `[0, 1]`.
    /// `tick_count` is clamped to `1..=MAX_TICK_COUNT`.
    pub fn fit(values: impl IntoIterator<Item = f64>, tick_count: usize, include_zero: bool) -> Self {
        let (mut lo, mut hi) = extent(values).unwrap_or((0.0, 1.0));

        if include_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }

        if lo == hi {
            if lo == 0.0 {
                hi = 1.0;
            } else {
                let pad = lo.abs() * 0.1;
                lo = (lo - pad).max(f64::MIN);
                hi = (hi + pad).min(f64::MAX);
            }
        }

        let count = tick_count.clamp(1, MAX_TICK_COUNT);

        // Extents wider than f64 can span are split evenly, without rounding
        if !(hi - lo).is_finite() {
            let n = count as f64;
            return Self {
                min: lo,
                max: hi,
                step: hi / n - lo / n,
            };
        }

        for _ in 0..10 {
            let step = tick_step(lo, hi, count);
            let nice_lo = (lo / step).floor() * step;
            let nice_hi = (hi / step).ceil() * step;
            if (nice_lo == lo && nice_hi == hi) || !(nice_hi - nice_lo).is_finite() {
                break;
            }
            lo = nice_lo;
            hi = nice_hi;
        }

        Self {
            min: lo,
            max: hi,
            step: tick_step(lo, hi, count),
        }
    }

    /// Tick values from `min` to `max` inclusive, at most `4 * MAX_TICK_COUNT + 1`
    pub fn ticks(&self) -> Vec<f64> {
        let intervals = (self.max / self.step - self.min / self.step).round();
        if !intervals.is_finite() || intervals < 0.0 {
            return vec![self.min, self.max];
        }
        let n = (intervals as usize).min(4 * MAX_TICK_COUNT);
        (0..=n)
            .map(|i| {
                let up = self.min + i as f64 * self.step;
                if up.is_finite() {
                    up
                } else {
                    self.max - (n - i) as f64 * self.step
                }
            })
            .collect()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Step of 1, 2 or 5 times a power of ten giving roughly `count` intervals
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let exponent = raw.log10().floor() as i32;
    let power = 10f64.powi(exponent.abs());
    let error = if exponent >= 0 { raw / power } else { raw * power };
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    // Divide for negative exponents so 0.2, 0.05, ... come out exact
    if exponent >= 0 {
        factor * power
    } else {
        factor / power
    }
}

/// Format a tick value with just enough decimals for `step`
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let text = format!("{:.*}", decimals, value);
    // Avoid "-0"
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Linear mapping from a domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        // Halved operands keep domains near f64::MAX from overflowing
        r0 + (value * 0.5 - d0 * 0.5) / (d1 * 0.5 - d0 * 0.5) * (r1 - r0)
    }
}

/// Evenly spaced categorical positions, ends flush with the range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    count: usize,
    range: (f64, f64),
}

impl PointScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    /// Distance between neighbouring positions
    pub fn step(&self) -> f64 {
        if self.count <= 1 {
            0.0
        } else {
            (self.range.1 - self.range.0) / (self.count - 1) as f64
        }
    }

    /// Position of the category at `index`; a lone category sits in the middle
    pub fn position(&self, index: usize) -> f64 {
        if self.count <= 1 {
            (self.range.0 + self.range.1) / 2.0
        } else {
            self.range.0 + index as f64 * self.step()
        }
    }

    /// Index of the category closest to `x`
    pub fn nearest(&self, x: f64) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let slot = ((x - self.range.0) / self.step()).round();
                Some(slot.clamp(0.0, (n - 1) as f64) as usize)
            }
        }
    }
}

//! Easing curves, parsed from the usual `family.mode(params)` notation
//! (`power2.out`, `back.out(1.7)`, `elastic.out(1, 0.3)`, `none`).

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SiteError;

const BACK_OVERSHOOT: f64 = 1.70158;
const ELASTIC_AMPLITUDE: f64 = 1.0;
const ELASTIC_PERIOD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Linear,
    /// `power0` is linear, `power1` quadratic, `power2` cubic and so on.
    Power(u8),
    Sine,
    Back(f64),
    Elastic { amplitude: f64, period: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Ease {
    curve: Curve,
    mode: Mode,
}

impl Ease {
    pub const LINEAR: Ease = Ease::new(Curve::Linear, Mode::Out);
    pub const POWER2_OUT: Ease = Ease::new(Curve::Power(2), Mode::Out);
    pub const POWER3_OUT: Ease = Ease::new(Curve::Power(3), Mode::Out);
    pub const POWER2_IN_OUT: Ease = Ease::new(Curve::Power(2), Mode::InOut);
    pub const SINE_IN_OUT: Ease = Ease::new(Curve::Sine, Mode::InOut);

    pub const fn new(curve: Curve, mode: Mode) -> Self {
        Self { curve, mode }
    }

    pub const fn back_out(overshoot: f64) -> Self {
        Self::new(Curve::Back(overshoot), Mode::Out)
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Endpoints are exact: `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self.mode {
            Mode::In => self.ease_in(t),
            Mode::Out => 1.0 - self.ease_in(1.0 - t),
            Mode::InOut => {
                if t < 0.5 {
                    self.ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - self.ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }

    fn ease_in(&self, t: f64) -> f64 {
        match self.curve {
            Curve::Linear => t,
            Curve::Power(n) => t.powi(i32::from(n) + 1),
            Curve::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            Curve::Back(s) => t * t * ((s + 1.0) * t - s),
            Curve::Elastic { amplitude, period } => 1.0 - elastic_out(1.0 - t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t.clamp(0.0, 1.0);
    }
    let a = amplitude.max(1.0);
    // Amplitudes below one shorten the swing by stretching the period.
    let period = if amplitude < 1.0 { period / amplitude } else { period };
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

impl Default for Ease {
    fn default() -> Self {
        Self::POWER2_OUT
    }
}

impl FromStr for Ease {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let spec = raw.trim();
        if spec.eq_ignore_ascii_case("none") || spec.eq_ignore_ascii_case("linear") {
            return Ok(Self::LINEAR);
        }

        let (head, params) = match spec.split_once('(') {
            Some((head, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| SiteError::EaseParams(raw.to_owned()))?;
                (head, parse_params(inner).ok_or_else(|| SiteError::EaseParams(raw.to_owned()))?)
            }
            None => (spec, Vec::new()),
        };

        // A bare family (`power2`) means `.out`, same as the animation library.
        let (family, mode) = match head.split_once('.') {
            Some((family, mode)) => (family, mode),
            None => (head, "out"),
        };
        let mode = match mode {
            "in" => Mode::In,
            "out" => Mode::Out,
            "inOut" => Mode::InOut,
            _ => return Err(SiteError::UnknownEase(raw.to_owned())),
        };

        let curve = match family {
            "sine" => Curve::Sine,
            "back" => Curve::Back(params.first().copied().unwrap_or(BACK_OVERSHOOT)),
            "elastic" => Curve::Elastic {
                amplitude: params.first().copied().unwrap_or(ELASTIC_AMPLITUDE),
                period: params.get(1).copied().unwrap_or(ELASTIC_PERIOD),
            },
            "quad" => Curve::Power(1),
            "cubic" => Curve::Power(2),
            "quart" => Curve::Power(3),
            "quint" => Curve::Power(4),
            other => match other.strip_prefix("power").map(str::parse::<u8>) {
                Some(Ok(0)) => Curve::Linear,
                Some(Ok(n)) if n <= 4 => Curve::Power(n),
                _ => return Err(SiteError::UnknownEase(raw.to_owned())),
            },
        };

        if let Curve::Elastic { amplitude, period } = curve {
            if period <= 0.0 || amplitude <= 0.0 {
                return Err(SiteError::EaseParams(raw.to_owned()));
            }
        }

        Ok(Self { curve, mode })
    }
}

fn parse_params(inner: &str) -> Option<Vec<f64>> {
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }
    inner.split(',').map(|p| p.trim().parse::<f64>().ok()).collect()
}

impl TryFrom<String> for Ease {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::In => "in",
            Mode::Out => "out",
            Mode::InOut => "inOut",
        };
        match self.curve {
            Curve::Linear => write!(f, "none"),
            Curve::Power(n) => write!(f, "power{n}.{mode}"),
            Curve::Sine => write!(f, "sine.{mode}"),
            Curve::Back(s) => write!(f, "back.{mode}({s})"),
            Curve::Elastic { amplitude, period } => write!(f, "elastic.{mode}({amplitude}, {period})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_common_names() {
        assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::POWER2_OUT);
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::POWER3_OUT);
        assert_eq!("power2.inOut".parse::<Ease>().unwrap(), Ease::POWER2_IN_OUT);
        assert_eq!("sine.inOut".parse::<Ease>().unwrap(), Ease::SINE_IN_OUT);
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::LINEAR);
        assert_eq!("power2".parse::<Ease>().unwrap(), Ease::POWER2_OUT);
        assert_eq!("back.out(1.7)".parse::<Ease>().unwrap(), Ease::back_out(1.7));
    }

    #[test]
    fn elastic_defaults_and_params() {
        let e: Ease = "elastic.out(1, 0.3)".parse().unwrap();
        assert_eq!(
            e.curve(),
            Curve::Elastic {
                amplitude: 1.0,
                period: 0.3
            }
        );
        assert!("elastic.out(1, 0)".parse::<Ease>().is_err());
        assert!("elastic.out(0, 0.3)".parse::<Ease>().is_err());
    }

    #[test]
    fn weak_elastic_stretches_period() {
        let weak: Ease = "elastic.out(0.5, 0.3)".parse().unwrap();
        let stretched: Ease = "elastic.out(1, 0.6)".parse().unwrap();
        for i in 1..20 {
            let t = f64::from(i) / 20.0;
            assert!(close(weak.apply(t), stretched.apply(t)), "t = {t}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!("bounce.sideways".parse::<Ease>().is_err());
        assert!("power9.out".parse::<Ease>().is_err());
        assert!("back.out(1.7".parse::<Ease>().is_err());
        assert!("back.out(abc)".parse::<Ease>().is_err());
    }

    #[test]
    fn endpoints_are_exact() {
        for name in ["none", "power2.out", "power3.out", "power2.inOut", "sine.inOut", "back.out(1.7)", "elastic.out(1, 0.3)"] {
            let e: Ease = name.parse().unwrap();
            assert_eq!(e.apply(0.0), 0.0, "{name}");
            assert_eq!(e.apply(1.0), 1.0, "{name}");
        }
    }

    #[test]
    fn curve_shapes() {
        assert!(close(Ease::LINEAR.apply(0.25), 0.25));
        // power2.out is a cubic ease-out
        assert!(close(Ease::POWER2_OUT.apply(0.5), 1.0 - 0.5f64.powi(3)));
        assert!(close(Ease::POWER2_IN_OUT.apply(0.5), 0.5));
        assert!(close(Ease::SINE_IN_OUT.apply(0.5), 0.5));
        // back.out overshoots before settling
        let back = Ease::back_out(1.7);
        assert!((0..100).map(|i| back.apply(f64::from(i) / 100.0)).any(|v| v > 1.0));
    }

    #[test]
    fn display_round_trips() {
        for name in ["power2.out", "sine.inOut", "back.out(1.7)"] {
            let e: Ease = name.parse().unwrap();
            assert_eq!(e.to_string().parse::<Ease>().unwrap(), e);
        }
    }
}

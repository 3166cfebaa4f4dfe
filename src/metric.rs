use crate::error::Error;
use crate::rule::Rule;
use std::fmt;
use std::str::FromStr;

/// Score used to filter or rank rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Support,
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl Metric {
    pub fn value(&self, rule: &Rule) -> f64 {
        match *self {
            Metric::Support => rule.support,
            Metric::Confidence => rule.confidence,
            Metric::Lift => rule.lift,
            Metric::Leverage => rule.leverage,
            Metric::Conviction => rule.conviction,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Metric::Support => "support",
            Metric::Confidence => "confidence",
            Metric::Lift => "lift",
            Metric::Leverage => "leverage",
            Metric::Conviction => "conviction",
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Metric, Error> {
        match s {
            "support" => Ok(Metric::Support),
            "confidence" => Ok(Metric::Confidence),
            "lift" => Ok(Metric::Lift),
            "leverage" => Ok(Metric::Leverage),
            "conviction" => Ok(Metric::Conviction),
            _ => Err(Error::invalid_input(format!(
                "unrecognized metric '{}', expected one of support, confidence, lift, leverage, conviction",
                s
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Metric;

    #[test]
    fn test_parse() {
        assert_eq!("confidence".parse::<Metric>().unwrap(), Metric::Confidence);
        assert_eq!("lift".parse::<Metric>().unwrap(), Metric::Lift);
        assert_eq!("support".parse::<Metric>().unwrap(), Metric::Support);
        assert_eq!("conviction".parse::<Metric>().unwrap(), Metric::Conviction);
        assert!("zhangs".parse::<Metric>().unwrap_err().is_invalid_input());
        assert!("".parse::<Metric>().is_err());
    }

    #[test]
    fn test_parse_is_exact() {
        for name in &["LIFT", "Lift", " lift", "lift ", "Confidence"] {
            assert!(name.parse::<Metric>().unwrap_err().is_invalid_input(), "{}", name);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for metric in &[
            Metric::Support,
            Metric::Confidence,
            Metric::Lift,
            Metric::Leverage,
            Metric::Conviction,
        ] {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), *metric);
        }
    }
}

use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(MeasurementStatus {
    Normal => "NORMAL",
    High => "HIGH",
    Low => "LOW",
});

str_enum!(RiskLevel {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
});

str_enum!(MarkerCategory {
    UricAcid => "URIC_ACID",
    Inflammation => "INFLAMMATION",
    Kidney => "KIDNEY",
    Unknown => "UNKNOWN",
});

impl MeasurementStatus {
    /// Derive status from a value and its bounds.
    ///
    /// A bound only counts when it is set and positive. A lower bound of 0
    /// (what `(<X)` produces) never flags LOW.
    pub fn derive(value: f64, min: Option<f64>, max: Option<f64>) -> Self {
        if let Some(max) = max.filter(|m| *m > 0.0) {
            if value > max {
                return Self::High;
            }
        }
        if let Some(min) = min.filter(|m| *m > 0.0) {
            if value < min {
                return Self::Low;
            }
        }
        Self::Normal
    }
}

impl RiskLevel {
    fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

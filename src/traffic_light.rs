//! An enum whose constants carry their own data and behaviour.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLightError {
    #[error("No traffic light named '{0}' (expected RED, YELLOW or GREEN)")]
    UnknownLight(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficLight {
    Red,
    Yellow,
    Green,
}

impl TrafficLight {
    /// Every light, in declaration order.
    pub const ALL: [TrafficLight; 3] = [TrafficLight::Red, TrafficLight::Yellow, TrafficLight::Green];

    pub fn label(self) -> &'static str {
        match self {
            TrafficLight::Red => "Red",
            TrafficLight::Yellow => "Yellow",
            TrafficLight::Green => "Green",
        }
    }

    pub fn seconds(self) -> u32 {
        match self {
            TrafficLight::Red => 30,
            TrafficLight::Yellow => 5,
            TrafficLight::Green => 25,
        }
    }

    pub fn is_stop(self) -> bool {
        matches!(self, TrafficLight::Red)
    }

    /// Constant name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            TrafficLight::Red => "RED",
            TrafficLight::Yellow => "YELLOW",
            TrafficLight::Green => "GREEN",
        }
    }

    pub fn next(self) -> TrafficLight {
        match self {
            TrafficLight::Red => TrafficLight::Yellow,
            TrafficLight::Yellow => TrafficLight::Green,
            TrafficLight::Green => TrafficLight::Red,
        }
    }

    /// Length of one full RED -> YELLOW -> GREEN cycle.
    pub fn cycle_seconds() -> u32 {
        Self::ALL.iter().map(|light| light.seconds()).sum()
    }

    /// Endless sequence starting at `start` and following `next`.
    pub fn cycle_from(start: TrafficLight) -> impl Iterator<Item = TrafficLight> {
        std::iter::successors(Some(start), |light| Some(light.next()))
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}s)", self.label(), self.seconds())
    }
}

impl FromStr for TrafficLight {
    type Err = ParseLightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|light| light.name() == s)
            .ok_or_else(|| ParseLightError::UnknownLight(s.to_string()))
    }
}

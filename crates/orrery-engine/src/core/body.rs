use serde::{Deserialize, Serialize};

use crate::core::params::{self, ParamError};

/// A body on a simplified Keplerian orbit around the sun.
///
/// `a` is used directly as a pixel distance; `period` is in simulated days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    /// Display name, drawn next to the marker.
    pub name: String,
    /// Semi-major axis in pixels. Always > 0.
    pub a: f64,
    /// Eccentricity. Always within [0, 1].
    pub e: f64,
    /// CSS color of the marker.
    pub color: String,
    /// Orbital period in simulated days. Always > 0.
    pub period: f64,
    /// Descriptive text, drawn under the name and shown on edit.
    #[serde(default)]
    pub info: String,
}

impl OrbitalBody {
    /// Create a circular body with a one-day period.
    pub fn new(name: impl Into<String>, a: f64) -> Self {
        Self {
            name: name.into(),
            a,
            e: 0.0,
            color: "white".to_string(),
            period: 1.0,
            info: String::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_eccentricity(mut self, e: f64) -> Self {
        self.e = e;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Check every orbital invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), ParamError> {
        params::validate_axis(self.a)?;
        params::validate_eccentricity(self.e)?;
        params::validate_period(self.period)?;
        Ok(())
    }

    /// Replace the semi-major axis if the candidate is valid.
    pub fn set_axis(&mut self, a: f64) -> Result<(), ParamError> {
        self.a = params::validate_axis(a)?;
        Ok(())
    }

    /// Replace the eccentricity if the candidate is valid.
    pub fn set_eccentricity(&mut self, e: f64) -> Result<(), ParamError> {
        self.e = params::validate_eccentricity(e)?;
        Ok(())
    }

    /// Replace the period if the candidate is valid.
    pub fn set_period(&mut self, period: f64) -> Result<(), ParamError> {
        self.period = params::validate_period(period)?;
        Ok(())
    }
}

/// The eight planets the viewer starts with.
pub fn default_bodies() -> Vec<OrbitalBody> {
    vec![
        OrbitalBody::new("Mercury", 50.0).with_eccentricity(0.20563).with_color("gray")
            .with_period(88.0).with_info("Closest to the Sun."),
        OrbitalBody::new("Venus", 70.0).with_eccentricity(0.006772).with_color("yellow")
            .with_period(224.7).with_info("Second planet from the Sun."),
        OrbitalBody::new("Earth", 100.0).with_eccentricity(0.016708).with_color("blue")
            .with_period(365.25).with_info("Home to humans."),
        OrbitalBody::new("Mars", 140.0).with_eccentricity(0.0934).with_color("red")
            .with_period(687.0).with_info("Known as the Red Planet."),
        OrbitalBody::new("Jupiter", 200.0).with_eccentricity(0.0489).with_color("orange")
            .with_period(4332.59).with_info("Largest planet in the solar system."),
        OrbitalBody::new("Saturn", 250.0).with_eccentricity(0.0565).with_color("gold")
            .with_period(10759.22).with_info("Famous for its rings."),
        OrbitalBody::new("Uranus", 300.0).with_eccentricity(0.046381).with_color("lightblue")
            .with_period(30688.5).with_info("Known for its blue color."),
        OrbitalBody::new("Neptune", 350.0).with_eccentricity(0.009456).with_color("darkblue")
            .with_period(60182.0).with_info("Farthest from the Sun."),
    ]
}

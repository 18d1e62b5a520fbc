//! Frontend Models
//!
//! Data received from the reactor server and kept for display.

use serde::{Deserialize, Serialize};

use crate::config::MAX_CHART_POINTS;

/// One message on the live socket
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LiveMessage {
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LiveMessage {
    pub fn parse(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}

/// Socket connection state shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Conectando...",
            ConnectionStatus::Connected => "Conectado al servidor",
            ConnectionStatus::Disconnected => "Desconectado. Intentando reconectar...",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "status-dot",
            ConnectionStatus::Connected => "status-dot status-connected",
            ConnectionStatus::Disconnected => "status-dot status-disconnected",
        }
    }
}

/// A sample plotted on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Milliseconds since the Unix epoch
    pub at_ms: f64,
    pub ph: Option<f64>,
    pub temp: Option<f64>,
}

/// Most recent readings, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingSeries {
    readings: Vec<Reading>,
}

impl ReadingSeries {
    /// Append a reading, dropping the oldest past the chart capacity
    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
        if self.readings.len() > MAX_CHART_POINTS {
            let excess = self.readings.len() - MAX_CHART_POINTS;
            self.readings.drain(..excess);
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// pH as shown in the live panel
pub fn format_ph(ph: f64) -> String {
    format!("{:.2}", ph)
}

/// Temperature as shown in the live panel, without the unit
pub fn format_temp(temp: f64) -> String {
    format!("{:.1}", temp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reading() {
        let msg = LiveMessage::parse(r#"{"ph": 8.456, "temp": 24.04}"#).unwrap();
        assert_eq!(msg.ph, Some(8.456));
        assert_eq!(msg.temp, Some(24.04));
        assert!(msg.error.is_none());
    }

    #[test]
    fn test_parse_partial_and_error() {
        let msg = LiveMessage::parse(r#"{"temp": 21}"#).unwrap();
        assert_eq!(msg.ph, None);
        assert_eq!(msg.temp, Some(21.0));

        let msg = LiveMessage::parse(r#"{"error": "sensor offline"}"#).unwrap();
        assert_eq!(msg.error.as_deref(), Some("sensor offline"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(LiveMessage::parse("pong").is_err());
    }

    #[test]
    fn test_series_is_capped() {
        let mut series = ReadingSeries::default();
        for i in 0..(MAX_CHART_POINTS + 5) {
            series.push(Reading { at_ms: i as f64, ph: Some(7.0), temp: None });
        }
        assert_eq!(series.len(), MAX_CHART_POINTS);
        assert_eq!(series.readings()[0].at_ms, 5.0);
        assert_eq!(series.readings().last().unwrap().at_ms, (MAX_CHART_POINTS + 4) as f64);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_ph(8.456), "8.46");
        assert_eq!(format_temp(24.04), "24.0");
    }
}

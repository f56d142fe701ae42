//! Daemon configuration, loaded from a YAML file with CLI overrides
//! applied on top.
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::target::{
    GyroFusionParams, ProtocolError, Transport, DEFAULT_FUSION_MAPPING, DEFAULT_FUSION_THRESHOLD,
};

/// Represents all possible errors loading an [EmulatorConfig]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to deserialize: {0}")]
    DeserializeError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    InvalidError(#[from] ProtocolError),
    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),
}

/// Which controller identity to present to the host.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControllerModel {
    Dualshock4,
    #[default]
    Dualsense,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct EmulatorConfig {
    #[serde(default)]
    pub model: ControllerModel,
    /// Present the DualSense Edge identity; ignored for the DualShock 4.
    #[serde(default)]
    pub edge: bool,
    #[serde(default = "default_bluetooth")]
    pub bluetooth: bool,
    /// Fixed controller MAC as `aa:bb:cc:dd:ee:ff`; synthesized per boot
    /// when absent.
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default = "default_poll_interval_us")]
    pub poll_interval_us: u64,
    #[serde(default = "default_gyro_threshold")]
    pub gyro_threshold: i32,
    #[serde(default = "default_gyro_mapping")]
    pub gyro_mapping: i32,
}

fn default_bluetooth() -> bool {
    true
}

fn default_poll_interval_us() -> u64 {
    1250
}

fn default_gyro_threshold() -> i32 {
    DEFAULT_FUSION_THRESHOLD
}

fn default_gyro_mapping() -> i32 {
    DEFAULT_FUSION_MAPPING
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            model: ControllerModel::default(),
            edge: false,
            bluetooth: default_bluetooth(),
            mac: None,
            poll_interval_us: default_poll_interval_us(),
            gyro_threshold: default_gyro_threshold(),
            gyro_mapping: default_gyro_mapping(),
        }
    }
}

impl EmulatorConfig {
    /// Load an [EmulatorConfig] from the given YAML string
    pub fn from_yaml(content: &str) -> Result<EmulatorConfig, LoadError> {
        let config: EmulatorConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an [EmulatorConfig] from the given YAML file
    pub fn from_yaml_file(path: &str) -> Result<EmulatorConfig, LoadError> {
        let file = std::fs::File::open(path)?;
        let config: EmulatorConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would fault at composition time.
    pub fn validate(&self) -> Result<(), LoadError> {
        self.fusion_params()?;
        self.mac_bytes()?;
        Ok(())
    }

    pub fn transport(&self) -> Transport {
        if self.bluetooth {
            Transport::Bluetooth
        } else {
            Transport::Usb
        }
    }

    pub fn fusion_params(&self) -> Result<GyroFusionParams, ProtocolError> {
        GyroFusionParams::new(self.gyro_threshold, self.gyro_mapping)
    }

    /// The configured MAC in wire order (least significant byte first),
    /// or `None` when one should be synthesized.
    pub fn mac_bytes(&self) -> Result<Option<[u8; 6]>, LoadError> {
        let Some(text) = self.mac.as_deref() else {
            return Ok(None);
        };
        let octets: Vec<u8> = text
            .split(':')
            .map(|part| u8::from_str_radix(part, 16))
            .collect::<Result<_, _>>()
            .map_err(|_| LoadError::InvalidMac(text.to_string()))?;
        if octets.len() != 6 {
            return Err(LoadError::InvalidMac(text.to_string()));
        }
        let mut mac = [0u8; 6];
        for (i, octet) in octets.iter().enumerate() {
            mac[5 - i] = *octet;
        }
        Ok(Some(mac))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_an_empty_document() {
        let config = EmulatorConfig::from_yaml("{}").unwrap();
        assert_eq!(config.model, ControllerModel::Dualsense);
        assert!(config.bluetooth);
        assert_eq!(config.poll_interval_us, 1250);
        assert!(config.mac_bytes().unwrap().is_none());
    }

    #[test]
    fn zero_gyro_mapping_is_rejected_at_load() {
        let err = EmulatorConfig::from_yaml("gyro_mapping: 0").unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn mac_parses_into_wire_order() {
        let config = EmulatorConfig::from_yaml("mac: aa:bb:cc:dd:ee:ff").unwrap();
        let mac = config.mac_bytes().unwrap().unwrap();
        assert_eq!(mac, [0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa]);

        assert!(EmulatorConfig::from_yaml("mac: not-a-mac").is_err());
        assert!(EmulatorConfig::from_yaml("mac: aa:bb:cc").is_err());
    }

    #[test]
    fn model_names_deserialize() {
        let config = EmulatorConfig::from_yaml("model: dualshock4\nbluetooth: false").unwrap();
        assert_eq!(config.model, ControllerModel::Dualshock4);
        assert_eq!(config.transport(), Transport::Usb);
    }
}

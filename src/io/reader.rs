use std::io::Read;

use serde::de::DeserializeOwned;

use crate::io::format::{json, toml, yaml};
use crate::io::{Format, IoError};

/// Reads one document of `format` into `T`.
pub fn read_document<T: DeserializeOwned, R: Read>(reader: R, format: Format) -> Result<T, IoError> {
    match format {
        Format::Json => json::read_json(reader),
        Format::Yaml => yaml::read_yaml(reader),
        Format::Toml => toml::read_toml(reader),
    }
}

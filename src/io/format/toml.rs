use std::io::Read;

use serde::de::DeserializeOwned;

use crate::io::IoError;

/// TOML has no streaming parser; the whole document is buffered first.
pub fn read_toml<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(toml::from_str(&text)?)
}

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::io::IoError;

pub fn read_yaml<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, IoError> {
    Ok(serde_yaml::from_reader(reader)?)
}

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::io::IoError;

pub fn read_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, IoError> {
    Ok(serde_json::from_reader(reader)?)
}

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// One element of a persisted JSON array.
///
/// Elements that do not match the current schema are carried verbatim so a
/// later write puts them back exactly as they were read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredRecord<T> {
    Decoded(T),
    Undecodable(Value),
}

impl<T> StoredRecord<T> {
    pub fn decoded(&self) -> Option<&T> {
        match self {
            StoredRecord::Decoded(record) => Some(record),
            StoredRecord::Undecodable(_) => None,
        }
    }

    pub fn decoded_mut(&mut self) -> Option<&mut T> {
        match self {
            StoredRecord::Decoded(record) => Some(record),
            StoredRecord::Undecodable(_) => None,
        }
    }
}

/// Decode a persisted JSON array element by element.
///
/// A document that is not an array at all yields no records.
pub fn decode_array<T: DeserializeOwned>(raw: &str, label: &str) -> Vec<StoredRecord<T>> {
    let elements: Vec<Value> = match serde_json::from_str(raw) {
        Ok(elements) => elements,
        Err(e) => {
            warn!("Ignoring malformed {}: {}", label, e);
            return Vec::new();
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match T::deserialize(&element) {
            Ok(record) => StoredRecord::Decoded(record),
            Err(e) => {
                warn!("Keeping unreadable {} entry {} as-is: {}", label, index, e);
                StoredRecord::Undecodable(element)
            }
        })
        .collect()
}

use crate::domain::nullable::Nullable;
use crate::utils::error::{NullableError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.get() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

impl<T> Nullable<T> {
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self).map_err(NullableError::Encode)
    }

    pub fn from_json<'de>(text: &'de str) -> Result<Self>
    where
        T: Deserialize<'de> + Default,
    {
        serde_json::from_str(text).map_err(NullableError::Decode)
    }

    /// Decodes `text` into this container. A malformed input leaves it untouched.
    pub fn decode_json<'de>(&mut self, text: &'de str) -> Result<()>
    where
        T: Deserialize<'de> + Default,
    {
        *self = Self::from_json(text)?;
        Ok(())
    }
}

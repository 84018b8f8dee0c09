use super::core::Vector3d;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Vector3d {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Vector3d {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let arr = <[f64; 3]>::deserialize(d)?;
        Ok(Vector3d::from_array(arr))
    }
}

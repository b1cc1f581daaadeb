use serde::{Deserialize, Serialize};

/// Customer record as it travels over the wire and sits in the store.
///
/// `id` is assigned by the store on insert and forced on replace, so
/// payloads may omit it (`serde(default)`); every other field must be
/// present with the right type or the decode fails.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: i64,
    pub contacted: bool,
}

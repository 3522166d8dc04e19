mod extra;
pub mod lookup;

pub use lookup::{ConnectionLookup, StaticConnections};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub conn_id: String,
    pub conn_type: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub extra: Value,
}

impl Connection {
    pub fn extra_value(&self, path: &str) -> Option<&Value> {
        extra::resolve_path(&self.extra, path)
    }
}

pub mod selector;
pub mod variants;

pub use selector::Mapping;
pub use variants::builtin_variants;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::connection::Connection;

pub type ProfileArgs = serde_json::Map<String, Value>;
pub type Profile = serde_json::Map<String, Value>;
pub type EnvVars = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Login,
    Password,
    Extra(&'static str),
}

#[derive(Debug, Clone)]
pub struct Variant {
    pub name: &'static str,
    pub connection_type: &'static str,
    pub profile_type: &'static str,
    pub required_fields: &'static [&'static str],
    pub field_sources: &'static [(&'static str, FieldSource)],
    pub secret_fields: &'static [&'static str],
}

impl Variant {
    pub fn can_claim_connection(
        &self,
        connection: &Connection,
        profile_args: &ProfileArgs,
    ) -> bool {
        if connection.conn_type != self.connection_type {
            return false;
        }

        self.required_fields
            .iter()
            .all(|field| self.resolve_field(field, connection, profile_args).is_some())
    }

    pub fn profile(&self, connection: &Connection, profile_args: &ProfileArgs) -> Profile {
        let mut profile = Profile::new();
        profile.insert(
            "type".to_string(),
            Value::String(self.profile_type.to_string()),
        );

        for (field, _) in self.field_sources {
            if self.is_secret(field) {
                continue;
            }
            if let Some(value) = self.resolve_field(field, connection, profile_args) {
                profile.insert((*field).to_string(), value);
            }
        }

        for (key, value) in profile_args {
            if value.is_null() {
                continue;
            }
            profile.insert(key.clone(), value.clone());
        }

        profile
    }

    pub fn env_vars(&self, connection: &Connection, profile_args: &ProfileArgs) -> EnvVars {
        let mut env_vars = EnvVars::new();

        for field in self.secret_fields {
            let Some(value) = self.resolve_field(field, connection, profile_args) else {
                continue;
            };
            let name = format!(
                "{}_{}",
                self.connection_type.to_uppercase(),
                field.to_uppercase()
            );
            env_vars.insert(name, scalar_to_string(&value));
        }

        env_vars
    }

    // Absent means missing or JSON null; empty strings and zeros are values.
    pub fn resolve_field(
        &self,
        field: &str,
        connection: &Connection,
        profile_args: &ProfileArgs,
    ) -> Option<Value> {
        if let Some(value) = profile_args.get(field) {
            if !value.is_null() {
                return Some(value.clone());
            }
        }

        match self.source_for(field)? {
            FieldSource::Login => connection.login.clone().map(Value::String),
            FieldSource::Password => connection.password.clone().map(Value::String),
            FieldSource::Extra(path) => connection
                .extra_value(path)
                .filter(|value| !value.is_null())
                .cloned(),
        }
    }

    fn source_for(&self, field: &str) -> Option<FieldSource> {
        self.field_sources
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, source)| *source)
    }

    fn is_secret(&self, field: &str) -> bool {
        self.secret_fields.iter().any(|secret| *secret == field)
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

use tracing::debug;

use crate::connection::{Connection, ConnectionLookup};
use crate::error::{MapError, MapResult};

use super::variants::builtin_variants;
use super::{EnvVars, Profile, ProfileArgs, Variant};

#[derive(Debug, Clone)]
pub struct Mapping {
    variant: &'static Variant,
    connection: Connection,
    profile_args: ProfileArgs,
}

impl Mapping {
    pub fn new(
        variant: &'static Variant,
        connection: Connection,
        profile_args: ProfileArgs,
    ) -> Self {
        Self {
            variant,
            connection,
            profile_args,
        }
    }

    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn profile_args(&self) -> &ProfileArgs {
        &self.profile_args
    }

    pub fn profile(&self) -> Profile {
        self.variant.profile(&self.connection, &self.profile_args)
    }

    pub fn env_vars(&self) -> EnvVars {
        self.variant.env_vars(&self.connection, &self.profile_args)
    }
}

pub fn select(
    lookup: &dyn ConnectionLookup,
    conn_id: &str,
    profile_args: ProfileArgs,
) -> MapResult<Mapping> {
    let connection = lookup
        .get_connection(conn_id)
        .ok_or_else(|| MapError::ConnectionNotFound(conn_id.to_string()))?;

    for &variant in builtin_variants() {
        if variant.can_claim_connection(&connection, &profile_args) {
            debug!(variant = variant.name, conn_id, "profile mapping claimed connection");
            return Ok(Mapping::new(variant, connection, profile_args));
        }
    }

    debug!(conn_id, conn_type = %connection.conn_type, "no profile mapping claimed connection");

    Err(MapError::NoMatchingProfile {
        conn_id: connection.conn_id,
        conn_type: connection.conn_type,
    })
}

use std::collections::HashMap;

use super::Connection;

pub trait ConnectionLookup {
    fn get_connection(&self, conn_id: &str) -> Option<Connection>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticConnections {
    connections: HashMap<String, Connection>,
}

impl StaticConnections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, connection: Connection) {
        self.connections
            .insert(connection.conn_id.clone(), connection);
    }
}

impl ConnectionLookup for StaticConnections {
    fn get_connection(&self, conn_id: &str) -> Option<Connection> {
        self.connections.get(conn_id).cloned()
    }
}

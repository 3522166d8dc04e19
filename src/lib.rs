pub mod connection;
pub mod error;
pub mod mapping;

use connection::ConnectionLookup;
use error::MapResult;
use mapping::{Mapping, ProfileArgs};

pub fn select_mapping(
    lookup: &dyn ConnectionLookup,
    conn_id: &str,
    profile_args: ProfileArgs,
) -> MapResult<Mapping> {
    mapping::selector::select(lookup, conn_id, profile_args)
}

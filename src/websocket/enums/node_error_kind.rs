use serde::{Deserialize, Serialize};

/// Class of the last failure seen on a node connection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeErrorKind {
    Transport,
    Authentication,
    Decoding,
}

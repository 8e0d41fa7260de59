pub mod error;
pub mod kind;
pub mod table;
pub mod types;
pub mod value;

pub use error::{ImGuardError, ScopeError};
pub use kind::{BeginOp, EndOp, PushPolicy, ScopeKind};
pub use table::{BeginPairing, EndPairing, PairingTable, PAIRING_TABLE};
pub use types::*;
pub use value::*;

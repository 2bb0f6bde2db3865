//! Domain types.

mod outcome;
mod public_key;
mod record;
mod sealed;

pub use outcome::{Action, Outcome};
pub use public_key::PublicKeyMaterial;
pub use record::SecretRecord;
pub use sealed::SealedPayload;

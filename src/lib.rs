//! sealsecret - Seal a value and upsert it as a GitHub Actions secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── upsert        # Drive one run, report the output
//! │   ├── action        # Actions runner step outputs
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── scope         # Organization/repository/environment resolution
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait, seal/open helpers
//!     │   └── sealed_box # libsodium-compatible sealed box
//!     ├── api/          # Secrets store access
//!     │   ├── mod       # SecretsApi trait, credentials
//!     │   └── github    # GitHub REST implementation
//!     ├── secrets       # Existence check, seal, upsert
//!     ├── observer      # Progress events
//!     ├── config        # Input normalization
//!     └── validation    # Secret name rules
//! ```
//!
//! # Flow
//!
//! 1. Resolve the [`Scope`](core::scope::Scope) once from owner/repo/environment
//! 2. Check whether the secret exists (404 means absent, anything else fails)
//! 3. Unless it exists and overwrite is off: fetch the scope's public key,
//!    seal the value, and write it

pub mod cli;
pub mod core;
pub mod error;

//! Test fixtures and constants.

/// Private key of the mock store (any 32 bytes are a valid X25519 key).
pub const TEST_SECRET_KEY: [u8; 32] = [
    0x42, 0x13, 0x9a, 0x07, 0xc1, 0x5e, 0x22, 0x8d, 0x6b, 0xf0, 0x31, 0x4c, 0x97, 0x0a, 0xd5,
    0x68, 0x1f, 0xe3, 0x76, 0x2b, 0xb8, 0x44, 0x09, 0xce, 0x5d, 0x80, 0x3a, 0xf7, 0x12, 0x6e,
    0xa1, 0x29,
];

/// Key id the mock store publishes.
pub const TEST_KEY_ID: &str = "568250167242549743";

pub const CREATED_AT: &str = "2023-05-10T14:59:22Z";
pub const UPDATED_AT: &str = "2024-01-10T14:59:22Z";

pub const ORG_KEY_PATH: &str = "/orgs/acme/actions/secrets/public-key";
pub const REPO_KEY_PATH: &str = "/repos/acme/web/actions/secrets/public-key";
pub const ENV_KEY_PATH: &str = "/repos/acme/web/environments/prod/secrets/public-key";

/// Secret `X` in each scope.
pub const ORG_SECRET_PATH: &str = "/orgs/acme/actions/secrets/X";
pub const REPO_SECRET_PATH: &str = "/repos/acme/web/actions/secrets/X";
pub const ENV_SECRET_PATH: &str = "/repos/acme/web/environments/prod/secrets/X";

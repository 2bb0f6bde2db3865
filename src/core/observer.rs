//! Progress reporting for upsert runs.
//!
//! The orchestrator reports what it is doing through an [`Observer`] instead
//! of logging directly, so tests can assert on the event sequence.

use tracing::info;

use crate::core::domain::SecretRecord;
use crate::core::scope::Scope;

/// A step of an upsert run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// About to query whether the secret exists
    CheckingExistence { scope: &'a Scope, name: &'a str },
    /// The secret exists
    Found { record: &'a SecretRecord },
    /// The secret does not exist
    NotFound { name: &'a str },
    /// About to fetch the scope's public key
    FetchingKey { scope: &'a Scope },
    /// About to write the sealed value
    Writing { scope: &'a Scope, name: &'a str },
    /// Left an existing secret untouched
    Skipped { scope: &'a Scope, name: &'a str },
}

/// Sink for upsert events.
pub trait Observer: Send + Sync {
    fn on_event(&self, event: &Event<'_>);
}

/// Observer that emits `tracing` records at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &Event<'_>) {
        match event {
            Event::CheckingExistence { scope, name } => {
                info!("Checking if the secret {} exists in the {}", name, scope)
            }
            Event::Found { record } => match (record.created_at, record.updated_at) {
                (Some(created_at), Some(updated_at)) => info!(
                    %created_at,
                    %updated_at,
                    "The secret {} exists and was created at {} and last updated at {}",
                    record.name,
                    created_at.to_rfc2822(),
                    updated_at.to_rfc2822()
                ),
                _ => info!("The secret {} exists", record.name),
            },
            Event::NotFound { name } => info!("The secret {} does not exist", name),
            Event::FetchingKey { scope } => info!("Getting public key for the {}", scope),
            Event::Writing { scope, name } => {
                info!("Writing secret {} to the {}", name, scope)
            }
            Event::Skipped { scope, name } => info!(
                "Secret {} already exists in the {} and overwrite is off, leaving it unchanged",
                name, scope
            ),
        }
    }
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&self, _event: &Event<'_>) {}
}

//! Execution context for cmdlets.

use std::sync::Arc;

use crate::backend::{FileOps, NetOps, SimulatedDrive, SimulatedNet, SimulatedSystem, SystemOps};
use crate::session::SessionState;

use super::traits::CmdletSchema;

/// Everything a cmdlet can touch: the session state, the capability
/// handles, and the schema list for help and command discovery.
pub struct ExecContext {
    /// Mutable session state, exclusively owned by one interpreter.
    pub session: SessionState,
    /// Item and content operations.
    pub files: Arc<dyn FileOps>,
    /// Process, service, and machine information.
    pub system: Arc<dyn SystemOps>,
    /// Simulated network operations.
    pub net: Arc<dyn NetOps>,
    /// Schemas of every registered cmdlet.
    pub schemas: Vec<CmdletSchema>,
}

impl ExecContext {
    /// Build a context around an existing session and backends.
    pub fn new(
        session: SessionState,
        files: Arc<dyn FileOps>,
        system: Arc<dyn SystemOps>,
        net: Arc<dyn NetOps>,
    ) -> Self {
        Self {
            session,
            files,
            system,
            net,
            schemas: Vec::new(),
        }
    }

    /// Default-seeded session with the simulated backends. The
    /// constructor every test module reaches for.
    pub fn simulated() -> Self {
        Self::with_session(SessionState::default())
    }

    /// Simulated backends around a specific session.
    pub fn with_session(session: SessionState) -> Self {
        Self::new(
            session,
            Arc::new(SimulatedDrive),
            Arc::new(SimulatedSystem),
            Arc::new(SimulatedNet),
        )
    }

    /// Install the registered cmdlet schemas.
    pub fn set_schemas(&mut self, schemas: Vec<CmdletSchema>) {
        self.schemas = schemas;
    }
}

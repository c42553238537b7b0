//! Capability interfaces behind the side-effecting cmdlets.
//!
//! File, system, and network operations are simulated in this design,
//! but cmdlets reach them through these traits so a real backing could
//! be injected later without touching the cmdlet catalog.

mod simulated;

pub use simulated::{SimulatedDrive, SimulatedNet, SimulatedSystem};

use async_trait::async_trait;

/// One row of a directory listing.
#[derive(Debug, Clone)]
pub struct ItemEntry {
    pub mode: String,
    pub last_write_time: String,
    pub length: String,
    pub name: String,
}

/// One row of the process table.
#[derive(Debug, Clone)]
pub struct ProcessEntry {
    pub handles: u32,
    pub npm_kb: u32,
    pub pm_kb: u32,
    pub ws_kb: u32,
    pub cpu_seconds: f32,
    pub id: u32,
    pub name: String,
}

/// One row of the service table.
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    pub status: String,
    pub name: String,
    pub display_name: String,
}

/// A single echo reply from `Test-Connection`.
#[derive(Debug, Clone)]
pub struct PingReply {
    pub source: String,
    pub destination: String,
    pub address: String,
    pub bytes: u32,
    pub time_ms: u32,
}

/// Item and content operations. Every method is a simulation in the
/// shipped implementation: reads return canned bodies, writes return
/// confirmation strings and touch nothing on disk.
pub trait FileOps: Send + Sync {
    /// Directory listing for the given location.
    fn list_items(&self, location: &str) -> Vec<ItemEntry>;
    /// Content of the item at `path`; body varies by filename pattern.
    fn read_content(&self, path: &str) -> String;
    /// Whether `path` matches one of the known-existing prefixes.
    fn path_exists(&self, path: &str) -> bool;
    /// Create an item, returning a confirmation line.
    fn create(&self, path: &str, item_type: &str) -> String;
    /// Copy an item, returning a confirmation line.
    fn copy(&self, source: &str, destination: &str) -> String;
    /// Move an item, returning a confirmation line.
    fn rename(&self, source: &str, destination: &str) -> String;
    /// Remove an item, returning a confirmation line.
    fn remove(&self, path: &str) -> String;
}

/// Process, service, and machine information.
pub trait SystemOps: Send + Sync {
    fn processes(&self) -> Vec<ProcessEntry>;
    fn services(&self) -> Vec<ServiceEntry>;
    /// Fixed descriptive block for `Get-ComputerInfo`.
    fn computer_info(&self) -> String;
}

/// Simulated network operations. The only async seam in the kernel:
/// implementations suspend cooperatively even though no I/O occurs.
#[async_trait]
pub trait NetOps: Send + Sync {
    /// Canned HTTP response block for the given URI.
    async fn fetch(&self, uri: &str) -> String;
    /// Canned echo reply for the given target.
    async fn ping(&self, target: &str) -> PingReply;
}

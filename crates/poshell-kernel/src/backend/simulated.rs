//! Simulated capability implementations.
//!
//! All demo data lives here: the fixed directory listing, the canned
//! file bodies, the process and service tables, and the pretend
//! network responses. Cmdlets stay free of literals beyond their own
//! confirmation wording.

use async_trait::async_trait;

use super::{FileOps, ItemEntry, NetOps, PingReply, ProcessEntry, ServiceEntry, SystemOps};

/// Paths that `Test-Path` reports as existing. Matching is a
/// case-insensitive substring check against the queried path.
const KNOWN_PATHS: &[&str] = &[
    "C:\\",
    "C:\\Users",
    "C:\\Users\\Guest",
    "C:\\Windows",
    "C:\\Program Files",
    "C:\\Temp",
];

/// In-memory stand-in for a drive.
#[derive(Debug, Default)]
pub struct SimulatedDrive;

impl FileOps for SimulatedDrive {
    fn list_items(&self, _location: &str) -> Vec<ItemEntry> {
        let entry = |mode: &str, time: &str, length: &str, name: &str| ItemEntry {
            mode: mode.to_string(),
            last_write_time: time.to_string(),
            length: length.to_string(),
            name: name.to_string(),
        };
        vec![
            entry("d-----", "1/15/2026  9:12 AM", "", "Documents"),
            entry("d-----", "1/15/2026  9:12 AM", "", "Downloads"),
            entry("d-----", "1/15/2026  9:12 AM", "", "Pictures"),
            entry("-a----", "2/02/2026  4:31 PM", "1024", "notes.txt"),
            entry("-a----", "2/02/2026  4:31 PM", "2348", "readme.md"),
            entry("-a----", "2/03/2026 11:05 AM", "512", "script.ps1"),
        ]
    }

    fn read_content(&self, path: &str) -> String {
        let lower = path.to_lowercase();
        if lower.contains("readme") {
            concat!(
                "# Project Readme\n",
                "\n",
                "Welcome to the simulated drive. This file is generated\n",
                "content; nothing was read from a real disk.\n",
            )
            .to_string()
        } else if lower.ends_with(".ps1") {
            concat!(
                "# script.ps1\n",
                "Write-Host \"Hello from a simulated script\"\n",
                "Get-Date\n",
            )
            .to_string()
        } else {
            format!("Simulated content of {path}\n")
        }
    }

    fn path_exists(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        KNOWN_PATHS
            .iter()
            .any(|known| lower.contains(&known.to_lowercase()))
    }

    fn create(&self, path: &str, item_type: &str) -> String {
        format!("{item_type} '{path}' created")
    }

    fn copy(&self, source: &str, destination: &str) -> String {
        format!("Copied '{source}' to '{destination}'")
    }

    fn rename(&self, source: &str, destination: &str) -> String {
        format!("Moved '{source}' to '{destination}'")
    }

    fn remove(&self, path: &str) -> String {
        format!("Removed '{path}'")
    }
}

/// Fixed process and service tables.
#[derive(Debug, Default)]
pub struct SimulatedSystem;

impl SystemOps for SimulatedSystem {
    fn processes(&self) -> Vec<ProcessEntry> {
        let proc = |handles, npm_kb, pm_kb, ws_kb, cpu_seconds, id, name: &str| ProcessEntry {
            handles,
            npm_kb,
            pm_kb,
            ws_kb,
            cpu_seconds,
            id,
            name: name.to_string(),
        };
        vec![
            proc(1432, 84, 218_764, 301_444, 142.58, 4312, "chrome"),
            proc(2188, 96, 88_120, 132_800, 310.02, 1184, "explorer"),
            proc(644, 31, 72_456, 95_212, 12.41, 7788, "powershell"),
            proc(988, 42, 14_020, 28_336, 88.17, 904, "svchost"),
            proc(1771, 65, 402_188, 388_204, 96.33, 5620, "Code"),
        ]
    }

    fn services(&self) -> Vec<ServiceEntry> {
        let svc = |status: &str, name: &str, display_name: &str| ServiceEntry {
            status: status.to_string(),
            name: name.to_string(),
            display_name: display_name.to_string(),
        };
        vec![
            svc("Running", "Dhcp", "DHCP Client"),
            svc("Running", "Dnscache", "DNS Client"),
            svc("Running", "EventLog", "Windows Event Log"),
            svc("Stopped", "Fax", "Fax"),
            svc("Running", "Spooler", "Print Spooler"),
            svc("Stopped", "WSearch", "Windows Search"),
        ]
    }

    fn computer_info(&self) -> String {
        concat!(
            "WindowsProductName       : Windows 11 Pro\n",
            "WindowsVersion           : 23H2\n",
            "OsArchitecture           : 64-bit\n",
            "CsName                   : DESKTOP-SIM01\n",
            "CsNumberOfLogicalProcessors : 8\n",
            "OsTotalVisibleMemorySize : 16642340\n",
            "TimeZone                 : (UTC+00:00) Coordinated Universal Time",
        )
        .to_string()
    }
}

/// Pretend network. Suspends once per call so the async seam is real,
/// then answers from fixed data.
#[derive(Debug, Default)]
pub struct SimulatedNet;

#[async_trait]
impl NetOps for SimulatedNet {
    async fn fetch(&self, uri: &str) -> String {
        tokio::task::yield_now().await;
        format!(
            concat!(
                "StatusCode        : 200\n",
                "StatusDescription : OK\n",
                "Content           : <!DOCTYPE html><html><head><title>Simulated response",
                "</title></head><body>Response from {uri}</body></html>\n",
                "RawContentLength  : 1256",
            ),
            uri = uri
        )
    }

    async fn ping(&self, target: &str) -> PingReply {
        tokio::task::yield_now().await;
        PingReply {
            source: "DESKTOP-SIM01".to_string(),
            destination: target.to_string(),
            address: "127.0.0.1".to_string(),
            bytes: 32,
            time_ms: 1,
        }
    }
}

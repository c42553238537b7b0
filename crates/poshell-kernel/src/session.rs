//! Per-session interpreter state.
//!
//! One `SessionState` lives for the lifetime of its owning
//! `Interpreter` and is mutated only by cmdlets during their own
//! execution. Nothing here is global: two interpreters never share
//! state.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde_json::json;

use crate::value::Value;

/// Mutable session state: location, variables, aliases, loaded modules.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current working location, a Windows-style path string.
    pub current_location: String,
    /// Home path used by `~` and the location seed.
    pub home: String,
    /// Display name reported by `Get-Host`.
    pub host_name: String,
    /// Variable table. BTreeMap keeps `Get-Variable` output stable.
    pub variables: BTreeMap<String, Value>,
    /// Lowercase short name → canonical cmdlet name. Read-only after
    /// construction in the current cmdlet catalog.
    pub aliases: HashMap<String, String>,
    /// Names of loaded modules. Insertion only; no removal cmdlet.
    pub loaded_modules: BTreeSet<String>,
}

impl SessionState {
    /// Build a session seeded with the fixed defaults.
    pub fn new(home: impl Into<String>, host_name: impl Into<String>) -> Self {
        let home = home.into();

        let mut variables = BTreeMap::new();
        variables.insert(
            "PSVersionTable".to_string(),
            Value::Object(json!({
                "PSVersion": "5.1.22621.1",
                "PSEdition": "Desktop",
                "Platform": "Win32NT",
                "CLRVersion": "4.0.30319.42000",
            })),
        );
        variables.insert("ExecutionPolicy".to_string(), Value::from("Restricted"));
        variables.insert(
            "PROFILE".to_string(),
            Value::String(format!(
                "{home}\\Documents\\WindowsPowerShell\\Microsoft.PowerShell_profile.ps1"
            )),
        );
        variables.insert("HOME".to_string(), Value::String(home.clone()));
        variables.insert(
            "PSHOME".to_string(),
            Value::from("C:\\Windows\\System32\\WindowsPowerShell\\v1.0"),
        );

        let mut loaded_modules = BTreeSet::new();
        for module in [
            "Microsoft.PowerShell.Management",
            "Microsoft.PowerShell.Utility",
            "PSReadLine",
        ] {
            loaded_modules.insert(module.to_string());
        }

        Self {
            current_location: home.clone(),
            home,
            host_name: host_name.into(),
            variables,
            aliases: seed_aliases(),
            loaded_modules,
        }
    }

    /// Resolve a candidate command name through the alias table.
    ///
    /// Lookup is case-insensitive; a miss returns the candidate
    /// verbatim, so canonical names dispatch directly.
    pub fn resolve_alias(&self, candidate: &str) -> String {
        self.aliases
            .get(&candidate.to_lowercase())
            .cloned()
            .unwrap_or_else(|| candidate.to_string())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new("C:\\Users\\Guest", "PoShell Console Host")
    }
}

/// The fixed alias seed: the common short names a session starts with.
fn seed_aliases() -> HashMap<String, String> {
    let pairs: &[(&str, &str)] = &[
        ("ls", "Get-ChildItem"),
        ("dir", "Get-ChildItem"),
        ("gci", "Get-ChildItem"),
        ("cd", "Set-Location"),
        ("chdir", "Set-Location"),
        ("sl", "Set-Location"),
        ("pwd", "Get-Location"),
        ("gl", "Get-Location"),
        ("cat", "Get-Content"),
        ("gc", "Get-Content"),
        ("type", "Get-Content"),
        ("echo", "Write-Output"),
        ("write", "Write-Output"),
        ("ps", "Get-Process"),
        ("gps", "Get-Process"),
        ("gsv", "Get-Service"),
        ("gcm", "Get-Command"),
        ("man", "Get-Help"),
        ("help", "Get-Help"),
        ("gv", "Get-Variable"),
        ("sv", "Set-Variable"),
        ("set", "Set-Variable"),
        ("gmo", "Get-Module"),
        ("ipmo", "Import-Module"),
        ("ni", "New-Item"),
        ("cp", "Copy-Item"),
        ("copy", "Copy-Item"),
        ("mv", "Move-Item"),
        ("move", "Move-Item"),
        ("rm", "Remove-Item"),
        ("del", "Remove-Item"),
        ("ri", "Remove-Item"),
        ("cls", "Clear-Host"),
        ("clear", "Clear-Host"),
        ("iwr", "Invoke-WebRequest"),
        ("curl", "Invoke-WebRequest"),
        ("wget", "Invoke-WebRequest"),
        ("ping", "Test-Connection"),
        ("date", "Get-Date"),
        ("random", "Get-Random"),
        ("measure", "Measure-Object"),
        ("select", "Select-Object"),
        ("where", "Where-Object"),
        ("sort", "Sort-Object"),
        ("ft", "Format-Table"),
        ("fl", "Format-List"),
        ("oss", "Out-String"),
    ];
    pairs
        .iter()
        .map(|(short, canonical)| (short.to_string(), canonical.to_string()))
        .collect()
}

//! Built-in cmdlets.
//!
//! The fixed catalog every session starts with. Each file holds one
//! cmdlet or one tightly related pair; no cmdlet calls another.

mod child_item;
mod clear_host;
mod command_query;
mod computer_info;
mod content;
mod date;
mod execution_policy;
mod help;
mod host;
mod item;
mod location;
mod module;
mod object_ops;
mod process;
mod random;
mod service;
mod test_connection;
mod test_path;
mod variable;
mod web_request;
mod write_output;

use super::CmdletRegistry;

/// Register the full built-in catalog.
pub fn register_builtins(registry: &mut CmdletRegistry) {
    registry.register(child_item::GetChildItem);
    registry.register(clear_host::ClearHost);
    registry.register(command_query::GetCommand);
    registry.register(computer_info::GetComputerInfo);
    registry.register(content::GetContent);
    registry.register(date::GetDate);
    registry.register(execution_policy::GetExecutionPolicy);
    registry.register(help::GetHelp);
    registry.register(host::GetHost);
    registry.register(item::NewItem);
    registry.register(item::CopyItem);
    registry.register(item::MoveItem);
    registry.register(item::RemoveItem);
    registry.register(location::GetLocation);
    registry.register(location::SetLocation);
    registry.register(module::GetModule);
    registry.register(module::ImportModule);
    registry.register(object_ops::MeasureObject);
    registry.register(object_ops::SelectObject);
    registry.register(object_ops::WhereObject);
    registry.register(object_ops::SortObject);
    registry.register(object_ops::FormatTable);
    registry.register(object_ops::FormatList);
    registry.register(object_ops::OutString);
    registry.register(process::GetProcess);
    registry.register(random::GetRandom);
    registry.register(service::GetService);
    registry.register(test_connection::TestConnection);
    registry.register(test_path::TestPath);
    registry.register(variable::GetVariable);
    registry.register(variable::SetVariable);
    registry.register(web_request::InvokeWebRequest);
    registry.register(write_output::WriteOutput);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_registers_every_cmdlet() {
        let mut registry = CmdletRegistry::new();
        register_builtins(&mut registry);
        assert_eq!(registry.len(), 33);
        for name in [
            "Get-ChildItem",
            "Set-Location",
            "Get-Location",
            "Get-Process",
            "Invoke-WebRequest",
            "Out-String",
        ] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }
}

//! Get-Location / Set-Location — query and change the working location.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Location: report the current location.
pub struct GetLocation;

#[async_trait]
impl Cmdlet for GetLocation {
    fn name(&self) -> &str {
        "Get-Location"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Location", "Display the current working location")
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        Ok(CmdletOutput::text(ctx.session.current_location.clone()))
    }
}

/// Set-Location: change the current location.
///
/// Supports `~`, drive-letter absolute paths, `..`, and relative
/// append. Without an argument the location resets to home.
pub struct SetLocation;

#[async_trait]
impl Cmdlet for SetLocation {
    fn name(&self) -> &str {
        "Set-Location"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Set-Location", "Change the current working location").param(
            ParamSchema::optional("Path", "Target path: ~, an absolute path, .., or relative"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let home = ctx.session.home.clone();
        let target = args.bare(0).unwrap_or("~").replace('/', "\\");

        let next = if target == "~" {
            home
        } else if let Some(rest) = target.strip_prefix("~\\") {
            format!("{home}\\{rest}")
        } else if target == ".." {
            parent_of(&ctx.session.current_location)
        } else if is_drive_absolute(&target) {
            normalize_drive_path(&target)
        } else {
            let current = ctx.session.current_location.trim_end_matches('\\');
            format!("{current}\\{target}")
        };

        ctx.session.current_location = next;
        Ok(CmdletOutput::text(""))
    }
}

/// Whether the path starts with a drive-letter prefix like `C:`.
fn is_drive_absolute(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}

/// A bare drive gets its root backslash; anything longer loses a
/// trailing separator.
fn normalize_drive_path(path: &str) -> String {
    if path.len() == 2 {
        format!("{path}\\")
    } else if path.len() > 3 {
        path.trim_end_matches('\\').to_string()
    } else {
        path.to_string()
    }
}

/// One segment up, stopping at the drive root.
fn parent_of(location: &str) -> String {
    let trimmed = location.trim_end_matches('\\');
    match trimmed.rfind('\\') {
        Some(idx) if idx > 2 => trimmed[..idx].to_string(),
        // At or directly under the drive root: stay at the root.
        _ => {
            let drive: String = trimmed.chars().take(2).collect();
            format!("{drive}\\")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn get_location_reports_current() {
        let mut ctx = ExecContext::simulated();
        let out = GetLocation.run(&Args::default(), &mut ctx).await.unwrap();
        assert_eq!(out.text, "C:\\Users\\Guest");
    }

    #[tokio::test]
    async fn tilde_goes_home() {
        let mut ctx = ExecContext::simulated();
        ctx.session.current_location = "C:\\Windows".to_string();
        SetLocation.run(&args(&["~"]), &mut ctx).await.unwrap();
        assert_eq!(ctx.session.current_location, "C:\\Users\\Guest");
    }

    #[tokio::test]
    async fn absolute_drive_path_replaces_location() {
        let mut ctx = ExecContext::simulated();
        SetLocation
            .run(&args(&["D:\\Projects"]), &mut ctx)
            .await
            .unwrap();
        assert_eq!(ctx.session.current_location, "D:\\Projects");
    }

    #[tokio::test]
    async fn bare_drive_becomes_root() {
        let mut ctx = ExecContext::simulated();
        SetLocation.run(&args(&["C:"]), &mut ctx).await.unwrap();
        assert_eq!(ctx.session.current_location, "C:\\");
    }

    #[tokio::test]
    async fn dotdot_moves_up_one_segment() {
        let mut ctx = ExecContext::simulated();
        SetLocation.run(&args(&[".."]), &mut ctx).await.unwrap();
        assert_eq!(ctx.session.current_location, "C:\\Users");
    }

    #[tokio::test]
    async fn dotdot_stops_at_drive_root() {
        let mut ctx = ExecContext::simulated();
        ctx.session.current_location = "C:\\".to_string();
        SetLocation.run(&args(&[".."]), &mut ctx).await.unwrap();
        assert_eq!(ctx.session.current_location, "C:\\");
    }

    #[tokio::test]
    async fn relative_segment_appends() {
        let mut ctx = ExecContext::simulated();
        SetLocation
            .run(&args(&["Documents"]), &mut ctx)
            .await
            .unwrap();
        assert_eq!(ctx.session.current_location, "C:\\Users\\Guest\\Documents");
    }

    #[tokio::test]
    async fn no_argument_defaults_to_home() {
        let mut ctx = ExecContext::simulated();
        ctx.session.current_location = "C:\\Windows".to_string();
        SetLocation.run(&Args::default(), &mut ctx).await.unwrap();
        assert_eq!(ctx.session.current_location, "C:\\Users\\Guest");
    }
}

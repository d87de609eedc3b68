//! Handoff to the external entry module.
//!
//! Once every preflight check has passed, the launcher's job is to get out
//! of the way: the entry module receives the original argument vector
//! unchanged and owns the process exit status from that point on.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{LaunchError, Result};

/// Module invoked once every preflight check has passed.
pub const ENTRY_MODULE: &str = "mcserver";

/// Build the module-invocation command: `<python> -m <module> [args...]`.
fn module_command(python: &Path, module: &str, args: &[OsString]) -> Command {
    let mut cmd = Command::new(python);
    cmd.arg("-m").arg(module);
    cmd.args(args);
    cmd
}

/// Hand control to `<python> -m <module>`, forwarding `args` unchanged.
///
/// On Unix the current process image is replaced, so the launcher's exit
/// status becomes the module's; the call returns only if the replacement
/// itself failed. Elsewhere the module runs as a child process and its exit
/// code is returned for the caller to propagate.
#[cfg(unix)]
pub fn run_module(python: &Path, module: &str, args: &[OsString]) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    tracing::debug!(module, ?args, "replacing process with entry module");
    let source = module_command(python, module, args).exec();
    Err(LaunchError::DispatchFailed {
        module: module.to_string(),
        source,
    })
}

/// Hand control to `<python> -m <module>`, forwarding `args` unchanged.
#[cfg(not(unix))]
pub fn run_module(python: &Path, module: &str, args: &[OsString]) -> Result<i32> {
    tracing::debug!(module, ?args, "running entry module");
    let status = module_command(python, module, args)
        .status()
        .map_err(|source| LaunchError::DispatchFailed {
            module: module.to_string(),
            source,
        })?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    #[test]
    fn module_command_preserves_argument_order() {
        let python = PathBuf::from("/usr/bin/python3");
        let args: Vec<OsString> = ["run", "--ram", "2G"].iter().map(OsString::from).collect();

        let cmd = module_command(&python, ENTRY_MODULE, &args);

        assert_eq!(cmd.get_program(), python.as_os_str());
        let got: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(got, ["-m", "mcserver", "run", "--ram", "2G"]);
    }

    #[test]
    fn module_command_forwards_non_utf8_untouched() {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStringExt;

            let python = PathBuf::from("/usr/bin/python3");
            let raw = OsString::from_vec(vec![0x66, 0x6f, 0x80, 0x6f]);
            let cmd = module_command(&python, ENTRY_MODULE, &[raw.clone()]);

            let got: Vec<&OsStr> = cmd.get_args().collect();
            assert_eq!(got[2], raw.as_os_str());
        }
    }
}

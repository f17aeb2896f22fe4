use std::process::Output;
use std::time::Duration;

use dhcpmap_common::TopologyError;
use tokio::process::Command;
use tracing::debug;

/// Runs `program` to completion, killing it if it outlives `timeout`.
///
/// A non-zero exit status is reported as [`TopologyError::Subprocess`] with
/// whatever the program wrote to stderr.
pub(crate) async fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<Output, TopologyError> {
    debug!("Running {program} {}", args.join(" "));

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let output: Output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => result.map_err(|e| TopologyError::Subprocess {
            program: program.to_string(),
            reason: e.to_string(),
        })?,
        Err(_) => {
            return Err(TopologyError::Timeout {
                program: program.to_string(),
                after: timeout,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TopologyError::Subprocess {
            program: program.to_string(),
            reason: format!("{}: {}", output.status, stderr.trim()),
        });
    }

    Ok(output)
}

/// Stdout followed by stderr, decoded lossily.
pub(crate) fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

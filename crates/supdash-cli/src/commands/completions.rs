//! Shell completions generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

/// Write completions for `shell` to `out`.
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

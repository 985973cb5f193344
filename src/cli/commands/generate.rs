//! `hexlock generate` — produce a random password without storing it.

use zeroize::Zeroizing;

use crate::cli::{output, Cli};
use crate::clipboard;
use crate::errors::{HexLockError, Result};
use crate::generator;

/// Upper bound on requested entropy, to catch typos like `--bytes 16000`.
const MAX_BYTES: usize = 256;

/// Execute the `generate` command.
pub fn execute(_cli: &Cli, bytes: usize, copy: bool) -> Result<()> {
    if bytes == 0 || bytes > MAX_BYTES {
        return Err(HexLockError::InvalidArgument(format!(
            "--bytes must be between 1 and {MAX_BYTES}"
        )));
    }

    let secret = Zeroizing::new(generator::generate(bytes)?);

    if copy {
        clipboard::copy_to_clipboard(&secret)?;
        output::success("Generated password copied to clipboard.");
        return Ok(());
    }

    println!("{}", secret.as_str());
    Ok(())
}

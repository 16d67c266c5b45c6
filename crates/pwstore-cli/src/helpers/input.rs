//! Secret input from a prompt or piped stdin.

use std::io::{self, BufRead, IsTerminal};

use zeroize::Zeroizing;

use crate::ui::prompt::prompt_secret;

/// Read a secret: hidden prompt on a TTY, otherwise the first line of stdin.
pub fn read_secret(prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        return prompt_secret(prompt);
    }
    read_secret_line(io::stdin().lock())
}

/// First line of `reader` without its line ending.
pub fn read_secret_line(mut reader: impl BufRead) -> anyhow::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    if line.is_empty() {
        return Err(anyhow::anyhow!("No input provided on stdin"));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_first_line_only() {
        let secret = read_secret_line(&b"hunter2 with spaces \r\nsecond\n"[..]).unwrap();
        assert_eq!(secret.as_str(), "hunter2 with spaces ");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(read_secret_line(&b""[..]).is_err());
        assert!(read_secret_line(&b"\n"[..]).is_err());
    }
}

//! Interactive input.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Asks for an email address and returns the trimmed reply.
///
/// End of input yields an empty string, which the lookup then rejects as
/// malformed.
pub fn prompt_for_email<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "{} Enter email to check: ", "[?]".bright_yellow())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_reply() {
        let mut input = Cursor::new("  someone@example.com \n");
        let mut out = Vec::new();
        let email = prompt_for_email(&mut input, &mut out).unwrap();

        assert_eq!(email, "someone@example.com");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Enter email to check: "));
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(prompt_for_email(&mut input, &mut out).unwrap(), "");
    }
}

use crate::core::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        // Prompts carry no newline, so flush before blocking on stdin.
        stdout.flush()?;
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = std::io::stdin().lock().read_line(&mut line)?;

        if bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

use std::io::{self, BufRead, Write};

/// Where prompts go and answers come from.
pub trait Console {
    /// Reads one line without its line ending. Returns None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn show(&mut self, text: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;
}

pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{text}")?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut out = self.stdout.lock();
        write!(out, "\x1b[2J\x1b[H")?;
        out.flush()
    }
}

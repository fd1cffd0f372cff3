use std::io::{self, BufRead, Write};

/// A player-facing interface to the outside world: where prompts and boards
/// are shown and where typed lines come from.
pub trait Connector {
    /// Show a block of text, such as a rendered grid or a rejection message.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input, without its line ending.
    /// Returns None once the input is closed.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`Connector`] over a line reader and a writer, normally stdin and stdout.
pub struct ConsoleConnector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Connector for ConsoleConnector<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        // Echo a newline so the next output starts on its own line.
        writeln!(self.output)?;
        // Undecodable bytes become U+FFFD and fail to parse downstream.
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

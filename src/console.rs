use std::io::{BufRead, Write};

/// Line-oriented prompt/answer channel shared by the menu and every action.
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            closed: false,
        }
    }

    /// Prints `prompt` without a newline and reads one answer line with the
    /// trailing line break removed. End of input yields an empty answer.
    pub fn ask(&mut self, prompt: &str) -> String {
        write!(self.output, "{prompt}").ok();
        self.output.flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                // Keep the transcript readable when input runs dry.
                writeln!(self.output).ok();
                String::new()
            }
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
        }
    }

    /// Only a literal "yes" (any case, no surrounding blanks) confirms.
    pub fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt).eq_ignore_ascii_case("yes")
    }

    pub fn say(&mut self, line: impl std::fmt::Display) {
        writeln!(self.output, "{line}").ok();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

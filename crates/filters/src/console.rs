//! Console abstraction used for prompting.
//!
//! The selector only needs `prompt_choice` and `write_line`. Built-in
//! filters also ask free-text questions during set-up through
//! `prompt_text`.

use std::io::{self, BufRead, Write};

/// Interactive prompt and display channel.
pub trait Console {
    /// Offer `options` under `message` and block until one is chosen.
    /// Returns the chosen option's label.
    fn prompt_choice(&mut self, message: &str, options: &[String]) -> io::Result<String>;

    /// Ask a free-text question; the answer comes back trimmed.
    fn prompt_text(&mut self, message: &str) -> io::Result<String>;

    /// Print one line.
    fn write_line(&mut self, message: &str) -> io::Result<()>;
}

/// [`Console`] over any reader/writer pair.
///
/// The CLI runs it over locked stdin/stdout; tests run it over in-memory
/// buffers.
///
/// Choices are listed as `  [i] label`. The answer may be the index or the
/// exact label; anything else prints an error and asks again.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn prompt_choice(&mut self, message: &str, options: &[String]) -> io::Result<String> {
        if options.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no options to choose from",
            ));
        }

        loop {
            writeln!(self.output, "{}", message)?;
            for (idx, option) in options.iter().enumerate() {
                writeln!(self.output, "  [{}] {}", idx, option)?;
            }
            write!(self.output, " > ")?;
            self.output.flush()?;

            // An exact label wins over an index, so numeric labels stay reachable
            let answer = self.read_answer()?;
            if let Some(option) = options.iter().find(|option| **option == answer) {
                return Ok(option.clone());
            }
            if let Some(option) = answer.parse::<usize>().ok().and_then(|idx| options.get(idx)) {
                return Ok(option.clone());
            }
            writeln!(self.output, "Value \"{}\" is invalid", answer)?;
        }
    }

    fn prompt_text(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;
        self.read_answer()
    }

    fn write_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> Vec<String> {
        vec!["Assignee".to_string(), "Label".to_string(), "<- Back".to_string()]
    }

    fn console(input: &str) -> StreamConsole<Cursor<Vec<u8>>, Vec<u8>> {
        StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_choice_by_index() {
        let mut console = console("1\n");
        let chosen = console.prompt_choice("Select Filter:", &options()).unwrap();
        assert_eq!(chosen, "Label");

        let output = String::from_utf8(console.into_output()).unwrap();
        let expected = "Select Filter:\n  [0] Assignee\n  [1] Label\n  [2] <- Back\n";
        assert!(output.starts_with(expected));
    }

    #[test]
    fn test_choice_by_label() {
        let mut console = console("<- Back\n");
        let chosen = console.prompt_choice("Select Filter:", &options()).unwrap();
        assert_eq!(chosen, "<- Back");
    }

    #[test]
    fn test_numeric_label_beats_index() {
        let options = vec!["10".to_string(), "2".to_string(), "<- Back".to_string()];

        let mut by_label = console("2\n");
        assert_eq!(by_label.prompt_choice("Select Filter:", &options).unwrap(), "2");

        let mut by_index = console("0\n");
        assert_eq!(by_index.prompt_choice("Select Filter:", &options).unwrap(), "10");
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut console = console("7\nnope\n0\n");
        let chosen = console.prompt_choice("Select Filter:", &options()).unwrap();
        assert_eq!(chosen, "Assignee");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Value \"7\" is invalid"));
        assert!(output.contains("Value \"nope\" is invalid"));
        assert_eq!(output.matches("Select Filter:").count(), 3);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut console = console("");
        let err = console.prompt_choice("Select Filter:", &options()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_text_trims() {
        let mut console = console("  alice  \n");
        assert_eq!(console.prompt_text("Assignee username:").unwrap(), "alice");
    }

    #[test]
    fn test_write_line() {
        let mut console = console("");
        console.write_line("Configure Filter: Label").unwrap();
        assert_eq!(console.into_output(), b"Configure Filter: Label\n");
    }
}

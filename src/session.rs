// src/session.rs
//
// Interactive prompt loop: ask for a file, show the recommended ceiling, then
// repeat rounds of (ceiling, trial count) until the user stops.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::error::ReverseError;
use crate::trial::{TrialConfig, TrialReport, TrialRunner};

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one trimmed line; `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Error writing prompt")?;
        self.output.flush().context("Error flushing prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Error reading from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_required(&mut self, message: &str) -> Result<String> {
        match self.prompt(message)? {
            Some(answer) => Ok(answer),
            None => bail!("Input closed before a value was entered"),
        }
    }

    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "\n   ---Large Text Reversal---   \n").context("Error writing banner")
    }

    pub fn ask_source(&mut self) -> Result<PathBuf> {
        loop {
            let answer =
                self.prompt_required("Enter the file name you wish to open (ex: Bible.txt): ")?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
        }
    }

    /// Ask for a ceiling and trial count until both parse and validate.
    pub fn ask_config(&mut self, name: &str, recommended: usize) -> Result<TrialConfig> {
        loop {
            writeln!(self.output, "\nEnter the limit for the recursive helper function.")?;
            writeln!(
                self.output,
                "--> {} <-- is the recommended limit for {}",
                recommended, name
            )?;
            let limit = self.prompt_required("Try different values to test break points!\nEntry: ")?;
            let trials = self.prompt_required("Enter the number of trial runs: ")?;

            let parsed = limit
                .parse::<i64>()
                .with_context(|| format!("Invalid limit: {}", limit))
                .and_then(|l| {
                    trials
                        .parse::<i64>()
                        .with_context(|| format!("Invalid trial count: {}", trials))
                        .map(|t| (l, t))
                });

            match parsed {
                Ok((limit, trials)) => match TrialConfig::new(limit, trials) {
                    Ok(config) => return Ok(config),
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// `true` only for an answer starting with `y`; end of input counts as no.
    pub fn ask_again(&mut self) -> Result<bool> {
        let answer = self.prompt(
            "\nTry again with a new number of trial runs and recursive limit?\n\
             (y) to try again, (n) to write the reversed files: ",
        )?;
        Ok(answer.is_some_and(|a| a.starts_with(['y', 'Y'])))
    }

    /// Run rounds until the user stops; the buffers hold the last round's output.
    ///
    /// A round refused for exceeding the stack budget is reported and the user
    /// is asked again; other engine errors end the session.
    pub fn run_rounds(
        &mut self,
        name: &str,
        src: &[u8],
        it_dst: &mut [u8],
        rc_dst: &mut [u8],
        runner: &TrialRunner,
        recommended: usize,
    ) -> Result<Vec<TrialReport>> {
        let mut reports = Vec::new();
        loop {
            let config = self.ask_config(name, recommended)?;
            writeln!(self.output, "\nProcessing...\n")?;

            match runner.run(src, it_dst, rc_dst, config) {
                Ok(report) => {
                    write!(self.output, "{}", report.render(name))?;
                    reports.push(report);
                }
                Err(e @ ReverseError::StackBudgetExceeded { .. }) => {
                    log::warn!("{}", e);
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e).context("Reversal failed"),
            }

            if !self.ask_again()? {
                return Ok(reports);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_source_skips_blank_lines() {
        let mut s = session("\n  \nBible.txt\n");
        assert_eq!(s.ask_source().unwrap(), PathBuf::from("Bible.txt"));
    }

    #[test]
    fn test_ask_config_reprompts_on_invalid_values() {
        let mut s = session("abc\n2\n0\n2\n-5\n2\n3\n0\n3\n2\n");
        let config = s.ask_config("Bible.txt", 99).unwrap();
        assert_eq!(config.ceiling.get(), 3);
        assert_eq!(config.trials.get(), 2);

        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("--> 99 <-- is the recommended limit for Bible.txt"));
        assert!(out.contains("Invalid limit: abc"));
        assert!(out.contains("depth ceiling must be a positive integer, got 0"));
        assert!(out.contains("depth ceiling must be a positive integer, got -5"));
        assert!(out.contains("trial count must be a positive integer, got 0"));
    }

    #[test]
    fn test_ask_config_fails_on_closed_input() {
        let mut s = session("5\n");
        assert!(s.ask_config("x", 1).is_err());
    }

    #[test]
    fn test_ask_again() {
        assert!(session("y\n").ask_again().unwrap());
        assert!(session("Yes\n").ask_again().unwrap());
        assert!(!session("n\n").ask_again().unwrap());
        assert!(!session("").ask_again().unwrap());
    }

    #[test]
    fn test_run_rounds_reports_budget_refusal_and_continues() {
        let runner = TrialRunner::new(8 * 1024 * 1024, Some(8)).unwrap();
        let src = b"ABCDEFGH";
        let mut it = [0u8; 8];
        let mut rc = [0u8; 8];

        // Ceiling 8 projects 10 frames (> 8); ceiling 2 projects 7.
        let mut s = session("8\n1\ny\n2\n3\nn\n");
        let reports = s
            .run_rounds("abc.txt", src, &mut it, &mut rc, &runner, 2)
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].config.ceiling.get(), 2);
        assert_eq!(&it, b"HGFEDCBA");
        assert_eq!(&rc, b"HGFEDCBA");

        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("depth ceiling exceeded available stack"));
        assert!(out.contains("abc.txt has been reversed iteratively and recursively 3 times."));
    }
}

use std::io::BufRead;

use console::{Style, Term};
use stretch_core::consts::{DEFAULT_MAX_LIMIT, DEFAULT_MIN_LIMIT, DEFAULT_SATURATION_PERCENT};
use stretch_core::error::StretchError;
use stretch_core::pipeline::{FixedParameters, ParameterSource, Prompt};

fn print_error(error: &StretchError) {
    let style = Style::new().red().bold();
    let _ = Term::stderr().write_line(&format!("{} {}", style.apply_to("error:"), error));
}

/// Asks for each value on the terminal.
///
/// An empty line keeps the default, `q` (or end of input) cancels.
pub struct StdinPrompter {
    term: Term,
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl StdinPrompter {
    fn ask(&self, question: &str, default: f64) -> Prompt<f64> {
        let hint = Style::new().dim();
        loop {
            let _ = self.term.write_str(&format!(
                "{} {} ",
                question,
                hint.apply_to(format!("[{default}, q to cancel]"))
            ));

            let mut line = String::new();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Prompt::Cancelled,
                Ok(_) => {}
            }

            match parse_answer(&line) {
                Ok(prompt) => return prompt,
                Err(message) => {
                    let _ = self.term.write_line(&message);
                }
            }
        }
    }

    fn ask_limit(&self, question: &str, default: i64) -> Prompt<i64> {
        match self.ask(question, default as f64) {
            Prompt::Value(v) => Prompt::Value(v as i64),
            Prompt::Cancelled => Prompt::Cancelled,
            Prompt::Absent => Prompt::Absent,
        }
    }
}

/// Interpret one answer line. `Err` carries the message shown before asking
/// again.
fn parse_answer(line: &str) -> Result<Prompt<f64>, String> {
    let answer = line.trim();
    if answer.is_empty() {
        return Ok(Prompt::Absent);
    }
    if answer.eq_ignore_ascii_case("q") {
        return Ok(Prompt::Cancelled);
    }
    match answer.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Prompt::Value(v)),
        Ok(_) => Err(format!("'{answer}' is not a finite number")),
        Err(_) => Err(format!("'{answer}' is not a number")),
    }
}

impl ParameterSource for StdinPrompter {
    fn request_saturation(&self) -> Prompt<f64> {
        self.ask("Saturation in percent:", DEFAULT_SATURATION_PERCENT)
    }

    fn request_min_limit(&self) -> Prompt<i64> {
        self.ask_limit("New minimum value:", DEFAULT_MIN_LIMIT)
    }

    fn request_max_limit(&self) -> Prompt<i64> {
        self.ask_limit("New maximum value:", DEFAULT_MAX_LIMIT)
    }

    fn report(&self, error: &StretchError) {
        print_error(error);
    }
}

/// Parameters taken from command-line flags.
pub struct FlagParameters {
    inner: FixedParameters,
}

impl FlagParameters {
    pub fn new(saturation: Option<f64>, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            inner: FixedParameters {
                saturation: saturation.into(),
                min_limit: min.into(),
                max_limit: max.into(),
            },
        }
    }
}

impl ParameterSource for FlagParameters {
    fn request_saturation(&self) -> Prompt<f64> {
        self.inner.request_saturation()
    }

    fn request_min_limit(&self) -> Prompt<i64> {
        self.inner.request_min_limit()
    }

    fn request_max_limit(&self) -> Prompt<i64> {
        self.inner.request_max_limit()
    }

    fn report(&self, error: &StretchError) {
        print_error(error);
    }
}

//! Selection flow: fixes institute, degree, semester and exam once per run.
//!
//! Values given on the command line are checked against the options the
//! form actually offers; anything left out is picked from a numbered list.
//! The flow drives a `FormSession` through the cascade so each list shows
//! the options that depend on the choices before it.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use crate::config::{SelectionArgs, DEGREE_FIELD, EXAM_FIELD, INSTITUTE_FIELD, SEMESTER_FIELD};
use crate::error_handling::FetchError;
use crate::models::{SelectOption, SelectionPath, SelectionStep};
use crate::session::FormSession;

/// Picks one option out of a list, or answers a free-text question.
pub trait Chooser {
    /// Returns the `value` of the chosen option.
    fn choose(&mut self, title: &str, options: &[SelectOption]) -> Result<String>;

    fn prompt(&mut self, question: &str) -> Result<String>;
}

/// Numbered-list chooser over any line reader and writer.
///
/// Invalid input is answered with a hint and the question is asked again.
/// End of input is an error.
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed before a choice was made");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalChooser<R, W> {
    fn choose(&mut self, title: &str, options: &[SelectOption]) -> Result<String> {
        if options.is_empty() {
            bail!("Nothing to choose for {}", title);
        }

        writeln!(self.output, "\n{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, option.label)?;
        }

        loop {
            write!(self.output, "Choice [1-{}]: ", options.len())?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    return Ok(options[n - 1].value.clone());
                }
                _ => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    options.len()
                )?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        loop {
            write!(self.output, "\n{}: ", question)?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }
}

/// Interactive run mode, for when none was given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Bulk,
}

/// Asks for the run mode.
pub fn choose_mode(chooser: &mut dyn Chooser) -> Result<RunMode> {
    let options = [
        SelectOption {
            value: "single".to_string(),
            label: "Single result".to_string(),
        },
        SelectOption {
            value: "bulk".to_string(),
            label: "Bulk download".to_string(),
        },
    ];
    match chooser.choose("Select Mode", &options)?.as_str() {
        "single" => Ok(RunMode::Single),
        "bulk" => Ok(RunMode::Bulk),
        other => Err(anyhow!("Unknown mode: {}", other)),
    }
}

const CASCADE: [(&str, &str); 4] = [
    (INSTITUTE_FIELD, "Select Institute"),
    (DEGREE_FIELD, "Select Degree"),
    (SEMESTER_FIELD, "Select Semester"),
    (EXAM_FIELD, "Select Exam"),
];

fn preset_for<'a>(preset: &'a SelectionArgs, field: &str) -> Option<&'a str> {
    let value = match field {
        INSTITUTE_FIELD => &preset.institute,
        DEGREE_FIELD => &preset.degree,
        SEMESTER_FIELD => &preset.semester,
        EXAM_FIELD => &preset.exam,
        _ => &None,
    };
    value.as_deref()
}

/// Loads the form and resolves the four-step selection path.
///
/// Every step but the last is posted back so the next list is populated.
/// The exam choice itself is only submitted with each search.
pub async fn resolve_selection(
    session: &mut FormSession,
    preset: &SelectionArgs,
    chooser: &mut dyn Chooser,
) -> Result<SelectionPath> {
    session.load().await.context("Failed to load the result form")?;

    let mut path = SelectionPath::default();
    for (i, (field, title)) in CASCADE.iter().enumerate() {
        let options = session.options(field);
        if options.is_empty() {
            return Err(FetchError::Protocol(format!("no options offered for {}", field)).into());
        }

        let value = match preset_for(preset, field) {
            Some(value) => {
                if !options.iter().any(|o| o.value == value) {
                    bail!("{} is not an option for {}", value, field);
                }
                value.to_string()
            }
            None => chooser.choose(title, &options)?,
        };
        debug!("Selected {}={}", field, value);

        let step = SelectionStep::new(*field, value);
        if i + 1 < CASCADE.len() {
            session
                .apply_step(step.clone())
                .await
                .with_context(|| format!("Postback for {} failed", field))?;
        }
        path.push(step);
    }

    Ok(path)
}

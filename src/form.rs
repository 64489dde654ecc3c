//! Form front-end: a masked 4-digit year field with Calculate, Clear and
//! Exit actions.
//!
//! [`Form`] holds all state and behaviour and has no I/O, so it can be
//! driven by tests or by any view. [`run`] is the terminal view: it reads
//! commands line by line and redraws the form after each one.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::computus::{easter, form_sentence};
use crate::config::Settings;
use crate::consts::{FORM_FIELD_LABEL, FORM_SUBTITLE, FORM_TITLE, YEAR_FIELD_WIDTH};
use crate::prelude::*;
use crate::year::Year;

/// Text entry that only ever holds up to four ASCII digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearField {
    value: String,
}

impl YearField {
    /// Whether `candidate` may become the field's content.
    pub fn accepts(candidate: &str) -> bool {
        candidate.len() <= YEAR_FIELD_WIDTH && candidate.bytes().all(|b| b.is_ascii_digit())
    }

    /// Appends one keystroke. Returns `false` and leaves the field unchanged
    /// if the result would not be accepted.
    pub fn insert(&mut self, c: char) -> bool {
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.set(&candidate)
    }

    /// Replaces the whole content, as a paste would.
    pub fn set(&mut self, text: &str) -> bool {
        if !Self::accepts(text) {
            return false;
        }
        text.clone_into(&mut self.value);
        true
    }

    /// Removes the last character. Returns `false` if the field was empty.
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Visual style of a result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Error,
}

/// Message shown below the field after a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum FormResult {
    #[display(fmt = "{_0}")]
    Accepted(String),
    #[display(fmt = "{_0}")]
    Rejected(String),
}

impl FormResult {
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Accepted(_) => Tone::Success,
            Self::Rejected(_) => Tone::Error,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(text) | Self::Rejected(text) => text,
        }
    }

    /// The message styled for a terminal according to its tone.
    pub fn styled(&self, settings: &Settings) -> String {
        if !settings.color {
            return self.message().to_owned();
        }
        match self.tone() {
            Tone::Success => self.message().green().bold().to_string(),
            Tone::Error => self.message().red().bold().to_string(),
        }
    }
}

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Keystrokes typed into the field
    Type(String),
    /// Delete the last character
    Backspace,
    /// Calculate button or the accept key
    Submit,
    /// Clear button
    Clear,
    /// Exit button
    Exit,
}

impl Action {
    /// Reads a terminal line as an action. An empty line is the accept key.
    pub fn from_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "" | ":calc" => Self::Submit,
            ":clear" => Self::Clear,
            ":exit" => Self::Exit,
            ":back" => Self::Backspace,
            _ => Self::Type(line.to_owned()),
        }
    }
}

/// State of the form window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    field:    YearField,
    result:   Option<FormResult>,
    settings: Settings,
    focused:  bool,
    running:  bool,
}

impl Form {
    pub fn new(settings: Settings) -> Self {
        Self {
            field: YearField::default(),
            result: None,
            settings,
            focused: true,
            running: true,
        }
    }

    pub const fn field(&self) -> &YearField {
        &self.field
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the year field has input focus.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Types text into the field one keystroke at a time, dropping the ones
    /// the mask refuses. Returns how many keystrokes were taken.
    pub fn type_text(&mut self, text: &str) -> usize {
        if !self.running {
            return 0;
        }
        let mut taken = 0;
        for c in text.chars() {
            if self.field.insert(c) {
                taken += 1;
            } else {
                tracing::trace!(key = %c, "keystroke refused by year mask");
            }
        }
        taken
    }

    pub fn backspace(&mut self) -> bool {
        self.running && self.field.backspace()
    }

    /// Calculates Easter for the field's year and stores the result.
    pub fn submit(&mut self) -> Option<&FormResult> {
        if !self.running {
            return None;
        }
        let result = match Year::parse_field(self.field.value(), &self.settings) {
            Ok(year) => {
                let date = easter(year);
                tracing::debug!(year = year.get(), %date, "form calculated");
                FormResult::Accepted(form_sentence(year, date))
            }
            Err(rejection) => {
                tracing::debug!(input = self.field.value(), error = ?rejection, "rejected year");
                FormResult::Rejected(rejection.to_string())
            }
        };
        self.result = Some(result);
        self.result.as_ref()
    }

    /// Empties field and result and puts focus back on the field.
    pub fn clear(&mut self) {
        if !self.running {
            return;
        }
        self.field.clear();
        self.result = None;
        self.focused = true;
    }

    /// Ends the session. Later actions are ignored.
    pub fn exit(&mut self) {
        self.running = false;
        self.focused = false;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Type(text) => {
                self.type_text(&text);
            }
            Action::Backspace => {
                self.backspace();
            }
            Action::Submit => {
                self.submit();
            }
            Action::Clear => self.clear(),
            Action::Exit => self.exit(),
        }
    }

    /// Writes the field line and, if present, the result message.
    pub fn render<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{FORM_FIELD_LABEL} [{:<width$}]", self.field.value(), width = YEAR_FIELD_WIDTH)?;
        if let Some(result) = &self.result {
            writeln!(output, "{}", result.styled(&self.settings))?;
        }
        Ok(())
    }
}

fn render_header<W: Write>(output: &mut W, settings: &Settings) -> io::Result<()> {
    if settings.color {
        writeln!(output, "{}", FORM_TITLE.bold())?;
        writeln!(output, "{}", FORM_SUBTITLE.italic())?;
    } else {
        writeln!(output, "{FORM_TITLE}")?;
        writeln!(output, "{FORM_SUBTITLE}")?;
    }
    writeln!(output, "Type digits, then an empty line or :calc. Also :back, :clear, :exit.")
}

/// Runs a form session on a terminal until Exit or end of input.
///
/// # Errors
/// Only I/O failures on `input` or `output` are returned.
pub fn run<R, W>(input: &mut R, output: &mut W, settings: Settings) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut form = Form::new(settings);
    render_header(output, &settings)?;
    form.render(output)?;

    let mut line = String::new();
    while form.is_running() {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            form.exit();
            break;
        }

        form.apply(Action::from_line(&line));
        if form.is_running() {
            form.render(output)?;
        }
    }
    tracing::debug!("form session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    // Runs `f` under a subscriber at the binary's default level.
    fn logs_at_warn<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn plain() -> Settings {
        Settings {
            proleptic: false,
            color:     false,
        }
    }

    #[test]
    fn test_field_mask() {
        assert!(YearField::accepts(""));
        assert!(YearField::accepts("2024"));
        assert!(YearField::accepts("0"));
        assert!(!YearField::accepts("20245"));
        assert!(!YearField::accepts("20a"));
        assert!(!YearField::accepts(" 20"));
        assert!(!YearField::accepts("-1"));
    }

    #[test]
    fn test_field_insert() {
        let mut field = YearField::default();
        assert!(field.insert('2'));
        assert!(!field.insert('x'));
        assert!(field.insert('0'));
        assert!(field.insert('2'));
        assert!(field.insert('4'));
        assert!(!field.insert('5'));
        assert_eq!(field.value(), "2024");
    }

    #[test]
    fn test_field_set_and_backspace() {
        let mut field = YearField::default();
        assert!(field.set("1999"));
        assert!(!field.set("19999"));
        assert_eq!(field.value(), "1999");

        assert!(field.backspace());
        assert_eq!(field.value(), "199");
        field.clear();
        assert!(field.is_empty());
        assert!(!field.backspace());
    }

    #[test]
    fn test_submit_accepts_four_digits() {
        let mut form = Form::new(plain());
        assert_eq!(form.type_text("2028"), 4);
        let result = form.submit().unwrap();
        assert_eq!(result.tone(), Tone::Success);
        assert_eq!(result.message(), "In 2028, Easter Sunday falls on\nApril 16.");
    }

    #[test]
    fn test_submit_rejects_short_or_empty() {
        struct TestCase {
            typed: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                typed: "",
                expected: "Please enter a valid 4-digit year.",
            },
            TestCase {
                typed: "202",
                expected: "Please enter a valid 4-digit year.",
            },
            TestCase {
                typed: "abc",
                expected: "Please enter a valid 4-digit year.",
            },
            TestCase {
                typed: "1234",
                expected: "Please enter a year from 1583 onward (Gregorian calendar).",
            },
        ];

        for case in &cases {
            let mut form = Form::new(plain());
            form.type_text(case.typed);
            let result = form.submit().unwrap();
            assert_eq!(result.tone(), Tone::Error, "typed {:?}", case.typed);
            assert_eq!(result.message(), case.expected, "typed {:?}", case.typed);
            assert!(form.is_running());
        }
    }

    #[test]
    fn test_submit_proleptic_four_digits() {
        let mut form = Form::new(Settings {
            proleptic: true,
            color:     false,
        });
        form.type_text("1234");
        assert_eq!(form.submit().unwrap().tone(), Tone::Success);
    }

    #[test]
    fn test_masked_typing_drops_extra_keys() {
        let mut form = Form::new(plain());
        assert_eq!(form.type_text("2x0y2z4!9"), 4);
        assert_eq!(form.field().value(), "2024");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = Form::new(plain());
        form.type_text("2024");
        form.submit();
        assert!(form.result().is_some());

        form.clear();
        assert!(form.field().is_empty());
        assert!(form.result().is_none());
        assert!(form.is_focused());
    }

    #[test]
    fn test_exit_ignores_later_actions() {
        let mut form = Form::new(plain());
        form.exit();
        assert!(!form.is_running());
        assert_eq!(form.type_text("2024"), 0);
        assert!(form.submit().is_none());
        assert!(form.field().is_empty());
    }

    #[test]
    fn test_action_from_line() {
        assert_eq!(Action::from_line("\n"), Action::Submit);
        assert_eq!(Action::from_line(":calc\n"), Action::Submit);
        assert_eq!(Action::from_line(":clear\r\n"), Action::Clear);
        assert_eq!(Action::from_line(":exit"), Action::Exit);
        assert_eq!(Action::from_line(":back\n"), Action::Backspace);
        assert_eq!(Action::from_line("2024\n"), Action::Type("2024".to_owned()));
    }

    #[test]
    fn test_rejection_is_quiet_at_default_level() {
        let logs = logs_at_warn(|| {
            let mut form = Form::new(plain());
            form.type_text("12");
            assert_eq!(form.submit().unwrap().tone(), Tone::Error);
        });
        assert_eq!(logs, "");
    }

    #[test]
    fn test_styled_without_color() {
        let result = FormResult::Rejected("Please enter a valid 4-digit year.".to_owned());
        assert_eq!(result.styled(&plain()), "Please enter a valid 4-digit year.");
        assert_eq!(result.to_string(), "Please enter a valid 4-digit year.");
    }

    #[test]
    fn test_render() {
        let mut form = Form::new(plain());
        form.type_text("20");
        let mut out = Vec::new();
        form.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter a 4-Digit Year: [20  ]\n");
    }

    #[test]
    fn test_run_session() {
        let mut input = Cursor::new("2024\n\n:clear\n99\n:calc\n:exit\n2025\n".as_bytes());
        let mut out = Vec::new();
        run(&mut input, &mut out, plain()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("In 2024, Easter Sunday falls on\nMarch 31."));
        assert!(text.contains("Please enter a valid 4-digit year."));
        assert!(!text.contains("In 2025"));
        assert!(text.starts_with("Easter Date Calculator\nUsing the Meeus/Jones/Butcher Algorithm\n"));
    }

    #[test]
    fn test_run_ends_on_eof() {
        let mut input = Cursor::new("2000\n".as_bytes());
        let mut out = Vec::new();
        run(&mut input, &mut out, plain()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Enter a 4-Digit Year: [2000]"));
        assert!(!text.contains("Easter Sunday"));
    }
}

/*!
The help-text renderer.

Output shape: the program banner, a usage line listing positional arguments
in declaration order (with `...` after a trailing multi-value), then one
aligned line per non-positional argument showing its tags, an inferred type
hint, the description, and bracketed metadata for repetition and defaults.
*/

use core::fmt::{self, Display, Write as _};

use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::argument::Argument;
use crate::parser::Parser;

impl Parser {
    /// Render the full help text for this parser's registered arguments.
    #[must_use]
    pub fn render_help(&self) -> String {
        HelpMessage { parser: self }.to_string()
    }
}

struct HelpMessage<'a> {
    parser: &'a Parser,
}

impl Display for HelpMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parser = self.parser;

        writeln!(f, "{}", parser.program_name())?;

        if !parser.program_description().is_empty() {
            writeln!(f, "{}", parser.program_description())?;
        }

        write!(f, "Usage: {} [OPTIONS]", parser.program_name())?;

        for argument in positionals(parser) {
            write!(f, " <{}>", argument.long_name())?;

            if argument.is_multi_value() {
                write!(f, "...")?;
                break;
            }
        }

        writeln!(f)?;
        writeln!(f, "Options:")?;

        let width = options(parser)
            .map(|argument| tag_text(argument).chars().count())
            .max()
            .unwrap_or(0);

        let mut f = IndentWriter::new("  ", f);

        options(parser).try_for_each(|argument| {
            let tags = tag_text(argument);
            write!(f, "{tags:<width$}  {}", argument.description())?;

            if let Some(notes) = notes_text(argument, parser.help_name()) {
                write!(f, " [{notes}]")?;
            }

            writeln!(f)
        })
    }
}

fn positionals(parser: &Parser) -> impl Iterator<Item = &dyn Argument> {
    parser
        .registered()
        .iter()
        .map(|argument| argument.as_ref())
        .filter(|argument| argument.is_positional())
}

fn options(parser: &Parser) -> impl Iterator<Item = &dyn Argument> {
    parser
        .registered()
        .iter()
        .map(|argument| argument.as_ref())
        .filter(|argument| !argument.is_positional())
}

/// The `-s, --long=<hint>` column for one option line.
fn tag_text(argument: &dyn Argument) -> String {
    let long = argument.long_name();

    let tags = lazy_format!(match (argument.short_name()) {
        Some(short) => "-{short}, --{long}",
        None => "    --{long}",
    });

    match argument.type_hint() {
        "" => tags.to_string(),
        hint => lazy_format!("{tags}=<{hint}>").to_string(),
    }
}

/// The bracketed metadata for one option line, if any applies. The help
/// option's implicit default is not worth printing.
fn notes_text(argument: &dyn Argument, help_name: Option<&str>) -> Option<String> {
    let mut notes = Vec::new();

    if argument.is_multi_value() {
        notes.push(format!(
            "repeated, min values = {}",
            argument.minimum_values()
        ));
    }

    if argument.has_default() && Some(argument.long_name()) != help_name {
        notes.push(format!("default = {}", argument.default_text()));
    }

    match notes.is_empty() {
        true => None,
        false => Some(notes.iter().join_with("; ").to_string()),
    }
}

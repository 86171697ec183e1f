/*!
The parser façade: argument registration, token resolution, and the parse
driver itself.

A [`Parser`] owns every argument registered with it, in registration order.
Order is significant: it governs both positional assignment and help
listing. Parsing runs in phases: scan the argument vector dispatching named
arguments and collecting unflagged tokens, distribute the collected tokens
to positional arguments, then either short-circuit on a help request or
validate that every argument is fulfilled.
*/

use std::collections::HashMap;

use crate::argument::{Argument, ArgumentStatus};
use crate::error::ParseError;
use crate::typed::TypedArgument;
use crate::value::Value;

/**
A typed command-line argument registry and tokenizer.

```
use argot::Parser;

let mut parser = Parser::new("prog", "");
parser.add_argument::<u32>(Some('l'), "limit", "how many");
parser.add_argument::<bool>(Some('v'), "verbose", "say more");

assert!(parser.parse(["prog", "-v", "--limit=3"]));
assert_eq!(parser.get_value::<u32>("limit"), Some(3));
assert_eq!(parser.get_value::<bool>("verbose"), Some(true));
```

A `Parser` is reusable: each call to [`parse`][Parser::parse] fully resets
the state left behind by the previous call. It is not meant to be shared
across threads mid-parse; use one instance per concurrent parse.
*/
pub struct Parser {
    program_name: String,
    program_description: String,

    arguments: Vec<Box<dyn Argument>>,
    by_long: HashMap<String, usize>,
    by_short: HashMap<char, String>,

    error: Option<ParseError>,
    help_requested: bool,
    help_name: Option<String>,
}

impl Parser {
    #[must_use]
    pub fn new(program_name: &str, program_description: &str) -> Self {
        Self {
            program_name: program_name.to_owned(),
            program_description: program_description.to_owned(),
            arguments: Vec::new(),
            by_long: HashMap::new(),
            by_short: HashMap::new(),
            error: None,
            help_requested: false,
            help_name: None,
        }
    }

    /**
    Register an argument holding values of type `T`, returning it for
    builder-style configuration.

    Exactly one argument exists per long name: re-registering a long name
    replaces the previous argument and re-maps its short name.
    */
    pub fn add_argument<T: Value>(
        &mut self,
        short_name: Option<char>,
        long_name: &str,
        description: &str,
    ) -> &mut TypedArgument<T> {
        let argument: Box<dyn Argument> =
            Box::new(TypedArgument::<T>::new(short_name, long_name, description));

        let index = match self.by_long.get(long_name) {
            Some(&index) => {
                if let Some(previous) = self.arguments[index].short_name() {
                    self.by_short.remove(&previous);
                }

                self.arguments[index] = argument;
                index
            }
            None => {
                let index = self.arguments.len();
                self.by_long.insert(long_name.to_owned(), index);
                self.arguments.push(argument);
                index
            }
        };

        if let Some(short) = short_name {
            self.by_short.insert(short, long_name.to_owned());
        }

        match self.arguments[index].as_any_mut().downcast_mut() {
            Some(argument) => argument,
            None => unreachable!("argument was just registered with this type"),
        }
    }

    /// Register a flag as the designated help argument. When it appears on
    /// the command line, the parse reports success regardless of unfulfilled
    /// requirements, so a help request is never blocked.
    pub fn add_help(&mut self, short_name: Option<char>, long_name: &str, description: &str) {
        self.add_argument::<bool>(short_name, long_name, description);
        self.help_name = Some(long_name.to_owned());
    }

    /**
    Parse an argument vector. The first element is taken to be the program
    name and is skipped.

    Returns `true` on success. On failure the structured error is available
    via [`error`][Parser::error]; a help request reports success but still
    records any validation error for callers that inspect error state
    independently.
    */
    pub fn parse<I>(&mut self, argv: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let owned: Vec<I::Item> = argv.into_iter().collect();
        let argv: Vec<&str> = owned.iter().map(|argument| argument.as_ref()).collect();

        self.refresh();

        let positionals = match self.scan(&argv) {
            Ok(positionals) => positionals,
            Err(error) => {
                self.error = Some(error);
                return false;
            }
        };

        if let Err(error) = self.distribute(&argv, &positionals) {
            self.error = Some(error);
            return false;
        }

        if self.help_requested {
            self.validate();
            return true;
        }

        self.validate()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// The value at index 0 for the argument registered under `long_name`.
    /// `None` if no such argument exists, it holds a different type, or no
    /// value (and no default) is available.
    #[must_use]
    pub fn get_value<T: Value>(&self, long_name: &str) -> Option<T> {
        self.get_value_at(long_name, 0)
    }

    /// The value at `index` for the argument registered under `long_name`.
    #[must_use]
    pub fn get_value_at<T: Value>(&self, long_name: &str, index: usize) -> Option<T> {
        let &argument_index = self.by_long.get(long_name)?;

        self.arguments[argument_index]
            .as_any()
            .downcast_ref::<TypedArgument<T>>()?
            .get_value(index)
    }

    /// How many values the named argument received during the last parse.
    #[must_use]
    pub fn values_set(&self, long_name: &str) -> Option<usize> {
        let &index = self.by_long.get(long_name)?;
        Some(self.arguments[index].values_set())
    }

    /// The parse status of the named argument.
    #[must_use]
    pub fn value_status(&self, long_name: &str) -> Option<ArgumentStatus> {
        let &index = self.by_long.get(long_name)?;
        Some(self.arguments[index].status())
    }

    pub(crate) fn program_name(&self) -> &str {
        &self.program_name
    }

    pub(crate) fn program_description(&self) -> &str {
        &self.program_description
    }

    pub(crate) fn registered(&self) -> &[Box<dyn Argument>] {
        &self.arguments
    }

    pub(crate) fn help_name(&self) -> Option<&str> {
        self.help_name.as_deref()
    }

    /// Reset every argument and the parse-attempt state, so repeated parses
    /// depend only on the latest argument vector.
    fn refresh(&mut self) {
        for argument in &mut self.arguments {
            argument.clear();
        }

        self.error = None;
        self.help_requested = false;
    }

    /**
    Resolve a dashed token to the long names it addresses.

    `--name[=value]` resolves to exactly one long name. A single-dash token
    is read as a cluster of short names: if every character resolves, all of
    them are addressed (`-ab` with both registered); if only a strict prefix
    resolves and the first character is registered, just that one is
    addressed and the rest of the token is its attached value (`-xVALUE`).
    An empty result means the token is unknown.
    */
    fn resolve_names(&self, token: &str) -> Vec<String> {
        let (body, is_long) = match token.strip_prefix("--") {
            Some(body) => (body, true),
            None => (&token[1..], false),
        };

        let equals = memchr::memchr(b'=', body.as_bytes());
        let name = &body[..equals.unwrap_or(body.len())];

        if is_long {
            return vec![name.to_owned()];
        }

        // `-ab=v` is ambiguous: a cluster can't carry an inline value
        if equals.is_some() && name.len() > 1 {
            return Vec::new();
        }

        let mut names = Vec::new();

        for short in name.chars() {
            if let Some(long) = self.by_short.get(&short) {
                names.push(long.clone());
            }
        }

        if names.len() < name.chars().count() {
            let first_registered = name
                .chars()
                .next()
                .is_some_and(|short| self.by_short.contains_key(&short));

            if first_registered {
                names.truncate(1);
                return names;
            }

            return Vec::new();
        }

        names
    }

    /// The option-token scan: dispatch named arguments in order, collecting
    /// the argv positions of unflagged tokens for later distribution.
    fn scan(&mut self, argv: &[&str]) -> Result<Vec<usize>, ParseError> {
        let mut positionals = Vec::new();
        let mut position = 1;

        while position < argv.len() {
            let token = argv[position];

            if token.is_empty() {
                position += 1;
                continue;
            }

            if token == "--" {
                positionals.extend(position + 1..argv.len());
                break;
            }

            if !token.starts_with('-') || token.len() == 1 {
                positionals.push(position);
                position += 1;
                continue;
            }

            let names = self.resolve_names(token);

            if names.is_empty() {
                return Err(ParseError::UnknownArgument {
                    token: token.to_owned(),
                });
            }

            // A flag can't carry extra clustered or attached characters
            if !token.starts_with("--") && token.len() > 2 && names.len() == 1 {
                if let Some(&index) = self.by_long.get(names[0].as_str()) {
                    if self.arguments[index].is_flag() {
                        return Err(ParseError::UnknownArgument {
                            token: token.to_owned(),
                        });
                    }
                }
            }

            for name in &names {
                let Some(&index) = self.by_long.get(name.as_str()) else {
                    return Err(ParseError::UnknownArgument {
                        token: token.to_owned(),
                    });
                };

                if self.arguments[index].is_positional() {
                    return Err(ParseError::UnknownArgument {
                        token: token.to_owned(),
                    });
                }

                let consumed = self.arguments[index].consume(argv, position)?;

                if self.help_name.as_deref() == Some(name.as_str()) {
                    self.help_requested = true;
                }

                position += consumed - 1;
            }

            position += 1;
        }

        Ok(positionals)
    }

    /**
    Distribute the collected unflagged tokens to positional arguments in
    registration order, one token each; a multi-value positional greedily
    consumes every remaining token, so it must be the last one that receives
    any. Positional arguments registered after it never receive values.
    */
    fn distribute(&mut self, argv: &[&str], positions: &[usize]) -> Result<(), ParseError> {
        let slots: Vec<usize> = self
            .arguments
            .iter()
            .enumerate()
            .filter(|(_, argument)| argument.is_positional())
            .map(|(index, _)| index)
            .collect();

        if slots.is_empty() {
            return match positions.first() {
                Some(&position) => Err(ParseError::UnknownArgument {
                    token: argv[position].to_owned(),
                }),
                None => Ok(()),
            };
        }

        let mut next = 0;

        for &slot in &slots {
            if next >= positions.len() {
                break;
            }

            if self.arguments[slot].is_multi_value() {
                while next < positions.len() {
                    self.arguments[slot].consume(argv, positions[next])?;
                    next += 1;
                }

                return Ok(());
            }

            self.arguments[slot].consume(argv, positions[next])?;
            next += 1;
        }

        Ok(())
    }

    /// The validation pass: the first argument in registration order with
    /// an unfulfilled status becomes the reported error.
    fn validate(&mut self) -> bool {
        for argument in &self.arguments {
            let error = match argument.status() {
                ArgumentStatus::NoArgument => ParseError::NoArgument {
                    option: argument.long_name().to_owned(),
                },
                ArgumentStatus::Insufficient => ParseError::Insufficient {
                    option: argument.long_name().to_owned(),
                },
                ArgumentStatus::Success | ArgumentStatus::InvalidArgument => continue,
            };

            self.error = Some(error);
            return false;
        }

        true
    }
}

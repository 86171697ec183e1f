/*!
A typed command-line argument registry; argot is a compact engine for the
kind of CLI that registers its options at runtime.

Callers build a [`Parser`], register typed named and positional arguments
with builder-style configuration (defaults, minimum value counts, bound
external storage), hand it an argument vector, and read back typed values or
a structured [`ParseError`]. The engine resolves the usual token grammar:
`--long`, `--long value`, `--long=value`, `-s`, `-s value`, `-s=value`,
attached short values (`-xVALUE`), clustered boolean flags (`-abc`), and the
`--` positional-only terminator.

```
use argot::{ErrorKind, Parser};

let mut parser = Parser::new("copy", "copy things around");
parser.add_argument::<String>(Some('o'), "output", "where results go");
parser.add_argument::<bool>(Some('v'), "verbose", "say more");
parser
    .add_argument::<String>(None, "inputs", "files to copy")
    .positional()
    .multi_value(1);
parser.add_help(Some('h'), "help", "show this message");

assert!(parser.parse(["copy", "-v", "--output=dest", "a.txt", "b.txt"]));
assert_eq!(parser.get_value::<String>("output").as_deref(), Some("dest"));
assert_eq!(parser.get_value_at::<String>("inputs", 1).as_deref(), Some("b.txt"));

assert!(!parser.parse(["copy", "a.txt"]));
assert_eq!(parser.error().unwrap().kind(), ErrorKind::NoArgument);
```

The engine is synchronous and purely in-memory: no I/O happens during a
parse, and a parser instance is freely reusable across calls.
*/

pub mod argument;
pub mod error;
mod help;
pub mod parser;
pub mod typed;
pub mod value;

pub use argument::{Argument, ArgumentStatus};
pub use error::{ErrorKind, ParseError};
pub use parser::Parser;
pub use typed::TypedArgument;
pub use value::{Value, ValueError};

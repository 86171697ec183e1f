/*!
The generic argument implementation behind the registry.

A [`TypedArgument<T>`] owns (or shares) the values parsed for one registered
argument, applies defaults, enforces minimum value counts, and implements
the per-token consumption algorithm. Token-to-value conversion is delegated
to the [`Value`] implementation of `T`.
*/

use core::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::argument::{Argument, ArgumentStatus};
use crate::error::ParseError;
use crate::value::Value;

/**
Where parsed values land.

Every argument starts with an internally owned sequence; binding external
storage via [`store_values`][TypedArgument::store_values] abandons the owned
sequence entirely, so exactly one of the two is ever live.
*/
enum Storage<T> {
    Owned(Vec<T>),
    Shared(Rc<RefCell<Vec<T>>>),
}

impl<T: Clone> Storage<T> {
    fn len(&self) -> usize {
        match self {
            Storage::Owned(values) => values.len(),
            Storage::Shared(values) => values.borrow().len(),
        }
    }

    fn push(&mut self, value: T) {
        match self {
            Storage::Owned(values) => values.push(value),
            Storage::Shared(values) => values.borrow_mut().push(value),
        }
    }

    fn clear(&mut self) {
        match self {
            Storage::Owned(values) => values.clear(),
            Storage::Shared(values) => values.borrow_mut().clear(),
        }
    }

    fn get(&self, index: usize) -> Option<T> {
        match self {
            Storage::Owned(values) => values.get(index).cloned(),
            Storage::Shared(values) => values.borrow().get(index).cloned(),
        }
    }
}

/**
One registered argument holding values of type `T`.

Registration hands out a `&mut TypedArgument<T>`, so configuration reads as
a builder chain:

```
use argot::Parser;

let mut parser = Parser::new("prog", "");
parser
    .add_argument::<u32>(Some('l'), "limit", "how many")
    .default_value(10);
```
*/
pub struct TypedArgument<T: Value> {
    long_name: String,
    short_name: Option<char>,
    description: String,

    status: ArgumentStatus,

    values: Storage<T>,
    bound: Option<Rc<RefCell<T>>>,
    values_set: usize,

    default: Option<T>,
    default_text: String,
    explicit_default_text: bool,

    minimum_values: usize,
    multi_value: bool,
    positional: bool,
}

impl<T: Value> TypedArgument<T> {
    pub fn new(short_name: Option<char>, long_name: &str, description: &str) -> Self {
        let default = T::absent();

        Self {
            long_name: long_name.to_owned(),
            short_name,
            description: description.to_owned(),
            status: ArgumentStatus::NoArgument,
            values: Storage::Owned(Vec::new()),
            bound: None,
            values_set: 0,
            default_text: default.as_ref().map(Value::render).unwrap_or_default(),
            default,
            explicit_default_text: false,
            minimum_values: 0,
            multi_value: false,
            positional: false,
        }
    }

    /// Set the default value. Unless [`default_text`][Self::default_text]
    /// was used, the help rendering of the default is derived from the
    /// value itself.
    pub fn default_value(&mut self, value: T) -> &mut Self {
        if !self.explicit_default_text {
            self.default_text = value.render();
        }

        self.default = Some(value);
        self.status = ArgumentStatus::Success;
        self
    }

    /// Override the help rendering of the default value without changing
    /// the default itself (an empty-string default displayed as `all`, say).
    pub fn default_text(&mut self, text: &str) -> &mut Self {
        self.default_text = text.to_owned();
        self.explicit_default_text = true;
        self
    }

    /// Accept repeated values; a successful parse requires at least
    /// `minimum` of them unless a default is set.
    pub fn multi_value(&mut self, minimum: usize) -> &mut Self {
        self.minimum_values = minimum;
        self.multi_value = true;
        self
    }

    /// Collect this argument from unflagged tokens by position instead of
    /// by name.
    pub fn positional(&mut self) -> &mut Self {
        self.positional = true;
        self
    }

    /// Bind an external scalar slot that receives the most recently parsed
    /// value. The caller owns the slot; the engine only writes through it.
    pub fn store_value(&mut self, slot: Rc<RefCell<T>>) -> &mut Self {
        self.bound = Some(slot);
        self
    }

    /// Bind an external sequence that receives every parsed value,
    /// abandoning the internally owned sequence.
    pub fn store_values(&mut self, slot: Rc<RefCell<Vec<T>>>) -> &mut Self {
        self.values = Storage::Shared(slot);
        self
    }

    /**
    The value at `index`, if present. An empty sequence falls back to the
    default regardless of index; a multi-value argument with a default also
    falls back for any index beyond the stored count.
    */
    pub fn get_value(&self, index: usize) -> Option<T> {
        let count = self.values.len();

        if self.multi_value && self.default.is_some() && index >= count {
            return self.default.clone();
        }

        if count == 0 && self.default.is_some() {
            return self.default.clone();
        }

        self.values.get(index)
    }
}

impl<T: Value> Argument for TypedArgument<T> {
    fn long_name(&self) -> &str {
        &self.long_name
    }

    fn short_name(&self) -> Option<char> {
        self.short_name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn type_hint(&self) -> &'static str {
        T::HINT
    }

    fn is_positional(&self) -> bool {
        self.positional
    }

    fn is_multi_value(&self) -> bool {
        self.multi_value
    }

    fn is_flag(&self) -> bool {
        T::IS_FLAG
    }

    fn has_default(&self) -> bool {
        self.default.is_some()
    }

    fn minimum_values(&self) -> usize {
        self.minimum_values
    }

    fn status(&self) -> ArgumentStatus {
        self.status
    }

    fn values_set(&self) -> usize {
        self.values_set
    }

    fn default_text(&self) -> &str {
        &self.default_text
    }

    fn consume(&mut self, argv: &[&str], position: usize) -> Result<usize, ParseError> {
        let token = argv[position];
        let mut consumed = 1;
        let mut raw = token;
        let mut attached = false;
        let mut working = token;

        // Positional arguments receive their token whole; named arguments
        // first shed the dash prefix and, for `-xVALUE` forms, the matched
        // short letter.
        if !self.positional {
            if let Some(rest) = working.strip_prefix("--") {
                working = rest;
            } else if let Some(rest) = working.strip_prefix('-') {
                working = rest;

                if working.len() > 1 && working.as_bytes()[1] != b'=' {
                    let mut characters = working.chars();
                    characters.next();
                    working = characters.as_str();
                    attached = true;
                }
            }
        }

        let equals = memchr::memchr(b'=', working.as_bytes());

        let value_text = if !self.positional && let Some(index) = equals {
            &working[index + 1..]
        } else if T::IS_FLAG {
            ""
        } else if !self.positional && !attached {
            match argv.get(position + 1) {
                None => {
                    self.status = ArgumentStatus::Insufficient;
                    return Err(ParseError::Insufficient {
                        option: self.long_name.clone(),
                    });
                }
                Some(&next) => {
                    consumed = 2;
                    raw = next;
                    next
                }
            }
        } else {
            working
        };

        let value = match T::parse_token(value_text) {
            Ok(value) => value,
            Err(error) => {
                self.status = ArgumentStatus::InvalidArgument;
                return Err(ParseError::InvalidArgument {
                    token: raw.to_owned(),
                    option: self.long_name.clone(),
                    message: error.to_string(),
                });
            }
        };

        if let Some(slot) = &self.bound {
            *slot.borrow_mut() = value.clone();
        }

        self.values.push(value);
        self.values_set += 1;

        self.status = match self.values_set < self.minimum_values && self.default.is_none() {
            true => ArgumentStatus::Insufficient,
            false => ArgumentStatus::Success,
        };

        Ok(consumed)
    }

    fn clear(&mut self) {
        self.values.clear();
        self.values_set = 0;

        self.status = match self.default {
            Some(_) => ArgumentStatus::Success,
            None => ArgumentStatus::NoArgument,
        };

        if let Some(slot) = &self.bound {
            *slot.borrow_mut() = self.default.clone().unwrap_or_default();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

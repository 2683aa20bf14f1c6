use crate::error::{Error, ErrorKind, Result};
use crate::value::Value;

/// How a collection gets sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortOptions {
    /// Greater values come first.
    pub reverse: bool,
    /// Equal elements keep their input order.
    pub stable: bool,
    /// Bucket elements by comparable class and sort each bucket.
    pub categorize: bool,
    /// Index every element by this key and compare the results. Excludes `categorize`.
    pub key: Option<Value>,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    pub fn categorize(mut self, categorize: bool) -> Self {
        self.categorize = categorize;
        self
    }

    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.categorize && self.key.is_some() {
            return Err(Error::conflicting_options());
        }

        Ok(())
    }

    /// Builds options from the flat `name, value, name, value, ...` list templates pass.
    ///
    /// Recognized names are `reverse`, `stable`, `categorizeTypes` and `key`.
    pub fn from_args(args: &[Value]) -> Result<SortOptions> {
        if args.len() % 2 != 0 {
            return Err(ErrorKind::OddOptionArguments { count: args.len() }.into());
        }

        let mut opts = SortOptions::default();
        for pair in args.chunks_exact(2) {
            let (name, value) = (pair[0].indirect().0, &pair[1]);
            let Value::Str(name) = name else {
                return Err(ErrorKind::InvalidOptionName {
                    type_name: name.type_name(),
                }
                .into());
            };

            match name.as_str() {
                "reverse" => opts.reverse = bool_option(name, value)?,
                "stable" => opts.stable = bool_option(name, value)?,
                "categorizeTypes" => opts.categorize = bool_option(name, value)?,
                "key" => opts.key = Some(value.indirect().0.clone()),
                _ => return Err(ErrorKind::UnknownOption { name: name.clone() }.into()),
            }
        }

        opts.validate()?;
        Ok(opts)
    }
}

fn bool_option(option: &str, value: &Value) -> Result<bool> {
    match value.indirect().0 {
        Value::Bool(b) => Ok(*b),
        other => Err(Error::invalid_option_value(option, other.type_name())),
    }
}

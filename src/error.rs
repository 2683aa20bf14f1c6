use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn not_a_collection(type_name: impl Into<String>) -> Error {
        ErrorKind::NotACollection {
            type_name: type_name.into(),
        }
        .into()
    }

    pub fn unsupported_element(type_name: impl Into<String>) -> Error {
        ErrorKind::UnsupportedElementType {
            type_name: type_name.into(),
        }
        .into()
    }

    pub fn unsupported_indexed(type_name: impl Into<String>) -> Error {
        ErrorKind::UnsupportedIndexedType {
            type_name: type_name.into(),
        }
        .into()
    }

    pub fn heterogeneous_elements(found: impl Into<String>, expected: impl Into<String>) -> Error {
        ErrorKind::HeterogeneousElementTypes {
            found: found.into(),
            expected: expected.into(),
        }
        .into()
    }

    pub fn heterogeneous_indexed(found: impl Into<String>, expected: impl Into<String>) -> Error {
        ErrorKind::HeterogeneousIndexedTypes {
            found: found.into(),
            expected: expected.into(),
        }
        .into()
    }

    pub fn not_indexable(type_name: impl Into<String>) -> Error {
        ErrorKind::NotIndexable {
            type_name: type_name.into(),
        }
        .into()
    }

    pub fn key_type_mismatch(key_type: impl Into<String>, expected: impl Into<String>) -> Error {
        ErrorKind::KeyTypeMismatch {
            key_type: key_type.into(),
            expected: expected.into(),
        }
        .into()
    }

    pub fn key_out_of_range(index: i64, len: usize) -> Error {
        ErrorKind::KeyOutOfRange { index, len }.into()
    }

    pub fn key_not_found(key: impl Into<String>) -> Error {
        ErrorKind::KeyNotFound { key: key.into() }.into()
    }

    pub fn conflicting_options() -> Error {
        ErrorKind::ConflictingOptions.into()
    }

    pub fn invalid_option_value(option: impl Into<String>, type_name: impl Into<String>) -> Error {
        ErrorKind::InvalidOptionValue {
            option: option.into(),
            type_name: type_name.into(),
        }
        .into()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(kind))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("cannot sort value of type {type_name}; only sequences are supported")]
    NotACollection { type_name: String },

    #[error("unsupported element type {type_name}")]
    UnsupportedElementType { type_name: String },

    #[error("unsupported indexed type {type_name}")]
    UnsupportedIndexedType { type_name: String },

    #[error("elements must be of the same type; found incompatible types {found} and {expected}")]
    HeterogeneousElementTypes { found: String, expected: String },

    #[error("indexed values must be of the same type; found {found} and {expected}")]
    HeterogeneousIndexedTypes { found: String, expected: String },

    #[error("cannot index value of type {type_name}")]
    NotIndexable { type_name: String },

    #[error("key of type {key_type} cannot index {expected}")]
    KeyTypeMismatch { key_type: String, expected: String },

    #[error("key {index} out of range for sequence of length {len}")]
    KeyOutOfRange { index: i64, len: usize },

    #[error("key {key} not present in mapping")]
    KeyNotFound { key: String },

    #[error("cannot specify a key when categorizeTypes is enabled")]
    ConflictingOptions,

    #[error("options must be given as name/value pairs; got {count} arguments")]
    OddOptionArguments { count: usize },

    #[error("option name must be a string; got {type_name}")]
    InvalidOptionName { type_name: String },

    #[error("unknown sort option '{name}'")]
    UnknownOption { name: String },

    #[error("cannot use type {type_name} for {option} option")]
    InvalidOptionValue { option: String, type_name: String },
}

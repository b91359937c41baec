use std::fmt;
use std::fmt::Formatter;

// An exhaustive enum rather than a bare string, so callers can match on the
// failure kind instead of sniffing the message text.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	Lex(String),
	Parse(String),
	UnknownVariable(String),
	DivByZero,
	ModByZero,
	ModOnFloats,
	IncompatibleTypes
}

impl Error {
	pub fn lex(description: impl Into<String>) -> Self {
		Error::Lex(description.into())
	}

	pub fn parse(description: impl Into<String>) -> Self {
		Error::Parse(description.into())
	}

	pub fn unknown_variable(name: impl Into<String>) -> Self {
		Error::UnknownVariable(name.into())
	}

	pub fn incompatible_types() -> Self {
		Error::IncompatibleTypes
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Error::Lex(m) => write!(f, "Syntax error: {m}."),
			Error::Parse(m) => write!(f, "Parse error: {m}."),
			Error::UnknownVariable(name) => write!(f, "evaluation error: variable {name} is undefined."),
			Error::DivByZero => write!(f, "evaluation error: division by zero."),
			Error::ModByZero => write!(f, "evaluation error: modulus by zero."),
			Error::ModOnFloats => write!(f, "evaluation error: modulus is only defined on integers."),
			Error::IncompatibleTypes => write!(f, "evaluation error: incompatible operand types.")
		}
	}
}

impl std::error::Error for Error {}

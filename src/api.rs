// Thin wrappers over lexer/parser/symtable/sampler for whatever host
// (REPL, plotting widget, test harness) drives the core.

use crate::errors::Error;
use crate::lexer::{self, Token};
use crate::parser;
use crate::symtable::SymbolTable;
use crate::value::{self, Number};

pub fn lex(input: &str) -> Result<Vec<Token>, Error> {
	lexer::lex(input)
}

pub fn parse_and_eval(tokens: &[Token], table: &mut SymbolTable) -> Result<(Number, Option<String>), Error> {
	parser::parse_and_eval_complete(tokens, table)
}

pub fn number_to_string(n: Number) -> String {
	value::number_to_string(n)
}

pub fn set_variable(table: &mut SymbolTable, name: &str, value: Number) {
	table.set(name, value);
}

pub fn clear_variables(table: &mut SymbolTable) {
	table.clear();
}

// Convenience for callers that just want f(x) for one x, without a SymbolTable of their own.
pub fn evaluate_with_x(expr: &str, x: f64) -> Result<f64, Error> {
	let tokens = lex(expr)?;
	let mut table = SymbolTable::new();
	table.set("x", Number::Floating(x));
	let (value, _) = parse_and_eval(&tokens, &mut table)?;
	Ok(value.as_f64())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn evaluate_with_x_binds_the_free_variable() {
		assert_eq!(evaluate_with_x("x", 4.0).unwrap(), 4.0);
		assert_eq!(evaluate_with_x("x + 1", 4.0).unwrap(), 5.0);
	}

	#[test]
	fn number_to_string_round_trips_through_lex_and_eval() {
		let mut table = SymbolTable::new();
		let rendered = number_to_string(Number::Integer(42));
		let tokens = lex(&rendered).unwrap();
		let (value, _) = parse_and_eval(&tokens, &mut table).unwrap();
		assert_eq!(value, Number::Integer(42));
	}
}

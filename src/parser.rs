use crate::errors::Error;
use crate::lexer::{FunctionKind, IrrationalKind, Token};
use crate::symtable::SymbolTable;
use crate::value::Number;
use std::f64::consts::PI;

type ParseResult<'a> = Result<(&'a [Token], Number, Option<String>), Error>;

// A := E AssignOpt. A non-empty residual is not an error here -- the host
// decides whether trailing input should be rejected (parse_and_eval_complete).
pub fn parse_and_eval<'a>(tokens: &'a [Token], table: &mut SymbolTable) -> ParseResult<'a> {
	let (rest, value, target) = parse_additive(tokens, table)?;

	match target {
		None => Ok((rest, value, None)),
		Some(name) => match rest.first() {
			Some(Token::Assign) => {
				let (rest2, rhs, target2) = parse_additive(&rest[1..], table)?;
				if target2.is_some() {
					return Err(Error::parse("chained assignment is not supported"));
				}
				table.set(&name, rhs);
				Ok((rest2, rhs, Some(name)))
			}
			_ => Err(Error::parse("expected '=' after assignment target"))
		}
	}
}

// Requires the full token stream to be consumed.
pub fn parse_and_eval_complete(tokens: &[Token], table: &mut SymbolTable) -> Result<(Number, Option<String>), Error> {
	let (rest, value, target) = parse_and_eval(tokens, table)?;
	if !rest.is_empty() {
		return Err(Error::parse("extra characters at the end of input"));
	}
	Ok((value, target))
}

// E := T { (Add|Sub) T }
fn parse_additive<'a>(tokens: &'a [Token], table: &mut SymbolTable) -> ParseResult<'a> {
	let (mut rest, mut result, target) = parse_multiplicative(tokens, table)?;
	if target.is_some() {
		return Ok((rest, result, target));
	}

	loop {
		match rest.first() {
			Some(Token::Add) => {
				let (rest2, rhs, target2) = parse_multiplicative(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.add(rhs)?;
				rest = rest2;
			}
			Some(Token::Sub) => {
				let (rest2, rhs, target2) = parse_multiplicative(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.sub(rhs)?;
				rest = rest2;
			}
			_ => break
		}
	}

	Ok((rest, result, None))
}

// T := I { (Mul|Div|Mod) I }
fn parse_multiplicative<'a>(tokens: &'a [Token], table: &mut SymbolTable) -> ParseResult<'a> {
	let (mut rest, mut result, target) = parse_power(tokens, table)?;
	if target.is_some() {
		return Ok((rest, result, target));
	}

	loop {
		match rest.first() {
			Some(Token::Mul) => {
				let (rest2, rhs, target2) = parse_power(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.mul(rhs)?;
				rest = rest2;
			}
			Some(Token::Div) => {
				let (rest2, rhs, target2) = parse_power(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.div(rhs)?;
				rest = rest2;
			}
			Some(Token::Mod) => {
				let (rest2, rhs, target2) = parse_power(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.rem(rhs)?;
				rest = rest2;
			}
			_ => break
		}
	}

	Ok((rest, result, None))
}

// I := NR { Exp NR } -- left-associative (2^3^2 is (2^3)^2), not the more
// common right-associative reading; callers who want that should parenthesize.
fn parse_power<'a>(tokens: &'a [Token], table: &mut SymbolTable) -> ParseResult<'a> {
	let (mut rest, mut result, target) = parse_nr(tokens, table)?;
	if target.is_some() {
		return Ok((rest, result, target));
	}

	loop {
		match rest.first() {
			Some(Token::Exp) => {
				let (rest2, rhs, target2) = parse_nr(&rest[1..], table)?;
				if target2.is_some() {
					return Ok((rest2, rhs, target2));
				}
				result = result.pow(rhs)?;
				rest = rest2;
			}
			_ => break
		}
	}

	Ok((rest, result, None))
}

// NR := Sub NR | Number | Irrational | Function Lpar E Rpar
//     | Symbol [Assign-lookahead] | Lpar E Rpar
fn parse_nr<'a>(tokens: &'a [Token], table: &mut SymbolTable) -> ParseResult<'a> {
	match tokens.first() {
		None => Err(Error::parse("unexpected end of input")),

		Some(Token::Sub) => {
			let (rest, value, target) = parse_nr(&tokens[1..], table)?;
			if target.is_some() {
				return Ok((rest, value, target));
			}
			Ok((rest, value.negate(), None))
		}

		Some(Token::Number(n)) => Ok((&tokens[1..], *n, None)),

		Some(Token::Irrational(IrrationalKind::Pi)) => Ok((&tokens[1..], Number::Floating(PI), None)),

		Some(Token::Function(kind)) => {
			let kind = *kind;
			let rest = &tokens[1..];
			match rest.first() {
				Some(Token::Lpar) => {
					let (rest2, value, target) = parse_additive(&rest[1..], table)?;
					if target.is_some() {
						return Err(Error::parse("assignment is not allowed inside a function argument"));
					}
					match rest2.first() {
						Some(Token::Rpar) => {
							let result = apply_function(kind, value.as_f64());
							Ok((&rest2[1..], Number::Floating(result), None))
						}
						_ => Err(Error::parse("expected ')' after function argument"))
					}
				}
				_ => Err(Error::parse("expected '(' after function name"))
			}
		}

		Some(Token::Symbol(name)) => {
			let rest = &tokens[1..];
			if matches!(rest.first(), Some(Token::Assign)) {
				return Ok((rest, Number::Integer(0), Some(name.clone())));
			}

			match table.get(name) {
				Some(value) => Ok((rest, value, None)),
				None => Err(Error::unknown_variable(name.clone()))
			}
		}

		Some(Token::Lpar) => {
			let (rest, value, target) = parse_additive(&tokens[1..], table)?;
			if target.is_some() {
				return Err(Error::parse("assignment is not allowed inside parentheses"));
			}
			match rest.first() {
				Some(Token::Rpar) => Ok((&rest[1..], value, None)),
				_ => Err(Error::parse("unmatched '('"))
			}
		}

		Some(_) => Err(Error::parse("unexpected token"))
	}
}

// A domain error (e.g. tan(pi/2)) surfaces as the platform's IEEE result
// (NaN/inf), not as an Error.
fn apply_function(kind: FunctionKind, arg: f64) -> f64 {
	match kind {
		FunctionKind::Sin => arg.sin(),
		FunctionKind::Cos => arg.cos(),
		FunctionKind::Tan => arg.tan(),
		FunctionKind::Log10 => arg.log10(),
		FunctionKind::Ln => arg.ln(),
		FunctionKind::Sqrt => arg.sqrt()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::lex;
	use assert_approx_eq::assert_approx_eq;

	fn eval(expr: &str) -> Result<(Number, Option<String>), Error> {
		let mut table = SymbolTable::new();
		let tokens = lex(expr)?;
		parse_and_eval_complete(&tokens, &mut table)
	}

	fn eval_with(expr: &str, table: &mut SymbolTable) -> Result<(Number, Option<String>), Error> {
		let tokens = lex(expr)?;
		parse_and_eval_complete(&tokens, table)
	}

	#[test]
	fn bidmas_precedence() {
		assert_eq!(eval("1 + 2 * 3").unwrap().0, Number::Integer(7));
		assert_eq!(eval("(1 + 2) * 3").unwrap().0, Number::Integer(9));
	}

	#[test]
	fn integer_division_truncates_toward_zero() {
		assert_eq!(eval("10 / 3").unwrap().0, Number::Integer(3));
	}

	#[test]
	fn float_division_stays_floating() {
		match eval("10.0 / 3").unwrap().0 {
			Number::Floating(f) => assert_approx_eq!(f, 3.333333333),
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn mod_respects_dividend_sign_and_rejects_floats() {
		assert_eq!(eval("5 % 3").unwrap().0, Number::Integer(2));
		assert_eq!(eval("5.0 % 3").unwrap_err(), Error::ModOnFloats);
	}

	#[test]
	fn exponentiation_is_left_associative() {
		// ((2^3)^2) = 64, not 2^(3^2) = 512.
		assert_eq!(eval("2 ^ 3 ^ 2").unwrap().0, Number::Integer(64));
	}

	#[test]
	fn unary_minus_before_bound_variable() {
		let mut table = SymbolTable::new();
		table.set("x", Number::Integer(4));
		assert_eq!(eval_with("-x", &mut table).unwrap().0, Number::Integer(-4));
	}

	#[test]
	fn assignment_is_an_expression_and_persists() {
		let mut table = SymbolTable::new();
		let (value, target) = eval_with("a = 2 + 3", &mut table).unwrap();
		assert_eq!(value, Number::Integer(5));
		assert_eq!(target, Some("a".to_string()));
		assert_eq!(eval_with("a * 2", &mut table).unwrap().0, Number::Integer(10));
	}

	#[test]
	fn sin_of_zero_is_floating_zero() {
		match eval("sin(0)").unwrap().0 {
			Number::Floating(f) => assert_approx_eq!(f, 0.0),
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn pi_is_floating_pi() {
		match eval("pi").unwrap().0 {
			Number::Floating(f) => assert_approx_eq!(f, PI),
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn division_by_zero_is_an_error() {
		assert_eq!(eval("1 / 0").unwrap_err(), Error::DivByZero);
	}

	#[test]
	fn unknown_variable_is_an_error() {
		assert_eq!(eval("q").unwrap_err(), Error::UnknownVariable("q".to_string()));
	}

	#[test]
	fn tan_domain_error_is_not_reported_as_an_error() {
		// tan(pi/2) is +-inf/NaN depending on rounding, but it must not
		// surface as an Error.
		let (value, _) = eval("tan(pi / 2)").unwrap();
		match value {
			Number::Floating(_) => {}
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn trailing_garbage_is_a_parse_error() {
		assert!(eval("1 + 2 3").is_err());
	}

	#[test]
	fn assignment_inside_parentheses_is_a_parse_error() {
		assert!(eval("(a = 3)").is_err());
		assert!(eval("(a = 3").is_err());
	}
}

use crate::errors::Error;
use crate::lexer::{lex, Token};
use crate::parser::parse_and_eval_complete;
use crate::symtable::SymbolTable;
use crate::value::Number;

// dx > 0 and x_max > x_min are the caller's responsibility. Points that fail
// to evaluate or come out non-finite are skipped rather than aborting the
// whole series (e.g. 1/x is undefined at one sampled x).
pub fn sample(expr: &str, x_min: f64, x_max: f64, dx: f64) -> Result<Vec<(f64, f64)>, Error> {
	let tokens = lex(expr)?;

	if !mentions_x(&tokens) {
		log::debug!("sample: expression does not mention 'x', returning an empty series");
		return Ok(Vec::new());
	}

	let mut table = SymbolTable::new();
	let mut points = Vec::new();
	let tolerance = dx / 2.0;

	let mut x = x_min;
	while x <= x_max + tolerance {
		table.set("x", Number::Floating(x));

		match parse_and_eval_complete(&tokens, &mut table) {
			Ok((value, _)) => {
				let y = value.as_f64();
				if y.is_finite() {
					points.push((x, y));
				} else {
					log::debug!("sample: skipping non-finite point at x={x}");
				}
			}
			Err(e) => {
				log::debug!("sample: skipping point at x={x} after evaluation error: {e}");
			}
		}

		x += dx;
	}

	Ok(points)
}

fn mentions_x(tokens: &[Token]) -> bool {
	tokens.iter().any(|t| matches!(t, Token::Symbol(name) if name == "x"))
}

// Horner's method, highest-degree coefficient first: ((a0*x + a1)*x + a2)*x + ... + an.
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
	coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

pub fn parse_coefficients(input: &str) -> Result<Vec<f64>, Error> {
	input
		.split([',', ';'])
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(|s| s.parse::<f64>().map_err(|_| Error::parse(format!("'{s}' is not a valid coefficient"))))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_approx_eq::assert_approx_eq;

	#[test]
	fn samples_a_quadratic_over_an_integer_grid() {
		let points = sample("x^2", -2.0, 2.0, 1.0).unwrap();
		let expected = [(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)];
		assert_eq!(points.len(), expected.len());
		for ((x, y), (ex, ey)) in points.iter().zip(expected.iter()) {
			assert_approx_eq!(x, ex);
			assert_approx_eq!(y, ey);
		}
	}

	#[test]
	fn expression_without_x_yields_an_empty_series() {
		let points = sample("2 + 2", -1.0, 1.0, 0.5).unwrap();
		assert!(points.is_empty());
	}

	#[test]
	fn division_by_zero_point_is_skipped_not_fatal() {
		let points = sample("1 / x", -1.0, 1.0, 1.0).unwrap();
		// x = 0 should be skipped; x = -1 and x = 1 should survive.
		assert_eq!(points.len(), 2);
	}

	#[test]
	fn horners_method_matches_direct_evaluation() {
		// 2x^2 + 3x + 1 at x = 4: 2*16 + 3*4 + 1 = 45
		assert_approx_eq!(evaluate_polynomial(&[2.0, 3.0, 1.0], 4.0), 45.0);
	}

	#[test]
	fn coefficients_parse_from_comma_or_semicolon_list() {
		assert_eq!(parse_coefficients("1, 2, 3").unwrap(), vec![1.0, 2.0, 3.0]);
		assert_eq!(parse_coefficients("1; 2; 3").unwrap(), vec![1.0, 2.0, 3.0]);
	}
}

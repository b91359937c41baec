use crate::errors::Error;

// Arithmetic between two Integers stays Integer; anything else coerces both
// operands to Floating first. See coerce().
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	Integer(i64),
	Floating(f64)
}

impl Number {
	pub fn as_f64(self) -> f64 {
		match self {
			Number::Integer(i) => i as f64,
			Number::Floating(f) => f
		}
	}

	pub fn negate(self) -> Number {
		match self {
			Number::Integer(i) => Number::Integer(-i),
			Number::Floating(f) => Number::Floating(-f)
		}
	}

	fn coerce(a: Number, b: Number) -> (Number, Number) {
		match (a, b) {
			(Number::Integer(x), Number::Integer(y)) => (Number::Integer(x), Number::Integer(y)),
			_ => (Number::Floating(a.as_f64()), Number::Floating(b.as_f64()))
		}
	}

	pub fn add(self, other: Number) -> Result<Number, Error> {
		match Self::coerce(self, other) {
			(Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.wrapping_add(y))),
			(Number::Floating(x), Number::Floating(y)) => Ok(Number::Floating(x + y)),
			_ => Err(Error::incompatible_types())
		}
	}

	pub fn sub(self, other: Number) -> Result<Number, Error> {
		match Self::coerce(self, other) {
			(Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.wrapping_sub(y))),
			(Number::Floating(x), Number::Floating(y)) => Ok(Number::Floating(x - y)),
			_ => Err(Error::incompatible_types())
		}
	}

	pub fn mul(self, other: Number) -> Result<Number, Error> {
		match Self::coerce(self, other) {
			(Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.wrapping_mul(y))),
			(Number::Floating(x), Number::Floating(y)) => Ok(Number::Floating(x * y)),
			_ => Err(Error::incompatible_types())
		}
	}

	// Integer division truncates toward zero. Floating division by exact 0.0
	// is an error, not IEEE infinity.
	pub fn div(self, other: Number) -> Result<Number, Error> {
		match Self::coerce(self, other) {
			(Number::Integer(_), Number::Integer(0)) => Err(Error::DivByZero),
			(Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.wrapping_div(y))),
			(Number::Floating(_), Number::Floating(y)) if y == 0.0 => Err(Error::DivByZero),
			(Number::Floating(x), Number::Floating(y)) => Ok(Number::Floating(x / y)),
			_ => Err(Error::incompatible_types())
		}
	}

	// Modulus is defined only on integers; the remainder takes the sign of
	// the dividend (Rust's % already behaves this way).
	pub fn rem(self, other: Number) -> Result<Number, Error> {
		match Self::coerce(self, other) {
			(Number::Integer(_), Number::Integer(0)) => Err(Error::ModByZero),
			(Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.wrapping_rem(y))),
			(Number::Floating(_), Number::Floating(_)) => Err(Error::ModOnFloats),
			_ => Err(Error::incompatible_types())
		}
	}

	// Repeated multiplication when the exponent is a non-negative Integer
	// that fits a u32; otherwise both sides coerce to Floating and powf is used.
	pub fn pow(self, other: Number) -> Result<Number, Error> {
		if let (Number::Integer(base), Number::Integer(exp)) = (self, other) {
			if let Ok(exp) = u32::try_from(exp) {
				let mut acc: i64 = 1;
				for _ in 0..exp {
					acc = acc.wrapping_mul(base);
				}
				return Ok(Number::Integer(acc));
			}
		}

		let (base, exp) = (self.as_f64(), other.as_f64());
		Ok(Number::Floating(base.powf(exp)))
	}
}

pub fn number_to_string(n: Number) -> String {
	match n {
		Number::Integer(i) => i.to_string(),
		Number::Floating(f) => f.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integer_arithmetic_stays_integer() {
		assert_eq!(Number::Integer(2).add(Number::Integer(3)).unwrap(), Number::Integer(5));
		assert_eq!(Number::Integer(10).div(Number::Integer(3)).unwrap(), Number::Integer(3));
		assert_eq!(Number::Integer(5).rem(Number::Integer(3)).unwrap(), Number::Integer(2));
	}

	#[test]
	fn mixed_arithmetic_coerces_to_floating() {
		match Number::Integer(1).add(Number::Floating(2.5)).unwrap() {
			Number::Floating(f) => assert_eq!(f, 3.5),
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn div_by_zero_is_an_error_not_infinity() {
		assert_eq!(Number::Integer(1).div(Number::Integer(0)), Err(Error::DivByZero));
		assert_eq!(Number::Floating(1.0).div(Number::Floating(0.0)), Err(Error::DivByZero));
	}

	#[test]
	fn mod_on_floats_is_an_error() {
		assert_eq!(Number::Floating(5.0).rem(Number::Integer(3)), Err(Error::ModOnFloats));
	}

	#[test]
	fn integer_power_with_negative_exponent_coerces() {
		match Number::Integer(2).pow(Number::Integer(-1)).unwrap() {
			Number::Floating(f) => assert_eq!(f, 0.5),
			_ => panic!("expected Floating")
		}
	}

	#[test]
	fn number_to_string_renders_integers_without_fraction() {
		assert_eq!(number_to_string(Number::Integer(7)), "7");
		assert_eq!(number_to_string(Number::Floating(3.5)), "3.5");
	}
}

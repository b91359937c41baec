use crate::api;
use crate::help::help;
use crate::sampler;
use crate::symtable::SymbolTable;

pub struct Runner {
	table: SymbolTable
}

impl Runner {
	pub fn new() -> Self {
		Self { table: SymbolTable::new() }
	}

	// Return false when it's time to exit.
	pub fn run(&mut self, line: &str) -> bool {
		let trimmed = line.trim();
		if trimmed.is_empty() {
			return true;
		}

		let mut parts = trimmed.splitn(2, char::is_whitespace);
		let head = parts.next().unwrap_or("");
		let remainder = parts.next().unwrap_or("").trim();

		match head {
			"help" | "?" => {
				println!("{}", help());
				true
			}
			"quit" | "exit" => false,
			"plot" => {
				self.run_plot(remainder);
				true
			}
			"poly" => {
				self.run_poly(remainder);
				true
			}
			_ => {
				self.run_expression(trimmed);
				true
			}
		}
	}

	fn run_expression(&mut self, line: &str) {
		let tokens = match api::lex(line) {
			Ok(tokens) => tokens,
			Err(e) => {
				println!("{e}");
				return;
			}
		};

		match api::parse_and_eval(&tokens, &mut self.table) {
			Ok((value, Some(name))) => println!("{} = {}", name, api::number_to_string(value)),
			Ok((value, None)) => println!("{}", api::number_to_string(value)),
			Err(e) => {
				log::debug!("run_expression: {line:?} failed: {e}");
				println!("{e}");
			}
		}
	}

	// plot <expr>, <x_min>, <x_max>, <dx>
	fn run_plot(&self, args: &str) {
		let fields: Vec<&str> = args.split(',').map(str::trim).collect();
		let (expr, x_min, x_max, dx) = match fields.as_slice() {
			[expr, x_min, x_max, dx] => (*expr, *x_min, *x_max, *dx),
			_ => {
				println!("Parse error: expected 'plot <expr>, <x_min>, <x_max>, <dx>'.");
				return;
			}
		};

		let (x_min, x_max, dx) = match (x_min.parse::<f64>(), x_max.parse::<f64>(), dx.parse::<f64>()) {
			(Ok(a), Ok(b), Ok(c)) => (a, b, c),
			_ => {
				println!("Parse error: x_min, x_max and dx must be numbers.");
				return;
			}
		};

		if dx <= 0.0 || x_max <= x_min {
			println!("Parse error: require dx > 0 and x_max > x_min.");
			return;
		}

		match sampler::sample(expr, x_min, x_max, dx) {
			Ok(points) => {
				for (x, y) in points {
					println!("{x}\t{y}");
				}
			}
			Err(e) => println!("{e}")
		}
	}

	// poly <c0, c1, ..., cn> @ <x>
	fn run_poly(&self, args: &str) {
		let Some((coeffs_part, x_part)) = args.split_once('@') else {
			println!("Parse error: expected 'poly <coeffs> @ <x>'.");
			return;
		};

		let coefficients = match sampler::parse_coefficients(coeffs_part) {
			Ok(c) => c,
			Err(e) => {
				println!("{e}");
				return;
			}
		};

		match x_part.trim().parse::<f64>() {
			Ok(x) => println!("{}", sampler::evaluate_polynomial(&coefficients, x)),
			Err(_) => println!("Parse error: '{}' is not a valid x value.", x_part.trim())
		}
	}
}

impl Default for Runner {
	fn default() -> Self {
		Self::new()
	}
}

use crate::errors::Error;
use crate::value::Number;

type LexResult<T> = Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
	Sin,
	Cos,
	Tan,
	Log10,
	Ln,
	Sqrt
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrationalKind {
	Pi
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	Add,
	Sub,
	Mul,
	Div,
	Mod,
	Exp,
	Lpar,
	Rpar,
	Assign,
	Number(Number),
	Symbol(String),
	Function(FunctionKind),
	Irrational(IrrationalKind)
}

// True for every token that can precede a unary minus without it being read
// as binary subtraction; None stands for the synthetic start-of-input marker.
fn is_operator_or_start(token: &Option<Token>) -> bool {
	match token {
		None => true,
		Some(
			Token::Add
			| Token::Sub
			| Token::Mul
			| Token::Div
			| Token::Mod
			| Token::Exp
			| Token::Lpar
			| Token::Rpar
			| Token::Assign
		) => true,
		Some(_) => false
	}
}

pub fn lex(input: &str) -> LexResult<Vec<Token>> {
	let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
	let mut tokens: Vec<Token> = Vec::new();
	let mut rest: &str = &stripped;
	let mut prev: Option<Token> = None;

	while !rest.is_empty() {
		let ch = rest.chars().next().expect("rest is non-empty");

		if ch.is_ascii_digit() {
			let (number, consumed) = scan_number(rest)?;
			rest = &rest[consumed..];
			tokens.push(Token::Number(number));
		} else if ch == '-' {
			let (new_tokens, consumed) = scan_minus(rest, is_operator_or_start(&prev))?;
			rest = &rest[consumed..];
			tokens.extend(new_tokens);
		} else if "+*/%^()=".contains(ch) {
			rest = &rest[1..];
			tokens.push(operator_token(ch));
		} else if ch.is_ascii_alphabetic() {
			let (token, consumed) = scan_identifier(rest);
			rest = &rest[consumed..];
			tokens.push(token);
		} else {
			return Err(Error::lex(format!("unrecognized character '{ch}'")));
		}

		prev = tokens.last().cloned();
	}

	Ok(tokens)
}

fn operator_token(ch: char) -> Token {
	match ch {
		'+' => Token::Add,
		'*' => Token::Mul,
		'/' => Token::Div,
		'%' => Token::Mod,
		'^' => Token::Exp,
		'(' => Token::Lpar,
		')' => Token::Rpar,
		'=' => Token::Assign,
		_ => unreachable!("operator_token called with non-operator character")
	}
}

// Disambiguate a leading '-'. text starts at the '-' itself. Returns the
// token(s) to emit (one, except the "-x" rule which emits Number(-1), Mul)
// and how much of text they consumed.
fn scan_minus(text: &str, prev_is_operator_or_start: bool) -> LexResult<(Vec<Token>, usize)> {
	let after_minus = &text[1..];
	let next = after_minus.chars().next();

	let begins_value = matches!(next, Some(c) if c.is_ascii_digit() || c.is_ascii_alphabetic() || c == '-');

	if !prev_is_operator_or_start && begins_value {
		return Ok((vec![Token::Sub], 1));
	}

	if matches!(next, Some(c) if c.is_ascii_alphabetic()) {
		return Ok((vec![Token::Number(Number::Integer(-1)), Token::Mul], 1));
	}

	if matches!(next, Some(c) if c.is_ascii_digit()) {
		let (number, consumed) = scan_number(after_minus)?;
		return Ok((vec![Token::Number(number.negate())], 1 + consumed));
	}

	// Next char begins neither a number nor an identifier (e.g. `(`,
	// another unary `-`, or end of input): emit a bare `Sub` and let the
	// parser's `NR := Sub NR` rule absorb it.
	Ok((vec![Token::Sub], 1))
}

fn scan_number(text: &str) -> LexResult<(Number, usize)> {
	let bytes = text.as_bytes();
	let mut pos = scan_digits(bytes, 0);
	let mut is_float = false;

	if bytes.get(pos) == Some(&b'.') {
		is_float = true;
		pos += 1;
		let frac_start = pos;
		pos = scan_digits(bytes, pos);
		if pos == frac_start {
			return Err(Error::lex("no digits following '.'"));
		}
	}

	if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
		let mut exp_pos = pos + 1;
		if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
			exp_pos += 1;
		}
		let digits_start = exp_pos;
		exp_pos = scan_digits(bytes, exp_pos);
		if exp_pos == digits_start {
			return Err(Error::lex("trailing 'e' with no exponent digits"));
		}
		pos = exp_pos;
		is_float = true;
	}

	let slice = &text[..pos];
	let number = if is_float {
		Number::Floating(slice.parse::<f64>().map_err(|_| Error::lex(format!("malformed number literal '{slice}'")))?)
	} else {
		Number::Integer(slice.parse::<i64>().map_err(|_| Error::lex(format!("malformed number literal '{slice}'")))?)
	};

	Ok((number, pos))
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
	let mut pos = start;
	while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
		pos += 1;
	}
	pos
}

fn scan_identifier(text: &str) -> (Token, usize) {
	let bytes = text.as_bytes();
	let mut pos = 1;
	while bytes.get(pos).is_some_and(u8::is_ascii_alphanumeric) {
		pos += 1;
	}

	let word = &text[..pos];
	let token = match word.to_ascii_lowercase().as_str() {
		"sin" => Token::Function(FunctionKind::Sin),
		"cos" => Token::Function(FunctionKind::Cos),
		"tan" => Token::Function(FunctionKind::Tan),
		"log" => Token::Function(FunctionKind::Log10),
		"ln" => Token::Function(FunctionKind::Ln),
		"sqrt" => Token::Function(FunctionKind::Sqrt),
		"pi" => Token::Irrational(IrrationalKind::Pi),
		_ => Token::Symbol(word.to_string())
	};

	(token, pos)
}

pub fn help() -> String {
	env!("CARGO_PKG_NAME").to_string() + " " + env!("CARGO_PKG_VERSION") +
		r#" is an interactive arithmetic expression evaluator with a function-plotting mode.
commands:
help               displays this help text.
quit               exits.
plot <expr>, <x_min>, <x_max>, <dx>
                   samples <expr> (which must mention the variable x) over
                   [<x_min>, <x_max>] in steps of <dx> and prints the points.
poly <coeffs>, <x> evaluates a polynomial at <x> by Horner's method; <coeffs>
                   is a comma- or semicolon-separated list, highest degree first.
<name> = <expr>    evaluates <expr> and assigns the result to variable <name>.
<expr>             evaluates <expr> and displays the result.

<name> is an identifier: a letter followed by letters or digits.
<expr> is a mathematical expression, consisting of any of the following:

<number>          a number literal: [-]nnn[.nnn][e[-]nnn] or scientific
                      notation such as 1e3, 2.5E-4.
expr + expr       addition
expr - expr       subtraction
expr * expr       multiplication
expr / expr       division (truncates toward zero for integer operands)
expr % expr       modulus (integers only; sign follows the dividend)
expr ^ expr       exponentiation, left-associative: 2^3^2 is (2^3)^2 = 64
-expr             unary negative expression
(expr)            parentheses can be used to modify the order of evaluation
sin(expr)         sine (radians)
cos(expr)         cosine (radians)
tan(expr)         tangent (radians)
log(expr)         logarithm (base 10)
ln(expr)          natural logarithm (base e)
sqrt(expr)        square root
pi                the constant pi
<name>            previously assigned value of a variable

Integer arithmetic stays integer; mixing in a floating value, or dividing
or exponentiating in a way that requires it, produces a floating result.
Division and modulus by exact zero are errors -- they do not produce
infinities. Function results that are mathematically undefined (e.g.
tan(pi/2)) surface as the platform's floating-point NaN or infinity rather
than an error.

Example input:
a = 2
b = -5
c = 3
r = (-b + sqrt(b^2 - 4*a*c)) / (2*a)
s = (-b - sqrt(b^2 - 4*a*c)) / (2*a)
plot x^2 - 1, -2, 2, 0.5"#
}

use std::fmt;

use thiserror::Error;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'src> {
    Identifier(&'src str) = 1,
    Number(f64) = 2,
    Operator(Ops) = 3,
    OpenParen = 4,
    ClosedParen = 5,
    Comma = 6,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ops {
    Plus = 0,
    Minus = 1,
    Mult = 2,
    Div = 3,
}

impl Ops {
    pub fn symbol(self) -> char {
        match self {
            Ops::Plus => '+',
            Ops::Minus => '-',
            Ops::Mult => '*',
            Ops::Div => '/',
        }
    }
}

impl fmt::Display for Ops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl<'src> Token<'src> {
    fn from_single_char(c: char) -> Option<Self> {
        use Token::*;

        match c {
            // Operators
            '+' => Some(Operator(Ops::Plus)),
            '-' => Some(Operator(Ops::Minus)),
            '*' => Some(Operator(Ops::Mult)),
            '/' => Some(Operator(Ops::Div)),
            // Parenthesis
            '(' => Some(OpenParen),
            ')' => Some(ClosedParen),
            // Delimiters
            ',' => Some(Comma),

            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "'{name}'"),
            Token::Number(num) => write!(f, "'{num}'"),
            Token::Operator(op) => write!(f, "'{op}'"),
            Token::OpenParen => write!(f, "'('"),
            Token::ClosedParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

/// No lexing rule matches the character at `position`, a zero-based
/// offset in chars into the whole of `input`.
///
/// Displays as the input up to the failing line, followed by a caret under
/// the failing column.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", caret_diagram(.input, .position))]
pub struct LexError {
    pub input: String,
    pub position: usize,
}

fn caret_diagram(input: &str, position: &usize) -> String {
    let mut rendered = String::new();
    let mut remaining = *position;

    for line in input.split('\n') {
        let width = line.chars().count();
        rendered.push_str(line);
        rendered.push('\n');

        if remaining <= width {
            rendered.push_str(&" ".repeat(remaining));
            rendered.push_str("^ invalid token");
            return rendered;
        }

        remaining -= width + 1;
    }

    format!("invalid token at position {position}")
}

fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-')
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Scans `input` into tokens.
///
/// Numbers take the longest prefix of a `[0-9.eE+-]` run that parses as an
/// `f64`, so `1e-3` is one token while `1-3` is three.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let byte_offset = |i: usize| chars.get(i).map_or(input.len(), |&(offset, _)| offset);
    let run_end = |start: usize, pred: fn(char) -> bool| {
        start + chars[start..].iter().take_while(|&&(_, c)| pred(c)).count()
    };

    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&(_, c)) = chars.get(i) {
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(token) = Token::from_single_char(c) {
            tokens.push(token);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            // Every prefix of the run is parsed, so this is quadratic in the
            // length of a single literal.
            let longest = (i + 1..=run_end(i, is_number_char))
                .filter_map(|end| {
                    input[byte_offset(i)..byte_offset(end)]
                        .parse::<f64>()
                        .ok()
                        .map(|num| (end, num))
                })
                .last();

            if let Some((end, num)) = longest {
                tokens.push(Token::Number(num));
                i = end;
                continue;
            }
        } else if c.is_alphabetic() {
            let end = run_end(i, is_identifier_char);
            tokens.push(Token::Identifier(&input[byte_offset(i)..byte_offset(end)]));
            i = end;
            continue;
        }

        return Err(LexError {
            input: input.to_owned(),
            position: i,
        });
    }

    log::trace!("lexed {} tokens: {:?}", tokens.len(), tokens);

    Ok(tokens)
}

pub trait Lex {
    fn lex(&self) -> Result<Vec<Token<'_>>, LexError>;
}

impl Lex for str {
    fn lex(&self) -> Result<Vec<Token<'_>>, LexError> {
        tokenize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Ops::*;
    use Token::*;

    #[test]
    fn lexing_nums() {
        let input = " 2.3  4.654345   700   0.23423  ";

        assert_eq!(
            input.lex().unwrap(),
            vec![
                Number(2.3),
                Number(4.654345),
                Number(700.0),
                Number(0.23423),
            ]
        );
    }

    #[test]
    fn lexing_scientific_notation() {
        assert_eq!(
            "1e5 2.5E-3 .5 1.".lex().unwrap(),
            vec![Number(1e5), Number(2.5e-3), Number(0.5), Number(1.0)]
        );

        // longest parseable prefix wins, the rest is lexed again
        assert_eq!(
            "1-2 3e 4e+".lex().unwrap(),
            vec![
                Number(1.0),
                Operator(Minus),
                Number(2.0),
                Number(3.0),
                Identifier(&"e"),
                Number(4.0),
                Identifier(&"e"),
                Operator(Plus),
            ]
        );
    }

    #[test]
    fn lexing_identifiers() {
        let input = " pi   xyz   GLBAL   sqrt2 log10e ";

        assert_eq!(
            input.lex().unwrap(),
            vec![
                Identifier(&"pi"),
                Identifier(&"xyz"),
                Identifier(&"GLBAL"),
                Identifier(&"sqrt2"),
                Identifier(&"log10e"),
            ]
        );
    }

    #[test]
    fn lexing_operators() {
        let input = " + - * / ";

        assert_eq!(
            input.lex().unwrap(),
            vec![
                Operator(Plus),
                Operator(Minus),
                Operator(Mult),
                Operator(Div),
            ]
        );
    }

    #[test]
    fn lexing_calls() {
        assert_eq!(
            " atan2(2, 5) ".lex().unwrap(),
            vec![
                Identifier(&"atan2"),
                OpenParen,
                Number(2.0),
                Comma,
                Number(5.0),
                ClosedParen,
            ]
        );

        assert_eq!(
            "nan()".lex().unwrap(),
            vec![Identifier(&"nan"), OpenParen, ClosedParen]
        );

        assert_eq!(
            "-sin((x+2)*pi)".lex().unwrap(),
            vec![
                Operator(Minus),
                Identifier(&"sin"),
                OpenParen,
                OpenParen,
                Identifier(&"x"),
                Operator(Plus),
                Number(2.0),
                ClosedParen,
                Operator(Mult),
                Identifier(&"pi"),
                ClosedParen,
            ]
        );
    }

    #[test]
    fn lexing_empty_input() {
        assert!("".lex().unwrap().is_empty());
        assert!(" \t\n ".lex().unwrap().is_empty());
    }

    #[test]
    fn invalid_token_position() {
        let err = "1 + @".lex().unwrap_err();
        assert_eq!(err.position, 4);

        // a lone dot is not a number
        assert_eq!("2 * .".lex().unwrap_err().position, 4);

        // positions count chars, not bytes
        assert_eq!("π + ∑".lex().unwrap_err().position, 4);
    }

    #[test]
    fn invalid_token_caret() {
        let err = "1 + @".lex().unwrap_err();
        assert_eq!(err.to_string(), "1 + @\n    ^ invalid token");

        let err = "1 +\n2 * #\n3".lex().unwrap_err();
        assert_eq!(err.position, 8);
        assert_eq!(err.to_string(), "1 +\n2 * #\n    ^ invalid token");
    }
}

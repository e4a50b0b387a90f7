use logos::Logos;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all tokens the calculator recognizes.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number, priority = 10)]
    #[regex(r"\.[0-9]+", parse_number, priority = 10)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Any other run of non-whitespace, non-operator characters, such as `x`,
    /// `^` or `1.2.3`. Kept as a token so the parser can name it in errors.
    #[regex(r"[^ \t\r\n+*/-]+", |lex| lex.slice().to_string())]
    Word(String),
}

fn parse_number(lex: &mut logos::Lexer<'_, Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Word(w) => write!(f, "{w}"),
        }
    }
}

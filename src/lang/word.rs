/// Reserved words. Matching is case sensitive and a reserved word may
/// not appear anywhere inside a variable name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Rem,
    Let,
    Print,
    Input,
    End,
    Goto,
    If,
    Then,
    Run,
    List,
    Clear,
    Quit,
    Help,
}

impl Word {
    pub const ALL: [Word; 13] = [
        Word::Rem,
        Word::Let,
        Word::Print,
        Word::Input,
        Word::End,
        Word::Goto,
        Word::If,
        Word::Then,
        Word::Run,
        Word::List,
        Word::Clear,
        Word::Quit,
        Word::Help,
    ];

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Rem => "REM",
            Let => "LET",
            Print => "PRINT",
            Input => "INPUT",
            End => "END",
            Goto => "GOTO",
            If => "IF",
            Then => "THEN",
            Run => "RUN",
            List => "LIST",
            Clear => "CLEAR",
            Quit => "QUIT",
            Help => "HELP",
        }
    }

    /// Splits off the reserved word that begins `s`, returning it with
    /// the trimmed remainder. No reserved word is a prefix of another.
    pub fn starting(s: &str) -> Option<(Word, &str)> {
        Word::ALL.iter().find_map(|&word| {
            s.strip_prefix(word.as_str())
                .map(|operand| (word, operand.trim()))
        })
    }

    /// True when a reserved word occurs anywhere inside `s`.
    pub fn collides(s: &str) -> bool {
        Word::ALL.iter().any(|word| s.contains(word.as_str()))
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

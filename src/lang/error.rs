use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The program line being executed when the error was raised.
    /// Only known for errors that abort a RUN.
    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: Some(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DivideByZero,
    InvalidNumber,
    LineNumberError,
    SyntaxError,
    VariableNotDefined,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            DivideByZero => "DIVIDE BY ZERO",
            InvalidNumber => "INVALID NUMBER",
            LineNumberError => "LINE NUMBER ERROR",
            SyntaxError => "SYNTAX ERROR",
            VariableNotDefined => "VARIABLE NOT DEFINED",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(line_number) => write!(f, "Error {{ {} IN {} }}", self.code, line_number),
            None => write!(f, "Error {{ {} }}", self.code),
        }
    }
}

// The console shows the bare message; the line number is for diagnostics.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl std::error::Error for Error {}

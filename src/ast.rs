/// Top-level parsed token
///
/// Concatenating the lexemes of a token stream reproduces the parsed input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// `@import "path";`
    Import(Import<'a>),
    /// `$$device(...)`, including the whitespace that follows it
    Device(DeviceCall<'a>),
    /// Stylesheet text, including malformed macro invocations
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// Source text this token was parsed from
    pub fn lexeme(&self) -> &'a str {
        match self {
            Token::Import(import) => import.lexeme,
            Token::Device(call) => call.lexeme,
            Token::Literal(text) => *text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import<'a> {
    pub lexeme: &'a str,
    pub path: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCall<'a> {
    pub lexeme: &'a str,
    pub name: &'a str,
    pub width: &'a str,
    pub height: &'a str,
}

/// A device invocation with its fragment loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken {
    pub name: String,
    /// Dimension literals are kept verbatim (`414px`, `100%`)
    pub width: String,
    pub height: String,
    /// Fragment text, trimmed at both ends
    pub body: String,
}

impl DeviceToken {
    pub fn new(call: &DeviceCall<'_>, body: &str) -> Self {
        Self {
            name: call.name.to_owned(),
            width: call.width.to_owned(),
            height: call.height.to_owned(),
            body: body.trim().to_owned(),
        }
    }

    /// Class that scopes this device's rules
    pub fn class_name(&self) -> String {
        format!("device-{}", self.name)
    }
}

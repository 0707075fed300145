//! JavaScript source scanning.
//!
//! [`SourceFile::parse`] walks the text once, classifying every character
//! as code, comment, or literal content (strings, template text, regular
//! expression bodies). Rules match against the masked code view of each
//! line. The scanner also verifies that brackets balance and literals are
//! terminated; a failure becomes a single fatal parse message, which is
//! what ESLint reports for files its parser rejects.

use std::path::{Path, PathBuf};

use super::diagnostic::LintMessage;
use super::span::Span;

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Executable code, including literal delimiters.
    Code,
    /// Line or block comment.
    Comment,
    /// Contents of a string, template or regular expression literal.
    Literal,
}

/// One line of scanned source.
#[derive(Debug, Clone)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,
    /// Line text without the line terminator.
    pub raw: String,
    /// Same width as `raw` with comments and literal contents blanked.
    pub code: String,
    regions: Vec<Region>,
    opens_in: Region,
}

impl SourceLine {
    /// Region of the character at 0-based char index `idx`.
    pub fn region_at(&self, idx: usize) -> Option<Region> {
        self.regions.get(idx).copied()
    }

    /// Number of characters on the line.
    pub fn char_len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the line holds only whitespace and starts outside any
    /// literal or comment.
    pub fn is_blank(&self) -> bool {
        self.opens_in == Region::Code
            && self.raw.trim().is_empty()
            && self.regions.iter().all(|r| *r == Region::Code)
    }
}

/// A scanned JavaScript file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    lines: Vec<SourceLine>,
}

impl SourceFile {
    /// Scan `text`, returning a fatal parse message if it is malformed.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, LintMessage> {
        let text = text.into();
        let lines = Scanner::new(&text).run()?;
        Ok(Self {
            path: path.into(),
            text,
            lines,
        })
    }

    /// Path the source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Scanned lines.
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Paren,
    Bracket,
    Brace,
    TemplateExpr,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Code,
    LineComment,
    BlockComment { start: (usize, usize) },
    Str { quote: char, start: (usize, usize) },
    Template { start: (usize, usize) },
    Regex { in_class: bool, start: (usize, usize) },
}

const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "case",
    "do",
    "else",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "instanceof",
    "yield",
    "await",
];

const REGEX_PRECEDING_PUNCT: &str = "(,=:[!&|?{};+-*%<>~^}";

fn is_ident(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    state: State,
    escaped: bool,
    stack: Vec<(Open, usize, usize)>,
    last_significant: Option<char>,
    adjacent: bool,
    update_op: bool,
    last_word: String,
    word_open: bool,
    raw: String,
    code: String,
    regions: Vec<Region>,
    opens_in: Region,
    lines: Vec<SourceLine>,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            state: State::Code,
            escaped: false,
            stack: Vec::new(),
            last_significant: None,
            adjacent: false,
            update_op: false,
            last_word: String::new(),
            word_open: false,
            raw: String::new(),
            code: String::new(),
            regions: Vec::new(),
            opens_in: Region::Code,
            lines: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<SourceLine>, LintMessage> {
        while self.pos < self.chars.len() {
            let ch = self.chars[self.pos];
            if ch == '\n' {
                self.newline()?;
                continue;
            }
            self.step(ch)?;
        }
        self.finish()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn fail(&self, message: impl AsRef<str>, at: (usize, usize)) -> LintMessage {
        LintMessage::fatal(
            format!("Parsing error: {}", message.as_ref()),
            Span::point(at.0, at.1),
        )
    }

    /// Record a character on the current line and advance.
    fn emit(&mut self, ch: char, region: Region) {
        self.raw.push(ch);
        self.code.push(if region == Region::Code { ch } else { ' ' });
        self.regions.push(region);
        match region {
            Region::Code => self.note_code(ch),
            _ => {
                self.word_open = false;
                self.adjacent = false;
            }
        }
        self.pos += 1;
        self.col += 1;
    }

    fn note_code(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.word_open = false;
            self.adjacent = false;
            return;
        }
        // `++` and `--` written back to back; a third in a row starts a new operator.
        self.update_op = matches!(ch, '+' | '-')
            && self.adjacent
            && self.last_significant == Some(ch)
            && !self.update_op;
        self.adjacent = true;
        if is_ident(ch) {
            if !self.word_open {
                self.last_word.clear();
            }
            self.last_word.push(ch);
            self.word_open = true;
        } else {
            self.last_word.clear();
            self.word_open = false;
        }
        self.last_significant = Some(ch);
    }

    fn regex_allowed(&self) -> bool {
        match self.last_significant {
            None => true,
            Some(_) if self.update_op => false,
            Some(c) if is_ident(c) => REGEX_PRECEDING_KEYWORDS.contains(&self.last_word.as_str()),
            Some(c) => REGEX_PRECEDING_PUNCT.contains(c),
        }
    }

    fn newline(&mut self) -> Result<(), LintMessage> {
        match self.state {
            State::LineComment => self.state = State::Code,
            State::Str { start, .. } if !self.escaped => {
                return Err(self.fail("Unterminated string constant", start));
            }
            State::Regex { start, .. } => {
                return Err(self.fail("Unterminated regular expression", start));
            }
            _ => {}
        }
        self.escaped = false;
        self.word_open = false;
        self.adjacent = false;
        self.flush_line();
        self.opens_in = match self.state {
            State::Code | State::LineComment => Region::Code,
            State::BlockComment { .. } => Region::Comment,
            State::Str { .. } | State::Template { .. } | State::Regex { .. } => Region::Literal,
        };
        self.pos += 1;
        self.line += 1;
        self.col = 1;
        Ok(())
    }

    fn flush_line(&mut self) {
        if self.raw.ends_with('\r') {
            self.raw.pop();
            self.code.pop();
            self.regions.pop();
        }
        self.lines.push(SourceLine {
            number: self.line,
            raw: std::mem::take(&mut self.raw),
            code: std::mem::take(&mut self.code),
            regions: std::mem::take(&mut self.regions),
            opens_in: self.opens_in,
        });
    }

    fn step(&mut self, ch: char) -> Result<(), LintMessage> {
        match self.state {
            State::Code => self.step_code(ch)?,
            State::LineComment => self.emit(ch, Region::Comment),
            State::BlockComment { .. } => {
                if ch == '*' && self.peek() == Some('/') {
                    self.emit(ch, Region::Comment);
                    self.emit('/', Region::Comment);
                    self.state = State::Code;
                } else {
                    self.emit(ch, Region::Comment);
                }
            }
            State::Str { quote, .. } => {
                if self.escaped && ch == '\r' && self.peek() == Some('\n') {
                    self.emit(ch, Region::Literal);
                } else if self.escaped {
                    self.escaped = false;
                    self.emit(ch, Region::Literal);
                } else if ch == '\\' {
                    self.escaped = true;
                    self.emit(ch, Region::Literal);
                } else if ch == quote {
                    self.emit(ch, Region::Code);
                    self.state = State::Code;
                } else {
                    self.emit(ch, Region::Literal);
                }
            }
            State::Template { .. } => {
                if self.escaped && ch == '\r' && self.peek() == Some('\n') {
                    self.emit(ch, Region::Literal);
                } else if self.escaped {
                    self.escaped = false;
                    self.emit(ch, Region::Literal);
                } else if ch == '\\' {
                    self.escaped = true;
                    self.emit(ch, Region::Literal);
                } else if ch == '`' {
                    self.emit(ch, Region::Code);
                    self.state = State::Code;
                } else if ch == '$' && self.peek() == Some('{') {
                    self.stack.push((Open::TemplateExpr, self.line, self.col));
                    self.emit(ch, Region::Code);
                    self.emit('{', Region::Code);
                    self.state = State::Code;
                } else {
                    self.emit(ch, Region::Literal);
                }
            }
            State::Regex { in_class, start } => {
                if self.escaped {
                    self.escaped = false;
                    self.emit(ch, Region::Literal);
                } else if ch == '\\' {
                    self.escaped = true;
                    self.emit(ch, Region::Literal);
                } else if ch == '[' {
                    self.state = State::Regex {
                        in_class: true,
                        start,
                    };
                    self.emit(ch, Region::Literal);
                } else if ch == ']' {
                    self.state = State::Regex {
                        in_class: false,
                        start,
                    };
                    self.emit(ch, Region::Literal);
                } else if ch == '/' && !in_class {
                    self.emit(ch, Region::Code);
                    self.state = State::Code;
                } else {
                    self.emit(ch, Region::Literal);
                }
            }
        }
        Ok(())
    }

    fn step_code(&mut self, ch: char) -> Result<(), LintMessage> {
        let here = (self.line, self.col);
        match ch {
            '/' if self.peek() == Some('/') => {
                self.state = State::LineComment;
                self.emit(ch, Region::Comment);
                self.emit('/', Region::Comment);
            }
            '/' if self.peek() == Some('*') => {
                self.state = State::BlockComment { start: here };
                self.emit(ch, Region::Comment);
                self.emit('*', Region::Comment);
            }
            '/' if self.regex_allowed() => {
                self.emit(ch, Region::Code);
                self.state = State::Regex {
                    in_class: false,
                    start: here,
                };
            }
            '\'' | '"' => {
                self.emit(ch, Region::Code);
                self.state = State::Str {
                    quote: ch,
                    start: here,
                };
            }
            '`' => {
                self.emit(ch, Region::Code);
                self.state = State::Template { start: here };
            }
            '(' | '[' | '{' => {
                let open = match ch {
                    '(' => Open::Paren,
                    '[' => Open::Bracket,
                    _ => Open::Brace,
                };
                self.stack.push((open, here.0, here.1));
                self.emit(ch, Region::Code);
            }
            ')' | ']' | '}' => {
                let top = self.stack.pop().map(|(open, _, _)| open);
                match (ch, top) {
                    (')', Some(Open::Paren)) | (']', Some(Open::Bracket)) | ('}', Some(Open::Brace)) => {
                        self.emit(ch, Region::Code);
                    }
                    ('}', Some(Open::TemplateExpr)) => {
                        self.emit(ch, Region::Code);
                        self.state = State::Template { start: here };
                    }
                    _ => return Err(self.fail(format!("Unexpected token {}", ch), here)),
                }
            }
            _ => self.emit(ch, Region::Code),
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<SourceLine>, LintMessage> {
        match self.state {
            State::BlockComment { start } => return Err(self.fail("Unterminated comment", start)),
            State::Str { start, .. } => {
                return Err(self.fail("Unterminated string constant", start))
            }
            State::Template { start } => return Err(self.fail("Unterminated template", start)),
            State::Regex { start, .. } => {
                return Err(self.fail("Unterminated regular expression", start))
            }
            State::Code | State::LineComment => {}
        }
        if !self.stack.is_empty() {
            return Err(self.fail("Unexpected end of input", (self.line, self.col)));
        }
        if !self.raw.is_empty() || !self.regions.is_empty() {
            self.flush_line();
        }
        Ok(self.lines)
    }
}

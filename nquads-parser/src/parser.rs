use crate::error::{NQuadsParseError, NQuadsSyntaxError, TextPosition};
use rdf_model::{BlankNode, GraphName, Literal, NamedNode, Subject, Term};
use rdf_sink::QuadSink;

/// Which lexical construct is currently being scanned. Orthogonal to [`Expect`]: a comment
/// can interrupt the lexer between any two tokens regardless of which sentence slot is next.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum LexState {
    Outside,
    Uri,
    BNode,
    Literal,
    AfterLiteral,
    /// Saw the first `^` of a `^^<IRI>` datatype tail; expecting the second `^`.
    DatatypeCaret,
    /// Saw `^^`; expecting the `<` that opens the datatype IRI.
    DatatypeAngle,
    LiteralType,
    Comment,
}

/// What the next completed token fills in the statement currently being assembled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Expect {
    Subject,
    Predicate,
    Object,
    GraphOrDot,
    Dot,
}

/// Tracks an in-progress `\uXXXX`/`\UXXXXXXXX`/simple escape inside a URI or literal token.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Escape {
    None,
    /// Just saw a backslash; the next character decides what kind of escape this is.
    Kind,
    /// Reading the `remaining` hex digits of a `\uXXXX` (started at 4) or `\UXXXXXXXX`
    /// (started at 8) escape.
    Hex(u8),
}

/// What kind of token `LiteralType` is currently accumulating.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum LiteralTypeKind {
    Language,
    Datatype,
}

/// A streaming N-Quads/N-Triples parser.
///
/// Feed it arbitrarily sized chunks of input through [`Self::process`]; a token may be
/// split across any number of chunks (down to a single character at a time) without
/// changing the statements produced — see the `chunking_invariance` test in this crate's
/// `tests/` directory. Call [`Self::end_stream`] once after the last chunk.
///
/// Grounded on `oxttl`'s `toolkit::Lexer` (position tracking, cross-buffer tokens) and
/// `line_formats::NQuadsRecognizer` (the state/slot-filling design), adapted from a
/// byte-buffer `TokenRecognizer` into a single self-contained character-stream state
/// machine, matching `process(chars, offset, count)` rather than a pull-based lexer.
pub struct NQuadsParser {
    error_recovery: bool,
    graph_handler: Option<Box<dyn FnMut(&NQuadsSyntaxError)>>,
    with_graph_name: bool,

    lex_state: LexState,
    expect: Expect,
    escape: Escape,
    literal_type_kind: LiteralTypeKind,
    recovering: bool,

    /// Accumulates the current token's text as it is scanned, independent of how many
    /// `process` calls it spans.
    token: String,
    /// Set when the object slot was filled by a literal; cleared once the statement
    /// carrying it is emitted.
    pending_literal: Option<PendingLiteral>,

    subject: Option<Subject>,
    predicate: Option<NamedNode>,
    object: Option<Term>,
    graph: Option<GraphName>,

    line: u64,
    column: u64,
    offset: u64,
}

struct PendingLiteral {
    value: String,
}

impl Default for NQuadsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NQuadsParser {
    /// Builds a parser for N-Quads (4-column, graph name optional on every statement).
    pub fn new() -> Self {
        Self::new_with_graph_name(true)
    }

    /// Builds a parser for N-Triples, the 3-column subset of N-Quads: no graph name is
    /// ever expected, and every statement is emitted to the default graph.
    pub fn new_triples() -> Self {
        Self::new_with_graph_name(false)
    }

    fn new_with_graph_name(with_graph_name: bool) -> Self {
        Self {
            error_recovery: false,
            graph_handler: None,
            with_graph_name,
            lex_state: LexState::Outside,
            expect: Expect::Subject,
            escape: Escape::None,
            literal_type_kind: LiteralTypeKind::Language,
            recovering: false,
            token: String::new(),
            pending_literal: None,
            subject: None,
            predicate: None,
            object: None,
            graph: None,
            line: 0,
            column: 0,
            offset: 0,
        }
    }

    /// Enables error recovery: a syntax error discards the statement in progress and skips
    /// input up to and including the next `.`, instead of aborting the parse.
    #[must_use]
    pub fn with_error_recovery(mut self, enabled: bool) -> Self {
        self.error_recovery = enabled;
        self
    }

    /// Registers a handler notified of every syntax error, whether or not error recovery
    /// is enabled. Mirrors the `processor-graph-handler` configuration key.
    #[must_use]
    pub fn with_graph_handler(mut self, handler: impl FnMut(&NQuadsSyntaxError) + 'static) -> Self {
        self.graph_handler = Some(Box::new(handler));
        self
    }

    /// Whether the parser is currently between statements with no partial token pending —
    /// i.e. it would be valid to call [`Self::end_stream`] right now.
    pub fn is_end(&self) -> bool {
        self.lex_state == LexState::Outside && self.expect == Expect::Subject && !self.recovering
    }

    fn position(&self) -> TextPosition {
        TextPosition {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Feeds one chunk of input through the state machine, invoking `sink` synchronously
    /// for every statement completed along the way.
    pub fn process<S: QuadSink>(
        &mut self,
        input: &str,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        let bytes = input.as_bytes();
        let mut pos = 0usize;
        while pos < bytes.len() {
            if self.lex_state == LexState::Comment {
                match memchr::memchr(b'\n', &bytes[pos..]) {
                    Some(relative) => pos += relative,
                    None => break,
                }
            }
            // Safe: `pos` always lands on a char boundary because we only ever advance it
            // by `c.len_utf8()` or by a `memchr` hit on the ASCII byte `\n`.
            let c = input[pos..]
                .chars()
                .next()
                .expect("pos is at a char boundary within input");
            pos += c.len_utf8();
            self.feed_char(c, sink)?;
        }
        Ok(())
    }

    /// Signals end of input. Errors if a token or statement was left incomplete.
    pub fn end_stream<S: QuadSink>(&mut self, sink: &mut S) -> Result<(), NQuadsParseError<S::Error>> {
        if !self.is_end() {
            self.raise(sink, "unexpected end of stream inside an unfinished statement")?;
        }
        Ok(())
    }

    fn feed_char<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.offset += 1;

        if self.recovering {
            if c == '.' {
                self.recovering = false;
                self.reset_statement();
            }
            return Ok(());
        }

        match self.lex_state {
            LexState::Outside => self.feed_outside(c, sink),
            LexState::Uri => self.feed_uri(c, sink),
            LexState::BNode => self.feed_bnode(c, sink),
            LexState::Literal => self.feed_literal(c, sink),
            LexState::AfterLiteral => self.feed_after_literal(c, sink),
            LexState::DatatypeCaret => {
                if c == '^' {
                    self.lex_state = LexState::DatatypeAngle;
                    Ok(())
                } else {
                    self.raise(sink, "expected `^^` before a datatype IRI")
                }
            }
            LexState::DatatypeAngle => {
                if c == '<' {
                    self.token.clear();
                    self.escape = Escape::None;
                    self.lex_state = LexState::LiteralType;
                    Ok(())
                } else {
                    self.raise(sink, "expected `<` to start a datatype IRI")
                }
            }
            LexState::LiteralType => self.feed_literal_type(c, sink),
            LexState::Comment => {
                if c == '\n' {
                    self.lex_state = LexState::Outside;
                }
                Ok(())
            }
        }
    }

    fn feed_outside<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match c {
            ' ' | '\t' | '\r' | '\n' => Ok(()),
            '#' => {
                self.lex_state = LexState::Comment;
                Ok(())
            }
            '<' => {
                self.token.clear();
                self.escape = Escape::None;
                self.lex_state = LexState::Uri;
                Ok(())
            }
            '_' if self.expect != Expect::Predicate => {
                self.token.clear();
                self.lex_state = LexState::BNode;
                Ok(())
            }
            '"' if self.expect == Expect::Object => {
                self.token.clear();
                self.escape = Escape::None;
                self.lex_state = LexState::Literal;
                Ok(())
            }
            '.' if self.expect == Expect::GraphOrDot || self.expect == Expect::Dot => {
                self.finish_sentence(sink)
            }
            _ => self.raise(sink, format!("unexpected character {c:?}")),
        }
    }

    fn feed_uri<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match self.escape {
            Escape::None => match c {
                '>' => {
                    let iri = match unescape(&self.token) {
                        Ok(iri) => iri,
                        Err(message) => return self.raise(sink, message),
                    };
                    if !iri_util::is_absolute(&iri) {
                        return self.raise(sink, format!("{iri} is not an absolute IRI"));
                    }
                    self.lex_state = LexState::Outside;
                    self.fill_slot(Term::NamedNode(NamedNode::new_unchecked(iri)), sink)
                }
                '\\' => {
                    self.token.push(c);
                    self.escape = Escape::Kind;
                    Ok(())
                }
                '<' | ' ' | '\t' | '\r' | '\n' => {
                    self.raise(sink, format!("unexpected character {c:?} in an IRI"))
                }
                _ => {
                    self.token.push(c);
                    Ok(())
                }
            },
            _ => self.feed_escape(c, sink),
        }
    }

    fn feed_bnode<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match c {
            ' ' | '\t' | '\r' | '\n' | '.' | '<' | '_' | '"' => {
                if self.token.is_empty() {
                    return self.raise(sink, "empty blank node label");
                }
                let label = std::mem::take(&mut self.token);
                self.lex_state = LexState::Outside;
                self.fill_slot(Term::BlankNode(BlankNode::new_unchecked(label)), sink)?;
                self.feed_outside(c, sink)
            }
            _ => {
                self.token.push(c);
                Ok(())
            }
        }
    }

    fn feed_literal<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match self.escape {
            Escape::None => match c {
                '"' => {
                    self.lex_state = LexState::AfterLiteral;
                    Ok(())
                }
                '\\' => {
                    self.token.push(c);
                    self.escape = Escape::Kind;
                    Ok(())
                }
                '\n' => self.raise(sink, "literal is not terminated before end of line"),
                _ => {
                    self.token.push(c);
                    Ok(())
                }
            },
            _ => self.feed_escape(c, sink),
        }
    }

    /// Handles one character of an in-progress `\X`/`\uXXXX`/`\UXXXXXXXX` escape shared by
    /// URI and literal scanning. The numeric translation itself happens later, in
    /// [`unescape`]; here we only track how many more characters belong to this escape so
    /// we do not mistake an escaped delimiter (`\"`, `\>`) for the real one.
    fn feed_escape<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        self.token.push(c);
        match self.escape {
            Escape::Kind => {
                self.escape = match c {
                    'u' => Escape::Hex(4),
                    'U' => Escape::Hex(8),
                    't' | 'n' | 'r' | 'b' | 'f' | '"' | '\'' | '\\' => Escape::None,
                    _ => return self.raise(sink, format!("{c:?} is not a valid escape character")),
                };
                Ok(())
            }
            Escape::Hex(remaining) => {
                if !c.is_ascii_hexdigit() {
                    return self.raise(sink, format!("{c:?} is not a hexadecimal digit"));
                }
                self.escape = if remaining > 1 {
                    Escape::Hex(remaining - 1)
                } else {
                    Escape::None
                };
                Ok(())
            }
            Escape::None => unreachable!("feed_escape is only called while an escape is open"),
        }
    }

    fn feed_after_literal<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match c {
            '@' => {
                self.pending_literal = Some(PendingLiteral {
                    value: std::mem::take(&mut self.token),
                });
                self.literal_type_kind = LiteralTypeKind::Language;
                self.lex_state = LexState::LiteralType;
                Ok(())
            }
            '^' => {
                self.pending_literal = Some(PendingLiteral {
                    value: std::mem::take(&mut self.token),
                });
                self.literal_type_kind = LiteralTypeKind::Datatype;
                self.lex_state = LexState::DatatypeCaret;
                Ok(())
            }
            ' ' | '\t' | '\r' | '\n' | '.' | '<' | '_' => {
                self.lex_state = LexState::Outside;
                let raw = std::mem::take(&mut self.token);
                self.emit_plain_literal(raw, None, sink)?;
                self.feed_outside(c, sink)
            }
            _ => self.raise(sink, format!("unexpected character {c:?} after a literal")),
        }
    }

    fn feed_literal_type<S: QuadSink>(
        &mut self,
        c: char,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match self.literal_type_kind {
            LiteralTypeKind::Language => match c {
                ' ' | '\t' | '\r' | '\n' | '.' | '<' | '_' => {
                    if self.token.is_empty() || !is_valid_language_tag(&self.token) {
                        return self.raise(sink, "invalid language tag");
                    }
                    let language = std::mem::take(&mut self.token);
                    let raw = self.pending_literal_value();
                    self.lex_state = LexState::Outside;
                    self.emit_plain_literal(raw, Some(language), sink)?;
                    self.feed_outside(c, sink)
                }
                c if c.is_ascii_alphanumeric() || c == '-' => {
                    self.token.push(c);
                    Ok(())
                }
                _ => self.raise(sink, format!("unexpected character {c:?} in a language tag")),
            },
            LiteralTypeKind::Datatype => {
                // Reached only once `^^<` has already been consumed (see `DatatypeCaret`/
                // `DatatypeAngle`); `token` holds just the IRI body.
                match self.escape {
                    Escape::None => match c {
                        '>' => {
                            let iri = match unescape(&self.token) {
                                Ok(iri) => iri,
                                Err(message) => return self.raise(sink, message),
                            };
                            if !iri_util::is_absolute(&iri) {
                                return self.raise(sink, format!("{iri} is not an absolute IRI"));
                            }
                            self.lex_state = LexState::Outside;
                            self.emit_typed_literal(NamedNode::new_unchecked(iri), sink)
                        }
                        '\\' => {
                            self.token.push(c);
                            self.escape = Escape::Kind;
                            Ok(())
                        }
                        _ => {
                            self.token.push(c);
                            Ok(())
                        }
                    },
                    _ => self.feed_escape(c, sink),
                }
            }
        }
    }

    fn emit_plain_literal<S: QuadSink>(
        &mut self,
        raw_value: String,
        language: Option<String>,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        let value = match unescape(&raw_value) {
            Ok(value) => value,
            Err(message) => return self.raise(sink, message),
        };
        let literal = match language {
            Some(language) => match Literal::new_language_tagged(value, language) {
                Ok(literal) => literal,
                Err(error) => return self.raise(sink, error.to_string()),
            },
            None => Literal::new_simple(value),
        };
        self.fill_slot(Term::Literal(literal), sink)
    }

    fn emit_typed_literal<S: QuadSink>(
        &mut self,
        datatype: NamedNode,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        let raw_value = self.pending_literal_value();
        let value = match unescape(&raw_value) {
            Ok(value) => value,
            Err(message) => return self.raise(sink, message),
        };
        self.fill_slot(Term::Literal(Literal::new_typed(value, datatype)), sink)
    }

    /// The literal's lexical value was captured back when we left `Literal` state (stored
    /// raw, still escaped) and must be recalled here since `token` has since been reused to
    /// scan the `^^<...>` tail. Retrieved from `pending_literal`.
    fn pending_literal_value(&mut self) -> String {
        self.pending_literal
            .take()
            .map(|p| p.value)
            .unwrap_or_default()
    }

    fn fill_slot<S: QuadSink>(
        &mut self,
        term: Term,
        sink: &mut S,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        match self.expect {
            Expect::Subject => {
                let subject = match term {
                    Term::NamedNode(n) => Subject::NamedNode(n),
                    Term::BlankNode(n) => Subject::BlankNode(n),
                    Term::Literal(_) => return self.raise(sink, "a literal cannot be a subject"),
                };
                self.subject = Some(subject);
                self.expect = Expect::Predicate;
                Ok(())
            }
            Expect::Predicate => {
                let Term::NamedNode(predicate) = term else {
                    return self.raise(sink, "a predicate must be an IRI");
                };
                self.predicate = Some(predicate);
                self.expect = Expect::Object;
                Ok(())
            }
            Expect::Object => {
                self.object = Some(term);
                self.expect = if self.with_graph_name {
                    Expect::GraphOrDot
                } else {
                    Expect::Dot
                };
                Ok(())
            }
            Expect::GraphOrDot => {
                let graph = match term {
                    Term::NamedNode(n) => GraphName::NamedNode(n),
                    Term::BlankNode(n) => GraphName::BlankNode(n),
                    Term::Literal(_) => return self.raise(sink, "a graph name cannot be a literal"),
                };
                self.graph = Some(graph);
                self.expect = Expect::Dot;
                Ok(())
            }
            Expect::Dot => self.raise(sink, "expected `.` to terminate the statement"),
        }
    }

    fn finish_sentence<S: QuadSink>(&mut self, sink: &mut S) -> Result<(), NQuadsParseError<S::Error>> {
        let subject = self
            .subject
            .take()
            .unwrap_or_else(|| unreachable!("`.` is only reachable once a subject was filled"));
        let predicate = self
            .predicate
            .take()
            .unwrap_or_else(|| unreachable!("`.` is only reachable once a predicate was filled"));
        let object = self
            .object
            .take()
            .unwrap_or_else(|| unreachable!("`.` is only reachable once an object was filled"));
        let graph = self.graph.take();

        let result = match object {
            Term::NamedNode(n) => {
                sink.add_iri_ref(&subject, &predicate, &n, graph.as_ref())
            }
            Term::BlankNode(n) => {
                sink.add_non_literal(&subject, &predicate, &Subject::BlankNode(n), graph.as_ref())
            }
            Term::Literal(Literal::Typed { value, datatype }) => {
                sink.add_typed_literal(&subject, &predicate, &value, &datatype, graph.as_ref())
            }
            Term::Literal(Literal::Simple(value)) => {
                sink.add_plain_literal(&subject, &predicate, &value, None, graph.as_ref())
            }
            Term::Literal(Literal::LanguageTagged { value, language }) => {
                sink.add_plain_literal(&subject, &predicate, &value, Some(&language), graph.as_ref())
            }
        };
        self.reset_statement();
        result.map_err(NQuadsParseError::Sink)
    }

    fn reset_statement(&mut self) {
        self.subject = None;
        self.predicate = None;
        self.object = None;
        self.graph = None;
        self.token.clear();
        self.pending_literal = None;
        self.lex_state = LexState::Outside;
        self.expect = Expect::Subject;
    }

    fn raise<S: QuadSink>(
        &mut self,
        _sink: &mut S,
        message: impl Into<String>,
    ) -> Result<(), NQuadsParseError<S::Error>> {
        let error = NQuadsSyntaxError::new(self.position(), message);
        if let Some(handler) = &mut self.graph_handler {
            handler(&error);
        }
        if self.error_recovery {
            self.recovering = true;
            self.lex_state = LexState::Outside;
            Ok(())
        } else {
            Err(NQuadsParseError::Syntax(error))
        }
    }
}

/// Translates `\t`, `\n`, `\uXXXX`, `\UXXXXXXXX` and the other N-Quads escapes in `raw`
/// (which still contains the literal backslash sequences the lexer only recognized the
/// shape of) into their real characters. Run once per completed token, after scanning.
fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(kind @ ('u' | 'U')) => {
                let count = if kind == 'u' { 4 } else { 8 };
                let hex: String = chars.by_ref().take(count).collect();
                if hex.len() != count {
                    return Err(format!("truncated \\{kind} escape"));
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| format!("invalid hexadecimal digits in \\{kind}{hex}"))?;
                let c = char::from_u32(code).ok_or_else(|| format!("\\{kind}{hex} is not a Unicode scalar value"))?;
                out.push(c);
            }
            Some(other) => return Err(format!("{other:?} is not a valid escape character")),
            None => return Err("truncated escape sequence at end of token".to_owned()),
        }
    }
    Ok(out)
}

fn is_valid_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    match parts.next() {
        Some(first) if !first.is_empty() && first.chars().all(|c| c.is_ascii_alphabetic()) => {}
        _ => return false,
    }
    parts.all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()))
}

//! Local type declaration relocation.
//!
//! Moves `enum`, `interface` and `record` declarations found inside executable
//! code to the end of the enclosing top-level type, where every grammar
//! accepts them, and appends a placeholder member per move. The removed span
//! is replaced by its own line breaks so later line numbers do not shift.

use langver_core::constants::RELOCATION_PLACEHOLDER_STEM;
use langver_core::types::collections::SmallVec2;
use serde::Serialize;

use super::lexer::{Lexer, Token};
use crate::catalog::Feature;

/// Modifiers that may precede a local type declaration.
const LOCAL_MODIFIERS: &[&str] = &["final", "abstract", "static", "strictfp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalKind {
    Enum,
    Interface,
    Record,
}

impl LocalKind {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "enum" => Some(Self::Enum),
            "interface" => Some(Self::Interface),
            "record" => Some(Self::Record),
            _ => None,
        }
    }

    /// Feature recorded when a declaration of this kind had to be moved.
    pub fn feature(self) -> Feature {
        match self {
            Self::Enum => Feature::LocalEnums,
            Self::Interface => Feature::LocalInterfaces,
            Self::Record => Feature::LocalRecords,
        }
    }
}

/// One declaration moved out of a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocatedDeclaration {
    pub kind: LocalKind,
    pub name: String,
    /// 1-based line of the declaration in the original text.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub text: String,
    pub relocated: SmallVec2<RelocatedDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BraceKind {
    TypeBody,
    Code,
}

struct Frame {
    kind: BraceKind,
    /// Indices into the span list, set on the top-level frame only.
    pending: Vec<usize>,
}

struct Span {
    start: usize,
    end: usize,
    kind: LocalKind,
    name: String,
    /// Position of the closing brace of the enclosing top-level type.
    target: Option<usize>,
}

/// What has been seen since the last `;`, `{` or `}`.
#[derive(Default)]
struct Header {
    first_start: Option<usize>,
    non_modifier: bool,
    declares_type: bool,
    has_new: bool,
    last: Option<u8>,
    prev_dot: bool,
}

impl Header {
    fn push_word(&mut self, word: &str, start: usize, next_is_word: bool) {
        self.first_start.get_or_insert(start);
        if !LOCAL_MODIFIERS.contains(&word) {
            self.non_modifier = true;
        }
        let type_keyword = matches!(word, "class" | "interface" | "enum")
            || (word == "record" && next_is_word);
        if type_keyword && !self.prev_dot {
            self.declares_type = true;
        }
        if word == "new" {
            self.has_new = true;
        }
        self.last = None;
        self.prev_dot = false;
    }

    /// Annotations sit among the modifiers and keep the header a candidate.
    fn push_annotation(&mut self, start: usize) {
        self.first_start.get_or_insert(start);
        self.last = None;
        self.prev_dot = false;
    }

    fn push_other(&mut self, start: usize, byte: Option<u8>) {
        self.first_start.get_or_insert(start);
        self.non_modifier = true;
        self.last = byte;
        self.prev_dot = byte == Some(b'.');
    }

    /// Type bodies: declarations and anonymous class bodies. Everything else
    /// (methods, initializers, lambdas, control flow) is code.
    fn classify(&self) -> BraceKind {
        if self.declares_type || (self.has_new && self.last == Some(b')')) {
            BraceKind::TypeBody
        } else {
            BraceKind::Code
        }
    }
}

struct Found {
    name: String,
    end: usize,
    next_token: usize,
}

fn word_at<'s>(source: &'s str, tokens: &[Token], idx: usize) -> Option<&'s str> {
    match tokens.get(idx) {
        Some(Token::Word(r)) => Some(&source[r.clone()]),
        _ => None,
    }
}

fn punct_at(tokens: &[Token], idx: usize) -> Option<u8> {
    match tokens.get(idx) {
        Some(Token::Punct(_, b)) => Some(*b),
        _ => None,
    }
}

/// Recognizes `kind Name ... { ... }` starting at `tokens[idx]`.
fn local_declaration(source: &str, tokens: &[Token], idx: usize, kind: LocalKind) -> Option<Found> {
    let name = word_at(source, tokens, idx + 1)?;
    let shape_ok = match kind {
        LocalKind::Record => matches!(punct_at(tokens, idx + 2), Some(b'(' | b'<')),
        LocalKind::Enum => {
            punct_at(tokens, idx + 2) == Some(b'{')
                || word_at(source, tokens, idx + 2) == Some("implements")
        }
        LocalKind::Interface => {
            matches!(punct_at(tokens, idx + 2), Some(b'{' | b'<'))
                || word_at(source, tokens, idx + 2) == Some("extends")
        }
    };
    if !shape_ok {
        return None;
    }

    let mut open = None;
    for (k, token) in tokens.iter().enumerate().skip(idx + 2) {
        match token {
            Token::Punct(_, b'{') => {
                open = Some(k);
                break;
            }
            Token::Punct(_, b';' | b'}') => return None,
            _ => {}
        }
    }

    let mut depth = 0usize;
    for (k, token) in tokens.iter().enumerate().skip(open?) {
        match token {
            Token::Punct(_, b'{') => depth += 1,
            Token::Punct(pos, b'}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(Found {
                        name: name.to_string(),
                        end: pos + 1,
                        next_token: k + 1,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

/// Index just past `@Name`, `@a.b.Name` or `@Name(...)` starting at
/// `tokens[idx]`. `@interface` declares a type and is not an annotation.
fn annotation_end(source: &str, tokens: &[Token], idx: usize) -> Option<usize> {
    if punct_at(tokens, idx) != Some(b'@') {
        return None;
    }
    let mut k = idx + 1;
    if word_at(source, tokens, k)? == "interface" {
        return None;
    }
    k += 1;
    while punct_at(tokens, k) == Some(b'.') {
        word_at(source, tokens, k + 1)?;
        k += 2;
    }
    if punct_at(tokens, k) != Some(b'(') {
        return Some(k);
    }
    let mut depth = 0usize;
    for (j, token) in tokens.iter().enumerate().skip(k) {
        match token {
            Token::Punct(_, b'(') => depth += 1,
            Token::Punct(_, b')') => {
                depth -= 1;
                if depth == 0 {
                    return Some(j + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn in_code_block(frames: &[Frame]) -> bool {
    frames.len() >= 2
        && frames[0].kind == BraceKind::TypeBody
        && frames.last().is_some_and(|f| f.kind == BraceKind::Code)
}

fn find_spans(source: &str) -> Vec<Span> {
    let tokens: Vec<Token> = Lexer::new(source).filter(|t| !t.is_trivia()).collect();
    let mut spans: Vec<Span> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut header = Header::default();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Punct(_, b'{') => {
                frames.push(Frame {
                    kind: header.classify(),
                    pending: Vec::new(),
                });
                header = Header::default();
            }
            Token::Punct(pos, b'}') => {
                if let Some(frame) = frames.pop() {
                    if frames.is_empty() {
                        for idx in frame.pending {
                            spans[idx].target = Some(*pos);
                        }
                    }
                }
                header = Header::default();
            }
            Token::Punct(_, b';') => header = Header::default(),
            Token::Punct(pos, b'@') => match annotation_end(source, &tokens, i) {
                Some(end) => {
                    header.push_annotation(*pos);
                    i = end;
                    continue;
                }
                None => header.push_other(*pos, Some(b'@')),
            },
            Token::Word(range) => {
                let word = &source[range.clone()];
                let candidate = LocalKind::from_keyword(word)
                    .filter(|_| in_code_block(&frames) && !header.non_modifier);
                if let Some(kind) = candidate {
                    if let Some(found) = local_declaration(source, &tokens, i, kind) {
                        spans.push(Span {
                            start: header.first_start.unwrap_or(range.start),
                            end: found.end,
                            kind,
                            name: found.name,
                            target: None,
                        });
                        frames[0].pending.push(spans.len() - 1);
                        i = found.next_token;
                        header = Header::default();
                        continue;
                    }
                }
                let next_is_word = matches!(tokens.get(i + 1), Some(Token::Word(_)));
                header.push_word(word, range.start, next_is_word);
            }
            Token::Punct(pos, b) => header.push_other(*pos, Some(*b)),
            other => header.push_other(other.start(), None),
        }
        i += 1;
    }

    spans.retain(|s| s.target.is_some());
    spans
}

/// Moves every local enum, interface and record to its top-level type.
///
/// Running it on its own output relocates nothing further.
pub fn relocate_local_declarations(source: &str) -> Relocation {
    let spans = find_spans(source);
    if spans.is_empty() {
        return Relocation {
            text: source.to_string(),
            relocated: SmallVec2::new(),
        };
    }

    let mut placeholder = source.matches(RELOCATION_PLACEHOLDER_STEM).count();
    let mut out = String::with_capacity(source.len() + spans.len() * 48);
    let mut relocated = SmallVec2::new();
    let mut cursor = 0usize;
    let mut group_start = 0usize;

    while group_start < spans.len() {
        let target = spans[group_start].target.unwrap_or(source.len());
        let group_end = spans[group_start..]
            .iter()
            .position(|s| s.target != Some(target))
            .map_or(spans.len(), |n| group_start + n);
        let group = &spans[group_start..group_end];

        for span in group {
            out.push_str(&source[cursor..span.start]);
            out.extend(source[span.start..span.end].chars().filter(|c| *c == '\n'));
            cursor = span.end;
        }
        out.push_str(&source[cursor..target]);
        cursor = target;

        for span in group {
            out.push('\n');
            out.push_str(&source[span.start..span.end]);
            out.push('\n');
            out.push_str(&format!(
                "void {RELOCATION_PLACEHOLDER_STEM}{placeholder}__() {{}}\n"
            ));
            placeholder += 1;
            relocated.push(RelocatedDeclaration {
                kind: span.kind,
                name: span.name.clone(),
                line: source[..span.start].matches('\n').count() + 1,
            });
        }
        group_start = group_end;
    }
    out.push_str(&source[cursor..]);

    Relocation {
        text: out,
        relocated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL_ENUM: &str = "class Outer {
    void run() {
        int before = 1;
        enum Color { RED, GREEN }
        int after = 2;
    }
}
";

    #[test]
    fn test_moves_local_enum_to_top_level_type() {
        let result = relocate_local_declarations(LOCAL_ENUM);
        assert_eq!(result.relocated.len(), 1);
        let moved = &result.relocated[0];
        assert_eq!(moved.kind, LocalKind::Enum);
        assert_eq!(moved.name, "Color");
        assert_eq!(moved.line, 4);

        let text = &result.text;
        let method_end = text.find("int after = 2;").unwrap();
        assert!(!text[..method_end].contains("enum"));
        assert!(text.find("enum Color { RED, GREEN }").unwrap() > method_end);
        assert!(text.contains("void __langver_relocated_0__() {}"));
        assert!(text.contains("int before = 1;"));
        assert!(text.lines().nth(3).unwrap().trim().is_empty());
        assert!(text.trim_end().ends_with('}'));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let once = relocate_local_declarations(LOCAL_ENUM);
        let twice = relocate_local_declarations(&once.text);
        assert!(twice.relocated.is_empty());
        assert_eq!(twice.text, once.text);
        assert_eq!(twice.text.matches("__langver_relocated_").count(), 1);
    }

    #[test]
    fn test_member_declarations_stay() {
        let src = "class A { enum E { X } interface I {} record R(int x) {} void f() {} }";
        let result = relocate_local_declarations(src);
        assert!(result.relocated.is_empty());
        assert_eq!(result.text, src);
    }

    #[test]
    fn test_keywords_in_literals_and_comments_are_ignored() {
        let src = "class A { void f() { String s = \"enum X { }\"; char c = '{'; // enum Y { }\n } }";
        let result = relocate_local_declarations(src);
        assert!(result.relocated.is_empty());
    }

    #[test]
    fn test_anonymous_class_body_is_not_code() {
        let src = "class A { Object o = new Object() { enum E { X } }; }";
        assert!(relocate_local_declarations(src).relocated.is_empty());
    }

    #[test]
    fn test_records_and_interfaces() {
        let src = "class A {
    void f() {
        record Point(int x, int y) {}
        interface Shape { double area(); }
        Runnable r = () -> { enum Inner { Z } };
    }
}";
        let result = relocate_local_declarations(src);
        let kinds: Vec<LocalKind> = result.relocated.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![LocalKind::Record, LocalKind::Interface, LocalKind::Enum]);
        assert_eq!(result.relocated[0].name, "Point");
        assert!(result.text.contains("void __langver_relocated_2__() {}"));
    }

    #[test]
    fn test_each_top_level_type_receives_its_own() {
        let src = "class A { void f() { enum E { X } } }\nclass B { void g() { enum F { Y } } }\n";
        let result = relocate_local_declarations(src);
        assert_eq!(result.relocated.len(), 2);
        let text = &result.text;
        let class_b = text.find("class B").unwrap();
        assert!(text.find("enum E { X }").unwrap() < class_b);
        assert!(text.find("enum F { Y }").unwrap() > class_b);
    }

    #[test]
    fn test_annotated_local_declarations_move_with_their_annotations() {
        let src = "class A {
    void f() {
        @Deprecated enum E { X }
        @java.lang.FunctionalInterface interface Op { int apply(int x); }
        @SuppressWarnings({\"unused\", \"rawtypes\"}) final record P(int x) {}
        int y = 1;
    }
}";
        let result = relocate_local_declarations(src);
        let names: Vec<&str> = result.relocated.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["E", "Op", "P"]);
        assert_eq!(result.relocated[2].kind, LocalKind::Record);

        let text = &result.text;
        let method_end = text.find("int y = 1;").unwrap();
        assert!(!text[..method_end].contains('@'));
        assert!(text.find("@Deprecated enum E { X }").unwrap() > method_end);
        assert!(text.contains("@SuppressWarnings({\"unused\", \"rawtypes\"}) final record P(int x) {}"));
    }

    #[test]
    fn test_annotation_type_and_annotated_statements_stay() {
        let src = "class A {
    @interface Marker {}
    void f(java.util.List<String> xs) {
        @SuppressWarnings(\"unused\") int n = xs.size();
        Object o = new Object() { @Deprecated enum Inner { Z } };
    }
}";
        assert!(relocate_local_declarations(src).relocated.is_empty());
    }

    #[test]
    fn test_variable_named_record_is_not_a_declaration() {
        let src = "class A { void f(Object record) { record = null; record.hashCode(); } }";
        assert!(relocate_local_declarations(src).relocated.is_empty());
    }
}

/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree bottom-up, applies the arithmetic operators
/// and substitutes the supplied previous answer for every `ans` reference.
///
/// # Responsibilities
/// - Evaluates every node variant with IEEE-754 double semantics.
/// - Reports trees that break the node invariants as internal errors.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// carrying its kind, its exact source text and its offset. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Classifies operators, parentheses, `ans` and number literals.
/// - Skips whitespace.
/// - Lets the parser push tokens back for lookahead.
/// - Reports unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs a tree following the
/// operator-precedence grammar, including implicit multiplication by
/// juxtaposition such as `3(4 + 5)`.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with their source offset.
pub mod parser;
/// The serializer module renders syntax trees as JSON.
///
/// Trees and subtrees are written as nested objects tagged with a `type`
/// field, indented by two spaces per level. Empty operand slots are written as
/// `null` so partially built trees can be inspected.
pub mod serializer;
/// The session module keeps the previous answer between evaluations.
///
/// # Responsibilities
/// - Holds the `ans` register.
/// - Parses and evaluates lines, updating `ans` only on success.
pub mod session;

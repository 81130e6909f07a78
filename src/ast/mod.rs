/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to a parsed annotation
///
/// Submodules:
/// - ast: `Derive`, `NameValue`, `Value` and their canonical text form
/// - literals: Scalar literals and list folding
pub mod ast;
pub mod literals;

#[cfg(test)]
mod tests;

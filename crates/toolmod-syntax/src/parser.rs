//! Declaration parser for manifest source.
//!
//! Recursive descent over the manifest grammar:
//!
//! ```text
//! file          := module_clause { import_block | const_block } EOF
//! module_clause := "module" IDENT
//! import_block  := "import" "(" { [ "_" ] STRING } ")"
//! const_block   := "const" "(" { IDENT "=" STRING } ")"
//! ```
//!
//! The parser is strict: anything outside this grammar fails with a
//! positional diagnostic. Blank-import markers are optional on read; the
//! generator always emits them.

use tracing::debug;

use crate::errors::SyntaxError;
use crate::scanner::{Scanner, Token, TokenKind};

/// Declaration tree for one parsed manifest source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Name from the `module` clause.
    pub module: String,
    /// Import declarations in file order, across all import blocks.
    pub imports: Vec<ImportSpec>,
    /// Constant declarations in file order.
    pub constants: Vec<ConstSpec>,
}

/// One import declaration, e.g. `_ "a/one"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
    /// Whether the entry carried the blank marker `_`.
    pub blank: bool,
}

/// One constant declaration, e.g. `file_version = "v1.0.0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstSpec {
    pub name: String,
    pub value: String,
}

impl SourceFile {
    /// Import paths in declaration order.
    pub fn import_paths(&self) -> Vec<String> {
        self.imports.iter().map(|spec| spec.path.clone()).collect()
    }

    /// Look up a constant by name.
    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.value.as_str())
    }
}

/// Parse manifest source into a declaration tree.
///
/// `file` is the name used in diagnostics (callers pass the manifest's base
/// name); no filesystem access happens here.
pub fn parse_source(file: &str, src: &str) -> Result<SourceFile, SyntaxError> {
    let parsed = Parser::new(file, src).parse()?;
    debug!(
        "parsed {}: module '{}', {} imports, {} constants",
        file,
        parsed.module,
        parsed.imports.len(),
        parsed.constants.len()
    );
    Ok(parsed)
}

struct Parser<'a> {
    file: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    fn new(file: &'a str, src: &'a str) -> Self {
        Parser {
            file,
            scanner: Scanner::new(file, src),
        }
    }

    fn parse(mut self) -> Result<SourceFile, SyntaxError> {
        let mut parsed = SourceFile {
            module: self.parse_module_clause()?,
            ..SourceFile::default()
        };

        loop {
            let token = self.scanner.next_token()?;
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Ident(keyword) if keyword == "import" => {
                    self.parse_import_block(&mut parsed.imports)?;
                }
                TokenKind::Ident(keyword) if keyword == "const" => {
                    self.parse_const_block(&mut parsed.constants)?;
                }
                _ => {
                    return Err(self.expected("'import', 'const' or 'EOF'", &token));
                }
            }
        }

        Ok(parsed)
    }

    fn parse_module_clause(&mut self) -> Result<String, SyntaxError> {
        let token = self.scanner.next_token()?;
        match &token.kind {
            TokenKind::Ident(keyword) if keyword == "module" => {}
            _ => return Err(self.expected("'module'", &token)),
        }

        let token = self.scanner.next_token()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Err(self.expected("module name", &token)),
        }
    }

    fn parse_import_block(&mut self, imports: &mut Vec<ImportSpec>) -> Result<(), SyntaxError> {
        self.expect_lparen()?;
        loop {
            let token = self.scanner.next_token()?;
            match token.kind {
                TokenKind::RParen => return Ok(()),
                TokenKind::Ident(ref marker) if marker == "_" => {
                    let path_token = self.scanner.next_token()?;
                    let TokenKind::Str(path) = path_token.kind else {
                        return Err(self.expected("import path string", &path_token));
                    };
                    imports.push(ImportSpec { path, blank: true });
                }
                TokenKind::Str(path) => {
                    imports.push(ImportSpec { path, blank: false });
                }
                _ => {
                    return Err(self.expected("import path string or ')'", &token));
                }
            }
        }
    }

    fn parse_const_block(&mut self, constants: &mut Vec<ConstSpec>) -> Result<(), SyntaxError> {
        self.expect_lparen()?;
        loop {
            let token = self.scanner.next_token()?;
            let name = match token.kind {
                TokenKind::RParen => return Ok(()),
                TokenKind::Ident(name) => name,
                _ => return Err(self.expected("constant name or ')'", &token)),
            };

            let token = self.scanner.next_token()?;
            if token.kind != TokenKind::Eq {
                return Err(self.expected("'='", &token));
            }

            let token = self.scanner.next_token()?;
            let TokenKind::Str(value) = token.kind else {
                return Err(self.expected("string literal", &token));
            };
            constants.push(ConstSpec { name, value });
        }
    }

    fn expect_lparen(&mut self) -> Result<(), SyntaxError> {
        let token = self.scanner.next_token()?;
        if token.kind == TokenKind::LParen {
            Ok(())
        } else {
            Err(self.expected("'('", &token))
        }
    }

    fn expected(&self, what: &str, found: &Token) -> SyntaxError {
        SyntaxError::new(
            self.file,
            found.line,
            found.column,
            format!("expected {}, found {}", what, found.kind.describe()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"// Code generated by https://github.com/toolmod/toolmod . DO NOT EDIT.
//toolmod:build tools
module tools

import (
	_ "a/one"
	_ "b/two"
)

const (
	file_version = "v1.0.0"
	toolmod_version = "??"
)
"#;

    #[test]
    fn test_parse_well_formed_manifest() {
        let Ok(parsed) = parse_source("tools.mod", WELL_FORMED) else {
            unreachable!("well-formed manifest must parse");
        };
        assert_eq!(parsed.module, "tools");
        assert_eq!(parsed.import_paths(), vec!["a/one", "b/two"]);
        assert!(parsed.imports.iter().all(|spec| spec.blank));
        assert_eq!(parsed.constant("file_version"), Some("v1.0.0"));
        assert_eq!(parsed.constant("toolmod_version"), Some("??"));
        assert_eq!(parsed.constant("missing"), None);
    }

    #[test]
    fn test_empty_input_fails_at_first_token() {
        let Err(err) = parse_source("tools.mod", "") else {
            unreachable!("empty input must fail");
        };
        assert_eq!(err.to_string(), "tools.mod:1:1: expected 'module', found 'EOF'");
    }

    #[test]
    fn test_comment_only_input_fails_at_eof_position() {
        let Err(err) = parse_source("tools.mod", "// just a comment\n") else {
            unreachable!("comment-only input must fail");
        };
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 1);
        assert!(err.message.contains("expected 'module'"));
    }

    #[test]
    fn test_module_clause_requires_name() {
        let Err(err) = parse_source("tools.mod", "module\n") else {
            unreachable!("bare module clause must fail");
        };
        assert_eq!(err.to_string(), "tools.mod:2:1: expected module name, found 'EOF'");
    }

    #[test]
    fn test_module_only_file_has_no_imports() {
        let Ok(parsed) = parse_source("tools.mod", "module tools\n") else {
            unreachable!("module-only file must parse");
        };
        assert!(parsed.imports.is_empty());
        assert!(parsed.constants.is_empty());
    }

    #[test]
    fn test_blank_marker_is_optional() {
        let src = "module tools\nimport (\n\t\"a/one\"\n\t_ \"b/two\"\n)\n";
        let Ok(parsed) = parse_source("tools.mod", src) else {
            unreachable!("mixed markers must parse");
        };
        assert_eq!(parsed.import_paths(), vec!["a/one", "b/two"]);
        assert!(!parsed.imports[0].blank);
        assert!(parsed.imports[1].blank);
    }

    #[test]
    fn test_multiple_import_blocks_concatenate_in_order() {
        let src = "module tools\nimport (\n\t_ \"b/two\"\n)\nimport (\n\t_ \"a/one\"\n)\n";
        let Ok(parsed) = parse_source("tools.mod", src) else {
            unreachable!("two import blocks must parse");
        };
        assert_eq!(parsed.import_paths(), vec!["b/two", "a/one"]);
    }

    #[test]
    fn test_empty_import_block_is_valid() {
        let Ok(parsed) = parse_source("tools.mod", "module tools\nimport (\n)\n") else {
            unreachable!("empty import block must parse");
        };
        assert!(parsed.imports.is_empty());
    }

    #[test]
    fn test_unknown_top_level_declaration_is_rejected() {
        let Err(err) = parse_source("tools.mod", "module tools\nexport (\n)\n") else {
            unreachable!("unknown declaration must fail");
        };
        assert_eq!(
            err.to_string(),
            "tools.mod:2:1: expected 'import', 'const' or 'EOF', found 'export'"
        );
    }

    #[test]
    fn test_import_block_requires_paren() {
        let Err(err) = parse_source("tools.mod", "module tools\nimport \"a/one\"\n") else {
            unreachable!("paren-less import must fail");
        };
        assert_eq!(
            err.to_string(),
            "tools.mod:2:8: expected '(', found string \"a/one\""
        );
    }

    #[test]
    fn test_blank_marker_requires_path() {
        let Err(err) = parse_source("tools.mod", "module tools\nimport (\n\t_ )\n") else {
            unreachable!("blank marker without path must fail");
        };
        assert_eq!(
            err.to_string(),
            "tools.mod:3:4: expected import path string, found ')'"
        );
    }

    #[test]
    fn test_const_block_entries() {
        let src = "module tools\nconst (\n\t// parse hint\n\tfile_version = \"v1.0.0\"\n)\n";
        let Ok(parsed) = parse_source("tools.mod", src) else {
            unreachable!("const block must parse");
        };
        assert_eq!(
            parsed.constants,
            vec![ConstSpec {
                name: "file_version".to_string(),
                value: "v1.0.0".to_string(),
            }]
        );
    }

    #[test]
    fn test_const_entry_requires_equals_and_string() {
        let Err(err) = parse_source("tools.mod", "module tools\nconst (\n\tfile_version \"v1\"\n)\n")
        else {
            unreachable!("missing '=' must fail");
        };
        assert_eq!(
            err.to_string(),
            "tools.mod:3:15: expected '=', found string \"v1\""
        );

        let Err(err) = parse_source("tools.mod", "module tools\nconst (\n\tfile_version = v1\n)\n")
        else {
            unreachable!("bare constant value must fail");
        };
        assert_eq!(
            err.to_string(),
            "tools.mod:3:17: expected string literal, found 'v1'"
        );
    }
}

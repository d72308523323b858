//! Integration tests for the end-to-end analysis pipeline.
//!
//! These tests run raw source through comment stripping, tokenization and
//! report rendering, the same way the binary does.

use lexan::{
    analyze, display_error,
    lexer::{comments::strip_comments, lexer::tokenize, tokens::TokenCategory},
    report::report::Report,
};
use std::thread;

const PROGRAM: &str = r#"/* Computes a running total.
   Multi-line header comment. */
int main() {
    int total = 0; // accumulator
    float rate = 1.5;
    char sep = ',';
    for (i = 0; i <= 10; i = i + 1) {
        if (i % 2 == 0 && i != 4) {
            total = total + i;
        }
    }
    printf("total: %d", total);
    return 0;
}
"#;

#[test]
fn test_analyze_program() {
    let table = analyze(PROGRAM).unwrap();

    assert_eq!(table[0].value, "int");
    assert_eq!(table[0].line(), 3);
    assert_eq!(table[0].column(), 1);

    let sep = table.iter().find(|token| token.category == TokenCategory::Char).unwrap();
    assert_eq!(sep.value, "','");
    assert_eq!((sep.line(), sep.column()), (6, 16));

    let printf = table.iter().find(|token| token.value == "printf").unwrap();
    assert_eq!(printf.category, TokenCategory::Keyword);
    assert_eq!(printf.line(), 12);

    assert_eq!(table.count(TokenCategory::String), 1);
    assert_eq!(table.count(TokenCategory::LogicalOperator), 1);
    assert_eq!(table.count(TokenCategory::ComparisonOperator), 3);
    assert_eq!(table.count(TokenCategory::Unknown), 0);
}

#[test]
fn test_report_from_program() {
    let table = analyze(PROGRAM).unwrap();
    let report = Report::new(&table);
    let rendered = report.to_string();

    assert_eq!(report.total(), table.len());
    assert!(rendered.contains("[3,5] PR: main\n"));
    assert!(rendered.contains("[8,29] OC: !=\n"));
    assert!(rendered.contains("[12,12] ST: \"total: %d\"\n"));
}

#[test]
fn test_error_aborts_pipeline() {
    let source = "int main() {\n    int x = 1;\n    x = x # 2;\n}\n";
    let error = analyze(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 11);

    let rendered = display_error(&error, &strip_comments(source), "main.c");
    assert!(rendered.contains("3 | x = x # 2;"));
    assert!(rendered.contains("  | ------^"));
}

#[test]
fn test_comment_stripping_preserves_error_lines() {
    let source = "/*\n\n*/\nchar c = 'abc';\n";
    let error = analyze(source).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidCharLiteral");
    assert_eq!(error.get_literal(), "'abc'");
    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 10);
}

#[test]
fn test_concurrent_analyses_agree() {
    let expected = tokenize(&strip_comments(PROGRAM)).unwrap();

    let handles: Vec<_> = (0..4).map(|_| thread::spawn(|| analyze(PROGRAM).unwrap())).collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

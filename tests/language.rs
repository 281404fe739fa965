use std::{fs, path::Path};

use calcline::{
    error::{CalcError, EvalError, LexError, ParseError},
    evaluate,
    interpreter::{
        evaluator::{core::evaluate_flat, usage::OperatorUsage},
        lexer::tokenize,
        resolver::resolve_parens,
        token::{Operator, Token},
    },
};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_expected() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, (source, expected)) in extract_cases(&content) {
            count += 1;
            let result = evaluate(source);
            match expected.strip_prefix('!') {
                Some(code) => match result {
                    Err(e) => assert_eq!(e.code(),
                                         code,
                                         "{path:?}:{line_no}: `{source}` failed with {e}"),
                    Ok(v) => panic!("{path:?}:{line_no}: `{source}` evaluated to {v}, expected error {code}"),
                },
                None => {
                    let want: i64 = expected.parse()
                                            .unwrap_or_else(|_| panic!("{path:?}:{line_no}: bad expectation '{expected}'"));
                    match result {
                        Ok(v) => assert_eq!(v, want, "{path:?}:{line_no}: `{source}`"),
                        Err(e) => panic!("{path:?}:{line_no}: `{source}` failed: {e}"),
                    }
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Yields `(line number, expression, expected)` for every `expr => expected`
/// line, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, (&str, &str))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| {
               let trimmed = line.trim();
               !trimmed.is_empty() && !trimmed.starts_with('#')
           })
           .map(|(i, line)| {
               let (source, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("line {} has no '=>': {line}", i + 1));
               (i + 1, (source.trim(), expected.trim()))
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(v) => panic!("`{src}` evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("8 - 5", 3);
    assert_value("7 * 9", 63);
    assert_value("10 / 2", 5);
    assert_value("2 ^ 10", 1024);
    assert_value("42", 42);
}

#[test]
fn subtraction_can_go_negative() {
    assert_value("3 - 10", -7);
    assert_value("1 - 2 - 3", -4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("(0 - 7) / 2", -3);
    assert_value("7 / (0 - 2)", -3);
    assert_value("1 / 3", 0);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("2 * 3 + 4", 10);
    assert_value("2 ^ 2 * 3", 12);
    assert_value("3 * 2 ^ 2", 12);
    assert_value("1 + 2 ^ 3 * 2 - 4 / 2", 15);
}

#[test]
fn same_class_is_left_to_right() {
    assert_value("8 / 2 / 2", 2);
    assert_value("10 - 4 + 3", 9);
    assert_value("2 * 6 / 4", 3);
    assert_value("6 / 4 * 2", 2);
    assert_value("2 ^ 3 ^ 2", 64);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20);
    assert_value("((1 + 2) * (3 + 4))", 21);
    assert_value("2 * (3 + (4 - 1) * 2)", 18);
    assert_value("(((7)))", 7);
    assert_value("(1 + 1) ^ (2 + 1)", 8);
}

#[test]
fn sibling_groups_resolve_independently() {
    assert_value("(1 + 2) * (3 + 4) - (5 * 2)", 11);
    assert_value("(2 ^ 2) ^ (1 + 1)", 16);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("1+2"), evaluate("1 + 2"));
    assert_eq!(evaluate("(2+3)*4"), evaluate(" ( 2 + 3 ) * 4 "));
    assert_value("\t1 +\t2", 3);
}

#[test]
fn line_terminator_does_not_matter() {
    assert_value("12 + 30\n", 42);
    assert_value("12 + 30\r\n", 42);
    assert_value("12 + 30", 42);
}

#[test]
fn trailing_number_is_kept_whole() {
    assert_value("1 + 123", 124);
    assert_value("123", 123);
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["(2 + 3) * 4", "4 / 0", "1 + + 2"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn wrapping_arithmetic() {
    assert_value("9223372036854775807 + 1", i64::MIN);
    assert_value("2 ^ 63", i64::MIN);
    assert_value("2 ^ 64", 0);
    assert_value("(0 - 9223372036854775807 - 1) / (0 - 1)", i64::MIN);
}

#[test]
fn invalid_numbers() {
    let e = assert_failure("1 + 2x");
    assert_eq!(e,
               CalcError::Lex(LexError::InvalidNumber { literal: "2x".to_string(),
                                                        column:  5, }));
    assert_eq!(assert_failure("abc").code(), "invalid-number");
    assert_eq!(assert_failure("1.5 * 2").code(), "invalid-number");
    assert_eq!(assert_failure("99999999999999999999").code(), "invalid-number");
}

#[test]
fn invalid_number_column_counts_characters() {
    let e = assert_failure("\u{a0}\u{a0}7 + 2x");
    assert_eq!(e,
               CalcError::Lex(LexError::InvalidNumber { literal: "2x".to_string(),
                                                        column:  7, }));
    assert_eq!(e.to_string(), "Invalid number '2x' at column 7.");
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(assert_failure("(1 + 2"),
               CalcError::Parse(ParseError::MismatchedParens { paren: '(' }));
    assert_eq!(assert_failure("1 + 2)"),
               CalcError::Parse(ParseError::MismatchedParens { paren: ')' }));
    assert_eq!(assert_failure(")1 + 2(").code(), "mismatched-parens");
    assert_eq!(assert_failure("((1 + 2)").code(), "mismatched-parens");
}

#[test]
fn empty_parentheses() {
    assert_eq!(assert_failure("()"), CalcError::Parse(ParseError::EmptySubexpression));
    assert_eq!(assert_failure("1 + ()").code(), "empty-subexpression");
}

#[test]
fn division_by_zero() {
    assert_eq!(assert_failure("4 / 0"),
               CalcError::Eval(EvalError::DivisionByZero { dividend: 4 }));
    assert_eq!(assert_failure("1 / (2 - 2)").code(), "division-by-zero");
}

#[test]
fn negative_exponent() {
    assert_eq!(assert_failure("2 ^ (1 - 3)"),
               CalcError::Eval(EvalError::NegativeExponent { exponent: -2 }));
}

#[test]
fn malformed_operator_placement() {
    for src in ["+ 1", "1 +", "1 + + 2", "- 5", "1 * / 2", "(1 +) * 2", ""] {
        assert_eq!(assert_failure(src).code(), "malformed-expression", "`{src}`");
    }
}

#[test]
fn adjacent_numbers_are_malformed() {
    assert_eq!(assert_failure("1 2").code(), "malformed-expression");
    assert_eq!(assert_failure("(1 + 2) 3").code(), "malformed-expression");
}

#[test]
fn tokenizer_emits_one_token_per_operator() {
    let tokens = tokenize("2^(10-3)").unwrap();
    assert_eq!(tokens,
               vec![Token::Number(2),
                    Token::Operator(Operator::Pow),
                    Token::LeftParen,
                    Token::Number(10),
                    Token::Operator(Operator::Sub),
                    Token::Number(3),
                    Token::RightParen]);
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn resolver_leaves_flat_sequences_alone() {
    let tokens = tokenize("1 + 2 * 3").unwrap();
    assert_eq!(resolve_parens(tokens.clone()).unwrap(), tokens);
}

#[test]
fn resolver_picks_innermost_pair() {
    let flat = resolve_parens(tokenize("(1 + (2 * 3)) * (4 - 1)").unwrap()).unwrap();
    assert_eq!(flat,
               vec![Token::Number(7), Token::Operator(Operator::Mul), Token::Number(3)]);
}

#[test]
fn evaluator_rejects_parenthesis_operands() {
    let tokens = vec![Token::Number(1), Token::Operator(Operator::Add), Token::LeftParen];
    let err = evaluate_flat(&tokens, OperatorUsage::of(&tokens)).unwrap_err();
    assert_eq!(err,
               EvalError::OperandNotNumber { operator: Operator::Add,
                                             found:    Token::LeftParen, });
}

#[test]
fn evaluator_reports_incomplete_usage_summary() {
    let tokens = tokenize("2 * 3 + 1").unwrap();
    let usage = OperatorUsage { additive:       true,
                                multiplicative: false,
                                exponentiation: false, };
    let err = evaluate_flat(&tokens, usage).unwrap_err();
    assert!(matches!(err, EvalError::MalformedExpression { .. }));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(assert_failure("4 / 0").to_string(), "Division by zero: 4 / 0.");
    assert_eq!(assert_failure("1 + 2x").to_string(), "Invalid number '2x' at column 5.");
    assert_eq!(assert_failure("(1").to_string(),
               "Mismatched parentheses: '(' is never closed.");
}

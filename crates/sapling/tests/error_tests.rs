// Error surfacing across the three stages
use sapling::*;

// ═══════════════════════════════════════════════════════════════════════
// Lex Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_two_decimal_points() {
    assert_eq!(
        parse("1..2"),
        Err(SaplingError::Lex(LexError::MalformedNumber {
            text: "1..".to_string(),
            position: 0,
        }))
    );
}

#[test]
fn test_unknown_characters() {
    for (src, ch, position) in [("2 x 3", 'x', 2), ("1 = 1", '=', 2), ("√4", '√', 0)] {
        assert_eq!(
            parse(src),
            Err(SaplingError::Lex(LexError::UnexpectedChar { ch, position })),
            "input {:?}",
            src
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Parse Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_rparen() {
    let err = parse("(1+2").unwrap_err();
    assert!(matches!(
        err,
        SaplingError::Parse(ParseError::ExpectedRParen { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Parse error: expected rparen, but found end of input at position 4"
    );
}

#[test]
fn test_trailing_input() {
    let err = parse("1 2").unwrap_err();
    assert!(matches!(
        err,
        SaplingError::Parse(ParseError::TrailingInput { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Parse error: trailing input: number `2` at position 2"
    );
    assert!(parse("(1)(2)").is_err());
}

#[test]
fn test_unexpected_tokens() {
    for src in ["", "+", "1 *", "* 2", "()", ")", "2 ^ ^ 3"] {
        assert!(
            matches!(
                parse(src),
                Err(SaplingError::Parse(ParseError::UnexpectedToken { .. }))
            ),
            "input {:?}",
            src
        );
    }
}

#[test]
fn test_nesting_too_deep() {
    let src = format!("{}1", "(".repeat(parser::MAX_NESTING + 1));
    assert!(matches!(
        parse(&src),
        Err(SaplingError::Parse(ParseError::NestingTooDeep { .. }))
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Eval Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval_str("5/0"),
        Err(SaplingError::Eval(EvalError::DivisionByZero {
            left: Value::Integer(5),
            right: Value::Integer(0),
        }))
    );
    assert!(matches!(
        eval_str("5/(2-2.0)"),
        Err(SaplingError::Eval(EvalError::DivisionByZero { .. }))
    ));
}

#[test]
fn test_modulo_by_zero() {
    let err = eval_str("5%0").unwrap_err();
    assert_eq!(
        err,
        SaplingError::Eval(EvalError::ModuloByZero {
            left: Value::Integer(5),
            right: Value::Integer(0),
        })
    );
    assert_eq!(err.to_string(), "Eval error: modulo by zero: 5 % 0");
}

#[test]
fn test_zero_divisor_found_after_parsing() {
    // Parsing succeeds; the failure belongs to evaluation
    let expr = parse("1 / (3 - 3)").unwrap();
    assert!(matches!(
        evaluate(&expr, &EvalContext::default()),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn test_invalid_literal_in_hand_built_tree() {
    let expr = Expr::binary(BinaryOp::Add, Expr::number("1"), Expr::number("one"));
    assert_eq!(
        evaluate(&expr, &EvalContext::default()),
        Err(EvalError::InvalidLiteral {
            text: "one".to_string(),
        })
    );
}

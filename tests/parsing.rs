use sugu::{
    ast::{Program, Statement},
    interpreter::{
        lexer::Lexer,
        parser::core::Parser,
        token::{Token, TokenKind},
    },
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

fn parse_ok(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {source:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn operators_tokenize_with_longest_match() {
    use TokenKind::*;

    let source = "= + - * / % ! < > == != <= >= && || , ; : ( ) => { } [ ] ++ -- += -= *= /= %=";
    assert_eq!(kinds(source),
               vec![Assign, Plus, Minus, Asterisk, Slash, Percent, Bang, Lt, Gt, Eq, NotEq,
                    LtEq, GtEq, And, Or, Comma, Semicolon, Colon, LParen, RParen, Arrow, LBrace,
                    RBrace, LBracket, RBracket, PlusPlus, MinusMinus, PlusAssign, MinusAssign,
                    AsteriskAssign, SlashAssign, PercentAssign, Eof]);
}

#[test]
fn adjacent_operators_disambiguate() {
    use TokenKind::*;

    assert_eq!(kinds("a==b"), vec![Ident, Eq, Ident, Eof]);
    assert_eq!(kinds("a=>b"), vec![Ident, Arrow, Ident, Eof]);
    assert_eq!(kinds("i++"), vec![Ident, PlusPlus, Eof]);
    assert_eq!(kinds("1+-2"), vec![Number, Plus, Minus, Number, Eof]);
    assert_eq!(kinds("x<=y>=z"), vec![Ident, LtEq, Ident, GtEq, Ident, Eof]);
}

#[test]
fn keywords_are_recognized() {
    use TokenKind::*;

    let source = "mut const func return if else switch case default while for break continue \
                  true false null try catch throw";
    assert_eq!(kinds(source),
               vec![Mut, Const, Func, Return, If, Else, Switch, Case, Default, While, For,
                    Break, Continue, True, False, Null, Try, Catch, Throw, Eof]);
}

#[test]
fn identifiers_and_numbers_keep_their_text() {
    let tokens = tokenize("foo _bar x1 42 3.14");
    let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(literals, vec!["foo", "_bar", "x1", "42", "3.14", ""]);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Number);
}

#[test]
fn a_number_stops_at_a_bare_dot() {
    use TokenKind::*;

    assert_eq!(kinds("1."), vec![Number, Illegal, Eof]);
    assert_eq!(kinds("1.2.3"), vec![Number, Illegal, Number, Eof]);
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = tokenize("mut x = 5;\nmut y = 10;");
    let positions: Vec<(usize, usize)> =
        tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions,
               vec![(1, 1),
                    (1, 5),
                    (1, 7),
                    (1, 9),
                    (1, 10),
                    (2, 1),
                    (2, 5),
                    (2, 7),
                    (2, 9),
                    (2, 11),
                    (2, 12)]);
}

#[test]
fn string_literals_process_escapes() {
    let tokens = tokenize(r#""hello" "a\nb" "tab\there" "say \"hi\"" "back\\slash""#);
    let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(literals,
               vec!["hello", "a\nb", "tab\there", "say \"hi\"", "back\\slash", ""]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Str));
}

#[test]
fn string_escape_failures_become_illegal_tokens() {
    let tokens = tokenize(r#""a\x""#);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, r"unknown escape sequence: \x");

    let tokens = tokenize("\"a\\");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, r"unexpected end of string after \");
}

#[test]
fn unterminated_strings_keep_their_partial_content() {
    let tokens = tokenize("\"abc");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn strings_may_contain_any_text() {
    let tokens = tokenize("\"日本語 text\"");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].literal, "日本語 text");

    // A newline inside a string advances the position of what follows.
    let tokens = tokenize("\"a\nb\"\nc");
    assert_eq!(tokens[0].literal, "a\nb");
    assert_eq!((tokens[1].line, tokens[1].column), (3, 1));
}

#[test]
fn comments_are_skipped() {
    use TokenKind::*;

    assert_eq!(kinds("1 // ignored\n2"), vec![Number, Number, Eof]);
    assert_eq!(kinds("1 //-- a\nmulti line\ncomment --// 2"), vec![Number, Number, Eof]);
    assert_eq!(kinds("//-- never closed"), vec![Eof]);
    assert_eq!(kinds("// only a comment"), vec![Eof]);

    let tokens = tokenize("//-- a\nb --//\nx");
    assert_eq!((tokens[0].line, tokens[0].column), (3, 1));
}

#[test]
fn stray_bytes_become_illegal_tokens() {
    let tokens = tokenize("&");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "&");

    let tokens = tokenize("|");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);

    let tokens = tokenize("@");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "@");

    assert_eq!(kinds("a && b || c"),
               vec![TokenKind::Ident,
                    TokenKind::And,
                    TokenKind::Ident,
                    TokenKind::Or,
                    TokenKind::Ident,
                    TokenKind::Eof]);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn literals_reproduce_the_source_modulo_whitespace() {
    let source = "mut x = 1 + 2; if (x > 2) { outln(x); }";
    let rebuilt: String = tokenize(source).iter().map(|t| t.literal.as_str()).collect();
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(rebuilt, compact);
}

#[test]
fn operator_precedence() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a % b * c", "((a % b) * c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("a <= b >= c", "((a <= b) >= c)"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a == b && c != d", "((a == b) && (c != d))"),
                 ("a && b || c && d", "((a && b) || (c && d))"),
                 ("a || b && c", "(a || (b && c))"),
                 ("x = a || b", "x = (a || b)"),
                 ("x = 1 + 2", "x = (1 + 2)"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a + b + c * d / f + g)", "add(((a + b) + (((c * d) / f) + g)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, want) in tests {
        assert_eq!(parse_ok(source).to_string(), want, "source: {source}");
    }
}

#[test]
fn statement_shapes() {
    let program = parse_ok("mut x = 5; const y = 10; return x;");
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(&program.statements[0], Statement::Variable { name, .. } if name.value == "x"));
    assert!(matches!(&program.statements[1], Statement::Variable { token, .. }
                     if token.literal == "const"));
    assert!(matches!(&program.statements[2], Statement::Return { value: Some(_), .. }));
}

#[test]
fn else_if_desugars_to_a_nested_block() {
    let program = parse_ok("if (a) { 1 } else if (b) { 2 } else { 3 }");
    assert_eq!(program.statements.len(), 1);

    let Statement::If { alternative: Some(alternative), .. } = &program.statements[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(alternative.statements.len(), 1);
    assert!(matches!(&alternative.statements[0], Statement::If { .. }));
}

#[test]
fn for_header_parts_are_optional() {
    assert!(matches!(&parse_ok("for (;;) { }").statements[0],
                     Statement::For { init: None, condition: None, update: None, .. }));
    assert!(matches!(&parse_ok("for (mut i = 0;;) { }").statements[0],
                     Statement::For { init: Some(_), condition: None, update: None, .. }));
    assert!(matches!(&parse_ok("for (; i < 3;) { }").statements[0],
                     Statement::For { init: None, condition: Some(_), update: None, .. }));
    assert!(matches!(&parse_ok("for (mut i = 0; i < 3; i = i + 1) { }").statements[0],
                     Statement::For { init: Some(_), condition: Some(_), update: Some(_), .. }));
}

#[test]
fn for_in_forms() {
    assert!(matches!(&parse_ok("for (x in xs) { }").statements[0],
                     Statement::ForIn { value: None, .. }));
    assert!(matches!(&parse_ok("for (i, x in xs) { }").statements[0],
                     Statement::ForIn { value: Some(_), .. }));
    // `in` only acts as a keyword inside a for header.
    assert!(matches!(&parse_ok("in()").statements[0], Statement::Expression { .. }));
}

#[test]
fn switch_clauses() {
    let program = parse_ok("switch (x) { case 1: { a } case 2: { b } default: { c } }");
    let Statement::Switch { cases, default, .. } = &program.statements[0] else {
        panic!("expected a switch statement");
    };
    assert_eq!(cases.len(), 2);
    assert!(default.is_some());
}

#[test]
fn semicolons_are_optional_at_block_end() {
    parse_ok("mut x = 1");
    parse_ok("if (x) { 1 }");
    parse_ok("func f() => { x }");
    parse_ok("{ \"a\": 1 }");
}

#[test]
fn parse_diagnostics_carry_positions() {
    assert_eq!(parse_errors("mut = 5;")[0],
               "line 1, column 5: expected next token to be IDENT, got = instead");
    assert_eq!(parse_errors("mut x 5;"),
               vec!["line 1, column 7: expected next token to be =, got NUMBER instead"]);
    assert_eq!(parse_errors("1 +"), vec!["no prefix parse function for EOF found"]);
    assert_eq!(parse_errors(";"), vec!["no prefix parse function for ; found"]);
}

#[test]
fn illegal_tokens_surface_as_diagnostics() {
    let errors = parse_errors("mut x = @;");
    assert!(errors.iter().any(|e| e.contains("no prefix parse function for ILLEGAL")),
            "got: {errors:?}");
}

#[test]
fn parsing_continues_after_an_error() {
    let mut parser = Parser::new(Lexer::new("mut = 1; mut y = 2;"));
    let program = parser.parse_program();
    assert!(!parser.errors().is_empty());
    assert!(program.statements
                   .iter()
                   .any(|s| matches!(s, Statement::Variable { name, .. } if name.value == "y")));
}

#[test]
fn printer_round_trips() {
    let sources = ["mut x = 5;return x;",
                   "if ((x < y)) { x } else { y }",
                   "while (x) { break; }",
                   "for (mut i = 0; i < 5; i = i + 1) { sum = sum + i; }",
                   "for (k, v in m) { outln(k); }",
                   "func add(a, b) => { return a + b; }",
                   "[1, 2][0]",
                   "{1: 2, \"a\": b}",
                   "a[0] = 5",
                   "try { throw 1; } catch (e) { e }",
                   "switch (x) { case 1: { y } default: { z } }"];

    for source in sources {
        let printed = parse_ok(source).to_string();
        let reparsed = {
            let mut parser = Parser::new(Lexer::new(&printed));
            let program = parser.parse_program();
            assert!(parser.errors().is_empty(),
                    "printed form failed to parse: {printed:?}, errors: {:?}",
                    parser.errors());
            program
        };
        assert_eq!(reparsed.to_string(), printed, "source: {source}");
    }
}

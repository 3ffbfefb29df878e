use sugu::{interpreter::value::core::Value, run_program};

fn eval(source: &str) -> Value {
    run_program(source).unwrap_or_else(|e| panic!("script failed: {e}\nsource: {source}"))
}

fn eval_err(source: &str) -> String {
    match run_program(source) {
        Ok(value) => panic!("expected failure, got {value}\nsource: {source}"),
        Err(error) => error.to_string(),
    }
}

fn assert_number(source: &str, want: f64) {
    assert_eq!(eval(source), Value::Number(want), "source: {source}");
}

fn assert_bool(source: &str, want: bool) {
    assert_eq!(eval(source), Value::Bool(want), "source: {source}");
}

fn assert_string(source: &str, want: &str) {
    assert_eq!(eval(source), Value::Str(want.to_string()), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval(source), Value::Null, "source: {source}");
}

fn assert_display(source: &str, want: &str) {
    assert_eq!(eval(source).to_string(), want, "source: {source}");
}

fn assert_error(source: &str, want: &str) {
    assert_eq!(eval_err(source), want, "source: {source}");
}

#[test]
fn number_expressions() {
    let tests = [("5", 5.0),
                 ("10", 10.0),
                 ("3.14", 3.14),
                 ("-5", -5.0),
                 ("-10", -10.0),
                 ("5 + 5 + 5 + 5 - 10", 10.0),
                 ("2 * 2 * 2 * 2 * 2", 32.0),
                 ("-50 + 100 + -50", 0.0),
                 ("5 * 2 + 10", 20.0),
                 ("5 + 2 * 10", 25.0),
                 ("50 / 2 * 2 + 10", 60.0),
                 ("2 * (5 + 10)", 30.0),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50.0)];

    for (source, want) in tests {
        assert_number(source, want);
    }
}

#[test]
fn modulo_follows_the_dividend_sign() {
    let tests = [("10 % 3", 1.0),
                 ("10 % 5", 0.0),
                 ("0 % 5", 0.0),
                 ("5.5 % 2.0", 1.5),
                 ("10.5 % 3", 1.5),
                 ("7.5 % 2.5", 0.0),
                 ("-10 % 3", -1.0),
                 ("-5.5 % 2.0", -1.5)];

    for (source, want) in tests {
        assert_number(source, want);
    }
}

#[test]
fn division_and_modulo_by_zero() {
    assert_error("10 / 0", "division by zero");
    assert_error("10 % 0", "division by zero");
    assert_error("5.5 % 0", "division by zero");
    assert_error("0 % 0", "division by zero");
}

#[test]
fn division_identity_holds() {
    // (a / b) * b + a % b stays within rounding error of a.
    let pairs = [(7.0, 3.0), (-7.0, 3.0), (10.5, 2.5), (1.0, 7.0)];

    for (a, b) in pairs {
        let source = format!("({a} / {b}) * {b} + {a} % {b}");
        let Value::Number(result) = eval(&source) else {
            panic!("expected a number from {source}");
        };
        assert!((result - a).abs() < 1e-9, "identity failed for {source}: {result}");
    }
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 <= 1", true),
                 ("2 >= 3", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("true == true", true),
                 ("false == false", true),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false),
                 ("\"a\" == \"a\"", true),
                 ("\"a\" != \"b\"", true),
                 ("null == null", true),
                 ("1 == \"1\"", false),
                 ("null == false", false)];

    for (source, want) in tests {
        assert_bool(source, want);
    }
}

#[test]
fn bang_complements_truthiness() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!null", true),
                 ("!5", false),
                 ("!0", false),
                 ("!\"\"", false),
                 ("!!true", true),
                 ("!!5", true)];

    for (source, want) in tests {
        assert_bool(source, want);
    }
}

#[test]
fn string_concatenation() {
    assert_string("\"Hello\" + \" \" + \"World\"", "Hello World");
    assert_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
}

#[test]
fn truthiness_in_conditions() {
    // Zero, empty strings and empty containers all count as true; only
    // null and false do not.
    assert_number("if (0) { 1 } else { 2 }", 1.0);
    assert_number("if (\"\") { 1 } else { 2 }", 1.0);
    assert_number("if ([]) { 1 } else { 2 }", 1.0);
    assert_number("if ({}) { 1 } else { 2 }", 1.0);
    assert_number("if (null) { 1 } else { 2 }", 2.0);
    assert_number("if (false) { 1 } else { 2 }", 2.0);
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn if_else_chains() {
    assert_number("if (1 < 2) { 10 } else { 20 }", 10.0);
    assert_number("mut x = 7; if (x < 5) { 1 } else if (x < 10) { 2 } else { 3 }", 2.0);
    assert_number("mut x = 12; if (x < 5) { 1 } else if (x < 10) { 2 } else { 3 }", 3.0);
}

#[test]
fn return_statements() {
    let tests = [("return 10;", 10.0),
                 ("return 10; 9;", 10.0),
                 ("return 2 * 5; 9;", 10.0),
                 ("9; return 2 * 5; 9;", 10.0),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10.0)];

    for (source, want) in tests {
        assert_number(source, want);
    }
}

#[test]
fn error_messages() {
    let tests = [("5 + true;", "type mismatch: NUMBER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: NUMBER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
                 ("foobar", "line 1, column 1: identifier not found: foobar")];

    for (source, want) in tests {
        assert_error(source, want);
    }
}

#[test]
fn error_positions() {
    assert_error("foobar", "line 1, column 1: identifier not found: foobar");
    assert_error("mut x = 10;\nfoobar", "line 2, column 1: identifier not found: foobar");
    assert_error("const x = 10;\nx = 20;",
                 "line 2, column 3: cannot reassign to const variable: x");
    assert_error("y = 10;", "line 1, column 1: identifier not found: y");
}

#[test]
fn variable_statements() {
    let tests = [("mut a = 5; a;", 5.0),
                 ("mut a = 5 * 5; a;", 25.0),
                 ("mut a = 5; mut b = a; b;", 5.0),
                 ("mut a = 5; mut b = a; mut c = a + b + 5; c;", 15.0),
                 ("const PI = 3.14; PI;", 3.14),
                 ("mut a = 1; mut a = 2; a;", 2.0)];

    for (source, want) in tests {
        assert_number(source, want);
    }
}

#[test]
fn const_bindings_reject_writes() {
    assert_error("const x = 1; x = 2;", "line 1, column 16: cannot reassign to const variable: x");
    assert_error("const a = [1, 2]; a[0] = 9;", "cannot modify const variable: a");
    assert_error("const m = {\"k\": 1}; m[\"k\"] = 2;", "cannot modify const variable: m");
}

#[test]
fn assignment_updates_the_defining_frame() {
    assert_number("mut x = 1; mut y = (x = 5); x + y;", 10.0);
    assert_number("mut x = 1; func bump() => { x = x + 1; }; bump(); bump(); x;", 3.0);
}

#[test]
fn function_application() {
    let tests = [("func identity(x) => { x; }; identity(5);", 5.0),
                 ("func identity(x) => { return x; }; identity(5);", 5.0),
                 ("func double(x) => { x * 2; }; double(5);", 10.0),
                 ("func add(x, y) => { x + y; }; add(5, 5);", 10.0),
                 ("func add(x, y) => { x + y; }; add(5 + 5, add(5, 5));", 20.0),
                 ("mut apply = func(x) => { x; }; apply(5);", 5.0),
                 ("func(x) => { x; }(5)", 5.0)];

    for (source, want) in tests {
        assert_number(source, want);
    }
}

#[test]
fn function_argument_arity_is_loose() {
    // Missing arguments bind to null, extra arguments are dropped.
    assert_null("func f(a, b) => { b; }; f(1);");
    assert_number("func f(a) => { a; }; f(1, 2);", 1.0);
}

#[test]
fn closures_capture_their_environment() {
    assert_number("func newAdder(x) => { func(y) => { x + y; }; }; \
                   mut addTwo = newAdder(2); addTwo(2);",
                  4.0);
    assert_number("func makeCounter() => { mut count = 0; \
                   func() => { count = count + 1; count; }; }; \
                   mut c = makeCounter(); c(); c(); c();",
                  3.0);
}

#[test]
fn recursion() {
    assert_number("func fact(n) => { if (n <= 1) { return 1; } n * fact(n - 1); }; fact(5);",
                  120.0);
    assert_number("func fib(n) => { if (n < 2) { return n; } fib(n - 1) + fib(n - 2); }; fib(10);",
                  55.0);
}

#[test]
fn calling_a_non_function_fails() {
    assert_error("mut x = 5; x();", "not a function: NUMBER");
    assert_error("\"s\"();", "not a function: STRING");
}

#[test]
fn while_loops() {
    assert_number("mut i = 0; mut sum = 0; while (i < 10) { sum = sum + i; i = i + 1; } sum;",
                  45.0);
    assert_number("mut i = 0; while (true) { i = i + 1; if (i == 5) { break; } } i;", 5.0);
    assert_number("mut sum = 0; mut i = 0; while (i < 10) { i = i + 1; \
                   if (i % 2 == 0) { continue; } sum = sum + i; } sum;",
                  25.0);
    assert_number("func f() => { while (true) { return 7; } }; f();", 7.0);
}

#[test]
fn for_loops() {
    assert_number("mut sum = 0; for (mut i = 1; i <= 10; i = i + 1) { sum = sum + i; } sum;",
                  55.0);
    // continue still runs the update expression.
    assert_number("mut sum = 0; for (mut i = 0; i < 5; i = i + 1) { \
                   if (i == 2) { continue; } sum = sum + i; } sum;",
                  8.0);
    assert_number("mut n = 0; for (mut i = 0; ; i = i + 1) { if (i == 3) { break; } n = n + 1; } n;",
                  3.0);
    assert_number("mut i = 0; for (; i < 4;) { i = i + 1; } i;", 4.0);
}

#[test]
fn for_init_scope_does_not_leak() {
    let message = eval_err("for (mut i = 0; i < 3; i = i + 1) { } i;");
    assert!(message.contains("identifier not found: i"), "got: {message}");
}

#[test]
fn for_in_loops() {
    assert_number("mut sum = 0; for (x in [1, 2, 3]) { sum = sum + x; } sum;", 6.0);
    assert_number("mut total = 0; for (i, x in [10, 20, 30]) { total = total + i; } total;", 3.0);
    assert_number("mut total = 0; for (i, x in [10, 20, 30]) { total = total + x; } total;", 60.0);
    assert_number("mut n = 0; for (k in {\"a\": 1, \"b\": 2}) { n = n + 1; } n;", 2.0);
    assert_number("mut n = 0; for (k, v in {\"a\": 1, \"b\": 2}) { n = n + v; } n;", 3.0);
    assert_number("mut n = 0; for (x in [1, 2, 3, 4]) { if (x == 3) { break; } n = n + x; } n;",
                  3.0);
}

#[test]
fn for_in_binds_loop_variables_const() {
    let message = eval_err("for (x in [1]) { x = 2; }");
    assert!(message.contains("cannot reassign to const variable: x"), "got: {message}");
}

#[test]
fn for_in_requires_a_container() {
    assert_error("for (x in 5) { }", "for-in requires ARRAY or MAP, got NUMBER");
    assert_error("for (x in \"ab\") { }", "for-in requires ARRAY or MAP, got STRING");
}

#[test]
fn switch_statements() {
    assert_number("switch (2) { case 1: { 10 } case 2: { 20 } case 3: { 30 } }", 20.0);
    assert_number("switch (9) { case 1: { 10 } default: { 99 } }", 99.0);
    assert_null("switch (9) { case 1: { 10 } }");
    assert_number("switch (\"b\") { case \"a\": { 1 } case \"b\": { 2 } }", 2.0);
    assert_number("mut x = 1 + 1; switch (x) { case 2: { x * 10 } }", 20.0);
    // An explicit break inside a case is consumed.
    assert_null("switch (1) { case 1: { break; } }");
    assert_null("switch (1) { default: { break; } case 1: { break; } }");
    // The first matching case wins and there is no fallthrough.
    assert_number("switch (1) { case 1: { 10 } case 1: { 20 } }", 10.0);
}

#[test]
fn logical_operators_return_operands() {
    assert_number("1 && 2", 2.0);
    assert_bool("true && false", false);
    assert_number("0 || 5", 0.0);
    assert_number("null || 5", 5.0);
    assert_null("false || null");
    assert_bool("false && true", false);
    assert_string("\"\" && \"right\"", "right");
}

#[test]
fn logical_operators_short_circuit() {
    assert_bool("mut called = false; func f() => { called = true; true; }; \
                 false && f(); called;",
                false);
    assert_bool("mut called = false; func f() => { called = true; true; }; \
                 1 || f(); called;",
                false);
}

#[test]
fn array_literals_and_indexing() {
    assert_display("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_number("[1, 2, 3][0]", 1.0);
    assert_number("[1, 2, 3][1 + 1]", 3.0);
    assert_number("mut a = [1, 2, 3]; a[2];", 3.0);
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
    assert_error("5[0]", "index operator not supported: NUMBER");
}

#[test]
fn arrays_have_reference_semantics() {
    assert_number("mut a = [1, 2]; mut b = a; b[0] = 99; a[0];", 99.0);
    assert_bool("mut a = [1]; mut b = a; a == b", true);
    assert_bool("[1] == [1]", false);
}

#[test]
fn array_index_assignment() {
    assert_number("mut a = [1, 2, 3]; a[1] = 20; a[1];", 20.0);
    assert_number("mut a = [1, 2, 3]; a[0] = 42;", 42.0);
    assert_error("mut a = [1]; a[5] = 0;", "array index out of bounds: 5 (length: 1)");
    assert_error("mut a = [1]; a[-1] = 0;", "array index out of bounds: -1 (length: 1)");
    assert_error("mut a = [1]; a[\"x\"] = 0;", "array index must be a number, got STRING");
    assert_error("mut s = \"abc\"; s[0] = \"x\";", "index assignment not supported: STRING");
}

#[test]
fn string_indexing_is_by_code_point() {
    assert_string("\"hello\"[1]", "e");
    assert_string("\"あいう\"[0]", "あ");
    assert_string("\"あいう\"[2]", "う");
    assert_string("\"hello世界\"[5]", "世");
    assert_null("\"hi\"[2]");
    assert_null("\"hi\"[-1]");
}

#[test]
fn len_counts_code_points_and_entries() {
    assert_number("len(\"hello\")", 5.0);
    assert_number("len(\"あいう\")", 3.0);
    assert_number("len(\"hello世界\")", 7.0);
    assert_number("len(\"\")", 0.0);
    assert_number("len([1, 2, 3])", 3.0);
    assert_number("len({})", 0.0);
    assert_number("len({\"a\": 1, \"b\": 2})", 2.0);
    assert_error("len(5)", "argument to `len` not supported, got NUMBER");
    assert_error("len()", "wrong number of arguments. got=0, want=1");
    assert_error("len(\"a\", \"b\")", "wrong number of arguments. got=2, want=1");
}

#[test]
fn map_literals_and_indexing() {
    assert_number("{\"a\": 1, \"b\": 2}[\"b\"]", 2.0);
    assert_number("{1: \"one\", 2: \"two\"}; {1: 10}[1]", 10.0);
    assert_string("{true: \"yes\"}[true]", "yes");
    assert_number("{\"a\" + \"b\": 2}[\"ab\"]", 2.0);
    assert_null("{\"a\": 1}[\"missing\"]");
    assert_number("mut key = \"k\"; {key: 5}[\"k\"]", 5.0);
    // Integral float keys and integer keys collide.
    assert_string("{1: \"one\"}[1.0]", "one");
}

#[test]
fn unhashable_map_keys_fail() {
    assert_error("{[1]: 2}", "unusable as hash key: ARRAY");
    assert_error("{{}: 2}", "unusable as hash key: MAP");
    assert_error("{\"a\": 1}[[1]]", "unusable as hash key: ARRAY");
    assert_error("mut m = {}; m[[1]] = 2;", "unusable as hash key: ARRAY");
}

#[test]
fn map_index_assignment_and_delete() {
    assert_number("mut m = {\"a\": 1, \"b\": 2}; delete(m, \"a\"); m[\"b\"]", 2.0);
    assert_null("mut m = {\"a\": 1, \"b\": 2}; delete(m, \"a\"); m[\"a\"]");
    assert_bool("mut m = {\"a\": 1}; delete(m, \"a\")", true);
    assert_bool("mut m = {\"a\": 1}; delete(m, \"missing\")", false);
    assert_number("mut m = {}; m[\"x\"] = 1; m[\"x\"] = 2; m[\"x\"]", 2.0);
    assert_number("mut m = {}; m[\"x\"] = 1; len(m)", 1.0);
    assert_error("delete(m, \"a\")", "line 1, column 8: identifier not found: m");
    assert_error("mut m = {}; delete(m, [1])", "unusable as map key: ARRAY");
    assert_error("delete(5, \"a\")", "argument to `delete` must be MAP, got NUMBER");
}

#[test]
fn map_rendering_is_sorted() {
    assert_display("{\"b\": 2, \"a\": 1, \"c\": 3}", "{a: 1, b: 2, c: 3}");
    assert_display("{}", "{}");
}

#[test]
fn push_pop_first_last_rest_copy() {
    assert_display("push([1, 2], 3)", "[1, 2, 3]");
    assert_number("mut a = [1]; push(a, 2); len(a);", 1.0);
    assert_display("pop([1, 2, 3])", "[1, 2]");
    assert_display("pop([1])", "[]");
    assert_null("pop([])");
    assert_number("mut a = [1, 2]; pop(a); len(a);", 2.0);
    assert_number("first([1, 2])", 1.0);
    assert_null("first([])");
    assert_number("last([1, 2])", 2.0);
    assert_null("last([])");
    assert_display("rest([1, 2, 3])", "[2, 3]");
    assert_display("rest([1])", "[]");
    assert_null("rest([])");
    assert_error("push(1, 2)", "argument to `push` must be ARRAY, got NUMBER");
    assert_error("pop(1)", "argument to `pop` must be ARRAY, got NUMBER");
}

#[test]
fn keys_and_values() {
    assert_number("len(keys({\"a\": 1, \"b\": 2}))", 2.0);
    assert_number("len(values({\"a\": 1, \"b\": 2}))", 2.0);
    assert_number("mut vs = values({\"a\": 5}); vs[0];", 5.0);
    assert_error("keys([1])", "argument to `keys` must be MAP, got ARRAY");
    assert_error("values(1)", "argument to `values` must be MAP, got NUMBER");
}

#[test]
fn type_tags() {
    let tests = [("type(1)", "NUMBER"),
                 ("type(\"\")", "STRING"),
                 ("type(true)", "BOOLEAN"),
                 ("type(null)", "NULL"),
                 ("type([])", "ARRAY"),
                 ("type({})", "MAP"),
                 ("type(func() => { 1; })", "FUNCTION"),
                 ("type(len)", "BUILTIN")];

    for (source, want) in tests {
        assert_string(source, want);
    }
}

#[test]
fn conversions() {
    assert_number("int(3.9)", 3.0);
    assert_number("int(-3.9)", -3.0);
    assert_number("int(\"42\")", 42.0);
    assert_number("int(\"3.7\")", 3.0);
    assert_number("int(true)", 1.0);
    assert_number("int(false)", 0.0);
    assert_error("int(\"abc\")", "cannot convert \"abc\" to int");
    assert_error("int([1])", "cannot convert ARRAY to int");
    assert_number("float(\"3.5\")", 3.5);
    assert_number("float(7)", 7.0);
    assert_error("float(\"x\")", "cannot convert \"x\" to float");
    assert_string("string(42)", "42");
    assert_string("string(4.5)", "4.5");
    assert_string("string(null)", "null");
    assert_string("string(true)", "true");
    assert_string("string([1, 2])", "[1, 2]");
}

#[test]
fn bool_conversion_diverges_from_truthiness() {
    // The coercion calls empty containers and zero false even though the
    // evaluator treats them as truthy in conditions.
    assert_bool("bool(0)", false);
    assert_bool("bool(1)", true);
    assert_bool("bool(\"\")", false);
    assert_bool("bool(\"x\")", true);
    assert_bool("bool(null)", false);
    assert_bool("bool(true)", true);
    assert_bool("bool([])", false);
    assert_bool("bool([1])", true);
    assert_bool("bool({})", false);
    assert_bool("bool({\"a\": 1})", true);
    assert_number("if ([]) { 1 } else { 2 }", 1.0);
}

#[test]
fn string_builtins() {
    assert_string("split(\"a,b,c\", \",\")[1]", "b");
    assert_number("len(split(\"a,b,c\", \",\"))", 3.0);
    assert_number("len(split(\"abc\", \"\"))", 3.0);
    assert_number("len(split(\"\", \"\"))", 0.0);
    assert_string("join([\"a\", \"b\", \"c\"], \"-\")", "a-b-c");
    assert_string("join([1, 2], \", \")", "1, 2");
    assert_string("trim(\"  padded  \")", "padded");
    assert_string("replace(\"aaa\", \"a\", \"b\")", "bbb");
    assert_string("substring(\"hello\", 1, 3)", "el");
    assert_string("substring(\"あいう\", 1, 3)", "いう");
    assert_number("indexOf(\"hello世界\", \"世\")", 5.0);
    assert_number("indexOf(\"abc\", \"z\")", -1.0);
    assert_string("toUpper(\"abc\")", "ABC");
    assert_string("toLower(\"ABC\")", "abc");
    assert_error("split(1, \",\")", "argument to `split` must be STRING, got NUMBER");
    assert_error("split(\"a\", 1)", "second argument to `split` must be STRING, got NUMBER");
    assert_error("replace(\"a\", \"b\")", "wrong number of arguments. got=2, want=3");
}

#[test]
fn substring_bounds() {
    assert_error("substring(\"ab\", -1, 1)", "substring start index out of range: -1 (length: 2)");
    assert_error("substring(\"ab\", 0, 5)", "substring end index out of range: 5 (length: 2)");
    assert_error("substring(\"ab\", 2, 1)",
                 "substring start index 2 is greater than end index 1");
}

#[test]
fn math_builtins() {
    assert_number("abs(-5)", 5.0);
    assert_number("abs(5)", 5.0);
    assert_number("floor(3.7)", 3.0);
    assert_number("floor(-3.2)", -4.0);
    assert_number("ceil(3.2)", 4.0);
    assert_number("round(3.5)", 4.0);
    assert_number("round(-3.5)", -4.0);
    assert_number("sqrt(9)", 3.0);
    assert_number("pow(2, 10)", 1024.0);
    assert_number("min(3, 1, 2)", 1.0);
    assert_number("max(3, 1, 2)", 3.0);
    assert_number("min(5)", 5.0);
    assert_error("sqrt(-4)", "cannot calculate square root of negative number: -4");
    assert_error("min()", "wrong number of arguments. got=0, want=1+");
    assert_error("min(1, \"a\")", "argument 2 to `min` must be NUMBER, got STRING");
    assert_error("abs(\"x\")", "argument to `abs` must be NUMBER, got STRING");
    assert_error("random(1)", "wrong number of arguments. got=1, want=0");
    assert_bool("mut r = random(); r >= 0 && r < 1", true);
}

#[test]
fn try_catch_preserves_thrown_values() {
    assert_string("try { throw \"boom\"; } catch (e) { \"caught: \" + e }", "caught: boom");
    assert_string("try { throw 42; } catch (e) { type(e) }", "NUMBER");
    assert_number("try { throw {\"code\": 404}; } catch (e) { e[\"code\"] }", 404.0);
    assert_number("try { 1 } catch (e) { 2 }", 1.0);
}

#[test]
fn try_catch_reifies_errors_as_strings() {
    assert_string("try { 10 / 0 } catch (e) { \"caught: \" + e }", "caught: division by zero");
    assert_string("try { 10 / 0 } catch (e) { type(e) }", "STRING");
    assert_string("try { missing } catch (e) { e }",
                  "line 1, column 7: identifier not found: missing");
    assert_string("try { len(5) } catch (e) { e }", "argument to `len` not supported, got NUMBER");
}

#[test]
fn try_catch_nesting_and_scope() {
    assert_number("try { try { throw 1; } catch (a) { throw 2; } } catch (b) { b }", 2.0);
    let message = eval_err("try { throw 5; } catch (e) { } e;");
    assert!(message.contains("identifier not found: e"), "got: {message}");
}

#[test]
fn throw_unwinds_through_calls_and_for_in() {
    assert_string("func boom() => { throw \"deep\"; }; try { boom(); } catch (e) { e }", "deep");
    assert_string("try { for (x in [1, 2]) { throw \"z\"; } } catch (e) { e }", "z");
    assert_string("try { for (k in {\"a\": 1}) { throw \"w\"; } } catch (e) { e }", "w");
}

#[test]
fn while_and_for_bodies_swallow_throws() {
    // A throw inside these two loop forms never reaches an enclosing
    // catch; the loop keeps running until its condition fails.
    assert_number("mut i = 0; \
                   try { while (i < 3) { i = i + 1; throw \"x\"; } } catch (e) { i = 99; } i;",
                  3.0);
    assert_number("mut n = 0; \
                   try { for (mut i = 0; i < 3; i = i + 1) { n = n + 1; throw \"y\"; } } \
                   catch (e) { n = 99; } n;",
                  3.0);
}

#[test]
fn uncaught_throws_are_reified() {
    assert_error("throw \"boom\";", "uncaught exception: boom");
    assert_error("throw 42;", "uncaught exception: 42");
    assert_error("throw [1, 2];", "uncaught exception: [1, 2]");
}

#[test]
fn number_rendering() {
    assert_display("42", "42");
    assert_display("-10", "-10");
    assert_display("0", "0");
    assert_display("3.14", "3.14");
    assert_display("100.5", "100.5");
    assert_display("10 / 4", "2.5");
    assert_display("1 / 3", "0.3333333333333333");
    assert_display("1000000000000000000000.0", "1e+21");
}

#[test]
fn function_rendering() {
    assert_display("func add(a, b) => { a + b; }", "func add(a, b) => { ... }");
    assert_display("func(x) => { x; }", "func(x) => { ... }");
    assert_display("string(len)", "builtin function");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_number("mut len = 5; len;", 5.0);
    assert_error("mut len = 5; len([1]);", "not a function: NUMBER");
}

#[test]
fn program_value_is_the_last_statement() {
    assert_number("5; 6;", 6.0);
    assert_number("mut x = 5;", 5.0);
    assert_null("");
    assert_null("mut x = 5; while (x > 0) { x = x - 1; break; }");
}

#[test]
fn file_round_trip() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("sugu-test-{}.txt", std::process::id()));
    let path = path.to_string_lossy().replace('\\', "/");

    let source = format!("writeFile(\"{path}\", \"hello\"); \
                          appendFile(\"{path}\", \" world\"); \
                          mut content = readFile(\"{path}\"); \
                          mut found = fileExists(\"{path}\"); \
                          content + \":\" + string(found)");
    assert_eq!(eval(&source), Value::Str("hello world:true".to_string()));
    std::fs::remove_file(std::path::Path::new(&path)).ok();

    assert_bool("fileExists(\"no-such-file-anywhere\")", false);
    assert_bool("fileExists(\".\")", false);
}

mod cases;

use simpleint::Value;

test_case!(
    single_integer,
    input: "42",
    value: Value::Int(42),
);

test_case!(
    int_with_leading_zeros_spaces,
    input: "  007  ",
    value: Value::Int(7),
);
// Leading zeros are part of the digit run

test_case!(
    multiplication_before_addition,
    input: "2 + 3 * 4",
    value: Value::Int(14),
);

test_case!(
    parentheses_override_precedence,
    input: "(2 + 3) * 4",
    value: Value::Int(20),
);

test_case!(
    subtraction_is_left_associative,
    input: "10 - 4 - 3",
    value: Value::Int(3),
);

test_case!(
    power_is_left_associative,
    input: "2 ^ 3 ^ 2",
    value: Value::Int(64),
);
// Same level as `*`, so (2 ^ 3) ^ 2

test_case!(
    power_shares_precedence_with_multiplication,
    input: "3 * 2 ^ 2",
    value: Value::Int(36),
);

test_case!(
    unary_minus,
    input: "-5 + 2",
    value: Value::Int(-3),
);

test_case!(
    nested_unary,
    input: "- - - 4",
    value: Value::Int(-4),
);

test_case!(
    unary_plus,
    input: "+(+7)",
    value: Value::Int(7),
);

test_case!(
    unary_binds_before_power,
    input: "-3 ^ 2",
    value: Value::Int(9),
);

test_case!(
    modulo,
    input: "10 % 3",
    value: Value::Int(1),
);

test_case!(
    modulo_negative_dividend,
    input: "-7 % 3",
    value: Value::Int(2),
);
// Result takes the sign of the divisor

test_case!(
    modulo_negative_divisor,
    input: "7 % -3",
    value: Value::Int(-2),
);

test_case!(
    true_division,
    input: "10 / 4",
    value: Value::Float(2.5),
);

test_case!(
    exact_division_is_still_float,
    input: "8 / 2",
    display: "4.0",
);

test_case!(
    float_promotes_through_addition,
    input: "1 / 2 + 1",
    value: Value::Float(1.5),
);

test_case!(
    negative_exponent,
    input: "2 ^ -1",
    value: Value::Float(0.5),
);

test_case!(
    float_modulo,
    input: "(15 / 2) % 2",
    value: Value::Float(1.5),
);

test_case!(
    largest_integer,
    input: "9223372036854775807",
    value: Value::Int(i64::MAX),
);

test_case!(
    smallest_integer_via_subtraction,
    input: "-9223372036854775807 - 1",
    value: Value::Int(i64::MIN),
);

test_case!(
    whitespace_everywhere,
    input: " \t( 1\n+ 2 ) *3 ",
    value: Value::Int(9),
);

test_case!(
    one_to_huge_power,
    input: "1 ^ 4294967296",
    value: Value::Int(1),
);
// Exponent wider than 32 bits on a base that cannot overflow

test_case!(
    zero_to_huge_power,
    input: "0 ^ 4294967296",
    value: Value::Int(0),
);

test_case!(
    minus_one_to_huge_even_power,
    input: "(-1) ^ 4294967296",
    value: Value::Int(1),
);

test_case!(
    minus_one_to_huge_odd_power,
    input: "(-1) ^ 4294967297",
    value: Value::Int(-1),
);

test_case!(
    two_to_huge_power,
    input: "2 ^ 4294967296",
    error: "E004",
);

test_case!(
    nesting_at_default_limit,
    input: &format!("{}1{}", "(".repeat(127), ")".repeat(127)),
    value: Value::Int(1),
);
// The default limit is 128 levels; the integer itself is the last one

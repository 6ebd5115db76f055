//! End-to-end scenarios through the public `Structure` API.

use hasse::{AlgebraError, Operation, Structure, StructureConfig};

fn reference() -> Structure {
    let s = Structure::new(8).unwrap();
    s.set_rule("bhgecea{d,f}").unwrap();
    s
}

// =============================================================================
// The reference rule
// =============================================================================

#[test]
fn reference_rule_positions() {
    let s = reference();
    let expected = [
        ('a', Some(6)),
        ('b', Some(0)),
        ('c', Some(4)),
        ('d', Some(7)),
        ('e', Some(5)),
        ('f', Some(7)),
        ('g', Some(2)),
        ('h', Some(1)),
    ];
    for (symbol, position) in expected {
        assert_eq!(s.element_position(symbol).unwrap(), position, "{symbol}");
    }
    assert_eq!(s.plus_one_rule_size(), 8);
    assert_eq!(s.plus_one_rule_outputs(7), vec!['d', 'f']);
    assert_eq!(s.elements(), ('a'..='h').collect::<Vec<_>>());
}

#[test]
fn reference_single_element() {
    let s = reference();
    assert_eq!(s.add_single('b', 'b').unwrap(), 'b');
    assert_eq!(s.format("d").unwrap(), "{d,f}");
    assert_eq!(s.format("f").unwrap(), "{d,f}");
}

#[test]
fn carry_counts_full_wraps() {
    let s = reference();
    // "ab" = 6·8 + 0 = 48; + 1 = 49 = 6·8 + 1: last digit steps b → h.
    assert_eq!(s.add("ab", "h").unwrap(), "ah");
    // 7 + 1 wraps once and carries into a new digit.
    assert_eq!(s.addition_carry('d', 'h').unwrap(), 1);
    assert_eq!(s.add("d", "h").unwrap(), "hb");
    // 63 + 63 = 126 = 1·64 + 7·8 + 6
    assert_eq!(s.add("dd", "dd").unwrap(), "h{d,f}a");
}

#[test]
fn signed_arithmetic() {
    let s = reference();
    assert_eq!(s.subtract("h", "hg").unwrap(), "-hh");
    assert_eq!(s.add("-hg", "hg").unwrap(), "b");
    assert_eq!(s.multiply("-g", "-c").unwrap(), "hb");
    assert_eq!(s.multiply("-g", "c").unwrap(), "-hb");
    assert_eq!(s.divide("-hg", "c").unwrap(), ("-g".to_string(), "-g".to_string()));
    assert_eq!(s.modulo("-hg", "c").unwrap(), "-g");
    // (-2)^5 = -32 = -(4·8)
    assert_eq!(s.power("-g", "e").unwrap(), "-cb");
}

#[test]
fn vacant_digits_feed_back_in() {
    let s = reference();
    // 10 + 1 = 11 = 1·8 + 3, and position 3 is vacant.
    let eleven = s.add("hg", "h").unwrap();
    assert_eq!(eleven, "h?");
    assert_eq!(s.add(&eleven, "b").unwrap(), "h?");
    assert_eq!(s.add(&eleven, "h").unwrap(), "hc");
    assert_eq!(s.subtract(&eleven, &eleven).unwrap(), "b");
    assert_eq!(s.format(&eleven).unwrap(), "h?");
}

#[test]
fn single_element_gcd_and_lcm() {
    let s = reference();
    assert_eq!(s.gcd_single('c', 'a').unwrap(), 'g');
    assert_eq!(s.lcm_single('g', 'c').unwrap(), 'c');
    assert_eq!(s.gcd_single('b', 'a').unwrap(), 'a');
    assert_eq!(s.lcm_single('b', 'a').unwrap(), 'b');
    assert_eq!(
        Structure::new(8).unwrap().gcd_single('a', 'b'),
        Err(AlgebraError::UninitializedStructure)
    );
}

#[test]
fn long_rule_multiplies_without_overflow() {
    let s = Structure::new(1).unwrap();
    s.set_rule(&"a".repeat(70_000)).unwrap();
    assert_eq!(s.plus_one_rule_size(), 70_000);
    // 'a' sits at 69_999; its square is 1 mod 70_000, a vacant position.
    assert_eq!(s.element_position('a').unwrap(), Some(69_999));
    assert_eq!(s.multiply_single('a', 'a').unwrap(), '?');
    assert_eq!(s.multiplication_carry('a', 'a').unwrap(), 69_998);
}

#[test]
fn gcd_and_lcm() {
    let s = reference();
    // gcd(12, 8) = 4, lcm(12, 8) = 24 = 3·8
    assert_eq!(s.gcd("hc", "hb").unwrap(), "c");
    // Position 3 is vacant, so its digit prints as the placeholder.
    assert_eq!(s.lcm("hc", "hb").unwrap(), "?b");
    assert_eq!(s.gcd("b", "b").unwrap(), "b");
    assert_eq!(s.lcm("b", "b"), Err(AlgebraError::DivisionByZero));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn errors_are_explicit() {
    let s = reference();
    assert_eq!(s.divide("h", "b"), Err(AlgebraError::DivisionByZero));
    assert_eq!(
        s.divide_single('h', 'g'),
        Err(AlgebraError::NotInvertible {
            divisor: 'g',
            cycle_length: 8
        })
    );
    assert!(matches!(
        s.power("g", "-h"),
        Err(AlgebraError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        s.add("hx", "b"),
        Err(AlgebraError::UnknownSymbol { symbol: 'x', .. })
    ));
    assert!(matches!(
        s.set_rule("bh{g"),
        Err(AlgebraError::InvalidRuleSyntax { .. })
    ));
    assert!(matches!(
        Structure::new(27),
        Err(AlgebraError::InvalidAlphabetSize { bits: 27, .. })
    ));
}

#[test]
fn uninitialized_structure() {
    let s = Structure::new(8).unwrap();
    assert_eq!(s.add("a", "b"), Err(AlgebraError::UninitializedStructure));
    assert_eq!(s.divide("a", "b"), Err(AlgebraError::UninitializedStructure));
    assert_eq!(s.element_position('a'), Ok(None));
    assert_eq!(s.plus_one_rule_size(), 0);
}

// =============================================================================
// Bounded mode
// =============================================================================

#[test]
fn bounded_mode_saturates() {
    let s = reference();
    s.set_bounded(true);
    s.set_width(2).unwrap();
    assert_eq!(s.max_value().unwrap(), "{d,f}{d,f}");
    assert_eq!(s.min_value().unwrap(), "-{d,f}{d,f}");

    let before = s.add("dd", "h").unwrap();
    assert_eq!(before, "{d,f}{d,f}");
    assert_eq!(s.subtract("-dd", "h").unwrap(), "-{d,f}{d,f}");
    assert_eq!(s.power("g", "hb").unwrap(), "{d,f}{d,f}");
    assert_eq!(s.add("hg", "h").unwrap(), "h?");

    s.set_bounded(false);
    assert_eq!(s.add("dd", "h").unwrap(), "hbb");
    // The earlier result is a value; toggling does not change it.
    assert_eq!(before, "{d,f}{d,f}");
}

// =============================================================================
// Tooling
// =============================================================================

#[test]
fn diagram_and_tables() {
    let s = reference();
    assert_eq!(
        s.diagram().unwrap().to_string(),
        "b (0) → h (1) → g (2) → c (4) → e (5) → a (6) → {d,f} (7) → (back to b)"
    );
    let div = s.table(Operation::Divide).unwrap();
    assert_eq!(div.cell('h', 'g').unwrap(), None);
    assert!(div.to_string().starts_with("Division table:"));
}

#[cfg(feature = "serde")]
#[test]
fn configured_from_toml() {
    let config = StructureConfig::from_toml_str(
        r#"
        bits = 4
        rule = "a-b-c-d"
        bounded = true
        width = 1
        "#,
    )
    .unwrap();
    let s = Structure::from_config(&config).unwrap();
    assert_eq!(s.add("c", "c").unwrap(), "d");
    assert_eq!(s.max_value().unwrap(), "d");
}

#[test]
fn configured_in_code() {
    let config = StructureConfig {
        rule: Some("{a,b}c".into()),
        ..StructureConfig::with_bits(3)
    };
    let s = Structure::from_config(&config).unwrap();
    assert_eq!(s.plus_one_rule_size(), 2);
    assert_eq!(s.add("c", "c").unwrap(), "c{a,b}");
}

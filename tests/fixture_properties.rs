//! Properties every generated fixture table must satisfy.

use color_fixtures::syntax::{function, Level, Value};
use color_fixtures::{number, Target, TestTable};

/// Split a canonical expected string into its function name, level,
/// channel texts and alpha text.
fn split_canonical(expected: &str) -> (&str, Level, Vec<&str>, Option<&str>) {
    let open = expected.find('(').expect("function syntax");
    let name = &expected[..open];
    let args = expected[open + 1..].strip_suffix(')').expect("closing parenthesis");
    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(", ").collect();
        let alpha = if name.ends_with('a') { parts.pop() } else { None };
        let name = name.strip_suffix('a').unwrap_or(name);
        (name, Level::Three, parts, alpha)
    } else {
        let (channels, alpha) = match args.split_once(" / ") {
            Some((channels, alpha)) => (channels, Some(alpha)),
            None => (args, None),
        };
        (name, Level::Four, channels.split(' ').collect(), alpha)
    }
}

fn reparse(text: &str) -> Value {
    match text {
        "none" => Value::None,
        _ => match text.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::text(text.to_string()),
        },
    }
}

/// Reformat a canonical expected string through the formatter.
fn reformat(expected: &str) -> String {
    let (name, level, channels, alpha) = split_canonical(expected);
    let channels: Vec<Value> = channels.into_iter().map(reparse).collect();
    let alpha = alpha.map(reparse);
    function(name, &channels, alpha.as_ref(), level)
}

fn all_tables() -> Vec<(Target, TestTable)> {
    Target::ALL.iter().map(|&target| (target, target.generate())).collect()
}

#[test]
fn test_canonical_forms_are_idempotent() {
    for (target, table) in all_tables() {
        for (test, expected) in table.iter() {
            if let Some(expected) = expected {
                assert_eq!(reformat(expected), expected, "{}: {}", target.name(), test);
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for target in Target::ALL {
        assert_eq!(target.generate(), target.generate(), "{}", target.name());
    }
}

#[test]
fn test_rounding_is_stable() {
    for value in [0.0, 17.5, 112.19999999999999, 21.249999949, 0.004 * 115.0, -112.5] {
        let first = number::channel(value);
        let second = number::channel(value);
        assert_eq!(first, second);
        assert_eq!(number::channel(first.parse().unwrap()), first);
    }
}

#[test]
fn test_expected_colors_never_carry_opaque_alpha() {
    for (target, table) in all_tables() {
        for (test, expected) in table.iter() {
            if let Some(expected) = expected {
                let (_, _, _, alpha) = split_canonical(expected);
                assert_ne!(alpha, Some("1"), "{}: {}", target.name(), test);
            }
        }
    }
}

#[test]
fn test_level_three_inputs_have_no_none() {
    for (target, table) in all_tables() {
        if target.level() == Level::Three {
            assert!(table.iter().all(|(test, _)| !test.contains("none")), "{}", target.name());
        }
    }
}

#[test]
fn test_rgb_expectations_for_rgb_targets() {
    for target in [
        Target::Keywords,
        Target::Keywords4,
        Target::Hexadecimal,
        Target::Hexadecimal4,
        Target::Hsl,
        Target::Hsl4,
        Target::Hwb4,
    ] {
        for (_, expected) in target.generate().iter() {
            if let Some(expected) = expected {
                assert!(
                    expected.starts_with("rgb(") || expected.starts_with("rgba("),
                    "{}: {}",
                    target.name(),
                    expected
                );
            }
        }
    }
}

#[test]
fn test_documented_examples() {
    let hsl = Target::Hsl.generate();
    assert_eq!(hsl.get("hsl(0, 0%, 0%)"), Some(Some("rgb(0, 0, 0)")));

    let hwb = Target::Hwb4.generate();
    assert_eq!(hwb.get("hwb(0 100 0)"), Some(Some("rgb(255, 255, 255)")));

    let keywords = Target::Keywords.generate();
    assert_eq!(keywords.get("transparent"), Some(Some("rgba(0, 0, 0, 0)")));
    assert_eq!(keywords.get("Black"), keywords.get("black"));
    assert_eq!(keywords.get("BLACK"), Some(Some("rgb(0, 0, 0)")));
    assert_eq!(keywords.get("bla/*bad*/ck"), Some(None));
    assert_eq!(keywords.get("-bla-ck"), Some(None));
}

#[test]
fn test_hwb_gray_collapse() {
    let hwb = Target::Hwb4.generate();
    for (test, expected) in hwb.iter() {
        let (_, _, channels, _) = split_canonical(test);
        let white: f64 = channels[1].parse().unwrap_or(0.0);
        let black: f64 = channels[2].parse().unwrap_or(0.0);
        if white + black >= 100.0 {
            let (_, _, rgb, _) = split_canonical(expected.unwrap());
            assert!(rgb[0] == rgb[1] && rgb[1] == rgb[2], "{} -> {:?}", test, expected);
        }
    }
}

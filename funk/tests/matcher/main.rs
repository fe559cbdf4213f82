use funk::matcher::{any_value, is_, is_a, not_, Matcher};
use funk::{all_of, any_of, args, contains_exactly, has_attr, params, Data, Mocks, Value};

#[test]
fn has_attr_reports_actual_attribute_value() {
    let matcher = has_attr!(width = 20, height = is_a::<i32>());
    let value = Value::from(Data::new().with("width", 20).with("height", "x"));

    let mut mismatch = Vec::new();
    assert!(!matcher.matches(&value, &mut mismatch));
    assert_eq!(
        vec!["got <value with attribute: height=\"x\">"],
        mismatch
    );

    assert!(matcher.is_match(&Data::new().with("width", 20).with("height", 10).into()));
}

#[test]
fn has_attr_in_expectation() {
    let mocks = Mocks::new();
    let canvas = mocks.mock_named("canvas");

    canvas
        .allows("draw")
        .unwrap()
        .with_args(params!(has_attr!(width = 20, height = is_a::<i32>())));

    canvas
        .invoke("draw", args!(Data::new().with("width", 20).with("height", 5)))
        .unwrap();

    let err = canvas
        .invoke("draw", args!(Data::new().with("width", 20).with("height", "x")))
        .unwrap_err();
    assert_eq!(
        "Unexpected invocation: canvas.draw(Data(height=\"x\", width=20))\n\
         The following expectations on canvas.draw did not match:\n    \
         canvas.draw(<value with attributes: height=<value of type: i32>, width=20>): arguments did not match\n        \
         <value with attributes: height=<value of type: i32>, width=20> [got <value with attribute: height=\"x\">]",
        err.to_string()
    );
}

#[test]
fn identity_matcher_distinguishes_equal_values() {
    let mocks = Mocks::new();
    let registry = mocks.mock_named("registry");
    let handler = Value::from(String::from("handler"));

    registry
        .expects("register")
        .unwrap()
        .with_args(params!(is_(handler.clone())));

    assert!(registry
        .invoke("register", args!(String::from("handler")))
        .is_err());
    registry.invoke("register", args!(handler)).unwrap();

    mocks.verify().unwrap();
}

#[test]
fn combinators_in_expectation() {
    let mocks = Mocks::new();
    let mock = mocks.mock_named("mock");

    mock.allows("set")
        .unwrap()
        .with_args(params!(
            all_of![is_a::<i32>(), not_(0)],
            any_of!["on", "off"],
            contains_exactly![1, any_value()]
        ));

    mock.invoke("set", args!(5, "off", vec![2, 1])).unwrap();
    assert!(mock.invoke("set", args!(0, "off", vec![2, 1])).is_err());
    assert!(mock.invoke("set", args!(5, "maybe", vec![2, 1])).is_err());
    assert!(mock.invoke("set", args!(5, "on", vec![2, 2])).is_err());
}

#[test]
fn mismatch_of_combinators() {
    let mut mismatch = Vec::new();

    assert!(!not_(any_value()).matches(&1.into(), &mut mismatch));
    assert!(!any_of![1, 2].matches(&3.into(), &mut mismatch));
    assert!(!contains_exactly![1, 2].matches(&vec![1].into(), &mut mismatch));

    assert_eq!(
        vec![
            "matched: <any value>",
            "did not match any of: (1), (2)",
            "iterable did not contain element: 2 (got: [1])",
        ],
        mismatch
    );
}

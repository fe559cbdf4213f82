use funk::{args, Error, Mocks};

#[test]
fn unbounded_call_before_bounded_call() {
    let mocks = Mocks::new();
    let ordering = mocks.sequence();
    let file = mocks.mock_named("file");

    file.allows("write").unwrap().in_sequence(&ordering);
    file.expects("close").unwrap().in_sequence(&ordering);

    for _ in 0..3 {
        file.invoke("write", args!("data")).unwrap();
    }
    file.invoke("close", args!()).unwrap();

    let err = file.invoke("write", args!("data")).unwrap_err();
    assert!(matches!(err, Error::NoMoreCalls { .. }));
    assert_eq!(
        "Invocation out of order. Expected no more calls in sequence, but got file.write.",
        err.to_string()
    );

    mocks.verify().unwrap();
}

#[test]
fn skipping_an_unbounded_call_is_allowed() {
    let mocks = Mocks::new();
    let ordering = mocks.sequence();
    let file = mocks.mock_named("file");

    file.allows("write").unwrap().in_sequence(&ordering);
    file.expects("close").unwrap().in_sequence(&ordering);

    file.invoke("close", args!()).unwrap();

    assert!(matches!(
        file.invoke("write", args!()).unwrap_err(),
        Error::NoMoreCalls { .. }
    ));
}

#[test]
fn bounded_calls_must_be_in_order() {
    let mocks = Mocks::new();
    let ordering = mocks.sequence();
    let file = mocks.mock_named("file");

    file.expects("open").unwrap().in_sequence(&ordering);
    file.expects("close").unwrap().in_sequence(&ordering);

    let err = file.invoke("close", args!()).unwrap_err();
    assert_eq!(
        "Invocation out of order. Expected file.open, but got file.close.",
        err.to_string()
    );
}

#[test]
fn sequence_across_mocks() {
    let mocks = Mocks::new();
    let ordering = mocks.sequence();
    let lock = mocks.mock_named("lock");
    let file = mocks.mock_named("file");

    lock.expects("acquire").unwrap().in_sequence(&ordering);
    file.expects("write").unwrap().in_sequence(&ordering);
    lock.expects("release").unwrap().in_sequence(&ordering);

    lock.invoke("acquire", args!()).unwrap();
    file.invoke("write", args!()).unwrap();
    lock.invoke("release", args!()).unwrap();

    mocks.verify().unwrap();
}

#[test]
fn call_in_two_sequences() {
    let mocks = Mocks::new();
    let first = mocks.sequence();
    let second = mocks.sequence();
    let mock = mocks.mock_named("mock");

    mock.expects("a").unwrap().in_sequence(&first);
    mock.expects("b").unwrap().in_sequence(&second);
    mock.expects("c")
        .unwrap()
        .in_sequence(&first)
        .in_sequence(&second);

    mock.invoke("a", args!()).unwrap();
    mock.invoke("b", args!()).unwrap();
    mock.invoke("c", args!()).unwrap();

    mocks.verify().unwrap();
}

#[test]
fn call_in_two_sequences_checks_both() {
    let mocks = Mocks::new();
    let first = mocks.sequence();
    let second = mocks.sequence();
    let mock = mocks.mock_named("mock");

    mock.expects("a").unwrap().in_sequence(&first);
    mock.expects("b").unwrap().in_sequence(&second);
    mock.expects("c")
        .unwrap()
        .in_sequence(&first)
        .in_sequence(&second);

    mock.invoke("a", args!()).unwrap();

    assert_eq!(
        "Invocation out of order. Expected mock.b, but got mock.c.",
        mock.invoke("c", args!()).unwrap_err().to_string()
    );
}

#[test]
fn unbounded_call_in_two_sequences_is_checked_in_declaration_order() {
    let mocks = Mocks::new();
    let first = mocks.sequence();
    let second = mocks.sequence();
    let mock = mocks.mock_named("mock");

    mock.allows("shared")
        .unwrap()
        .in_sequence(&first)
        .in_sequence(&second);
    mock.expects("x").unwrap().in_sequence(&first);
    mock.expects("y").unwrap().in_sequence(&second);
    mock.expects("z").unwrap().in_sequence(&second);

    mock.invoke("shared", args!()).unwrap();
    mock.invoke("x", args!()).unwrap();
    mock.invoke("y", args!()).unwrap();

    let err = mock.invoke("shared", args!()).unwrap_err();
    assert_eq!(
        "Invocation out of order. Expected no more calls in sequence, but got mock.shared.",
        err.to_string()
    );
}

#[test]
fn unbounded_call_in_two_sequences_reports_first_sequence_it_was_added_to() {
    let mocks = Mocks::new();
    let first = mocks.sequence();
    let second = mocks.sequence();
    let mock = mocks.mock_named("mock");

    mock.allows("shared")
        .unwrap()
        .in_sequence(&second)
        .in_sequence(&first);
    mock.expects("x").unwrap().in_sequence(&first);
    mock.expects("y").unwrap().in_sequence(&second);
    mock.expects("z").unwrap().in_sequence(&second);

    mock.invoke("shared", args!()).unwrap();
    mock.invoke("x", args!()).unwrap();
    mock.invoke("y", args!()).unwrap();

    let err = mock.invoke("shared", args!()).unwrap_err();
    assert!(matches!(err, Error::OutOfOrder { .. }));
    assert_eq!(
        "Invocation out of order. Expected mock.z, but got mock.shared.",
        err.to_string()
    );
}

#[test]
fn rejected_call_in_second_sequence_still_consumes_the_call() {
    let mocks = Mocks::new();
    let first = mocks.sequence();
    let second = mocks.sequence();
    let mock = mocks.mock_named("mock");

    mock.expects("b").unwrap().in_sequence(&second);
    let c = mock
        .expects("c")
        .unwrap()
        .in_sequence(&first)
        .in_sequence(&second);

    let err = mock.invoke("c", args!()).unwrap_err();
    assert_eq!(
        "Invocation out of order. Expected mock.b, but got mock.c.",
        err.to_string()
    );
    assert!(c.is_satisfied());

    let err = mock.invoke("c", args!()).unwrap_err();
    assert_eq!(
        "Unexpected invocation: mock.c()\n\
         The following expectations on mock.c did not match:\n    \
         mock.c: expectation has already been satisfied",
        err.to_string()
    );

    assert_eq!(
        "Not all expectations were satisfied. Expected call: mock.b",
        mocks.verify().unwrap_err().to_string()
    );
}

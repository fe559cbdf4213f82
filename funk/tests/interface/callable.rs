use funk::{args, params, Error, Mocks};

#[test]
fn callable_mock() {
    let mocks = Mocks::new();
    let printer = mocks.mock_named("printer");

    printer
        .expects_call()
        .with_args(params!("hello"))
        .returns("bye");

    let ret = printer.call(args!("hello")).unwrap();
    assert_eq!(Some("bye".to_owned()), ret.get::<String>());

    let err = printer.call(args!("hello")).unwrap_err();
    let Error::UnexpectedInvocation {
        invocation,
        target,
        candidates,
    } = err
    else {
        panic!("Unexpected error: {err:?}");
    };

    assert_eq!("printer(\"hello\")", invocation);
    assert_eq!("printer", target);
    assert_eq!(1, candidates.len());
    assert_eq!("expectation has already been satisfied", candidates[0].reason);

    mocks.verify().unwrap();
}

#[test]
fn callable_mock_without_expectations() {
    let printer = Mocks::new().mock_named("printer");

    assert_eq!(
        "Unexpected invocation: printer()\nNo expectations set.",
        printer.call(args!()).unwrap_err().to_string()
    );
}

#[test]
fn unsatisfied_direct_call() {
    let mocks = Mocks::new();
    let printer = mocks.mock_named("printer");

    printer.allows_call();
    mocks.verify().unwrap();

    printer.expects_call();
    assert_eq!(
        "Not all expectations were satisfied. Expected call: printer",
        mocks.verify().unwrap_err().to_string()
    );
}

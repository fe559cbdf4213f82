use funk::matcher::any_value;
use funk::{args, params, Error, Mocks};

#[test]
fn returns_configured_value() {
    let mocks = Mocks::new();
    let database = mocks.mock_named("database");

    database
        .expects("save")
        .unwrap()
        .with_args(params!("x"))
        .returns("ok");

    let ret = database.invoke("save", args!("x")).unwrap();
    assert_eq!(Some("ok".to_owned()), ret.get::<String>());

    let err = database.invoke("save", args!("y")).unwrap_err();
    assert_eq!(
        "Unexpected invocation: database.save(\"y\")\n\
         The following expectations on database.save did not match:\n    \
         database.save(\"x\"): expectation has already been satisfied",
        err.to_string()
    );

    mocks.verify().unwrap();
}

#[test]
fn reports_wrong_arguments() {
    let mocks = Mocks::new();
    let database = mocks.mock_named("database");

    database
        .allows("save")
        .unwrap()
        .with_args(params!("x"))
        .returns("ok");

    let err = database.invoke("save", args!("y")).unwrap_err();
    assert_eq!(
        "Unexpected invocation: database.save(\"y\")\n\
         The following expectations on database.save did not match:\n    \
         database.save(\"x\"): arguments did not match\n        \
         \"x\" [got \"y\"]",
        err.to_string()
    );
}

#[test]
fn unsatisfied_expectation_fails_verification() {
    let mocks = Mocks::new();
    let mock = mocks.mock();

    mock.expects("save").unwrap();

    assert_eq!(
        "Not all expectations were satisfied. Expected call: unnamed.save",
        mocks.verify().unwrap_err().to_string()
    );
}

#[test]
fn expects_exactly_n_times() {
    let mocks = Mocks::new();
    let mock = mocks.mock_named("counter");

    mock.expects("tick").unwrap().times(3);

    for _ in 0..3 {
        assert!(mocks.verify().is_err());
        mock.invoke("tick", args!()).unwrap();
    }

    mocks.verify().unwrap();
    assert!(matches!(
        mock.invoke("tick", args!()).unwrap_err(),
        Error::UnexpectedInvocation { .. }
    ));
}

#[test]
fn allowed_calls_are_optional() {
    let mocks = Mocks::new();
    let mock = mocks.mock_named("cache");

    mock.allows("get").unwrap().returns(1);

    mocks.verify().unwrap();

    for _ in 0..10 {
        mock.invoke("get", args!()).unwrap();
    }

    mocks.verify().unwrap();
}

#[test]
fn keyword_arguments() {
    let mocks = Mocks::new();
    let mock = mocks.mock_named("client");

    mock.allows("send")
        .unwrap()
        .with_args(params!(any_value(), retries = 3, timeout = any_value()))
        .returns(true);

    assert_eq!(
        Some(true),
        mock.invoke("send", args!("ping", timeout = 5, retries = 3))
            .unwrap()
            .get::<bool>()
    );

    let err = mock.invoke("send", args!("ping", retries = 3)).unwrap_err();
    assert!(err
        .to_string()
        .ends_with("client.send(<any value>, retries=3, timeout=<any value>): missing keyword arguments: timeout"));
}

#[test]
fn builder_names_can_be_mocked() {
    let mocks = Mocks::new();
    let mock = mocks.mock_named("builder");

    mock.expects("expects").unwrap().returns(1);
    mock.expects("with_args").unwrap().returns(2);

    assert_eq!(Some(1), mock.invoke("expects", args!()).unwrap().get::<i32>());
    assert_eq!(Some(2), mock.invoke("with_args", args!()).unwrap().get::<i32>());

    mocks.verify().unwrap();
}

#[test]
fn invokes_computes_return_value() {
    let mocks = Mocks::new();
    let math = mocks.mock_named("math");

    math.allows("double").unwrap().invokes(|args: &funk::Args| {
        args.get(0).and_then(|v| v.get::<i32>()).unwrap_or_default() * 2
    });

    assert_eq!(Some(8), math.invoke("double", args!(4)).unwrap().get::<i32>());
}

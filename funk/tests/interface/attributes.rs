use funk::mock::Attr;
use funk::{args, has_attr, params, Data, Mocks, Value};

#[test]
fn plain_attributes() {
    let mocks = Mocks::new();
    let user = mocks.mock_named("user");

    user.set_attr("name", "Bob").set_attr("age", 42);

    assert_eq!(Some(Value::from("Bob")), user.attr("name"));
    assert_eq!(Some(Value::from(42)), user.attr("age"));
    assert_eq!(None, user.attr("email"));

    let Some(Attr::Value(age)) = user.get("age") else {
        panic!("Expected plain attribute");
    };
    assert_eq!(Some(42), age.get::<i32>());
}

#[test]
fn mock_attributes_can_be_matched() {
    let mocks = Mocks::new();
    let user = mocks.mock_named("user");
    let store = mocks.mock_named("store");

    user.set_attr("name", "Bob");
    store
        .expects("add")
        .unwrap()
        .with_args(params!(has_attr!(name = "Bob")));

    store.invoke("add", args!(user)).unwrap();

    mocks.verify().unwrap();
}

#[test]
fn data_as_return_value() {
    let mocks = Mocks::new();
    let http = mocks.mock_named("http");

    http.allows("get")
        .unwrap()
        .returns(Data::new().with("status", 200).with("body", "hello"));

    let response = http.invoke("get", args!("/")).unwrap();

    assert_eq!(Some(Value::from(200)), response.attr("status"));
    assert_eq!(
        "Data(body=\"hello\", status=200)",
        format!("{response:?}")
    );
}

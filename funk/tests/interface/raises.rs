use std::sync::Arc;

use funk::{args, Error, Mocks, Raised};

#[derive(Debug, thiserror::Error)]
#[error("disk is full")]
struct DiskFull;

#[test]
fn raises_configured_error() {
    let mocks = Mocks::new();
    let disk = mocks.mock_named("disk");

    disk.expects("write").unwrap().raises(DiskFull);

    let err = disk.invoke("write", args!(b'x')).unwrap_err();

    assert_eq!("disk is full", err.to_string());
    assert!(err.raised().unwrap().downcast_ref::<DiskFull>().is_some());

    mocks.verify().unwrap();
}

#[test]
fn raised_error_keeps_its_identity() {
    let mocks = Mocks::new();
    let disk = mocks.mock_named("disk");

    let error = Raised::from_arc(Arc::new(DiskFull));
    disk.allows("write").unwrap().raises(error.clone());

    for _ in 0..2 {
        let Error::Raised(raised) = disk.invoke("write", args!()).unwrap_err() else {
            panic!("Expected raised error");
        };

        assert!(raised.ptr_eq(&error));
    }
}

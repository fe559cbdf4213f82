pub mod action;
pub mod args;
pub mod base;
pub mod call;
pub mod call_count;
pub mod error;
pub mod matcher;
pub mod misc;
pub mod mock;
pub mod mocks;
pub mod sequence;
pub mod value;

pub use funk_macros::with_mocks;

pub use action::{Action, Raised};
pub use args::{Args, Params};
pub use base::Base;
pub use call::Call;
pub use call_count::CallCount;
pub use error::{Candidate, Error};
pub use matcher::Matcher;
pub use mock::Mock;
pub use mocks::Mocks;
pub use sequence::Sequence;
pub use value::{Data, Object, Value};

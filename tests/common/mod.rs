#![allow(dead_code, unused_imports)]

pub use rulesort_test_utils::builders;
pub use rulesort_test_utils::recording_executor::RecordingExecutor;
pub use rulesort_test_utils::{init_tracing, with_timeout};

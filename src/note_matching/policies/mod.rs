pub mod result_policy;

pub use result_policy::ResultPolicy;

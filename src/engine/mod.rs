pub mod aggregate;
pub mod critical;
pub mod greedy;
pub mod metrics;
pub mod subject_plan;

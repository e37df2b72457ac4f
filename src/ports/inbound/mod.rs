/// Inbound ports (Driving ports) - Application entry points
///
/// These ports define the interfaces that external adapters (CLI, API,
/// schedulers) use to trigger the application's use cases.
pub mod analysis_port;

pub use analysis_port::AnalysisPort;

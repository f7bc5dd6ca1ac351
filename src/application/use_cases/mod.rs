pub mod run_audit;

pub use run_audit::RunAuditUseCase;

mod check_soa_tolerance;
mod curate_resolvers;
mod refresh_tolerance_list;
mod verify_resolvers;

pub use check_soa_tolerance::{CheckSoaToleranceUseCase, ToleranceReport};
pub use curate_resolvers::{CurateResolversUseCase, CurationSummary};
pub use refresh_tolerance_list::RefreshToleranceListUseCase;
pub use verify_resolvers::{VerificationReport, VerifyResolversUseCase};

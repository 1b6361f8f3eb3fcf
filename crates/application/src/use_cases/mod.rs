pub mod verification;

pub use verification::{
    CheckSoaToleranceUseCase, CurateResolversUseCase, CurationSummary, RefreshToleranceListUseCase,
    ToleranceReport, VerificationReport, VerifyResolversUseCase,
};

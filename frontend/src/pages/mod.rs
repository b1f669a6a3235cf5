pub mod password_reset;
pub mod profile_summary;

pub use password_reset::PasswordResetPage;
pub use profile_summary::ProfileSummaryPage;

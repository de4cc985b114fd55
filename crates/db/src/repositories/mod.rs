pub mod swift_bank_repo;

pub use swift_bank_repo::SwiftBankRepo;

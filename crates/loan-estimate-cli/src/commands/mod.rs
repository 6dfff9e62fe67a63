pub mod loan;
pub mod partners;
pub mod receipt;

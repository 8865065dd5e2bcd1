pub mod contract;
pub mod execute;
pub mod helpers;
pub mod keeper;
pub mod ledger;
pub mod queries;
pub mod state;

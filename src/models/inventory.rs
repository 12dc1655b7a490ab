use super::account::Account;
use super::iam::IamUser;

/// Everything gathered for one organization during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationInventory {
    pub label: String,
    pub accounts: Vec<Account>,
    pub users: Vec<IamUser>,
}

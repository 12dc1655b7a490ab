use crate::models::{Account, OrganizationInventory, NO_DESCRIPTION};

pub const PROVENANCE_NOTICE: &str = "> This page is automatically generated. Any manual changes will be lost. See: https://github.com/GlueOps/getoutline-docs-update-aws-organizations ";

const NO_ACCESS_KEY: &str = "No Access Key";

/// Render one organization's inventory as a Markdown page.
///
/// Pure: the same inventory always renders to the same bytes. Accounts are
/// listed by ascending join time (ties keep input order); users keep input
/// order.
pub fn render_report(inventory: &OrganizationInventory) -> String {
    let mut accounts: Vec<&Account> = inventory.accounts.iter().collect();
    accounts.sort_by_key(|a| a.joined_at);

    let mut report = String::new();
    report.push_str(PROVENANCE_NOTICE);
    report.push_str("\n\n");
    report.push_str(&format!("# AWS ROOT Organization Details for {}\n\n", inventory.label));

    report.push_str("| AWS Account ID | Account Name | Description | Account Email | Created Date |\n");
    report.push_str("|----------------|--------------|-------------|---------------|--------------|\n");
    for account in accounts {
        report.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            account.id,
            account.name,
            account.description,
            account.email,
            account.joined_at.format("%Y-%m-%d"),
        ));
    }

    report.push_str("\n\n| IAM User Name | Access Key ID | Description |\n");
    report.push_str("|---------------|---------------|-------------|\n");
    for user in &inventory.users {
        if user.access_keys.is_empty() {
            report.push_str(&format!("| {} | {} | {} |\n", user.user_name, NO_ACCESS_KEY, NO_DESCRIPTION));
            continue;
        }
        for key in &user.access_keys {
            report.push_str(&format!("| {} | {} | {} |\n", user.user_name, key.key_id, key.description));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{AccessKeyRef, IamUser};

    fn account(id: &str, y: i32, m: u32, d: u32, description: &str) -> Account {
        Account {
            id: id.to_string(),
            name: format!("{} account", id),
            email: format!("{}@example.com", id.to_lowercase()),
            joined_at: Utc.with_ymd_and_hms(y, m, d, 8, 30, 0).unwrap(),
            description: description.to_string(),
        }
    }

    fn inventory(accounts: Vec<Account>, users: Vec<IamUser>) -> OrganizationInventory {
        OrganizationInventory { label: "GlueOps Prod".to_string(), accounts, users }
    }

    #[test]
    fn test_render_full_layout() {
        let inv = inventory(
            vec![account("B", 2023, 5, 1, "No Description"), account("A", 2021, 1, 10, "Prod")],
            vec![
                IamUser {
                    user_name: "alice".into(),
                    access_keys: vec![
                        AccessKeyRef { key_id: "AKIA1".into(), description: "ci".into() },
                        AccessKeyRef { key_id: "AKIA2".into(), description: "No Description".into() },
                    ],
                },
                IamUser { user_name: "bob".into(), access_keys: vec![] },
            ],
        );

        let expected = "\
> This page is automatically generated. Any manual changes will be lost. See: https://github.com/GlueOps/getoutline-docs-update-aws-organizations \n\
\n\
# AWS ROOT Organization Details for GlueOps Prod\n\
\n\
| AWS Account ID | Account Name | Description | Account Email | Created Date |\n\
|----------------|--------------|-------------|---------------|--------------|\n\
| A | A account | Prod | a@example.com | 2021-01-10 |\n\
| B | B account | No Description | b@example.com | 2023-05-01 |\n\
\n\
\n\
| IAM User Name | Access Key ID | Description |\n\
|---------------|---------------|-------------|\n\
| alice | AKIA1 | ci |\n\
| alice | AKIA2 | No Description |\n\
| bob | No Access Key | No Description |\n";

        assert_eq!(render_report(&inv), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let inv = inventory(
            vec![account("X", 2022, 3, 3, "x"), account("Y", 2020, 2, 2, "y")],
            vec![IamUser { user_name: "svc".into(), access_keys: vec![] }],
        );
        assert_eq!(render_report(&inv), render_report(&inv.clone()));
    }

    #[test]
    fn test_render_sorts_accounts_regardless_of_input_order() {
        let inv = inventory(
            vec![
                account("C", 2024, 1, 1, "c"),
                account("A", 2019, 1, 1, "a"),
                account("B", 2021, 1, 1, "b"),
            ],
            vec![],
        );
        let report = render_report(&inv);
        let a = report.find("| A |").unwrap();
        let b = report.find("| B |").unwrap();
        let c = report.find("| C |").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_render_keeps_user_order() {
        let inv = inventory(vec![], vec![
            IamUser { user_name: "zed".into(), access_keys: vec![] },
            IamUser { user_name: "amy".into(), access_keys: vec![] },
        ]);
        let report = render_report(&inv);
        assert!(report.find("| zed |").unwrap() < report.find("| amy |").unwrap());
    }

    #[test]
    fn test_render_starts_with_provenance_notice() {
        let report = render_report(&inventory(vec![], vec![]));
        assert!(report.starts_with(PROVENANCE_NOTICE));
    }

    #[test]
    fn test_render_user_without_keys_is_one_row() {
        let inv = inventory(vec![], vec![IamUser { user_name: "nokeys".into(), access_keys: vec![] }]);
        let report = render_report(&inv);
        assert_eq!(report.matches("| nokeys |").count(), 1);
        assert!(report.contains("| nokeys | No Access Key | No Description |\n"));
    }
}

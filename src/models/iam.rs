/// An IAM user and the access keys it holds, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IamUser {
    pub user_name: String,
    pub access_keys: Vec<AccessKeyRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyRef {
    pub key_id: String,
    pub description: String,
}

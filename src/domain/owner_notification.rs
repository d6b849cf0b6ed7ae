/// The body of a `notifyOwner` call.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerNotification {
    pub title: String,
    pub content: String,
}

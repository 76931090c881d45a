use super::types::response;
use crate::modules::chef::discovery;

pub async fn service() -> response::Response {
    response::Success::Categories(discovery::CATEGORIES.to_vec())
}

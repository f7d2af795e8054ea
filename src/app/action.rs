use crate::app::event::RequestId;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Lookup { request_id: RequestId, word: String },
    Quit,
}

use thiserror::Error;

use crate::dom::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("element {0:?} is not part of the document")]
    UnknownElement(ElementId),
}
